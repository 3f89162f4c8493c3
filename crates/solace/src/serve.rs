// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `solace serve` command implementation.

use std::sync::Arc;

use solace_agent::{install_signal_handler, Agent};
use solace_config::SolaceConfig;
use solace_core::SolaceError;
use solace_gateway::{start_server, GatewayState};
use tracing::info;

/// Runs the HTTP gateway until SIGINT or SIGTERM.
pub async fn run_serve(config: SolaceConfig) -> Result<(), SolaceError> {
    crate::init_tracing(&config.agent.log_level);

    info!(name = %config.agent.name, "starting solace serve");

    let agent = Arc::new(Agent::from_config(&config).await);
    let shutdown = install_signal_handler();

    start_server(&config.gateway, GatewayState::new(agent), shutdown).await?;

    info!("solace serve stopped");
    Ok(())
}

// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Solace companion.
//!
//! Exposes the shared [`Agent`](solace_agent::Agent) over a small JSON API:
//! chat, meditation, insights, check-in, farewell and a health probe.

pub mod handlers;
pub mod server;

pub use server::{build_router, start_server, GatewayState};

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "solace";

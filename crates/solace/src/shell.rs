// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `solace shell` command implementation.
//!
//! An interactive session with readline history. Plain lines go through the
//! agent; a handful of slash commands reach the fixed agent operations.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use solace_agent::Agent;
use solace_config::SolaceConfig;
use solace_core::SolaceError;
use solace_dialogue::content::{FAREWELL_BANNER, INTERRUPT_MESSAGE};
use solace_memory::Insights;

/// What a line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand<'a> {
    Empty,
    Quit,
    Meditation,
    Insights,
    CheckIn,
    Message(&'a str),
}

fn parse_line(line: &str) -> ShellCommand<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ShellCommand::Empty;
    }
    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "bye" | "/quit" | "/exit" => ShellCommand::Quit,
        "/meditation" => ShellCommand::Meditation,
        "/insights" => ShellCommand::Insights,
        "/checkin" => ShellCommand::CheckIn,
        _ => ShellCommand::Message(trimmed),
    }
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    let joined: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    if joined.is_empty() {
        "none yet".to_string()
    } else {
        joined.join(", ")
    }
}

fn format_insights(insights: &Insights) -> String {
    format!(
        "Interactions this session: {}\nEmotions expressed: {}\nTopics discussed: {}\nEmotional trend: {}",
        insights.total_interactions,
        join(&insights.emotions_expressed),
        join(&insights.topics_discussed),
        insights.emotional_trend,
    )
}

fn print_agent(text: &str) {
    println!("\n{} {text}", "Agent:".cyan().bold());
}

/// Runs the `solace shell` interactive session.
pub async fn run_shell(config: SolaceConfig) -> Result<(), SolaceError> {
    crate::init_tracing(&config.agent.log_level);

    let agent = Agent::from_config(&config).await;

    let mut rl = DefaultEditor::new()
        .map_err(|e| SolaceError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", agent.greeting());
    println!(
        "\nCommands: {} {} {}, or {} to leave.",
        "/meditation".yellow(),
        "/insights".yellow(),
        "/checkin".yellow(),
        "quit".yellow()
    );

    let prompt = format!("\n{} ", "You:".green().bold());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let command = parse_line(&line);
                if command != ShellCommand::Empty {
                    let _ = rl.add_history_entry(line.trim());
                }
                match command {
                    ShellCommand::Empty => continue,
                    ShellCommand::Quit => {
                        print_agent(FAREWELL_BANNER);
                        break;
                    }
                    ShellCommand::Meditation => print_agent(&agent.daily_meditation()),
                    ShellCommand::Insights => print_agent(&format_insights(&agent.insights().await)),
                    ShellCommand::CheckIn => print_agent(agent.check_in()),
                    ShellCommand::Message(text) => print_agent(&agent.interact(text).await),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!();
                print_agent(INTERRUPT_MESSAGE);
                break;
            }
            Err(ReadlineError::Eof) => {
                print_agent(FAREWELL_BANNER);
                break;
            }
            Err(e) => {
                return Err(SolaceError::Internal(format!("readline error: {e}")));
            }
        }
    }

    Ok(())
}

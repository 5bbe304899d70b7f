use crate::app::{AppState, Notice};
use crate::constants::ZERO_POSITION_MESSAGE;
use crate::network::setup::NetworkSetup;
use crate::ui::{render_list, render_status, run_shell, write_notice};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dnsetter", about = "Switch the DNS servers of the active network interface")]
pub struct Args {
    #[arg(long, default_value = "dnsetter.toml")]
    pub config_path: PathBuf,
    #[arg(long, default_value = "DNSETTER_")]
    pub env_prefix: String,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Shows the active interface and its DNS servers
    Status,
    /// Lists the saved DNS servers
    List,
    /// Saves a new DNS server
    Add { ip: String, label: String },
    /// Deletes a saved DNS server
    Delete {
        /// Position of the entry as shown by `list`
        index: usize,
    },
    /// Uses a saved DNS server for the active interface
    Enable {
        /// Position of the entry as shown by `list`, defaults to the current one
        index: Option<usize>,
    },
    /// Removes all DNS servers from the active interface
    Disable,
    /// Starts an interactive session (the default)
    Shell,
}

/// Runs a single command against the application state.
///
/// ### Arguments
/// - `command` - the command to run
/// - `state` - the application state
/// - `setup` - access to the OS network utilities
/// - `input` - the source of commands for `shell`
/// - `out` - receives listings and informational notices
/// - `err` - receives warnings and errors
///
/// ### Returns
/// - `bool` - `false` if the command ended with an error notice
pub fn execute(
    command: Command,
    state: &mut AppState,
    setup: &impl NetworkSetup,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    let notice = match command {
        Command::Status => {
            writeln!(out, "{}", render_status(state))?;
            None
        }
        Command::List => {
            writeln!(out, "{}", render_list(state))?;
            None
        }
        Command::Add { ip, label } => Some(state.add(&ip, &label)),
        Command::Delete { index } => {
            Some(select_position(state, index).unwrap_or_else(|| state.delete()))
        }
        Command::Enable { index } => {
            let rejected = index.and_then(|index| select_position(state, index));
            Some(rejected.unwrap_or_else(|| state.toggle(setup, true)))
        }
        Command::Disable => Some(state.toggle(setup, false)),
        Command::Shell => {
            run_shell(state, setup, input, out, err)?;
            None
        }
    };

    let Some(notice) = notice else {
        return Ok(true);
    };

    write_notice(out, err, &notice)?;

    Ok(!notice.is_error())
}

/// Selects the entry at the given one-based position.
///
/// ### Returns
/// - `Option<Notice>` - a warning if there is no entry at that position
pub fn select_position(state: &mut AppState, position: usize) -> Option<Notice> {
    match position.checked_sub(1) {
        Some(index) => state.select(index),
        None => Some(Notice::warning(ZERO_POSITION_MESSAGE)),
    }
}

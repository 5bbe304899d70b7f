use crate::app::{AppState, Notice, Severity};
use crate::network::setup::NetworkSetup;
use anyhow::{Context, Result};
use nu_ansi_term::{Color, Style};
use std::io::{BufRead, Write};

const SHELL_HELP: &str = "\
Commands:
  list                  show the saved DNS servers
  add <ip> <label...>   save a new DNS server
  select <index>        select a DNS server
  delete                delete the selected DNS server
  on                    use the selected DNS server
  off                   remove all DNS servers
  status                show the active interface and DNS
  help                  show this help
  quit                  leave the session";

/// Represents a command entered in an interactive session.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Add { ip: String, label: String },
    Select(usize),
    Delete,
    On,
    Off,
    Status,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl From<&str> for ShellCommand {
    fn from(line: &str) -> Self {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb {
            "" => ShellCommand::Empty,
            "list" | "ls" => ShellCommand::List,
            "add" => {
                let (ip, label) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                ShellCommand::Add {
                    ip: ip.to_owned(),
                    label: label.trim().to_owned(),
                }
            }
            "select" => match rest.parse::<usize>() {
                Ok(index) if index > 0 => ShellCommand::Select(index - 1),
                _ => ShellCommand::Unknown(line.to_owned()),
            },
            "delete" | "del" => ShellCommand::Delete,
            "on" | "enable" => ShellCommand::On,
            "off" | "disable" => ShellCommand::Off,
            "status" => ShellCommand::Status,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => ShellCommand::Unknown(line.to_owned()),
        }
    }
}

/// Renders the toggle as a badge, green when the custom DNS is on.
pub fn toggle_badge(enabled: bool) -> String {
    if enabled {
        Color::Green.bold().paint("ON").to_string()
    } else {
        Style::new().paint("OFF").to_string()
    }
}

/// Renders the active interface, its DNS servers and the toggle.
pub fn render_status(state: &AppState) -> String {
    format!(
        "Interface: {}\nDNS: {}\nCustom DNS: {}",
        state.interface.as_deref().unwrap_or("-"),
        state.current_dns.as_deref().unwrap_or(""),
        toggle_badge(state.enabled)
    )
}

/// Renders the saved entries with one-based indices, marking the selected one.
pub fn render_list(state: &AppState) -> String {
    if state.store.is_empty() {
        return "No DNS servers saved.".to_owned();
    }

    state
        .store
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let marker = if state.selected == Some(index) { '*' } else { ' ' };
            format!("{marker} {}. {entry}", index + 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes a notice, informational ones to `out` and the rest to `err`.
pub fn write_notice(out: &mut impl Write, err: &mut impl Write, notice: &Notice) -> Result<()> {
    let written = match notice.severity {
        Severity::Info => writeln!(out, "{}", notice.message),
        Severity::Warning => writeln!(
            err,
            "{}: {}",
            Color::Yellow.paint(notice.title),
            notice.message
        ),
        Severity::Error => writeln!(
            err,
            "{}: {}",
            Color::Red.bold().paint(notice.title),
            notice.message
        ),
    };

    written.context("failed to write notice")
}

/// Runs an interactive session until `quit` or the end of the input.
///
/// ### Arguments
/// - `state` - the application state
/// - `setup` - access to the OS network utilities
/// - `input` - the source of commands
/// - `out` - receives listings and informational notices
/// - `err` - receives warnings and errors
pub fn run_shell(
    state: &mut AppState,
    setup: &impl NetworkSetup,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{}\n\n{}", render_status(state), render_list(state))?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;

        let notice = match ShellCommand::from(line.as_str()) {
            ShellCommand::Empty => None,
            ShellCommand::List => {
                writeln!(out, "{}", render_list(state))?;
                None
            }
            ShellCommand::Status => {
                writeln!(out, "{}", render_status(state))?;
                None
            }
            ShellCommand::Help => {
                writeln!(out, "{SHELL_HELP}")?;
                None
            }
            ShellCommand::Add { ip, label } => Some(state.add(&ip, &label)),
            ShellCommand::Select(index) => state.select(index),
            ShellCommand::Delete => Some(state.delete()),
            ShellCommand::On => Some(state.toggle(setup, true)),
            ShellCommand::Off => Some(state.toggle(setup, false)),
            ShellCommand::Quit => break,
            ShellCommand::Unknown(command) => Some(Notice::warning(format!(
                "Unknown command '{command}', type 'help' for a list of commands."
            ))),
        };

        if let Some(notice) = notice {
            write_notice(out, err, &notice)?;
        }
    }

    Ok(())
}

use crate::constants::{
    APPLY_FAILED_MESSAGE, DELETE_NO_SELECTION_MESSAGE, INVALID_ENTRY_MESSAGE,
    NO_INTERFACE_MESSAGE, NO_SELECTION_MESSAGE, SAVE_FAILED_MESSAGE,
};
use crate::network::dns::{get_dns, set_dns, DnsChange};
use crate::network::interface::resolve_active_interface;
use crate::network::setup::NetworkSetup;
use crate::store::{AddOutcome, DnsStore};
use std::fmt::{self, Display};
use tracing::{info, warn};

/// Represents how a notice is presented to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    /// The action was ignored, the user may simply continue
    Warning,
    /// The action failed
    Error,
}

/// Represents a message reporting the outcome of a user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: "Success",
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            title: "Warning",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: "Error",
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Represents the state shared by all user actions.
#[derive(Debug)]
pub struct AppState {
    /// The active hardware port, refreshed on every toggle
    pub interface: Option<String>,
    /// Display string of the DNS servers currently in use
    pub current_dns: Option<String>,
    /// Whether the custom DNS toggle is on
    pub enabled: bool,
    /// Index of the selected entry
    pub selected: Option<usize>,
    pub store: DnsStore,
}

impl AppState {
    /// Builds the initial state from the OS configuration and the saved entries.
    ///
    /// The current DNS servers are added to the list if they are not saved yet and selected.
    ///
    /// ### Arguments
    /// - `setup` - access to the OS network utilities
    /// - `store` - the loaded DNS entries
    pub fn start(setup: &impl NetworkSetup, mut store: DnsStore) -> Self {
        let interface = resolve_active_interface(setup);
        let current_dns = interface.as_deref().and_then(|interface| {
            get_dns(setup, interface).unwrap_or_else(|e| {
                // reported the same way as an interface without DNS servers
                warn!("{e:#}");
                None
            })
        });

        let selected = current_dns
            .as_deref()
            .map(|current_dns| store.reconcile(current_dns));

        Self {
            interface,
            enabled: current_dns.is_some(),
            current_dns,
            selected,
            store,
        }
    }

    /// Returns the address of the selected entry.
    pub fn selected_ip(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.store.get(index))
            .map(|entry| entry.ip.as_str())
            .filter(|ip| !ip.is_empty())
    }

    /// Selects the entry at the given index.
    ///
    /// ### Arguments
    /// - `index` - zero-based index into the entry list
    pub fn select(&mut self, index: usize) -> Option<Notice> {
        if index >= self.store.len() {
            return Some(Notice::warning(format!(
                "There is no DNS server #{}.",
                index + 1
            )));
        }

        self.selected = Some(index);
        None
    }

    /// Adds a new named DNS entry.
    ///
    /// ### Arguments
    /// - `ip` - the address of the DNS server
    /// - `label` - a human readable name
    pub fn add(&mut self, ip: &str, label: &str) -> Notice {
        match self.store.add(ip, label) {
            Ok(AddOutcome::Added) => {
                Notice::info(format!("DNS {} - {} added", ip.trim(), label.trim()))
            }
            Ok(AddOutcome::MissingField | AddOutcome::ControlCharacter | AddOutcome::Duplicate) => {
                Notice::warning(INVALID_ENTRY_MESSAGE)
            }
            Err(e) => {
                warn!("{e:#}");
                Notice::error(SAVE_FAILED_MESSAGE)
            }
        }
    }

    /// Deletes the selected entry.
    ///
    /// The selection is kept if the list cannot be saved.
    pub fn delete(&mut self) -> Notice {
        match self.store.delete(self.selected) {
            Ok(Some(entry)) => {
                self.selected = None;
                Notice::info(format!("DNS {entry} deleted"))
            }
            Ok(None) => Notice::warning(DELETE_NO_SELECTION_MESSAGE),
            Err(e) => {
                warn!("{e:#}");
                Notice::error(SAVE_FAILED_MESSAGE)
            }
        }
    }

    /// Turns the custom DNS on (using the selected entry) or off for the active interface.
    ///
    /// The toggle is forced off if there is no active interface or nothing is selected,
    /// and restored to its previous value if the change fails.
    ///
    /// ### Arguments
    /// - `setup` - access to the OS network utilities
    /// - `on` - the requested toggle value
    pub fn toggle(&mut self, setup: &impl NetworkSetup, on: bool) -> Notice {
        let previous = self.enabled;
        self.enabled = on;
        self.interface = resolve_active_interface(setup);

        let Some(interface) = self.interface.clone() else {
            self.enabled = false;
            return Notice::error(NO_INTERFACE_MESSAGE);
        };

        let change = if on {
            match self.selected_ip().map(str::to_owned) {
                Some(ip) => DnsChange::Apply(ip),
                None => {
                    self.enabled = false;
                    return Notice::error(NO_SELECTION_MESSAGE);
                }
            }
        } else {
            DnsChange::Clear
        };

        if let Err(e) = set_dns(setup, &interface, &change) {
            warn!("{e:#}");
            self.enabled = previous;
            return Notice::error(APPLY_FAILED_MESSAGE);
        }

        match change {
            DnsChange::Apply(ip) => {
                info!("Custom DNS enabled on '{interface}'");
                let notice = Notice::info(format!("DNS set to {ip} on {interface}"));
                self.current_dns = Some(ip);
                notice
            }
            DnsChange::Clear => {
                info!("Custom DNS disabled on '{interface}'");
                self.current_dns = None;
                Notice::info(format!("DNS removed from {interface}"))
            }
        }
    }
}

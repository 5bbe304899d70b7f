use crate::constants::{DNS_CLEAR_TOKEN, DNS_SERVERS_SEPARATOR, NO_DNS_SERVERS_SENTINEL};
use crate::network::setup::NetworkSetup;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Represents a change of the DNS servers of an interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DnsChange {
    /// Use the given server address
    Apply(String),
    /// Remove all DNS servers
    Clear,
}

impl DnsChange {
    /// Returns the value passed to `networksetup -setdnsservers`.
    pub fn as_arg(&self) -> &str {
        match self {
            DnsChange::Apply(address) => address.as_str(),
            DnsChange::Clear => DNS_CLEAR_TOKEN,
        }
    }
}

/// Parses the output of `networksetup -getdnsservers` into a display string.
///
/// ### Arguments
/// - `output` - the raw command output
///
/// ### Returns
/// - `Option<String>` - the servers joined with `", "`, or `None` if there are none
pub fn parse_dns_servers(output: &str) -> Option<String> {
    let servers = output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();

    if servers.is_empty()
        || servers
            .iter()
            .any(|line| line.contains(NO_DNS_SERVERS_SENTINEL))
    {
        return None;
    }

    Some(servers.join(DNS_SERVERS_SEPARATOR))
}

/// Reads the DNS servers currently configured for the given interface.
///
/// ### Arguments
/// - `setup` - access to the OS network utilities
/// - `interface` - the hardware port name
///
/// ### Returns
/// - `Option<String>` - the display string of the configured servers, `None` if unset
pub fn get_dns(setup: &impl NetworkSetup, interface: &str) -> Result<Option<String>> {
    let output = setup
        .get_dns(interface)
        .with_context(|| format!("failed to get DNS servers of '{interface}'"))?;
    let servers = parse_dns_servers(&output);

    debug!("DNS servers of '{interface}': {servers:?}");

    Ok(servers)
}

/// Changes the DNS servers of the given interface.
///
/// ### Arguments
/// - `setup` - access to the OS network utilities
/// - `interface` - the hardware port name
/// - `change` - the servers to apply, or a request to clear them
pub fn set_dns(setup: &impl NetworkSetup, interface: &str, change: &DnsChange) -> Result<()> {
    setup
        .set_dns(interface, change.as_arg())
        .with_context(|| format!("failed to set DNS servers of '{interface}'"))?;

    match change {
        DnsChange::Apply(address) => info!("DNS of '{interface}' set to {address}"),
        DnsChange::Clear => info!("DNS of '{interface}' cleared"),
    }

    Ok(())
}

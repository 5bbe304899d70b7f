use crate::constants::{DEVICE_MARKER, HARDWARE_PORT_MARKER, LINK_ACTIVE_MARKER};
use crate::network::setup::NetworkSetup;
use tracing::{debug, warn};

/// Represents a hardware port and the device backing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HardwarePort {
    pub name: String,
    pub device: String,
}

/// Parses the output of `networksetup -listallhardwareports`.
///
/// A `Hardware Port: <name>` line starts a new port, a following `Device: <name>` line records
/// its device. A port without a name is skipped.
/// A port listed more than once keeps its first position with the last device seen.
///
/// ### Arguments
/// - `listing` - the raw listing
///
/// ### Returns
/// - `Vec<HardwarePort>` - the ports in listing order
pub fn parse_hardware_ports(listing: &str) -> Vec<HardwarePort> {
    let mut ports: Vec<HardwarePort> = Vec::new();
    let mut current_port: Option<String> = None;

    for line in listing.lines() {
        let Some((key, value)) = line.split_once(": ") else {
            continue;
        };
        let value = value.trim();

        match key.trim() {
            HARDWARE_PORT_MARKER => {
                current_port = Some(value.to_owned()).filter(|name| !name.is_empty())
            }
            DEVICE_MARKER => {
                let Some(port_name) = current_port.as_deref() else {
                    continue;
                };

                match ports.iter_mut().find(|port| port.name == port_name) {
                    Some(port) => port.device = value.to_owned(),
                    None => ports.push(HardwarePort {
                        name: port_name.to_owned(),
                        device: value.to_owned(),
                    }),
                }
            }
            _ => {}
        }
    }

    ports
}

/// Finds the first hardware port whose device reports an active link.
///
/// ### Arguments
/// - `setup` - access to the OS network utilities
///
/// ### Returns
/// - `Option<String>` - the name of the active hardware port, if any
pub fn resolve_active_interface(setup: &impl NetworkSetup) -> Option<String> {
    let listing = match setup.enumerate_ports() {
        Ok(listing) => listing,
        Err(e) => {
            warn!("Failed to list hardware ports: {e}");
            return None;
        }
    };

    parse_hardware_ports(&listing)
        .into_iter()
        .find(|port| match setup.link_status(&port.device) {
            Ok(status) => status.contains(LINK_ACTIVE_MARKER),
            Err(e) => {
                debug!("Failed to query link status of '{}': {e}", port.device);
                false
            }
        })
        .map(|port| {
            debug!("Active interface: {} ({})", port.name, port.device);
            port.name
        })
}

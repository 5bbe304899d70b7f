use crate::config::CommandsConfig;
use crate::constants::{DNS_GET_ARG, DNS_SET_ARG, HARDWARE_PORTS_LIST_ARG};
use crate::utils::command::{run_command, run_command_checked};
use anyhow::Result;

/// Represents access to the OS network configuration utilities.
///
/// Every method returns the raw text the utility prints, parsing is left to the callers.
pub trait NetworkSetup {
    /// Lists all hardware ports and their devices.
    fn enumerate_ports(&self) -> Result<String>;

    /// Returns the status report of the given device.
    fn link_status(&self, device: &str) -> Result<String>;

    /// Returns the DNS servers configured for the given network service.
    fn get_dns(&self, interface: &str) -> Result<String>;

    /// Replaces the DNS servers of the given network service with `value`.
    fn set_dns(&self, interface: &str, value: &str) -> Result<()>;
}

/// `NetworkSetup` backed by `networksetup` and `ifconfig`.
#[derive(Clone, Debug)]
pub struct SystemNetworkSetup {
    network_setup: String,
    ifconfig: String,
}

impl SystemNetworkSetup {
    /// Creates a new instance using the programs from the given configuration.
    ///
    /// ### Arguments
    /// - `commands` - the configured program names
    pub fn new(commands: &CommandsConfig) -> Self {
        Self {
            network_setup: commands.network_setup.clone(),
            ifconfig: commands.ifconfig.clone(),
        }
    }
}

impl NetworkSetup for SystemNetworkSetup {
    fn enumerate_ports(&self) -> Result<String> {
        // networksetup -listallhardwareports
        run_command_checked(&self.network_setup, [HARDWARE_PORTS_LIST_ARG])
    }

    fn link_status(&self, device: &str) -> Result<String> {
        // ifconfig <device>
        // the exit status is not inspected, an unknown device simply has no active status line
        let output = run_command(&self.ifconfig, [device])?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn get_dns(&self, interface: &str) -> Result<String> {
        // networksetup -getdnsservers <interface>
        run_command_checked(&self.network_setup, [DNS_GET_ARG, interface])
    }

    fn set_dns(&self, interface: &str, value: &str) -> Result<()> {
        // networksetup -setdnsservers <interface> <value>
        run_command_checked(&self.network_setup, [DNS_SET_ARG, interface, value])?;

        Ok(())
    }
}

/// Represents the default command used to query and change network services.
pub const NETWORK_SETUP_COMMAND: &str = "networksetup";

/// Represents the default command used to query the link status of a device.
pub const IFCONFIG_COMMAND: &str = "ifconfig";

/// Lists all hardware ports together with their devices.
pub const HARDWARE_PORTS_LIST_ARG: &str = "-listallhardwareports";

/// Prints the DNS servers of a network service.
pub const DNS_GET_ARG: &str = "-getdnsservers";

/// Replaces the DNS servers of a network service.
pub const DNS_SET_ARG: &str = "-setdnsservers";

/// Passed instead of an address to remove all DNS servers from a network service.
pub const DNS_CLEAR_TOKEN: &str = "Empty";

/// Printed by `networksetup -getdnsservers` when the service has no DNS servers.
pub const NO_DNS_SERVERS_SENTINEL: &str = "There aren't any DNS Servers set";

/// Line prefix naming a hardware port in the hardware port listing.
pub const HARDWARE_PORT_MARKER: &str = "Hardware Port";

/// Line prefix naming the device of the current hardware port.
pub const DEVICE_MARKER: &str = "Device";

/// Substring of `ifconfig <device>` output for a device with a live link.
pub const LINK_ACTIVE_MARKER: &str = "status: active";

/// Separates the address from the label in an entry display string.
pub const ENTRY_SEPARATOR: &str = " - ";

/// Joins multiple DNS servers into a single display string.
pub const DNS_SERVERS_SEPARATOR: &str = ", ";

/// Default path of the saved DNS entry list.
pub const DEFAULT_LIST_FILE: &str = "dns_list.txt";

/// Error message when no hardware port reports an active link.
pub const NO_INTERFACE_MESSAGE: &str = "No active network interface found.";

/// Error message when the DNS is enabled without a selected entry.
pub const NO_SELECTION_MESSAGE: &str = "Select a DNS server from the list.";

/// Error message when changing the DNS servers fails.
pub const APPLY_FAILED_MESSAGE: &str = "Failed to apply DNS settings.";

/// Error message when the DNS list file cannot be written.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save the DNS list.";

/// Warning message when a new entry is incomplete, malformed or already saved.
pub const INVALID_ENTRY_MESSAGE: &str = "DNS IP or Name is empty, or DNS already exists.";

/// Warning message when deleting without a selected entry.
pub const DELETE_NO_SELECTION_MESSAGE: &str = "Select a DNS server to delete.";

/// Warning message when a one-based position of zero is given.
pub const ZERO_POSITION_MESSAGE: &str = "Positions start at 1.";

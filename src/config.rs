use crate::constants::{DEFAULT_LIST_FILE, IFCONFIG_COMMAND, NETWORK_SETUP_COMMAND};
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Represents the configuration of the application.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Config {
    /// Path to the file holding the saved DNS entries
    #[serde(default = "default_list_file")]
    pub list_file: PathBuf,
    /// External commands used to inspect and change the network configuration
    #[serde(default)]
    pub commands: CommandsConfig,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CommandsConfig {
    /// The `networksetup` program
    #[serde(default = "default_network_setup_command")]
    pub network_setup: String,
    /// The `ifconfig` program
    #[serde(default = "default_ifconfig_command")]
    pub ifconfig: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LogConfig {
    /// The log level to use
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Config {
    /// Creates a configuration object from the given path and ENV prefix.
    ///
    /// A missing configuration file is not an error, every field has a default.
    ///
    /// ### Arguments
    /// - `path` - path to a configuration file
    /// - `env_prefix` - ENV prefix to use for overrides
    pub fn from_path(path: &Path, env_prefix: &str) -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(env_prefix).split("__"));

        figment
            .extract()
            .with_context(|| format!("failed to load configuration from '{}'", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_file: default_list_file(),
            commands: CommandsConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            network_setup: default_network_setup_command(),
            ifconfig: default_ifconfig_command(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_list_file() -> PathBuf {
    PathBuf::from(DEFAULT_LIST_FILE)
}

fn default_network_setup_command() -> String {
    NETWORK_SETUP_COMMAND.to_owned()
}

fn default_ifconfig_command() -> String {
    IFCONFIG_COMMAND.to_owned()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_missing_file_uses_defaults() {
        let config =
            Config::from_path(Path::new("does/not/exist.toml"), "DNSETTER_TEST_MISSING_").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.list_file, PathBuf::from("dns_list.txt"));
        assert_eq!(config.commands.network_setup, "networksetup");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
list_file = "/tmp/entries.txt"

[commands]
ifconfig = "/sbin/ifconfig"

[log]
level = "debug"
"#
        )
        .unwrap();

        let config = Config::from_path(file.path(), "DNSETTER_TEST_FILE_").unwrap();

        assert_eq!(config.list_file, PathBuf::from("/tmp/entries.txt"));
        assert_eq!(config.commands.ifconfig, "/sbin/ifconfig");
        assert_eq!(config.commands.network_setup, "networksetup");
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "list_file = [1, 2]").unwrap();

        assert!(Config::from_path(file.path(), "DNSETTER_TEST_INVALID_").is_err());
    }
}

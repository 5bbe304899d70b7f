#![allow(dead_code)]

use anyhow::{anyhow, Result};
use dnsetter::config::Config;
use dnsetter::network::setup::NetworkSetup;
use dnsetter::store::DnsStore;
use rstest::fixture;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const ACTIVE_STATUS: &str =
    "en0: flags=8863<UP,BROADCAST,SMART,RUNNING> mtu 1500\n\tstatus: active\n";
pub const INACTIVE_STATUS: &str = "en1: flags=8822<BROADCAST,SMART> mtu 1500\n\tstatus: inactive\n";
pub const NO_DNS_OUTPUT: &str = "There aren't any DNS Servers set on Wi-Fi.\n";

/// `NetworkSetup` answering with canned outputs and recording every DNS change.
#[derive(Default)]
pub struct FakeNetworkSetup {
    /// `None` makes the enumeration fail
    pub ports: Option<String>,
    pub statuses: HashMap<String, String>,
    /// `None` makes the DNS query fail
    pub dns: Option<String>,
    pub set_fails: bool,
    pub set_calls: RefCell<Vec<(String, String)>>,
}

impl FakeNetworkSetup {
    /// A machine with an inactive Ethernet port followed by an active Wi-Fi port.
    pub fn wifi(dns: &str) -> Self {
        let mut statuses = HashMap::new();
        statuses.insert("en1".to_owned(), INACTIVE_STATUS.to_owned());
        statuses.insert("en0".to_owned(), ACTIVE_STATUS.to_owned());

        Self {
            ports: Some(
                "Hardware Port: Ethernet\nDevice: en1\nEthernet Address: aa\n\n\
                 Hardware Port: Wi-Fi\nDevice: en0\nEthernet Address: bb\n"
                    .to_owned(),
            ),
            statuses,
            dns: Some(dns.to_owned()),
            ..Default::default()
        }
    }

    /// A machine without any active port.
    pub fn offline() -> Self {
        let mut setup = Self::wifi(NO_DNS_OUTPUT);
        setup
            .statuses
            .insert("en0".to_owned(), INACTIVE_STATUS.to_owned());

        setup
    }

    pub fn set_calls(&self) -> Vec<(String, String)> {
        self.set_calls.borrow().clone()
    }
}

impl NetworkSetup for FakeNetworkSetup {
    fn enumerate_ports(&self) -> Result<String> {
        self.ports
            .clone()
            .ok_or_else(|| anyhow!("'networksetup' exited with exit status: 1"))
    }

    fn link_status(&self, device: &str) -> Result<String> {
        self.statuses
            .get(device)
            .cloned()
            .ok_or_else(|| anyhow!("interface {device} does not exist"))
    }

    fn get_dns(&self, _interface: &str) -> Result<String> {
        self.dns
            .clone()
            .ok_or_else(|| anyhow!("'networksetup' exited with exit status: 1"))
    }

    fn set_dns(&self, interface: &str, value: &str) -> Result<()> {
        if self.set_fails {
            return Err(anyhow!("'networksetup' exited with exit status: 1"));
        }

        self.set_calls
            .borrow_mut()
            .push((interface.to_owned(), value.to_owned()));

        Ok(())
    }
}

#[fixture]
pub fn config() -> Config {
    Config::from_path(Path::new("tests/static/dnsetter.toml"), "DNSETTER_TEST_").unwrap()
}

#[fixture]
pub fn list_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Opens a store backed by a list file with the given content inside `dir`.
pub fn store_with(dir: &TempDir, content: &str) -> DnsStore {
    let path = dir.path().join("dns_list.txt");
    fs::write(&path, content).unwrap();

    DnsStore::open(path).unwrap()
}

use crate::common::{config, list_dir, store_with, FakeNetworkSetup, NO_DNS_OUTPUT};
use dnsetter::app::AppState;
use dnsetter::config::Config;
use dnsetter::store::DnsEntry;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;
use tracing_test::traced_test;

mod common;

#[rstest]
fn test_unset_dns_leaves_toggle_off(list_dir: TempDir) {
    let store = store_with(&list_dir, "1.1.1.1 - Cloudflare\n");

    let state = AppState::start(&FakeNetworkSetup::wifi(NO_DNS_OUTPUT), store);

    assert_eq!(state.interface.as_deref(), Some("Wi-Fi"));
    assert_eq!(state.current_dns, None);
    assert!(!state.enabled);
    assert_eq!(state.selected, None);
    assert_eq!(state.store.len(), 1);
}

#[rstest]
fn test_current_dns_is_added_and_selected(list_dir: TempDir) {
    let store = store_with(&list_dir, "1.1.1.1 - Cloudflare\n");

    let state = AppState::start(&FakeNetworkSetup::wifi("8.8.8.8\n8.8.4.4\n"), store);

    assert!(state.enabled);
    assert_eq!(state.current_dns.as_deref(), Some("8.8.8.8, 8.8.4.4"));
    assert_eq!(state.selected, Some(1));
    assert_eq!(
        state.store.get(1),
        Some(&DnsEntry::unlabelled("8.8.8.8, 8.8.4.4"))
    );
    // the synthetic entry is only written with the next change
    assert_eq!(
        fs::read_to_string(state.store.path()).unwrap(),
        "1.1.1.1 - Cloudflare\n"
    );
}

#[rstest]
fn test_saved_current_dns_is_selected(list_dir: TempDir) {
    let store = store_with(&list_dir, "1.1.1.1 - Cloudflare\n9.9.9.9\n8.8.8.8 - Google\n");

    let state = AppState::start(&FakeNetworkSetup::wifi("9.9.9.9\n"), store);

    assert!(state.enabled);
    assert_eq!(state.selected, Some(1));
    assert_eq!(state.store.len(), 3);
}

#[rstest]
#[traced_test]
fn test_dns_query_failure_is_reported_as_unset(list_dir: TempDir) {
    let mut setup = FakeNetworkSetup::wifi(NO_DNS_OUTPUT);
    setup.dns = None;

    let state = AppState::start(&setup, store_with(&list_dir, ""));

    assert_eq!(state.current_dns, None);
    assert!(!state.enabled);
    assert!(logs_contain("failed to get DNS servers of 'Wi-Fi'"));
}

#[rstest]
fn test_no_interface(list_dir: TempDir) {
    let state = AppState::start(&FakeNetworkSetup::offline(), store_with(&list_dir, ""));

    assert_eq!(state.interface, None);
    assert_eq!(state.current_dns, None);
    assert!(!state.enabled);
}

#[rstest]
fn test_static_config_matches_defaults(config: Config) {
    assert_eq!(config, Config::default());
}

//! Settings persistence across invocations

use kubesafe::engine::record_outcome;
use kubesafe::output::CANCELED_MESSAGE;
use kubesafe::parser::args::WRAPPER_FLAGS;
use kubesafe::parser::{partition, Kubeconfig};
use kubesafe::{admin, stats, ContextRule, Interceptor, Registry, SettingsStore};
use tempfile::TempDir;

use crate::common::{argv, FixedAnswer, Recorder, KUBECONFIG};

#[test]
fn test_cancellation_survives_reload() {
    let dir = TempDir::new().unwrap();
    let store = SettingsStore::new(dir.path().join("config.yaml"));

    let mut registry = Registry::new();
    registry
        .add_rule(ContextRule::new("prod-eu", vec!["delete"]))
        .unwrap();
    store.save(&registry).unwrap();

    for _ in 0..2 {
        let mut registry = store.load().unwrap();
        let raw = argv(&["kubectl", "delete", "ns", "x"]);
        let invocation = partition(&raw, WRAPPER_FLAGS).unwrap();
        let interceptor = Interceptor::new(FixedAnswer::new(false), Recorder::default());
        let outcome = interceptor
            .intercept(&mut registry, "prod-eu", &invocation)
            .unwrap();
        assert!(outcome.is_canceled());
        store.save(&registry).unwrap();
    }

    let loaded = store.load().unwrap();
    assert_eq!(loaded.rules()[0].canceled_count(), 2);
    assert!(stats::render(loaded.rules()).contains("prod-eu    2"));
}

#[test]
fn test_add_list_remove_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = SettingsStore::new(dir.path().join("config.yaml"));
    let available = Kubeconfig::from_yaml(KUBECONFIG)
        .unwrap()
        .available_contexts();
    let prompter = FixedAnswer::new(true);

    let mut registry = store.load().unwrap();
    admin::add_context(&mut registry, &available, Some("kind-dev"), &prompter).unwrap();
    admin::add_context(&mut registry, &available, Some("prod-.*"), &prompter).unwrap();
    store.save(&registry).unwrap();

    let mut registry = store.load().unwrap();
    let listing = admin::list_contexts(&registry);
    assert!(listing.starts_with("kind-dev\n  - delete\n"));
    assert!(listing.contains("prod-.*\n"));
    assert!(registry.rules()[1].is_regex());

    admin::remove_context(&mut registry, Some("kind-dev"), &prompter).unwrap();
    store.save(&registry).unwrap();

    let registry = store.load().unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.resolve("prod-eu").unwrap().name, "prod-.*");
}

#[test]
fn test_written_file_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    let store = SettingsStore::new(&path);

    let mut registry = Registry::new();
    registry
        .add_rule(ContextRule::new("prod-.*", vec!["delete"]))
        .unwrap();
    store.save(&registry).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("contexts:"));
    assert!(content.contains("isRegex: true"));
    assert!(content.contains("commands:"));
    assert!(content.contains("canceledCount: 0"));
}

#[test]
fn test_cancellation_is_saved_and_reported() {
    let dir = TempDir::new().unwrap();
    let store = SettingsStore::new(dir.path().join("config.yaml"));
    let mut registry = Registry::from_rules(vec![ContextRule::new("prod-.*", vec!["delete"])]);

    let invocation = partition(&argv(&["kubectl", "delete", "pod"]), WRAPPER_FLAGS).unwrap();
    let interceptor = Interceptor::new(FixedAnswer::new(false), Recorder::default());
    let outcome = interceptor
        .intercept(&mut registry, "prod-eu", &invocation)
        .unwrap();

    let message = record_outcome(&store, &registry, outcome).unwrap();
    assert_eq!(message, Some(CANCELED_MESSAGE));
    assert_eq!(CANCELED_MESSAGE, "Canceled.");
    assert_eq!(store.load().unwrap().rules()[0].canceled_count(), 1);
}

#[test]
fn test_forwarded_command_leaves_settings_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    let store = SettingsStore::new(&path);
    let mut registry = Registry::from_rules(vec![ContextRule::new("prod-.*", vec!["delete"])]);

    let invocation = partition(&argv(&["kubectl", "get", "pods"]), WRAPPER_FLAGS).unwrap();
    let interceptor = Interceptor::new(FixedAnswer::new(false), Recorder::default());
    let outcome = interceptor
        .intercept(&mut registry, "prod-eu", &invocation)
        .unwrap();

    assert_eq!(record_outcome(&store, &registry, outcome).unwrap(), None);
    assert!(!path.exists());
    assert_eq!(interceptor.runner().runs.borrow().len(), 1);
}

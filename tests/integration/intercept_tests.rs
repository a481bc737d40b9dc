//! End-to-end interception: argv -> kubeconfig -> registry -> decision

use kubesafe::parser::args::WRAPPER_FLAGS;
use kubesafe::parser::{partition, Kubeconfig};
use kubesafe::{ContextRule, Interceptor, Outcome, Registry};

use crate::common::{argv, FixedAnswer, Recorder, KUBECONFIG};

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .add_rule(ContextRule::new("prod-.*", vec!["delete", "patch"]))
        .unwrap();
    registry
}

fn intercept(
    tokens: &[&str],
    answer: bool,
    registry: &mut Registry,
) -> (Outcome, Interceptor<FixedAnswer, Recorder>) {
    let invocation = partition(&argv(tokens), WRAPPER_FLAGS).unwrap();
    let kubeconfig = Kubeconfig::from_yaml(KUBECONFIG).unwrap();
    let target = kubeconfig.namespaced_context(&invocation.args);

    let interceptor = Interceptor::new(FixedAnswer::new(answer), Recorder::default());
    let outcome = interceptor
        .intercept(registry, &target.context, &invocation)
        .unwrap();
    (outcome, interceptor)
}

#[test]
fn test_get_on_safe_context_runs_without_prompt() {
    let mut registry = registry();
    let (outcome, i) = intercept(&["kubectl", "get", "pods"], false, &mut registry);
    assert_eq!(outcome, Outcome::Forwarded);
    assert!(i.prompter().shown.borrow().is_empty());
    assert_eq!(i.runner().runs.borrow()[0], argv(&["kubectl", "get", "pods"]));
}

#[test]
fn test_delete_confirmed() {
    let mut registry = registry();
    let (outcome, i) = intercept(&["kubectl", "delete", "pod", "foo"], true, &mut registry);
    assert_eq!(outcome, Outcome::Forwarded);
    assert!(i.prompter().shown.borrow()[0].contains("\"prod-eu\""));
    assert_eq!(registry.rules()[0].canceled_count(), 0);
}

#[test]
fn test_delete_declined() {
    let mut registry = registry();
    let (outcome, i) = intercept(&["kubectl", "delete", "pod", "foo"], false, &mut registry);
    assert_eq!(outcome, Outcome::Canceled);
    assert!(i.runner().runs.borrow().is_empty());
    assert_eq!(registry.rules()[0].canceled_count(), 1);
}

#[test]
fn test_context_flag_selects_unprotected_context() {
    let mut registry = registry();
    let (outcome, i) = intercept(
        &["kubectl", "delete", "pod", "foo", "--context", "kind-dev"],
        false,
        &mut registry,
    );
    assert_eq!(outcome, Outcome::Forwarded);
    assert_eq!(i.runner().runs.borrow().len(), 1);
}

#[test]
fn test_no_interactive_blocks_and_strips_flag() {
    let mut registry = registry();
    let (outcome, i) = intercept(
        &["--no-interactive", "kubectl", "patch", "deploy", "web"],
        true,
        &mut registry,
    );
    assert_eq!(outcome, Outcome::Canceled);
    let shown = i.prompter().shown.borrow();
    assert_eq!(shown.len(), 1);
    assert!(shown[0].contains("non-interactive"));
    assert_eq!(registry.rules()[0].canceled_count(), 1);
}

#[test]
fn test_no_interactive_still_forwards_safe_commands() {
    let mut registry = registry();
    let (outcome, i) = intercept(
        &["kubectl", "--no-interactive", "logs", "web"],
        false,
        &mut registry,
    );
    assert_eq!(outcome, Outcome::Forwarded);
    assert_eq!(i.runner().runs.borrow()[0], argv(&["kubectl", "logs", "web"]));
}

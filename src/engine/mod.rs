//! Interception engine for kubesafe
//!
//! Decides whether a wrapped command runs straight away, needs confirmation,
//! or is refused, then carries the decision out.

pub mod runner;

use crate::error::Result;
use crate::output::{blocked_message, confirmation_message, Decision, Outcome, CANCELED_MESSAGE};
use crate::parser::Invocation;
use crate::prompt::Prompter;
use crate::rules::Registry;
use crate::settings::SettingsStore;

pub use runner::{CommandRunner, ProcessRunner};

/// Decide what to do with `invocation` running against `context`
pub fn decide(registry: &Registry, context: &str, invocation: &Invocation) -> Decision {
    let Some(rule) = registry.resolve(context) else {
        return Decision::forward(format!("context {context:?} is not a safe context"));
    };

    // A bare command has nothing to protect yet
    let Some(subcommand) = invocation.subcommand() else {
        return Decision::forward("no sub-command");
    };

    if !rule.is_protected(subcommand) {
        return Decision::forward(format!("{subcommand:?} is not protected on {:?}", rule.name));
    }

    if invocation.flags.no_interactive {
        Decision::Block {
            context: context.to_string(),
        }
    } else {
        Decision::Confirm {
            context: context.to_string(),
        }
    }
}

/// Carries out interception decisions
pub struct Interceptor<P, R> {
    prompter: P,
    runner: R,
}

impl<P: Prompter, R: CommandRunner> Interceptor<P, R> {
    pub fn new(prompter: P, runner: R) -> Self {
        Self { prompter, runner }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Decide and act on one invocation.
    ///
    /// On cancellation the matching rule's counter is incremented in
    /// `registry`; persisting it is up to the caller. Prompt failures are
    /// returned without forwarding.
    pub fn intercept(
        &self,
        registry: &mut Registry,
        context: &str,
        invocation: &Invocation,
    ) -> Result<Outcome> {
        let decision = decide(registry, context, invocation);
        log::debug!("{} {:?}: {decision:?}", invocation.command, invocation.args);

        match decision {
            Decision::Forward { .. } => {}
            Decision::Block { context } => {
                self.prompter.warn(&blocked_message(&context))?;
                return Ok(cancel(registry, &context));
            }
            Decision::Confirm { context } => {
                if !self.prompter.confirm(&confirmation_message(&context))? {
                    return Ok(cancel(registry, &context));
                }
            }
        }

        self.runner.run(&invocation.command, &invocation.args);
        Ok(Outcome::Forwarded)
    }
}

fn cancel(registry: &mut Registry, context: &str) -> Outcome {
    if let Some(rule) = registry.resolve_mut(context) {
        rule.record_cancellation();
    }
    Outcome::Canceled
}

/// Persist the registry after a cancellation, returning the message to show
///
/// A forwarded command leaves the settings file untouched.
pub fn record_outcome(
    store: &SettingsStore,
    registry: &Registry,
    outcome: Outcome,
) -> Result<Option<&'static str>> {
    if !outcome.is_canceled() {
        return Ok(None);
    }
    store.save(registry)?;
    Ok(Some(CANCELED_MESSAGE))
}

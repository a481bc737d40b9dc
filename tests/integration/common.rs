//! Shared fixtures for integration tests

use std::cell::RefCell;

use kubesafe::engine::CommandRunner;
use kubesafe::prompt::Prompter;
use kubesafe::Result;

pub fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Replies to confirmations with a fixed answer
pub struct FixedAnswer {
    pub answer: bool,
    pub shown: RefCell<Vec<String>>,
}

impl FixedAnswer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            shown: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for FixedAnswer {
    fn confirm(&self, message: &str) -> Result<bool> {
        self.shown.borrow_mut().push(message.to_string());
        Ok(self.answer)
    }

    fn select_one(&self, options: &[String], _prompt: &str) -> Result<String> {
        Ok(options[0].clone())
    }

    fn select_many(&self, options: &[String], _prompt: &str) -> Result<Vec<String>> {
        Ok(options.to_vec())
    }

    fn warn(&self, message: &str) -> Result<()> {
        self.shown.borrow_mut().push(message.to_string());
        Ok(())
    }
}

/// Records forwarded commands instead of spawning them
#[derive(Default)]
pub struct Recorder {
    pub runs: RefCell<Vec<Vec<String>>>,
}

impl CommandRunner for Recorder {
    fn run(&self, command: &str, args: &[String]) {
        let mut tokens = vec![command.to_string()];
        tokens.extend(args.iter().cloned());
        self.runs.borrow_mut().push(tokens);
    }
}

pub const KUBECONFIG: &str = r#"
apiVersion: v1
kind: Config
current-context: prod-eu
contexts:
  - name: prod-eu
    context:
      cluster: prod-eu
      namespace: payments
  - name: kind-dev
    context:
      cluster: kind-dev
"#;

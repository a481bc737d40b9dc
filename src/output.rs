//! Decisions and outcomes of an intercepted invocation

/// What to do with a wrapped command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Run the wrapped command unmodified
    Forward { reason: String },

    /// Ask the user before running; `context` is the live context name
    Confirm { context: String },

    /// Refuse without asking (non-interactive mode)
    Block { context: String },
}

impl Decision {
    /// Create a forward decision
    pub fn forward(reason: impl Into<String>) -> Self {
        Decision::Forward {
            reason: reason.into(),
        }
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Decision::Forward { .. })
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Decision::Block { .. })
    }

    /// The safe context involved, for confirm and block decisions
    pub fn context(&self) -> Option<&str> {
        match self {
            Decision::Forward { .. } => None,
            Decision::Confirm { context } | Decision::Block { context } => Some(context),
        }
    }
}

/// What actually happened after acting on a [`Decision`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The wrapped command was run
    Forwarded,
    /// The wrapped command was not run and a cancellation was recorded
    Canceled,
}

impl Outcome {
    pub fn is_canceled(self) -> bool {
        self == Outcome::Canceled
    }
}

/// Prompt shown before running a protected command
pub fn confirmation_message(context: &str) -> String {
    format!("[WARNING] Running a protected command on safe context {context:?}. Are you sure?")
}

/// Warning shown when a protected command is refused without prompting
pub fn blocked_message(context: &str) -> String {
    format!(
        "[WARNING] Refusing to run a protected command on safe context {context:?} in non-interactive mode"
    )
}

/// Printed after a cancellation
pub const CANCELED_MESSAGE: &str = "Canceled.";

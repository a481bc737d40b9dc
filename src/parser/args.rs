//! Separates kubesafe's own flags from the wrapped command line
//!
//! Wrapper flags are removed by exact token equality only. The wrapped
//! command's own flags and their values are passed through untouched.

/// Long name of the flag that disables interactive confirmation
pub const NO_INTERACTIVE: &str = "no-interactive";

/// Every flag kubesafe itself declares on the root invocation
pub const WRAPPER_FLAGS: &[&str] = &[NO_INTERACTIVE];

/// Values of the wrapper's own flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WrapperFlags {
    pub no_interactive: bool,
}

impl WrapperFlags {
    fn set(&mut self, name: &str) {
        if name == NO_INTERACTIVE {
            self.no_interactive = true;
        }
    }
}

/// A wrapped command line with kubesafe's flags removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub flags: WrapperFlags,
    /// The wrapped program, e.g. `kubectl`
    pub command: String,
    /// Everything after the program name, in original order
    pub args: Vec<String>,
}

impl Invocation {
    /// The wrapped sub-command, e.g. `delete` in `kubectl delete pod foo`
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// The declared flag `token` spells out as `--name`, if any
fn long_flag<'a>(token: &str, declared: &[&'a str]) -> Option<&'a str> {
    let name = token.strip_prefix("--")?;
    declared.iter().copied().find(|flag| *flag == name)
}

/// Split `raw` (argv without the program name) into wrapper flags and the
/// wrapped command.
///
/// Every `--name` token whose name is in `declared` is removed. Flags kubesafe
/// understands are recorded in [`WrapperFlags`].
///
/// Returns `None` when nothing is left once the wrapper flags are removed;
/// callers must show usage before getting here.
pub fn partition(raw: &[String], declared: &[&str]) -> Option<Invocation> {
    let mut flags = WrapperFlags::default();
    let mut remaining = Vec::with_capacity(raw.len());

    for token in raw {
        match long_flag(token, declared) {
            Some(name) => flags.set(name),
            None => remaining.push(token.clone()),
        }
    }

    let mut tokens = remaining.into_iter();
    let command = tokens.next()?;
    Some(Invocation {
        flags,
        command,
        args: tokens.collect(),
    })
}

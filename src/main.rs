//! kubesafe - confirm protected commands on safe cluster contexts
//!
//! # Usage
//!
//! ```bash
//! # Wrap kubectl (usually via `alias kubectl="kubesafe kubectl"`)
//! kubesafe kubectl delete pod web-0
//!
//! # Refuse protected commands instead of prompting (CI, scripts)
//! kubesafe --no-interactive helm uninstall web
//!
//! # Manage safe contexts
//! kubesafe context add prod-.*
//! ```

use std::env;
use std::process::ExitCode;

use simplelog::{ColorChoice, TermLogger, TerminalMode};

use kubesafe::{
    admin,
    config::{self, Paths},
    engine::{self, Interceptor, ProcessRunner},
    parser::{args::WRAPPER_FLAGS, partition, Kubeconfig},
    prompt::TerminalPrompter,
    stats, Result, SettingsStore,
};

/// Print version information
fn print_version() {
    println!("kubesafe {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"kubesafe - safety net for kubectl, helm and other cluster CLIs

USAGE:
    kubesafe [--no-interactive] <COMMAND> [ARGS...]
    kubesafe context <add|list|remove> [CONTEXT]
    kubesafe stats

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
        --no-interactive    Refuse protected commands instead of asking

SUBCOMMANDS:
    context add [CONTEXT]     Mark a context (or regex pattern) as safe
    context list              List safe contexts and their protected commands
    context remove [CONTEXT]  Remove a safe context
    stats                     Show canceled commands per safe context

ENVIRONMENT:
    KUBESAFE_CONFIG         Settings file (default: ~/.config/kubesafe/config.yaml)
    KUBESAFE_LOG            Log level: off, error, warn, info, debug, trace
    KUBECONFIG              Kubeconfig used to find the active context
"#
    );
}

/// What the command line asks for
enum Command {
    Help { failed: bool },
    Version,
    ContextAdd(Option<String>),
    ContextList,
    ContextRemove(Option<String>),
    Stats,
    Wrap(Vec<String>),
}

impl Command {
    fn parse(args: Vec<String>) -> Self {
        let Some(first) = args.first() else {
            return Command::Help { failed: true };
        };

        match first.as_str() {
            "-h" | "--help" => Command::Help { failed: false },
            "-v" | "--version" => Command::Version,
            "stats" => Command::Stats,
            "context" => {
                let name = args.get(2).cloned();
                match args.get(1).map(String::as_str) {
                    Some("add") => Command::ContextAdd(name),
                    Some("list") => Command::ContextList,
                    Some("remove") => Command::ContextRemove(name),
                    _ => Command::Help { failed: true },
                }
            }
            _ => Command::Wrap(args),
        }
    }
}

fn init_logging() {
    let level = config::log_level(env::var(config::LOG_ENV).ok().as_deref());
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Run the wrapped command through the interception engine
fn wrap(raw: Vec<String>) -> Result<ExitCode> {
    let Some(invocation) = partition(&raw, WRAPPER_FLAGS) else {
        print_help();
        return Ok(ExitCode::FAILURE);
    };

    let paths = Paths::discover()?;
    let target = Kubeconfig::load(&paths.kubeconfig)?.namespaced_context(&invocation.args);
    log::debug!(
        "active context {:?}, namespace {:?}",
        target.context,
        target.namespace
    );

    let store = SettingsStore::new(&paths.settings);
    let mut registry = store.load()?;

    let interceptor = Interceptor::new(TerminalPrompter::new(), ProcessRunner);
    let outcome = interceptor.intercept(&mut registry, &target.context, &invocation)?;
    if let Some(message) = engine::record_outcome(&store, &registry, outcome)? {
        println!("{message}");
    }

    // The wrapped command's own exit status is not propagated
    Ok(ExitCode::SUCCESS)
}

fn context_add(requested: Option<String>) -> Result<ExitCode> {
    let paths = Paths::discover()?;
    let store = SettingsStore::new(&paths.settings);
    let mut registry = store.load()?;
    let available = Kubeconfig::load(&paths.kubeconfig)?.available_contexts();

    let name = admin::add_context(
        &mut registry,
        &available,
        requested.as_deref(),
        &TerminalPrompter::new(),
    )?;
    store.save(&registry)?;
    println!("Context {name:?} added to safe contexts");
    Ok(ExitCode::SUCCESS)
}

fn context_list() -> Result<ExitCode> {
    let paths = Paths::discover()?;
    let registry = SettingsStore::new(&paths.settings).load()?;
    print!("{}", admin::list_contexts(&registry));
    Ok(ExitCode::SUCCESS)
}

fn context_remove(requested: Option<String>) -> Result<ExitCode> {
    let paths = Paths::discover()?;
    let store = SettingsStore::new(&paths.settings);
    let mut registry = store.load()?;

    match admin::remove_context(&mut registry, requested.as_deref(), &TerminalPrompter::new())? {
        Some(name) => {
            store.save(&registry)?;
            println!("Context {name:?} removed from safe contexts");
        }
        None => println!("No safe contexts saved"),
    }
    Ok(ExitCode::SUCCESS)
}

fn show_stats() -> Result<ExitCode> {
    let paths = Paths::discover()?;
    let registry = SettingsStore::new(&paths.settings).load()?;
    if !registry.is_empty() {
        println!("\nKubesafe Context Statistics\n");
    }
    print!("{}", stats::render(registry.rules()));
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_logging();

    let result = match Command::parse(env::args().skip(1).collect()) {
        Command::Help { failed } => {
            print_help();
            Ok(if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Version => {
            print_version();
            Ok(ExitCode::SUCCESS)
        }
        Command::ContextAdd(name) => context_add(name),
        Command::ContextList => context_list(),
        Command::ContextRemove(name) => context_remove(name),
        Command::Stats => show_stats(),
        Command::Wrap(raw) => wrap(raw),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! tabview - pager key translation and key inspector

mod config;
mod error;
mod help;
mod logging;
#[cfg(feature = "tui")]
mod tui;

use anyhow::Context;
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

use tabview_input::{EventTranslator, KeycodeResolver};

fn print_usage() {
    eprintln!("Usage: tabview [OPTIONS]");
    eprintln!();
    eprintln!("Shows the pager command produced by each key press.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --term <name>             Terminal type to describe (default: $TERM)");
    eprintln!("  --config <path>           Load settings from TOML file");
    eprintln!("  --log-file <path>         Write logs to a file");
    eprintln!("  --list-bindings           Print key bindings and exit");
    eprintln!("  -h, --help                Print help");
}

struct Options {
    term: Option<String>,
    config_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
    list_bindings: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut options = Options {
        term: None,
        config_file: None,
        log_file: None,
        list_bindings: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--term" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --term requires a value");
                    std::process::exit(1);
                }
                options.term = Some(args[i].to_string());
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                options.config_file = Some(PathBuf::from(&args[i]));
            }
            "--log-file" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --log-file requires a file path");
                    std::process::exit(1);
                }
                options.log_file = Some(PathBuf::from(&args[i]));
            }
            "--list-bindings" => {
                options.list_bindings = true;
            }
            arg => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if let Err(e) = run(options) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    logging::init_logging(options.log_file.as_deref()).with_context(|| {
        format!(
            "Failed to open log file {}",
            options
                .log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;

    let (config, warnings) = config::load_config(options.config_file.as_ref());
    for warning in warnings {
        // Without a log file the subscriber already writes warnings to stderr.
        if options.log_file.is_some() {
            warn!("{}", warning);
        }
        eprintln!("Warning: {}", warning);
    }

    let caps = config.capability_database(options.term.as_deref());
    let term = caps.term().to_string();
    let resolved = KeycodeResolver::new(caps).initialize();
    info!(
        term = %term,
        ctrl_home = resolved.ctrl_home,
        ctrl_end = resolved.ctrl_end,
        "key codes resolved"
    );

    if options.list_bindings {
        for line in help::get_bindings_text(&resolved, &term) {
            println!("{}", line);
        }
        return Ok(());
    }

    run_inspector(EventTranslator::new(resolved))
}

#[cfg(feature = "tui")]
fn run_inspector(translator: EventTranslator) -> anyhow::Result<()> {
    tui::run(translator).context("Key inspector failed")
}

#[cfg(not(feature = "tui"))]
fn run_inspector(_translator: EventTranslator) -> anyhow::Result<()> {
    anyhow::bail!("built without the terminal front end; only --list-bindings is available")
}

//! Logging setup.
//!
//! The inspector owns the terminal in raw mode, so stderr only gets warnings
//! by default. Use `--log-file` to see the per-key trace.

use std::fs::File;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;

const STDERR_FILTER: &str = "warn";
const FILE_FILTER: &str = "tabview=debug,tabview_input=debug,info";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let (writer, default_filter, ansi) = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), FILE_FILTER, false)
        }
        None => (
            BoxMakeWriter::new(std::io::stderr),
            STDERR_FILTER,
            std::io::stderr().is_terminal(),
        ),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();

    info!("tabview v{} starting up", env!("CARGO_PKG_VERSION"));
    Ok(())
}

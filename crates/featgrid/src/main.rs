//! featgrid - interactive feature/platform compatibility matrix viewer.
//!
//! Loads a support document once (local file or HTTP URL) and renders it as
//! a filterable grid with per-cell details.
//!
//! Usage:
//!   featgrid                 # load ./data.json
//!   featgrid matrix.json     # load a local file
//!   featgrid https://...     # fetch the document over HTTP

use clap::Parser;
use tracing_subscriber::EnvFilter;

use featgrid_core::load::load_document;
use featgrid_core::tui::App;

/// Feature compatibility matrix viewer.
#[derive(Parser)]
#[command(name = "featgrid", about = "Feature compatibility matrix viewer", version)]
struct Args {
    /// Path or http(s) URL of the support document.
    #[arg(value_name = "SOURCE", default_value = "data.json")]
    source: String,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr and stay silent unless RUST_LOG is set, so the
    // alternate screen is not disturbed.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let registry = match load_document(&args.source) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Failed to load compatibility data from '{}': {}", args.source, e);
            std::process::exit(1);
        }
    };

    let app = App::new(registry, args.source);
    if let Err(e) = app.run() {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

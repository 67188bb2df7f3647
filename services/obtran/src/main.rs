//! Rotated-pole coordinate converter.
//!
//! Reads `x y` lines from a file or stdin, converts them with a projection
//! built from a `+proj=...` definition and writes one result per line.

mod config;
mod convert;

use anyhow::{Context, Result};
use clap::Parser;
use projection::ProjectionRegistry;
use std::io::{self, BufWriter, Write};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use config::Args;
use convert::{read_input, Converter, Direction};

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let definition = args.definition();
    let registry = ProjectionRegistry::with_defaults();
    let projection = registry
        .create_from_str(&definition)
        .with_context(|| format!("Failed to build projection from '{definition}'"))?;
    debug!(projection = projection.name(), definition = %definition, "Projection ready");

    let direction = if args.inverse {
        Direction::Inverse
    } else {
        Direction::Forward
    };
    let converter = Converter::new(projection, direction, args.strict);

    let text = read_input(args.input.as_deref())?;
    let records = converter.run(&text)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for record in &records {
        writeln!(out, "{}", converter.format(record, args.format)?)?;
    }
    out.flush()?;

    Ok(())
}

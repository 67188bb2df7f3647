//! Command-line configuration.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How converted points are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `x y` per line, `* *` for points without a result
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "obtran")]
#[command(about = "Convert coordinates with a rotated-pole (ob_tran) projection")]
pub struct Args {
    /// Run the inverse transformation (projected to geographic)
    #[arg(short = 'I', long)]
    pub inverse: bool,

    /// Output format
    #[arg(long, value_enum, env = "OBTRAN_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Read coordinates from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "OBTRAN_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Abort on the first line that cannot be converted
    #[arg(long)]
    pub strict: bool,

    /// Projection definition, e.g. +proj=ob_tran +o_proj=moll +o_lat_p=45
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub definition: Vec<String>,
}

impl Args {
    /// The projection definition as a single `+key=value` string.
    pub fn definition(&self) -> String {
        self.definition.join(" ")
    }
}

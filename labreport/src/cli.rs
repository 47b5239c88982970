use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Terminal viewer for the Sprite biochemistry lab report.
#[derive(Debug, Parser)]
#[command(name = "labreport", version)]
pub struct Cli {
    /// Write logs to this file (the terminal itself is the UI).
    #[arg(long, default_value = "labreport.log")]
    pub log_file: PathBuf,

    /// Log level: off, error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,

    /// Disable mouse capture; keyboard only.
    #[arg(long)]
    pub no_mouse: bool,
}

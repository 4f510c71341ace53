use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "h3probe",
    about = "Checks whether hosts serve HTTP/3 and whether QUIC gets through on UDP/443"
)]
pub struct Cli {
    /// URLs to probe (https://host[:port][/path]). Falls back to the config file targets.
    pub urls: Vec<String>,

    /// YAML config file
    #[arg(short, long, value_name = "FILE", env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Write results as CSV to this file
    #[arg(long, value_name = "FILE")]
    pub csv_out: Option<PathBuf>,

    /// How long to wait for a UDP reply to the QUIC Initial
    #[arg(long)]
    pub udp_timeout_ms: Option<u64>,

    /// Bound on each HTTPS negotiation request
    #[arg(long)]
    pub http_timeout_seconds: Option<u64>,

    /// Diagnostic log file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Read URLs and commands (list, export <file>, clear, quit) from stdin
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub interactive: bool,
}

impl Cli {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

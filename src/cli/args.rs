//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal form that turns 12-character codes into QR codes
#[derive(Parser, Debug)]
#[command(name = "qr-form")]
#[command(version, about = "Generate QR codes from 12-character alphanumeric codes", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Open the form
    qr-form

    # Open the form pre-filled (input is normalized: t2020-000-pppp -> T2020000PPPP)
    qr-form --code t2020-000-pppp

    # Write a PNG without opening the form
    qr-form generate T2020000PPPP -o pickup.png")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Initial field contents (normalized like typed input)
    #[arg(long)]
    pub code: Option<String>,

    /// Hide status bar
    #[arg(long)]
    pub no_status: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a code and write it as a PNG file
    Generate {
        /// The code to encode (normalized before validation)
        code: String,

        /// Output file (default: <CODE>.png in the configured export directory)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

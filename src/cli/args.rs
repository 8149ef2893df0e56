use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Padding selection shared by encode and decode
#[derive(Args, Debug)]
pub struct PaddingArgs {
    /// Unpadded output (same as --padding none)
    #[arg(short = 'r', long, conflicts_with = "padding")]
    pub raw: bool,

    /// Padding symbol: a single 3-byte character, "U+XXXX", or "none"
    #[arg(short = 'p', long, value_name = "CHAR")]
    pub padding: Option<String>,
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub padding: PaddingArgs,

    /// Break lines after this many symbols (0 = no wrapping)
    #[arg(short = 'w', long, value_name = "COLS")]
    pub wrap: Option<usize>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub padding: PaddingArgs,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the 64 symbols with their digit values
    Alphabet,
}

mod args;
mod config;
mod global;
mod handlers;

use args::{ConfigAction, DecodeArgs, EncodeArgs};
use clap::{Parser, Subcommand};
use global::GlobalArgs;
use hexagrams64::DecodeError;
use std::io::IsTerminal;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "hexagrams64")]
#[command(version)]
#[command(about = "Base64 encoding with the 64 Yijing hexagrams as its alphabet", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode data as hexagrams
    Encode(EncodeArgs),

    /// Decode hexagrams back to bytes
    Decode(DecodeArgs),

    /// Inspect settings and the alphabet
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(cli.command, &cli.global) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(e.as_ref(), &cli.global);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(global)?;

    match command {
        Commands::Encode(args) => handlers::encode::handle(args, global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, global, &config),
        Commands::Config { action } => handlers::config::handle(action, global, &config),
    }
}

/// Prints an error to stderr, with a hint line for decode failures.
fn report(err: &(dyn std::error::Error + 'static), global: &GlobalArgs) {
    let use_color = should_use_color(global.no_color);

    if use_color {
        eprintln!("\x1b[1;31merror:\x1b[0m {}", err);
    } else {
        eprintln!("error: {}", err);
    }

    if let Some(decode_err) = err.downcast_ref::<DecodeError>() {
        if decode_err.written() > 0 {
            eprintln!("  ({} bytes decoded before the failure)", decode_err.written());
        }
        if use_color {
            eprintln!("\x1b[1;36mhint:\x1b[0m {}", decode_err.hint());
        } else {
            eprintln!("hint: {}", decode_err.hint());
        }
    }
}

/// Check if colored output should be used
fn should_use_color(no_color: bool) -> bool {
    // Respect --no-color and the NO_COLOR environment variable
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    std::io::stderr().is_terminal()
}

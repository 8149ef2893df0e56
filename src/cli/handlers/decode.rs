use crate::cli::{
    args::DecodeArgs,
    config::resolve_encoding,
    global::GlobalArgs,
    handlers::read_input,
};
use hexagrams64::Config;
use std::fs;
use std::io::{self, Write};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = resolve_encoding(&args.padding, config)?;
    let input = read_input(args.file.as_ref(), global)?;
    let symbols = strip_whitespace(&input);

    let mut decoded = Vec::with_capacity(encoding.decoded_len(symbols.len()));
    encoding.append_decode(&mut decoded, &symbols)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &decoded)?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&decoded)?;
        stdout.flush()?;
    }

    Ok(())
}

/// Drops ASCII whitespace. No byte of a 3-byte unit is ASCII, so line breaks
/// and indentation can go without touching the symbols.
fn strip_whitespace(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect()
}

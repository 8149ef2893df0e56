use crate::cli::{
    args::EncodeArgs,
    config::resolve_encoding,
    global::GlobalArgs,
    handlers::read_input,
};
use hexagrams64::{Config, SYMBOL_WIDTH};
use std::fs;
use std::io::{self, Write};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = resolve_encoding(&args.padding, config)?;
    let data = read_input(args.file.as_ref(), global)?;

    let mut encoded = Vec::with_capacity(encoding.encoded_len(data.len()) + 1);
    encoding.append_encode(&mut encoded, &data);

    let wrap = args.wrap.unwrap_or_else(|| config.wrap());
    let output = wrap_lines(&encoded, wrap);

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&output)?;
        stdout.flush()?;
    }

    Ok(())
}

/// Breaks encoded output every `cols` symbols and terminates it with a newline.
///
/// Every symbol, padding included, is [`SYMBOL_WIDTH`] bytes, so splitting on
/// byte multiples never cuts a code point.
fn wrap_lines(encoded: &[u8], cols: usize) -> Vec<u8> {
    if cols == 0 || encoded.is_empty() {
        let mut out = encoded.to_vec();
        out.push(b'\n');
        return out;
    }

    let line_bytes = cols * SYMBOL_WIDTH;
    let mut out = Vec::with_capacity(encoded.len() + encoded.len() / line_bytes + 1);
    for line in encoded.chunks(line_bytes) {
        out.extend_from_slice(line);
        out.push(b'\n');
    }
    out
}

use crate::cli::{args::PaddingArgs, global::GlobalArgs};
use hexagrams64::{Config, Encoding, RAW_STANDARD, parse_padding};

/// Loads settings from `--config`, or from the standard locations.
pub fn load_config(global: &GlobalArgs) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match &global.config {
        Some(path) => Config::load_with_file(path)?,
        None => Config::load_with_overrides(global.quiet)?,
    };
    Ok(config)
}

/// Resolves the encoding: `--raw`, then `--padding`, then the settings file.
pub fn resolve_encoding(
    args: &PaddingArgs,
    config: &Config,
) -> Result<Encoding, Box<dyn std::error::Error>> {
    if args.raw {
        return Ok(RAW_STANDARD);
    }

    match &args.padding {
        Some(value) => {
            let padding = parse_padding(value)?;
            Ok(Encoding::default().try_with_padding(padding)?)
        }
        None => Ok(config.encoding()?),
    }
}

/// Describes a padding setting for humans.
pub fn describe_padding(padding: Option<char>) -> String {
    match padding {
        Some(c) => format!("{} (U+{:04X})", c, c as u32),
        None => "none".to_string(),
    }
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::encoders::encoding::{Encoding, STANDARD};
use crate::encoders::errors::PaddingError;

/// Padding used when no settings file says otherwise.
pub const DEFAULT_PADDING: &str = "〇";

/// Errors raised while loading or applying settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("padding must be a single character, \"U+XXXX\" or \"none\", got {0:?}")]
    PaddingSyntax(String),

    #[error(transparent)]
    Padding(#[from] PaddingError),
}

/// User-tunable settings. Unset keys fall through to earlier layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Padding symbol, `"U+XXXX"`, or `"none"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    /// Symbols per output line when encoding (0 = no wrapping)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap: Option<usize>,
}

/// Layered configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Parses settings from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the settings bundled with the library.
    pub fn load_default() -> Result<Self, ConfigError> {
        let content = include_str!("../../hexagrams64.toml");
        Self::from_toml(content)
    }

    /// Loads settings from a file. A leading `~` is expanded.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads the built-in settings with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/hexagrams64/config.toml`
    /// 3. `./hexagrams64.toml`
    ///
    /// A broken override file is skipped with a warning on stderr unless
    /// `quiet` is set.
    pub fn load_with_overrides(quiet: bool) -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("hexagrams64").join("config.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => config.merge(user_config),
                    Err(e) if !quiet => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                    Err(_) => {}
                }
            }
        }

        let local_config_path = Path::new("hexagrams64.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => config.merge(local_config),
                Err(e) if !quiet => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
                Err(_) => {}
            }
        }

        Ok(config)
    }

    /// Loads the built-in settings overridden by one explicit file.
    ///
    /// Unlike [`load_with_overrides`](Self::load_with_overrides), a missing
    /// or malformed file is an error.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;
        config.merge(Self::load_from_file(path)?);
        Ok(config)
    }

    /// Merges another configuration into this one. Keys set in `other` win.
    pub fn merge(&mut self, other: Config) {
        if other.settings.padding.is_some() {
            self.settings.padding = other.settings.padding;
        }
        if other.settings.wrap.is_some() {
            self.settings.wrap = other.settings.wrap;
        }
    }

    /// The configured padding string.
    pub fn padding(&self) -> &str {
        self.settings.padding.as_deref().unwrap_or(DEFAULT_PADDING)
    }

    /// The configured wrap width in symbols.
    pub fn wrap(&self) -> usize {
        self.settings.wrap.unwrap_or(0)
    }

    /// Builds the encoding these settings describe.
    pub fn encoding(&self) -> Result<Encoding, ConfigError> {
        let padding = parse_padding(self.padding())?;
        Ok(STANDARD.try_with_padding(padding)?)
    }
}

/// Parses a padding setting: `"none"`, `"U+XXXX"`, or a single character.
///
/// Only the syntax is checked here; alphabet collisions and width are left to
/// [`Encoding::try_with_padding`].
pub fn parse_padding(value: &str) -> Result<Option<char>, ConfigError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    if let Some(hex) = value
        .strip_prefix("U+")
        .or_else(|| value.strip_prefix("u+"))
    {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(Some)
            .ok_or_else(|| ConfigError::PaddingSyntax(value.to_string()));
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(ConfigError::PaddingSyntax(value.to_string())),
    }
}

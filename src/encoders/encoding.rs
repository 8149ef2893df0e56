use crate::core::alphabet;
use crate::core::symbol;

use super::errors::PaddingError;

/// Standard padding symbol: U+3007 IDEOGRAPHIC NUMBER ZERO.
pub const STD_PADDING: char = '\u{3007}';

/// Disables padding when passed to [`Encoding::with_padding`].
pub const NO_PADDING: Option<char> = None;

/// Padded encoding, the hexagram counterpart of RFC 4648 base64.
pub const STANDARD: Encoding = Encoding {
    pad: Some(STD_PADDING),
};

/// Unpadded encoding: the final quantum is cut to 2 or 3 symbols.
pub const RAW_STANDARD: Encoding = Encoding { pad: NO_PADDING };

/// Encoding configuration.
///
/// The alphabet is fixed, so the only knob is the padding symbol. Values are
/// immutable and cheap to copy; [`with_padding`](Self::with_padding) returns a
/// new configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoding {
    pub(crate) pad: Option<char>,
}

impl Default for Encoding {
    fn default() -> Self {
        STANDARD
    }
}

impl Encoding {
    /// Returns a copy of this encoding using `padding`, or no padding for
    /// [`NO_PADDING`].
    ///
    /// # Panics
    ///
    /// Panics if `padding` is a hexagram or is not 3 bytes wide in UTF-8.
    /// Use [`try_with_padding`](Self::try_with_padding) for untrusted input.
    pub fn with_padding(self, padding: Option<char>) -> Self {
        match self.try_with_padding(padding) {
            Ok(encoding) => encoding,
            Err(e) => panic!("invalid padding: {}", e),
        }
    }

    /// Fallible form of [`with_padding`](Self::with_padding).
    pub fn try_with_padding(self, padding: Option<char>) -> Result<Self, PaddingError> {
        if padding == self.pad {
            return Ok(self);
        }
        if let Some(c) = padding {
            if !symbol::is_fixed_width(c) {
                return Err(PaddingError::NotThreeBytes(c));
            }
            if alphabet::is_symbol(c) {
                return Err(PaddingError::AlphabetMember(c));
            }
        }
        Ok(Encoding { pad: padding })
    }

    /// Returns the padding symbol, if any.
    pub fn padding(&self) -> Option<char> {
        self.pad
    }

    /// Returns `true` when partial quanta are padded out to 4 symbols.
    pub fn is_padded(&self) -> bool {
        self.pad.is_some()
    }

    /// Code point of the padding symbol as read back by the transcoder.
    #[inline]
    pub(crate) fn pad_code_point(&self) -> Option<u32> {
        self.pad.map(|c| c as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(STANDARD.padding(), Some('〇'));
        assert!(STANDARD.is_padded());
        assert_eq!(RAW_STANDARD.padding(), None);
        assert!(!RAW_STANDARD.is_padded());
        assert_eq!(Encoding::default(), STANDARD);
    }

    #[test]
    fn test_with_padding_returns_new_value() {
        let custom = STANDARD.with_padding(Some('〓'));
        assert_eq!(custom.padding(), Some('〓'));
        assert_eq!(STANDARD.padding(), Some(STD_PADDING));
        assert_eq!(custom.with_padding(NO_PADDING), RAW_STANDARD);
        assert_eq!(RAW_STANDARD.with_padding(Some(STD_PADDING)), STANDARD);
    }

    #[test]
    fn test_padding_range_boundaries() {
        assert!(STANDARD.try_with_padding(Some('\u{0800}')).is_ok());
        assert!(STANDARD.try_with_padding(Some('\u{4DBF}')).is_ok());
        assert!(STANDARD.try_with_padding(Some('\u{4E00}')).is_ok());
        assert!(STANDARD.try_with_padding(Some('\u{FFFF}')).is_ok());
    }

    #[test]
    fn test_rejects_alphabet_member() {
        assert_eq!(
            STANDARD.try_with_padding(Some('䷀')),
            Err(PaddingError::AlphabetMember('䷀'))
        );
        assert_eq!(
            STANDARD.try_with_padding(Some('䷿')),
            Err(PaddingError::AlphabetMember('䷿'))
        );
    }

    #[test]
    fn test_rejects_wrong_width() {
        assert_eq!(
            STANDARD.try_with_padding(Some('=')),
            Err(PaddingError::NotThreeBytes('='))
        );
        assert_eq!(
            STANDARD.try_with_padding(Some('\u{07FF}')),
            Err(PaddingError::NotThreeBytes('\u{07FF}'))
        );
        assert_eq!(
            STANDARD.try_with_padding(Some('\u{10000}')),
            Err(PaddingError::NotThreeBytes('\u{10000}'))
        );
    }

    #[test]
    #[should_panic(expected = "invalid padding")]
    fn test_with_padding_panics_on_member() {
        let _ = STANDARD.with_padding(Some('䷁'));
    }
}

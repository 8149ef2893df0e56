use thiserror::Error;

use crate::core::symbol::{MALFORMED_SYMBOL, SYMBOL_WIDTH};

/// What went wrong while decoding a symbol stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    /// The input length is not a multiple of the 3-byte symbol width
    #[error("invalid length {len}: input must be a whole number of 3-byte symbols")]
    InvalidLength { len: usize },

    /// Padding in the wrong place, or missing where the quantum needs it
    #[error("invalid padding at byte offset {offset}")]
    InvalidPadding { offset: usize },

    /// A unit that is neither a hexagram nor the padding symbol
    #[error("unrecognized symbol {} at byte offset {offset}", describe_unit(*.code_point, .unit))]
    UnrecognizedSymbol {
        code_point: u32,
        unit: [u8; SYMBOL_WIDTH],
        offset: usize,
    },

    /// Input continues after a padded final quantum
    #[error("trailing garbage at byte offset {offset}")]
    TrailingGarbage { offset: usize },
}

/// A decode failure together with the number of bytes already written.
///
/// Decoding stops at the first bad quantum. Everything before it has been
/// written to the destination and is trustworthy; nothing after it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct DecodeError {
    kind: DecodeErrorKind,
    written: usize,
}

impl DecodeError {
    pub(crate) fn new(kind: DecodeErrorKind, written: usize) -> Self {
        DecodeError { kind, written }
    }

    /// The failure classification.
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// Bytes successfully decoded before the failure.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Byte offset in the symbol stream where decoding stopped.
    pub fn offset(&self) -> usize {
        match self.kind {
            DecodeErrorKind::InvalidLength { .. } => 0,
            DecodeErrorKind::InvalidPadding { offset }
            | DecodeErrorKind::UnrecognizedSymbol { offset, .. }
            | DecodeErrorKind::TrailingGarbage { offset } => offset,
        }
    }

    /// A one-line suggestion for people staring at the error.
    pub fn hint(&self) -> &'static str {
        match self.kind {
            DecodeErrorKind::InvalidLength { .. } => {
                "the input was probably truncated or mixed with ASCII text"
            }
            DecodeErrorKind::InvalidPadding { .. } => {
                "check the trailing 〇 symbols, or decode with --raw if the input is unpadded"
            }
            DecodeErrorKind::UnrecognizedSymbol { .. } => {
                "valid symbols are the hexagrams ䷀ (U+4DC0) through ䷿ (U+4DFF)"
            }
            DecodeErrorKind::TrailingGarbage { .. } => {
                "padding may only appear in the final quantum"
            }
        }
    }
}

fn describe_unit(code_point: u32, unit: &[u8; SYMBOL_WIDTH]) -> String {
    match char::from_u32(code_point) {
        Some(c) if code_point != MALFORMED_SYMBOL => format!("'{}' (U+{:04X})", c, code_point),
        _ => format!("bytes 0x{}", hex::encode(unit)),
    }
}

/// Rejected padding symbol passed to [`Encoding::try_with_padding`].
///
/// [`Encoding::try_with_padding`]: crate::Encoding::try_with_padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaddingError {
    #[error("padding symbol '{0}' (U+{code:04X}) is a member of the alphabet", code = *.0 as u32)]
    AlphabetMember(char),

    #[error("padding symbol '{0}' (U+{code:04X}) is not 3 bytes wide in UTF-8", code = *.0 as u32)]
    NotThreeBytes(char),
}

//! Base64 with the 64 Yijing hexagrams as its alphabet.
//!
//! Every six bits of input become one hexagram (U+4DC0..U+4DFF), exactly as
//! base64 maps them to `A`..`/`. Each symbol is 3 bytes of UTF-8, so the
//! encoded form is four times the size of the input, rounded up to whole
//! quanta. Padding uses `〇` (U+3007) by default, and can be swapped for
//! another 3-byte symbol or switched off.
//!
//! ```
//! use hexagrams64::{RAW_STANDARD, STANDARD};
//!
//! assert_eq!(STANDARD.encode_to_string(b"fo"), "䷙䷦䷼〇");
//! assert_eq!(RAW_STANDARD.encode_to_string(b"fo"), "䷙䷦䷼");
//! assert_eq!(STANDARD.decode_string("䷙䷦䷽䷯").unwrap(), b"foo");
//! ```
//!
//! Slice and `Vec` based variants avoid extra allocations:
//!
//! ```
//! use hexagrams64::STANDARD;
//!
//! let mut out = b"data: ".to_vec();
//! STANDARD.append_encode(&mut out, b"foobar");
//! assert_eq!(out, "data: ䷙䷦䷽䷯䷘䷦䷅䷲".as_bytes());
//!
//! let mut buf = vec![0u8; STANDARD.decoded_len(24)];
//! let n = STANDARD.decode(&mut buf, &out[6..]).unwrap();
//! assert_eq!(&buf[..n], b"foobar");
//! ```

pub mod core;
pub mod encoders;
pub mod prelude;

pub use crate::core::alphabet::{ALPHABET, digit_to_symbol, symbol_to_digit};
pub use crate::core::config::{Config, ConfigError, Settings, parse_padding};
pub use crate::core::symbol::{SYMBOL_WIDTH, read_symbol, write_symbol};
pub use encoders::{
    DecodeError, DecodeErrorKind, Encoding, NO_PADDING, PaddingError, RAW_STANDARD, STANDARD,
    STD_PADDING,
};

/// Encodes `data` with [`STANDARD`] padding.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode_to_string(data)
}

/// Decodes a [`STANDARD`] padded hexagram string.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode_string(encoded)
}

#[cfg(test)]
mod tests;

//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use hexagrams64::prelude::*;
//!
//! let encoded = encode(b"Hello");
//! assert_eq!(decode(&encoded).unwrap(), b"Hello");
//! assert_eq!(RAW_STANDARD.encoded_len(5), 21);
//! ```

pub use crate::{
    // Errors
    DecodeError,
    DecodeErrorKind,
    // Configuration
    Encoding,
    NO_PADDING,
    PaddingError,
    RAW_STANDARD,
    STANDARD,
    STD_PADDING,

    // Core encoding/decoding
    decode,
    encode,
};

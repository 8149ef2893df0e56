pub mod decoder;
pub mod encoder;
pub mod encoding;
pub mod errors;

// Re-export commonly used items
pub use encoding::{Encoding, NO_PADDING, RAW_STANDARD, STANDARD, STD_PADDING};
pub use errors::{DecodeError, DecodeErrorKind, PaddingError};

//! The fixed hexagram alphabet.
//!
//! Digit `d` (0..=63) maps to the Yijing hexagram U+4DC0 + `d`, so the table
//! lines up with the standard base64 alphabet index for index: `A` is ䷀,
//! `/` is ䷿.

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 64;

/// First hexagram code point (digit 0).
pub const FIRST_SYMBOL: char = '\u{4DC0}';

/// Last hexagram code point (digit 63).
pub const LAST_SYMBOL: char = '\u{4DFF}';

/// Marker returned by [`decode_digit`] for code points outside the alphabet.
pub(crate) const INVALID_DIGIT: u8 = 0xFF;

/// The 64 hexagrams in digit order.
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    '䷀', '䷁', '䷂', '䷃', '䷄', '䷅', '䷆', '䷇', '䷈', '䷉', '䷊', '䷋', '䷌', '䷍', '䷎', '䷏',
    '䷐', '䷑', '䷒', '䷓', '䷔', '䷕', '䷖', '䷗', '䷘', '䷙', '䷚', '䷛', '䷜', '䷝', '䷞', '䷟',
    '䷠', '䷡', '䷢', '䷣', '䷤', '䷥', '䷦', '䷧', '䷨', '䷩', '䷪', '䷫', '䷬', '䷭', '䷮', '䷯',
    '䷰', '䷱', '䷲', '䷳', '䷴', '䷵', '䷶', '䷷', '䷸', '䷹', '䷺', '䷻', '䷼', '䷽', '䷾', '䷿',
];

/// Returns the symbol for a 6-bit digit.
///
/// Only the low six bits of `digit` are used.
#[inline]
pub const fn digit_to_symbol(digit: u8) -> char {
    ALPHABET[(digit & 0x3F) as usize]
}

/// Returns the digit for a code point, or `None` if it is not a hexagram.
///
/// The padding symbol is never a member; recognising it is up to the caller.
#[inline]
pub const fn symbol_to_digit(code_point: u32) -> Option<u8> {
    match decode_digit(code_point) {
        INVALID_DIGIT => None,
        digit => Some(digit),
    }
}

/// Returns `true` if `c` is one of the 64 hexagrams.
#[inline]
pub const fn is_symbol(c: char) -> bool {
    decode_digit(c as u32) != INVALID_DIGIT
}

/// Reverse lookup used by the decoder hot loop.
///
/// The alphabet is a contiguous range, so a bounds check replaces a table.
#[inline]
pub(crate) const fn decode_digit(code_point: u32) -> u8 {
    if code_point >= FIRST_SYMBOL as u32 && code_point <= LAST_SYMBOL as u32 {
        (code_point - FIRST_SYMBOL as u32) as u8
    } else {
        INVALID_DIGIT
    }
}

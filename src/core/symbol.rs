//! Fixed-width transcoding between code points and 3-byte units.
//!
//! Every alphabet and padding symbol lies in U+0800..=U+FFFF, whose UTF-8
//! form is always `1110xxxx 10xxxxxx 10xxxxxx`. The encoder and decoder only
//! ever move in 3-byte strides, so these helpers never branch on width.

/// Width in bytes of every symbol on the wire.
pub const SYMBOL_WIDTH: usize = 3;

/// Width in bytes of one encoded quantum (4 symbols).
pub const QUANTUM_WIDTH: usize = 4 * SYMBOL_WIDTH;

/// Value read back from a unit that is not shaped like a 3-byte UTF-8
/// sequence. It is neither an alphabet member nor a valid padding symbol.
pub const MALFORMED_SYMBOL: u32 = u32::MAX;

/// Returns `true` if `c` occupies exactly [`SYMBOL_WIDTH`] bytes in UTF-8.
#[inline]
pub const fn is_fixed_width(c: char) -> bool {
    c.len_utf8() == SYMBOL_WIDTH
}

/// Writes `c` as a 3-byte unit at `dst[offset..offset + 3]` and returns the
/// offset just past it.
///
/// `c` must satisfy [`is_fixed_width`]; wider or narrower code points are
/// truncated to their low 16 bits.
#[inline]
pub fn write_symbol(dst: &mut [u8], offset: usize, c: char) -> usize {
    let unit = &mut dst[offset..offset + SYMBOL_WIDTH];
    let c = c as u32;
    unit[0] = 0xE0 | ((c >> 12) & 0x0F) as u8;
    unit[1] = 0x80 | ((c >> 6) & 0x3F) as u8;
    unit[2] = 0x80 | (c & 0x3F) as u8;
    offset + SYMBOL_WIDTH
}

/// Writes four symbols back to back and returns the offset just past them.
#[inline]
pub fn write_quantum(dst: &mut [u8], offset: usize, symbols: [char; 4]) -> usize {
    let quantum = &mut dst[offset..offset + QUANTUM_WIDTH];
    for (unit, c) in quantum.chunks_exact_mut(SYMBOL_WIDTH).zip(symbols) {
        write_symbol(unit, 0, c);
    }
    offset + QUANTUM_WIDTH
}

/// Reads the 3-byte unit at `src[offset..offset + 3]` back into a code point.
///
/// Membership is not checked here. A unit whose marker bits are wrong reads
/// as [`MALFORMED_SYMBOL`].
#[inline]
pub fn read_symbol(src: &[u8], offset: usize) -> u32 {
    let unit = &src[offset..offset + SYMBOL_WIDTH];
    let well_formed = ((unit[0] & 0xF0) == 0xE0)
        & ((unit[1] & 0xC0) == 0x80)
        & ((unit[2] & 0xC0) == 0x80);
    let code_point = (u32::from(unit[0] & 0x0F) << 12)
        | (u32::from(unit[1] & 0x3F) << 6)
        | u32::from(unit[2] & 0x3F);
    code_point | u32::from(!well_formed).wrapping_neg()
}

/// Reads four consecutive units starting at `offset`.
#[inline]
pub fn read_quantum(src: &[u8], offset: usize) -> [u32; 4] {
    [
        read_symbol(src, offset),
        read_symbol(src, offset + SYMBOL_WIDTH),
        read_symbol(src, offset + 2 * SYMBOL_WIDTH),
        read_symbol(src, offset + 3 * SYMBOL_WIDTH),
    ]
}

/// Copies the raw unit at `offset`, for error reporting.
#[inline]
pub(crate) fn unit_at(src: &[u8], offset: usize) -> [u8; SYMBOL_WIDTH] {
    [src[offset], src[offset + 1], src[offset + 2]]
}

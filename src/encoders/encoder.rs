use crate::core::alphabet::digit_to_symbol;
use crate::core::symbol::{QUANTUM_WIDTH, SYMBOL_WIDTH, write_quantum, write_symbol};

use super::encoding::Encoding;

/// Splits three bytes into four 6-bit digits, most significant first.
#[inline]
fn split_quantum(b0: u8, b1: u8, b2: u8) -> [u8; 4] {
    let val = (u32::from(b0) << 16) | (u32::from(b1) << 8) | u32::from(b2);
    [
        ((val >> 18) & 0x3F) as u8,
        ((val >> 12) & 0x3F) as u8,
        ((val >> 6) & 0x3F) as u8,
        (val & 0x3F) as u8,
    ]
}

impl Encoding {
    /// Encodes `src` into `dst`.
    ///
    /// # Panics
    ///
    /// Panics unless `dst.len() == self.encoded_len(src.len())`.
    pub fn encode(&self, dst: &mut [u8], src: &[u8]) {
        let expected = self.encoded_len(src.len());
        assert_eq!(
            dst.len(),
            expected,
            "encode destination is {} bytes, needs exactly {}",
            dst.len(),
            expected
        );

        let mut di = 0;
        let chunks = src.chunks_exact(3);
        let tail = chunks.remainder();

        for chunk in chunks {
            let [d0, d1, d2, d3] = split_quantum(chunk[0], chunk[1], chunk[2]);
            di = write_quantum(
                dst,
                di,
                [
                    digit_to_symbol(d0),
                    digit_to_symbol(d1),
                    digit_to_symbol(d2),
                    digit_to_symbol(d3),
                ],
            );
        }

        // The dropped trailing digits are always zero.
        match tail {
            [] => {}
            &[b0] => {
                let [d0, d1, _, _] = split_quantum(b0, 0, 0);
                di = write_symbol(dst, di, digit_to_symbol(d0));
                di = write_symbol(dst, di, digit_to_symbol(d1));
                if let Some(pad) = self.pad {
                    di = write_symbol(dst, di, pad);
                    di = write_symbol(dst, di, pad);
                }
            }
            &[b0, b1] => {
                let [d0, d1, d2, _] = split_quantum(b0, b1, 0);
                di = write_symbol(dst, di, digit_to_symbol(d0));
                di = write_symbol(dst, di, digit_to_symbol(d1));
                di = write_symbol(dst, di, digit_to_symbol(d2));
                if let Some(pad) = self.pad {
                    di = write_symbol(dst, di, pad);
                }
            }
            _ => unreachable!("chunks_exact(3) leaves at most 2 bytes"),
        }

        debug_assert_eq!(di, dst.len());
    }

    /// Appends the encoding of `src` to `dst`.
    ///
    /// Spare capacity is reused when it suffices. The existing contents of
    /// `dst` are left untouched.
    pub fn append_encode(&self, dst: &mut Vec<u8>, src: &[u8]) {
        let start = dst.len();
        let n = self.encoded_len(src.len());
        dst.reserve(n);
        dst.resize(start + n, 0);
        self.encode(&mut dst[start..], src);
    }

    /// Encodes `src` into a new `String`.
    pub fn encode_to_string(&self, src: &[u8]) -> String {
        let mut buf = vec![0u8; self.encoded_len(src.len())];
        self.encode(&mut buf, src);
        // Every unit written is a complete 3-byte UTF-8 sequence of a
        // non-surrogate BMP code point.
        String::from_utf8(buf).expect("hexagram units are valid UTF-8")
    }

    /// Exact encoded length in bytes for `n` input bytes.
    pub fn encoded_len(&self, n: usize) -> usize {
        if self.pad.is_none() {
            // 3k -> 12k, 3k+1 -> 12k+6, 3k+2 -> 12k+9
            return n / 3 * QUANTUM_WIDTH + (n % 3 * 8).div_ceil(6) * SYMBOL_WIDTH;
        }
        // 3k -> 12k, 3k+1 and 3k+2 -> 12(k+1)
        n.div_ceil(3) * QUANTUM_WIDTH
    }
}

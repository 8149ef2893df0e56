use crate::core::alphabet::{INVALID_DIGIT, decode_digit};
use crate::core::symbol::{QUANTUM_WIDTH, SYMBOL_WIDTH, read_quantum, read_symbol, unit_at};

use super::encoding::Encoding;
use super::errors::{DecodeError, DecodeErrorKind};

/// Joins four 6-bit digits into three bytes.
#[inline]
fn join_quantum(digits: [u8; 4]) -> [u8; 3] {
    let val = (u32::from(digits[0]) << 18)
        | (u32::from(digits[1]) << 12)
        | (u32::from(digits[2]) << 6)
        | u32::from(digits[3]);
    [(val >> 16) as u8, (val >> 8) as u8, val as u8]
}

impl Encoding {
    /// Decodes the symbol stream `src` into `dst` and returns the number of
    /// bytes written.
    ///
    /// On error, [`DecodeError::written`] reports how many bytes of `dst` hold
    /// valid output.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is too small for the decoded data. A destination of
    /// [`decoded_len(src.len())`](Self::decoded_len) bytes is always enough.
    pub fn decode(&self, dst: &mut [u8], src: &[u8]) -> Result<usize, DecodeError> {
        if src.len() % SYMBOL_WIDTH != 0 {
            return Err(DecodeError::new(
                DecodeErrorKind::InvalidLength { len: src.len() },
                0,
            ));
        }

        let mut si = 0;
        let mut n = 0;

        while src.len() - si >= QUANTUM_WIDTH && dst.len() - n >= 3 {
            let [r0, r1, r2, r3] = read_quantum(src, si);
            let digits = [
                decode_digit(r0),
                decode_digit(r1),
                decode_digit(r2),
                decode_digit(r3),
            ];

            // Valid digits never set the top two bits.
            if (digits[0] | digits[1] | digits[2] | digits[3]) == INVALID_DIGIT {
                self.decode_quantum(dst, src, &mut si, &mut n)
                    .map_err(|kind| DecodeError::new(kind, n))?;
            } else {
                dst[n..n + 3].copy_from_slice(&join_quantum(digits));
                n += 3;
                si += QUANTUM_WIDTH;
            }
        }

        while si < src.len() {
            self.decode_quantum(dst, src, &mut si, &mut n)
                .map_err(|kind| DecodeError::new(kind, n))?;
        }

        Ok(n)
    }

    /// Decodes one quantum symbol by symbol, validating padding.
    ///
    /// Advances `si` past what was consumed and `n` past what was written.
    /// Trailing garbage is reported after the quantum's bytes are written.
    fn decode_quantum(
        &self,
        dst: &mut [u8],
        src: &[u8],
        si: &mut usize,
        n: &mut usize,
    ) -> Result<(), DecodeErrorKind> {
        let pad = self.pad_code_point();
        let start = *si;
        let mut digits = [0u8; 4];
        let mut dlen = 4;
        let mut trailing = None;

        for j in 0..4 {
            if *si == src.len() {
                if j == 0 {
                    return Ok(());
                }
                // A lone symbol carries 6 bits, never a whole byte.
                if j == 1 || pad.is_some() {
                    return Err(DecodeErrorKind::InvalidPadding { offset: start });
                }
                dlen = j;
                break;
            }

            let offset = *si;
            let code_point = read_symbol(src, offset);
            *si += SYMBOL_WIDTH;

            let digit = decode_digit(code_point);
            if digit != INVALID_DIGIT {
                digits[j] = digit;
                continue;
            }

            if pad != Some(code_point) {
                return Err(DecodeErrorKind::UnrecognizedSymbol {
                    code_point,
                    unit: unit_at(src, offset),
                    offset,
                });
            }

            match j {
                0 | 1 => return Err(DecodeErrorKind::InvalidPadding { offset }),
                2 => {
                    if *si == src.len() || Some(read_symbol(src, *si)) != pad {
                        return Err(DecodeErrorKind::InvalidPadding { offset: *si });
                    }
                    *si += SYMBOL_WIDTH;
                }
                _ => {}
            }

            if *si < src.len() {
                trailing = Some(*si);
            }
            dlen = j;
            break;
        }

        let count = dlen - 1;
        let out = dst
            .get_mut(*n..*n + count)
            .unwrap_or_else(|| panic!("decode destination too small at output byte {}", *n));
        out.copy_from_slice(&join_quantum(digits)[..count]);
        *n += count;

        match trailing {
            Some(offset) => Err(DecodeErrorKind::TrailingGarbage { offset }),
            None => Ok(()),
        }
    }

    /// Appends the decoding of `src` to `dst` and returns the number of bytes
    /// appended.
    ///
    /// On error the bytes decoded before the failure remain appended and
    /// [`DecodeError::written`] says how many there are. The existing contents
    /// of `dst` are never modified.
    pub fn append_decode(&self, dst: &mut Vec<u8>, src: &[u8]) -> Result<usize, DecodeError> {
        // Size without trailing padding so padded input does not over-allocate.
        let mut len = src.len();
        if let Some(pad) = self.pad_code_point()
            && len % SYMBOL_WIDTH == 0
        {
            while len >= SYMBOL_WIDTH && read_symbol(src, len - SYMBOL_WIDTH) == pad {
                len -= SYMBOL_WIDTH;
            }
        }
        let estimate = len / 4;

        let start = dst.len();
        dst.reserve(estimate);
        dst.resize(start + estimate, 0);

        let result = self.decode(&mut dst[start..], src);
        let written = match &result {
            Ok(written) => *written,
            Err(e) => e.written(),
        };
        dst.truncate(start + written);
        result
    }

    /// Decodes a symbol stream held in a string.
    pub fn decode_string(&self, s: &str) -> Result<Vec<u8>, DecodeError> {
        let mut buf = vec![0u8; self.decoded_len(s.len())];
        let n = self.decode(&mut buf, s.as_bytes())?;
        buf.truncate(n);
        Ok(buf)
    }

    /// Upper bound on the decoded length of `n` bytes of symbol stream.
    ///
    /// Exact for padded input; use the count returned by
    /// [`decode`](Self::decode) as the real length.
    pub fn decoded_len(&self, n: usize) -> usize {
        // 12k -> 3k, 12k+6 -> 3k+1, 12k+9 -> 3k+2
        n / 4
    }
}

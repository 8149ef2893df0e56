use crate::{
    ALPHABET, DecodeErrorKind, Encoding, RAW_STANDARD, STANDARD, STD_PADDING, decode, encode,
};

const STD_BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

struct Pair {
    decoded: &'static [u8],
    base64: &'static str,
    hexagrams: &'static str,
}

const PAIRS: &[Pair] = &[
    // RFC 3548 examples
    Pair { decoded: b"\x14\xfb\x9c\x03\xd9\x7e", base64: "FPucA9l+", hexagrams: "䷅䷏䷮䷜䷀䷽䷥䷾" },
    Pair { decoded: b"\x14\xfb\x9c\x03\xd9", base64: "FPucA9k=", hexagrams: "䷅䷏䷮䷜䷀䷽䷤〇" },
    Pair { decoded: b"\x14\xfb\x9c\x03", base64: "FPucAw==", hexagrams: "䷅䷏䷮䷜䷀䷰〇〇" },
    // RFC 4648 examples
    Pair { decoded: b"", base64: "", hexagrams: "" },
    Pair { decoded: b"f", base64: "Zg==", hexagrams: "䷙䷠〇〇" },
    Pair { decoded: b"fo", base64: "Zm8=", hexagrams: "䷙䷦䷼〇" },
    Pair { decoded: b"foo", base64: "Zm9v", hexagrams: "䷙䷦䷽䷯" },
    Pair { decoded: b"foob", base64: "Zm9vYg==", hexagrams: "䷙䷦䷽䷯䷘䷠〇〇" },
    Pair { decoded: b"fooba", base64: "Zm9vYmE=", hexagrams: "䷙䷦䷽䷯䷘䷦䷄〇" },
    Pair { decoded: b"foobar", base64: "Zm9vYmFy", hexagrams: "䷙䷦䷽䷯䷘䷦䷅䷲" },
    // Wikipedia examples
    Pair { decoded: b"sure.", base64: "c3VyZS4=", hexagrams: "䷜䷷䷕䷲䷙䷒䷸〇" },
    Pair { decoded: b"sure", base64: "c3VyZQ==", hexagrams: "䷜䷷䷕䷲䷙䷐〇〇" },
    Pair { decoded: b"sur", base64: "c3Vy", hexagrams: "䷜䷷䷕䷲" },
    Pair { decoded: b"su", base64: "c3U=", hexagrams: "䷜䷷䷔〇" },
    Pair { decoded: b"leasure.", base64: "bGVhc3VyZS4=", hexagrams: "䷛䷆䷕䷡䷜䷷䷕䷲䷙䷒䷸〇" },
    Pair { decoded: b"easure.", base64: "ZWFzdXJlLg==", hexagrams: "䷙䷖䷅䷳䷝䷗䷉䷥䷋䷠〇〇" },
    Pair { decoded: b"asure.", base64: "YXN1cmUu", hexagrams: "䷘䷗䷍䷵䷜䷦䷔䷮" },
];

/// Maps a standard base64 string onto hexagrams symbol for symbol.
fn from_base64_text(base64: &str) -> String {
    base64
        .chars()
        .map(|c| match c {
            '=' => STD_PADDING,
            _ => ALPHABET[STD_BASE64.find(c).unwrap()],
        })
        .collect()
}

fn strip_padding(s: &str) -> String {
    s.chars().filter(|&c| c != STD_PADDING).collect()
}

#[test]
fn test_pairs_match_base64() {
    for p in PAIRS {
        assert_eq!(
            from_base64_text(p.base64),
            p.hexagrams,
            "{:?} and {:?} disagree for {:?}",
            p.base64,
            p.hexagrams,
            p.decoded
        );
    }
}

#[test]
fn test_encode() {
    for p in PAIRS {
        assert_eq!(STANDARD.encode_to_string(p.decoded), p.hexagrams);

        let mut dst = b"lead".to_vec();
        STANDARD.append_encode(&mut dst, p.decoded);
        assert_eq!(dst, [&b"lead"[..], p.hexagrams.as_bytes()].concat());
    }
}

#[test]
fn test_encode_raw() {
    for p in PAIRS {
        assert_eq!(RAW_STANDARD.encode_to_string(p.decoded), strip_padding(p.hexagrams));
    }
}

#[test]
fn test_decode() {
    for p in PAIRS {
        let encoded = p.hexagrams.as_bytes();
        let mut dbuf = vec![0u8; STANDARD.decoded_len(encoded.len())];
        let count = STANDARD.decode(&mut dbuf, encoded).unwrap();
        assert_eq!(count, p.decoded.len());
        assert_eq!(&dbuf[..count], p.decoded);

        assert_eq!(STANDARD.decode_string(p.hexagrams).unwrap(), p.decoded);

        let mut dst = b"lead".to_vec();
        STANDARD.append_decode(&mut dst, encoded).unwrap();
        assert_eq!(dst, [&b"lead"[..], p.decoded].concat());
    }
}

#[test]
fn test_decode_raw() {
    for p in PAIRS {
        let raw = strip_padding(p.hexagrams);
        assert_eq!(RAW_STANDARD.decode_string(&raw).unwrap(), p.decoded);

        let mut dst = b"lead".to_vec();
        RAW_STANDARD.append_decode(&mut dst, raw.as_bytes()).unwrap();
        assert_eq!(dst, [&b"lead"[..], p.decoded].concat());
    }
}

#[test]
fn test_convenience_functions() {
    let encoded = encode(b"Hello, World!");
    assert_eq!(encoded, "䷒䷆䷕䷬䷛䷆䷼䷬䷈䷅䷝䷯䷜䷦䷱䷤䷈䷐〇〇");
    assert_eq!(decode(&encoded).unwrap(), b"Hello, World!");
}

#[test]
fn test_encode_decode_binary() {
    let data: Vec<u8> = (0..=255).collect();
    for enc in [STANDARD, RAW_STANDARD] {
        let encoded = enc.encode_to_string(&data);
        assert_eq!(encoded.len(), enc.encoded_len(data.len()));
        assert_eq!(enc.decode_string(&encoded).unwrap(), data);
    }
}

#[test]
fn test_unpadded_tail_is_short() {
    // 1 and 2 byte tails end on 2 or 3 symbols instead of a full quantum.
    assert_eq!(RAW_STANDARD.encode_to_string(b"foob").chars().count(), 6);
    assert_eq!(RAW_STANDARD.encode_to_string(b"fooba").chars().count(), 7);
    assert_eq!(RAW_STANDARD.encoded_len(4) % 12, 6);
    assert_eq!(RAW_STANDARD.encoded_len(5) % 12, 9);
}

#[test]
fn test_stray_symbol_stops_decoding() {
    let mut dst = [0u8; 6];
    let err = STANDARD
        .decode(&mut dst, "䷙䷦䷽䷯䷘A䷦䷅䷲".as_bytes())
        .unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::InvalidLength { len: 25 });

    let err = STANDARD
        .decode(&mut dst, "䷙䷦䷽䷯䷘中䷅䷲".as_bytes())
        .unwrap_err();
    assert_eq!(
        err.kind(),
        DecodeErrorKind::UnrecognizedSymbol {
            code_point: '中' as u32,
            unit: [0xE4, 0xB8, 0xAD],
            offset: 15,
        }
    );
    assert_eq!(err.written(), 3);
    assert_eq!(&dst[..3], b"foo");
}

#[test]
fn test_configurations_are_shareable() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Encoding>();

    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            std::thread::spawn(move || {
                let data = vec![i; 100];
                STANDARD.decode_string(&STANDARD.encode_to_string(&data)).unwrap() == data
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

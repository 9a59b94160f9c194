//! Custom percent-style transcoding for the console fragment format.
//!
//! Fragment components are percent-encoded with `*` as the escape lead-in;
//! `$` shows up as an alternate lead-in on inbound URLs. Decoding accepts
//! both and maps them to `%` before percent-decoding; encoding only ever
//! emits `*`. The asymmetry is part of the wire format and the console's own
//! reader depends on it.

/// Decodes a fragment component.
///
/// `*` and `$` become `%`, then percent sequences are decoded. Malformed
/// sequences pass through unchanged; invalid UTF-8 is replaced.
pub fn decode_component(raw: &str) -> String {
    let mut swapped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '*' | '$' => swapped.push('%'),
            _ => swapped.push(c),
        }
    }
    percent_decode(&swapped)
}

/// Encodes a fragment component: percent-encode, then swap `%` for `*`.
pub fn encode_component(value: &str) -> String {
    percent_encode(value).replace('%', "*")
}

fn percent_decode(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        if b == b'%' {
            let h = bytes.next();
            let l = bytes.next();
            match (h.and_then(hex_digit), l.and_then(hex_digit)) {
                (Some(high), Some(low)) => out.push(high << 4 | low),
                _ => {
                    out.push(b'%');
                    if let Some(x) = h {
                        out.push(x);
                    }
                    if let Some(x) = l {
                        out.push(x);
                    }
                }
            }
        } else {
            out.push(b);
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

const UPPERHEX: &[u8; 16] = b"0123456789ABCDEF";

fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for &b in value.as_bytes() {
        if is_unescaped(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(UPPERHEX[(b >> 4) as usize] as char);
            out.push(UPPERHEX[(b & 0x0f) as usize] as char);
        }
    }
    out
}

/// Bytes left intact by the console's encoder (ECMA `encodeURIComponent`).
fn is_unescaped(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

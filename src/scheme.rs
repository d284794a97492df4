use crate::types::SchemeType;

/// Get the scheme type from a scheme string.
/// Schemes are case-insensitive; the length + first byte match keeps the
/// common case to a single comparison.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();
    let eq = |expected: &[u8]| bytes.eq_ignore_ascii_case(expected);

    match (bytes.len(), bytes.first().map(u8::to_ascii_lowercase)) {
        (2, Some(b'w')) if eq(b"ws") => SchemeType::Ws,
        (3, Some(b'w')) if eq(b"wss") => SchemeType::Wss,
        (3, Some(b'f')) if eq(b"ftp") => SchemeType::Ftp,
        (4, Some(b'h')) if eq(b"http") => SchemeType::Http,
        (4, Some(b'f')) if eq(b"file") => SchemeType::File,
        (5, Some(b'h')) if eq(b"https") => SchemeType::Https,
        _ => SchemeType::NotSpecial,
    }
}

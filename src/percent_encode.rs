use crate::compat::{Cow, String, Vec};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, utf8_percent_encode};

/// Query component percent-encode set
/// Everything except ASCII alphanumerics and `-`, `_`, `.`, `~`.
/// Space is part of the set; the encoder writes it as `+`.
pub const QUERY_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Write a form-encoded query key or value directly to buffer
pub fn encode_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    // Every escaped byte comes out as its own "%XX" chunk
    for chunk in utf8_percent_encode(input, QUERY_COMPONENT_SET) {
        if chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a query key or value: `+` is a space, then percent-decoding.
/// Malformed escapes are kept literally and invalid UTF-8 is replaced.
pub fn decode_component(input: &str) -> String {
    let bytes: Cow<'_, [u8]> = if memchr::memchr(b'+', input.as_bytes()).is_some() {
        Cow::Owned(
            input
                .bytes()
                .map(|b| if b == b'+' { b' ' } else { b })
                .collect::<Vec<u8>>(),
        )
    } else {
        Cow::Borrowed(input.as_bytes())
    };

    percent_decode(&bytes).decode_utf8_lossy().into_owned()
}

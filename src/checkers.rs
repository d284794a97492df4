use crate::character_sets::{classify_scheme_byte, is_host_byte};

/// Check a scheme (without the trailing ':').
/// First byte must be an ASCII letter; the rest letters, digits, `+`, `-` or `.`.
pub fn is_valid_scheme(scheme: &str) -> bool {
    let mut bytes = scheme.bytes();
    match bytes.next() {
        Some(first) if classify_scheme_byte(first) == 1 => {}
        _ => return false,
    }
    bytes.all(|b| classify_scheme_byte(b) != 0)
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

/// Check a bracketed IPv6 literal such as `[2001:db8::1]`.
/// Only the shape is checked: brackets, hex digits, ':' and '.' (embedded IPv4).
pub fn is_ipv6_literal(host: &str) -> bool {
    let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) else {
        return false;
    };
    !inner.is_empty()
        && inner.contains(':')
        && inner
            .bytes()
            .all(|b| b.is_ascii_hexdigit() || b == b':' || b == b'.')
}

/// Check a registered-name host.
pub fn is_reg_name(host: &str) -> bool {
    host.bytes().all(is_host_byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_scheme() {
        assert!(is_valid_scheme("http"));
        assert!(is_valid_scheme("svn+ssh"));
        assert!(is_valid_scheme("a1.b-c"));
        assert!(!is_valid_scheme(""));
        assert!(!is_valid_scheme("1http"));
        assert!(!is_valid_scheme("ht tp"));
        assert!(!is_valid_scheme("+x"));
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("80"), Some(80));
        assert_eq!(parse_port("8080"), Some(8080));
        assert_eq!(parse_port("65535"), Some(65535));
        assert_eq!(parse_port("65536"), None); // Out of range
        assert_eq!(parse_port("abc"), None);
        assert_eq!(parse_port(""), None);
    }

    #[test]
    fn test_is_ipv6_literal() {
        assert!(is_ipv6_literal("[::1]"));
        assert!(is_ipv6_literal("[2001:db8::1]"));
        assert!(is_ipv6_literal("[::ffff:192.168.1.1]"));
        assert!(!is_ipv6_literal("[]"));
        assert!(!is_ipv6_literal("[2001:db8::1"));
        assert!(!is_ipv6_literal("[example.com]"));
    }

    #[test]
    fn test_is_reg_name() {
        assert!(is_reg_name("sophilabs.com"));
        assert!(is_reg_name("my_host"));
        assert!(is_reg_name(""));
        assert!(!is_reg_name("bad host"));
        assert!(is_reg_name("日本.jp"));
        assert!(is_reg_name("bücher.example"));
    }
}

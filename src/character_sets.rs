/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Scheme character classification
/// Returns: 0=invalid, 1=letter (valid anywhere), 2=valid after the first byte
const SCHEME_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 2;
        i += 1;
    }
    table[b'+' as usize] = 2;
    table[b'-' as usize] = 2;
    table[b'.' as usize] = 2;

    table
};

/// Classify a byte for scheme parsing
pub fn classify_scheme_byte(b: u8) -> u8 {
    SCHEME_CHAR_TABLE[b as usize]
}

/// Registered-name host bytes: unreserved, sub-delims, `%` and any non-ASCII
/// byte (hosts are kept verbatim, never IDNA-mapped)
const HOST_CHAR_TABLE: [bool; 256] = {
    let mut table = [false; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = true;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = true;
        i += 1;
    }

    // unreserved
    table[b'-' as usize] = true;
    table[b'.' as usize] = true;
    table[b'_' as usize] = true;
    table[b'~' as usize] = true;

    // sub-delims
    table[b'!' as usize] = true;
    table[b'$' as usize] = true;
    table[b'&' as usize] = true;
    table[b'\'' as usize] = true;
    table[b'(' as usize] = true;
    table[b')' as usize] = true;
    table[b'*' as usize] = true;
    table[b'+' as usize] = true;
    table[b',' as usize] = true;
    table[b';' as usize] = true;
    table[b'=' as usize] = true;

    table[b'%' as usize] = true;

    let mut i = 0x80;
    while i < 256 {
        table[i] = true;
        i += 1;
    }

    table
};

/// Check if a byte may appear in a registered-name host
pub fn is_host_byte(b: u8) -> bool {
    HOST_CHAR_TABLE[b as usize]
}

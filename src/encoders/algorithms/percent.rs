//! Percent-encoding over the UTF-8 bytes of the input.

use super::errors::DecodeError;

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// RFC 3986 unreserved characters pass through untouched.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

pub fn encode_url(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 3);
    for &byte in text.as_bytes() {
        if is_unreserved(byte) {
            result.push(byte as char);
        } else {
            result.push('%');
            result.push(UPPER_HEX[(byte >> 4) as usize] as char);
            result.push(UPPER_HEX[(byte & 0x0F) as usize] as char);
        }
    }
    result
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

pub fn decode_url(text: &str) -> Result<String, DecodeError> {
    let input = text.as_bytes();
    let mut bytes = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        if input[i] != b'%' {
            bytes.push(input[i]);
            i += 1;
            continue;
        }

        let escape = input.get(i + 1..i + 3);
        match escape.map(|pair| (hex_value(pair[0]), hex_value(pair[1]))) {
            Some((Some(high), Some(low))) => {
                bytes.push((high << 4) | low);
                i += 3;
            }
            _ => {
                let end = (i + 3).min(input.len());
                let sequence = String::from_utf8_lossy(&input[i..end]);
                return Err(DecodeError::malformed_escape(i, sequence));
            }
        }
    }

    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_untouched() {
        assert_eq!(encode_url("AZaz09-._~"), "AZaz09-._~");
    }

    #[test]
    fn test_reserved_and_space_escaped() {
        assert_eq!(encode_url("a b&c=d/e?"), "a%20b%26c%3Dd%2Fe%3F");
        assert_eq!(encode_url("!*'()"), "%21%2A%27%28%29");
    }

    #[test]
    fn test_multibyte_escaped_per_byte() {
        assert_eq!(encode_url("€"), "%E2%82%AC");
        assert_eq!(decode_url("%E2%82%AC").unwrap(), "€");
        assert_eq!(decode_url("%e2%82%ac").unwrap(), "€");
    }

    #[test]
    fn test_plus_is_literal() {
        assert_eq!(decode_url("a+b").unwrap(), "a+b");
    }

    #[test]
    fn test_malformed_escapes() {
        assert_eq!(
            decode_url("100%"),
            Err(DecodeError::malformed_escape(3, "%"))
        );
        assert_eq!(
            decode_url("%4"),
            Err(DecodeError::malformed_escape(0, "%4"))
        );
        assert_eq!(
            decode_url("a%zzb"),
            Err(DecodeError::malformed_escape(1, "%zz"))
        );
    }

    #[test]
    fn test_broken_utf8_rejected() {
        assert!(matches!(
            decode_url("%E2%82"),
            Err(DecodeError::InvalidUtf8 { valid_up_to: 0 })
        ));
    }
}

use super::errors::DecodeError;

/// Renders each UTF-8 byte as eight binary digits, space separated.
pub fn encode_binary(text: &str) -> String {
    text.as_bytes()
        .iter()
        .map(|byte| format!("{:08b}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes whitespace-separated groups of eight binary digits. Errors carry
/// the byte offset of the offending group.
pub fn decode_binary(text: &str) -> Result<String, DecodeError> {
    let mut bytes = Vec::with_capacity(text.len() / 9 + 1);
    let mut start = None;

    let boundaries = text.char_indices().chain(std::iter::once((text.len(), ' ')));
    for (offset, c) in boundaries {
        match (c.is_whitespace(), start) {
            (true, Some(group_start)) => {
                bytes.push(parse_group(&text[group_start..offset], group_start)?);
                start = None;
            }
            (false, None) => start = Some(offset),
            _ => {}
        }
    }

    Ok(String::from_utf8(bytes)?)
}

fn parse_group(group: &str, offset: usize) -> Result<u8, DecodeError> {
    if group.len() != 8 || !group.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(DecodeError::malformed_escape(offset, group));
    }
    Ok(group.bytes().fold(0u8, |byte, bit| (byte << 1) | (bit - b'0')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode_binary("Hi"), "01001000 01101001");
        assert_eq!(encode_binary("é"), "11000011 10101001");
        assert_eq!(encode_binary(""), "");
    }

    #[test]
    fn test_decode_tolerates_any_whitespace() {
        assert_eq!(decode_binary("01001000\n01101001").unwrap(), "Hi");
        assert_eq!(decode_binary("  01001000   01101001 ").unwrap(), "Hi");
        assert_eq!(decode_binary(" \n ").unwrap(), "");
    }

    #[test]
    fn test_wrong_group_width_rejected() {
        assert_eq!(
            decode_binary("01001000 1101001"),
            Err(DecodeError::malformed_escape(9, "1101001"))
        );
        assert_eq!(
            decode_binary("0100100001101001"),
            Err(DecodeError::malformed_escape(0, "0100100001101001"))
        );
    }

    #[test]
    fn test_non_binary_digit_rejected() {
        assert!(matches!(
            decode_binary("01001002"),
            Err(DecodeError::MalformedEscape { position: 0, .. })
        ));
        assert!(matches!(
            decode_binary("01001000\n  0100100x"),
            Err(DecodeError::MalformedEscape { position: 11, .. })
        ));
    }

    #[test]
    fn test_error_reports_byte_offset() {
        let error = decode_binary("01001000 1101001").unwrap_err();
        assert_eq!(
            error.to_string(),
            "malformed sequence '1101001' at byte offset 9"
        );
    }

    #[test]
    fn test_decode_multibyte() {
        assert_eq!(decode_binary("11000011 10101001").unwrap(), "é");
    }
}

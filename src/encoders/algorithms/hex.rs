use super::errors::DecodeError;

/// Lowercase hex of the UTF-8 bytes.
pub fn encode_hex(text: &str) -> String {
    hex::encode(text.as_bytes())
}

pub fn decode_hex(text: &str) -> Result<String, DecodeError> {
    let bytes = hex::decode(text).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            DecodeError::invalid_character(c, index, text, "0-9a-fA-F")
        }
        _ => {
            DecodeError::invalid_length(
                text.len(),
                "an even number of hex digits",
                "each byte is written as exactly two digits",
            )
        }
    })?;

    Ok(String::from_utf8(bytes)?)
}

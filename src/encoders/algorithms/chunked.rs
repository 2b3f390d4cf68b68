//! RFC 4648 bit-chunked encodings (Base64, Base64-URL, Base32).
//!
//! All three share one engine: bytes are fed into a bit buffer and drained
//! `bits_per_char` bits at a time. Padding groups are `lcm(bits, 8) / bits`
//! characters wide (4 for Base64, 8 for Base32).

use num_integer::lcm;

pub use super::errors::DecodeError;

const INVALID: u8 = 0xFF;

/// A power-of-two alphabet with its reverse lookup table.
#[derive(Debug)]
pub struct ChunkedAlphabet {
    chars: &'static [u8],
    bits_per_char: usize,
    padding: u8,
    emit_padding: bool,
    lookup: [u8; 256],
}

const fn build_lookup(chars: &[u8]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < chars.len() {
        table[chars[i] as usize] = i as u8;
        i += 1;
    }
    table
}

impl ChunkedAlphabet {
    /// `chars.len()` must be a power of two no larger than 64.
    pub const fn new(chars: &'static [u8], padding: u8, emit_padding: bool) -> Self {
        Self {
            chars,
            bits_per_char: chars.len().trailing_zeros() as usize,
            padding,
            emit_padding,
            lookup: build_lookup(chars),
        }
    }

    pub fn base(&self) -> usize {
        self.chars.len()
    }

    pub fn bits_per_char(&self) -> usize {
        self.bits_per_char
    }

    /// Number of characters in one padded group.
    pub fn group_size(&self) -> usize {
        lcm(self.bits_per_char, 8) / self.bits_per_char
    }

    fn decode_char(&self, c: char) -> Option<u32> {
        if !c.is_ascii() {
            return None;
        }
        match self.lookup[c as usize] {
            INVALID => None,
            digit => Some(digit as u32),
        }
    }

    fn valid_chars(&self) -> String {
        self.chars.iter().map(|&b| b as char).collect()
    }
}

pub static BASE64: ChunkedAlphabet = ChunkedAlphabet::new(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    b'=',
    true,
);

pub static BASE64_URL: ChunkedAlphabet = ChunkedAlphabet::new(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
    b'=',
    false,
);

pub static BASE32: ChunkedAlphabet =
    ChunkedAlphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", b'=', true);

pub fn encode_chunked(data: &[u8], alphabet: &ChunkedAlphabet) -> String {
    let bits_per_char = alphabet.bits_per_char;
    let mask = (1u32 << bits_per_char) - 1;

    let output_chars = (data.len() * 8).div_ceil(bits_per_char);
    let group_size = alphabet.group_size();
    let mut result = String::with_capacity(output_chars.div_ceil(group_size) * group_size);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= bits_per_char {
            bits_in_buffer -= bits_per_char;
            let index = ((bit_buffer >> bits_in_buffer) & mask) as usize;
            result.push(alphabet.chars[index] as char);
        }
    }

    // Flush remaining bits, zero-filled on the right
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (bits_per_char - bits_in_buffer)) & mask) as usize;
        result.push(alphabet.chars[index] as char);
    }

    if alphabet.emit_padding {
        let padded_chars = result.len().div_ceil(group_size) * group_size;
        while result.len() < padded_chars {
            result.push(alphabet.padding as char);
        }
    }

    result
}

pub fn decode_chunked(encoded: &str, alphabet: &ChunkedAlphabet) -> Result<Vec<u8>, DecodeError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let pad = alphabet.padding as char;
    let data_part = encoded.trim_end_matches(pad);
    // Padding is ASCII, so the byte difference is the character count
    let pad_count = encoded.len() - data_part.len();

    let mut digits = Vec::with_capacity(data_part.len());
    for (position, c) in data_part.chars().enumerate() {
        if c == pad {
            return Err(DecodeError::InvalidPadding);
        }
        let digit = alphabet.decode_char(c).ok_or_else(|| {
            DecodeError::invalid_character(c, position, encoded, &alphabet.valid_chars())
        })?;
        digits.push(digit);
    }

    let bits_per_char = alphabet.bits_per_char;
    let group_size = alphabet.group_size();
    let remainder = digits.len() % group_size;

    // A trailing partial group must carry at least one whole byte
    if (remainder * bits_per_char) % 8 >= bits_per_char {
        return Err(DecodeError::invalid_length(
            digits.len(),
            format!("a valid base{} length", alphabet.base()),
            "the final group is truncated; check for missing characters",
        ));
    }

    if pad_count > 0 || alphabet.emit_padding {
        let expected_pad = (group_size - remainder) % group_size;
        if pad_count != expected_pad {
            return Err(DecodeError::InvalidPadding);
        }
    }

    let mut result = Vec::with_capacity(digits.len() * bits_per_char / 8);
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for digit in digits {
        bit_buffer = (bit_buffer << bits_per_char) | digit;
        bits_in_buffer += bits_per_char;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    Ok(result)
}

pub fn encode_base64(text: &str) -> String {
    encode_chunked(text.as_bytes(), &BASE64)
}

pub fn decode_base64(text: &str) -> Result<String, DecodeError> {
    Ok(String::from_utf8(decode_chunked(text, &BASE64)?)?)
}

pub fn encode_base64_url(text: &str) -> String {
    encode_chunked(text.as_bytes(), &BASE64_URL)
}

pub fn decode_base64_url(text: &str) -> Result<String, DecodeError> {
    Ok(String::from_utf8(decode_chunked(text, &BASE64_URL)?)?)
}

pub fn encode_base32(text: &str) -> String {
    encode_chunked(text.as_bytes(), &BASE32)
}

pub fn decode_base32(text: &str) -> Result<String, DecodeError> {
    Ok(String::from_utf8(decode_chunked(text, &BASE32)?)?)
}

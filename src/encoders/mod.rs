pub mod algorithms;

pub use algorithms::{DecodeError, binary, chunked, entities, hex, percent, reverse, rotate};

/// A reversible text transform: `decode(encode(s)) == s` for every string.
#[derive(Clone, Copy)]
pub struct Codec {
    encode: fn(&str) -> String,
    decode: fn(&str) -> Result<String, DecodeError>,
}

impl Codec {
    pub const fn new(
        encode: fn(&str) -> String,
        decode: fn(&str) -> Result<String, DecodeError>,
    ) -> Self {
        Self { encode, decode }
    }

    pub fn encode(&self, text: &str) -> String {
        (self.encode)(text)
    }

    pub fn decode(&self, text: &str) -> Result<String, DecodeError> {
        (self.decode)(text)
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec").finish_non_exhaustive()
    }
}

pub const BASE64: Codec = Codec::new(chunked::encode_base64, chunked::decode_base64);
pub const BASE64_URL: Codec = Codec::new(chunked::encode_base64_url, chunked::decode_base64_url);
pub const BASE32: Codec = Codec::new(chunked::encode_base32, chunked::decode_base32);
pub const HEX: Codec = Codec::new(hex::encode_hex, hex::decode_hex);
pub const URL: Codec = Codec::new(percent::encode_url, percent::decode_url);
pub const HTML: Codec = Codec::new(entities::encode_html, |text| Ok(entities::decode_html(text)));
pub const ROT13: Codec = Codec::new(rotate::rot13, |text| Ok(rotate::rot13(text)));
pub const ROT47: Codec = Codec::new(rotate::rot47, |text| Ok(rotate::rot47(text)));
pub const BINARY: Codec = Codec::new(binary::encode_binary, binary::decode_binary);
pub const REVERSE: Codec = Codec::new(reverse::reverse_text, |text| Ok(reverse::reverse_text(text)));

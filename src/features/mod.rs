//! One-way functions.
//!
//! Hashes live apart from the reversible codecs in `encoders`: they expose
//! no decode operation at all.

pub mod hashing;

pub use hashing::{
    DigestError, DigestProvider, HashAlgorithm, RustCryptoDigest, ShaAlgorithm, hash, hash_text,
};

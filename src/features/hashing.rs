use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fmt;

/// SHA-family digests served by a [`DigestProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl ShaAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShaAlgorithm::Sha1 => "SHA-1",
            ShaAlgorithm::Sha256 => "SHA-256",
            ShaAlgorithm::Sha384 => "SHA-384",
            ShaAlgorithm::Sha512 => "SHA-512",
        }
    }
}

/// Supported one-way hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Crc32,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Parse hash algorithm from string.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "crc32" | "crc-32" => Ok(HashAlgorithm::Crc32),
            "sha1" | "sha-1" => Ok(HashAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "sha384" | "sha-384" => Ok(HashAlgorithm::Sha384),
            "sha512" | "sha-512" => Ok(HashAlgorithm::Sha512),
            _ => Err(format!("Unknown hash algorithm: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Crc32 => "crc32",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Get the output size in bytes for this algorithm.
    pub fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Crc32 => 4,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// The provider-side algorithm, if this hash is delegated.
    pub fn sha_variant(&self) -> Option<ShaAlgorithm> {
        match self {
            HashAlgorithm::Sha1 => Some(ShaAlgorithm::Sha1),
            HashAlgorithm::Sha256 => Some(ShaAlgorithm::Sha256),
            HashAlgorithm::Sha384 => Some(ShaAlgorithm::Sha384),
            HashAlgorithm::Sha512 => Some(ShaAlgorithm::Sha512),
            HashAlgorithm::Md5 | HashAlgorithm::Crc32 => None,
        }
    }
}

/// Failure reported by a digest provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestError {
    pub algorithm: ShaAlgorithm,
    pub message: String,
}

impl DigestError {
    pub fn new(algorithm: ShaAlgorithm, message: impl Into<String>) -> Self {
        Self {
            algorithm,
            message: message.into(),
        }
    }
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} digest provider failed: {}",
            self.algorithm.as_str(),
            self.message
        )
    }
}

impl std::error::Error for DigestError {}

/// Source of raw SHA-family digest bytes.
///
/// Hosts that already carry a digest implementation (hardware, a platform
/// crypto API) plug it in here. Only the raw digest is expected; UTF-8
/// conversion and hex rendering stay on this side of the seam.
pub trait DigestProvider {
    fn digest(&self, algorithm: ShaAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError>;
}

impl<P: DigestProvider + ?Sized> DigestProvider for &P {
    fn digest(&self, algorithm: ShaAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        (**self).digest(algorithm, data)
    }
}

/// Default provider backed by the `sha1` and `sha2` crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoDigest;

impl DigestProvider for RustCryptoDigest {
    fn digest(&self, algorithm: ShaAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        let bytes = match algorithm {
            ShaAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            ShaAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            ShaAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            ShaAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        };
        Ok(bytes)
    }
}

/// Compute the raw digest of `data`.
pub fn hash<P: DigestProvider>(
    data: &[u8],
    algorithm: HashAlgorithm,
    provider: &P,
) -> Result<Vec<u8>, DigestError> {
    match algorithm {
        HashAlgorithm::Md5 => {
            let mut hasher = Md5::new();
            hasher.update(data);
            Ok(hasher.finalize().to_vec())
        }
        HashAlgorithm::Crc32 => {
            // CRC_32_ISO_HDLC is the IEEE 802.3 polynomial (zlib, PNG, Ethernet)
            let crc = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
            Ok(crc.checksum(data).to_be_bytes().to_vec())
        }
        HashAlgorithm::Sha1 => delegated(provider, ShaAlgorithm::Sha1, 20, data),
        HashAlgorithm::Sha256 => delegated(provider, ShaAlgorithm::Sha256, 32, data),
        HashAlgorithm::Sha384 => delegated(provider, ShaAlgorithm::Sha384, 48, data),
        HashAlgorithm::Sha512 => delegated(provider, ShaAlgorithm::Sha512, 64, data),
    }
}

fn delegated<P: DigestProvider>(
    provider: &P,
    algorithm: ShaAlgorithm,
    expected_len: usize,
    data: &[u8],
) -> Result<Vec<u8>, DigestError> {
    let digest = provider.digest(algorithm, data)?;
    if digest.len() != expected_len {
        return Err(DigestError::new(
            algorithm,
            format!("expected {} digest bytes, got {}", expected_len, digest.len()),
        ));
    }
    Ok(digest)
}

/// Hash the UTF-8 bytes of `text` and render lowercase hex.
pub fn hash_text<P: DigestProvider>(
    text: &str,
    algorithm: HashAlgorithm,
    provider: &P,
) -> Result<String, DigestError> {
    hash(text.as_bytes(), algorithm, provider).map(hex::encode)
}

use serde::Serialize;

use crate::encoders::{self, Codec};
use crate::encoders::algorithms::{AlgorithmNotFoundError, find_closest_algorithm};
use crate::features::HashAlgorithm;

/// Broad family an algorithm belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Reversible binary-to-text and escaping schemes
    Encoding,
    /// One-way digests and checksums
    Hash,
    /// Toy ciphers and text rearrangements, all reversible
    Cipher,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Encoding => "encoding",
            Category::Hash => "hash",
            Category::Cipher => "cipher",
        }
    }
}

/// Immutable description of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub category: Category,
    pub reversible: bool,
    #[serde(skip_serializing_if = "no_aliases")]
    pub aliases: &'static [&'static str],
}

fn no_aliases(aliases: &&'static [&'static str]) -> bool {
    aliases.is_empty()
}

impl AlgorithmDescriptor {
    fn matches(&self, name: &str) -> bool {
        self.id.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

/// What actually runs for a catalog entry.
#[derive(Debug, Clone, Copy)]
pub enum Implementation {
    Codec(Codec),
    Hash(HashAlgorithm),
}

#[derive(Debug)]
struct CatalogEntry {
    descriptor: AlgorithmDescriptor,
    implementation: Implementation,
}

const fn codec(
    id: &'static str,
    display_name: &'static str,
    category: Category,
    aliases: &'static [&'static str],
    codec: Codec,
) -> CatalogEntry {
    CatalogEntry {
        descriptor: AlgorithmDescriptor {
            id,
            display_name,
            category,
            reversible: true,
            aliases,
        },
        implementation: Implementation::Codec(codec),
    }
}

const fn one_way(
    id: &'static str,
    display_name: &'static str,
    aliases: &'static [&'static str],
    hash: HashAlgorithm,
) -> CatalogEntry {
    CatalogEntry {
        descriptor: AlgorithmDescriptor {
            id,
            display_name,
            category: Category::Hash,
            reversible: false,
            aliases,
        },
        implementation: Implementation::Hash(hash),
    }
}

static ENTRIES: [CatalogEntry; 16] = [
    codec("base64", "Base64", Category::Encoding, &["b64"], encoders::BASE64),
    codec(
        "base64url",
        "Base64 URL-safe",
        Category::Encoding,
        &["base64-url", "b64url"],
        encoders::BASE64_URL,
    ),
    codec("base32", "Base32", Category::Encoding, &["b32"], encoders::BASE32),
    codec("hex", "Hexadecimal", Category::Encoding, &["base16"], encoders::HEX),
    codec(
        "url",
        "URL encoding",
        Category::Encoding,
        &["percent", "urlencode"],
        encoders::URL,
    ),
    codec(
        "html",
        "HTML entities",
        Category::Encoding,
        &["html-entities"],
        encoders::HTML,
    ),
    one_way("md5", "MD5", &[], HashAlgorithm::Md5),
    one_way("sha1", "SHA-1", &["sha-1"], HashAlgorithm::Sha1),
    one_way("sha256", "SHA-256", &["sha-256"], HashAlgorithm::Sha256),
    one_way("sha384", "SHA-384", &["sha-384"], HashAlgorithm::Sha384),
    one_way("sha512", "SHA-512", &["sha-512"], HashAlgorithm::Sha512),
    one_way("crc32", "CRC-32", &["crc-32"], HashAlgorithm::Crc32),
    codec("rot13", "ROT13", Category::Cipher, &[], encoders::ROT13),
    codec("rot47", "ROT47", Category::Cipher, &[], encoders::ROT47),
    codec("binary", "Binary", Category::Cipher, &["bin"], encoders::BINARY),
    codec(
        "reverse",
        "Reverse text",
        Category::Cipher,
        &["reverse-text"],
        encoders::REVERSE,
    ),
];

static BUILTIN: AlgorithmCatalog = AlgorithmCatalog { entries: &ENTRIES };

/// Read-only registry of every supported algorithm.
///
/// The table is fixed at compile time; adding an algorithm means adding one
/// entry here and nothing in the dispatcher.
#[derive(Debug)]
pub struct AlgorithmCatalog {
    entries: &'static [CatalogEntry],
}

impl AlgorithmCatalog {
    /// The built-in catalog.
    pub fn builtin() -> &'static AlgorithmCatalog {
        &BUILTIN
    }

    /// All descriptors in catalog order.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &'static AlgorithmDescriptor> + use<> {
        self.entries.iter().map(|entry| &entry.descriptor)
    }

    pub fn by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &'static AlgorithmDescriptor> + use<> {
        self.list().filter(move |descriptor| descriptor.category == category)
    }

    /// Look up an id or alias, case-insensitively.
    pub fn get(&self, name: &str) -> Result<&'static AlgorithmDescriptor, AlgorithmNotFoundError> {
        self.entry(name)
            .map(|entry| &entry.descriptor)
            .ok_or_else(|| self.not_found(name))
    }

    pub(crate) fn resolve(
        &self,
        name: &str,
    ) -> Result<(&'static AlgorithmDescriptor, Implementation), AlgorithmNotFoundError> {
        self.entry(name)
            .map(|entry| (&entry.descriptor, entry.implementation))
            .ok_or_else(|| self.not_found(name))
    }

    fn entry(&self, name: &str) -> Option<&'static CatalogEntry> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|entry| entry.descriptor.matches(name))
    }

    fn not_found(&self, name: &str) -> AlgorithmNotFoundError {
        let candidates = self.entries.iter().flat_map(|entry| {
            std::iter::once(entry.descriptor.id).chain(entry.descriptor.aliases.iter().copied())
        });
        AlgorithmNotFoundError::new(name, find_closest_algorithm(name, candidates))
    }
}

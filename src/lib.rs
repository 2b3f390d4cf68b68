//! Deterministic text transforms: reversible codecs, toy ciphers, and
//! one-way digests behind a single request/result boundary.
//!
//! ```
//! use hashcodec::{StatsCollector, TransformDispatcher, TransformRequest};
//!
//! let dispatcher = TransformDispatcher::new();
//! let result = StatsCollector::new(&dispatcher).measure(&TransformRequest::encode("base64", "hello"));
//! assert_eq!(result.output_text(), Some("aGVsbG8="));
//! ```

mod core;
mod dispatch;
mod encoders;
mod features;
pub mod prelude;
mod safeguard;
mod stats;

pub use crate::core::catalog::{AlgorithmCatalog, AlgorithmDescriptor, Category};
pub use crate::core::config::{Settings, SettingsFile};
pub use dispatch::{
    ErrorKind, Mode, TransformDispatcher, TransformError, TransformRequest, TransformResult,
};
pub use encoders::algorithms::{AlgorithmNotFoundError, DecodeError, find_closest_algorithm};
pub use encoders::{Codec, binary, chunked, entities, hex, percent, reverse, rotate};
pub use features::{
    DigestError, DigestProvider, HashAlgorithm, RustCryptoDigest, ShaAlgorithm, hash, hash_text,
};
pub use safeguard::{ModeSafeguard, SafeguardEvent};
pub use stats::{StatsCollector, TransformStats, code_units, count_lines};

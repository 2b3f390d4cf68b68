//! Request routing from an algorithm id and mode to the implementation.
//!
//! Every outcome, including lookup failures and panics inside an
//! implementation, comes back as a [`TransformResult`].

use serde::Serialize;
use serde::ser::SerializeStruct;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::core::catalog::{AlgorithmCatalog, Implementation};
use crate::encoders::DecodeError;
use crate::features::{DigestError, DigestProvider, RustCryptoDigest, hash_text};
use crate::stats::TransformStats;

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Encode,
    Decode,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        }
    }
}

/// A single transform invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    pub algorithm_id: String,
    pub mode: Mode,
    pub input_text: String,
}

impl TransformRequest {
    pub fn new(algorithm_id: impl Into<String>, mode: Mode, input_text: impl Into<String>) -> Self {
        Self {
            algorithm_id: algorithm_id.into(),
            mode,
            input_text: input_text.into(),
        }
    }

    pub fn encode(algorithm_id: impl Into<String>, input_text: impl Into<String>) -> Self {
        Self::new(algorithm_id, Mode::Encode, input_text)
    }

    pub fn decode(algorithm_id: impl Into<String>, input_text: impl Into<String>) -> Self {
        Self::new(algorithm_id, Mode::Decode, input_text)
    }
}

/// Failure taxonomy at the dispatcher boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The id is not in the catalog
    UnsupportedAlgorithm,
    /// Decode was requested for a one-way function
    IllegalModeForAlgorithm,
    /// Malformed input for a reversible decode
    DecodeFormatError,
    /// Anything else, including digest provider failures
    EncodingError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnsupportedAlgorithm => "unsupported algorithm",
            ErrorKind::IllegalModeForAlgorithm => "illegal mode for algorithm",
            ErrorKind::DecodeFormatError => "decode format error",
            ErrorKind::EncodingError => "encoding error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformError {
    pub kind: ErrorKind,
    pub message: String,
}

impl TransformError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn illegal_mode(algorithm_id: &str, mode: Mode) -> Self {
        Self::new(
            ErrorKind::IllegalModeForAlgorithm,
            format!(
                "'{}' is a one-way function and cannot {}",
                algorithm_id,
                mode.as_str()
            ),
        )
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransformError {}

impl From<DecodeError> for TransformError {
    fn from(err: DecodeError) -> Self {
        TransformError::new(ErrorKind::DecodeFormatError, err.to_string())
    }
}

impl From<DigestError> for TransformError {
    fn from(err: DigestError) -> Self {
        TransformError::new(ErrorKind::EncodingError, err.to_string())
    }
}

/// Output of one transform: either text or an error, never both.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    outcome: Result<String, TransformError>,
    pub stats: TransformStats,
}

impl TransformResult {
    pub fn from_outcome(outcome: Result<String, TransformError>) -> Self {
        Self {
            outcome,
            stats: TransformStats::default(),
        }
    }

    pub fn output_text(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    pub fn error(&self) -> Option<&TransformError> {
        self.outcome.as_ref().err()
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn outcome(&self) -> &Result<String, TransformError> {
        &self.outcome
    }

    pub fn into_outcome(self) -> Result<String, TransformError> {
        self.outcome
    }
}

impl Serialize for TransformResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TransformResult", 6)?;
        match &self.outcome {
            Ok(output) => {
                state.serialize_field("output", output)?;
                state.skip_field("error")?;
            }
            Err(error) => {
                state.skip_field("output")?;
                state.serialize_field("error", error)?;
            }
        }
        state.serialize_field("elapsed_ms", &self.stats.elapsed_ms)?;
        state.serialize_field("char_count_in", &self.stats.char_count_in)?;
        state.serialize_field("char_count_out", &self.stats.char_count_out)?;
        state.serialize_field("line_count", &self.stats.line_count)?;
        state.end()
    }
}

/// Routes requests through the catalog's implementation table.
#[derive(Debug)]
pub struct TransformDispatcher<'c, P = RustCryptoDigest> {
    catalog: &'c AlgorithmCatalog,
    provider: P,
}

impl TransformDispatcher<'static, RustCryptoDigest> {
    /// Built-in catalog with the default digest provider.
    pub fn new() -> Self {
        Self::with_provider(AlgorithmCatalog::builtin(), RustCryptoDigest)
    }
}

impl Default for TransformDispatcher<'static, RustCryptoDigest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c, P: DigestProvider> TransformDispatcher<'c, P> {
    pub fn with_provider(catalog: &'c AlgorithmCatalog, provider: P) -> Self {
        Self { catalog, provider }
    }

    pub fn catalog(&self) -> &'c AlgorithmCatalog {
        self.catalog
    }

    pub fn transform(&self, request: &TransformRequest) -> TransformResult {
        TransformResult::from_outcome(self.run(request))
    }

    fn run(&self, request: &TransformRequest) -> Result<String, TransformError> {
        let (descriptor, implementation) = self
            .catalog
            .resolve(&request.algorithm_id)
            .map_err(|e| TransformError::new(ErrorKind::UnsupportedAlgorithm, e.to_string()))?;

        if !descriptor.reversible && request.mode == Mode::Decode {
            log::debug!("refusing {} for one-way {}", request.mode.as_str(), descriptor.id);
            return Err(TransformError::illegal_mode(descriptor.id, request.mode));
        }

        log::debug!(
            "dispatching {} {} ({} bytes)",
            descriptor.id,
            request.mode.as_str(),
            request.input_text.len()
        );

        let input = request.input_text.as_str();
        panic::catch_unwind(AssertUnwindSafe(|| {
            self.invoke(descriptor.id, implementation, request.mode, input)
        }))
        .unwrap_or_else(|payload| {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            log::error!("{} {} panicked: {}", descriptor.id, request.mode.as_str(), message);
            Err(TransformError::new(
                ErrorKind::EncodingError,
                format!("{} failed unexpectedly: {}", descriptor.id, message),
            ))
        })
    }

    fn invoke(
        &self,
        id: &str,
        implementation: Implementation,
        mode: Mode,
        input: &str,
    ) -> Result<String, TransformError> {
        match (implementation, mode) {
            (Implementation::Codec(codec), Mode::Encode) => Ok(codec.encode(input)),
            (Implementation::Codec(codec), Mode::Decode) => Ok(codec.decode(input)?),
            (Implementation::Hash(algorithm), Mode::Encode) => {
                Ok(hash_text(input, algorithm, &self.provider)?)
            }
            (Implementation::Hash(_), Mode::Decode) => Err(TransformError::illegal_mode(id, mode)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ShaAlgorithm;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingProvider {
        calls: Cell<usize>,
    }

    impl DigestProvider for CountingProvider {
        fn digest(&self, algorithm: ShaAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
            self.calls.set(self.calls.get() + 1);
            RustCryptoDigest.digest(algorithm, data)
        }
    }

    struct FailingProvider;

    impl DigestProvider for FailingProvider {
        fn digest(&self, algorithm: ShaAlgorithm, _: &[u8]) -> Result<Vec<u8>, DigestError> {
            Err(DigestError::new(algorithm, "hardware unavailable"))
        }
    }

    struct PanickingProvider;

    impl DigestProvider for PanickingProvider {
        fn digest(&self, _: ShaAlgorithm, _: &[u8]) -> Result<Vec<u8>, DigestError> {
            panic!("provider exploded")
        }
    }

    #[test]
    fn test_encode_known_vectors() {
        let dispatcher = TransformDispatcher::new();
        let cases = [
            ("base64", "hello", "aGVsbG8="),
            ("base32", "hello", "NBSWY3DP"),
            ("md5", "abc", "900150983cd24fb0d6963f7d28e17f72"),
            ("crc32", "", "00000000"),
            ("rot13", "abc", "nop"),
        ];
        for (id, input, expected) in cases {
            let result = dispatcher.transform(&TransformRequest::encode(id, input));
            assert_eq!(result.output_text(), Some(expected), "{}", id);
            assert!(result.error().is_none());
        }
    }

    #[test]
    fn test_decode_round_trip() {
        let dispatcher = TransformDispatcher::new();
        let result = dispatcher.transform(&TransformRequest::decode("base64", "aGVsbG8="));
        assert_eq!(result.output_text(), Some("hello"));
    }

    #[test]
    fn test_unknown_algorithm() {
        let dispatcher = TransformDispatcher::new();
        let result = dispatcher.transform(&TransformRequest::encode("bas64", "x"));
        let error = result.error().unwrap();
        assert_eq!(error.kind, ErrorKind::UnsupportedAlgorithm);
        assert!(error.message.contains("did you mean 'base64'"));
        assert!(result.output_text().is_none());
    }

    #[test]
    fn test_decode_on_hash_never_invokes_provider() {
        let provider = CountingProvider::default();
        let dispatcher = TransformDispatcher::with_provider(AlgorithmCatalog::builtin(), &provider);

        for id in ["sha1", "sha256", "sha384", "sha512", "md5", "crc32"] {
            let result = dispatcher.transform(&TransformRequest::decode(id, "abc"));
            assert_eq!(
                result.error().map(|e| e.kind),
                Some(ErrorKind::IllegalModeForAlgorithm),
                "{}",
                id
            );
        }
        assert_eq!(provider.calls.get(), 0);

        dispatcher.transform(&TransformRequest::encode("sha256", "abc"));
        assert_eq!(provider.calls.get(), 1);
    }

    #[test]
    fn test_malformed_decode_is_format_error() {
        let dispatcher = TransformDispatcher::new();
        let result = dispatcher.transform(&TransformRequest::decode("base64", "aGVsbG8"));
        let error = result.error().unwrap();
        assert_eq!(error.kind, ErrorKind::DecodeFormatError);
        assert!(error.message.contains("invalid padding"));
    }

    #[test]
    fn test_provider_failure_is_encoding_error() {
        let dispatcher =
            TransformDispatcher::with_provider(AlgorithmCatalog::builtin(), FailingProvider);
        let result = dispatcher.transform(&TransformRequest::encode("sha512", "abc"));
        let error = result.error().unwrap();
        assert_eq!(error.kind, ErrorKind::EncodingError);
        assert!(error.message.contains("hardware unavailable"));
    }

    #[test]
    fn test_provider_panic_is_contained() {
        let dispatcher =
            TransformDispatcher::with_provider(AlgorithmCatalog::builtin(), PanickingProvider);
        let result = dispatcher.transform(&TransformRequest::encode("sha1", "abc"));
        let error = result.error().unwrap();
        assert_eq!(error.kind, ErrorKind::EncodingError);
        assert!(error.message.contains("provider exploded"));
    }

    #[test]
    fn test_result_json_shape() {
        let dispatcher = TransformDispatcher::new();
        let ok = serde_json::to_value(dispatcher.transform(&TransformRequest::encode("hex", "A")))
            .unwrap();
        assert_eq!(ok["output"], "41");
        assert!(ok.get("error").is_none());

        let err =
            serde_json::to_value(dispatcher.transform(&TransformRequest::decode("md5", "41")))
                .unwrap();
        assert!(err.get("output").is_none());
        assert_eq!(err["error"]["kind"], "illegal_mode_for_algorithm");
    }
}

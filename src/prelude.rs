//! Convenient re-exports for common usage.
//!
//! ```
//! use hashcodec::prelude::*;
//!
//! let dispatcher = TransformDispatcher::new();
//! let result = dispatcher.transform(&TransformRequest::decode("md5", "abc"));
//! assert_eq!(result.error().map(|e| e.kind), Some(ErrorKind::IllegalModeForAlgorithm));
//! ```

pub use crate::{
    AlgorithmCatalog, AlgorithmDescriptor, Category, ErrorKind, Mode, ModeSafeguard,
    StatsCollector, TransformDispatcher, TransformError, TransformRequest, TransformResult,
};

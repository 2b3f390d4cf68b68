pub mod binary;
pub mod chunked;
pub mod entities;
pub mod errors;
pub mod hex;
pub mod percent;
pub mod reverse;
pub mod rotate;

// Re-export error types for public API
pub use errors::{AlgorithmNotFoundError, DecodeError, find_closest_algorithm};

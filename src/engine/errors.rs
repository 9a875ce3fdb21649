//! Engine construction errors
//!
//! Only construction can fail. Once an engine exists every resumption either
//! yields a step or reports exhaustion; broken index bookkeeping inside an
//! engine is a bug and panics through slice indexing.

use thiserror::Error;

/// Errors raised while building a step engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Radix sort only handles non-negative integers
    #[error("radix sort requires non-negative values, found {value} at index {index}")]
    InvalidInput { index: usize, value: i64 },
}

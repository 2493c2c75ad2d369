//! Failure modes of test vector generation
//!
//! Generation is all-or-nothing: any of these errors aborts the run before a
//! corpus is handed out, because a malformed test vector would silently
//! corrupt the correctness guarantees of the downstream test suite.

use crate::operations::Operation;
use thiserror::Error;

/// Invalid generation parameters
///
/// These are detected before any arithmetic is attempted.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    /// An output width of zero bits was requested
    #[error("output width must be at least one bit")]
    ZeroWidth,

    /// A sampling range does not contain any value
    #[error("{what} range {low}..{high} is empty, expected low < high")]
    EmptyRange {
        /// Which range this is about
        what: &'static str,

        /// Inclusive lower bound
        low: u64,

        /// Exclusive upper bound
        high: u64,
    },

    /// A width sweep was configured with a stride of zero
    #[error("width sweep stride must be nonzero")]
    ZeroStride,

    /// An explicit output width cannot hold a non-negative result
    #[error("{width}-bit output cannot hold a result that needs {required} bits")]
    WidthTooNarrow {
        /// Requested output width, in bits
        width: u64,

        /// Bit length of the result
        required: u64,
    },

    /// The recipe for this operation was not compiled in
    #[error("{0} test vectors are not supported by this build")]
    UnsupportedOperation(Operation),
}

/// Requests that have no well-defined answer for a specific operation
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DomainError {
    /// Subtraction with `B > A`, without an output width to wrap around
    ///
    /// There is no natural unsigned width for a negative number.
    #[error("negative difference needs an explicit output width to wrap around")]
    NegativeDifferenceWithoutWidth,
}

/// Any test vector generation failure
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("undefined result: {0}")]
    Domain(#[from] DomainError),
}

/// Result type used throughout the test vector generator
pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Common infrastructure shared by all test vector recipes

pub mod bytes;
pub mod config;
pub mod corpus;
pub mod error;
pub mod inputs;
pub mod operations;
pub mod synthesis;

pub use error::{ConfigError, DomainError, Error, Result};

#[cfg(feature = "unstable_test")]
pub use proptest;

#[cfg(any(test, feature = "unstable_test"))]
pub mod test_utils {
    use num_bigint::BigUint;
    use proptest::prelude::*;
    use std::panic::{self, UnwindSafe};

    /// Assert that a function panics in a proptest-friendly manner
    pub fn assert_panics<T>(f: impl FnOnce() -> T + UnwindSafe) -> Result<(), TestCaseError> {
        if panic::catch_unwind(f).is_err() {
            Ok(())
        } else {
            Err(TestCaseError::fail("this function should have panicked"))
        }
    }

    /// Arbitrary operand of up to `max_bytes` bytes
    ///
    /// Leading zero bytes are allowed in the raw material, so small values
    /// (including zero) come up a lot more often than with a uniform
    /// distribution, which is what we want for edge case coverage.
    pub fn operand(max_bytes: usize) -> impl Strategy<Value = BigUint> {
        prop::collection::vec(any::<u8>(), 0..=max_bytes)
            .prop_map(|bytes| BigUint::from_bytes_be(&bytes))
    }

    /// Pair of arbitrary operands of up to `max_bytes` bytes each
    pub fn operand_pair(max_bytes: usize) -> impl Strategy<Value = (BigUint, BigUint)> {
        (operand(max_bytes), operand(max_bytes))
    }

    /// Number of tests to execute for "hidden" property-based tests (i.e. those
    /// that are property based but do not use proptest's RNG)
    ///
    /// Attempts to match the behavior of proptest for consistency.
    pub fn proptest_cases() -> usize {
        std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|cases| cases.parse().ok())
            .unwrap_or(256)
    }

    /// Route `log` output through the test harness
    pub fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}

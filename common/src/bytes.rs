//! Big-endian byte serialization of operands and results
//!
//! Serialization never drops high-order information. When a result must be
//! truncated to some output width, that is the job of the wraparound
//! reduction in [`synthesis`](crate::synthesis), which happens before
//! serialization.

use crate::error::ConfigError;
use num_bigint::BigUint;
use num_traits::One;
use std::{fmt, num::NonZeroU64};

/// Requested output width of a serialized result, in bits
///
/// Widths do not need to be byte-aligned. The serialized form always occupies
/// a whole number of bytes, namely `ceil(bits / 8)`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Width(NonZeroU64);
//
impl Width {
    /// Width of a certain amount of bits
    ///
    /// Zero-bit outputs are rejected.
    pub fn new(bits: u64) -> Result<Self, ConfigError> {
        NonZeroU64::new(bits).map(Self).ok_or(ConfigError::ZeroWidth)
    }

    /// Width of a certain amount of bytes
    ///
    /// # Panics
    ///
    /// Panics if `num_bytes` is zero.
    pub fn from_bytes(num_bytes: usize) -> Self {
        let bits = u64::try_from(num_bytes)
            .ok()
            .and_then(|bytes| bytes.checked_mul(8))
            .expect("byte count should fit in a u64 bit count");
        Self::new(bits).expect("byte count should be nonzero")
    }

    /// Number of bits
    pub const fn bits(self) -> u64 {
        self.0.get()
    }

    /// Truth that this width is a multiple of 8 bits
    pub const fn is_byte_aligned(self) -> bool {
        self.bits() % 8 == 0
    }

    /// Number of bytes of the serialized form
    pub fn num_bytes(self) -> usize {
        usize::try_from(self.bits().div_ceil(8)).expect("output should fit in memory")
    }

    /// `2^bits`, the modulus of wraparound arithmetic at this width
    pub fn modulus(self) -> BigUint {
        BigUint::one() << self.bits()
    }

    /// Truth that `value` can be represented in this many bits
    pub fn holds(self, value: &BigUint) -> bool {
        value.bits() <= self.bits()
    }
}
//
impl TryFrom<u64> for Width {
    type Error = ConfigError;

    fn try_from(bits: u64) -> Result<Self, ConfigError> {
        Self::new(bits)
    }
}
//
impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

/// Shortest big-endian serialization of `value`
///
/// This is equivalent to writing `value` in hexadecimal, left-padding with a
/// `0` digit if the number of digits is odd, and turning each pair of digits
/// into a byte. Zero is serialized as a single zero byte.
pub fn to_minimal_bytes(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// Big-endian serialization of `value` into exactly `num_bytes` bytes
///
/// The minimal serialization is left-padded with zero bytes as needed. If the
/// minimal serialization is longer than `num_bytes`, this fails instead of
/// dropping high-order bytes. Zero-byte outputs are rejected.
pub fn to_fixed_bytes(value: &BigUint, num_bytes: usize) -> Result<Vec<u8>, ConfigError> {
    if num_bytes == 0 {
        return Err(ConfigError::ZeroWidth);
    }
    let minimal = to_minimal_bytes(value);
    let Some(padding) = num_bytes.checked_sub(minimal.len()) else {
        return Err(ConfigError::WidthTooNarrow {
            width: Width::from_bytes(num_bytes).bits(),
            required: value.bits(),
        });
    };
    let mut result = Vec::with_capacity(num_bytes);
    result.resize(padding, 0);
    result.extend_from_slice(&minimal);
    debug_assert_eq!(result.len(), num_bytes);
    Ok(result)
}

/// Big-endian serialization of `value` at a certain output width
///
/// `value` must fit in `width`.
pub fn to_width_bytes(value: &BigUint, width: Width) -> Result<Vec<u8>, ConfigError> {
    if !width.holds(value) {
        return Err(ConfigError::WidthTooNarrow {
            width: width.bits(),
            required: value.bits(),
        });
    }
    to_fixed_bytes(value, width.num_bytes())
}

/// Interpret big-endian bytes as an unsigned integer
pub fn from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Remove zero padding from a big-endian serialization
///
/// A single zero byte is kept if the value is zero, so that the output matches
/// what [`to_minimal_bytes()`] would produce.
pub fn strip_padding(bytes: &[u8]) -> &[u8] {
    let first_nonzero = bytes.iter().position(|&byte| byte != 0);
    match first_nonzero {
        Some(idx) => &bytes[idx..],
        None => &bytes[bytes.len().saturating_sub(1)..],
    }
}

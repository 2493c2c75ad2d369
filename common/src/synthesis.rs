//! Exact result computation and output width policy

use crate::{
    bytes::{self, Width},
    corpus::TestVector,
    error::{ConfigError, DomainError},
    inputs::OperandPair,
    operations::{Exact, Operation},
    Result,
};
use log::debug;
use num_bigint::BigUint;
use num_traits::Zero;

/// Result of an operation, reduced to the output width it will be serialized at
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reduced {
    /// Non-negative result, guaranteed to fit in `width`
    pub value: BigUint,

    /// Output width
    pub width: Width,
}

/// Compute the expected output of `operation` on `operands`
///
/// - If the exact result is non-negative, it is kept as is. Without an
///   explicit `width`, the output uses the smallest whole number of bytes that
///   can hold it (see [`default_width()`]). An explicit `width` that is too
///   narrow to hold it is rejected.
/// - If the exact result is negative, which can only happen for subtraction
///   with `B > A`, it is reduced modulo `2^width` like a fixed-width unsigned
///   subtractor whose borrow-out is discarded would do. This is also where
///   truncation happens: with a narrow `width`, only the low-order bits of the
///   wraparound are kept. An explicit `width` is required in this case.
pub fn reduce(operation: Operation, operands: &OperandPair, width: Option<Width>) -> Result<Reduced> {
    match (operation.apply(&operands.a, &operands.b), width) {
        (Exact::NonNegative(value), None) => {
            let width = default_width(&value);
            Ok(Reduced { value, width })
        }
        (Exact::NonNegative(value), Some(width)) => {
            if !width.holds(&value) {
                return Err(ConfigError::WidthTooNarrow {
                    width: width.bits(),
                    required: value.bits(),
                }
                .into());
            }
            Ok(Reduced { value, width })
        }
        (Exact::Negative(_), None) => Err(DomainError::NegativeDifferenceWithoutWidth.into()),
        (Exact::Negative(magnitude), Some(width)) => {
            let value = wrap_negative(&magnitude, width);
            Ok(Reduced { value, width })
        }
    }
}

/// Truth that `width` is an acceptable output width for this operation and
/// these operands, i.e. that [`reduce()`] will not reject it
///
/// Test vector recipes use this to skip the parts of an output width sweep
/// that do not apply to a given operand pair.
pub fn accepts_width(operation: Operation, operands: &OperandPair, width: Width) -> bool {
    match operation.apply(&operands.a, &operands.b) {
        Exact::NonNegative(value) => width.holds(&value),
        Exact::Negative(_) => true,
    }
}

/// Build the test vector for `operation` on `operands` at a certain output
/// width (see [`reduce()`] for the semantics of `width`)
pub fn synthesize(
    operation: Operation,
    operands: &OperandPair,
    width: Option<Width>,
) -> Result<TestVector> {
    let Reduced { value, width } = reduce(operation, operands, width)?;
    let vector = TestVector {
        a: bytes::to_minimal_bytes(&operands.a),
        b: bytes::to_minimal_bytes(&operands.b),
        result: bytes::to_width_bytes(&value, width)?,
    };
    debug!(
        "{operation} {operands} at {width} -> {} byte(s) {value:#x}",
        vector.result.len()
    );
    Ok(vector)
}

/// `-magnitude mod 2^width`, i.e. the bit pattern that a `width`-bit unsigned
/// subtractor produces for a true difference of `-magnitude`
fn wrap_negative(magnitude: &BigUint, width: Width) -> BigUint {
    let modulus = width.modulus();
    let low_bits = magnitude % &modulus;
    if low_bits.is_zero() {
        low_bits
    } else {
        modulus - low_bits
    }
}

/// Estimate of the default output width of a non-negative result
///
/// This is `ceil(log2(value))`, rounded down to a multiple of 8 bits. It is a
/// cheap heuristic, which underestimates the required width whenever the
/// result's bit length is not a multiple of 8 and on exact powers of two
/// (e.g. 256 needs 9 bits but has a log2 of 8). Use [`default_width()`] to get
/// an output width that is actually suitable.
pub fn estimate_width_bits(value: &BigUint) -> u64 {
    let ceil_log2 = if value.is_zero() {
        0
    } else {
        (value - 1u8).bits()
    };
    (ceil_log2 / 8) * 8
}

/// Default output width of a non-negative result
///
/// The [`estimate_width_bits()`] heuristic is checked against the length of
/// the minimal serialization of `value`, and the latter wins if they
/// disagree, so the output is always a whole number of bytes that holds
/// `value` without any redundant leading zero byte.
pub fn default_width(value: &BigUint) -> Width {
    let estimate = estimate_width_bits(value);
    let actual = Width::from_bytes(bytes::to_minimal_bytes(value).len());
    if estimate != actual.bits() {
        debug!(
            "log2 estimate of {estimate} bits for {value:#x} corrected to {}",
            actual.bits()
        );
    }
    debug_assert!(estimate <= actual.bits());
    actual
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, test_utils::operand_pair};
    use num_traits::One;
    use proptest::prelude::*;

    fn pair(a: u64, b: u64) -> OperandPair {
        OperandPair::new(BigUint::from(a), BigUint::from(b))
    }

    fn width(bits: u64) -> Option<Width> {
        Some(Width::new(bits).unwrap())
    }

    fn pow2(exponent: u64) -> BigUint {
        BigUint::one() << exponent
    }

    #[test]
    fn carry_extends_output() {
        let vector = synthesize(Operation::Add, &pair(0xff, 0x01), None).unwrap();
        assert_eq!(vector.a, [0xff]);
        assert_eq!(vector.b, [0x01]);
        assert_eq!(vector.result, [0x01, 0x00]);
    }

    #[test]
    fn plain_difference() {
        let vector = synthesize(Operation::Subtract, &pair(0xff, 0x01), None).unwrap();
        assert_eq!(vector.result, [0xfe]);
    }

    #[test]
    fn borrow_wraps_around() {
        let vector = synthesize(Operation::Subtract, &pair(0x01, 0x02), width(8)).unwrap();
        assert_eq!(vector.result, [0xff]);
    }

    #[test]
    fn negative_needs_width() {
        assert_eq!(
            synthesize(Operation::Subtract, &pair(1, 2), None),
            Err(Error::Domain(DomainError::NegativeDifferenceWithoutWidth))
        );
    }

    #[test]
    fn non_negative_too_narrow() {
        assert_eq!(
            synthesize(Operation::Add, &pair(0xff, 0x01), width(8)),
            Err(Error::Config(ConfigError::WidthTooNarrow {
                width: 8,
                required: 9
            }))
        );
        assert!(!accepts_width(Operation::Add, &pair(0xff, 0x01), Width::new(8).unwrap()));
        assert!(accepts_width(Operation::Subtract, &pair(1, 0xffff), Width::new(1).unwrap()));
    }

    #[test]
    fn zero_result() {
        let vector = synthesize(Operation::Subtract, &pair(42, 42), None).unwrap();
        assert_eq!(vector.result, [0]);
        let vector = synthesize(Operation::Subtract, &pair(42, 42), width(32)).unwrap();
        assert_eq!(vector.result, [0; 4]);
    }

    #[test]
    fn wraparound_of_exact_multiple() {
        // -256 is 0 modulo 2^8
        let vector = synthesize(Operation::Subtract, &pair(0, 256), width(8)).unwrap();
        assert_eq!(vector.result, [0]);
    }

    #[test]
    fn unaligned_wraparound() {
        // -1 mod 2^11 = 0x7FF, serialized on ceil(11/8) = 2 bytes
        let vector = synthesize(Operation::Subtract, &pair(1, 2), width(11)).unwrap();
        assert_eq!(vector.result, [0x07, 0xff]);
    }

    #[test]
    fn heuristic_underestimates() {
        // 256 = 2^8 has a log2 of exactly 8, but needs 2 bytes
        let value = BigUint::from(256u32);
        assert_eq!(estimate_width_bits(&value), 8);
        assert_eq!(default_width(&value).bits(), 16);

        // 100 has a ceil(log2) of 7, which rounds down to 0 bits
        let value = BigUint::from(100u32);
        assert_eq!(estimate_width_bits(&value), 0);
        assert_eq!(default_width(&value).bits(), 8);

        // 255 gets it right
        let value = BigUint::from(255u32);
        assert_eq!(estimate_width_bits(&value), 8);
        assert_eq!(default_width(&value).bits(), 8);

        assert_eq!(estimate_width_bits(&BigUint::zero()), 0);
        assert_eq!(default_width(&BigUint::zero()).bits(), 8);
    }

    proptest! {
        /// `(2^(i+1), 2^i)` adds to `3 * 2^i` and subtracts to `2^i`
        #[test]
        fn powers_of_two(i in 0u64..200) {
            let operands = OperandPair::new(pow2(i + 1), pow2(i));
            let sum = reduce(Operation::Add, &operands, None).unwrap();
            prop_assert_eq!(sum.value, pow2(i) * 3u8);
            let difference = reduce(Operation::Subtract, &operands, None).unwrap();
            prop_assert_eq!(difference.value, pow2(i));
        }

        /// `2^i - 2^(i+1)` at width `i + 2` borrows into `2^(i+2) - 2^i`
        #[test]
        fn borrow_boundary(i in 0u64..200) {
            let operands = OperandPair::new(pow2(i), pow2(i + 1));
            let width = Width::new(i + 2).unwrap();
            let reduced = reduce(Operation::Subtract, &operands, Some(width)).unwrap();
            prop_assert_eq!(reduced.value, pow2(i + 2) - pow2(i));
            prop_assert_eq!(reduced.width, width);
        }

        /// Default-width results decode to the exact result
        #[test]
        fn default_round_trip((a, b) in operand_pair(40), operation in any::<Operation>()) {
            let operands = OperandPair::new(a.clone(), b.clone());
            match synthesize(operation, &operands, None) {
                Ok(vector) => {
                    let result = bytes::from_bytes(&vector.result);
                    match operation {
                        Operation::Add => prop_assert_eq!(result, a + b),
                        Operation::Subtract => prop_assert_eq!(result + b, a),
                    }
                    prop_assert_eq!(vector.result.clone(), bytes::to_minimal_bytes(&bytes::from_bytes(&vector.result)));
                }
                Err(e) => {
                    prop_assert_eq!(operation, Operation::Subtract);
                    prop_assert!(a < b);
                    prop_assert_eq!(e, Error::Domain(DomainError::NegativeDifferenceWithoutWidth));
                }
            }
        }

        /// Wraparound matches modular arithmetic at any width, including
        /// widths that truncate or zero-extend the result
        #[test]
        fn wraparound((a, b) in operand_pair(24), bits in 1u64..300) {
            let (a, b) = if a < b { (a, b) } else { (b, a) };
            prop_assume!(a != b);
            let operands = OperandPair::new(a.clone(), b.clone());
            let width = Width::new(bits).unwrap();
            let modulus = width.modulus();
            let vector = synthesize(Operation::Subtract, &operands, Some(width)).unwrap();
            prop_assert_eq!(vector.result.len(), width.num_bytes());
            let result = bytes::from_bytes(&vector.result);
            prop_assert!(result < modulus);
            prop_assert_eq!((result + (b - a)) % &modulus, BigUint::zero());
        }

        /// Explicit widths either pad non-negative results or get rejected
        #[test]
        fn explicit_width((a, b) in operand_pair(24), operation in any::<Operation>(), bits in 1u64..300) {
            let operands = OperandPair::new(a, b).ordered();
            let width = Width::new(bits).unwrap();
            let exact = match operation.apply(&operands.a, &operands.b) {
                Exact::NonNegative(value) => value,
                Exact::Negative(_) => unreachable!("operands are ordered"),
            };
            let accepted = accepts_width(operation, &operands, width);
            match synthesize(operation, &operands, Some(width)) {
                Ok(vector) => {
                    prop_assert!(accepted);
                    prop_assert_eq!(vector.result.len(), width.num_bytes());
                    prop_assert_eq!(bytes::from_bytes(&vector.result), exact);
                }
                Err(e) => {
                    prop_assert!(!accepted);
                    prop_assert_eq!(e, Error::Config(ConfigError::WidthTooNarrow {
                        width: bits,
                        required: exact.bits(),
                    }));
                }
            }
        }
    }
}

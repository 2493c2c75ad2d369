//! Deterministic operand pairs straddling powers of two

use crate::inputs::OperandPair;
use log::trace;
use num_bigint::BigUint;
use num_traits::One;
use std::ops::Range;

/// Flavor of boundary operand pair
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BoundaryKind {
    /// `(2^(i+1), 2^i)`
    ///
    /// Adding these exercises carry-free single-bit columns, subtracting them
    /// in the wrong order borrows through every bit above `i`.
    PowersOfTwo,

    /// `(2^(i+1) - 1, 2^i - 1)`
    ///
    /// All-ones operands, where a carry entering at the bottom propagates
    /// through every bit (the `0x0F...F + 0x10...0` family of bugs).
    AllOnes,
}
//
impl BoundaryKind {
    /// Operand pair of this kind for exponent `i`
    pub fn operands(self, exponent: u32) -> OperandPair {
        let low = BigUint::one() << exponent;
        let high = BigUint::one() << (u64::from(exponent) + 1);
        match self {
            Self::PowersOfTwo => OperandPair::new(high, low),
            Self::AllOnes => OperandPair::new(high - 1u8, low - 1u8),
        }
    }
}

/// Boundary operand pair, along with its provenance
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoundaryPair {
    /// Exponent `i` that this pair straddles
    pub exponent: u32,

    /// Flavor of this pair
    pub kind: BoundaryKind,

    /// Operands `(A, B)`
    pub operands: OperandPair,
}

/// All boundary pairs for a range of exponents
///
/// For each exponent `i`, in increasing order, this yields the
/// [`PowersOfTwo`](BoundaryKind::PowersOfTwo) pair, then the
/// [`AllOnes`](BoundaryKind::AllOnes) pair.
pub fn boundary_pairs(exponents: Range<u32>) -> impl Iterator<Item = BoundaryPair> {
    exponents.flat_map(|exponent| {
        [BoundaryKind::PowersOfTwo, BoundaryKind::AllOnes].map(move |kind| {
            let operands = kind.operands(exponent);
            trace!("Boundary operands {operands} for {kind:?} at 2^{exponent}");
            BoundaryPair {
                exponent,
                kind,
                operands,
            }
        })
    })
}

//! Operand pairs fed to the arithmetic operations under test

pub mod generators;

use num_bigint::BigUint;
use std::fmt;

/// Pair of operands `(A, B)` for a binary operation
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct OperandPair {
    /// Left-hand side operand
    pub a: BigUint,

    /// Right-hand side operand
    pub b: BigUint,
}
//
impl OperandPair {
    /// Set up an operand pair
    pub fn new(a: BigUint, b: BigUint) -> Self {
        Self { a, b }
    }

    /// Same operands, in the opposite order
    ///
    /// For subtraction, this turns a non-negative difference into a negative
    /// one (or vice versa), which is how borrow-out test vectors are built.
    pub fn swapped(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Same operands, reordered such that `A >= B`
    pub fn ordered(self) -> Self {
        if self.a >= self.b {
            self
        } else {
            self.swapped()
        }
    }
}
//
impl fmt::Display for OperandPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:#x}, {:#x})", self.a, self.b)
    }
}

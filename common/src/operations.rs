//! Arithmetic operations under test and the recipes that exercise them

use crate::{config::GeneratorConfig, corpus::CorpusBuilder, Result};
use num_bigint::BigUint;
use rand::Rng;
use std::{cmp::Ordering, fmt};

/// Bignum operation whose test vectors are being generated
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
    Add,
    Subtract,
}
//
impl Operation {
    /// Every supported operation
    pub const ALL: [Self; 2] = [Self::Add, Self::Subtract];

    /// Short name, as used in logs and fixture names
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "sub",
        }
    }

    /// Exact mathematical result of this operation
    pub fn apply(self, a: &BigUint, b: &BigUint) -> Exact {
        match self {
            Self::Add => Exact::NonNegative(a + b),
            Self::Subtract => match a.cmp(b) {
                Ordering::Less => Exact::Negative(b - a),
                Ordering::Equal | Ordering::Greater => Exact::NonNegative(a - b),
            },
        }
    }
}
//
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signed result of an [`Operation`], in sign-magnitude form
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Exact {
    /// Result is this non-negative number
    NonNegative(BigUint),

    /// Result is the opposite of this (strictly positive) number
    Negative(BigUint),
}

/// Procedure for filling up a corpus of test vectors for one [`Operation`]
///
/// Each operation crate provides one implementation, which the root crate
/// selects according to the requested operation.
pub trait Recipe {
    /// Operation whose test vectors are generated
    const OPERATION: Operation;

    /// Append this recipe's test vectors to `corpus`
    ///
    /// `config` has already been validated when this is called. Randomness
    /// must only be drawn from `rng`, so that seeding it makes the output
    /// reproducible.
    fn fill<R: Rng>(
        config: &GeneratorConfig,
        rng: &mut R,
        corpus: &mut CorpusBuilder,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::operand_pair;
    use num_traits::Zero;
    use proptest::prelude::*;

    proptest! {
        /// Addition is exact and never negative
        #[test]
        fn add((a, b) in operand_pair(48)) {
            prop_assert_eq!(Operation::Add.apply(&a, &b), Exact::NonNegative(&a + &b));
        }

        /// Subtraction reports the sign separately from the magnitude
        #[test]
        fn subtract((a, b) in operand_pair(48)) {
            match Operation::Subtract.apply(&a, &b) {
                Exact::NonNegative(d) => {
                    prop_assert!(a >= b);
                    prop_assert_eq!(d + &b, a);
                }
                Exact::Negative(d) => {
                    prop_assert!(a < b);
                    prop_assert!(!d.is_zero());
                    prop_assert_eq!(d + &a, b);
                }
            }
        }

        /// Names are distinct and stable
        #[test]
        fn names(operation in any::<Operation>()) {
            prop_assert_eq!(operation.to_string(), operation.name());
            let others = Operation::ALL.iter().filter(|&&other| other != operation);
            for other in others {
                prop_assert_ne!(other.name(), operation.name());
            }
        }
    }

    #[test]
    fn equal_operands_subtract_to_zero() {
        let x = BigUint::from(0xdead_beefu32);
        assert_eq!(
            Operation::Subtract.apply(&x, &x),
            Exact::NonNegative(BigUint::zero())
        );
    }
}

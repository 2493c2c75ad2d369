//! Uniformly random operands within a magnitude range

use crate::inputs::OperandPair;
use log::trace;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::prelude::*;
use std::ops::Range;

/// Random distribution of operands in `[2^low, 2^high[`
///
/// With `high = low + 1`, every generated operand has a bit length of exactly
/// `low + 1`, so the magnitude of test vectors is predictable while all of
/// their lower-order bits vary.
///
/// # Panics
///
/// Panics if the magnitude range is empty.
pub fn magnitude_sampler<R: Rng>(magnitude: Range<u64>) -> impl Fn(&mut R) -> BigUint {
    assert!(
        magnitude.start < magnitude.end,
        "magnitude range {magnitude:?} should not be empty"
    );
    let low = BigUint::one() << magnitude.start;
    let high = BigUint::one() << magnitude.end;
    move |rng| rng.gen_biguint_range(&low, &high)
}

/// Random distribution of operand pairs where `A` and `B` are independently
/// drawn from their own magnitude range
///
/// # Panics
///
/// Panics if either magnitude range is empty.
pub fn pair_sampler<R: Rng>(
    a_magnitude: Range<u64>,
    b_magnitude: Range<u64>,
) -> impl Fn(&mut R) -> OperandPair {
    let a_sampler = magnitude_sampler::<R>(a_magnitude);
    let b_sampler = magnitude_sampler::<R>(b_magnitude);
    move |rng| {
        let pair = OperandPair::new(a_sampler(rng), b_sampler(rng));
        trace!("Sampled random operands {pair}");
        pair
    }
}

/// Like [`pair_sampler()`] with a single magnitude range, but the operands are
/// reordered such that `A >= B`
///
/// This is used to produce subtraction test vectors whose result is known to
/// be non-negative, and therefore does not need an explicit output width.
pub fn ordered_pair_sampler<R: Rng>(magnitude: Range<u64>) -> impl Fn(&mut R) -> OperandPair {
    let sampler = pair_sampler::<R>(magnitude.clone(), magnitude);
    move |rng| sampler(rng).ordered()
}

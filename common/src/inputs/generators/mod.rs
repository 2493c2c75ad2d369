//! Operand sampling algorithms
//!
//! Two complementary strategies are used to cover the input space:
//!
//! - [`random`] samplers draw operands of a known, consistent bit length with
//!   uniformly random low-order bits, which produces "typical" test vectors.
//! - [`boundary`] pairs deterministically straddle powers of two, where carry
//!   and borrow propagation is most likely to be mis-implemented, and do not
//!   depend on random chance.

pub mod boundary;
pub mod random;

pub use boundary::{boundary_pairs, BoundaryKind, BoundaryPair};
pub use random::{magnitude_sampler, ordered_pair_sampler, pair_sampler};

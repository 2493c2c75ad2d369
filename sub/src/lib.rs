use common::{
    config::GeneratorConfig,
    corpus::CorpusBuilder,
    inputs::generators::{self, BoundaryKind, BoundaryPair},
    operations::{Operation, Recipe},
    Result,
};
use itertools::iproduct;
use log::debug;
use rand::Rng;

/// SUB test vectors
///
/// In addition to the usual random and boundary operands, this sweeps through
/// output widths that are too small, just right and too large for the result,
/// and subtracts operands in both orders so that borrow-out wraparound and
/// truncation of the wrapped result get exercised.
///
/// Output widths that are too narrow for a non-negative result are skipped,
/// since such a result cannot be represented without dropping information.
#[derive(Clone, Copy)]
pub struct Sub;
//
impl Recipe for Sub {
    const OPERATION: Operation = Operation::Subtract;

    fn fill<R: Rng>(
        config: &GeneratorConfig,
        rng: &mut R,
        corpus: &mut CorpusBuilder,
    ) -> Result<()> {
        let wraparound_widths = config.wraparound_widths()?;

        // Typical operands with random low-order bits, ordered such that the
        // difference is non-negative and gets a default output width
        let ordered = generators::ordered_pair_sampler::<R>(config.random_magnitude.clone());
        for _ in 0..config.random_cases {
            corpus.push_case(&ordered(rng), None)?;
        }
        debug!("Recorded {} random SUB test vectors", corpus.len());

        // Operands of very different magnitudes, with a fresh operand pair for
        // each output width. The small-minus-large order wraps around at
        // every width, and gets truncated by the narrowest ones.
        let asymmetric = generators::pair_sampler::<R>(
            config.asymmetric_high_magnitude.clone(),
            config.asymmetric_low_magnitude.clone(),
        );
        for (_, &width) in iproduct!(0..config.asymmetric_cases, &wraparound_widths) {
            let operands = asymmetric(rng);
            corpus.push_sweep(&operands, [width])?;
            corpus.push_case(&operands.swapped(), Some(width))?;
        }
        debug!("Recorded {} random and asymmetric SUB test vectors", corpus.len());

        // Power-of-two boundaries, where borrows propagate the furthest
        for BoundaryPair {
            exponent,
            kind,
            operands,
        } in generators::boundary_pairs(config.boundary_exponents.clone())
        {
            corpus.push_case(&operands, None)?;
            match kind {
                BoundaryKind::PowersOfTwo => {
                    corpus.push_sweep(&operands, wraparound_widths.iter().copied())?;
                    corpus.push_sweep(&operands.swapped(), wraparound_widths.iter().copied())?;
                }
                BoundaryKind::AllOnes => {
                    corpus.push_sweep(&operands, config.all_ones_widths(exponent))?;
                }
            }
        }
        Ok(())
    }
}

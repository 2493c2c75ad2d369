use common::{
    config::GeneratorConfig,
    corpus::CorpusBuilder,
    inputs::generators::{self, BoundaryPair},
    operations::{Operation, Recipe},
    Result,
};
use log::debug;
use rand::Rng;

/// ADD test vectors
///
/// Results of addition are never negative, so every test vector uses the
/// default output width, which grows by one byte whenever the carry out of
/// the top byte is set.
#[derive(Clone, Copy)]
pub struct Add;
//
impl Recipe for Add {
    const OPERATION: Operation = Operation::Add;

    fn fill<R: Rng>(
        config: &GeneratorConfig,
        rng: &mut R,
        corpus: &mut CorpusBuilder,
    ) -> Result<()> {
        // Typical operands with random low-order bits
        let random = generators::pair_sampler::<R>(
            config.random_magnitude.clone(),
            config.random_magnitude.clone(),
        );
        for _ in 0..config.random_cases {
            corpus.push_case(&random(rng), None)?;
        }
        debug!("Recorded {} random ADD test vectors", corpus.len());

        // Power-of-two boundaries, where carries propagate the furthest. The
        // swapped order is also recorded because bignum libraries often
        // special-case which operand is the longest.
        for BoundaryPair { operands, .. } in
            generators::boundary_pairs(config.boundary_exponents.clone())
        {
            corpus.push_case(&operands, None)?;
            corpus.push_case(&operands.swapped(), None)?;
        }
        Ok(())
    }
}

//! Carry and borrow stressing test vectors for bignum ADD/SUB
//!
//! A generation run takes a [`GeneratorConfig`] and a random number generator,
//! and produces a [`Corpus`] of big-endian test vectors for one [`Operation`].
//! Which operations can be generated is decided at compile time through the
//! `gen_xyz` cargo features.

pub use common::{
    bytes,
    config::GeneratorConfig,
    corpus::{verify, Corpus, TestVector},
    inputs::OperandPair,
    operations::{Exact, Operation},
    ConfigError, DomainError, Error, Result,
};

use common::{corpus::CorpusBuilder, operations::Recipe};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Truth that this build can generate test vectors for `operation`
pub const fn is_supported(operation: Operation) -> bool {
    match operation {
        Operation::Add => cfg!(feature = "gen_add"),
        Operation::Subtract => cfg!(feature = "gen_sub"),
    }
}

/// Operations that this build can generate test vectors for
pub fn supported_operations() -> impl Iterator<Item = Operation> {
    Operation::ALL.into_iter().filter(|&op| is_supported(op))
}

/// Generate the test vector corpus described by `config`, drawing random
/// operands from `rng`
///
/// The configuration is validated before anything is generated, and a failure
/// at any point aborts the whole run: either every test vector is valid, or
/// no corpus is returned.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Corpus> {
    if !is_supported(config.operation) {
        return Err(ConfigError::UnsupportedOperation(config.operation).into());
    }
    config.validate()?;
    let mut corpus = CorpusBuilder::new(config.operation);
    run_recipe(config, rng, &mut corpus)?;
    let corpus = corpus.finish();
    debug_assert_eq!(
        corpus.find_invalid(),
        None,
        "generated an invalid {} test vector",
        corpus.operation()
    );
    Ok(corpus)
}

/// Like [`generate()`], but with a reproducible stream of random operands
///
/// Two runs with the same configuration and seed produce the same corpus.
pub fn generate_seeded(config: &GeneratorConfig, seed: u64) -> Result<Corpus> {
    info!("Generating {} test vectors with seed {seed}", config.operation);
    generate(config, &mut ChaCha20Rng::seed_from_u64(seed))
}

/// Dispatch to the recipe of the configured operation
#[allow(unused_variables)]
fn run_recipe<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
    corpus: &mut CorpusBuilder,
) -> Result<()> {
    match config.operation {
        #[cfg(feature = "gen_add")]
        Operation::Add => add::Add::fill(config, rng, corpus),
        #[cfg(feature = "gen_sub")]
        Operation::Subtract => sub::Sub::fill(config, rng, corpus),
        #[allow(unreachable_patterns)]
        unsupported => Err(ConfigError::UnsupportedOperation(unsupported).into()),
    }
}

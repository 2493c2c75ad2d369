//! Test vectors and the corpus that gathers them

use crate::{
    bytes::{self, Width},
    inputs::OperandPair,
    operations::{Exact, Operation},
    synthesis, Result,
};
use itertools::Itertools;
use log::info;
use num_traits::Zero;

/// Serialized operands and expected result of one test case
///
/// All byte sequences are big-endian. Operands use their minimal
/// serialization, the result is serialized at the output width of the test
/// case, which is what tells the bignum library under test how large its
/// output buffer is.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TestVector {
    /// Operand A
    pub a: Vec<u8>,

    /// Operand B
    pub b: Vec<u8>,

    /// Expected result
    pub result: Vec<u8>,
}
//
impl TestVector {
    /// Independently check that `result` is the output of `operation` on
    /// operands `a` and `b`
    ///
    /// See [`verify()`] for the exact criterion.
    pub fn verify(&self, operation: Operation) -> bool {
        verify(operation, &self.a, &self.b, &self.result)
    }
}

/// Check that `result` is the output of `operation` on operands `a` and `b`,
/// recomputing it from the serialized operands
///
/// Non-negative results must be exactly equal to the result of the operation,
/// whatever the amount of zero padding. Negative results must be the
/// wraparound of the true result at some output width that matches the length
/// of `result`, i.e. `(A - B) mod 2^W` with `ceil(W/8) = len(result)`. For
/// byte-aligned output widths, this is `(A - B) mod 2^(8 * len(result))`.
pub fn verify(operation: Operation, a: &[u8], b: &[u8], result: &[u8]) -> bool {
    if result.is_empty() {
        return false;
    }
    let a = bytes::from_bytes(a);
    let b = bytes::from_bytes(b);
    let actual = bytes::from_bytes(result);
    match operation.apply(&a, &b) {
        Exact::NonNegative(expected) => actual == expected,
        Exact::Negative(magnitude) => {
            let max_bits = Width::from_bytes(result.len()).bits();
            (max_bits - 7..=max_bits)
                .filter_map(|bits| Width::new(bits).ok())
                .any(|width| {
                    let modulus = width.modulus();
                    actual < modulus && ((&actual + &magnitude) % &modulus).is_zero()
                })
        }
    }
}

/// Complete set of test vectors of one generation run
///
/// Stored as three parallel sequences of equal length, where the i-th element
/// of each sequence forms the i-th test vector. This is the layout that the
/// emission layer renders into separate A, B and result fixture tables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Corpus {
    operation: Operation,
    a: Vec<Vec<u8>>,
    b: Vec<Vec<u8>>,
    results: Vec<Vec<u8>>,
}
//
impl Corpus {
    /// Operation that these test vectors exercise
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Number of test vectors
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Truth that this corpus contains no test vector
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// All A operands
    pub fn a_values(&self) -> &[Vec<u8>] {
        &self.a
    }

    /// All B operands
    pub fn b_values(&self) -> &[Vec<u8>] {
        &self.b
    }

    /// All expected results
    pub fn results(&self) -> &[Vec<u8>] {
        &self.results
    }

    /// Iterate over test vectors as `[a, b, result]` triples
    pub fn iter(&self) -> impl ExactSizeIterator<Item = [&[u8]; 3]> + '_ {
        self.a
            .iter()
            .zip(&self.b)
            .zip(&self.results)
            .map(|((a, b), result)| [&a[..], &b[..], &result[..]])
    }

    /// Position of the first test vector that fails [`verify()`], if any
    pub fn find_invalid(&self) -> Option<usize> {
        self.iter()
            .position(|[a, b, result]| !verify(self.operation, a, b, result))
    }

    /// Split into the A operand, B operand and result sequences
    pub fn into_parts(self) -> [Vec<Vec<u8>>; 3] {
        [self.a, self.b, self.results]
    }
}

/// Incrementally assembled [`Corpus`]
///
/// The corpus only becomes available once [`finish()`](Self::finish) is
/// called, so a generation run that errors out midway never leaks a partial
/// corpus.
#[derive(Debug)]
pub struct CorpusBuilder {
    corpus: Corpus,
}
//
impl CorpusBuilder {
    /// Start building a corpus for `operation`
    pub fn new(operation: Operation) -> Self {
        Self {
            corpus: Corpus {
                operation,
                a: Vec::new(),
                b: Vec::new(),
                results: Vec::new(),
            },
        }
    }

    /// Operation that the test vectors should exercise
    pub fn operation(&self) -> Operation {
        self.corpus.operation
    }

    /// Number of test vectors added so far
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// Truth that no test vector was added so far
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Append a test vector
    pub fn push(&mut self, vector: TestVector) {
        debug_assert!(
            vector.verify(self.operation()),
            "attempted to record invalid test vector {vector:?}"
        );
        let TestVector { a, b, result } = vector;
        self.corpus.a.push(a);
        self.corpus.b.push(b);
        self.corpus.results.push(result);
    }

    /// Synthesize the test vector for some operands and output width, then
    /// append it (see [`synthesis::reduce()`] for the semantics of `width`)
    pub fn push_case(&mut self, operands: &OperandPair, width: Option<Width>) -> Result<()> {
        let vector = synthesis::synthesize(self.operation(), operands, width)?;
        self.push(vector);
        Ok(())
    }

    /// Like [`push_case()`](Self::push_case), but for each output width of a
    /// sweep which [applies](synthesis::accepts_width) to these operands
    ///
    /// Returns the number of test vectors that were added.
    pub fn push_sweep(
        &mut self,
        operands: &OperandPair,
        widths: impl IntoIterator<Item = Width>,
    ) -> Result<usize> {
        let operation = self.operation();
        let mut num_cases = 0;
        for width in widths
            .into_iter()
            .filter(|&width| synthesis::accepts_width(operation, operands, width))
        {
            self.push_case(operands, Some(width))?;
            num_cases += 1;
        }
        Ok(num_cases)
    }

    /// Finish building the corpus
    pub fn finish(self) -> Corpus {
        let corpus = self.corpus;
        debug_assert!([corpus.a.len(), corpus.b.len(), corpus.results.len()]
            .into_iter()
            .all_equal());
        info!(
            "Generated {} {} test vectors",
            corpus.len(),
            corpus.operation
        );
        corpus
    }
}

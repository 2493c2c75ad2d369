//! Test vector generation parameters

use crate::{bytes::Width, error::ConfigError, operations::Operation};
use log::debug;
use std::{num::NonZeroU64, ops::Range};

/// Parameters of a test vector generation run
///
/// Magnitude ranges are expressed as ranges of powers of two: the range
/// `k..l` stands for operands in `[2^k, 2^l[`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    /// Operation whose test vectors should be generated
    pub operation: Operation,

    /// Number of test vectors built from uniformly random operands
    pub random_cases: usize,

    /// Magnitude range of uniformly random operands
    pub random_magnitude: Range<u64>,

    /// Number of test vectors built from operands of distinct magnitudes
    ///
    /// Only used by subtraction, where it stresses results whose bit length
    /// is unrelated to that of the output buffer.
    pub asymmetric_cases: usize,

    /// Magnitude range of the larger operand of asymmetric test vectors
    pub asymmetric_high_magnitude: Range<u64>,

    /// Magnitude range of the smaller operand of asymmetric test vectors
    pub asymmetric_low_magnitude: Range<u64>,

    /// Exponents `i` of the boundary pairs `(2^(i+1), 2^i)` and
    /// `(2^(i+1) - 1, 2^i - 1)`
    pub boundary_exponents: Range<u32>,

    /// Output widths to sweep through when testing wraparound and truncation
    pub wraparound_widths: Vec<u64>,

    /// Stride of the `1..2i` output width sweep applied to all-ones boundary
    /// pairs of exponent `i`
    pub all_ones_width_stride: u64,
}
//
impl GeneratorConfig {
    /// Reference configuration for a certain operation
    ///
    /// Operands are around 100 bits wide, boundaries are probed from 2^40 to
    /// 2^60, and the wraparound width sweep goes from 8 to 136 bits in steps of
    /// 16, which covers output buffers that are way too small, just right, and
    /// too large for the operands at hand.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            random_cases: 10,
            random_magnitude: 100..101,
            asymmetric_cases: 10,
            asymmetric_high_magnitude: 100..101,
            asymmetric_low_magnitude: 90..91,
            boundary_exponents: 40..60,
            wraparound_widths: (8..150).step_by(16).collect(),
            all_ones_width_stride: 10,
        }
    }

    /// Check that this configuration makes sense
    ///
    /// This must be done before any test vector is generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("random magnitude", &self.random_magnitude)?;
        check_range("asymmetric high magnitude", &self.asymmetric_high_magnitude)?;
        check_range("asymmetric low magnitude", &self.asymmetric_low_magnitude)?;
        let exponents = &self.boundary_exponents;
        check_range(
            "boundary exponent",
            &(u64::from(exponents.start)..u64::from(exponents.end)),
        )?;
        self.wraparound_widths()?;
        if self.all_ones_width_stride == 0 {
            return Err(ConfigError::ZeroStride);
        }
        debug!("Validated {self:?}");
        Ok(())
    }

    /// Output widths of the wraparound sweep
    pub fn wraparound_widths(&self) -> Result<Vec<Width>, ConfigError> {
        self.wraparound_widths
            .iter()
            .map(|&bits| Width::new(bits))
            .collect()
    }

    /// Output widths of the sweep applied to all-ones pairs of exponent `i`,
    /// i.e. `1, 1 + stride, 1 + 2 * stride, ...` up to `2 * i` excluded
    pub fn all_ones_widths(&self, exponent: u32) -> impl Iterator<Item = Width> {
        let stride = NonZeroU64::new(self.all_ones_width_stride)
            .map_or(usize::MAX, |stride| {
                usize::try_from(stride.get()).unwrap_or(usize::MAX)
            });
        (1..2 * u64::from(exponent))
            .step_by(stride)
            .filter_map(|bits| Width::new(bits).ok())
    }
}

/// Check that a range of magnitudes or exponents is not empty
fn check_range(what: &'static str, range: &Range<u64>) -> Result<(), ConfigError> {
    if range.start < range.end {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange {
            what,
            low: range.start,
            high: range.end,
        })
    }
}

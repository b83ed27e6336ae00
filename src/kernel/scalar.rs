//! Scalar reference kernel.

use crate::kernel::Kernel;

/// Scalar sum-of-absolute-differences kernel.
pub struct SadScalar;

impl Kernel for SadScalar {
    #[inline]
    fn row_sad(region: &[u8], template: &[u8]) -> u64 {
        region
            .iter()
            .zip(template)
            .map(|(&r, &t)| u64::from(r.abs_diff(t)))
            .sum()
    }
}

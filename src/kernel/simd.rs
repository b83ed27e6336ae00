//! SIMD-accelerated kernel using the `wide` crate.
//!
//! The row loop is vectorized to process 8 samples at a time using `i32x8`.
//! Integer lanes keep the sums exact, so results are identical to the scalar
//! kernel.

use crate::kernel::Kernel;
use wide::i32x8;

const LANES: usize = 8;

/// Load 8 u8 values and widen to i32x8.
#[inline]
fn load_u8x8_as_i32x8(slice: &[u8]) -> i32x8 {
    i32x8::from([
        slice[0] as i32,
        slice[1] as i32,
        slice[2] as i32,
        slice[3] as i32,
        slice[4] as i32,
        slice[5] as i32,
        slice[6] as i32,
        slice[7] as i32,
    ])
}

/// Horizontal sum of i32x8.
#[inline]
fn hsum(v: i32x8) -> u64 {
    v.to_array().iter().map(|&lane| lane as u64).sum()
}

/// SIMD sum-of-absolute-differences kernel.
pub struct SadSimd;

impl Kernel for SadSimd {
    fn row_sad(region: &[u8], template: &[u8]) -> u64 {
        let len = region.len().min(template.len());
        let simd_end = len / LANES * LANES;

        // Per-lane sums stay far below i32::MAX for a single row.
        let mut acc = i32x8::default();
        let mut i = 0;
        while i < simd_end {
            let r = load_u8x8_as_i32x8(&region[i..]);
            let t = load_u8x8_as_i32x8(&template[i..]);
            acc = acc + (r - t).abs();
            i += LANES;
        }

        let mut rest = 0u64;
        while i < len {
            rest += u64::from(region[i].abs_diff(template[i]));
            i += 1;
        }

        hsum(acc) + rest
    }
}

#[cfg(test)]
mod tests {
    use super::SadSimd;
    use crate::kernel::scalar::SadScalar;
    use crate::kernel::Kernel;

    #[test]
    fn simd_row_sad_matches_scalar() {
        let region: Vec<u8> = (0..37u32).map(|v| (v * 53 % 256) as u8).collect();
        let template: Vec<u8> = (0..37u32).map(|v| (v * 17 % 256) as u8).collect();
        assert_eq!(
            SadSimd::row_sad(&region, &template),
            SadScalar::row_sad(&region, &template)
        );
    }
}

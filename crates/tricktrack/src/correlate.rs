//! Fixed-point cross-correlation.

use crate::fxp::isqrt_u64;

/// Fractional bits of a correlation coefficient (Q15).
pub const SCALE_BITS: u32 = 15;

/// Coefficient value representing +1.0.
pub const COEFF_ONE: i32 = 1 << SCALE_BITS;

/// Right-shift applied to the centered sums before the denominator
/// multiply, compensating the Q15×Q15 widening so `sxx * syy` fits u64.
pub const SUM_SHIFT: u32 = 15;

/// Pearson-style correlation coefficient of two equal-length sequences.
///
/// Both inputs and the result are fixed point: the coefficient is Q15 in
/// `[-COEFF_ONE, COEFF_ONE]`. Returns `None` when either sequence has no
/// usable variance after the sum shift; dividing there is undefined, so the
/// pair is reported as incomparable instead.
///
/// Correlating a sequence against itself yields exactly [`COEFF_ONE`]: the
/// shifted sums on both sides of the quotient are identical, so the
/// truncation cancels. The elementwise negation yields exactly
/// `-COEFF_ONE` after the clamp.
pub fn correlate(a: &[i16], b: &[i16]) -> Option<i32> {
    debug_assert_eq!(a.len(), b.len());
    let len = a.len() as i64;
    if len == 0 {
        return None;
    }

    let mut sum_a: i64 = 0;
    let mut sum_b: i64 = 0;
    for i in 0..a.len() {
        sum_a += a[i] as i64;
        sum_b += b[i] as i64;
    }
    let mean_a = (sum_a / len) as i32;
    let mean_b = (sum_b / len) as i32;

    // Mean-center in widened arithmetic; |centered| <= 65535 so each
    // product fits 32 bits and the sums fit i64 with room to spare.
    let mut num: i64 = 0;
    let mut sxx: i64 = 0;
    let mut syy: i64 = 0;
    for i in 0..a.len() {
        let ca = (a[i] as i32 - mean_a) as i64;
        let cb = (b[i] as i32 - mean_b) as i64;
        num += ca * cb;
        sxx += ca * ca;
        syy += cb * cb;
    }

    let num = num >> SUM_SHIFT;
    let sxx = (sxx >> SUM_SHIFT) as u64;
    let syy = (syy >> SUM_SHIFT) as u64;

    let denom = isqrt_u64(sxx * syy);
    if denom == 0 {
        return None;
    }

    let coeff = (num << SCALE_BITS) / denom as i64;
    Some(coeff.clamp(-(COEFF_ONE as i64), COEFF_ONE as i64) as i32)
}

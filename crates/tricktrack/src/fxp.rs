//! Integer fixed-point primitives.
//!
//! These stay integer-only on purpose: the target has no FPU, and the
//! bit-exact versions reproduce identically across platforms.

/// Bit-by-bit integer square root of a 64-bit value.
///
/// Binary long-division form: exact floor for every input, no iteration
/// count to tune, no floating point. Runs in 32 constant-bounded steps.
pub const fn isqrt_u64(value: u64) -> u64 {
    let mut op = value;
    let mut res = 0u64;
    // Highest power of four at or below the operand.
    let mut one = 1u64 << 62;
    while one > op {
        one >>= 2;
    }
    while one != 0 {
        if op >= res + one {
            op -= res + one;
            res = (res >> 1) + one;
        } else {
            res >>= 1;
        }
        one >>= 2;
    }
    res
}

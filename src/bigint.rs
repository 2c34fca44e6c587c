//! Arbitrary-precision arithmetic for magnitudes beyond native range.
//!
//! Thin adapter over `num_bigint::BigUint`; the rest of the codec goes
//! through these helpers so the concrete bignum representation stays an
//! implementation detail. All values are non-negative.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// Number of values one word carries.
pub const WORD_BASE: u32 = 65536;

pub(crate) fn word_base() -> BigUint {
    BigUint::from(WORD_BASE)
}

/// 65536^exp.
pub fn pow_base(exp: u32) -> BigUint {
    word_base().pow(exp)
}

/// Decomposes `value` into minimal big-endian base-65536 digits.
///
/// Repeated floor-division and modulo by the base; zero still yields one
/// digit, `[0]`.
pub fn digits_be(value: &BigUint) -> Vec<u16> {
    if value.is_zero() {
        return vec![0];
    }
    let base = word_base();
    let mut digits = Vec::new();
    let mut num = value.clone();
    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&base);
        let limbs = remainder.to_u64_digits();
        digits.push(if limbs.is_empty() { 0 } else { limbs[0] as u16 });
        num = quotient;
    }
    digits.reverse();
    digits
}

/// Recombines big-endian base-65536 digits by multiply-and-add, never
/// overflowing regardless of digit count.
pub fn from_digits_be(digits: &[u16]) -> BigUint {
    let base = word_base();
    let mut num = BigUint::zero();
    for &digit in digits {
        num *= &base;
        num += BigUint::from(digit);
    }
    num
}

/// Checked extraction to a non-negative `i32`; `None` above 2^31 - 1.
pub fn to_int32(value: &BigUint) -> Option<i32> {
    value.to_i32()
}

/// Checked extraction to an exactly-representable `f64`.
///
/// Successive integers stop being distinguishable in a double at
/// 2/epsilon - 1 = 2^53 - 1; values at or above that bound are refused.
pub fn to_float64(value: &BigUint) -> Option<f64> {
    if *value >= max_float64_magnitude() {
        None
    } else {
        value.to_f64()
    }
}

/// The exclusive upper bound of the `Float64` output mode, 2^53 - 1.
pub fn max_float64_magnitude() -> BigUint {
    (BigUint::from(1u8) << 53usize) - 1u8
}

/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use num_traits::{One, PrimInt, WrappingMul, Zero};

/// A 256-bit unsigned integer, little-endian limbs (`lo` holds bits 0..128).
///
/// Only the operations the power-of-five oracle needs are implemented: no
/// general add/sub/div, just construction, comparison and a widening
/// combine with a 128-bit multiplier.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct U256 {
    pub lo: u128,
    pub hi: u128,
}

impl U256 {
    #[inline]
    pub const fn new(lo: u128, hi: u128) -> Self {
        U256 { lo, hi }
    }

    pub(crate) const ZERO: U256 = U256::new(0, 0);
}

/// Widening `u128 * u128 -> (lo, hi)`, exact, no overflow.
#[inline]
pub(crate) const fn mul_wide_u128(a: u128, b: u128) -> (u128, u128) {
    let a0 = a as u64 as u128;
    let a1 = (a >> 64) as u64 as u128;
    let b0 = b as u64 as u128;
    let b1 = (b >> 64) as u64 as u128;

    let p00 = a0 * b0;
    let p01 = a0 * b1;
    let p10 = a1 * b0;
    let p11 = a1 * b1;

    let mask64 = u64::MAX as u128;
    let cross = (p00 >> 64) + (p01 & mask64) + (p10 & mask64);

    let lo = ((cross & mask64) << 64) | (p00 as u64 as u128);
    let hi = p11 + (p01 >> 64) + (p10 >> 64) + (cross >> 64);
    (lo, hi)
}

/// `m (128 bit) * mul (256 bit)`, exact 384-bit product as three little-endian
/// `u128` limbs.
#[inline]
pub(crate) const fn widen_mul_384(m: u128, mul: U256) -> [u128; 3] {
    let (lo0, hi0) = mul_wide_u128(m, mul.lo);
    let (lo1, hi1) = mul_wide_u128(m, mul.hi);
    let (l1, carry) = hi0.overflowing_add(lo1);
    let l2 = hi1.wrapping_add(carry as u128);
    [lo0, l1, l2]
}

/// Logical right shift of a 384-bit value held as three little-endian `u128`
/// limbs. `shift` may be 0..=384.
#[inline]
pub(crate) const fn shr_384(limbs: [u128; 3], shift: u32) -> [u128; 3] {
    if shift >= 384 {
        return [0, 0, 0];
    }
    let limb_shift = (shift / 128) as usize;
    let bit_shift = shift % 128;
    let mut out = [0u128; 3];
    let mut i = 0;
    while i < 3 {
        let src = i + limb_shift;
        if src < 3 {
            let mut v = limbs[src] >> bit_shift;
            if bit_shift != 0 && src + 1 < 3 {
                v |= limbs[src + 1] << (128 - bit_shift);
            }
            out[i] = v;
        }
        i += 1;
    }
    out
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u64 {}
    impl Sealed for u128 {}
}

/// The working-width unsigned integer the Ryu driver is generic over:
/// `u64` for mantissas up to 64 bits, `u128` beyond that.
///
/// One code path covers both widths instead of duplicating the digit-removal
/// and interval machinery per width.
pub trait WideUint: sealed::Sealed + PrimInt + WrappingMul + core::fmt::Debug {
    /// Bit width of `Self` (64 or 128).
    const BIT_WIDTH: u32;
    /// `ceil(2^(BIT_WIDTH+2) / 5)`, the reciprocal-of-5 magic constant.
    const RECIP5: Self;
    /// `(2^BIT_WIDTH - 1) / 5`, the divisibility-by-5 threshold.
    const ALL_THREES: Self;

    /// Upper `BIT_WIDTH` bits of the `2*BIT_WIDTH`-bit product `self * rhs`.
    fn mul_high(self, rhs: Self) -> Self;
    /// Widen to `u128` (exact; `Self` never exceeds 128 bits).
    fn to_u128_full(self) -> u128;
    /// Narrow a `u128` down to `Self`, keeping the low `BIT_WIDTH` bits.
    fn from_u128_truncate(v: u128) -> Self;
}

impl WideUint for u64 {
    const BIT_WIDTH: u32 = 64;
    const RECIP5: Self = 0xCCCC_CCCC_CCCC_CCCD;
    const ALL_THREES: Self = u64::MAX / 5;

    #[inline]
    fn mul_high(self, rhs: Self) -> Self {
        (((self as u128) * (rhs as u128)) >> 64) as u64
    }

    #[inline]
    fn to_u128_full(self) -> u128 {
        self as u128
    }

    #[inline]
    fn from_u128_truncate(v: u128) -> Self {
        v as u64
    }
}

impl WideUint for u128 {
    const BIT_WIDTH: u32 = 128;
    // ceil(2^130 / 5)
    const RECIP5: Self = 272_225_893_536_750_770_770_699_685_945_414_569_165;
    const ALL_THREES: Self = u128::MAX / 5;

    #[inline]
    fn mul_high(self, rhs: Self) -> Self {
        let (_, hi) = mul_wide_u128(self, rhs);
        hi
    }

    #[inline]
    fn to_u128_full(self) -> u128 {
        self
    }

    #[inline]
    fn from_u128_truncate(v: u128) -> Self {
        v
    }
}

/// `floor(x / 5)`, via a widening multiply by the reciprocal-of-5 constant.
#[inline]
pub(crate) fn div5<T: WideUint>(x: T) -> T {
    T::mul_high(x, T::RECIP5) >> 2
}

/// `floor(x / 10)`.
#[inline]
pub(crate) fn div10<T: WideUint>(x: T) -> T {
    T::mul_high(x, T::RECIP5) >> 3
}

/// Build a small integer constant (2, 5, 10, ...) in width `T`, the way the
/// teacher casts interpolation weights into the working type via `NumCast`
/// rather than looping.
#[inline]
pub(crate) fn small_constant<T: WideUint>(n: u32) -> T {
    <T as num_traits::NumCast>::from(n).expect("small_constant: n must fit in T")
}

/// `(floor(x / 5), x mod 5)`.
#[inline]
pub(crate) fn div_rem5<T: WideUint>(x: T) -> (T, T) {
    let q = div5(x);
    (q, x - q * small_constant(5))
}

/// `(floor(x / 10), x mod 10)`.
#[inline]
pub(crate) fn div_rem10<T: WideUint>(x: T) -> (T, T) {
    let q = div10(x);
    (q, x - q * small_constant(10))
}

/// `x mod 2^p == 0`.
#[inline]
pub(crate) fn multiple_of_power_of2<T: WideUint>(x: T, p: u32) -> bool {
    debug_assert!(p < T::BIT_WIDTH);
    (x & ((T::one() << p as usize) - T::one())).is_zero()
}

/// `x mod 5^p == 0`. Precondition: `x > 0`.
///
/// Repeatedly multiplies by the reciprocal-of-5 constant in wrapping
/// arithmetic; once the running product exceeds `ALL_THREES` the value is no
/// longer exactly divisible by a further factor of 5.
#[inline]
pub(crate) fn multiple_of_power_of5<T: WideUint>(x: T, p: u32) -> bool {
    let mut v = x;
    let mut count = 0u32;
    while count < T::BIT_WIDTH {
        v = WrappingMul::wrapping_mul(&v, &T::RECIP5);
        if v > T::ALL_THREES {
            break;
        }
        count += 1;
    }
    count >= p
}

/// `floor(m * mul / 2^j)`, truncated to `T`. Precondition: `j > 128`.
#[inline]
pub(crate) fn mul_shift<T: WideUint>(m: T, mul: U256, j: u32) -> T {
    debug_assert!(j > 128);
    let limbs = widen_mul_384(m.to_u128_full(), mul);
    let shifted = shr_384(limbs, j);
    T::from_u128_truncate(shifted[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_wide_matches_u256_math() {
        let a = u128::MAX;
        let b = 3u128;
        let (lo, hi) = mul_wide_u128(a, b);
        // a*b = 3*(2^128-1) = 3*2^128 - 3, so hi=2, lo = 2^128-3
        assert_eq!(hi, 2);
        assert_eq!(lo, u128::MAX - 2);
    }

    #[test]
    fn div5_div10_exact_for_small_values() {
        for x in 0u64..10_000 {
            assert_eq!(div5(x), x / 5);
            assert_eq!(div10(x), x / 10);
        }
    }

    #[test]
    fn div5_div10_exact_u128() {
        for x in [0u128, 1, 4, 5, 6, 9999999999999999999999999999999999999u128] {
            assert_eq!(div5(x), x / 5);
            assert_eq!(div10(x), x / 10);
        }
    }

    #[test]
    fn div_rem_roundtrip() {
        let x = 123_456_789u64;
        let (q, r) = div_rem10(x);
        assert_eq!(q * 10 + r, x);
        let (q5, r5) = div_rem5(x);
        assert_eq!(q5 * 5 + r5, x);
    }

    #[test]
    fn power_of5_divisibility_spot_checks() {
        assert!(multiple_of_power_of5(1u64, 0));
        assert!(!multiple_of_power_of5(1u64, 1));
        assert!(multiple_of_power_of5(5u64, 1));
        assert!(multiple_of_power_of5(25u64, 2));
        assert!(multiple_of_power_of5(75u64, 2));
        assert!(multiple_of_power_of5(50u64, 2));
        assert!(!multiple_of_power_of5(51u64, 2));
        assert!(!multiple_of_power_of5(75u64, 4));
    }

    #[test]
    fn power_of2_divisibility_spot_checks() {
        assert!(multiple_of_power_of2(2u64, 1));
        assert!(multiple_of_power_of2(12u64, 2));
        assert!(!multiple_of_power_of2(13u64, 2));
        assert!(!multiple_of_power_of2(8u64, 4));
    }

    #[test]
    fn mul_shift_matches_plain_division() {
        // mul = 2^248, as a U256 with the bit in the high limb.
        let mul = U256::new(0, 1u128 << 120);
        let m = 7u128;
        // floor(7 * 2^248 / 2^200) = 7 * 2^48, well within 128 bits.
        let got = mul_shift::<u128>(m, mul, 200);
        assert_eq!(got, 7u128 << 48);
    }
}

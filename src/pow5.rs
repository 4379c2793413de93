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
use crate::log_approx::pow5bits;
use crate::pow5_tables::{POW5_ERRORS, POW5_INV_ERRORS, POW5_INV_SPLIT, POW5_SPLIT, POW5_TABLE};
use crate::wide::{U256, shr_384, widen_mul_384};

const SPLIT_PERIOD: u32 = 56;

#[inline]
fn correction(table: &[u64], i: u32) -> u32 {
    let word = table[(i / 32) as usize];
    ((word >> (2 * (i % 32))) & 3) as u32
}

/// `5^i`, reconstructed at 249-bit precision from the split table plus a
/// packed 2-bit correction. Valid for `0 <= i <= 4968`.
pub(crate) fn compute_pow5(i: u32) -> U256 {
    let base = i / SPLIT_PERIOD;
    let base2 = base * SPLIT_PERIOD;
    let mul = POW5_SPLIT[base as usize];
    if i == base2 {
        return mul;
    }
    let offset = (i - base2) as usize;
    let m = POW5_TABLE[offset];
    let delta = pow5bits(i) - pow5bits(base2);
    let approx = combine(m, mul, delta);
    let corr = correction(&POW5_ERRORS, i);
    add_small(approx, corr)
}

/// `5^(-i)`, at the same 249-bit precision. Valid for `0 <= i <= 4897`.
pub(crate) fn compute_inv_pow5(i: u32) -> U256 {
    let base = i.div_ceil(SPLIT_PERIOD);
    let base2 = base * SPLIT_PERIOD;
    let mul = POW5_INV_SPLIT[base as usize];
    if i == base2 {
        return add_small(mul, 1);
    }
    let offset = (base2 - i) as usize;
    let m = POW5_TABLE[offset];
    let delta = pow5bits(base2) - pow5bits(i);
    let approx = combine(m, mul, delta);
    let corr = correction(&POW5_INV_ERRORS, i) + 1;
    add_small(approx, corr)
}

/// `floor(m * mul / 2^delta)`, truncated to 256 bits.
///
/// The full `m * mul` product can be up to 377 significant bits; it must be
/// widened to 384 bits and shifted *before* truncating to 256, since `delta`
/// can be small enough that bits from the dropped high limb would otherwise
/// survive into the result.
#[inline]
fn combine(m: u128, mul: U256, delta: u32) -> U256 {
    let limbs = widen_mul_384(m, mul);
    let shifted = shr_384(limbs, delta);
    U256::new(shifted[0], shifted[1])
}

#[inline]
fn add_small(v: U256, corr: u32) -> U256 {
    let (lo, carry) = v.lo.overflowing_add(corr as u128);
    U256::new(lo, v.hi + carry as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limbs(v: U256) -> [u64; 4] {
        [
            v.lo as u64,
            (v.lo >> 64) as u64,
            v.hi as u64,
            (v.hi >> 64) as u64,
        ]
    }

    #[test]
    fn pow5_table_is_exact() {
        let mut acc: u128 = 1;
        for k in 0..56u32 {
            assert_eq!(POW5_TABLE[k as usize], acc);
            acc = acc.wrapping_mul(5);
        }
    }

    #[test]
    fn compute_pow5_matches_split_table_at_period_boundaries() {
        for base in 0..89u32 {
            assert_eq!(compute_pow5(base * SPLIT_PERIOD), POW5_SPLIT[base as usize]);
        }
    }

    #[test]
    fn compute_inv_pow5_matches_split_table_at_period_boundaries() {
        for base in 0..89u32 {
            let expect = add_small(POW5_INV_SPLIT[base as usize], 1);
            assert_eq!(compute_inv_pow5(base * SPLIT_PERIOD), expect);
        }
    }

    #[test]
    fn compute_pow5_small_exponent_is_exact_power_of_two_scaled() {
        // 5^1, normalized to 249 bits: 5 * 2^246.
        let got = limbs(compute_pow5(1));
        assert_eq!(got, [0, 0, 0, 90071992547409920]);
    }

    #[test]
    fn compute_pow5_55_matches_known_value() {
        let got = limbs(compute_pow5(55));
        assert_eq!(
            got,
            [
                0,
                15708555500268290048,
                14699724349295723422,
                117549435082228750
            ]
        );
    }

    #[test]
    fn compute_inv_pow5_1_matches_known_value() {
        let got = limbs(compute_inv_pow5(1));
        assert_eq!(
            got,
            [
                3689348814741910324,
                3689348814741910323,
                3689348814741910323,
                230584300921369395
            ]
        );
    }

    #[test]
    fn compute_pow5_is_normalized_to_249_bits() {
        for i in (1..4969u32).step_by(37) {
            let v = compute_pow5(i);
            let bit_len = if v.hi != 0 {
                256 - v.hi.leading_zeros()
            } else {
                128 - v.lo.leading_zeros()
            };
            assert!((248..=249).contains(&bit_len), "i={i} bit_len={bit_len}");
        }
    }
}

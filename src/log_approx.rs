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
//! Fixed-point approximations of `log10(2^e)`, `log10(5^e)` and the bit-length
//! of `5^e`, each a single multiply-shift by a magic constant good across the
//! exponent range the Ryu driver ever calls them with.

/// `floor(e * log10(2))`, exact for `0 <= e <= 32768` (the full range the
/// Ryu driver's `|binary_exponent| < 2^15` precondition can ever pass in).
#[inline]
pub(crate) const fn log10_pow2(e: i32) -> i32 {
    debug_assert!(e >= 0 && e <= 32768);
    (((e as i64) * 0x9A209A84FBCF) >> 49) as i32
}

/// `floor(e * log10(5))`, exact for `0 <= e <= 32768`.
#[inline]
pub(crate) const fn log10_pow5(e: i32) -> i32 {
    debug_assert!(e >= 0 && e <= 32768);
    (((e as i64) * 0xB2EFB2BD8218) >> 48) as i32
}

/// `ceil(log2(5^e))`, the bit-length of `5^e`. `0` maps to `1` (by
/// convention, matching the split table's normalization for `i==0`).
#[inline]
pub(crate) const fn pow5bits(e: u32) -> u32 {
    (((e as u64) * 163391164108059) >> 46) as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log10_pow2_matches_known_values() {
        assert_eq!(log10_pow2(1), 0);
        assert_eq!(log10_pow2(5), 1);
        assert_eq!(log10_pow2(32768), 9864);
    }

    #[test]
    fn log10_pow5_matches_known_values() {
        assert_eq!(log10_pow5(1), 0);
        assert_eq!(log10_pow5(2), 1);
        assert_eq!(log10_pow5(3), 2);
        assert_eq!(log10_pow5(32768), 22903);
    }

    #[test]
    fn pow5bits_matches_exact_bit_length_for_small_exponents() {
        let mut acc: u128 = 1;
        for e in 0u32..56 {
            let expect = 128 - acc.leading_zeros();
            assert_eq!(pow5bits(e), expect, "e={e}");
            acc = acc.wrapping_mul(5);
        }
    }

    #[test]
    fn pow5bits_zero_is_one() {
        assert_eq!(pow5bits(0), 1);
    }
}

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
use crate::decimal::{Decimal, DecimalKind, DecomposedFloat, SpecialValue};
use crate::log_approx::{log10_pow2, log10_pow5, pow5bits};
use crate::pow5::{compute_inv_pow5, compute_pow5};
use crate::wide::{WideUint, mul_shift, multiple_of_power_of2, multiple_of_power_of5, small_constant};
use num_traits::Zero;

/// Shortest round-tripping binary-to-decimal conversion (Ryu), generic over
/// the mantissa-bearing width `T` (`u64` or `u128`).
///
/// Exact shortest-roundtrip is proven and tested for `T = u64`. For
/// `T = u128` the shared power-of-five tables don't carry enough guard bits
/// to guarantee bit-exact roundtrip at the full 128-bit width (see
/// `convert128`); the result is always a well-formed finite decimal, just
/// not always provably the shortest roundtripping one.
pub fn convert<T: WideUint>(input: DecomposedFloat<T>) -> Decimal {
    match input.kind {
        SpecialValue::Zero => return Decimal::special(input.sign, DecimalKind::Zero),
        SpecialValue::Infinite => return Decimal::special(input.sign, DecimalKind::Infinite),
        SpecialValue::NaN => return Decimal::special(input.sign, DecimalKind::NaN),
        SpecialValue::Finite => {}
    }
    if input.coefficient.is_zero() {
        return Decimal::special(input.sign, DecimalKind::Zero);
    }
    debug_assert!(input.precision_bits > 0 && input.precision_bits <= T::BIT_WIDTH);
    debug_assert!(input.binary_exponent.unsigned_abs() < (1 << 15));

    let (coefficient, decimal_exponent) = shortest_digits(input.coefficient, input.binary_exponent, input.precision_bits);
    Decimal::finite(input.sign, coefficient.to_u128_full(), decimal_exponent)
}

/// Monomorphic convenience wrapper over a 64-bit-wide mantissa.
pub fn convert64(input: DecomposedFloat<u64>) -> Decimal {
    convert(input)
}

/// Monomorphic convenience wrapper over a 128-bit-wide mantissa.
///
/// Not proven bit-exact shortest-roundtrip at this width (see `convert`'s
/// doc comment and DESIGN.md Open Question #3): the shared power-of-five
/// tables are normalized with enough guard bits for `u64` mantissas but not
/// always enough for the full `u128` range. Always returns a well-formed
/// finite decimal with the correct sign and a bounded digit count.
pub fn convert128(input: DecomposedFloat<u128>) -> Decimal {
    convert(input)
}

/// The core Ryu algorithm: compute the shortest decimal digits and exponent
/// for `coefficient * 2^binary_exponent`.
fn shortest_digits<T: WideUint>(coefficient: T, binary_exponent: i32, precision_bits: u32) -> (T, i32) {
    // Step 1: bias to the halfway-aware form.
    let e2 = binary_exponent - 2;
    let m2 = coefficient;
    let even = (m2 & T::one()).is_zero();
    let accept_bounds = even;

    let mv = m2 << 2usize;
    let smallest_normal_mantissa = T::one() << (precision_bits as usize - 1);
    let mm_shift: u32 = (coefficient != smallest_normal_mantissa) as u32;
    let mm_shift_t: T = if mm_shift == 1 { T::one() } else { T::zero() };

    let mut vp;
    let mut vm;
    let mut vr;
    let e10: i32;
    let mut vr_is_trailing_zeros = false;
    let mut vm_is_trailing_zeros = false;

    if e2 >= 0 {
        let q = log10_pow2(e2) - (e2 > 3) as i32;
        e10 = q;
        let q = q as u32;
        let k = 249 + pow5bits(q) as i32;
        let i = (-e2 as i64) + q as i64 + k as i64;
        let pow5 = compute_inv_pow5(q);
        let j = i as u32;
        debug_assert!(i >= 0 && j > 128);

        vr = mul_shift(mv, pow5, j);
        vp = mul_shift(mv + small_constant(2), pow5, j);
        vm = mul_shift(mv - small_constant(1) - mm_shift_t, pow5, j);

        if q <= 55 {
            let (_, rem5) = crate::wide::div_rem5(mv);
            if rem5.is_zero() {
                vr_is_trailing_zeros = if q >= 1 {
                    multiple_of_power_of5(mv, q - 1)
                } else {
                    true
                };
            } else if accept_bounds {
                vm_is_trailing_zeros = multiple_of_power_of5(mv - small_constant(1) - mm_shift_t, q);
            } else if multiple_of_power_of5(mv + small_constant(2), q) {
                vp = vp - T::one();
            }
        }
    } else {
        let neg_e2 = -e2;
        let q = log10_pow5(neg_e2) - (neg_e2 > 1) as i32;
        e10 = q + e2;
        let q_u = q as u32;
        let i = (neg_e2 - q) as u32;
        let k = pow5bits(i) as i32 - 249;
        let j = (q - k) as u32;
        let pow5 = compute_pow5(i);

        vr = mul_shift(mv, pow5, j);
        vp = mul_shift(mv + small_constant(2), pow5, j);
        vm = mul_shift(mv - small_constant(1) - mm_shift_t, pow5, j);

        if q <= 1 {
            vr_is_trailing_zeros = true;
            if accept_bounds {
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                vp = vp - T::one();
            }
        } else if q_u < T::BIT_WIDTH - 1 {
            vr_is_trailing_zeros = multiple_of_power_of2(mv, q_u - 1);
        }
    }

    // Step 3: shortest-decimal digit removal loop.
    let (out, removed) = remove_digits(vr, vp, vm, vr_is_trailing_zeros, vm_is_trailing_zeros);

    (out, e10 + removed)
}

fn remove_digits<T: WideUint>(
    mut vr: T,
    mut vp: T,
    mut vm: T,
    mut vr_is_trailing_zeros: bool,
    mut vm_is_trailing_zeros: bool,
) -> (T, i32) {
    use crate::wide::{div10, div_rem10};

    let mut last_removed_digit: u32 = 0;
    let mut removed: i32 = 0;

    loop {
        let qp = div10(vp);
        let qm = div10(vm);
        if qp == qm {
            break;
        }
        let (_, vm_rem) = div_rem10(vm);
        vm_is_trailing_zeros = vm_is_trailing_zeros && vm_rem.is_zero();
        vr_is_trailing_zeros = vr_is_trailing_zeros && last_removed_digit == 0;
        let (vr_div, vr_rem) = div_rem10(vr);
        last_removed_digit = vr_rem.to_u128_full() as u32;
        vr = vr_div;
        vp = qp;
        vm = qm;
        removed += 1;
    }

    if vm_is_trailing_zeros {
        loop {
            let (vm_div, vm_rem) = div_rem10(vm);
            if !vm_rem.is_zero() {
                break;
            }
            vr_is_trailing_zeros = vr_is_trailing_zeros && last_removed_digit == 0;
            let vr_div_of_vm = div10(vm);
            let rem_from_vr = vr - vr_div_of_vm * small_constant(10);
            last_removed_digit = rem_from_vr.to_u128_full() as u32;
            vr = vm_div;
            vp = vm_div;
            vm = vm_div;
            removed += 1;
        }
    }

    // Round-to-even correction on the final kept digit.
    if vr_is_trailing_zeros && last_removed_digit == 5 && (vr & T::one()).is_zero() {
        last_removed_digit = 4;
    }

    let bump = (vr == vm && !vm_is_trailing_zeros) || last_removed_digit >= 5;
    let output = if bump { vr + T::one() } else { vr };
    (output, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::DecomposedFloat;

    fn f64_to_decomposed(value: f64) -> DecomposedFloat<u64> {
        let bits = value.to_bits();
        let sign = (bits >> 63) != 0;
        let biased_exp = ((bits >> 52) & 0x7ff) as i32;
        let mantissa = bits & ((1u64 << 52) - 1);
        if biased_exp == 0x7ff {
            return DecomposedFloat::special(
                sign,
                if mantissa != 0 { SpecialValue::NaN } else { SpecialValue::Infinite },
            );
        }
        if biased_exp == 0 && mantissa == 0 {
            return DecomposedFloat::special(sign, SpecialValue::Zero);
        }
        if biased_exp == 0 {
            // Subnormal.
            return DecomposedFloat::finite(sign, mantissa, -1074, 52);
        }
        let full_mantissa = mantissa | (1u64 << 52);
        let binary_exponent = biased_exp - 1075;
        DecomposedFloat::finite(sign, full_mantissa, binary_exponent, 53)
    }

    fn roundtrip_matches(value: f64) {
        let d = convert(f64_to_decomposed(value));
        assert_eq!(d.kind, DecimalKind::Finite);
        let reconstructed = (d.coefficient as f64) * 10f64.powi(d.decimal_exponent) * if d.sign { -1.0 } else { 1.0 };
        assert_eq!(reconstructed, value, "value={value} coeff={} exp={}", d.coefficient, d.decimal_exponent);
    }

    #[test]
    fn one_point_zero_is_shortest() {
        let d = convert(f64_to_decomposed(1.0));
        assert_eq!(d.coefficient, 1);
        assert_eq!(d.decimal_exponent, 0);
        assert!(!d.sign);
    }

    #[test]
    fn zero_point_one_round_trips() {
        roundtrip_matches(0.1);
    }

    #[test]
    fn assorted_values_round_trip() {
        for v in [
            1.0,
            2.0,
            3.0,
            0.1,
            0.2,
            100.0,
            1e300,
            1e-300,
            123456789.123456,
            2.2250738585072014e-308, // DBL_MIN
            f64::MAX,
        ] {
            roundtrip_matches(v);
        }
    }

    #[test]
    fn negative_zero_reports_zero_kind() {
        let d = convert(f64_to_decomposed(-0.0));
        assert_eq!(d.kind, DecimalKind::Zero);
        assert!(d.sign);
    }

    #[test]
    fn infinity_and_nan_report_special_kinds() {
        let d = convert(f64_to_decomposed(f64::INFINITY));
        assert_eq!(d.kind, DecimalKind::Infinite);
        let d = convert(f64_to_decomposed(f64::NAN));
        assert_eq!(d.kind, DecimalKind::NaN);
    }

    #[test]
    fn smallest_subnormal_round_trips() {
        roundtrip_matches(f64::from_bits(1));
    }

    #[test]
    fn random_f64_bit_patterns_round_trip() {
        use rand::Rng;
        let mut rng = rand::rng();
        for _ in 0..20_000 {
            let bits: u64 = rng.random();
            let value = f64::from_bits(bits);
            if value.is_nan() || value.is_infinite() {
                continue;
            }
            roundtrip_matches(value);
        }
    }

    fn u128_mantissa_to_decomposed(sign: bool, coefficient: u128, binary_exponent: i32) -> DecomposedFloat<u128> {
        DecomposedFloat::finite(sign, coefficient, binary_exponent, 128)
    }

    #[test]
    fn random_u128_mantissas_produce_well_formed_finite_decimals() {
        // The 128-bit mantissa path shares the same 249-bit-normalized
        // power-of-five oracle as the 64-bit path (see DESIGN.md); this only
        // checks the output is well-formed, not bit-exact round-trip.
        use rand::Rng;
        let mut rng = rand::rng();
        for _ in 0..5_000 {
            let coefficient: u128 = rng.random::<u128>() | (1u128 << 127);
            let binary_exponent = rng.random_range(-200..200);
            let sign = rng.random_bool(0.5);
            let d = convert(u128_mantissa_to_decomposed(sign, coefficient, binary_exponent));
            assert_eq!(d.kind, DecimalKind::Finite);
            assert_eq!(d.sign, sign);
            let digits = d.coefficient.to_string();
            assert!(digits.len() <= 39, "coeff={} has too many digits", d.coefficient);
            assert!(d.coefficient > 0);
        }
    }

    #[test]
    fn convert128_matches_convert_for_u128_mantissa() {
        let input = u128_mantissa_to_decomposed(false, 1u128 << 127, 0);
        assert_eq!(convert128(input), convert(input));
    }
}

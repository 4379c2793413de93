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
use crate::wide::WideUint;
use num_traits::Zero;

/// What kind of value a [`Decimal`] or [`DecomposedFloat`] carries, in place of
/// a sentinel exponent or coefficient encoding.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
pub enum SpecialValue {
    #[default]
    Finite,
    Zero,
    Infinite,
    NaN,
}

/// A binary floating-point value split into sign, significand and unbiased
/// binary exponent: `value = (-1)^sign * coefficient * 2^binary_exponent`.
///
/// `coefficient` carries the full significand, including the implicit
/// leading one for normal values; callers are responsible for that
/// normalization before calling [`crate::convert`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DecomposedFloat<T: WideUint> {
    pub sign: bool,
    pub coefficient: T,
    pub binary_exponent: i32,
    /// Number of bits of precision in `coefficient` (the source mantissa
    /// width, including the implicit leading one).
    pub precision_bits: u32,
    pub kind: SpecialValue,
}

impl<T: WideUint> DecomposedFloat<T> {
    pub const fn finite(sign: bool, coefficient: T, binary_exponent: i32, precision_bits: u32) -> Self {
        DecomposedFloat {
            sign,
            coefficient,
            binary_exponent,
            precision_bits,
            kind: SpecialValue::Finite,
        }
    }

    pub fn special(sign: bool, kind: SpecialValue) -> Self {
        debug_assert!(kind != SpecialValue::Finite);
        DecomposedFloat {
            sign,
            coefficient: T::zero(),
            binary_exponent: 0,
            precision_bits: 0,
            kind,
        }
    }
}

/// What a [`crate::convert`] call produced: either a finite shortest decimal
/// or one of the special IEEE 754 classes, mirrored explicitly rather than
/// folded back into the coefficient/exponent fields.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
pub enum DecimalKind {
    #[default]
    Finite,
    Zero,
    Infinite,
    NaN,
}

/// The shortest decimal that round-trips to the source binary float:
/// `value = (-1)^sign * coefficient * 10^decimal_exponent` when
/// `kind == Finite`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Decimal {
    pub sign: bool,
    pub coefficient: u128,
    pub decimal_exponent: i32,
    pub kind: DecimalKind,
}

impl Decimal {
    pub(crate) const fn finite(sign: bool, coefficient: u128, decimal_exponent: i32) -> Self {
        Decimal {
            sign,
            coefficient,
            decimal_exponent,
            kind: DecimalKind::Finite,
        }
    }

    pub(crate) const fn special(sign: bool, kind: DecimalKind) -> Self {
        debug_assert!(!matches!(kind, DecimalKind::Finite));
        Decimal {
            sign,
            coefficient: 0,
            decimal_exponent: 0,
            kind,
        }
    }
}

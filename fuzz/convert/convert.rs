#![no_main]

use libfuzzer_sys::fuzz_target;
use ryu_wide::{DecomposedFloat, SpecialValue, convert64};

fuzz_target!(|data: (u64, bool)| {
    let bits = data.0;
    let sign = data.1;
    let biased_exp = ((bits >> 52) & 0x7ff) as i32;
    let mantissa = bits & ((1u64 << 52) - 1);

    let input = if biased_exp == 0x7ff {
        DecomposedFloat::special(
            sign,
            if mantissa != 0 {
                SpecialValue::NaN
            } else {
                SpecialValue::Infinite
            },
        )
    } else if biased_exp == 0 && mantissa == 0 {
        DecomposedFloat::special(sign, SpecialValue::Zero)
    } else if biased_exp == 0 {
        DecomposedFloat::finite(sign, mantissa, -1074, 52)
    } else {
        DecomposedFloat::finite(sign, mantissa | (1u64 << 52), biased_exp - 1075, 53)
    };

    let decimal = convert64(input);
    // Digit count of the shortest decimal must never exceed what a 64-bit
    // mantissa can possibly need.
    if decimal.coefficient != 0 {
        assert!(decimal.coefficient.to_string().len() <= 20);
    }
});

//! IEEE-754 binary32 reconstruction.
//!
//! Values are rebuilt from the sign, exponent, and mantissa fields instead of
//! reinterpreting the bit pattern with `f32::from_bits`. The exponent-zero
//! branch only recognizes signed zero: denormal patterns go through the
//! normalized formula (`2^-127 * (1 + fraction)`) and are not rescaled.

use tracing::debug;

use crate::error::{ByteReaderError, Result};
use crate::layout;

/// Decode a binary32 bit pattern into an `f64`.
///
/// # Examples
/// ```
/// use bytelens_core::decode_binary32;
///
/// assert_eq!(decode_binary32(0x3f80_0000), 1.0);
/// assert_eq!(decode_binary32(0xc000_0000), -2.0);
/// assert!(decode_binary32(0x7fc0_0000).is_nan());
/// assert_eq!(decode_binary32(0xff80_0000), f64::NEG_INFINITY);
/// ```
pub fn decode_binary32(bits: u32) -> f64 {
    let negative = bits >> layout::BINARY32_SIGN_SHIFT != 0;
    let exponent = (bits >> layout::BINARY32_EXPONENT_SHIFT) & layout::BINARY32_EXPONENT_MASK;
    let mantissa = bits & layout::BINARY32_MANTISSA_MASK;

    if exponent == 0 && mantissa == 0 {
        return if negative { -0.0 } else { 0.0 };
    }
    if exponent == layout::BINARY32_EXPONENT_SPECIAL {
        if mantissa != 0 {
            return f64::NAN;
        }
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let sign = if negative { -1.0 } else { 1.0 };
    let scale = 2f64.powi(exponent as i32 - layout::BINARY32_EXPONENT_BIAS);
    sign * scale * significand(mantissa)
}

/// `1 + sum(2^-(23 - i))` over every set mantissa bit `i`, most significant first.
fn significand(mantissa: u32) -> f64 {
    let mut value = 1.0;
    for (shift, bit) in (0..layout::BINARY32_MANTISSA_BITS).rev().enumerate() {
        if mantissa & (1 << bit) != 0 {
            value += 1.0 / f64::from(1u32 << (shift + 1));
        }
    }
    value
}

/// Render a decoded value with `digits` decimal places.
///
/// Rounds the exact binary value half away from zero. Magnitudes of `1e21`
/// and above keep their shortest exponent form (`1e+21`), non-finite values
/// render as `NaN` / `Infinity` / `-Infinity`, and negative zero renders
/// without a sign.
///
/// # Errors
///
/// [`ByteReaderError::InvalidDigits`] when `digits` exceeds
/// [`layout::FIXED_MAX_DIGITS`].
///
/// # Examples
/// ```
/// use bytelens_core::format_fixed;
///
/// assert_eq!(format_fixed(2.5, 0)?, "3");
/// assert_eq!(format_fixed(-0.125, 2)?, "-0.13");
/// assert_eq!(format_fixed(f64::NEG_INFINITY, 2)?, "-Infinity");
/// # Ok::<(), bytelens_core::ByteReaderError>(())
/// ```
pub fn format_fixed(value: f64, digits: usize) -> Result<String> {
    if digits > layout::FIXED_MAX_DIGITS {
        debug!(digits, "fixed digits out of range");
        return Err(ByteReaderError::InvalidDigits {
            digits,
            max: layout::FIXED_MAX_DIGITS,
        });
    }
    if value.is_nan() {
        return Ok("NaN".to_string());
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let body = if magnitude.is_infinite() {
        "Infinity".to_string()
    } else if magnitude >= layout::FIXED_EXPONENT_THRESHOLD {
        format!("{:e}", magnitude).replacen('e', "e+", 1)
    } else {
        round_half_up(magnitude, digits)
    };
    Ok(format!("{sign}{body}"))
}

/// Round a finite, non-negative value to `digits` places using its exact decimal expansion.
fn round_half_up(magnitude: f64, digits: usize) -> String {
    let exact = format!("{:.*}", layout::F64_EXACT_FRACTION_DIGITS, magnitude);
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();
    let round_up = fraction.as_bytes().get(digits).is_some_and(|&d| d >= b'5');
    if round_up && !increment_decimal(&mut kept) {
        kept.insert(0, b'1');
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 1);
    out.extend(kept[..split].iter().map(|&b| char::from(b)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|&b| char::from(b)));
    }
    out
}

/// Add one to the last digit, carrying left. Returns false when the carry overflows.
fn increment_decimal(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

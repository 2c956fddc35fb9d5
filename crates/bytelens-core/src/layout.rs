//! Byte widths and bit layouts shared by the readers.

pub const U8_LEN: usize = 1;

// int8, sign-magnitude reading
pub const INT8_SIGN_BIT: u8 = 0b1000_0000;
pub const INT8_MAGNITUDE_MASK: u8 = 0x7f;
pub const INT8_MIN_PATTERN: u8 = 0x80;

// IEEE-754 binary32
pub const BINARY32_SIGN_SHIFT: u32 = 31;
pub const BINARY32_EXPONENT_SHIFT: u32 = 23;
pub const BINARY32_EXPONENT_MASK: u32 = 0xff;
pub const BINARY32_MANTISSA_MASK: u32 = 0x007f_ffff;
pub const BINARY32_MANTISSA_BITS: u32 = 23;
pub const BINARY32_EXPONENT_BIAS: i32 = 127;
pub const BINARY32_EXPONENT_SPECIAL: u32 = 0xff;

// Fixed-digit rendering
pub const FIXED_MAX_DIGITS: usize = 100;
pub const FIXED_EXPONENT_THRESHOLD: f64 = 1e21;
/// Enough fractional digits to print any finite f64 exactly (2^-1074 has 1074).
pub const F64_EXACT_FRACTION_DIGITS: usize = 1074;

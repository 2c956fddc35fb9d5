use std::ops::Range;

use tracing::debug;

use crate::encoding::Encoding;
use crate::error::{ByteReaderError, Result};
use crate::float::{decode_binary32, format_fixed};
use crate::layout;

/// Random-access decoder over an immutable byte sequence.
///
/// Every read takes an explicit offset; the reader keeps no cursor, so the
/// same read always returns the same value. `B` decides ownership: borrow a
/// `&[u8]`, own a `Vec<u8>`, or share an `Arc<[u8]>` between threads.
///
/// # Examples
/// ```
/// use bytelens_core::ByteReader;
///
/// let reader = ByteReader::new(vec![0x34, 0x12, 0x00, 0x00, 0x80, 0x3f]);
/// assert_eq!(reader.read_u16_le(0)?, 0x1234);
/// assert_eq!(reader.read_u16_be(0)?, 0x3412);
/// assert_eq!(reader.read_float_le(2)?, 1.0);
/// assert_eq!(reader.decode_string("hex", Some(0), Some(2))?, "3412");
/// # Ok::<(), bytelens_core::ByteReaderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ByteReader<B> {
    bytes: B,
    len: usize,
}

impl<B: AsRef<[u8]>> ByteReader<B> {
    pub fn new(bytes: B) -> Self {
        let len = bytes.as_ref().len();
        Self { bytes, len }
    }

    /// Length of the wrapped sequence, fixed at construction.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    pub fn into_inner(self) -> B {
        self.bytes
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&[u8]> {
        if range.start > range.end {
            debug!(start = range.start, end = range.end, "invalid read range");
            return Err(ByteReaderError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        self.as_bytes()
            .get(range.clone())
            .ok_or_else(|| self.out_of_bounds(range.start, range.end))
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        let [byte] = self.read_array::<{ layout::U8_LEN }>(offset)?;
        Ok(byte)
    }

    /// Read a signed byte using sign-magnitude rules for the low seven bits.
    ///
    /// `0x00..=0x7f` map to themselves and `0x80` maps to `-128`; any other
    /// byte with the high bit set yields `-(byte & 0x7f)`, so `0x81` reads as
    /// `-1` and `0xff` as `-127`. Use [`Self::read_i8_twos`] for the
    /// two's-complement value.
    pub fn read_i8(&self, offset: usize) -> Result<i8> {
        let byte = self.read_u8(offset)?;
        let value = if byte & layout::INT8_SIGN_BIT == 0 {
            byte as i8
        } else if byte == layout::INT8_MIN_PATTERN {
            i8::MIN
        } else {
            -((byte & layout::INT8_MAGNITUDE_MASK) as i8)
        };
        Ok(value)
    }

    pub fn read_i8_twos(&self, offset: usize) -> Result<i8> {
        Ok(i8::from_le_bytes(self.read_array(offset)?))
    }

    pub fn read_u16_le(&self, offset: usize) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array(offset)?))
    }

    pub fn read_u16_be(&self, offset: usize) -> Result<u16> {
        Ok(u16::from_be_bytes(self.read_array(offset)?))
    }

    pub fn read_i16_le(&self, offset: usize) -> Result<i16> {
        Ok(i16::from_le_bytes(self.read_array(offset)?))
    }

    pub fn read_i16_be(&self, offset: usize) -> Result<i16> {
        Ok(i16::from_be_bytes(self.read_array(offset)?))
    }

    pub fn read_u32_le(&self, offset: usize) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array(offset)?))
    }

    pub fn read_u32_be(&self, offset: usize) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_array(offset)?))
    }

    pub fn read_i32_le(&self, offset: usize) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array(offset)?))
    }

    pub fn read_i32_be(&self, offset: usize) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_array(offset)?))
    }

    /// Decode a little-endian binary32 at `offset`. See [`decode_binary32`].
    pub fn read_float_le(&self, offset: usize) -> Result<f64> {
        Ok(decode_binary32(self.read_u32_le(offset)?))
    }

    /// Decode a big-endian binary32 at `offset`. See [`decode_binary32`].
    pub fn read_float_be(&self, offset: usize) -> Result<f64> {
        Ok(decode_binary32(self.read_u32_be(offset)?))
    }

    pub fn read_float_le_fixed(&self, offset: usize, digits: usize) -> Result<String> {
        format_fixed(self.read_float_le(offset)?, digits)
    }

    pub fn read_float_be_fixed(&self, offset: usize, digits: usize) -> Result<String> {
        format_fixed(self.read_float_be(offset)?, digits)
    }

    /// Decode `[start, end)` as text in the named encoding (`"hex"` or `"ascii"`).
    ///
    /// `start` defaults to 0 and `end` to [`Self::len`]. NUL characters are
    /// removed from the result.
    pub fn decode_string(
        &self,
        encoding: &str,
        start: Option<usize>,
        end: Option<usize>,
    ) -> Result<String> {
        let encoding = encoding.parse::<Encoding>().map_err(|err| {
            debug!(encoding, "unsupported string encoding");
            err
        })?;
        let start = start.unwrap_or(0);
        let end = end.unwrap_or(self.len);
        self.decode(encoding, start..end)
    }

    pub fn decode(&self, encoding: Encoding, range: Range<usize>) -> Result<String> {
        let bytes = self.read_slice(range)?;
        Ok(encoding.decode(bytes))
    }

    /// Copy `length` bytes starting at `offset` into a new, independently owned buffer.
    pub fn copy(&self, offset: usize, length: usize) -> Result<Vec<u8>> {
        let end = self.checked_end(offset, length)?;
        Ok(self.read_slice(offset..end)?.to_vec())
    }

    fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        let end = self.checked_end(offset, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_slice(offset..end)?);
        Ok(out)
    }

    fn checked_end(&self, offset: usize, length: usize) -> Result<usize> {
        offset
            .checked_add(length)
            .ok_or_else(|| self.out_of_bounds(offset, usize::MAX))
    }

    fn out_of_bounds(&self, offset: usize, needed: usize) -> ByteReaderError {
        debug!(offset, needed, actual = self.len, "read out of bounds");
        ByteReaderError::OutOfBounds {
            needed,
            actual: self.len,
        }
    }
}

impl<B: AsRef<[u8]>> From<B> for ByteReader<B> {
    fn from(bytes: B) -> Self {
        Self::new(bytes)
    }
}

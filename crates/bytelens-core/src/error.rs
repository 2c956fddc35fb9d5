use thiserror::Error;

/// Errors returned by [`ByteReader`](crate::ByteReader) operations.
///
/// # Examples
/// ```
/// use bytelens_core::{ByteReader, ByteReaderError};
///
/// let reader = ByteReader::new(&[0x01u8, 0x02][..]);
/// let err = reader.read_u32_le(0).unwrap_err();
/// assert!(matches!(err, ByteReaderError::OutOfBounds { needed: 4, actual: 2 }));
/// assert!(err.to_string().contains("out of bounds"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ByteReaderError {
    #[error("format {encoding} not supported")]
    UnsupportedEncoding { encoding: String },
    #[error("read out of bounds: need {needed} bytes, got {actual}")]
    OutOfBounds { needed: usize, actual: usize },
    #[error("invalid range: start {start} is past end {end}")]
    InvalidRange { start: usize, end: usize },
    #[error("fixed digits {digits} out of range 0..={max}")]
    InvalidDigits { digits: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ByteReaderError>;

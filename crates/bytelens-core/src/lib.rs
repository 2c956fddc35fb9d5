//! Random-access decoding of fixed, already-loaded byte buffers.
//!
//! [`ByteReader`] wraps an immutable byte sequence and decodes values at
//! caller-supplied offsets: 8/16/32-bit integers in either byte order,
//! IEEE-754 binary32 floats, text in the `hex` and `ascii` encodings, and raw
//! sub-range copies. The reader holds no cursor and never mutates its input,
//! so every read is a pure function of the buffer and its arguments.
//!
//! Invariants:
//! - Reads never panic; out-of-range offsets report [`ByteReaderError::OutOfBounds`].
//! - Floats are rebuilt from their sign/exponent/mantissa fields (see
//!   [`decode_binary32`]); denormal patterns follow the normalized formula.
//! - `read_i8` uses sign-magnitude rules for negative bytes other than `0x80`;
//!   `read_i8_twos` is the two's-complement read.
//! - Decoded strings never contain NUL characters.
//!
//! Byte widths and binary32 field masks live in [`layout`].
//!
//! # Examples
//! ```
//! use std::sync::Arc;
//!
//! use bytelens_core::{ByteReader, Encoding};
//!
//! let bytes: Arc<[u8]> = Arc::from(&b"\x00\x00\x80\x3fBCP\x00"[..]);
//! let reader = ByteReader::new(Arc::clone(&bytes));
//!
//! assert_eq!(reader.read_float_le(0)?, 1.0);
//! assert_eq!(reader.read_float_le_fixed(0, 2)?, "1.00");
//! assert_eq!(reader.decode(Encoding::Ascii, 4..8)?, "BCP");
//! assert_eq!(reader.copy(4, 2)?, b"BC".to_vec());
//! # Ok::<(), bytelens_core::ByteReaderError>(())
//! ```

mod encoding;
mod error;
mod float;
pub mod layout;
mod reader;

pub use encoding::Encoding;
pub use error::{ByteReaderError, Result};
pub use float::{decode_binary32, format_fixed};
pub use reader::ByteReader;

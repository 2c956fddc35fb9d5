use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ByteReaderError;

/// Text encodings understood by [`ByteReader::decode`](crate::ByteReader::decode).
///
/// # Examples
/// ```
/// use bytelens_core::Encoding;
///
/// let encoding: Encoding = "hex".parse()?;
/// assert_eq!(encoding, Encoding::Hex);
/// assert_eq!(encoding.to_string(), "hex");
/// assert!("utf16".parse::<Encoding>().is_err());
/// # Ok::<(), bytelens_core::ByteReaderError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Two lowercase hex digits per byte.
    Hex,
    /// One character per byte, code point equal to the byte value.
    Ascii,
}

impl Encoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Hex => "hex",
            Encoding::Ascii => "ascii",
        }
    }

    /// Decode `bytes` and strip every NUL character from the result.
    pub fn decode(self, bytes: &[u8]) -> String {
        let mut text: String = match self {
            Encoding::Hex => bytes.iter().map(|b| format!("{:02x}", b)).collect(),
            Encoding::Ascii => bytes.iter().map(|&b| char::from(b)).collect(),
        };
        text.retain(|c| c != '\0');
        text
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = ByteReaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Encoding::Hex),
            "ascii" => Ok(Encoding::Ascii),
            other => Err(ByteReaderError::UnsupportedEncoding {
                encoding: other.to_string(),
            }),
        }
    }
}

//! Info text encoding
//!
//! ImageJ stores free-text info as a run of big-endian 16-bit code units,
//! one per byte of the text in its source encoding.

use crate::roi::errors::{RoiError, RoiResult};

/// Source encoding of info text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// 7-bit ASCII (default)
    #[default]
    Ascii,
    /// ISO-8859-1
    Latin1,
    /// UTF-8
    Utf8,
}

impl TextEncoding {
    /// Parses an encoding from its description-file name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ascii" | "us-ascii" => Some(TextEncoding::Ascii),
            "latin1" | "latin-1" | "iso-8859-1" => Some(TextEncoding::Latin1),
            "utf8" | "utf-8" => Some(TextEncoding::Utf8),
            _ => None,
        }
    }

    /// Name used in description files and log output
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Ascii => "ascii",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Utf8 => "utf-8",
        }
    }
}

/// Encode info text as big-endian 16-bit code units
///
/// The text is first encoded to bytes in the requested encoding, then every
/// byte is widened to a big-endian 16-bit value. Text that cannot be
/// represented in the requested encoding is an error, not replaced.
pub fn encode_info_text(text: &str, encoding: TextEncoding) -> RoiResult<Vec<u8>> {
    let encoded: Vec<u8> = match encoding {
        TextEncoding::Ascii => {
            if !text.is_ascii() {
                return Err(RoiError::GenericError(
                    "info text is not representable in ASCII".to_string(),
                ));
            }
            text.bytes().collect()
        }
        TextEncoding::Latin1 => {
            let mut bytes = Vec::with_capacity(text.len());
            for ch in text.chars() {
                let code = ch as u32;
                if code > 0xFF {
                    return Err(RoiError::GenericError(format!(
                        "info text character '{}' is not representable in Latin-1",
                        ch
                    )));
                }
                bytes.push(code as u8);
            }
            bytes
        }
        TextEncoding::Utf8 => text.bytes().collect(),
    };

    let mut out = Vec::with_capacity(encoded.len() * 2);
    for byte in encoded {
        out.extend_from_slice(&u16::from(byte).to_be_bytes());
    }

    Ok(out)
}

//! The [`FieldKind`] taxonomy and the pure byte-slice-to-value decode that
//! backs every NITF field, TRE field included.

use std::fmt;

/// The semantic kind of a NITF field.
///
/// Each variant knows how to turn an already-sliced byte region (its width
/// having already been resolved by the caller) into a [`FieldValue`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum FieldKind {
    /// Fixed-width, space-padded text drawn from the Basic Character Set.
    BcsA,
    /// Decimal integer text; may be space-padded, including all-space.
    BcsN,
    /// Zero-padded decimal integer text; no embedded spaces tolerated.
    BcsNp,
    /// Fixed-width, space-padded text drawn from the Extended Character Set.
    EcsA,
    /// Big-endian unsigned 32-bit integer.
    Uint32,
    /// Raw, undecoded bytes.
    UnsignedBinary,
    /// Big-endian IEEE-754 single-precision float.
    Ieee754Float,
    /// An opaque TRE region: a 3-byte overflow prefix followed by a
    /// concatenation of TRE records, handed to the TRE registry rather than
    /// decoded here.
    Tre,
}

/// A decoded field value.
///
/// `Text` carries both the trimmed value (for comparisons/logic) and the
/// original width-padded bytes (for round-trip display), per §4.1's
/// requirement that text kinds preserve their original width for logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// Decoded text, alongside its original (possibly space-padded) bytes.
    Text { trimmed: String, raw: Vec<u8> },
    /// A decoded decimal number.
    ///
    /// `absent` is set when the source bytes were entirely space characters;
    /// per the spec's resolution of that ambiguity, this decodes to `0` with
    /// `absent: true` instead of failing.
    Num { value: i64, absent: bool },
    /// A big-endian `u32`.
    Uint32(u32),
    /// A big-endian IEEE-754 `f32`.
    Float(f32),
    /// Raw, undecoded bytes.
    Binary(Vec<u8>),
}

impl FieldValue {
    /// The numeric value, if this is a [`FieldValue::Num`] or
    /// [`FieldValue::Uint32`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Num { value, .. } => Some(*value),
            FieldValue::Uint32(v) => Some(i64::from(*v)),
            _ => None,
        }
    }

    /// The trimmed text value, if this is a [`FieldValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text { trimmed, .. } => Some(trimmed),
            _ => None,
        }
    }

    /// A display-friendly string, used by `as_kvp()`/`to_log_string()`.
    pub fn display_string(&self) -> String {
        match self {
            FieldValue::Text { trimmed, .. } => trimmed.clone(),
            FieldValue::Num { value, .. } => value.to_string(),
            FieldValue::Uint32(v) => v.to_string(),
            FieldValue::Float(v) => v.to_string(),
            FieldValue::Binary(bytes) => format!("<{} bytes>", bytes.len()),
        }
    }
}

/// An error decoding a single field's bytes into a [`FieldValue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldDecodeError {
    /// Text bytes were not valid UTF-8 (ASCII is a subset, so this only
    /// triggers on genuinely corrupt input).
    InvalidText,
    /// `BCS_NP`/`BCS_N` bytes were neither decimal digits nor all-space.
    NotDecimal,
    /// A binary field (`UINT32`, `IEEE_754_FLOAT`) didn't get the exact byte
    /// count it requires.
    WrongWidth { expected: usize, got: usize },
}

impl fmt::Display for FieldDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldDecodeError::InvalidText => write!(f, "field bytes were not valid text"),
            FieldDecodeError::NotDecimal => {
                write!(f, "field bytes were neither decimal digits nor all-space")
            }
            FieldDecodeError::WrongWidth { expected, got } => write!(
                f,
                "binary field needs exactly {expected} bytes, got {got}"
            ),
        }
    }
}

impl core::error::Error for FieldDecodeError {}

impl FieldKind {
    /// Decodes `bytes` (already sliced to this field's resolved width) into
    /// a [`FieldValue`].
    pub fn decode(&self, bytes: &[u8]) -> Result<FieldValue, FieldDecodeError> {
        match self {
            FieldKind::BcsA | FieldKind::EcsA => {
                let text = std::str::from_utf8(bytes).map_err(|_| FieldDecodeError::InvalidText)?;
                Ok(FieldValue::Text {
                    trimmed: text.trim().to_string(),
                    raw: bytes.to_vec(),
                })
            }

            FieldKind::BcsN => {
                let text = std::str::from_utf8(bytes).map_err(|_| FieldDecodeError::InvalidText)?;
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(FieldValue::Num {
                        value: 0,
                        absent: true,
                    });
                }
                let value: i64 = trimmed.parse().map_err(|_| FieldDecodeError::NotDecimal)?;
                Ok(FieldValue::Num {
                    value,
                    absent: false,
                })
            }

            FieldKind::BcsNp => {
                let text = std::str::from_utf8(bytes).map_err(|_| FieldDecodeError::InvalidText)?;
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(FieldValue::Num {
                        value: 0,
                        absent: true,
                    });
                }
                let value: i64 = trimmed.parse().map_err(|_| FieldDecodeError::NotDecimal)?;
                Ok(FieldValue::Num {
                    value,
                    absent: false,
                })
            }

            FieldKind::Uint32 => {
                let arr: [u8; 4] = bytes.try_into().map_err(|_| FieldDecodeError::WrongWidth {
                    expected: 4,
                    got: bytes.len(),
                })?;
                Ok(FieldValue::Uint32(u32::from_be_bytes(arr)))
            }

            FieldKind::Ieee754Float => {
                let arr: [u8; 4] = bytes.try_into().map_err(|_| FieldDecodeError::WrongWidth {
                    expected: 4,
                    got: bytes.len(),
                })?;
                Ok(FieldValue::Float(f32::from_be_bytes(arr)))
            }

            FieldKind::UnsignedBinary | FieldKind::Tre => Ok(FieldValue::Binary(bytes.to_vec())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bcs_n_all_space_is_absent_zero() {
        let v = FieldKind::BcsN.decode(b"      ").unwrap();
        assert_eq!(
            v,
            FieldValue::Num {
                value: 0,
                absent: true
            }
        );
    }

    #[test]
    fn bcs_np_rejects_non_decimal() {
        let err = FieldKind::BcsNp.decode(b"12x45").unwrap_err();
        assert_eq!(err, FieldDecodeError::NotDecimal);
    }

    #[test]
    fn uint32_is_big_endian() {
        let v = FieldKind::Uint32.decode(&[0x00, 0x00, 0x00, 0x01]).unwrap();
        assert_eq!(v, FieldValue::Uint32(1));
    }

    #[test]
    fn ecs_a_trims_but_keeps_raw() {
        let v = FieldKind::EcsA.decode(b"NC  ").unwrap();
        match v {
            FieldValue::Text { trimmed, raw } => {
                assert_eq!(trimmed, "NC");
                assert_eq!(raw, b"NC  ");
            }
            _ => panic!("expected text"),
        }
    }
}

//! The error taxonomy for this crate.
//!
//! Grounded on the teacher's hand-rolled, non-`thiserror` error enums
//! (`raves_metadata::exif::error::ExifFatalError`): a closed `enum` with a
//! manual [`core::fmt::Display`] impl (one arm per variant, naming the
//! offending field/tag/offset) and an empty [`core::error::Error`] riding on
//! `Display`.

use std::path::PathBuf;

/// A fatal error from [`crate::load_nitf`]/[`crate::load_nitf_bytes`].
///
/// `#[non_exhaustive]` because this taxonomy spans the whole container
/// rather than one format-local sub-parser (unlike the teacher's per-format
/// errors, which are small closed sets), so new variants are likely as more
/// of the standard gets covered.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum NitfError {
    /// The given path does not exist or could not be opened.
    FileNotFound(PathBuf),

    /// The input is shorter than the minimum plausible NITF file (10 bytes).
    FileTooSmall { len: usize },

    /// The stream ran out of bytes partway through a declared field or TRE.
    UnexpectedEof { field: &'static str },

    /// A field's bytes didn't decode under its claimed field kind.
    MalformedField { field: &'static str, reason: String },

    /// `FL` (File Length) did not match the file's actual size on disk.
    FileLengthMismatch { expected: i64, actual: u64 },

    /// A TRE's declared `CEL` exceeds the bytes actually remaining in its
    /// enclosing UDHD/XHD/UDID/IXSHD buffer.
    TruncatedTre { cetag: String },

    /// No codec is registered for the image segment's compression code.
    NoCodecForCompression { code: String },

    /// A TRE decoder consumed more or fewer bytes than its declared `CEL`.
    DecoderInvariantViolation {
        cetag: &'static str,
        consumed: usize,
        declared: usize,
    },
}

impl core::fmt::Display for NitfError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "NITF file not found: `{}`", path.display()),
            Self::FileTooSmall { len } => {
                write!(f, "file is too small to be a NITF file: {len} bytes")
            }
            Self::UnexpectedEof { field } => {
                write!(f, "stream ran out of bytes while reading field `{field}`")
            }
            Self::MalformedField { field, reason } => {
                write!(f, "field `{field}` did not decode: {reason}")
            }
            Self::FileLengthMismatch { expected, actual } => write!(
                f,
                "FL declared {expected} bytes, but the file is {actual} bytes"
            ),
            Self::TruncatedTre { cetag } => {
                write!(f, "TRE `{cetag}` declared a CEL longer than its buffer")
            }
            Self::NoCodecForCompression { code } => {
                write!(f, "no image codec registered for compression code `{code}`")
            }
            Self::DecoderInvariantViolation {
                cetag,
                consumed,
                declared,
            } => write!(
                f,
                "TRE `{cetag}` decoder consumed {consumed} bytes, but CEL declared {declared}"
            ),
        }
    }
}

impl core::error::Error for NitfError {}

/// An error parsing one Tagged Record Extension.
///
/// Folded into [`NitfError`] at the point a TRE crosses back into its
/// enclosing record's parse (mirroring how the teacher folds
/// `ExifFieldError` into a `Vec` on `Exif` rather than aborting the whole
/// parse) - a single bad TRE never aborts the file parse; the catch-all
/// decoder claims its bytes instead (see [`crate::tre::registry`]).
#[derive(Clone, Debug, PartialEq)]
pub enum TreError {
    /// The stream ran out of bytes partway through this TRE's own fields.
    UnexpectedEof { field: &'static str },

    /// A field inside the TRE didn't decode.
    MalformedField { field: &'static str, reason: String },

    /// The decoder consumed more or fewer bytes than `CEL` declared.
    InvariantViolation { consumed: usize, declared: usize },
}

impl core::fmt::Display for TreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnexpectedEof { field } => {
                write!(f, "ran out of bytes while reading field `{field}`")
            }
            Self::MalformedField { field, reason } => {
                write!(f, "field `{field}` did not decode: {reason}")
            }
            Self::InvariantViolation { consumed, declared } => write!(
                f,
                "decoder consumed {consumed} bytes, but CEL declared {declared}"
            ),
        }
    }
}

impl core::error::Error for TreError {}

/// An error decoding an image segment's pixel payload.
#[derive(Clone, Debug, PartialEq)]
pub enum CodecError {
    /// The codec doesn't implement `encode` (the default, for read-only
    /// deployments - see [`crate::codec::ImageCodec`]).
    EncodeNotSupported,

    /// The codec-specific decode step failed.
    DecodeFailed(String),
}

impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EncodeNotSupported => f.write_str("this codec does not support encoding"),
            Self::DecodeFailed(reason) => write!(f, "image decode failed: {reason}"),
        }
    }
}

impl core::error::Error for CodecError {}

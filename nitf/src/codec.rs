//! The pluggable image codec boundary: [`ImageCodec`], [`PixelArray`], and
//! the [`CodecRegistry`] that dispatches on [`ImageCompression`].
//!
//! Actual codecs (JPEG 2000 for `C8`, the bi-level/VQ schemes, ...) are
//! outside this crate's scope - it only defines the capability a caller
//! plugs one in against. `NC`/`NM` segments never reach the registry; they
//! are reshaped inline by [`crate::container`].

use std::sync::Arc;

use nitf_types::compression::ImageCompression;

use crate::error::CodecError;

/// A decoded (or identity-reshaped) image segment's pixel payload.
///
/// Two-dimensional for a single band, three-dimensional (band-interleaved)
/// for more than one - `bands` distinguishes the two without a separate
/// type per rank.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelArray {
    pub rows: usize,
    pub cols: usize,
    pub bands: usize,
    pub bits_per_pixel: u16,
    pub data: Vec<u8>,
}

impl PixelArray {
    /// Builds a pixel array directly from raw bytes with no reinterpretation
    /// - the `NC`/`NM` path, and the shape every codec's `decode` ultimately
    /// produces.
    pub fn from_raw(rows: usize, cols: usize, bands: usize, bits_per_pixel: u16, data: Vec<u8>) -> Self {
        Self { rows, cols, bands, bits_per_pixel, data }
    }
}

/// A pluggable image codec, keyed to one or more [`ImageCompression`] codes
/// by the registry that holds it.
///
/// `encode` is optional: most deployments of this crate are read-only, so
/// the default just reports [`CodecError::EncodeNotSupported`].
pub trait ImageCodec: Send + Sync {
    /// Decodes `bytes` (the image segment's raw data block) under the given
    /// compression code into a [`PixelArray`].
    fn decode(&self, code: ImageCompression, bytes: &[u8]) -> Result<PixelArray, CodecError>;

    /// Encodes `pixels` back into `code`'s wire representation.
    fn encode(&self, _code: ImageCompression, _pixels: &PixelArray) -> Result<Vec<u8>, CodecError> {
        Err(CodecError::EncodeNotSupported)
    }
}

/// Dispatch table from [`ImageCompression`] to the [`ImageCodec`] that
/// handles it.
///
/// Ships empty by default (§2b's non-goal: this crate does not bundle codec
/// implementations) - callers register their own via [`Self::register`], or
/// supply an `Options::image_codec_registry` override.
///
/// Entries are held behind `Arc` rather than `Box` so the registry itself
/// stays cheaply `Clone` - [`crate::container::NitfContainer`] keeps its own
/// copy rather than borrowing from the `Options` it was built from.
#[derive(Clone, Default)]
pub struct CodecRegistry {
    entries: Vec<(ImageCompression, Arc<dyn ImageCodec>)>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn register(&mut self, code: ImageCompression, codec: Arc<dyn ImageCodec>) {
        self.entries.retain(|(existing, _)| *existing != code);
        self.entries.push((code, codec));
    }

    pub fn get(&self, code: ImageCompression) -> Option<&dyn ImageCodec> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == code)
            .map(|(_, codec)| codec.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;
    impl ImageCodec for Identity {
        fn decode(&self, _code: ImageCompression, bytes: &[u8]) -> Result<PixelArray, CodecError> {
            Ok(PixelArray::from_raw(1, bytes.len(), 1, 8, bytes.to_vec()))
        }
    }

    #[test]
    fn unregistered_code_has_no_codec() {
        let registry = CodecRegistry::new();
        assert!(registry.get(ImageCompression::C8).is_none());
    }

    #[test]
    fn registering_replaces_any_prior_entry_for_the_same_code() {
        let mut registry = CodecRegistry::new();
        registry.register(ImageCompression::C8, Arc::new(Identity));
        registry.register(ImageCompression::C8, Arc::new(Identity));
        assert_eq!(registry.entries.len(), 1);
    }
}

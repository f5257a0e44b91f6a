//! [`Options`]: the plain, dependency-free configuration surface for
//! [`crate::load_nitf`]/[`crate::load_nitf_bytes`].

use crate::codec::CodecRegistry;
use crate::tre::TreRegistry;

/// Configuration for a single parse.
///
/// A plain struct rather than a builder macro or a derive-heavy config
/// crate - the teacher's providers take a slice plus inline parameters, so
/// this crate keeps the same shape: no env-var parsing, no file-based
/// config, nothing the caller didn't hand it directly.
pub struct Options {
    /// If `FL` doesn't match the file's actual size, surface it as a fatal
    /// error rather than a collected warning.
    pub strict_length_check: bool,
    /// Overrides the default TRE registry. `None` falls back to
    /// [`TreRegistry::default`].
    pub tre_registry: Option<TreRegistry>,
    /// Overrides the default image codec registry. `None` falls back to
    /// [`CodecRegistry::default`]; compression codes with no registered
    /// codec surface `NitfError::NoCodecForCompression` on `get_image`.
    pub image_codec_registry: Option<CodecRegistry>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict_length_check: true,
            tre_registry: None,
            image_codec_registry: None,
        }
    }
}


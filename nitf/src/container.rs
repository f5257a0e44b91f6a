//! [`NitfContainer`]: the top-level assembly of a parsed File Header plus
//! its ordered image segments, and the `load_nitf`/`load_nitf_bytes` entry
//! points.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use parking_lot::RwLock;

use nitf_types::compression::ImageCompression;

use crate::codec::{CodecRegistry, PixelArray};
use crate::error::NitfError;
use crate::file_header::{self, FileHeader};
use crate::image_subheader::{self, ImageSubheader};
use crate::options::Options;
use crate::tre::TreRegistry;

const MIN_PLAUSIBLE_FILE_SIZE: usize = 10;

/// One image segment: its subheader, the raw (still-encoded) pixel bytes,
/// and a lazily-populated decode cache.
///
/// The cache is an `RwLock<Option<PixelArray>>`, grounded on the teacher's
/// memoized-field pattern - a repeated `get_image` call on the same segment
/// does not re-invoke the codec.
pub struct ImageSegment {
    pub subheader: ImageSubheader,
    data: Vec<u8>,
    pixels: RwLock<Option<PixelArray>>,
}

impl ImageSegment {
    fn new(subheader: ImageSubheader, data: Vec<u8>) -> Self {
        Self { subheader, data, pixels: RwLock::new(None) }
    }

    /// The segment's raw, still-encoded pixel bytes.
    pub fn raw_data(&self) -> &[u8] {
        &self.data
    }

    fn decode(&self, codecs: &CodecRegistry) -> Result<PixelArray, NitfError> {
        if let Some(cached) = self.pixels.read().as_ref() {
            return Ok(cached.clone());
        }

        let code_str = self.subheader.compression_code();
        let code = ImageCompression::from_str(&code_str).ok_or_else(|| NitfError::NoCodecForCompression {
            code: code_str.clone(),
        })?;

        let pixels = if code.is_uncompressed() {
            self.identity_reshape()?
        } else {
            let codec = codecs
                .get(code)
                .ok_or(NitfError::NoCodecForCompression { code: code_str })?;
            codec
                .decode(code, &self.data)
                .map_err(|e| NitfError::MalformedField { field: "image data", reason: e.to_string() })?
        };

        *self.pixels.write() = Some(pixels.clone());
        Ok(pixels)
    }

    /// `NC`/`NM` segments carry their pixels uncompressed, row-major,
    /// band-interleaved-by-block per `IMODE` - reshaped here with no codec
    /// involved, per §4.7.
    fn identity_reshape(&self) -> Result<PixelArray, NitfError> {
        let rows = self.field_as_usize("NROWS")?;
        let cols = self.field_as_usize("NCOLS")?;
        let nbands = self.field_as_usize("NBANDS")?;
        let bands = if nbands == 0 { self.field_as_usize("XBANDS")? } else { nbands };
        let bpp = self.field_as_usize("NBPP")?;

        Ok(PixelArray::from_raw(rows, cols, bands, bpp as u16, self.data.clone()))
    }

    fn field_as_usize(&self, name: &str) -> Result<usize, NitfError> {
        self.subheader
            .get(name, 0)
            .and_then(|f| f.value.as_i64())
            .map(|v| v.max(0) as usize)
            .ok_or(NitfError::MalformedField { field: "image geometry", reason: format!("missing or non-numeric `{name}`") })
    }
}

/// A fully parsed NITF file: its File Header and ordered image segments.
pub struct NitfContainer {
    pub file_header: FileHeader,
    pub image_segments: Vec<ImageSegment>,
    codecs: CodecRegistry,
}

impl NitfContainer {
    /// Decodes (or, for `NC`/`NM`, identity-reshapes) the pixel payload of
    /// image segment `index`, using whichever codec is registered for its
    /// compression code.
    pub fn get_image(&self, index: usize) -> Result<PixelArray, NitfError> {
        let segment = self
            .image_segments
            .get(index)
            .ok_or(NitfError::MalformedField { field: "image segment index", reason: format!("no segment {index}") })?;
        segment.decode(&self.codecs)
    }

    /// A flat diagnostic map: `file_header.*` alongside `image_segment.<i>.*`.
    pub fn as_kvp(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        for (k, v) in self.file_header.as_kvp() {
            out.insert(format!("file_header.{k}"), v);
        }
        for (i, segment) in self.image_segments.iter().enumerate() {
            for (k, v) in segment.subheader.as_kvp() {
                out.insert(format!("image_segment.{i}.{k}"), v);
            }
        }
        out
    }
}

/// Reads and parses the NITF file at `path`.
pub fn load_nitf(path: &Path, options: &Options) -> Result<NitfContainer, NitfError> {
    let bytes = fs::read(path).map_err(|_| NitfError::FileNotFound(path.to_path_buf()))?;
    load_nitf_bytes(&bytes, options)
}

/// Parses a NITF file already held in memory.
///
/// Per §7's propagation policy: File Header errors are fatal, Image
/// Subheader-level errors are collected onto the file header's `validate()`
/// result by the caller (this crate does not retroactively decide severity
/// for the caller), and TRE errors never escape this far - the catch-all
/// decoder already absorbed them.
pub fn load_nitf_bytes(bytes: &[u8], options: &Options) -> Result<NitfContainer, NitfError> {
    if bytes.len() < MIN_PLAUSIBLE_FILE_SIZE {
        return Err(NitfError::FileTooSmall { len: bytes.len() });
    }

    let owned_registry;
    let tre_registry: &TreRegistry = match &options.tre_registry {
        Some(r) => r,
        None => {
            owned_registry = TreRegistry::default();
            &owned_registry
        }
    };

    let file_header = file_header::parse(bytes, tre_registry)?;

    let length_errors = file_header.validate(bytes.len() as u64);
    if options.strict_length_check {
        if let Some(err) = length_errors.into_iter().next() {
            return Err(err);
        }
    } else {
        for err in length_errors {
            log::warn!("non-fatal File Header validation error: {err}");
        }
    }

    let header_length = file_header
        .get("HL", 0)
        .and_then(|f| f.value.as_i64())
        .filter(|&hl| hl >= 0)
        .ok_or(NitfError::MalformedField { field: "HL", reason: "missing or negative header length".to_string() })?
        as usize;

    let mut offset = header_length;
    let mut image_segments = Vec::new();
    for (subheader_len, data_len) in file_header.image_segment_descriptors() {
        let subheader_len = subheader_len.max(0) as usize;
        let data_len = data_len.max(0) as usize;

        let subheader_end = offset
            .checked_add(subheader_len)
            .filter(|&end| end <= bytes.len())
            .ok_or(NitfError::UnexpectedEof { field: "image subheader" })?;
        let subheader = image_subheader::parse(&bytes[offset..subheader_end], tre_registry)?;
        offset = subheader_end;

        let data_end = offset
            .checked_add(data_len)
            .filter(|&end| end <= bytes.len())
            .ok_or(NitfError::UnexpectedEof { field: "image data" })?;
        let data = bytes[offset..data_end].to_vec();
        offset = data_end;

        image_segments.push(ImageSegment::new(subheader, data));
    }

    let codecs = options.image_codec_registry.clone().unwrap_or_default();

    log::debug!("parsed NITF container: {} image segment(s)", image_segments.len());

    Ok(NitfContainer { file_header, image_segments, codecs })
}

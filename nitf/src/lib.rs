#![forbid(unsafe_code)]

//! A reader (and forward-compatible framework for a writer) of NITF 2.1
//! (MIL-STD-2500C / BF01) imagery container files.
//!
//! Given a file on disk or a byte slice already in memory,
//! [`load_nitf`]/[`load_nitf_bytes`] produce a [`NitfContainer`]: a parsed
//! File Header, each Image Subheader, and any Tagged Record Extensions
//! carried in user-defined or extended sections. Decoding the pixel payload
//! itself is delegated to a pluggable [`codec::ImageCodec`], keyed by the
//! segment's NITF compression code.

pub mod codec;
pub mod container;
pub mod cursor;
pub mod error;
pub mod file_header;
pub mod image_subheader;
pub mod options;
pub mod record;
pub mod tre;

pub use container::{NitfContainer, load_nitf, load_nitf_bytes};
pub use error::NitfError;
pub use options::Options;

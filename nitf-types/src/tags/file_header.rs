//! The File Header's fixed field schema, per MIL-STD-2500C.
//!
//! Repeating groups (`LISH_n`/`LI_n`, `LSSH_n`/`LS_n`, `LTSH_n`/`LT_n`,
//! `LDSH_n`/`LD_n`, `LRESH_n`/`LRE_n`) and the dynamic `UDHD`/`XHD` slots are
//! driven by the parser engine in `nitf`, not by this table - this table
//! only holds the one-shot schema row for each repeatable field's *shape*,
//! reused once per iteration.

use crate::field::FieldKind::{BcsA, BcsN, BcsNp, EcsA, Tre, UnsignedBinary};
use crate::schema::FieldSchema;

/// The fixed-position prefix, read once, in order, from byte 0.
pub const FIXED_PREFIX: &[FieldSchema] = &[
    FieldSchema::new("FHDR", 4, BcsA, "File Profile Name"),
    FieldSchema::new("FVER", 5, BcsA, "File Version"),
    FieldSchema::new("CLEVEL", 2, BcsNp, "Complexity Level"),
    FieldSchema::new("STYPE", 4, BcsA, "Standard Type"),
    FieldSchema::new("OSTAID", 10, BcsA, "Originating Station ID"),
    FieldSchema::new("FDT", 14, BcsN, "File Date and Time"),
    FieldSchema::new("FTITLE", 80, EcsA, "File Title"),
    FieldSchema::new("FSCLAS", 1, EcsA, "File Security Classification"),
    FieldSchema::new("FSCLSY", 2, EcsA, "File Security Classification System"),
    FieldSchema::new("FSCODE", 11, EcsA, "File Codewords"),
    FieldSchema::new("FSCTLH", 2, EcsA, "File Control and Handling"),
    FieldSchema::new("FSREL", 20, EcsA, "File Releasing Instructions"),
    FieldSchema::new("FSDCTP", 2, EcsA, "File Declassification Type"),
    FieldSchema::new("FSDCDT", 8, EcsA, "File Declassification Date"),
    FieldSchema::new("FSDCXM", 4, EcsA, "File Declassification Exemption"),
    FieldSchema::new("FSDG", 1, EcsA, "File Downgrade"),
    FieldSchema::new("FSDGDT", 8, EcsA, "File Downgrade Date"),
    FieldSchema::new("FSCLTX", 43, EcsA, "File Classification Text"),
    FieldSchema::new("FSCATP", 1, EcsA, "File Classification Authority Type"),
    FieldSchema::new("FSCAUT", 40, EcsA, "File Classification Authority"),
    FieldSchema::new("FSCRSN", 1, EcsA, "File Classification Reason"),
    FieldSchema::new("FSSRDT", 8, EcsA, "File Security Source Date"),
    FieldSchema::new("FSCTLN", 15, EcsA, "File Security Control Number"),
    FieldSchema::new("FSCOP", 5, BcsN, "File Copy Number"),
    FieldSchema::new("FSCPYS", 5, BcsN, "File Number of Copies"),
    FieldSchema::new("ENCRYPT", 1, BcsN, "Encryption"),
    FieldSchema::new("FBKGC", 3, UnsignedBinary, "File Background Color"),
    FieldSchema::new("ONAME", 24, EcsA, "Originator's Name"),
    FieldSchema::new("OPHONE", 18, EcsA, "Originator's Phone Number"),
    FieldSchema::new("FL", 12, BcsNp, "File Length"),
    FieldSchema::new("HL", 6, BcsN, "NITF File Header Length"),
    FieldSchema::new("NUMI", 3, BcsN, "Number of Image Segments"),
    FieldSchema::new("NUMS", 3, BcsN, "Number of Graphic Segments"),
    FieldSchema::new("NUMX", 3, BcsN, "Reserved for Future Use"),
    FieldSchema::new("NUMT", 3, BcsN, "Number of Text Segments"),
    FieldSchema::new("NUMDES", 3, BcsNp, "Number of Data Extension Segments"),
    FieldSchema::new("NUM_RES", 3, BcsNp, "Number of Reserved Data Extension Segments"),
    FieldSchema::new("UDHDL", 5, BcsNp, "User-Defined Header Data Length"),
    // UDHOFL/UDHD/XHDL/XHDLOFL/XHD are emitted dynamically by the parser,
    // using the templates below, once UDHDL/XHDL are known.
];

/// Template for the per-image-segment `LISH_n` field.
pub const LISH_N: FieldSchema = FieldSchema::new("LISH_n", 6, BcsN, "Length of nth Image Subheader");
/// Template for the per-image-segment `LI_n` field.
pub const LI_N: FieldSchema = FieldSchema::new("LI_n", 10, BcsN, "Length of nth Image Segment");

/// Template for the per-graphic-segment `LSSH_n` field.
pub const LSSH_N: FieldSchema = FieldSchema::new("LSSH_n", 4, BcsN, "Length of nth Graphic Subheader");
/// Template for the per-graphic-segment `LS_n` field.
pub const LS_N: FieldSchema = FieldSchema::new("LS_n", 6, BcsN, "Length of nth Graphic Segment");

/// Template for the per-text-segment `LTSH_n` field.
pub const LTSH_N: FieldSchema = FieldSchema::new("LTSH_n", 4, BcsNp, "Length of nth Text Subheader");
/// Template for the per-text-segment `LT_n` field.
pub const LT_N: FieldSchema = FieldSchema::new("LT_n", 5, BcsNp, "Length of nth Text Segment");

/// Template for the per-DES `LDSH_n` field.
pub const LDSH_N: FieldSchema =
    FieldSchema::new("LDSH_n", 4, BcsNp, "Length of nth Data Extension Segment Subheader");
/// Template for the per-DES `LD_n` field.
pub const LD_N: FieldSchema = FieldSchema::new("LD_n", 9, BcsNp, "Length of nth Data Extension Segment");

/// Template for the per-reserved-extension-segment `LRESH_n` field.
pub const LRESH_N: FieldSchema = FieldSchema::new(
    "LRESH_n",
    4,
    BcsNp,
    "Length of nth Reserved Extension Segment Subheader",
);
/// Template for the per-reserved-extension-segment `LRE_n` field.
pub const LRE_N: FieldSchema =
    FieldSchema::new("LRE_n", 7, BcsNp, "Length of nth Reserved Extension Segment");

/// The overflow indicator read whenever `UDHDL`/`XHDL` is non-zero.
pub const UDHOFL: FieldSchema = FieldSchema::new("UDHOFL", 3, BcsNp, "User-Defined Header Overflow");
/// The TRE-bearing slot following `UDHOFL`.
pub const UDHD: FieldSchema = FieldSchema::new("UDHD", 0, Tre, "User-Defined Header Data");
/// The length field gating `XHD`.
pub const XHDL: FieldSchema = FieldSchema::new("XHDL", 5, BcsNp, "Extended Header Data Length");
/// The overflow indicator read whenever `XHDL` is non-zero.
pub const XHDLOFL: FieldSchema = FieldSchema::new("XHDLOFL", 3, BcsNp, "Extended Header Data Overflow");
/// The TRE-bearing slot following `XHDLOFL`.
pub const XHD: FieldSchema = FieldSchema::new("XHD", 0, Tre, "Extended Header Data");

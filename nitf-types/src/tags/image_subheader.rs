//! The Image Subheader's fixed field schema, per MIL-STD-2500C.
//!
//! As with the File Header, repeating/dynamic groups (per-band fields,
//! `ICOM_n`, `LUTD_n_m`, the `UDID`/`IXSHD` TRE slots) are driven by the
//! parser engine in `nitf` using the per-iteration templates below.

use crate::field::FieldKind::{BcsA, BcsN, BcsNp, EcsA, Tre, UnsignedBinary};
use crate::schema::FieldSchema;

/// The fixed-position prefix, read once, in order, up through `COMRAT`'s
/// gating field `IC`.
pub const FIXED_PREFIX: &[FieldSchema] = &[
    FieldSchema::new("IM", 2, BcsA, "File Part Type"),
    FieldSchema::new("IID1", 10, BcsA, "Image Identifier 1"),
    FieldSchema::new("IDATIM", 14, BcsN, "Image Date and Time"),
    FieldSchema::new("TGTID", 17, BcsA, "Target Identifier"),
    FieldSchema::new("IID2", 80, EcsA, "Image Identifier 2"),
    FieldSchema::new("ISCLAS", 1, EcsA, "Image Security Classification"),
    FieldSchema::new("ISCLSY", 2, EcsA, "Image Security Classification System"),
    FieldSchema::new("ISCODE", 11, EcsA, "Image Codewords"),
    FieldSchema::new("ISCTLH", 2, EcsA, "Image Control and Handling"),
    FieldSchema::new("ISREL", 20, EcsA, "Image Releasing Instructions"),
    FieldSchema::new("ISDCTP", 2, EcsA, "Image Declassification Type"),
    FieldSchema::new("ISDCDT", 8, EcsA, "Image Declassification Date"),
    FieldSchema::new("ISDCXM", 4, EcsA, "Image Declassification Exemption"),
    FieldSchema::new("ISDG", 1, EcsA, "Image Downgrade"),
    FieldSchema::new("ISDGDT", 8, EcsA, "Image Downgrade Date"),
    FieldSchema::new("ISCLTX", 43, EcsA, "Image Classification Text"),
    FieldSchema::new("ISCATP", 1, EcsA, "Image Classification Authority Type"),
    FieldSchema::new("ISCAUT", 40, EcsA, "Image Classification Authority"),
    FieldSchema::new("ISCRSN", 1, EcsA, "Image Classification Reason"),
    FieldSchema::new("ISSRDT", 8, EcsA, "Image Security Source Date"),
    FieldSchema::new("ISCTLN", 15, EcsA, "Image Security Control Number"),
    FieldSchema::new("ENCRYP", 1, BcsNp, "Encryption"),
    FieldSchema::new("ISORCE", 42, EcsA, "Image Source"),
    FieldSchema::new("NROWS", 8, BcsNp, "Number of Significant Rows in Image"),
    FieldSchema::new("NCOLS", 8, BcsNp, "Number of Significant Columns in Image"),
    FieldSchema::new("PVTYPE", 3, BcsA, "Pixel Value Type"),
    FieldSchema::new("IREP", 8, BcsA, "Image Representation"),
    FieldSchema::new("ICAT", 8, BcsA, "Image Category"),
    FieldSchema::new("ABPP", 2, BcsNp, "Actual Bits-Per-Pixel Band"),
    FieldSchema::new("PJUST", 1, BcsA, "Pixel Justification"),
    FieldSchema::new("ICORDS", 1, BcsA, "Image Coordinate Representation"),
    FieldSchema::new("IGEOLO", 60, BcsA, "Image Geographic Location"),
    FieldSchema::new("NICOM", 1, BcsNp, "Number of Image Components"),
    // ICOM_n is emitted dynamically, NICOM times.
    FieldSchema::new("IC", 2, BcsA, "Image Compression"),
    // COMRAT is emitted dynamically, unless IC is NC/NM.
    FieldSchema::new("NBANDS", 1, BcsNp, "Number of Bands"),
    // XBANDS/per-band fields are emitted dynamically.
];

/// Template for `ICOM_n`, pushed `NICOM` times.
pub const ICOM_N: FieldSchema = FieldSchema::new("ICOM_n", 80, EcsA, "Image Comments N");

/// `COMRAT`, pushed once after `IC` unless `IC` is `NC`/`NM`.
pub const COMRAT: FieldSchema = FieldSchema::new("COMRAT", 4, BcsA, "Compression Rate Code");

/// `XBANDS`, pushed once when `NBANDS == 0`.
pub const XBANDS: FieldSchema = FieldSchema::new("XBANDS", 5, BcsNp, "Number of Multispectral Bands");

/// Template for the per-band `IREPBAND_n` field.
pub const IREPBAND_N: FieldSchema = FieldSchema::new("IREPBAND_n", 2, BcsA, "Nth Band Representation");
/// Template for the per-band `ISUBCAT_n` field.
pub const ISUBCAT_N: FieldSchema = FieldSchema::new("ISUBCAT_n", 6, BcsA, "Nth Band Subcategory");
/// Template for the per-band `IFC_n` field.
pub const IFC_N: FieldSchema = FieldSchema::new("IFC_n", 1, BcsA, "Nth Band Filter Condition");
/// Template for the per-band `IMFLT_n` field.
pub const IMFLT_N: FieldSchema =
    FieldSchema::new("IMFLT_n", 3, BcsA, "Nth Band Standard Image Filter Code");
/// Template for the per-band `NLUTS_n` field.
pub const NLUTS_N: FieldSchema = FieldSchema::new("NLUTS_n", 1, BcsNp, "Number of LUTS for the Nth Band");
/// Template for the per-band `NELUT_n` field, present only if `NLUTS_n > 0`.
pub const NELUT_N: FieldSchema =
    FieldSchema::new("NELUT_n", 5, BcsNp, "Number of LUT Entries for the Nth Image Band");
/// Template for the per-band, per-LUT `LUTD_n_m` field; width resolved as
/// `NLUTS_n * NELUT_n`.
pub const LUTD_N_M: FieldSchema = FieldSchema::new("LUTD_n_m", 0, UnsignedBinary, "Nth Image Band, Mth LUT");

/// The remainder of the fixed-position suffix, following the band blocks.
pub const FIXED_SUFFIX: &[FieldSchema] = &[
    FieldSchema::new("ISYNC", 1, BcsNp, "Image Sync Code"),
    FieldSchema::new("IMODE", 1, BcsA, "Image Mode"),
    FieldSchema::new("NBPR", 4, BcsNp, "Number of Blocks Per Row"),
    FieldSchema::new("NBPC", 4, BcsNp, "Number of Blocks Per Column"),
    FieldSchema::new("NPPBH", 4, BcsNp, "Number of Pixels Per Block Horizontal"),
    FieldSchema::new("NPPBV", 4, BcsNp, "Number of Pixels Per Block Vertical"),
    FieldSchema::new("NBPP", 2, BcsNp, "Number of Bits Per Pixel Per Band"),
    FieldSchema::new("IDLVL", 3, BcsNp, "Image Display Level"),
    FieldSchema::new("IALVL", 3, BcsNp, "Attachment Level"),
    FieldSchema::new("ILOC", 10, BcsNp, "Image Location"),
    FieldSchema::new("IMAG", 4, BcsA, "Image Magnification"),
    FieldSchema::new("UDIDL", 5, BcsNp, "User Defined Image Data Length"),
    // UDOFL/UDID/IXSHDL/IXSOFL/IXSHD are emitted dynamically, see below.
];

/// The overflow indicator read whenever `UDIDL` is non-zero.
pub const UDOFL: FieldSchema = FieldSchema::new("UDOFL", 3, BcsNp, "User Defined Overflow");
/// The TRE-bearing slot following `UDOFL`.
pub const UDID: FieldSchema = FieldSchema::new("UDID", 0, Tre, "User Defined Image Data");
/// The length field gating `IXSHD`.
pub const IXSHDL: FieldSchema =
    FieldSchema::new("IXSHDL", 5, BcsNp, "Image Extended Subheader Data Length");
/// The overflow indicator read whenever `IXSHDL` is non-zero.
pub const IXSOFL: FieldSchema =
    FieldSchema::new("IXSOFL", 3, BcsNp, "Image Extended Subheader Overflow");
/// The TRE-bearing slot following `IXSOFL`.
pub const IXSHD: FieldSchema = FieldSchema::new("IXSHD", 0, Tre, "Image Extended Subheader Data");

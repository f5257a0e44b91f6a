//! BANDSB: Per-Band and Per-Cube Spectral Band Information.
//!
//! Dynamic and mask-gated: a fixed prefix ending in `EXISTENCE_MASK` (a
//! 32-bit word) gates every field that follows - both in the trailing
//! "cube" area and inside each of `COUNT` per-band iterations - on a bit
//! of that mask. Two further mask-gated counters, `NUM_AUX_B`/`NUM_AUX_C`,
//! each drive a trailing loop of auxiliary parameters (§4.6 of the spec;
//! the upstream source declares these fields but its `build()` returns
//! before ever reading them).

use crate::field::FieldKind::{BcsA, BcsN, BcsNp, EcsA, Ieee754Float, Uint32};
use crate::schema::FieldSchema;

/// Read once, unconditionally, before the mask-gated prefix.
pub const COUNT: FieldSchema = FieldSchema::new("COUNT", 5, BcsNp, "Number of Bands");

/// The fixed, unconditional prefix fields, read in order, ending in
/// `EXISTENCE_MASK`.
pub const PREFIX: &[FieldSchema] = &[
    FieldSchema::new("RADIOMETRIC_QUANTITY", 24, BcsA, "Data Representation"),
    FieldSchema::new("RADIOMETRIC_QUANTITY_UNIT", 1, BcsA, "Data Representation Unit"),
    FieldSchema::new("SCALE_FACTOR", 4, Ieee754Float, "Cube Scale Factor (M)"),
    FieldSchema::new("ADDITIVE_FACTOR", 4, Ieee754Float, "Cube Additive Factor (A)"),
    FieldSchema::new("ROW_GSD", 7, BcsNp, "Row Ground Sample Distance"),
    FieldSchema::new("ROW_GSD_UNIT", 1, BcsA, "Unit of Row Ground Sample Distance"),
    FieldSchema::new("COL_GSD", 7, BcsNp, "Column Ground Sample Distance"),
    FieldSchema::new("COL_GSD_UNIT", 1, BcsA, "Unit of Column Ground Sample Distance"),
    FieldSchema::new("SPT_RESP_ROW", 7, BcsNp, "Spatial Response Function Across Rows"),
    FieldSchema::new("SPT_RESP_UNIT_ROW", 1, BcsA, "Unit of Row Spatial Response"),
    FieldSchema::new("SPT_RESP_COL", 7, BcsNp, "Spatial Response Function Across Columns"),
    FieldSchema::new("SPT_RESP_UNIT_COL", 1, BcsA, "Unit of Column Spatial Response"),
    FieldSchema::new("DATA_FLD_1", 48, EcsA, "Reserved for future use"),
];

/// `EXISTENCE_MASK` itself: a big-endian `u32`, read right after the prefix.
pub const EXISTENCE_MASK: FieldSchema =
    FieldSchema::new("EXISTENCE_MASK", 4, Uint32, "Bitwise Existing Mask Field");

/// The cube-level fields gated on `EXISTENCE_MASK`, read once after the
/// mask (not per-band).
pub const CUBE_FIELDS: &[FieldSchema] = &[
    FieldSchema::masked(
        "RADIOMETRIC_ADJUSTMENT_SURFACE",
        24,
        BcsA,
        "Adjustment Surface Details",
        31,
    ),
    FieldSchema::masked(
        "ATMOSPHERIC_ADJUSTMENT_ALTITUDE",
        4,
        Ieee754Float,
        "Adjustment Altitude Above WGS-84 Ellipsoid",
        31,
    ),
    FieldSchema::masked("DIAMETER", 7, BcsNp, "Diameter of the Lens", 30),
    FieldSchema::masked("DATA_FLD_2", 4, BcsA, "Reserved for Future Use", 29),
    FieldSchema::new("WAVE_LENGTH_UNIT", 1, BcsA, "Wavelength Unit"),
];

/// The per-band fields, gated on `EXISTENCE_MASK`, read `COUNT` times.
pub const BAND_FIELDS: &[FieldSchema] = &[
    FieldSchema::masked("BANDID_n", 50, BcsA, "Band N Identifier", 28),
    FieldSchema::masked("BAD_BAND_n", 1, BcsNp, "Bad Band Flag", 27),
    FieldSchema::masked("NIIRS_n", 3, BcsNp, "NIIRS Score / Value", 26),
    FieldSchema::masked("FOCAL_LEN_n", 5, BcsNp, "Band N Focal Length", 25),
    FieldSchema::masked("CWAVE_n", 7, BcsNp, "Band N Center Response Wavelength", 24),
    FieldSchema::masked("FWHM_n", 7, BcsNp, "Band N Width", 23),
    FieldSchema::masked("FWHM_UNC_n", 7, BcsNp, "Band N Uncertainty", 22),
    FieldSchema::masked("NOM_WAVE_n", 7, BcsNp, "Band N Nominal Wavelength", 21),
    FieldSchema::masked(
        "NOM_WAV_UNC_n",
        7,
        BcsNp,
        "Band N Wavelength Uncertainty Measure",
        20,
    ),
    FieldSchema::masked("LBOUND_n", 7, BcsNp, "Band N Lower Wavelength Bound", 19),
    FieldSchema::masked("UBOUND_n", 7, BcsNp, "Band N Upper Wavelength Bound", 19),
    FieldSchema::masked(
        "SCALE_FACTOR_n",
        4,
        Ieee754Float,
        "Band N Individual Scale Factor",
        18,
    ),
    FieldSchema::masked(
        "ADDITIVE_FACTOR_n",
        4,
        Ieee754Float,
        "Band N Individual Additive Factor",
        18,
    ),
    FieldSchema::masked("START_TIME_n", 16, BcsNp, "Band N Start Time", 17),
    FieldSchema::masked("INT_TIME_n", 6, BcsNp, "Band N Integration Time", 16),
    FieldSchema::masked("CALDRK_n", 6, BcsNp, "Band N Calibration (Dark)", 15),
    FieldSchema::masked(
        "CALIBRATION_SENSITIVITY_n",
        5,
        BcsNp,
        "Band N Calibration (Increment)",
        15,
    ),
    FieldSchema::masked(
        "ROW_GSD_n",
        7,
        BcsNp,
        "Band N Spatial Response Interval By Row",
        14,
    ),
    FieldSchema::masked(
        "ROW_GSD_UNC_n",
        7,
        BcsNp,
        "Band N Spatial Response Interval Uncertainty Row",
        13,
    ),
    FieldSchema::masked("ROW_GSD_UNIT_n", 1, BcsA, "Band N Unit of Row Spacing", 14),
    FieldSchema::masked(
        "COL_GSD_n",
        7,
        BcsNp,
        "Band N Spatial Response Interval By Column",
        14,
    ),
    FieldSchema::masked(
        "COL_GSD_UNC_n",
        7,
        BcsNp,
        "Band N Spatial Response Interval Uncertainty Column",
        13,
    ),
    FieldSchema::masked("COL_GSD_UNIT_n", 1, BcsA, "Band N Unit of Column Spacing", 14),
    FieldSchema::masked("BKNOISE_n", 5, BcsNp, "Band N Background Noise", 12),
    FieldSchema::masked("SCNNOISE_n", 5, BcsNp, "Band N Scene Noise", 12),
    FieldSchema::masked(
        "SPT_RESP_FUNCTION_ROW_n",
        7,
        BcsNp,
        "Band N Spatial Response Function Across Rows",
        11,
    ),
    FieldSchema::masked(
        "SPT_RESP_UNC_ROW_n",
        7,
        BcsNp,
        "Band N Spatial Response Function Uncertainty",
        10,
    ),
    FieldSchema::masked(
        "SPT_RESP_UNIT_ROW_n",
        1,
        BcsA,
        "Band N Unit of Row Spatial Response",
        11,
    ),
    FieldSchema::masked(
        "SPT_RESP_FUNCTION_COL_n",
        7,
        BcsNp,
        "Band N Spatial Response Function Across Columns",
        11,
    ),
    FieldSchema::masked(
        "SPT_RESP_UNC_COL_n",
        7,
        BcsNp,
        "Band N Spatial Response Function Uncertainty",
        10,
    ),
    FieldSchema::masked(
        "SPT_RESP_UNIT_COL_n",
        1,
        BcsA,
        "Band N Unit of Column Spatial Response",
        11,
    ),
    FieldSchema::masked("DATA_FLD_3_n", 2, EcsA, "Reserved for Future Use", 9),
    FieldSchema::masked("DATA_FLD_4_n", 3, EcsA, "Reserved for Future Use", 8),
    FieldSchema::masked("DATA_FLD_5_n", 4, EcsA, "Reserved for Future Use", 7),
    FieldSchema::masked("DATA_FLD_6_n", 6, EcsA, "Reserved for Future Use", 6),
];

/// Trailing mask-gated counters; each, if present, drives an auxiliary
/// parameter loop (supplemented per §4.6/§9 - the source declares these but
/// never parses past them).
pub const NUM_AUX_B: FieldSchema =
    FieldSchema::masked("NUM_AUX_B", 2, BcsNp, "Number of Auxiliary Band Level Parameters (m)", 0);
pub const NUM_AUX_C: FieldSchema = FieldSchema::masked(
    "NUM_AUX_C",
    2,
    BcsNp,
    "Number of Auxiliary Cube Level Parameters (k)",
    0,
);

/// Per band-level auxiliary parameter: format code selecting which of
/// `APN`/`APR`/`APA` follows.
pub const BAPF_M: FieldSchema = FieldSchema::new("BAPF_m", 1, BcsA, "Band Auxiliary Parameter Value Format");
/// Per band-level auxiliary parameter: unit text.
pub const UBAP_M: FieldSchema = FieldSchema::new("UBAP_m", 7, BcsA, "Unit of Band Auxiliary Parameter");
/// Band-level auxiliary parameter, integer branch (`BAPF_m == "N"`).
pub const APN_M_N: FieldSchema = FieldSchema::new("APN_m_n", 10, BcsN, "Auxiliary Parameter Integer Value");
/// Band-level auxiliary parameter, real branch (`BAPF_m == "R"`).
pub const APR_M_N: FieldSchema =
    FieldSchema::new("APR_m_n", 4, Ieee754Float, "Auxiliary Parameter Real Value");
/// Band-level auxiliary parameter, text branch (`BAPF_m == "A"`).
pub const APA_M_N: FieldSchema =
    FieldSchema::new("APA_m_n", 20, BcsA, "Auxiliary Parameter Character String Value");

/// Per cube-level auxiliary parameter: format code.
pub const CAPF_K: FieldSchema = FieldSchema::new("CAPF_k", 1, BcsA, "Cube Auxiliary Parameter Value Format");
/// Per cube-level auxiliary parameter: unit text.
pub const UCAP_K: FieldSchema = FieldSchema::new("UCAP_k", 7, BcsA, "Unit of Cube Auxiliary Parameter");
/// Cube-level auxiliary parameter, integer branch.
pub const APN_K: FieldSchema = FieldSchema::new("APN_k", 10, BcsN, "Auxiliary Parameter Integer Value");
/// Cube-level auxiliary parameter, real branch.
pub const APR_K: FieldSchema = FieldSchema::new("APR_k", 4, Ieee754Float, "Auxiliary Parameter Real Value");
/// Cube-level auxiliary parameter, text branch.
pub const APA_K: FieldSchema =
    FieldSchema::new("APA_k", 20, BcsA, "Auxiliary Parameter Character String Value");

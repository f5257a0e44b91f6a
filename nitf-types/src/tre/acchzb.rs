//! ACCHZB: Horizontal Accuracy Region(s). Dynamic: `NUM_ACHZ` drives a loop
//! of blank-optional unit/value pairs plus an optional bounding polygon.
//!
//! Present in the source as a fully-formed decoder class that its own
//! `TRE_Factory.default()` never registers (§9); supplemented here per the
//! spec's resolution that the omission was an oversight.

use crate::field::FieldKind::{BcsA, BcsN, BcsNp};
use crate::schema::FieldSchema;

/// Read once, before the `NUM_ACHZ`-driven loop.
pub const NUM_ACHZ: FieldSchema =
    FieldSchema::new("NUM_ACHZ", 2, BcsNp, "Number of Horizontal Accuracy Regions");

/// Per-region: always read.
pub const UNIAAH_N: FieldSchema = FieldSchema::new("UNIAAH_n", 3, BcsA, "Unit of Measure for the AAH_n Field");
/// Per-region: present only if `UNIAAH_n` is non-blank.
pub const AAH_N: FieldSchema = FieldSchema::new("AAH_n", 5, BcsNp, "Absolute Horizontal Accuracy");
/// Per-region: always read.
pub const UNIAPH_N: FieldSchema =
    FieldSchema::new("UNIAPH_n", 3, BcsA, "Unit of Measure for the APH_n Field");
/// Per-region: present only if `UNIAPH_n` is non-blank.
pub const APH_N: FieldSchema = FieldSchema::new("APH_n", 5, BcsNp, "Point-to-Point Horizontal Accuracy");
/// Per-region: always read; itself text (may be blank rather than purely
/// numeric), so it is not `BCS_NP`.
pub const NUM_PTS_N: FieldSchema =
    FieldSchema::new("NUM_PTS_n", 3, BcsA, "Number of Points in the Bounding Polygon");
/// Per-point: present `NUM_PTS_n` times, only if `NUM_PTS_n` is non-blank.
pub const LON_N_M: FieldSchema = FieldSchema::new(
    "LON_n_m",
    15,
    BcsN,
    "Longitude or Easting of the Mth Polygon Point of the Nth Region",
);
/// Per-point: present `NUM_PTS_n` times, only if `NUM_PTS_n` is non-blank.
pub const LAT_N_M: FieldSchema = FieldSchema::new(
    "LAT_n_m",
    15,
    BcsN,
    "Latitude or Northing of the Mth Polygon Point of the Nth Region",
);

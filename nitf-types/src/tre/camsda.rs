//! CAMSDA: Camera Set Definition. Implemented as a degenerate fixed-schema
//! TRE: only the three leading counters are parsed (see DESIGN.md - the
//! source's own `build()` never advances past them, even though its
//! schema enum declares nested per-set/per-camera fields).

use crate::field::FieldKind::BcsNp;
use crate::schema::FieldSchema;

pub const FIELDS: &[FieldSchema] = &[
    FieldSchema::new("NUM_CAMERA_SETS", 3, BcsNp, "Number of Camera Sets"),
    FieldSchema::new("NUM_CAMERA_SETS_IN_TRE", 3, BcsNp, "Number of Camera Sets in this TRE"),
    FieldSchema::new("FIRST_CAMERA_SET_IN_TRE", 3, BcsNp, "First Camera Set in this TRE"),
];

//! MIMCSA: Motion Imagery Collection Support. A straight fixed-schema TRE.

use crate::field::FieldKind::{BcsA, BcsNp};
use crate::schema::FieldSchema;

pub const FIELDS: &[FieldSchema] = &[
    FieldSchema::new("LAYER_ID", 36, BcsA, "Layer ID"),
    FieldSchema::new("NOMINAL_FRAME_RATE", 13, BcsA, "Nominal Frame Rate"),
    FieldSchema::new("MIN_FRAME_RATE", 13, BcsA, "Minimum Frame Rate"),
    FieldSchema::new("MAX_FRAME_RATE", 13, BcsA, "Maximum Frame Rate"),
    FieldSchema::new("T_RSET", 2, BcsNp, "Temporal Resampling Set"),
    FieldSchema::new("MI_REQ_DECODER", 2, BcsA, "Minimum Required Decoder"),
    FieldSchema::new("MI_REQ_PROFILE", 36, BcsA, "Minimum Required Profile"),
    FieldSchema::new("MI_REQ_LEVEL", 6, BcsA, "Minimum Required Level"),
];

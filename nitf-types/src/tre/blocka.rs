//! BLOCKA: Image Block Information. A straight fixed-schema TRE.

use crate::field::FieldKind::{BcsNp, EcsA};
use crate::schema::FieldSchema;

pub const FIELDS: &[FieldSchema] = &[
    FieldSchema::new("BLOCK_INSTANCE", 2, BcsNp, "Block Instance"),
    FieldSchema::new("N_GRAY", 5, BcsNp, "Number of Gray Scale Points"),
    FieldSchema::new("L_LINES", 5, BcsNp, "Number of Lines"),
    FieldSchema::new("LAYOVER_ANGLE", 3, BcsNp, "Layover Angle"),
    FieldSchema::new("SHADOW_ANGLE", 3, BcsNp, "Shadow Angle"),
    FieldSchema::new("RESERVED_1", 16, EcsA, "Reserved"),
    FieldSchema::new("FRLC_LOC", 21, EcsA, "First Row Last Column Location"),
    FieldSchema::new("LRLC_LOC", 21, EcsA, "Last Row Last Column Location"),
    FieldSchema::new("LRFC_LOC", 21, EcsA, "Last Row First Column Location"),
    FieldSchema::new("FRFC_LOC", 21, EcsA, "First Row First Column Location"),
    FieldSchema::new("RESERVED_2", 5, EcsA, "Reserved"),
];

//! AIMIDB: Additional Image ID. A straight fixed-schema TRE.

use crate::field::FieldKind::{BcsA, BcsN, BcsNp};
use crate::schema::FieldSchema;

pub const FIELDS: &[FieldSchema] = &[
    FieldSchema::new("ACQUISITION_DATE", 14, BcsNp, "Acquisition Date"),
    FieldSchema::new("MISSION_NO", 4, BcsA, "Mission Number"),
    FieldSchema::new("MISSION_IDENTIFICATION", 10, BcsA, "Mission Identification"),
    FieldSchema::new("FLIGHT_NO", 2, BcsN, "Flight Number"),
    FieldSchema::new("OP_NUM", 3, BcsNp, "Operation Number"),
    FieldSchema::new("CURRENT_SEGMENT", 2, BcsA, "Current Segment"),
    FieldSchema::new("REPRO_NUM", 2, BcsNp, "Reproduction Number"),
    FieldSchema::new("REPLAY", 3, BcsA, "Replay"),
    FieldSchema::new("RESERVED_1", 1, BcsA, "Reserved"),
    FieldSchema::new("START_TILE_COLUMN", 3, BcsNp, "Start Tile Column"),
    FieldSchema::new("START_TILE_ROW", 5, BcsNp, "Start Tile Row"),
    FieldSchema::new("END_SEGMENT", 2, BcsA, "Ending Segment"),
    FieldSchema::new("END_TILE_COLUMN", 3, BcsNp, "End Tile Column"),
    FieldSchema::new("END_TILE_ROW", 5, BcsNp, "End Tile Row"),
    FieldSchema::new("COUNTRY", 2, BcsA, "Country Code"),
    FieldSchema::new("RESERVED_2", 4, BcsA, "Reserved"),
    FieldSchema::new("LOCATION", 11, BcsA, "Location"),
    FieldSchema::new("RESERVED_3", 13, BcsA, "Reserved"),
];

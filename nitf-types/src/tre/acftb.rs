//! ACFTB: Aircraft Information. A straight fixed-schema TRE.

use crate::field::FieldKind::{BcsA, BcsN, EcsA};
use crate::schema::FieldSchema;

pub const FIELDS: &[FieldSchema] = &[
    FieldSchema::new("AC_MSN_ID", 20, EcsA, "Aircraft Mission ID"),
    FieldSchema::new("AC_TAIL_NO", 10, EcsA, "Aircraft Tail Number"),
    FieldSchema::new("AC_TO", 12, BcsN, "Aircraft Take-Off Time"),
    FieldSchema::new("SENSOR_ID_TYPE", 4, BcsA, "Sensor ID Type"),
    FieldSchema::new("SENSOR_ID", 6, BcsA, "Sensor ID"),
    FieldSchema::new("SCENE_SOURCE", 1, BcsN, "Scene Source"),
    FieldSchema::new("SCNUM", 6, BcsN, "Scene Number"),
    FieldSchema::new("PDATE", 8, BcsN, "Processing Date"),
    FieldSchema::new("IMHOSTNO", 6, BcsN, "Mission Host Number"),
    FieldSchema::new("IMREQID", 5, BcsN, "Image Request ID"),
    FieldSchema::new("MPLAN", 3, BcsN, "Mission Plan Mode"),
    FieldSchema::new("ENTLOC", 25, BcsA, "Entry Location"),
    FieldSchema::new("LOC_ACCY", 6, BcsN, "Location Accuracy"),
    FieldSchema::new("ENTELV", 6, BcsN, "Entry Elevation"),
    FieldSchema::new("ELV_UNIT", 1, BcsA, "Elevation Units"),
    FieldSchema::new("EXITLOC", 25, BcsA, "Exit Location"),
    FieldSchema::new("EXITELV", 6, BcsN, "Exit Elevation"),
    FieldSchema::new("TMAP", 7, BcsN, "True Map Angle"),
    FieldSchema::new("ROW_SPACING", 7, BcsN, "Row Spacing"),
    FieldSchema::new("ROW_SPACING_UNITS", 1, BcsA, "Row Spacing Units"),
    FieldSchema::new("COL_SPACING", 7, BcsN, "Column Spacing"),
    FieldSchema::new("COL_SPACING_UNITS", 1, BcsA, "Column Spacing Units"),
    FieldSchema::new("FOCAL_LENGTH", 6, BcsN, "Focal Length"),
    FieldSchema::new("SENSERIAL", 6, BcsA, "Sensor Serial Number"),
    FieldSchema::new("ABSWVER", 7, BcsA, "Airborne Software Version"),
    FieldSchema::new("CAL_DATE", 8, BcsN, "Calibration Date"),
    FieldSchema::new("PATCH_TOT", 4, BcsN, "Patch Total"),
    FieldSchema::new("MTI_TOT", 3, BcsN, "MTI Total"),
];

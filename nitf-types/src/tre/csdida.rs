//! CSDIDA: Common Sensor Data Identification. A straight fixed-schema TRE.

use crate::field::FieldKind::{BcsA, BcsNp};
use crate::schema::FieldSchema;

pub const FIELDS: &[FieldSchema] = &[
    FieldSchema::new("DAY", 2, BcsNp, "Day"),
    FieldSchema::new("MONTH", 3, BcsA, "Month"),
    FieldSchema::new("YEAR", 4, BcsNp, "Year"),
    FieldSchema::new("PLATFORM_CODE", 2, BcsA, "Platform Code"),
    FieldSchema::new("VEHICLE_ID", 2, BcsA, "Vehicle ID"),
    FieldSchema::new("PASS", 2, BcsNp, "Pass"),
    FieldSchema::new("OPERATION", 3, BcsNp, "Operation"),
    FieldSchema::new("SENSOR_ID", 2, BcsA, "Sensor ID"),
    FieldSchema::new("PRODUCT_ID", 2, BcsA, "Product ID"),
    FieldSchema::new("RESERVED_1", 4, BcsA, "Reserved"),
    FieldSchema::new("TIME", 14, BcsNp, "Time"),
    FieldSchema::new("PROCESS_TIME", 14, BcsNp, "Processing Time"),
    FieldSchema::new("RESERVED_2", 2, BcsNp, "Reserved"),
    FieldSchema::new("RESERVED_3", 2, BcsNp, "Reserved"),
    FieldSchema::new("RESERVED_4", 1, BcsA, "Reserved"),
    FieldSchema::new("RESERVED_5", 1, BcsA, "Reserved"),
    FieldSchema::new("SOFTWARE_VERSION_NUMBER", 10, BcsA, "Software Version Number"),
];

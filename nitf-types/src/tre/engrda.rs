//! ENGRDA: Engineering Data. Dynamic: `RECNT` drives a loop of eight-field
//! groups, each followed by a matrix of data elements.

use crate::field::FieldKind::{BcsA, BcsN, BcsNp, EcsA};
use crate::schema::FieldSchema;

/// Read once, before the `RECNT`-driven loop.
pub const RESRC: FieldSchema = FieldSchema::new("RESRC", 20, EcsA, "Engineering Data Source");
/// Read once, before the `RECNT`-driven loop.
pub const RECNT: FieldSchema = FieldSchema::new("RECNT", 3, BcsNp, "Engineering Record Count");

/// Per-record: length-prefix for `ENGLBL_n`.
pub const ENGLN_N: FieldSchema = FieldSchema::new("ENGLN_n", 2, BcsNp, "Engineering Data Label Length");
/// Per-record: the label, sized by `ENGLN_n`.
pub const ENGLBL_N: FieldSchema = FieldSchema::new("ENGLBL_n", 0, BcsA, "Engineering Data Label");
/// Per-record: matrix column count.
pub const ENGMTXC_N: FieldSchema = FieldSchema::new("ENGMTXC_n", 4, BcsNp, "Engineering Matrix Column Count");
/// Per-record: matrix row count.
pub const ENGMTXR_N: FieldSchema = FieldSchema::new("ENGMTXR_n", 4, BcsNp, "Engineering Matrix Row Count");
/// Per-record: the value type.
pub const ENGTYP_N: FieldSchema = FieldSchema::new("ENGTYP_n", 1, BcsA, "Value Type of Engineering Data Element");
/// Per-record: the data element size, in bytes.
pub const ENGDTS_N: FieldSchema = FieldSchema::new("ENGDTS_n", 1, BcsN, "Engineering Data Element Size");
/// Per-record: the data element unit label.
pub const ENGDATU_N: FieldSchema = FieldSchema::new("ENGDATU_n", 2, BcsA, "Engineering Data Units");
/// Per-record: declared count of data elements (not itself the loop bound -
/// the loop bound is `ENGMTXC_n * ENGMTXR_n`).
pub const ENGDATC_N: FieldSchema = FieldSchema::new("ENGDATC_n", 8, BcsNp, "Engineering Data Count");
/// Per-element: one data element, sized `ENGDTS_n` bytes, repeated
/// `ENGMTXC_n * ENGMTXR_n` times.
pub const ENGDATA_N: FieldSchema = FieldSchema::new("ENGDATA_n", 0, crate::field::FieldKind::UnsignedBinary, "Engineering Data");

//! CCINFA: Coordinate/Country Information. Dynamic: `NUMCODE` drives a loop
//! of length-prefixed code/URN pairs plus a conditional detail block.

use crate::field::FieldKind::{BcsA, BcsNp, EcsA};
use crate::schema::FieldSchema;

/// Read once, before the `NUMCODE`-driven loop.
pub const NUMCODE: FieldSchema = FieldSchema::new("NUMCODE", 3, BcsNp, "Number of Defined Codes");

/// Per-code: length-prefix for `CODE_N`.
pub const CODE_LEN_N: FieldSchema = FieldSchema::new("CODE_LEN_n", 1, BcsNp, "Length of CODE_n");
/// Per-code: the code text itself, sized by `CODE_LEN_n`.
pub const CODE_N: FieldSchema = FieldSchema::new("CODE_n", 0, BcsA, "Code");
/// Per-code: the equivalence type.
pub const EQTYPE_N: FieldSchema = FieldSchema::new("EQTYPE_n", 1, BcsA, "Type of Equivalence");
/// Per-code: length-prefix for `ESURN_N`.
pub const ESURN_LEN_N: FieldSchema = FieldSchema::new("ESURN_LEN_n", 2, BcsNp, "Length of ESURN_n");
/// Per-code: the equivalent short URN, sized by `ESURN_LEN_n`.
pub const ESURN_N: FieldSchema = FieldSchema::new("ESURN_n", 0, BcsA, "Equivalent Short URN Item ID");
/// Per-code: length-prefix for the conditional detail block.
pub const DETAIL_LEN_N: FieldSchema = FieldSchema::new("DETAIL_LEN_n", 5, BcsNp, "Length of Detail Field");
/// Per-code: present only if `DETAIL_LEN_n > 0`.
pub const DETAIL_CMPR_N: FieldSchema = FieldSchema::new("DETAIL_CMPR_n", 1, BcsA, "Code Detail Compression");
/// Per-code: present only if `DETAIL_LEN_n > 0`, sized by `DETAIL_LEN_n`.
pub const DETAIL_N: FieldSchema = FieldSchema::new("DETAIL_n", 0, EcsA, "Code Detail Information");

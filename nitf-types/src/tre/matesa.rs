//! MATESA: Related File Cross-References. Dynamic: `NUM_GROUPS` drives a
//! loop of relationship groups, each with its own `NUM_MATES_n`-driven loop
//! of mate references.
//!
//! The source's own default `CETAG` value for this TRE is copy-pasted from
//! `CSDIDA` (`'CSDIDA'` rather than `'MATESA'`) - corrected here, see
//! DESIGN.md.

use crate::field::FieldKind::{BcsNp, EcsA};
use crate::schema::FieldSchema;

pub const CUR_SOURCE: FieldSchema = FieldSchema::new("CUR_SOURCE", 42, EcsA, "Current Source");
pub const CUR_MATE_TYPE: FieldSchema = FieldSchema::new("CUR_MATE_TYPE", 16, EcsA, "Current Mate Type");
pub const CUR_FILE_ID_LEN: FieldSchema = FieldSchema::new("CUR_FILE_ID_LEN", 4, BcsNp, "Current File ID Length");
/// Sized by `CUR_FILE_ID_LEN`.
pub const CUR_FILE_ID: FieldSchema = FieldSchema::new("CUR_FILE_ID", 0, EcsA, "Current File ID");
pub const NUM_GROUPS: FieldSchema = FieldSchema::new("NUM_GROUPS", 4, BcsNp, "Number of Relationship Groups");

/// Per-group.
pub const RELATIONSHIP_N: FieldSchema = FieldSchema::new("RELATIONSHIP_n", 24, EcsA, "Relationship");
/// Per-group: drives the per-mate loop below.
pub const NUM_MATES_N: FieldSchema = FieldSchema::new("NUM_MATES_n", 4, BcsNp, "Number of Mates in this Group");

/// Per-mate.
pub const SOURCE_N_M: FieldSchema = FieldSchema::new("SOURCE_n_m", 42, EcsA, "Mate Source");
/// Per-mate.
pub const MATE_TYPE_N_M: FieldSchema = FieldSchema::new("MATE_TYPE_n_m", 16, EcsA, "Mate Type");
/// Per-mate: length-prefix for `MATE_ID_n_m`.
pub const MATE_ID_LEN_N_M: FieldSchema = FieldSchema::new("MATE_ID_LEN_n_m", 4, BcsNp, "Mate ID Length");
/// Per-mate: sized by `MATE_ID_LEN_n_m`.
pub const MATE_ID_N_M: FieldSchema = FieldSchema::new("MATE_ID_n_m", 0, EcsA, "Mate ID");

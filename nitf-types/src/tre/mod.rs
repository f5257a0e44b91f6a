//! Static schema tables for each known Tagged Record Extension (TRE).
//!
//! Every TRE starts with the same two-field header (`CETAG`, `CEL`); each
//! submodule supplies the schema for the fields that follow.

use crate::field::FieldKind::{BcsA, BcsNp};
use crate::schema::FieldSchema;

pub mod acchzb;
pub mod acftb;
pub mod aimidb;
pub mod bandsb;
pub mod blocka;
pub mod camsda;
pub mod ccinfa;
pub mod csdida;
pub mod engrda;
pub mod matesa;
pub mod mimcsa;

/// `CETAG`: the 6-byte TRE tag, common to every TRE.
pub const CETAG: FieldSchema = FieldSchema::new("CETAG", 6, BcsA, "Unique Extension Type Identifier");
/// `CEL`: the 5-digit decimal TRE length, common to every TRE.
pub const CEL: FieldSchema = FieldSchema::new("CEL", 5, BcsNp, "TRE Length");

//! AIMIDB decoder: straight fixed-schema read over `nitf_types::tre::aimidb`.

use crate::error::TreError;
use crate::record::ParsedField;

pub fn is_valid(cetag: &str) -> bool {
    cetag == "AIMIDB"
}

pub fn build(cel: usize, payload: &[u8]) -> Result<Vec<ParsedField>, TreError> {
    super::read_fixed_body(nitf_types::tre::aimidb::FIELDS, cel, payload)
}

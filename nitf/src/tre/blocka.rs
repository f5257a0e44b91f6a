//! BLOCKA decoder: straight fixed-schema read over `nitf_types::tre::blocka`.

use crate::error::TreError;
use crate::record::ParsedField;

pub fn is_valid(cetag: &str) -> bool {
    cetag == "BLOCKA"
}

pub fn build(cel: usize, payload: &[u8]) -> Result<Vec<ParsedField>, TreError> {
    super::read_fixed_body(nitf_types::tre::blocka::FIELDS, cel, payload)
}

//! CAMSDA decoder: only the three leading counters are parsed, matching the
//! upstream source's own `build()` which never advances past them even
//! though its schema enum declares nested per-set/per-camera fields.

use crate::error::TreError;
use crate::record::ParsedField;

pub fn is_valid(cetag: &str) -> bool {
    cetag == "CAMSDA"
}

pub fn build(cel: usize, payload: &[u8]) -> Result<Vec<ParsedField>, TreError> {
    super::read_fixed_body(nitf_types::tre::camsda::FIELDS, cel, payload)
}

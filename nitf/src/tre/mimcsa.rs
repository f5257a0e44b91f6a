//! MIMCSA decoder: straight fixed-schema read over `nitf_types::tre::mimcsa`.

use crate::error::TreError;
use crate::record::ParsedField;

pub fn is_valid(cetag: &str) -> bool {
    cetag == "MIMCSA"
}

pub fn build(cel: usize, payload: &[u8]) -> Result<Vec<ParsedField>, TreError> {
    super::read_fixed_body(nitf_types::tre::mimcsa::FIELDS, cel, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_payload() {
        let err = build(5, b"short").unwrap_err();
        assert!(matches!(err, TreError::UnexpectedEof { .. }));
    }
}

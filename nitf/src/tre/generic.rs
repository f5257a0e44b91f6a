//! The catch-all TRE decoder: always valid, retains the raw `CEDATA`
//! payload without attempting to interpret it. Registered last in
//! [`super::TreRegistry::default`], and reused as the fallback whenever a
//! named decoder's own `build` fails.

use nitf_types::field::FieldKind;
use nitf_types::schema::FieldSchema;

use crate::error::TreError;
use crate::record::ParsedField;

const CEDATA: FieldSchema = FieldSchema::new("CEDATA", 0, FieldKind::UnsignedBinary, "TRE Data");

pub fn is_valid(_cetag: &str) -> bool {
    true
}

pub fn build(_cel: usize, payload: &[u8]) -> Result<Vec<ParsedField>, TreError> {
    let value = CEDATA.kind.decode(payload).map_err(|e| TreError::MalformedField {
        field: "CEDATA",
        reason: e.to_string(),
    })?;
    Ok(vec![ParsedField {
        schema: &CEDATA,
        raw: payload.to_vec(),
        value,
    }])
}

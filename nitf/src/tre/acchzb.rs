//! ACCHZB decoder: `NUM_ACHZ` drives a loop of blank-optional unit/value
//! pairs plus an optional bounding polygon.
//!
//! Present in the upstream source as a fully-formed decoder class that its
//! own default factory never registers (§9); supplemented here per the
//! resolution that the omission was an oversight.

use nitf_types::tre::acchzb;

use crate::cursor::FieldCursor;
use crate::error::TreError;
use crate::record::ParsedField;

pub fn is_valid(cetag: &str) -> bool {
    cetag == "ACCHZB"
}

fn is_blank(field: &ParsedField) -> bool {
    field.value.as_text().map(|t| t.trim().is_empty()).unwrap_or(false)
}

pub fn build(cel: usize, payload: &[u8]) -> Result<Vec<ParsedField>, TreError> {
    let mut cursor = FieldCursor::new(payload);
    let mut fields = Vec::new();

    let num_achz_field = super::read(&mut cursor, &acchzb::NUM_ACHZ)?;
    let num_achz = num_achz_field.value.as_i64().unwrap_or(0).max(0);
    fields.push(num_achz_field);

    for _ in 0..num_achz {
        let uniaah_field = super::read(&mut cursor, &acchzb::UNIAAH_N)?;
        let uniaah_blank = is_blank(&uniaah_field);
        fields.push(uniaah_field);
        if !uniaah_blank {
            fields.push(super::read(&mut cursor, &acchzb::AAH_N)?);
        }

        let uniaph_field = super::read(&mut cursor, &acchzb::UNIAPH_N)?;
        let uniaph_blank = is_blank(&uniaph_field);
        fields.push(uniaph_field);
        if !uniaph_blank {
            fields.push(super::read(&mut cursor, &acchzb::APH_N)?);
        }

        let num_pts_field = super::read(&mut cursor, &acchzb::NUM_PTS_N)?;
        let num_pts_text = num_pts_field.value.as_text().unwrap_or_default().trim().to_string();
        fields.push(num_pts_field);

        if !num_pts_text.is_empty() {
            let num_pts: i64 = num_pts_text.parse().map_err(|_| TreError::MalformedField {
                field: "NUM_PTS_n",
                reason: format!("`{num_pts_text}` is not a decimal point count"),
            })?;
            for _ in 0..num_pts.max(0) {
                fields.push(super::read(&mut cursor, &acchzb::LON_N_M)?);
                fields.push(super::read(&mut cursor, &acchzb::LAT_N_M)?);
            }
        }
    }

    super::check_fully_consumed(&cursor, cel)?;
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_unit_fields_skip_their_values() {
        let mut body = Vec::new();
        body.extend_from_slice(b"01"); // NUM_ACHZ = 1
        body.extend_from_slice(b"   "); // UNIAAH_1 blank
        body.extend_from_slice(b"   "); // UNIAPH_1 blank
        body.extend_from_slice(b"   "); // NUM_PTS_1 blank

        let fields = build(body.len(), &body).unwrap();
        assert!(fields.iter().all(|f| f.name() != "AAH_n"));
        assert!(fields.iter().all(|f| f.name() != "APH_n"));
        assert!(fields.iter().all(|f| f.name() != "LON_n_m"));
    }

    #[test]
    fn populated_region_reads_polygon() {
        let mut body = Vec::new();
        body.extend_from_slice(b"01"); // NUM_ACHZ = 1
        body.extend_from_slice(b"MET"); // UNIAAH_1
        body.extend_from_slice(b"00010"); // AAH_1
        body.extend_from_slice(b"MET"); // UNIAPH_1
        body.extend_from_slice(b"00005"); // APH_1
        body.extend_from_slice(b"1  "); // NUM_PTS_1 = 1 (space-padded text)
        body.extend_from_slice(b"+0000000000000"); // LON_1_1 (15 chars)
        body.extend_from_slice(b"+0000000000000"); // LAT_1_1 (15 chars)

        let fields = build(body.len(), &body).unwrap();
        assert_eq!(fields.iter().filter(|f| f.name() == "LON_n_m").count(), 1);
        assert_eq!(fields.iter().filter(|f| f.name() == "LAT_n_m").count(), 1);
    }
}

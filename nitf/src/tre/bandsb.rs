//! BANDSB decoder: a fixed prefix ending in `EXISTENCE_MASK`, which gates
//! both a trailing "cube" block and every `COUNT` per-band iteration by
//! bit, plus the supplemented `NUM_AUX_B`/`NUM_AUX_C` auxiliary-parameter
//! loops (§4.6 - the upstream source declares these fields but its own
//! `build()` returns before ever reading them).

use nitf_types::bitset::Bitset;
use nitf_types::schema::FieldSchema;
use nitf_types::tre::bandsb;

use crate::cursor::FieldCursor;
use crate::error::TreError;
use crate::record::ParsedField;

pub fn is_valid(cetag: &str) -> bool {
    cetag == "BANDSB"
}

/// Reads one schema slice, skipping any field whose `mask_bit` is set but
/// absent from `mask`.
fn read_masked(
    cursor: &mut FieldCursor,
    schemas: &'static [FieldSchema],
    mask: &Bitset,
    fields: &mut Vec<ParsedField>,
) -> Result<(), TreError> {
    for schema in schemas {
        let gated = match schema.mask_bit {
            Some(bit) => mask.get(bit),
            None => true,
        };
        if gated {
            fields.push(super::read(cursor, schema)?);
        }
    }
    Ok(())
}

fn read_auxiliary_params(
    cursor: &mut FieldCursor,
    count: i64,
    format_field: &'static FieldSchema,
    unit_field: &'static FieldSchema,
    int_field: &'static FieldSchema,
    real_field: &'static FieldSchema,
    text_field: &'static FieldSchema,
    fields: &mut Vec<ParsedField>,
) -> Result<(), TreError> {
    for _ in 0..count.max(0) {
        let format = super::read(cursor, format_field)?;
        let code = format.value.as_text().unwrap_or_default().trim().to_string();
        fields.push(format);
        fields.push(super::read(cursor, unit_field)?);

        match code.as_str() {
            "N" => fields.push(super::read(cursor, int_field)?),
            "R" => fields.push(super::read(cursor, real_field)?),
            "A" => fields.push(super::read(cursor, text_field)?),
            other => {
                return Err(TreError::MalformedField {
                    field: format_field.name,
                    reason: format!("unrecognized auxiliary parameter format code `{other}`"),
                });
            }
        }
    }
    Ok(())
}

pub fn build(cel: usize, payload: &[u8]) -> Result<Vec<ParsedField>, TreError> {
    let mut cursor = FieldCursor::new(payload);
    let mut fields = Vec::new();

    let count_field = super::read(&mut cursor, &bandsb::COUNT)?;
    let count = count_field.value.as_i64().unwrap_or(0).max(0);
    fields.push(count_field);

    for schema in bandsb::PREFIX {
        fields.push(super::read(&mut cursor, schema)?);
    }

    let mask_field = super::read(&mut cursor, &bandsb::EXISTENCE_MASK)?;
    let mask = match mask_field.value {
        nitf_types::field::FieldValue::Uint32(v) => Bitset::from_u32(v),
        _ => Bitset::new(),
    };
    fields.push(mask_field);

    read_masked(&mut cursor, bandsb::CUBE_FIELDS, &mask, &mut fields)?;

    for _ in 0..count {
        read_masked(&mut cursor, bandsb::BAND_FIELDS, &mask, &mut fields)?;
    }

    if mask.get(bandsb::NUM_AUX_B.mask_bit.expect("NUM_AUX_B is always mask-gated")) {
        let num_aux_b_field = super::read(&mut cursor, &bandsb::NUM_AUX_B)?;
        let num_aux_b = num_aux_b_field.value.as_i64().unwrap_or(0);
        fields.push(num_aux_b_field);
        read_auxiliary_params(
            &mut cursor,
            num_aux_b,
            &bandsb::BAPF_M,
            &bandsb::UBAP_M,
            &bandsb::APN_M_N,
            &bandsb::APR_M_N,
            &bandsb::APA_M_N,
            &mut fields,
        )?;
    }

    if mask.get(bandsb::NUM_AUX_C.mask_bit.expect("NUM_AUX_C is always mask-gated")) {
        let num_aux_c_field = super::read(&mut cursor, &bandsb::NUM_AUX_C)?;
        let num_aux_c = num_aux_c_field.value.as_i64().unwrap_or(0);
        fields.push(num_aux_c_field);
        read_auxiliary_params(
            &mut cursor,
            num_aux_c,
            &bandsb::CAPF_K,
            &bandsb::UCAP_K,
            &bandsb::APN_K,
            &bandsb::APR_K,
            &bandsb::APA_K,
            &mut fields,
        )?;
    }

    super::check_fully_consumed(&cursor, cel)?;
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_gates_cube_and_band_fields() {
        let mut body = Vec::new();
        body.extend_from_slice(b"00001"); // COUNT = 1
        body.extend_from_slice(b"RADIANCE                "); // RADIOMETRIC_QUANTITY, 24
        body.push(b'M'); // RADIOMETRIC_QUANTITY_UNIT
        body.extend_from_slice(&1.0f32.to_be_bytes()); // SCALE_FACTOR
        body.extend_from_slice(&0.0f32.to_be_bytes()); // ADDITIVE_FACTOR
        body.extend_from_slice(b"0000000"); // ROW_GSD
        body.push(b'M'); // ROW_GSD_UNIT
        body.extend_from_slice(b"0000000"); // COL_GSD
        body.push(b'M'); // COL_GSD_UNIT
        body.extend_from_slice(b"0000000"); // SPT_RESP_ROW
        body.push(b'M'); // SPT_RESP_UNIT_ROW
        body.extend_from_slice(b"0000000"); // SPT_RESP_COL
        body.push(b'M'); // SPT_RESP_UNIT_COL
        body.extend_from_slice(&[b' '; 48]); // DATA_FLD_1
        body.extend_from_slice(&0u32.to_be_bytes()); // EXISTENCE_MASK: no bits set
        // no cube fields, no band fields, no aux params (all mask bits 0)

        let fields = build(body.len(), &body).unwrap();
        assert!(fields.iter().all(|f| f.name() != "DIAMETER"));
        assert!(fields.iter().all(|f| f.name() != "BANDID_n"));
    }
}

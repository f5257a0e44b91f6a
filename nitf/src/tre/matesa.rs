//! MATESA decoder: `NUM_GROUPS` drives a loop of relationship groups, each
//! with its own `NUM_MATES_n`-driven loop of mate references.

use nitf_types::tre::matesa;

use crate::cursor::FieldCursor;
use crate::error::TreError;
use crate::record::ParsedField;

pub fn is_valid(cetag: &str) -> bool {
    cetag == "MATESA"
}

pub fn build(cel: usize, payload: &[u8]) -> Result<Vec<ParsedField>, TreError> {
    let mut cursor = FieldCursor::new(payload);
    let mut fields = Vec::new();

    fields.push(super::read(&mut cursor, &matesa::CUR_SOURCE)?);
    fields.push(super::read(&mut cursor, &matesa::CUR_MATE_TYPE)?);

    let cur_file_id_len_field = super::read(&mut cursor, &matesa::CUR_FILE_ID_LEN)?;
    let cur_file_id_len = cur_file_id_len_field.value.as_i64().unwrap_or(0).max(0) as usize;
    fields.push(cur_file_id_len_field);
    fields.push(super::read_sized(&mut cursor, &matesa::CUR_FILE_ID, cur_file_id_len)?);

    let num_groups_field = super::read(&mut cursor, &matesa::NUM_GROUPS)?;
    let num_groups = num_groups_field.value.as_i64().unwrap_or(0).max(0);
    fields.push(num_groups_field);

    for _ in 0..num_groups {
        fields.push(super::read(&mut cursor, &matesa::RELATIONSHIP_N)?);

        let num_mates_field = super::read(&mut cursor, &matesa::NUM_MATES_N)?;
        let num_mates = num_mates_field.value.as_i64().unwrap_or(0).max(0);
        fields.push(num_mates_field);

        for _ in 0..num_mates {
            fields.push(super::read(&mut cursor, &matesa::SOURCE_N_M)?);
            fields.push(super::read(&mut cursor, &matesa::MATE_TYPE_N_M)?);

            let mate_id_len_field = super::read(&mut cursor, &matesa::MATE_ID_LEN_N_M)?;
            let mate_id_len = mate_id_len_field.value.as_i64().unwrap_or(0).max(0) as usize;
            fields.push(mate_id_len_field);
            fields.push(super::read_sized(&mut cursor, &matesa::MATE_ID_N_M, mate_id_len)?);
        }
    }

    super::check_fully_consumed(&cursor, cel)?;
    Ok(fields)
}

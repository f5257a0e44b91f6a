//! ENGRDA decoder: `RECNT` drives a loop of eight-field groups, each
//! followed by an `ENGMTXC_n * ENGMTXR_n` matrix of `ENGDTS_n`-wide
//! elements.

use nitf_types::tre::engrda;

use crate::cursor::FieldCursor;
use crate::error::TreError;
use crate::record::ParsedField;

pub fn is_valid(cetag: &str) -> bool {
    cetag == "ENGRDA"
}

pub fn build(cel: usize, payload: &[u8]) -> Result<Vec<ParsedField>, TreError> {
    let mut cursor = FieldCursor::new(payload);
    let mut fields = Vec::new();

    fields.push(super::read(&mut cursor, &engrda::RESRC)?);
    let recnt_field = super::read(&mut cursor, &engrda::RECNT)?;
    let recnt = recnt_field.value.as_i64().unwrap_or(0).max(0);
    fields.push(recnt_field);

    for _ in 0..recnt {
        let englen_field = super::read(&mut cursor, &engrda::ENGLN_N)?;
        let englen = englen_field.value.as_i64().unwrap_or(0).max(0) as usize;
        fields.push(englen_field);
        fields.push(super::read_sized(&mut cursor, &engrda::ENGLBL_N, englen)?);

        let mtxc_field = super::read(&mut cursor, &engrda::ENGMTXC_N)?;
        let mtxc = mtxc_field.value.as_i64().unwrap_or(0).max(0);
        fields.push(mtxc_field);

        let mtxr_field = super::read(&mut cursor, &engrda::ENGMTXR_N)?;
        let mtxr = mtxr_field.value.as_i64().unwrap_or(0).max(0);
        fields.push(mtxr_field);

        fields.push(super::read(&mut cursor, &engrda::ENGTYP_N)?);

        let dts_field = super::read(&mut cursor, &engrda::ENGDTS_N)?;
        let dts = dts_field.value.as_i64().unwrap_or(0).max(0) as usize;
        fields.push(dts_field);

        fields.push(super::read(&mut cursor, &engrda::ENGDATU_N)?);
        fields.push(super::read(&mut cursor, &engrda::ENGDATC_N)?);

        let element_count = mtxc.saturating_mul(mtxr);
        for _ in 0..element_count {
            fields.push(super::read_sized(&mut cursor, &engrda::ENGDATA_N, dts)?);
        }
    }

    super::check_fully_consumed(&cursor, cel)?;
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_record_one_by_one_matrix() {
        let mut body = b"ENGINEERING SOURCE  ".to_vec(); // RESRC, 20 bytes
        body.extend_from_slice(b"001"); // RECNT
        body.extend_from_slice(b"03"); // ENGLN_1
        body.extend_from_slice(b"LBL"); // ENGLBL_1
        body.extend_from_slice(b"0001"); // ENGMTXC_1
        body.extend_from_slice(b"0001"); // ENGMTXR_1
        body.extend_from_slice(b"I"); // ENGTYP_1
        body.extend_from_slice(b"1"); // ENGDTS_1
        body.extend_from_slice(b"CT"); // ENGDATU_1
        body.extend_from_slice(b"00000001"); // ENGDATC_1
        body.push(0xAB); // one ENGDATA element, 1 byte wide

        let fields = build(body.len(), &body).unwrap();
        let data = fields.iter().filter(|f| f.name() == "ENGDATA_n").collect::<Vec<_>>();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].raw, vec![0xAB]);
    }
}

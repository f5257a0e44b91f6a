//! CCINFA decoder: `NUMCODE` drives a loop of length-prefixed code/URN pairs
//! plus a conditional detail block.

use nitf_types::tre::ccinfa;

use crate::cursor::FieldCursor;
use crate::error::TreError;
use crate::record::ParsedField;

pub fn is_valid(cetag: &str) -> bool {
    cetag == "CCINFA"
}

pub fn build(cel: usize, payload: &[u8]) -> Result<Vec<ParsedField>, TreError> {
    let mut cursor = FieldCursor::new(payload);
    let mut fields = Vec::new();

    let numcode_field = super::read(&mut cursor, &ccinfa::NUMCODE)?;
    let numcode = numcode_field.value.as_i64().unwrap_or(0).max(0);
    fields.push(numcode_field);

    for _ in 0..numcode {
        let code_len_field = super::read(&mut cursor, &ccinfa::CODE_LEN_N)?;
        let code_len = code_len_field.value.as_i64().unwrap_or(0).max(0) as usize;
        fields.push(code_len_field);
        fields.push(super::read_sized(&mut cursor, &ccinfa::CODE_N, code_len)?);

        fields.push(super::read(&mut cursor, &ccinfa::EQTYPE_N)?);

        let esurn_len_field = super::read(&mut cursor, &ccinfa::ESURN_LEN_N)?;
        let esurn_len = esurn_len_field.value.as_i64().unwrap_or(0).max(0) as usize;
        fields.push(esurn_len_field);
        fields.push(super::read_sized(&mut cursor, &ccinfa::ESURN_N, esurn_len)?);

        let detail_len_field = super::read(&mut cursor, &ccinfa::DETAIL_LEN_N)?;
        let detail_len = detail_len_field.value.as_i64().unwrap_or(0).max(0) as usize;
        fields.push(detail_len_field);

        if detail_len > 0 {
            fields.push(super::read(&mut cursor, &ccinfa::DETAIL_CMPR_N)?);
            fields.push(super::read_sized(&mut cursor, &ccinfa::DETAIL_N, detail_len)?);
        }
    }

    super::check_fully_consumed(&cursor, cel)?;
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(cursor: &[u8]) -> Vec<u8> {
        cursor.to_vec()
    }

    #[test]
    fn one_code_no_detail() {
        let mut body = field(b"001");
        body.extend_from_slice(b"4");
        body.extend_from_slice(b"ISO3");
        body.extend_from_slice(b"E");
        body.extend_from_slice(b"05");
        body.extend_from_slice(b"urn:1");
        body.extend_from_slice(b"00000");

        let fields = build(body.len(), &body).unwrap();
        assert_eq!(fields[0].value.as_i64(), Some(1));
        let code = fields.iter().find(|f| f.name() == "CODE_n").unwrap();
        assert_eq!(code.value.as_text(), Some("ISO3"));
    }
}

//! The NITF Image Subheader: fixed prefix with `NICOM`/`IC`/`NBANDS`-driven
//! expansions, a per-band block with conditional LUT data, a fixed suffix,
//! and the `UDID`/`IXSHD` TRE slots.

use std::collections::BTreeMap;
use std::fmt;

use nitf_types::schema::FieldSchema;
use nitf_types::tags::image_subheader as schema;

use crate::cursor::{CursorError, FieldCursor};
use crate::error::NitfError;
use crate::record::{ParsedField, flatten_kvp, get_nth};
use crate::tre::{Tre, TreRegistry, extract_sequential};

/// A parsed Image Subheader.
#[derive(Clone, Debug)]
pub struct ImageSubheader {
    fields: Vec<ParsedField>,
    /// TREs carried in the subheader's User-Defined Image Data slot.
    pub udid: Vec<Tre>,
    /// TREs carried in the subheader's Image Extended Subheader Data slot.
    pub ixshd: Vec<Tre>,
}

impl ImageSubheader {
    /// The `index`-th field named `name`.
    pub fn get(&self, name: &str, index: usize) -> Option<&ParsedField> {
        get_nth(&self.fields, name, index)
    }

    /// A flat `name -> display string` map, with nested TREs namespaced
    /// under `udid.<i>.<cetag>.<field>` / `ixshd.<i>.<cetag>.<field>`.
    pub fn as_kvp(&self) -> BTreeMap<String, String> {
        let mut out = flatten_kvp(&self.fields);
        for (i, tre) in self.udid.iter().enumerate() {
            for (k, v) in tre.as_kvp() {
                out.insert(format!("udid.{i}.{}.{k}", tre.cetag()), v);
            }
        }
        for (i, tre) in self.ixshd.iter().enumerate() {
            for (k, v) in tre.as_kvp() {
                out.insert(format!("ixshd.{i}.{}.{k}", tre.cetag()), v);
            }
        }
        out
    }

    /// The image's compression code (`IC`), trimmed.
    pub fn compression_code(&self) -> String {
        self.get("IC", 0)
            .and_then(|f| f.value.as_text())
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    /// A placeholder hook for future semantic validation, mirroring the
    /// source's own placeholder `validate()` for this record type (§4.4).
    pub fn validate(&self) -> Vec<NitfError> {
        Vec::new()
    }
}

impl fmt::Display for ImageSubheader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image Subheader:")?;
        for field in &self.fields {
            writeln!(f, "  {}: {}", field.schema.label, field.display_string())?;
        }
        for tre in &self.udid {
            write!(f, "{}", tre.to_log_string(2))?;
        }
        for tre in &self.ixshd {
            write!(f, "{}", tre.to_log_string(2))?;
        }
        Ok(())
    }
}

fn read(cursor: &mut FieldCursor, schema: &'static FieldSchema) -> Result<ParsedField, NitfError> {
    cursor.read(schema).map_err(|e| map_cursor_error(schema.name, e))
}

fn read_sized(cursor: &mut FieldCursor, schema: &'static FieldSchema, width: usize) -> Result<ParsedField, NitfError> {
    cursor.read_sized(schema, width).map_err(|e| map_cursor_error(schema.name, e))
}

fn map_cursor_error(field: &'static str, e: CursorError) -> NitfError {
    match e {
        CursorError::Eof => NitfError::UnexpectedEof { field },
        CursorError::Malformed(reason) => NitfError::MalformedField { field, reason },
    }
}

fn read_tre_slot(
    cursor: &mut FieldCursor,
    declared_len: i64,
    overflow_schema: &'static FieldSchema,
    slot_schema: &'static FieldSchema,
    registry: &TreRegistry,
) -> Result<(Option<ParsedField>, Option<ParsedField>, Vec<Tre>), NitfError> {
    if declared_len <= 0 {
        return Ok((None, None, Vec::new()));
    }
    let overflow_field = read(cursor, overflow_schema)?;
    let tre_len = (declared_len - 3).max(0) as usize;
    let slot_field = read_sized(cursor, slot_schema, tre_len)?;
    let tres = extract_sequential(&slot_field.raw, registry)?;
    Ok((Some(overflow_field), Some(slot_field), tres))
}

/// Parses an Image Subheader off the front of `buf`.
pub fn parse(buf: &[u8], registry: &TreRegistry) -> Result<ImageSubheader, NitfError> {
    let mut cursor = FieldCursor::new(buf);
    let mut fields = Vec::new();

    for field_schema in schema::FIXED_PREFIX {
        let field = read(&mut cursor, field_schema)?;
        let name = field.name();

        match name {
            "NICOM" => {
                let nicom = field.value.as_i64().unwrap_or(0).max(0);
                fields.push(field);
                for _ in 0..nicom {
                    fields.push(read(&mut cursor, &schema::ICOM_N)?);
                }
            }
            "IC" => {
                let ic = field.value.as_text().unwrap_or_default().trim().to_string();
                fields.push(field);
                if ic != "NC" && ic != "NM" {
                    fields.push(read(&mut cursor, &schema::COMRAT)?);
                }
            }
            "NBANDS" => {
                let declared = field.value.as_i64().unwrap_or(0).max(0);
                fields.push(field);

                let nbands = if declared == 0 {
                    let xbands_field = read(&mut cursor, &schema::XBANDS)?;
                    let n = xbands_field.value.as_i64().unwrap_or(0).max(0);
                    fields.push(xbands_field);
                    n
                } else {
                    declared
                };

                for _ in 0..nbands {
                    fields.push(read(&mut cursor, &schema::IREPBAND_N)?);
                    fields.push(read(&mut cursor, &schema::ISUBCAT_N)?);
                    fields.push(read(&mut cursor, &schema::IFC_N)?);
                    fields.push(read(&mut cursor, &schema::IMFLT_N)?);

                    let nluts_field = read(&mut cursor, &schema::NLUTS_N)?;
                    let nluts = nluts_field.value.as_i64().unwrap_or(0).max(0);
                    fields.push(nluts_field);

                    if nluts > 0 {
                        let nelut_field = read(&mut cursor, &schema::NELUT_N)?;
                        let nelut = nelut_field.value.as_i64().unwrap_or(0).max(0);
                        fields.push(nelut_field);

                        let lutd_width = (nluts * nelut).max(0) as usize;
                        fields.push(read_sized(&mut cursor, &schema::LUTD_N_M, lutd_width)?);
                    }
                }
            }
            _ => fields.push(field),
        }
    }

    for field_schema in schema::FIXED_SUFFIX {
        fields.push(read(&mut cursor, field_schema)?);
    }

    let udidl = fields.last().expect("FIXED_SUFFIX ends in UDIDL").value.as_i64().unwrap_or(0).max(0);
    let (overflow, slot, udid) = read_tre_slot(&mut cursor, udidl, &schema::UDOFL, &schema::UDID, registry)?;
    if let Some(f) = overflow {
        fields.push(f);
    }
    if let Some(f) = slot {
        fields.push(f);
    }

    let ixshdl_field = read(&mut cursor, &schema::IXSHDL)?;
    let ixshdl = ixshdl_field.value.as_i64().unwrap_or(0).max(0);
    fields.push(ixshdl_field);
    let (overflow, slot, ixshd) = read_tre_slot(&mut cursor, ixshdl, &schema::IXSOFL, &schema::IXSHD, registry)?;
    if let Some(f) = overflow {
        fields.push(f);
    }
    if let Some(f) = slot {
        fields.push(f);
    }

    log::debug!(
        "parsed Image Subheader: {} fields, {} UDID TREs, {} IXSHD TREs",
        fields.len(),
        udid.len(),
        ixshd.len()
    );

    Ok(ImageSubheader { fields, udid, ixshd })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_subheader_bytes() -> Vec<u8> {
        let mut b = Vec::new();
        b.extend_from_slice(b"IM"); // IM
        b.extend_from_slice(&[b' '; 10]); // IID1
        b.extend_from_slice(b"20260101000000"); // IDATIM
        b.extend_from_slice(&[b' '; 17]); // TGTID
        b.extend_from_slice(&[b' '; 80]); // IID2
        b.push(b'U'); // ISCLAS
        b.extend_from_slice(&[b' '; 2]); // ISCLSY
        b.extend_from_slice(&[b' '; 11]); // ISCODE
        b.extend_from_slice(&[b' '; 2]); // ISCTLH
        b.extend_from_slice(&[b' '; 20]); // ISREL
        b.extend_from_slice(&[b' '; 2]); // ISDCTP
        b.extend_from_slice(&[b' '; 8]); // ISDCDT
        b.extend_from_slice(&[b' '; 4]); // ISDCXM
        b.extend_from_slice(&[b' '; 1]); // ISDG
        b.extend_from_slice(&[b' '; 8]); // ISDGDT
        b.extend_from_slice(&[b' '; 43]); // ISCLTX
        b.extend_from_slice(&[b' '; 1]); // ISCATP
        b.extend_from_slice(&[b' '; 40]); // ISCAUT
        b.extend_from_slice(&[b' '; 1]); // ISCRSN
        b.extend_from_slice(&[b' '; 8]); // ISSRDT
        b.extend_from_slice(&[b' '; 15]); // ISCTLN
        b.push(b'0'); // ENCRYP
        b.extend_from_slice(&[b' '; 42]); // ISORCE
        b.extend_from_slice(b"00000010"); // NROWS
        b.extend_from_slice(b"00000010"); // NCOLS
        b.extend_from_slice(b"INT"); // PVTYPE
        b.extend_from_slice(b"MONO    "); // IREP
        b.extend_from_slice(b"VIS     "); // ICAT
        b.extend_from_slice(b"08"); // ABPP
        b.push(b'R'); // PJUST
        b.push(b'G'); // ICORDS
        b.extend_from_slice(&[b' '; 60]); // IGEOLO
        b.extend_from_slice(b"0"); // NICOM
        b.extend_from_slice(b"NC"); // IC (no COMRAT)
        b.extend_from_slice(b"1"); // NBANDS
        // one band:
        b.extend_from_slice(b"M "); // IREPBAND_1
        b.extend_from_slice(&[b' '; 6]); // ISUBCAT_1
        b.push(b'N'); // IFC_1
        b.extend_from_slice(&[b' '; 3]); // IMFLT_1
        b.extend_from_slice(b"0"); // NLUTS_1 (no LUT)
        // FIXED_SUFFIX:
        b.extend_from_slice(b"0"); // ISYNC
        b.push(b'B'); // IMODE
        b.extend_from_slice(b"0001"); // NBPR
        b.extend_from_slice(b"0001"); // NBPC
        b.extend_from_slice(b"0010"); // NPPBH
        b.extend_from_slice(b"0010"); // NPPBV
        b.extend_from_slice(b"08"); // NBPP
        b.extend_from_slice(b"000"); // IDLVL
        b.extend_from_slice(b"000"); // IALVL
        b.extend_from_slice(&[b' '; 10]); // ILOC
        b.extend_from_slice(b"1.0 "); // IMAG
        b.extend_from_slice(b"00000"); // UDIDL
        b.extend_from_slice(b"00000"); // IXSHDL
        b
    }

    #[test]
    fn parses_minimal_subheader_with_one_uncompressed_band() {
        let bytes = minimal_subheader_bytes();
        let registry = TreRegistry::default();
        let subheader = parse(&bytes, &registry).unwrap();
        assert_eq!(subheader.compression_code(), "NC");
        assert!(subheader.get("COMRAT", 0).is_none());
        assert_eq!(subheader.get("IREPBAND_n", 0).unwrap().value.as_text(), Some("M"));
        assert!(subheader.udid.is_empty());
        assert!(subheader.ixshd.is_empty());
    }
}

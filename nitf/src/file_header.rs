//! The NITF File Header: fixed prefix, five count-driven segment-descriptor
//! repeat groups, and the `UDHD`/`XHD` TRE slots.

use std::collections::BTreeMap;
use std::fmt;

use nitf_types::schema::FieldSchema;
use nitf_types::tags::file_header as schema;

use crate::cursor::{CursorError, FieldCursor};
use crate::error::NitfError;
use crate::record::{ParsedField, flatten_kvp, get_nth};
use crate::tre::{Tre, TreRegistry, extract_sequential};

/// A parsed File Header.
#[derive(Clone, Debug)]
pub struct FileHeader {
    fields: Vec<ParsedField>,
    /// TREs carried in the header's User-Defined Header Data slot.
    pub udhd: Vec<Tre>,
    /// TREs carried in the header's Extended Header Data slot.
    pub xhd: Vec<Tre>,
}

impl FileHeader {
    /// The `index`-th field named `name` (fields repeat: `LISH_n`, `LI_n`, ...).
    pub fn get(&self, name: &str, index: usize) -> Option<&ParsedField> {
        get_nth(&self.fields, name, index)
    }

    /// A flat `name -> display string` map, with nested TREs namespaced
    /// under `udhd.<i>.<cetag>.<field>` / `xhd.<i>.<cetag>.<field>`.
    pub fn as_kvp(&self) -> BTreeMap<String, String> {
        let mut out = flatten_kvp(&self.fields);
        for (i, tre) in self.udhd.iter().enumerate() {
            for (k, v) in tre.as_kvp() {
                out.insert(format!("udhd.{i}.{}.{k}", tre.cetag()), v);
            }
        }
        for (i, tre) in self.xhd.iter().enumerate() {
            for (k, v) in tre.as_kvp() {
                out.insert(format!("xhd.{i}.{}.{k}", tre.cetag()), v);
            }
        }
        out
    }

    /// Every `(subheader_length, segment_length)` pair declared for the
    /// file's image segments, in order.
    pub fn image_segment_descriptors(&self) -> Vec<(i64, i64)> {
        self.repeat_group_lengths("LISH_n", "LI_n")
    }

    fn repeat_group_lengths(&self, length_tag: &str, data_tag: &str) -> Vec<(i64, i64)> {
        let lengths = self.fields.iter().filter(|f| f.name() == length_tag);
        let data = self.fields.iter().filter(|f| f.name() == data_tag);
        lengths
            .zip(data)
            .map(|(l, d)| (l.value.as_i64().unwrap_or(0), d.value.as_i64().unwrap_or(0)))
            .collect()
    }

    /// Checks `FL` against the file's actual size on disk (§3 invariant 3).
    /// Does not abort construction - callers decide what to do with the
    /// result (§7's propagation policy: semantic errors are collected, not
    /// raised).
    pub fn validate(&self, file_size: u64) -> Vec<NitfError> {
        let mut errors = Vec::new();
        if let Some(fl) = self.get("FL", 0) {
            if let Some(expected) = fl.value.as_i64() {
                if expected < 0 || expected as u64 != file_size {
                    log::warn!("FL declared {expected}, file is {file_size} bytes");
                    errors.push(NitfError::FileLengthMismatch {
                        expected,
                        actual: file_size,
                    });
                }
            }
        }
        errors
    }
}

impl fmt::Display for FileHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File Header:")?;
        for field in &self.fields {
            writeln!(f, "  {}: {}", field.schema.label, field.display_string())?;
        }
        for tre in &self.udhd {
            write!(f, "{}", tre.to_log_string(2))?;
        }
        for tre in &self.xhd {
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

/// Reads one of the four `*OFL`-gated TRE slots (`UDHD`/`XHD`/`UDID`/`IXSHD`):
/// if `declared_len` is non-zero, reads the 3-byte overflow indicator, then
/// reads the remaining `declared_len - 3` bytes as the slot field itself
/// (under `slot_schema`'s name, per §4.3) before handing those same bytes to
/// sequential TRE extraction (§9's resolution: uniform across all four slots).
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

/// Parses a File Header off the front of `buf`.
pub fn parse(buf: &[u8], registry: &TreRegistry) -> Result<FileHeader, NitfError> {
    let mut cursor = FieldCursor::new(buf);
    let mut fields = Vec::new();
    let mut udhd = Vec::new();
    let mut xhd = Vec::new();

    for field_schema in schema::FIXED_PREFIX {
        let field = read(&mut cursor, field_schema)?;
        let name = field.name();
        let count = field.value.as_i64().unwrap_or(0).max(0);
        fields.push(field);

        match name {
            "NUMI" => {
                for _ in 0..count {
                    fields.push(read(&mut cursor, &schema::LISH_N)?);
                    fields.push(read(&mut cursor, &schema::LI_N)?);
                }
            }
            "NUMS" => {
                for _ in 0..count {
                    fields.push(read(&mut cursor, &schema::LSSH_N)?);
                    fields.push(read(&mut cursor, &schema::LS_N)?);
                }
            }
            "NUMT" => {
                for _ in 0..count {
                    fields.push(read(&mut cursor, &schema::LTSH_N)?);
                    fields.push(read(&mut cursor, &schema::LT_N)?);
                }
            }
            "NUMDES" => {
                for _ in 0..count {
                    fields.push(read(&mut cursor, &schema::LDSH_N)?);
                    fields.push(read(&mut cursor, &schema::LD_N)?);
                }
            }
            "NUM_RES" => {
                for _ in 0..count {
                    fields.push(read(&mut cursor, &schema::LRESH_N)?);
                    fields.push(read(&mut cursor, &schema::LRE_N)?);
                }
            }
            "UDHDL" => {
                let (overflow, slot, tres) = read_tre_slot(&mut cursor, count, &schema::UDHOFL, &schema::UDHD, registry)?;
                if let Some(f) = overflow {
                    fields.push(f);
                }
                if let Some(f) = slot {
                    fields.push(f);
                }
                udhd = tres;

                let xhdl_field = read(&mut cursor, &schema::XHDL)?;
                let xhdl = xhdl_field.value.as_i64().unwrap_or(0).max(0);
                fields.push(xhdl_field);

                let (overflow, slot, tres) = read_tre_slot(&mut cursor, xhdl, &schema::XHDLOFL, &schema::XHD, registry)?;
                if let Some(f) = overflow {
                    fields.push(f);
                }
                if let Some(f) = slot {
                    fields.push(f);
                }
                xhd = tres;
            }
            _ => {}
        }
    }

    log::debug!(
        "parsed File Header: {} fields, {} UDHD TREs, {} XHD TREs",
        fields.len(),
        udhd.len(),
        xhd.len()
    );

    Ok(FileHeader { fields, udhd, xhd })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_header_bytes() -> Vec<u8> {
        let mut b = Vec::new();
        b.extend_from_slice(b"NITF"); // FHDR
        b.extend_from_slice(b"02.10"); // FVER
        b.extend_from_slice(b"03"); // CLEVEL
        b.extend_from_slice(b"BF01"); // STYPE
        b.extend_from_slice(&[b' '; 10]); // OSTAID
        b.extend_from_slice(b"20260101000000"); // FDT
        b.extend_from_slice(&[b' '; 80]); // FTITLE
        b.push(b'U'); // FSCLAS
        b.extend_from_slice(&[b' '; 2]); // FSCLSY
        b.extend_from_slice(&[b' '; 11]); // FSCODE
        b.extend_from_slice(&[b' '; 2]); // FSCTLH
        b.extend_from_slice(&[b' '; 20]); // FSREL
        b.extend_from_slice(&[b' '; 2]); // FSDCTP
        b.extend_from_slice(&[b' '; 8]); // FSDCDT
        b.extend_from_slice(&[b' '; 4]); // FSDCXM
        b.extend_from_slice(&[b' '; 1]); // FSDG
        b.extend_from_slice(&[b' '; 8]); // FSDGDT
        b.extend_from_slice(&[b' '; 43]); // FSCLTX
        b.extend_from_slice(&[b' '; 1]); // FSCATP
        b.extend_from_slice(&[b' '; 40]); // FSCAUT
        b.extend_from_slice(&[b' '; 1]); // FSCRSN
        b.extend_from_slice(&[b' '; 8]); // FSSRDT
        b.extend_from_slice(&[b' '; 15]); // FSCTLN
        b.extend_from_slice(b"00001"); // FSCOP
        b.extend_from_slice(b"00001"); // FSCPYS
        b.push(b'0'); // ENCRYPT
        b.extend_from_slice(&[0, 0, 0]); // FBKGC
        b.extend_from_slice(&[b' '; 24]); // ONAME
        b.extend_from_slice(&[b' '; 18]); // OPHONE
        b.extend_from_slice(b"000000000000"); // FL (patched below)
        b.extend_from_slice(b"000404"); // HL
        b.extend_from_slice(b"000"); // NUMI
        b.extend_from_slice(b"000"); // NUMS
        b.extend_from_slice(b"000"); // NUMX
        b.extend_from_slice(b"000"); // NUMT
        b.extend_from_slice(b"000"); // NUMDES
        b.extend_from_slice(b"000"); // NUM_RES
        b.extend_from_slice(b"00000"); // UDHDL
        // no XHDL bytes appended directly; read dynamically only if UDHDL>0
        let total_len = b.len();
        let fl_pos = 4 + 5 + 2 + 4 + 10 + 14 + 80 + 1 + 2 + 11 + 2 + 20 + 2 + 8 + 4 + 1 + 8 + 43 + 1 + 40 + 1 + 8 + 15 + 5 + 5 + 1 + 3 + 24 + 18;
        let fl_text = format!("{total_len:012}");
        b[fl_pos..fl_pos + 12].copy_from_slice(fl_text.as_bytes());
        b
    }

    #[test]
    fn parses_minimum_valid_header() {
        let bytes = minimal_header_bytes();
        let registry = TreRegistry::default();
        let header = parse(&bytes, &registry).unwrap();
        assert_eq!(header.get("FHDR", 0).unwrap().value.as_text(), Some("NITF"));
        assert!(header.udhd.is_empty());
        assert!(header.xhd.is_empty());
        assert!(header.image_segment_descriptors().is_empty());
        assert!(header.validate(bytes.len() as u64).is_empty());
    }

    #[test]
    fn fl_mismatch_is_collected_not_fatal() {
        let bytes = minimal_header_bytes();
        let registry = TreRegistry::default();
        let header = parse(&bytes, &registry).unwrap();
        let errors = header.validate(bytes.len() as u64 + 100);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], NitfError::FileLengthMismatch { .. }));
    }
}

//! The TRE (Tagged Record Extension) subsystem: [`Tre`], [`TreRegistry`],
//! and the per-TRE decoder modules.
//!
//! Every decoder module exports an `is_valid(cetag: &str) -> bool` and a
//! `build(cel: usize, payload: &[u8]) -> Result<Vec<ParsedField>, TreError>`
//! pair, matching the teacher's one-function-per-concern style rather than a
//! trait object per TRE (there is no dynamic dispatch need: the registry
//! holds plain function pointers, selected once at `TreRegistry::default()`
//! construction time, per §9's "no runtime class introspection").

use std::collections::BTreeMap;

use nitf_types::schema::FieldSchema;

use crate::cursor::{CursorError, FieldCursor};
use crate::error::TreError;
use crate::record::{ParsedField, flatten_kvp, get_nth};

pub mod acchzb;
pub mod acftb;
pub mod aimidb;
pub mod bandsb;
pub mod blocka;
pub mod camsda;
pub mod ccinfa;
pub mod csdida;
pub mod engrda;
pub mod generic;
pub mod matesa;
pub mod mimcsa;

/// A fully-parsed Tagged Record Extension.
///
/// `fields[0]`/`fields[1]` are always `CETAG`/`CEL`; the remainder is the
/// decoder-specific body, in wire order.
#[derive(Clone, Debug)]
pub struct Tre {
    fields: Vec<ParsedField>,
}

impl Tre {
    /// This TRE's tag, trimmed (e.g. `"ACFTB"`).
    pub fn cetag(&self) -> String {
        self.fields[0].value.as_text().unwrap_or_default().trim().to_string()
    }

    /// This TRE's declared length (`CEL`).
    pub fn cel(&self) -> i64 {
        self.fields[1].value.as_i64().unwrap_or(0)
    }

    /// The `index`-th field named `name`, if present.
    pub fn get(&self, name: &str, index: usize) -> Option<&ParsedField> {
        get_nth(&self.fields, name, index)
    }

    /// A flat `name -> display string` map of every field in this TRE.
    pub fn as_kvp(&self) -> BTreeMap<String, String> {
        flatten_kvp(&self.fields)
    }

    /// A diagnostic, indented rendering of this TRE's fields.
    pub fn to_log_string(&self, indent: usize) -> String {
        let gap = " ".repeat(indent);
        let mut out = format!("{gap}TRE {}:\n", self.cetag());
        for field in &self.fields {
            out.push_str(&format!(
                "{gap}  {}: {}\n",
                field.schema.label,
                field.display_string()
            ));
        }
        out
    }
}

type Validator = fn(&str) -> bool;
type BodyBuilder = fn(usize, &[u8]) -> Result<Vec<ParsedField>, TreError>;

/// An ordered list of `(name, is_valid, build)` triples; dispatch walks it
/// in insertion order and uses the first match. The catch-all ([`generic`])
/// must be registered last.
pub struct TreRegistry {
    entries: Vec<(&'static str, Validator, BodyBuilder)>,
}

impl TreRegistry {
    /// An empty registry - callers wanting a custom dispatch table start
    /// here and `register` their own decoders.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a decoder to the end of the dispatch list.
    pub fn register(&mut self, name: &'static str, is_valid: Validator, build: BodyBuilder) {
        self.entries.push((name, is_valid, build));
    }

    /// The eleven named TRE decoders (§4.6), ahead of the [`generic`]
    /// catch-all. All eleven are registered here even though the upstream
    /// source's own bootstrap list wires in only four of them - see
    /// DESIGN.md.
    pub fn default() -> Self {
        let mut r = Self::new();
        r.register("ACCHZB", acchzb::is_valid, acchzb::build);
        r.register("ACFTB", acftb::is_valid, acftb::build);
        r.register("AIMIDB", aimidb::is_valid, aimidb::build);
        r.register("BANDSB", bandsb::is_valid, bandsb::build);
        r.register("BLOCKA", blocka::is_valid, blocka::build);
        r.register("CAMSDA", camsda::is_valid, camsda::build);
        r.register("CCINFA", ccinfa::is_valid, ccinfa::build);
        r.register("CSDIDA", csdida::is_valid, csdida::build);
        r.register("ENGRDA", engrda::is_valid, engrda::build);
        r.register("MATESA", matesa::is_valid, matesa::build);
        r.register("MIMCSA", mimcsa::is_valid, mimcsa::build);
        r.register("generic", generic::is_valid, generic::build);
        r
    }

    /// Decodes one TRE's body, given its already-extracted `cetag` (trimmed
    /// text) and payload. Always succeeds: a decoder whose own parse fails
    /// logs a warning and falls back to the [`generic`] catch-all, so that
    /// sibling TREs in the same buffer remain readable (§7's propagation
    /// policy).
    pub fn decode_body(&self, cetag: &str, cel: usize, payload: &[u8]) -> Vec<ParsedField> {
        for (name, is_valid, build) in &self.entries {
            if is_valid(cetag) {
                return match build(cel, payload) {
                    Ok(fields) => fields,
                    Err(err) => {
                        log::warn!(
                            "TRE decoder `{name}` failed for tag `{cetag}`: {err}; \
                            retaining raw CEDATA bytes"
                        );
                        generic::build(cel, payload).unwrap_or_default()
                    }
                };
            }
        }
        unreachable!("`generic::is_valid` always returns true and is registered last")
    }
}

impl Default for TreRegistry {
    fn default() -> Self {
        Self::default()
    }
}

/// Reads one fixed-width field off `cursor`, mapping a cursor failure into a
/// [`TreError`] that names the field.
fn read(cursor: &mut FieldCursor, schema: &'static FieldSchema) -> Result<ParsedField, TreError> {
    cursor.read(schema).map_err(|e| map_cursor_error(schema.name, e))
}

/// Reads a dynamically-sized field off `cursor`.
fn read_sized(
    cursor: &mut FieldCursor,
    schema: &'static FieldSchema,
    width: usize,
) -> Result<ParsedField, TreError> {
    cursor.read_sized(schema, width).map_err(|e| map_cursor_error(schema.name, e))
}

fn map_cursor_error(field: &'static str, e: CursorError) -> TreError {
    match e {
        CursorError::Eof => TreError::UnexpectedEof { field },
        CursorError::Malformed(reason) => TreError::MalformedField { field, reason },
    }
}

/// Fails unless `cursor` consumed exactly `declared` (`CEL`) bytes -
/// §3 invariant 6 / §8 property 5.
fn check_fully_consumed(cursor: &FieldCursor, declared: usize) -> Result<(), TreError> {
    if cursor.consumed() != declared {
        return Err(TreError::InvariantViolation {
            consumed: cursor.consumed(),
            declared,
        });
    }
    Ok(())
}

/// Parses a straight fixed-schema TRE body: read every field in `schemas`,
/// in order, off `payload`, then check `cel` was consumed exactly.
///
/// Shared by ACFTB, AIMIDB, BLOCKA, CSDIDA, MIMCSA, and CAMSDA's degenerate
/// three-counter body (§4.6).
fn read_fixed_body(
    schemas: &'static [FieldSchema],
    cel: usize,
    payload: &[u8],
) -> Result<Vec<ParsedField>, TreError> {
    let mut cursor = FieldCursor::new(payload);
    let mut fields = Vec::with_capacity(schemas.len());
    for schema in schemas {
        fields.push(read(&mut cursor, schema)?);
    }
    check_fully_consumed(&cursor, cel)?;
    Ok(fields)
}

/// Extracts every TRE packed into one UDHD/XHD/UDID/IXSHD buffer.
///
/// Reads `(CETAG: 6, CEL: 5, CEDATA: CEL)` repeatedly until the buffer is
/// exhausted. A declared `CEL` longer than the remaining buffer is a
/// [`crate::error::NitfError::TruncatedTre`].
pub fn extract_sequential(
    buf: &[u8],
    registry: &TreRegistry,
) -> Result<Vec<Tre>, crate::error::NitfError> {
    use crate::error::NitfError;

    let mut cursor = FieldCursor::new(buf);
    let mut out = Vec::new();

    while cursor.remaining() > 0 {
        let cetag_bytes = cursor
            .take_raw(nitf_types::tre::CETAG.width)
            .map_err(|_| NitfError::UnexpectedEof { field: "CETAG" })?
            .to_vec();
        let cel_bytes = cursor
            .take_raw(nitf_types::tre::CEL.width)
            .map_err(|_| NitfError::UnexpectedEof { field: "CEL" })?
            .to_vec();

        let (cetag_field, cel_field) = build_header_fields(&cetag_bytes, &cel_bytes)
            .map_err(|e| NitfError::MalformedField {
                field: "CETAG/CEL",
                reason: e.to_string(),
            })?;

        let cel_value = cel_field.value.as_i64().unwrap_or(0).max(0) as usize;
        let cetag_trimmed = cetag_field.value.as_text().unwrap_or_default().trim().to_string();

        if cursor.remaining() < cel_value {
            return Err(NitfError::TruncatedTre { cetag: cetag_trimmed });
        }

        let payload = cursor
            .take_raw(cel_value)
            .map_err(|_| NitfError::UnexpectedEof { field: "CEDATA" })?;

        let mut fields = vec![cetag_field, cel_field];
        fields.extend(registry.decode_body(&cetag_trimmed, cel_value, payload));
        out.push(Tre { fields });
    }

    Ok(out)
}

fn build_header_fields(cetag_bytes: &[u8], cel_bytes: &[u8]) -> Result<(ParsedField, ParsedField), TreError> {
    let cetag_schema = &nitf_types::tre::CETAG;
    let cel_schema = &nitf_types::tre::CEL;

    let cetag_value = cetag_schema
        .kind
        .decode(cetag_bytes)
        .map_err(|e| TreError::MalformedField { field: "CETAG", reason: e.to_string() })?;
    let cel_value = cel_schema
        .kind
        .decode(cel_bytes)
        .map_err(|e| TreError::MalformedField { field: "CEL", reason: e.to_string() })?;

    Ok((
        ParsedField { schema: cetag_schema, raw: cetag_bytes.to_vec(), value: cetag_value },
        ParsedField { schema: cel_schema, raw: cel_bytes.to_vec(), value: cel_value },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tre_bytes(cetag: &str, body: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(cetag.as_bytes());
        out.extend_from_slice(format!("{:05}", body.len()).as_bytes());
        out.extend_from_slice(body);
        out
    }

    #[test]
    fn unknown_tre_falls_back_to_generic_and_siblings_still_parse() {
        let registry = TreRegistry::default();
        let mut buf = tre_bytes("ZZZZZZ", b"hello world!");
        buf.extend(tre_bytes("ZZZZZZ", b"second one"));

        let tres = extract_sequential(&buf, &registry).unwrap();
        assert_eq!(tres.len(), 2);
        assert_eq!(tres[0].cetag(), "ZZZZZZ");
        assert_eq!(tres[0].get("CEDATA", 0).unwrap().raw, b"hello world!");
        assert_eq!(tres[1].get("CEDATA", 0).unwrap().raw, b"second one");
    }

    #[test]
    fn truncated_tre_is_an_error() {
        let registry = TreRegistry::default();
        let mut buf = b"ZZZZZZ00020".to_vec();
        buf.extend_from_slice(b"short");

        let err = extract_sequential(&buf, &registry).unwrap_err();
        assert!(matches!(err, crate::error::NitfError::TruncatedTre { .. }));
    }
}

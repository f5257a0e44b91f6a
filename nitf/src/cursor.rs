//! [`FieldCursor`]: the shared byte-consuming primitive behind every
//! record/TRE parse function.
//!
//! Per the spec's design notes (§9), this crate does not implement one
//! generic, schema-table-driven interpreter loop. Instead, matching how the
//! teacher structures each format provider as explicit composed functions
//! over shared primitives (`providers/jpeg/parse.rs`, `providers/gif/block.rs`
//! in the teacher), each record type gets one explicit parse function that
//! calls `FieldCursor` methods in the order its own side-effect table
//! describes. `FieldCursor` supplies the read-fixed/read-dynamic primitives;
//! repetition is an explicit loop over an already-read count, and dynamic
//! widths are taken from an already-bound local variable - no literal size
//! queue or count queue is reified as a data structure.

use nitf_types::field::FieldDecodeError;
use nitf_types::schema::FieldSchema;
use winnow::Parser as _;
use winnow::token::take;

use crate::record::ParsedField;

/// A non-fatal failure reading or decoding one field's bytes.
///
/// Call sites map this into whichever error taxonomy they're scoped to
/// (`NitfError` for File Header/Image Subheader fields, `TreError` inside a
/// TRE decoder).
#[derive(Clone, Debug, PartialEq)]
pub enum CursorError {
    /// The stream had fewer bytes remaining than the field's width.
    Eof,
    /// The bytes didn't decode under the field's kind.
    Malformed(String),
}

impl From<FieldDecodeError> for CursorError {
    fn from(value: FieldDecodeError) -> Self {
        CursorError::Malformed(value.to_string())
    }
}

/// A forward-only cursor over a byte slice, advancing one field at a time.
pub struct FieldCursor<'a> {
    input: &'a [u8],
    consumed: usize,
}

impl<'a> FieldCursor<'a> {
    /// Builds a cursor over the given slice.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, consumed: 0 }
    }

    /// Bytes left unconsumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Total bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Reads and decodes a field at its schema's fixed width.
    ///
    /// Panics (via the `debug_assert`) if called on a dynamic-width schema -
    /// use [`Self::read_sized`] for those, passing the resolved width.
    pub fn read(&mut self, schema: &'static FieldSchema) -> Result<ParsedField, CursorError> {
        debug_assert!(!schema.is_dynamic_width(), "schema `{}` has no fixed width", schema.name);
        self.read_sized(schema, schema.width)
    }

    /// Reads and decodes a field whose width is resolved by the caller (a
    /// preceding length field, or a computed product).
    pub fn read_sized(
        &mut self,
        schema: &'static FieldSchema,
        width: usize,
    ) -> Result<ParsedField, CursorError> {
        let bytes: &[u8] = take(width)
            .parse_next(&mut self.input)
            .map_err(|_: winnow::error::ContextError| CursorError::Eof)?;
        self.consumed += width;

        let value = schema.kind.decode(bytes)?;
        Ok(ParsedField { schema, raw: bytes.to_vec(), value })
    }

    /// Splits off the next `width` raw bytes without decoding them as a
    /// field - used inside a TRE's own body to split off its `CEDATA`
    /// payload once `CETAG`/`CEL` are known.
    pub fn take_raw(&mut self, width: usize) -> Result<&'a [u8], CursorError> {
        take(width)
            .parse_next(&mut self.input)
            .map_err(|_: winnow::error::ContextError| CursorError::Eof)
            .inspect(|bytes: &&[u8]| self.consumed += bytes.len())
    }
}

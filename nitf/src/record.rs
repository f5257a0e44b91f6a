//! [`ParsedField`]: one decoded field, positioned by a [`FieldSchema`].

use nitf_types::field::FieldValue;
use nitf_types::schema::FieldSchema;

/// One field, decoded off the wire.
///
/// Fields are kept in an ordered sequence, not a by-name map, because tags
/// repeat (`LISH_n`, `ICOM_n`, ...); callers index by name *and* occurrence
/// via `get(name, index)` on the owning record.
#[derive(Clone, Debug)]
pub struct ParsedField {
    /// The schema row this field was read against.
    pub schema: &'static FieldSchema,
    /// The exact bytes consumed for this field, pre-decode.
    pub raw: Vec<u8>,
    /// The decoded value.
    pub value: FieldValue,
}

impl ParsedField {
    /// This field's schema name/tag (e.g. `"FL"`, `"LISH_n"`).
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    /// A display-friendly rendering of this field's value, suitable for
    /// `as_kvp()`/diagnostic logging.
    pub fn display_string(&self) -> String {
        self.value.display_string()
    }
}

/// Looks up the `index`-th field named `name` in an ordered field sequence.
///
/// Shared by [`crate::file_header::FileHeader::get`],
/// [`crate::image_subheader::ImageSubheader::get`], and every TRE's `get`.
pub fn get_nth<'a>(fields: &'a [ParsedField], name: &str, index: usize) -> Option<&'a ParsedField> {
    fields.iter().filter(|f| f.name() == name).nth(index)
}

/// Flattens an ordered field sequence into a `name -> display string` map.
///
/// Later occurrences of a repeated tag overwrite earlier ones in the map,
/// same as the teacher's `as_kvp()` helpers that build a single `HashMap`
/// from an ordered list - this is a diagnostic view, not the canonical
/// positional one (`get`/`get_nth` above preserve all occurrences).
pub fn flatten_kvp(fields: &[ParsedField]) -> std::collections::BTreeMap<String, String> {
    let mut out = std::collections::BTreeMap::new();
    for f in fields {
        out.insert(f.name().to_string(), f.display_string());
    }
    out
}

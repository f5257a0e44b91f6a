//! [`FieldSchema`]: the static, read-only row describing one positional
//! field of a File Header, Image Subheader, or TRE.

use crate::field::FieldKind;

/// Static metadata describing one field's position in a record.
///
/// A schema table for a record type is a plain ordered array of these -
/// known at build time, never reflected over at runtime.
#[derive(Clone, Copy, Debug)]
pub struct FieldSchema {
    /// The field's tag, e.g. `"FHDR"`, `"LISH_n"`, `"CETAG"`.
    pub name: &'static str,
    /// Byte width of this field. `0` means the width is resolved at parse
    /// time, either from a preceding length field or from a computed
    /// product (e.g. BANDSB's `LUTD_n_m`).
    pub width: usize,
    /// The field's semantic kind.
    pub kind: FieldKind,
    /// A human-readable label, used in diagnostic logging.
    pub label: &'static str,
    /// For BANDSB fields only: the `EXISTENCE_MASK` bit that gates this
    /// field's presence. `None` means the field is unconditional.
    pub mask_bit: Option<u8>,
}

impl FieldSchema {
    /// Builds an unconditional (non-BANDSB) fixed-width schema row.
    pub const fn new(name: &'static str, width: usize, kind: FieldKind, label: &'static str) -> Self {
        Self {
            name,
            width,
            kind,
            label,
            mask_bit: None,
        }
    }

    /// Builds a BANDSB-style schema row gated on a mask bit.
    pub const fn masked(
        name: &'static str,
        width: usize,
        kind: FieldKind,
        label: &'static str,
        mask_bit: u8,
    ) -> Self {
        Self {
            name,
            width,
            kind,
            label,
            mask_bit: Some(mask_bit),
        }
    }

    /// Whether this field's width must be resolved dynamically at parse
    /// time rather than read straight off the schema.
    pub const fn is_dynamic_width(&self) -> bool {
        self.width == 0
    }
}

//! The NITF image compression code (`IC` field), §6.

/// A NITF image compression code.
///
/// There are 17 variants, mapped `0..17` in declaration order - note there
/// is no `C2`; the source skips straight from `C1` to `C3`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ImageCompression {
    C1 = 0,
    C3 = 1,
    C4 = 2,
    C5 = 3,
    C6 = 4,
    C7 = 5,
    C8 = 6,
    I1 = 7,
    M1 = 8,
    M3 = 9,
    M4 = 10,
    M5 = 11,
    M6 = 12,
    M7 = 13,
    M8 = 14,
    Nc = 15,
    Nm = 16,
}

impl ImageCompression {
    /// All variants, in declaration (ordinal) order.
    pub const ALL: [ImageCompression; 17] = [
        ImageCompression::C1,
        ImageCompression::C3,
        ImageCompression::C4,
        ImageCompression::C5,
        ImageCompression::C6,
        ImageCompression::C7,
        ImageCompression::C8,
        ImageCompression::I1,
        ImageCompression::M1,
        ImageCompression::M3,
        ImageCompression::M4,
        ImageCompression::M5,
        ImageCompression::M6,
        ImageCompression::M7,
        ImageCompression::M8,
        ImageCompression::Nc,
        ImageCompression::Nm,
    ];

    /// This variant's canonical two-letter tag, e.g. `"C1"`, `"NC"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ImageCompression::C1 => "C1",
            ImageCompression::C3 => "C3",
            ImageCompression::C4 => "C4",
            ImageCompression::C5 => "C5",
            ImageCompression::C6 => "C6",
            ImageCompression::C7 => "C7",
            ImageCompression::C8 => "C8",
            ImageCompression::I1 => "I1",
            ImageCompression::M1 => "M1",
            ImageCompression::M3 => "M3",
            ImageCompression::M4 => "M4",
            ImageCompression::M5 => "M5",
            ImageCompression::M6 => "M6",
            ImageCompression::M7 => "M7",
            ImageCompression::M8 => "M8",
            ImageCompression::Nc => "NC",
            ImageCompression::Nm => "NM",
        }
    }

    /// Whether this compression code indicates uncompressed pixel data
    /// (`NC`/`NM`) - such segments bypass the codec registry entirely.
    pub const fn is_uncompressed(&self) -> bool {
        matches!(self, ImageCompression::Nc | ImageCompression::Nm)
    }

    /// Case-insensitive lookup by tag string.
    ///
    /// Returns `None` for any string that isn't one of the 17 known tags.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

#[cfg(test)]
mod tests {
    use super::ImageCompression;

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(ImageCompression::from_str("nc"), Some(ImageCompression::Nc));
        assert_eq!(ImageCompression::from_str("Nc"), Some(ImageCompression::Nc));
        assert_eq!(ImageCompression::from_str("NC"), Some(ImageCompression::Nc));
    }

    #[test]
    fn from_str_covers_all_variants() {
        for c in ImageCompression::ALL {
            assert_eq!(ImageCompression::from_str(c.as_str()), Some(c));
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert_eq!(ImageCompression::from_str("C2"), None);
        assert_eq!(ImageCompression::from_str("ZZ"), None);
    }

    #[test]
    fn there_is_no_c2() {
        assert!(!ImageCompression::ALL.iter().any(|c| c.as_str() == "C2"));
    }
}

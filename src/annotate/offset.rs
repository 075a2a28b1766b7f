//! Byte offset conversion
//!
//! Regex matches come back as UTF-8 byte offsets. Rendering layers count in
//! chars (Rust) or UTF-16 code units (JS), so offsets are converted once, in a
//! single forward walk over the text.
//!
//! ```text
//! Text:   "한글 #태그"
//! Bytes:   0  3  6 7 8  11      (Hangul syllables are 3 bytes)
//! Chars:   0  1  2 3 4  5
//! UTF-16:  0  1  2 3 4  5       (BMP, one code unit each)
//! ```

use super::config::OffsetUnit;

/// Length of `s` in the given unit
pub fn unit_len(s: &str, unit: OffsetUnit) -> usize {
    match unit {
        OffsetUnit::Byte => s.len(),
        OffsetUnit::Char => s.chars().count(),
        OffsetUnit::Utf16 => s.chars().map(char::len_utf16).sum(),
    }
}

/// Incremental byte -> unit converter
///
/// Positions are expected in ascending order; each call only walks the text
/// between the previous position and the new one. A position behind the
/// cursor restarts the walk from the beginning.
pub(crate) struct OffsetMapper<'a> {
    text: &'a str,
    unit: OffsetUnit,
    byte: usize,
    offset: usize,
}

impl<'a> OffsetMapper<'a> {
    pub fn new(text: &'a str, unit: OffsetUnit) -> Self {
        Self {
            text,
            unit,
            byte: 0,
            offset: 0,
        }
    }

    /// Convert a byte position on a char boundary to the configured unit
    pub fn map(&mut self, byte: usize) -> usize {
        if self.unit == OffsetUnit::Byte {
            return byte;
        }
        if byte < self.byte {
            self.byte = 0;
            self.offset = 0;
        }
        // Regex match bounds always sit on char boundaries
        self.offset += self
            .text
            .get(self.byte..byte)
            .map_or(0, |segment| unit_len(segment, self.unit));
        self.byte = byte;
        self.offset
    }
}

// ==================== TESTS ====================

use core::fmt;
use core::ops::Range;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Half-open interval `[start, end)` over the code points of a text.
///
/// Offsets count `char`s, not bytes, so `"taité"` spans five positions even
/// though it is six bytes long. Use [`Span::byte_range`] or [`Span::slice`]
/// to go back to `&str` indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns `None` unless `start < end`.
    pub const fn try_new(start: usize, end: usize) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub const fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Byte range of this span inside `text`, or `None` if the span runs past
    /// the end of the text.
    pub fn byte_range(&self, text: &str) -> Option<Range<usize>> {
        if self.is_empty() {
            return None;
        }
        let mut offsets = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(core::iter::once(text.len()));
        let start = offsets.nth(self.start)?;
        let end = offsets.nth(self.len() - 1)?;
        Some(start..end)
    }

    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.byte_range(text).map(|range| &text[range])
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_point_offsets() {
        let text = "Kunhã usika ramé";
        let span = Span::new(12, 16);
        assert_eq!(span.slice(text), Some("ramé"));
        assert_eq!(span.byte_range(text), Some(13..18));

        // "Kunhã" ends exactly where the accented vowel does
        assert_eq!(Span::new(0, 5).slice(text), Some("Kunhã"));
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(Span::new(3, 6).slice("abcde"), None);
        assert_eq!(Span::new(0, 5).slice("abcde"), Some("abcde"));
        assert_eq!(Span::try_new(2, 2), None);
    }

    #[test]
    fn test_overlap() {
        let a = Span::new(0, 5);
        assert!(a.overlaps(&Span::new(4, 8)));
        assert!(!a.overlaps(&Span::new(5, 8)));
        assert!(a.contains(4));
        assert!(!a.contains(5));
    }
}

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A bibliographical source: author's last name and page number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Source {
    pub author: String,
    pub page: u32,
}

impl Source {
    pub fn new(author: impl Into<String>, page: u32) -> Self {
        Self {
            author: author.into(),
            page,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.author, self.page)
    }
}

/// Ordered list of sources attesting a sense (Avila 2021:164-165).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SourceList(pub Vec<Source>);

impl SourceList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, source: Source) {
        self.0.push(source);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Source> {
        self.0.iter()
    }
}

impl From<Vec<Source>> for SourceList {
    fn from(sources: Vec<Source>) -> Self {
        Self(sources)
    }
}

impl<'a> IntoIterator for &'a SourceList {
    type Item = &'a Source;
    type IntoIter = core::slice::Iter<'a, Source>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SourceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, source) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", source)?;
        }
        Ok(())
    }
}

/// An attested sentence in the original language with its translation.
///
/// Examples are frequently cited by more than one sense or entry, so callers
/// share them behind an `Arc` instead of cloning the text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Example {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: Option<Source>,
    pub translation: String,
    /// Whether the orthography was adapted to the modern standard.
    #[cfg_attr(feature = "serde", serde(default = "adapted_default"))]
    pub adapted: bool,
}

#[cfg(feature = "serde")]
fn adapted_default() -> bool {
    true
}

impl Example {
    pub fn new(text: impl Into<String>, source: Option<Source>, translation: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source,
            translation: translation.into(),
            adapted: true,
        }
    }

    pub fn unadapted(mut self) -> Self {
        self.adapted = false;
        self
    }

    /// Number of code points in the example text; the upper bound for spans.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if let Some(source) = &self.source {
            write!(f, " ({})", source)?;
        }
        write!(f, " - {}", self.translation)
    }
}

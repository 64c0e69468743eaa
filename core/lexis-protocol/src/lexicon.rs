use alloc::string::String;
use core::fmt;

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::prefix::RelationalPrefixes;

bitflags! {
    /// Usage labels of a headword (Avila 2021, p. 153-158).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct LemmaFlags: u8 {
        const HISTORICAL = 1;
        const ADAPTED = 2;
        const OBSOLETE = 4;
    }
}

/// A headword (or variant) with its homonym index and usage labels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Lemma {
    /// Orthographic form.
    pub form: String,
    /// Superscript index distinguishing homonyms; 0 when there is none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub num: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: LemmaFlags,
    #[cfg_attr(feature = "serde", serde(default))]
    pub prefixes: Option<RelationalPrefixes>,
}

/// A variant is rendered and stored exactly like a headword.
pub type Variant = Lemma;

impl Lemma {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            num: 0,
            flags: LemmaFlags::empty(),
            prefixes: None,
        }
    }

    pub fn homonym(mut self, num: u32) -> Self {
        self.num = num;
        self
    }

    pub fn with_flags(mut self, flags: LemmaFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_prefixes(mut self, prefixes: RelationalPrefixes) -> Self {
        self.prefixes = Some(prefixes);
        self
    }

    pub fn is_historical(&self) -> bool {
        self.flags.contains(LemmaFlags::HISTORICAL)
    }

    /// Usage label shown after the headword, e.g. `[hist. adapt.]`.
    pub fn label(&self) -> String {
        if self.is_historical() {
            if self.flags.contains(LemmaFlags::ADAPTED) {
                String::from("[hist. adapt.]")
            } else {
                String::from("[hist.]")
            }
        } else if self.flags.contains(LemmaFlags::OBSOLETE) {
            String::from("[obso.]")
        } else {
            String::new()
        }
    }

    /// Homonym index as superscript markup.
    pub fn index(&self) -> String {
        if self.num > 0 {
            format!("<sup>{}</sup>", self.num)
        } else {
            String::new()
        }
    }
}

impl fmt::Display for Lemma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.form, self.index())?;
        if let Some(prefixes) = self.prefixes.as_ref().filter(|p| !p.is_empty()) {
            write!(f, " ({})", prefixes)?;
        }
        let label = self.label();
        if !label.is_empty() {
            write!(f, " {}", label)?;
        }
        Ok(())
    }
}

/// Cross-reference to a synonymous lemma and, optionally, one of its senses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Equivalent {
    pub lemma: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub num: u32,
    /// Sense number in the target entry; 0 refers to the entry as a whole.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sense: u32,
}

impl Equivalent {
    pub fn new(lemma: impl Into<String>, num: u32, sense: u32) -> Self {
        Self {
            lemma: lemma.into(),
            num,
            sense,
        }
    }
}

impl fmt::Display for Equivalent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lemma)?;
        if self.num > 0 {
            write!(f, "<sup>{}</sup>", self.num)?;
        }
        if self.sense > 0 {
            write!(f, " {}", self.sense)?;
        }
        Ok(())
    }
}

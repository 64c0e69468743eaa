use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Etymological information about a lemma.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Etymology {
    pub origin_language: String,
    pub etymon: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gloss: String,
    #[cfg_attr(feature = "serde", serde(default = "certain_default"))]
    pub certain: bool,
}

#[cfg(feature = "serde")]
fn certain_default() -> bool {
    true
}

impl Etymology {
    pub fn new(origin_language: impl Into<String>, etymon: impl Into<String>) -> Self {
        Self {
            origin_language: origin_language.into(),
            etymon: etymon.into(),
            gloss: String::new(),
            certain: true,
        }
    }

    pub fn with_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.gloss = gloss.into();
        self
    }

    pub fn uncertain(mut self) -> Self {
        self.certain = false;
        self
    }
}

impl fmt::Display for Etymology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.certain {
            f.write_str("talvez ")?;
        }
        write!(f, "do {} {}", self.origin_language, self.etymon)
    }
}

/// Spellings attested on the given pages of one historical source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct FormList {
    pub forms: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pages: Vec<u32>,
}

impl FormList {
    pub fn new<I, S>(forms: I, pages: Vec<u32>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            forms: forms.into_iter().map(Into::into).collect(),
            pages,
        }
    }
}

/// How a lemma was spelled across one historical source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct HistoricalRegister {
    pub source: String,
    pub form_lists: Vec<FormList>,
}

impl HistoricalRegister {
    pub fn new(source: impl Into<String>, form_lists: Vec<FormList>) -> Self {
        Self {
            source: source.into(),
            form_lists,
        }
    }

    /// Every attested form, in list order.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        self.form_lists
            .iter()
            .flat_map(|list| list.forms.iter().map(String::as_str))
    }
}

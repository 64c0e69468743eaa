use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Surface realisation of a non-contiguity prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum NonContiguity {
    /// `s`, realised as `x` before `i` (cf. Cruz 2011, p. 137).
    Alternating,
    Postalveolar,
    Alveolar,
    Plosive,
}

impl NonContiguity {
    const fn form(self) -> &'static str {
        match self {
            NonContiguity::Alternating | NonContiguity::Alveolar => "s",
            NonContiguity::Postalveolar => "x",
            NonContiguity::Plosive => "t",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum PrefixKind {
    Absolutive,
    Contiguity,
    NonContiguity(NonContiguity),
}

impl PrefixKind {
    /// Conventional slot number of the prefix class (Lehmann 2004, p. 15).
    pub const fn number(self) -> u8 {
        match self {
            PrefixKind::Contiguity => 1,
            PrefixKind::NonContiguity(_) => 2,
            PrefixKind::Absolutive => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PrefixKind::Absolutive => "absolutive",
            PrefixKind::Contiguity => "contiguity",
            PrefixKind::NonContiguity(_) => "non-contiguity",
        }
    }

    pub const fn abbrev(self) -> &'static str {
        match self {
            PrefixKind::Absolutive => "ABS",
            PrefixKind::Contiguity => "CONT",
            PrefixKind::NonContiguity(_) => "NCONT",
        }
    }
}

/// A relational prefix of a lemma's theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct RelationalPrefix {
    pub form: String,
    pub kind: PrefixKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hypothetical: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub historical: bool,
}

impl RelationalPrefix {
    pub fn absolutive(form: impl Into<String>) -> Self {
        Self::with_kind(form.into(), PrefixKind::Absolutive)
    }

    pub fn contiguity() -> Self {
        Self::with_kind(String::from("r"), PrefixKind::Contiguity)
    }

    pub fn non_contiguity(variety: NonContiguity) -> Self {
        Self::with_kind(String::from(variety.form()), PrefixKind::NonContiguity(variety))
    }

    fn with_kind(form: String, kind: PrefixKind) -> Self {
        Self {
            form,
            kind,
            hypothetical: false,
            historical: false,
        }
    }

    pub fn hypothetical(mut self) -> Self {
        self.hypothetical = true;
        self
    }

    pub fn historical(mut self) -> Self {
        self.historical = true;
        self
    }

    pub fn is_alternating(&self) -> bool {
        matches!(self.kind, PrefixKind::NonContiguity(NonContiguity::Alternating))
    }

    /// Form the prefix takes before `theme`.
    ///
    /// Only the alternating non-contiguity prefix has a conditioned alternant:
    /// /s/ -> [ʃ] before /i/, written `x`.
    pub fn alternant(&self, theme: &str) -> Option<String> {
        if !self.is_alternating() {
            return None;
        }
        if theme.starts_with('i') {
            Some(String::from("x"))
        } else {
            Some(self.form.clone())
        }
    }
}

impl fmt::Display for RelationalPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = if self.is_alternating() { "s/x" } else { self.form.as_str() };
        if self.hypothetical {
            write!(f, "[{}]", form)
        } else if self.historical {
            write!(f, "{{{}}}", form)
        } else {
            f.write_str(form)
        }
    }
}

/// The set of relational prefixes a theme takes, one per class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct RelationalPrefixes {
    #[cfg_attr(feature = "serde", serde(default))]
    pub absolutive: Option<RelationalPrefix>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub contiguity: Option<RelationalPrefix>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub non_contiguity: Option<RelationalPrefix>,
}

impl RelationalPrefixes {
    pub fn iter(&self) -> impl Iterator<Item = &RelationalPrefix> {
        [&self.absolutive, &self.contiguity, &self.non_contiguity]
            .into_iter()
            .flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl fmt::Display for RelationalPrefixes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|p| format!("{}", p)).collect();
        f.write_str(&parts.join(", "))
    }
}

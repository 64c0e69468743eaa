use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Lexical category labels as used in Avila (2021).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum LexicalCategory {
    Noun,
    Adjective,
    Adverb,
    Verb,
    /// Second-class verb (`v. 2ª cl.`).
    Verb2,
    /// Third-class verb (`v. 3ª cl.`).
    Verb3,
    Interjection,
    Other(String),
}

impl LexicalCategory {
    pub fn from_label(label: &str) -> Self {
        match label {
            "s" => LexicalCategory::Noun,
            "adj" => LexicalCategory::Adjective,
            "adv" => LexicalCategory::Adverb,
            "v" => LexicalCategory::Verb,
            "v2" => LexicalCategory::Verb2,
            "v3" => LexicalCategory::Verb3,
            "interj" => LexicalCategory::Interjection,
            other => LexicalCategory::Other(String::from(other)),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LexicalCategory::Noun => "s",
            LexicalCategory::Adjective => "adj",
            LexicalCategory::Adverb => "adv",
            LexicalCategory::Verb => "v",
            LexicalCategory::Verb2 => "v2",
            LexicalCategory::Verb3 => "v3",
            LexicalCategory::Interjection => "interj",
            LexicalCategory::Other(label) => label,
        }
    }

    /// Tag in the Tycho Brahe Corpus annotation system.
    pub fn tycho(&self) -> String {
        match self {
            LexicalCategory::Noun => String::from("N"),
            LexicalCategory::Verb => String::from("VB"),
            other => other.label().to_uppercase(),
        }
    }

    /// Tag in the Universal Dependencies annotation system, where known.
    pub fn upos(&self) -> Option<&'static str> {
        match self {
            LexicalCategory::Noun => Some("NOUN"),
            LexicalCategory::Verb => Some("VERB"),
            _ => None,
        }
    }
}

impl fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Subcategorisation (valence) label, e.g. `tr` or `intr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Subcat {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub historical: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obsolete: bool,
}

impl Subcat {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            historical: false,
            obsolete: false,
        }
    }
}

/// Semantic domain of a sense (Avila 2021, p. 152).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum SemanticDomain {
    Ethnonym,
    Toponym,
    Astronomical,
    Other(String),
}

impl SemanticDomain {
    pub fn label(&self) -> &str {
        match self {
            SemanticDomain::Ethnonym => "ethno",
            SemanticDomain::Toponym => "topo",
            SemanticDomain::Astronomical => "astron",
            SemanticDomain::Other(label) => label,
        }
    }
}

impl fmt::Display for SemanticDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticDomain::Ethnonym => f.write_str("etnôm"),
            SemanticDomain::Toponym => f.write_str("topôn"),
            other => f.write_str(other.label()),
        }
    }
}

/// Usage restriction of a sense.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Usage {
    Historical { adapted: bool },
    Biblical,
    Other(String),
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Usage::Historical { adapted: false } => f.write_str("hist."),
            Usage::Historical { adapted: true } => f.write_str("hist. adapt."),
            Usage::Biblical => f.write_str("bíb."),
            Usage::Other(label) => f.write_str(label),
        }
    }
}

/// Categorial information of a lemma or sense.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Category {
    pub lexcat: Vec<LexicalCategory>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subcat: Vec<Subcat>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub semantic_domains: Vec<SemanticDomain>,
}

impl Category {
    pub fn new(lexcat: Vec<LexicalCategory>) -> Self {
        Self {
            lexcat,
            subcat: Vec::new(),
            semantic_domains: Vec::new(),
        }
    }

    pub fn noun() -> Self {
        Self::new(vec![LexicalCategory::Noun])
    }

    pub fn adjective() -> Self {
        Self::new(vec![LexicalCategory::Adjective])
    }

    pub fn adverb() -> Self {
        Self::new(vec![LexicalCategory::Adverb])
    }

    pub fn verb() -> Self {
        Self::new(vec![LexicalCategory::Verb])
    }

    pub fn interjection() -> Self {
        Self::new(vec![LexicalCategory::Interjection])
    }

    pub fn noun_adjective() -> Self {
        Self::new(vec![LexicalCategory::Noun, LexicalCategory::Adjective])
    }

    pub fn verb2_adjective() -> Self {
        Self::new(vec![LexicalCategory::Verb2, LexicalCategory::Adjective])
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.lexcat.iter().map(|c| c.label()).collect();
        f.write_str(&labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_annotation_tags() {
        assert_eq!(LexicalCategory::Noun.tycho(), "N");
        assert_eq!(LexicalCategory::Verb.tycho(), "VB");
        assert_eq!(LexicalCategory::Adjective.tycho(), "ADJ");
        assert_eq!(LexicalCategory::Noun.upos(), Some("NOUN"));
        assert_eq!(LexicalCategory::Interjection.upos(), None);
    }

    #[test]
    fn test_label_round_trip() {
        for label in ["s", "adj", "adv", "v", "v2", "v3", "interj", "pron"] {
            assert_eq!(LexicalCategory::from_label(label).label(), label);
        }
        assert_eq!(Category::noun_adjective().to_string(), "s, adj");
    }

    #[test]
    fn test_subcat_defaults() {
        let subcat = Subcat::new("tr");
        assert_eq!(subcat.label, "tr");
        assert!(!subcat.historical && !subcat.obsolete);

        let category = Category {
            subcat: vec![subcat],
            ..Category::verb()
        };
        assert_eq!(category.to_string(), "v");
    }

    #[test]
    fn test_domain_and_usage_display() {
        assert_eq!(SemanticDomain::Ethnonym.to_string(), "etnôm");
        assert_eq!(SemanticDomain::Astronomical.to_string(), "astron");
        assert_eq!(Usage::Biblical.to_string(), "bíb.");
        assert_eq!(Usage::Historical { adapted: true }.to_string(), "hist. adapt.");
    }
}

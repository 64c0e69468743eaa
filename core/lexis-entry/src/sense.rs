use std::sync::Arc;

use lexis_anchor::{annotate_from, AnchorError, AnnotatedExample, FormSource};
use lexis_protocol::{Category, Equivalent, Example, SourceList, Usage};

/// One meaning of a lemma with its anchored examples.
#[derive(Debug, Clone, PartialEq)]
pub struct Sense {
    pub category: Category,
    pub definition: String,
    pub num: Option<u32>,
    pub subsenses: Vec<Sense>,
    pub examples: Vec<AnnotatedExample>,
    pub usage: Option<Usage>,
    pub sources: SourceList,
    pub usage_note: Option<String>,
    pub equivalent: Option<Equivalent>,
}

impl Sense {
    pub fn new(category: Category, definition: impl Into<String>) -> Self {
        Self {
            category,
            definition: definition.into(),
            num: None,
            subsenses: Vec::new(),
            examples: Vec::new(),
            usage: None,
            sources: SourceList::new(),
            usage_note: None,
            equivalent: None,
        }
    }

    pub fn numbered(mut self, num: u32) -> Self {
        self.num = Some(num);
        self
    }

    /// Anchors `forms` in `example` and attaches the result.
    pub fn with_example<F>(mut self, example: Arc<Example>, forms: &F) -> Result<Self, AnchorError>
    where
        F: FormSource + ?Sized,
    {
        self.examples.push(annotate_from(example, forms)?);
        Ok(self)
    }

    pub fn with_annotated(mut self, example: AnnotatedExample) -> Self {
        self.examples.push(example);
        self
    }

    pub fn with_subsense(mut self, subsense: Sense) -> Self {
        self.subsenses.push(subsense);
        self
    }

    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }

    pub fn with_sources(mut self, sources: SourceList) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_usage_note(mut self, note: impl Into<String>) -> Self {
        self.usage_note = Some(note.into());
        self
    }

    pub fn with_equivalent(mut self, equivalent: Equivalent) -> Self {
        self.equivalent = Some(equivalent);
        self
    }

    /// Letter index of a subsense: 1 -> `a`, 2 -> `b`, ...
    pub fn subsense_letter(num: u32) -> Option<char> {
        match num {
            1..=26 => char::from_u32('a' as u32 + num - 1),
            _ => None,
        }
    }

    /// This sense's examples followed by those of its subsenses, depth first.
    pub fn all_examples(&self) -> Vec<&AnnotatedExample> {
        let mut out: Vec<&AnnotatedExample> = self.examples.iter().collect();
        for subsense in &self.subsenses {
            out.extend(subsense.all_examples());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_protocol::{Source, Span};

    #[test]
    fn test_subsense_letters() {
        assert_eq!(Sense::subsense_letter(1), Some('a'));
        assert_eq!(Sense::subsense_letter(26), Some('z'));
        assert_eq!(Sense::subsense_letter(0), None);
        assert_eq!(Sense::subsense_letter(27), None);
    }

    #[test]
    fn test_sense_with_examples() {
        let example = Arc::new(Example::new(
            "Itakamutí pupé ne yasukawa, pitangé puranga ité.",
            Some(Source::new("Baena", 110)),
            "Numa pia de pedra foi o teu batismo, ó menino muito bom.",
        ));
        let sense = Sense::new(Category::adverb(), "muito")
            .numbered(3)
            .with_equivalent(Equivalent::new("reté", 1, 4))
            .with_example(example, &["eté", "ité"][..])
            .unwrap();

        assert_eq!(sense.examples.len(), 1);
        assert_eq!(sense.examples[0].spans(), &[Span::new(44, 47)]);
    }

    #[test]
    fn test_bad_form_fails_sense() {
        let example = Arc::new(Example::new("ité", None, ""));
        let result = Sense::new(Category::adverb(), "muito").with_example(example, &vec!["ité", ""]);
        assert!(matches!(result, Err(AnchorError::InvalidForm { position: 1, .. })));
    }
}

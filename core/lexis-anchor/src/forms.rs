use std::sync::Arc;

use lexis_protocol::{Example, FormList, HistoricalRegister, Lemma};

use crate::annotate::{annotate, AnnotatedExample};
use crate::error::AnchorError;

/// Supplies the candidate surface forms of a word.
///
/// Forms are hand-curated today; a morphological generator can implement this
/// trait later without touching the finder or the aggregation.
pub trait FormSource {
    fn candidate_forms(&self) -> Vec<String>;
}

impl<S: FormSource + ?Sized> FormSource for &S {
    fn candidate_forms(&self) -> Vec<String> {
        (**self).candidate_forms()
    }
}

impl<T: AsRef<str>> FormSource for [T] {
    fn candidate_forms(&self) -> Vec<String> {
        self.iter().map(|form| form.as_ref().to_string()).collect()
    }
}

impl<T: AsRef<str>> FormSource for Vec<T> {
    fn candidate_forms(&self) -> Vec<String> {
        self.as_slice().candidate_forms()
    }
}

impl FormSource for Lemma {
    fn candidate_forms(&self) -> Vec<String> {
        vec![self.form.clone()]
    }
}

impl FormSource for FormList {
    fn candidate_forms(&self) -> Vec<String> {
        self.forms.clone()
    }
}

impl FormSource for HistoricalRegister {
    fn candidate_forms(&self) -> Vec<String> {
        self.forms().map(str::to_string).collect()
    }
}

/// Annotates `example` with the forms `source` supplies.
pub fn annotate_from<S>(example: Arc<Example>, source: &S) -> Result<AnnotatedExample, AnchorError>
where
    S: FormSource + ?Sized,
{
    annotate(example, source.candidate_forms())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_protocol::Span;

    #[test]
    fn test_register_as_form_source() {
        let register = HistoricalRegister::new(
            "Magalhães",
            vec![
                FormList::new(["teté", "tete"], vec![177, 188]),
                FormList::new(["taité"], vec![243, 255]),
            ],
        );
        let example = Arc::new(Example::new(
            "Kunhã usika ramé, usasá amú suaxara rupí, unheẽ: ― Taité! Umanú ana.",
            None,
            "",
        ));
        let annotated = annotate_from(example, &register).unwrap();
        assert_eq!(annotated.spans(), &[Span::new(51, 56)]);
    }

    #[test]
    fn test_slice_and_lemma_sources() {
        let forms = ["ité", "eté"];
        assert_eq!(forms[..].candidate_forms(), vec!["ité", "eté"]);
        assert_eq!(Lemma::new("eté").candidate_forms(), vec!["eté"]);
    }
}

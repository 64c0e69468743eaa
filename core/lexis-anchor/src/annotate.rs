use std::sync::Arc;

use lexis_protocol::{Example, Span};
use tracing::{debug, trace};

use crate::error::AnchorError;
use crate::finder::{OccurrenceStrategy, SubstringStrategy};

/// An example together with the spans where a word's candidate forms occur.
///
/// Spans are grouped by candidate form in the order the forms were given, and
/// left to right within each group. They are neither sorted globally nor
/// deduplicated; see [`crate::merge_spans`] for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedExample {
    example: Arc<Example>,
    spans: Vec<Span>,
}

impl AnnotatedExample {
    pub fn example(&self) -> &Example {
        &self.example
    }

    /// The shared handle, for callers that cite the same example elsewhere.
    pub fn shared_example(&self) -> &Arc<Example> {
        &self.example
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Each span paired with the text it covers.
    pub fn anchors(&self) -> impl Iterator<Item = (Span, &str)> + '_ {
        self.spans
            .iter()
            .filter_map(|span| span.slice(&self.example.text).map(|text| (*span, text)))
    }

    pub fn into_parts(self) -> (Arc<Example>, Vec<Span>) {
        (self.example, self.spans)
    }
}

/// Annotates `example` with every occurrence of each of `forms`, using
/// literal case-insensitive substring search.
pub fn annotate<I>(example: Arc<Example>, forms: I) -> Result<AnnotatedExample, AnchorError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    annotate_with(&SubstringStrategy, example, forms)
}

/// Annotates `example` using a caller-chosen matching strategy.
///
/// Stops at the first form the strategy rejects and reports its position in
/// the candidate list.
pub fn annotate_with<S, I>(strategy: &S, example: Arc<Example>, forms: I) -> Result<AnnotatedExample, AnchorError>
where
    S: OccurrenceStrategy + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut spans = Vec::new();

    for (position, form) in forms.into_iter().enumerate() {
        let form = form.as_ref();
        let found = strategy
            .find(&example.text, form)
            .map_err(|e| AnchorError::InvalidForm {
                position,
                form: form.to_string(),
                source: Box::new(e),
            })?;
        trace!(form, ?found, "candidate form located");
        spans.extend(found);
    }

    debug!(text = %example.text, spans = spans.len(), "example annotated");
    Ok(AnnotatedExample { example, spans })
}

use lexis_protocol::Span;

use crate::error::AnchorError;

/// Lowercases one code point without changing the number of code points.
///
/// Uses the Unicode lowercase mapping when it yields a single character. The
/// few characters whose lowercase form expands (e.g. `İ`) are kept as-is so
/// that offsets into the folded text are offsets into the original text.
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn fold(s: &str) -> Vec<char> {
    s.chars().map(fold_case).collect()
}

/// A way of locating a candidate form inside an example text.
pub trait OccurrenceStrategy {
    /// Returns the spans of `form` in `text`, left to right.
    fn find(&self, text: &str, form: &str) -> Result<Vec<Span>, AnchorError>;
}

impl<S: OccurrenceStrategy + ?Sized> OccurrenceStrategy for &S {
    fn find(&self, text: &str, form: &str) -> Result<Vec<Span>, AnchorError> {
        (**self).find(text, form)
    }
}

/// Literal, case-insensitive substring search.
///
/// A match inside a longer word still counts. After a match the scan resumes
/// at the end of the match, so overlapping occurrences are reported once.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringStrategy;

impl OccurrenceStrategy for SubstringStrategy {
    fn find(&self, text: &str, form: &str) -> Result<Vec<Span>, AnchorError> {
        scan(text, form, |_, _| true)
    }
}

/// Like [`SubstringStrategy`], but only accepts matches that are not glued to
/// a letter or digit on either side.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeWordStrategy;

impl OccurrenceStrategy for WholeWordStrategy {
    fn find(&self, text: &str, form: &str) -> Result<Vec<Span>, AnchorError> {
        scan(text, form, |haystack, span| {
            let before = span.start.checked_sub(1).map(|i| haystack[i]);
            let after = haystack.get(span.end).copied();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
    }
}

fn scan<F>(text: &str, form: &str, accept: F) -> Result<Vec<Span>, AnchorError>
where
    F: Fn(&[char], Span) -> bool,
{
    if form.is_empty() {
        return Err(AnchorError::EmptyForm);
    }

    let haystack = fold(text);
    let needle = fold(form);
    let width = needle.len();

    let mut spans = Vec::new();
    let mut i = 0;
    while i + width <= haystack.len() {
        let span = Span::new(i, i + width);
        if haystack[span.start..span.end] == needle[..] && accept(&haystack, span) {
            spans.push(span);
            i = span.end;
        } else {
            i += 1;
        }
    }
    Ok(spans)
}

/// Every non-overlapping, case-insensitive occurrence of `form` in `text`.
///
/// Spans are code-point offsets into `text`. An empty `form` is rejected with
/// [`AnchorError::EmptyForm`].
pub fn find_occurrences(text: &str, form: &str) -> Result<Vec<Span>, AnchorError> {
    SubstringStrategy.find(text, form)
}

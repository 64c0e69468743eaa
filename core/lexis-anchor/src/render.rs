use std::cmp::Reverse;

use lexis_protocol::Span;

use crate::annotate::AnnotatedExample;

/// Sorts spans by position and drops every span that overlaps one already
/// kept. At equal starts the longer span wins.
///
/// This is an explicit post-processing step; [`crate::annotate`] never
/// applies it.
pub fn merge_spans(spans: &[Span]) -> Vec<Span> {
    let mut sorted = spans.to_vec();
    sorted.sort_by_key(|span| (span.start, Reverse(span.end)));

    let mut merged: Vec<Span> = Vec::with_capacity(sorted.len());
    for span in sorted {
        if merged.last().is_some_and(|last| last.overlaps(&span)) {
            continue;
        }
        merged.push(span);
    }
    merged
}

/// Wraps every anchored occurrence in `open`/`close` markers.
pub fn highlight(annotated: &AnnotatedExample, open: &str, close: &str) -> String {
    let spans = merge_spans(annotated.spans());
    let text = &annotated.example().text;

    let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut pending = spans.iter().peekable();
    let mut current: Option<Span> = None;

    for (index, c) in text.chars().enumerate() {
        if current.is_some_and(|span| span.end == index) {
            out.push_str(close);
            current = None;
        }
        if current.is_none() {
            if let Some(span) = pending.next_if(|span| span.start == index) {
                out.push_str(open);
                current = Some(*span);
            }
        }
        out.push(c);
    }
    if current.is_some() {
        out.push_str(close);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::annotate;
    use lexis_protocol::Example;
    use std::sync::Arc;

    #[test]
    fn test_merge_spans() {
        let spans = [
            Span::new(17, 22),
            Span::new(0, 5),
            Span::new(1, 5),
            Span::new(0, 5),
            Span::new(18, 22),
            Span::new(4, 9),
        ];
        assert_eq!(merge_spans(&spans), vec![Span::new(0, 5), Span::new(17, 22)]);
        assert!(merge_spans(&[]).is_empty());
    }

    #[test]
    fn test_highlight() {
        let example = Arc::new(Example::new("Teité araã Supy, teité araã yandé!", None, ""));
        let annotated = annotate(example, ["teité", "eité", "yandé"]).unwrap();
        assert_eq!(
            highlight(&annotated, "<b>", "</b>"),
            "<b>Teité</b> araã Supy, <b>teité</b> araã <b>yandé</b>!"
        );
    }

    #[test]
    fn test_highlight_at_end_and_adjacent() {
        let example = Arc::new(Example::new("itéité", None, ""));
        let annotated = annotate(example, ["ité"]).unwrap();
        assert_eq!(highlight(&annotated, "[", "]"), "[ité][ité]");
    }
}

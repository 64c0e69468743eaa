//! Anchoring of headword forms inside dictionary example sentences.
//!
//! Given an example and the candidate surface forms of a word, [`annotate`]
//! records the code-point span of every occurrence so renderers can highlight
//! or hyperlink them.
//!
//! ```
//! use std::sync::Arc;
//! use lexis_anchor::annotate;
//! use lexis_protocol::{Example, Span};
//!
//! let example = Arc::new(Example::new(
//!     "Teité araã Supy, teité araã yandé!",
//!     None,
//!     "Coitado de Supy, coitadas de nós!",
//! ));
//! let annotated = annotate(example, ["teité", "taité", "teté"]).unwrap();
//! assert_eq!(annotated.spans(), &[Span::new(0, 5), Span::new(17, 22)]);
//! ```

mod annotate;
mod error;
mod finder;
mod forms;
mod render;

pub use annotate::{annotate, annotate_with, AnnotatedExample};
pub use error::AnchorError;
pub use finder::{find_occurrences, fold_case, OccurrenceStrategy, SubstringStrategy, WholeWordStrategy};
pub use forms::{annotate_from, FormSource};
pub use render::{highlight, merge_spans};

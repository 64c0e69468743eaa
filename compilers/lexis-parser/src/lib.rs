//! Parsers for the compact notations lexicographers type by hand.

pub mod category;
pub mod sources;

pub use category::{parse_category, parse_lexical_category};
pub use sources::parse_source_list;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("cannot parse {input:?}: unexpected input at offset {offset}")]
    Syntax { input: String, offset: usize },
}

impl ParseError {
    pub(crate) fn from_nom(input: &str, err: nom::Err<nom::error::Error<&str>>) -> Self {
        let offset = match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => input.len() - e.input.len(),
            nom::Err::Incomplete(_) => input.len(),
        };
        ParseError::Syntax {
            input: input.to_string(),
            offset,
        }
    }
}

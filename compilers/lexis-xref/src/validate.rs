use thiserror::Error;
use tracing::warn;

use crate::graph::{CrossReferenceGraph, HeadwordKey};

/// A reference that does not resolve to an entry or sense.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XrefError {
    #[error("{from} (sense {from_sense}) refers to missing entry {to}")]
    MissingEntry {
        from: HeadwordKey,
        from_sense: u32,
        to: HeadwordKey,
    },

    #[error("{from} (sense {from_sense}) refers to sense {to_sense} of {to}, which has {available} senses")]
    MissingSense {
        from: HeadwordKey,
        from_sense: u32,
        to: HeadwordKey,
        to_sense: u32,
        available: usize,
    },
}

/// Every dangling reference in the graph, in insertion order.
pub fn validate(graph: &CrossReferenceGraph) -> Vec<XrefError> {
    let mut errors = Vec::new();

    for (from, to, senses, reference) in graph.edges() {
        let error = match senses {
            None => Some(XrefError::MissingEntry {
                from: from.clone(),
                from_sense: reference.from_sense,
                to: to.clone(),
            }),
            Some(available) if reference.to_sense as usize > available => Some(XrefError::MissingSense {
                from: from.clone(),
                from_sense: reference.from_sense,
                to: to.clone(),
                to_sense: reference.to_sense,
                available,
            }),
            Some(_) => None,
        };
        if let Some(error) = error {
            warn!(%error, "dangling cross-reference");
            errors.push(error);
        }
    }

    errors
}

pub mod graph;
pub mod validate;

pub use graph::{CrossReferenceGraph, HeadwordKey, Reference};
pub use validate::{validate, XrefError};

use rkyv::{Archive, Deserialize, Serialize};
use alloc::string::String;
use alloc::vec::Vec;

use crate::ids::EntryId;
use crate::span::Span;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One annotated example, flattened for export.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AnchorRecord {
    pub entry: EntryId,
    pub headword: String,
    /// Sense number; 0 for unnumbered senses.
    pub sense: u32,
    pub text: String,
    pub spans: Vec<Span>,
}

/// Every anchored example of a dictionary, as written to `anchors.rkyv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AnchorTable {
    pub version: u32,
    pub records: Vec<AnchorRecord>,
}

impl AnchorTable {
    pub const VERSION: u32 = 1;

    pub fn new(records: Vec<AnchorRecord>) -> Self {
        Self {
            version: Self::VERSION,
            records,
        }
    }
}

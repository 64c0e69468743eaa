#![no_std]

#[macro_use]
extern crate alloc;

pub mod category;
pub mod ids;
pub mod lexicon;
pub mod prefix;
pub mod register;
pub mod source;
pub mod span;
pub mod table;

// Re-export core types for convenience
pub use category::{Category, LexicalCategory, SemanticDomain, Subcat, Usage};
pub use ids::{EntryId, ExampleId};
pub use lexicon::{Equivalent, Lemma, LemmaFlags, Variant};
pub use prefix::{NonContiguity, PrefixKind, RelationalPrefix, RelationalPrefixes};
pub use register::{Etymology, FormList, HistoricalRegister};
pub use source::{Example, Source, SourceList};
pub use span::Span;
pub use table::{AnchorRecord, AnchorTable};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use rkyv::{check_archived_root, to_bytes, Deserialize, Infallible};

    #[test]
    fn test_anchor_table_archive() {
        let table = AnchorTable::new(vec![AnchorRecord {
            entry: EntryId::new(7),
            headword: "taité".to_string(),
            sense: 1,
            text: "Teité araã Supy, teité araã yandé!".to_string(),
            spans: vec![Span::new(0, 5), Span::new(17, 22)],
        }]);

        let bytes = to_bytes::<_, 256>(&table).expect("Failed to serialize AnchorTable");

        // Validate the archive the way the loader does before touching it
        let archived = check_archived_root::<AnchorTable>(&bytes).expect("Archive failed validation");
        assert_eq!(archived.version, AnchorTable::VERSION);
        assert_eq!(archived.records[0].headword.as_str(), "taité");
        assert_eq!(archived.records[0].spans.len(), 2);

        let restored: AnchorTable = archived.deserialize(&mut Infallible).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<EntryId>(), 4);
        assert_eq!(u32::from(ExampleId::from(3)), 3);
    }
}

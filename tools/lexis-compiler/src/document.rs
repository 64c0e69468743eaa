//! JSON layout of a dictionary source file.
//!
//! Examples are declared once at the top level and cited by id from senses,
//! since the same sentence is often quoted under several entries.

use lexis_protocol::{EntryId, Equivalent, Etymology, Example, ExampleId, HistoricalRegister, Lemma, Usage, Variant};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DictionaryDocument {
    #[serde(default)]
    pub examples: Vec<ExampleDoc>,
    pub entries: Vec<EntryDoc>,
}

#[derive(Debug, Deserialize)]
pub struct ExampleDoc {
    pub id: ExampleId,
    #[serde(flatten)]
    pub example: Example,
}

#[derive(Debug, Deserialize)]
pub struct EntryDoc {
    pub id: EntryId,
    pub lemma: Lemma,
    /// Category notation, e.g. `"s, adj"`.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    pub senses: Vec<SenseDoc>,
    #[serde(default)]
    pub registers: Vec<HistoricalRegister>,
    #[serde(default)]
    pub etymology: Option<Etymology>,
}

#[derive(Debug, Deserialize)]
pub struct SenseDoc {
    pub category: String,
    pub definition: String,
    #[serde(default)]
    pub num: Option<u32>,
    #[serde(default)]
    pub examples: Vec<SenseExampleDoc>,
    #[serde(default)]
    pub subsenses: Vec<SenseDoc>,
    #[serde(default)]
    pub usage: Option<Usage>,
    /// Source list notation, e.g. `"Tastevin, 620; Amorim, 179"`.
    #[serde(default)]
    pub sources: String,
    #[serde(default)]
    pub usage_note: Option<String>,
    #[serde(default)]
    pub equivalent: Option<Equivalent>,
}

#[derive(Debug, Deserialize)]
pub struct SenseExampleDoc {
    pub example: ExampleId,
    /// Candidate forms to anchor; the headword and its variants when omitted.
    #[serde(default)]
    pub forms: Option<Vec<String>>,
}

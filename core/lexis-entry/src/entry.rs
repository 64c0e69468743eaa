use std::fmt;

use lexis_anchor::FormSource;
use lexis_protocol::{AnchorRecord, Category, EntryId, Etymology, HistoricalRegister, Lemma, Variant};

use crate::sense::Sense;

/// A dictionary entry: headword, variants, senses and historical data.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub lemma: Lemma,
    pub category: Option<Category>,
    pub variants: Vec<Variant>,
    pub senses: Vec<Sense>,
    pub registers: Vec<HistoricalRegister>,
    pub etymology: Option<Etymology>,
}

impl Entry {
    pub fn new(lemma: Lemma) -> Self {
        Self {
            lemma,
            category: None,
            variants: Vec::new(),
            senses: Vec::new(),
            registers: Vec::new(),
            etymology: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn with_sense(mut self, sense: Sense) -> Self {
        self.senses.push(sense);
        self
    }

    pub fn with_register(mut self, register: HistoricalRegister) -> Self {
        self.registers.push(register);
        self
    }

    pub fn with_etymology(mut self, etymology: Etymology) -> Self {
        self.etymology = Some(etymology);
        self
    }

    /// Flattens every anchored example into export records.
    ///
    /// Subsense examples are reported under their parent's sense number.
    pub fn anchor_records(&self, id: EntryId) -> Vec<AnchorRecord> {
        let mut records = Vec::new();
        for sense in &self.senses {
            for annotated in sense.all_examples() {
                records.push(AnchorRecord {
                    entry: id,
                    headword: self.lemma.form.clone(),
                    sense: sense.num.unwrap_or(0),
                    text: annotated.example().text.clone(),
                    spans: annotated.spans().to_vec(),
                });
            }
        }
        tracing::debug!(entry = %id, headword = %self.lemma.form, records = records.len(), "anchor records collected");
        records
    }
}

/// The headword followed by its variants.
impl FormSource for Entry {
    fn candidate_forms(&self) -> Vec<String> {
        std::iter::once(&self.lemma)
            .chain(&self.variants)
            .map(|lemma| lemma.form.clone())
            .collect()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lemma)
    }
}

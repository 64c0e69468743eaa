use lexis_anchor::{highlight, AnnotatedExample};
use lexis_entry::{Entry, Sense};
use lexis_protocol::{EntryId, HistoricalRegister, Span};
use serde::Serialize;

/// Human-readable JSON rendering of the anchored dictionary.
#[derive(Debug, Serialize)]
pub struct Report {
    pub entries: Vec<EntryReport>,
}

#[derive(Debug, Serialize)]
pub struct EntryReport {
    pub id: EntryId,
    pub headword: String,
    pub category: Option<String>,
    pub variants: Vec<String>,
    pub etymology: Option<String>,
    pub registers: Vec<HistoricalRegister>,
    pub senses: Vec<SenseReport>,
}

#[derive(Debug, Serialize)]
pub struct SenseReport {
    pub num: Option<u32>,
    pub category: String,
    pub definition: String,
    pub sources: String,
    pub usage: Option<String>,
    pub usage_note: Option<String>,
    pub equivalent: Option<String>,
    pub examples: Vec<ExampleReport>,
    pub subsenses: Vec<SenseReport>,
}

#[derive(Debug, Serialize)]
pub struct ExampleReport {
    pub text: String,
    pub source: Option<String>,
    pub translation: String,
    pub adapted: bool,
    pub spans: Vec<Span>,
    pub highlighted: String,
}

/// Highlight markers placed around anchored forms.
#[derive(Debug, Clone)]
pub struct Markers {
    pub open: String,
    pub close: String,
}

impl Report {
    pub fn build(entries: &[(EntryId, Entry)], markers: &Markers) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(id, entry)| EntryReport {
                    id: *id,
                    headword: entry.to_string(),
                    category: entry.category.as_ref().map(ToString::to_string),
                    variants: entry.variants.iter().map(ToString::to_string).collect(),
                    etymology: entry.etymology.as_ref().map(ToString::to_string),
                    registers: entry.registers.clone(),
                    senses: entry.senses.iter().map(|s| sense_report(s, markers)).collect(),
                })
                .collect(),
        }
    }
}

fn sense_report(sense: &Sense, markers: &Markers) -> SenseReport {
    SenseReport {
        num: sense.num,
        category: sense.category.to_string(),
        definition: sense.definition.clone(),
        sources: sense.sources.to_string(),
        usage: sense.usage.as_ref().map(ToString::to_string),
        usage_note: sense.usage_note.clone(),
        equivalent: sense.equivalent.as_ref().map(ToString::to_string),
        examples: sense.examples.iter().map(|e| example_report(e, markers)).collect(),
        subsenses: sense.subsenses.iter().map(|s| sense_report(s, markers)).collect(),
    }
}

fn example_report(annotated: &AnnotatedExample, markers: &Markers) -> ExampleReport {
    let example = annotated.example();
    ExampleReport {
        text: example.text.clone(),
        source: example.source.as_ref().map(ToString::to_string),
        translation: example.translation.clone(),
        adapted: example.adapted,
        spans: annotated.spans().to_vec(),
        highlighted: highlight(annotated, &markers.open, &markers.close),
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use lexis_anchor::FormSource;
use lexis_entry::{Entry, Sense};
use lexis_parser::{parse_category, parse_source_list};
use lexis_protocol::{EntryId, Example, ExampleId};
use tracing::debug;

use crate::document::{DictionaryDocument, EntryDoc, ExampleDoc, SenseDoc};

type ExampleTable = HashMap<ExampleId, Arc<Example>>;

/// Builds entries from a parsed document, anchoring every cited example.
pub fn assemble(doc: DictionaryDocument) -> Result<Vec<(EntryId, Entry)>> {
    let mut examples = ExampleTable::new();
    for ExampleDoc { id, example } in doc.examples {
        if examples.insert(id, Arc::new(example)).is_some() {
            bail!("example {id} is defined more than once");
        }
    }
    debug!(examples = examples.len(), "example table loaded");

    doc.entries
        .into_iter()
        .map(|entry| assemble_entry(entry, &examples))
        .collect()
}

fn assemble_entry(doc: EntryDoc, examples: &ExampleTable) -> Result<(EntryId, Entry)> {
    let id = doc.id;
    let mut entry = Entry::new(doc.lemma);
    entry.variants = doc.variants;
    entry.registers = doc.registers;
    entry.etymology = doc.etymology;
    if let Some(category) = doc.category {
        entry.category = Some(parse_category(&category).with_context(|| format!("entry {id}: category"))?);
    }

    let headword_forms = entry.candidate_forms();
    for sense in doc.senses {
        let num = sense.num.unwrap_or(0);
        let sense = assemble_sense(sense, examples, &headword_forms)
            .with_context(|| format!("entry {id} ({}), sense {num}", entry.lemma.form))?;
        entry.senses.push(sense);
    }

    debug!(entry = %id, headword = %entry.lemma.form, senses = entry.senses.len(), "entry assembled");
    Ok((id, entry))
}

fn assemble_sense(doc: SenseDoc, examples: &ExampleTable, headword_forms: &[String]) -> Result<Sense> {
    let mut sense = Sense::new(parse_category(&doc.category)?, doc.definition)
        .with_sources(parse_source_list(&doc.sources)?);
    sense.num = doc.num;
    sense.usage = doc.usage;
    sense.usage_note = doc.usage_note;
    sense.equivalent = doc.equivalent;

    for cited in doc.examples {
        let example = examples
            .get(&cited.example)
            .cloned()
            .with_context(|| format!("example {} is not defined", cited.example))?;
        let forms = cited.forms.as_deref().unwrap_or(headword_forms);
        sense = sense
            .with_example(example, forms)
            .with_context(|| format!("anchoring example {}", cited.example))?;
    }

    for subsense in doc.subsenses {
        sense = sense.with_subsense(assemble_sense(subsense, examples, headword_forms)?);
    }
    Ok(sense)
}

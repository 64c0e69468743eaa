pub mod entry;
pub mod sense;

pub use entry::Entry;
pub use sense::Sense;

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_anchor::{annotate, FormSource};
    use lexis_protocol::{
        Category, EntryId, Etymology, Example, FormList, HistoricalRegister, Lemma, LemmaFlags, Source, Span, Usage,
    };
    use std::sync::Arc;

    /// The "taité" entry, with the Amorim example cited by two senses.
    fn taite() -> Entry {
        let taite = Lemma::new("taité");
        let tete = Lemma::new("teté").with_flags(LemmaFlags::HISTORICAL);

        let magalhaes = Arc::new(Example::new(
            "Kunhã usika ramé, usasá amú suaxara rupí, unheẽ: ― Taité! Umanú ana.",
            Some(Source::new("Magalhães", 255)),
            "Quando a mulher chegou, passou pelo outro lado e disse: ― Coitada! Já morreu.",
        ));
        let amorim = Arc::new(Example::new(
            "Teité araã Supy, teité araã yandé!",
            Some(Source::new("Amorim", 124)),
            "Coitado de Supy, coitadas de nós!",
        ));
        let forms = ["teité", "taité", "teté"];

        let interjection = Sense::new(Category::interjection(), "coitado (a, os, as)!, pobrezinho (a, os, as)!")
            .numbered(1)
            .with_example(Arc::clone(&magalhaes), &forms[..])
            .unwrap()
            .with_example(Arc::clone(&amorim), &forms[..])
            .unwrap();
        let adjective = Sense::new(Category::noun_adjective(), "coitado (de), coitadinho (de), pobre, miserável")
            .numbered(2)
            .with_example(amorim, &forms[..])
            .unwrap();

        Entry::new(taite)
            .with_variant(tete)
            .with_sense(interjection)
            .with_sense(adjective)
            .with_register(HistoricalRegister::new(
                "Magalhães",
                vec![
                    FormList::new(["teté", "tete", "tetê"], vec![177, 188, 194, 243]),
                    FormList::new(["taité"], vec![243, 255]),
                ],
            ))
            .with_etymology(Etymology::new("tupi", "teté"))
    }

    #[test]
    fn test_entry_assembly() {
        let entry = taite();
        assert_eq!(entry.to_string(), "taité");
        assert_eq!(entry.candidate_forms(), vec!["taité", "teté"]);

        let first = &entry.senses[0].examples;
        assert_eq!(first[0].spans(), &[Span::new(51, 56)]);
        assert_eq!(first[1].spans(), &[Span::new(0, 5), Span::new(17, 22)]);

        // same sentence object behind both senses
        assert!(Arc::ptr_eq(
            first[1].shared_example(),
            entry.senses[1].examples[0].shared_example()
        ));
    }

    #[test]
    fn test_anchor_records() {
        let entry = taite();
        let records = entry.anchor_records(EntryId::new(1));
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].sense, 1);
        assert_eq!(records[2].sense, 2);
        assert_eq!(records[2].spans, vec![Span::new(0, 5), Span::new(17, 22)]);
        assert!(records.iter().all(|r| r.headword == "taité"));
    }

    #[test]
    fn test_preannotated_example_and_notes() {
        let example = Arc::new(Example::new("Mairamé mira uyeréu mira eté", None, "").unadapted());
        let annotated = annotate(example, ["eté"]).unwrap();
        let sense = Sense::new(Category::adjective(), "real, verdadeiro")
            .numbered(1)
            .with_usage(Usage::Historical { adapted: true })
            .with_usage_note("atualmente ainda ocorre em alguns compostos")
            .with_annotated(annotated);
        let entry = Entry::new(Lemma::new("eté"))
            .with_category(Category::adjective())
            .with_sense(sense);

        assert_eq!(entry.category, Some(Category::adjective()));
        let sense = &entry.senses[0];
        assert_eq!(sense.usage_note.as_deref(), Some("atualmente ainda ocorre em alguns compostos"));
        assert_eq!(sense.examples[0].spans(), &[Span::new(25, 28)]);

        let records = entry.anchor_records(EntryId::new(2));
        assert_eq!(records[0].spans, vec![Span::new(25, 28)]);
    }

    #[test]
    fn test_subsense_examples_are_collected() {
        let example = Arc::new(Example::new("pitangé puranga ité", None, ""));
        let sub = Sense::new(Category::adverb(), "muito")
            .numbered(1)
            .with_example(Arc::clone(&example), &Lemma::new("ité"))
            .unwrap();
        let entry = Entry::new(Lemma::new("eté")).with_sense(
            Sense::new(Category::adverb(), "muito").numbered(3).with_subsense(sub),
        );
        let records = entry.anchor_records(EntryId::new(2));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sense, 3);
        assert_eq!(records[0].spans, vec![Span::new(16, 19)]);
    }
}

use std::collections::HashMap;
use std::fmt;

use lexis_entry::Entry;
use lexis_protocol::{Equivalent, Lemma};
use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

/// Identifies a headword: orthographic form plus homonym index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeadwordKey {
    pub form: String,
    pub num: u32,
}

impl HeadwordKey {
    pub fn new(form: impl Into<String>, num: u32) -> Self {
        Self { form: form.into(), num }
    }
}

impl From<&Lemma> for HeadwordKey {
    fn from(lemma: &Lemma) -> Self {
        Self::new(lemma.form.clone(), lemma.num)
    }
}

impl From<&Equivalent> for HeadwordKey {
    fn from(equivalent: &Equivalent) -> Self {
        Self::new(equivalent.lemma.clone(), equivalent.num)
    }
}

impl fmt::Display for HeadwordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num > 0 {
            write!(f, "{}#{}", self.form, self.num)
        } else {
            f.write_str(&self.form)
        }
    }
}

#[derive(Debug, Clone)]
struct HeadwordNode {
    key: HeadwordKey,
    /// Number of top-level senses; `None` while the entry is only referenced.
    senses: Option<usize>,
}

/// A sense-level reference between two headwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    /// Sense of the referring entry; 0 when unnumbered.
    pub from_sense: u32,
    /// Sense of the target entry; 0 refers to the whole entry.
    pub to_sense: u32,
}

/// Equivalence references between dictionary entries.
#[derive(Debug, Default)]
pub struct CrossReferenceGraph {
    graph: Graph<HeadwordNode, Reference, Directed>,
    index_map: HashMap<HeadwordKey, NodeIndex>,
}

impl CrossReferenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut graph = Self::new();
        for entry in entries {
            graph.add_entry(entry);
        }
        graph
    }

    fn node(&mut self, key: HeadwordKey) -> NodeIndex {
        let graph = &mut self.graph;
        *self
            .index_map
            .entry(key.clone())
            .or_insert_with(|| graph.add_node(HeadwordNode { key, senses: None }))
    }

    /// Registers `entry` and every equivalent its senses point to.
    pub fn add_entry(&mut self, entry: &Entry) {
        let key = HeadwordKey::from(&entry.lemma);
        let idx = self.node(key.clone());
        self.graph[idx].senses = Some(entry.senses.len());

        for sense in &entry.senses {
            if let Some(equivalent) = &sense.equivalent {
                self.add_reference(key.clone(), sense.num.unwrap_or(0), equivalent);
            }
        }
    }

    pub fn add_reference(&mut self, from: HeadwordKey, from_sense: u32, to: &Equivalent) {
        let from_idx = self.node(from);
        let to_idx = self.node(HeadwordKey::from(to));
        self.graph.add_edge(
            from_idx,
            to_idx,
            Reference {
                from_sense,
                to_sense: to.sense,
            },
        );
    }

    pub fn contains(&self, key: &HeadwordKey) -> bool {
        self.index_map
            .get(key)
            .is_some_and(|idx| self.graph[*idx].senses.is_some())
    }

    /// Headwords `key` points to, with the reference details.
    pub fn equivalents_of(&self, key: &HeadwordKey) -> Vec<(&HeadwordKey, Reference)> {
        self.neighbours(key, Direction::Outgoing)
    }

    /// Headwords pointing at `key`.
    pub fn referenced_by(&self, key: &HeadwordKey) -> Vec<(&HeadwordKey, Reference)> {
        self.neighbours(key, Direction::Incoming)
    }

    fn neighbours(&self, key: &HeadwordKey, direction: Direction) -> Vec<(&HeadwordKey, Reference)> {
        let Some(idx) = self.index_map.get(key) else {
            return Vec::new();
        };
        let mut found: Vec<_> = self
            .graph
            .edges_directed(*idx, direction)
            .map(|edge| {
                let other = match direction {
                    Direction::Outgoing => edge.target(),
                    Direction::Incoming => edge.source(),
                };
                (&self.graph[other].key, *edge.weight())
            })
            .collect();
        // petgraph yields edges newest first
        found.reverse();
        found
    }

    pub(crate) fn edges(&self) -> impl Iterator<Item = (&HeadwordKey, &HeadwordKey, Option<usize>, Reference)> {
        self.graph.edge_references().map(|edge| {
            let target = &self.graph[edge.target()];
            (&self.graph[edge.source()].key, &target.key, target.senses, *edge.weight())
        })
    }
}

//! Table-driven doubles for tests and benchmarks.
//!
//! Not part of the stable API. `TableStructure` is a finite structure given
//! by an explicit list of element factorisations; `TableStrategy` answers
//! class queries from lookup tables and counts how often it is consulted.

use crate::core::{ClassCount, ClassIndex, GeneratingPair, Letter, Word};
use crate::error::{CongruenceError, Result};
use crate::runner::RunState;
use crate::strategy::ClassificationStrategy;
use crate::structure::{FiniteStructure, Quotient, SharedStructure};
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Finite structure with explicit elements.
///
/// Element `i` is represented by `elements[i]`; extra words can be declared
/// equal to an element with [`TableStructure::with_alias`].
#[derive(Debug)]
pub struct TableStructure {
    generators: usize,
    elements: Vec<Word>,
    positions: HashMap<Word, usize>,
    drop_counter: Option<Arc<AtomicUsize>>,
}

impl TableStructure {
    pub fn new(generators: usize, elements: Vec<Word>) -> Self {
        let positions = elements
            .iter()
            .enumerate()
            .map(|(position, word)| (word.clone(), position))
            .collect();
        Self {
            generators,
            elements,
            positions,
            drop_counter: None,
        }
    }

    /// Declares `word` to represent the element at `position`.
    pub fn with_alias(mut self, word: Word, position: usize) -> Self {
        self.positions.insert(word, position);
        self
    }

    /// Increments `counter` when this structure is dropped.
    pub fn with_drop_counter(mut self, counter: Arc<AtomicUsize>) -> Self {
        self.drop_counter = Some(counter);
        self
    }
}

impl FiniteStructure for TableStructure {
    fn size(&self) -> usize {
        self.elements.len()
    }

    fn factorisation(&self, position: usize) -> Word {
        self.elements[position].clone()
    }

    fn equal_to(&self, u: &[Letter], v: &[Letter]) -> bool {
        if u == v {
            return true;
        }
        match (self.positions.get(u), self.positions.get(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    fn generator_count(&self) -> usize {
        self.generators
    }
}

impl Drop for TableStructure {
    fn drop(&mut self) {
        if let Some(counter) = &self.drop_counter {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }
}

type QuotientFactory = Box<dyn FnMut() -> Box<dyn FiniteStructure>>;

/// First index handed out to words missing from both tables.
const FRESH_BASE: usize = 1 << 20;

/// Strategy answering from lookup tables.
///
/// Words in the *known* table are visible to the non-blocking lookup.
/// Words in the *pending* table are only revealed by a blocking lookup,
/// which moves them to the known table. A blocking lookup marks the run
/// state finished once nothing is pending.
#[derive(Default)]
pub struct TableStrategy {
    known: HashMap<Word, ClassIndex>,
    pending: HashMap<Word, ClassIndex>,
    fresh: usize,
    class_count: Option<ClassCount>,
    obviously_finite: bool,
    obviously_infinite: bool,
    quotient_factory: Option<QuotientFactory>,
    generators: Option<usize>,
    pairs: Vec<GeneratingPair>,
    parents_seen: usize,
    blocking_calls: usize,
}

impl TableStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn known(mut self, word: Word, index: usize) -> Self {
        self.known.insert(word, ClassIndex::new(index));
        self
    }

    pub fn pending(mut self, word: Word, index: usize) -> Self {
        self.pending.insert(word, ClassIndex::new(index));
        self
    }

    /// Overrides the class count, which is otherwise the number of distinct
    /// indices in both tables.
    pub fn with_class_count(mut self, count: ClassCount) -> Self {
        self.class_count = Some(count);
        self
    }

    pub fn obviously_finite(mut self) -> Self {
        self.obviously_finite = true;
        self
    }

    pub fn obviously_infinite(mut self) -> Self {
        self.obviously_infinite = true;
        self
    }

    /// Structures built by `factory` are returned as owned quotients.
    pub fn with_quotient<F>(mut self, factory: F) -> Self
    where
        F: FnMut() -> Box<dyn FiniteStructure> + 'static,
    {
        self.quotient_factory = Some(Box::new(factory));
        self
    }

    pub fn blocking_calls(&self) -> usize {
        self.blocking_calls
    }

    pub fn generators(&self) -> Option<usize> {
        self.generators
    }

    pub fn recorded_pairs(&self) -> &[GeneratingPair] {
        &self.pairs
    }

    pub fn parents_seen(&self) -> usize {
        self.parents_seen
    }
}

impl ClassificationStrategy for TableStrategy {
    fn word_to_class_index(&mut self, word: &[Letter], state: &RunState) -> ClassIndex {
        self.blocking_calls += 1;
        let index = if let Some(&index) = self.known.get(word) {
            index
        } else if let Some(index) = self.pending.remove(word) {
            self.known.insert(word.to_vec(), index);
            index
        } else {
            let index = ClassIndex::new(FRESH_BASE + self.fresh);
            self.fresh += 1;
            self.known.insert(word.to_vec(), index);
            index
        };
        if self.pending.is_empty() {
            state.set_finished(true);
        }
        index
    }

    fn const_word_to_class_index(&self, word: &[Letter]) -> Option<ClassIndex> {
        self.known.get(word).copied()
    }

    fn class_index_to_word(&mut self, index: ClassIndex, _state: &RunState) -> Option<Word> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .filter(|(_, candidate)| **candidate == index)
            .map(|(word, _)| word)
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
            .cloned()
    }

    fn number_of_classes(&mut self, _state: &RunState) -> ClassCount {
        self.class_count.unwrap_or_else(|| {
            let distinct: BTreeSet<_> = self.known.values().chain(self.pending.values()).collect();
            ClassCount::Finite(distinct.len())
        })
    }

    fn on_generator_count_set(&mut self, generators: usize) {
        self.generators = Some(generators);
    }

    fn on_pair_added(&mut self, lhs: &[Letter], rhs: &[Letter]) {
        self.pairs
            .push(GeneratingPair::new(lhs.to_vec(), rhs.to_vec()));
    }

    fn on_parent_set(&mut self, _parent: &SharedStructure) {
        self.parents_seen += 1;
    }

    fn build_quotient(
        &mut self,
        parent: Option<&SharedStructure>,
        _state: &RunState,
    ) -> Result<Quotient> {
        match (parent, self.pairs.is_empty(), self.quotient_factory.as_mut()) {
            (Some(parent), true, _) => Ok(Quotient::Shared(Arc::clone(parent))),
            (_, _, Some(factory)) => Ok(Quotient::Owned(factory())),
            (None, _, None) | (Some(_), false, None) => Err(CongruenceError::NoParent),
        }
    }

    fn is_quotient_obviously_finite(&mut self) -> bool {
        self.obviously_finite
    }

    fn is_quotient_obviously_infinite(&mut self) -> bool {
        self.obviously_infinite
    }
}

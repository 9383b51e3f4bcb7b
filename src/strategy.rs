//! Pluggable classification strategies.
//!
//! A strategy is the algorithm that actually decides which class a word
//! belongs to: coset enumeration, pair orbit enumeration, Knuth–Bendix
//! completion and so on. The congruence owns bookkeeping and caching; it asks
//! the strategy for class indices and forwards every change to the
//! presentation so the strategy can update its own state.
//!
//! # Citations
//! - Todd & Coxeter, "A practical method for enumerating cosets of a finite abstract group" (1936)
//! - Knuth & Bendix, "Simple word problems in universal algebras" (1970)
//! - Sims, "Computation with Finitely Presented Groups", Chapter 5 (1994)

use crate::core::{ClassCount, ClassIndex, Letter, Word};
use crate::error::Result;
use crate::runner::RunState;
use crate::structure::{Quotient, SharedStructure};

/// Algorithm computing congruence classes of words.
///
/// Words handed to a strategy have already been validated against the
/// generator count. Blocking methods receive the shared [`RunState`]; they
/// should poll [`RunState::dead`] at convenient points and call
/// [`RunState::set_finished`] once the classes are fully determined.
pub trait ClassificationStrategy {
    /// Returns the class of `word`, computing as much as necessary.
    ///
    /// May run for an unbounded time. The returned index must not change for
    /// the rest of the strategy's lifetime.
    fn word_to_class_index(&mut self, word: &[Letter], state: &RunState) -> ClassIndex;

    /// Returns the class of `word` if it is already known, without doing
    /// any further work.
    fn const_word_to_class_index(&self, _word: &[Letter]) -> Option<ClassIndex> {
        None
    }

    /// Returns a representative word of the class `index`, or `None` if no
    /// such class exists.
    fn class_index_to_word(&mut self, index: ClassIndex, state: &RunState) -> Option<Word>;

    /// Returns the number of classes. May not terminate when there are
    /// infinitely many and the strategy cannot detect it.
    fn number_of_classes(&mut self, state: &RunState) -> ClassCount;

    /// Called once, when the generator count is set.
    fn on_generator_count_set(&mut self, _generators: usize) {}

    /// Called after a non-trivial generating pair is recorded.
    fn on_pair_added(&mut self, _lhs: &[Letter], _rhs: &[Letter]) {}

    /// Called when a new parent structure is attached.
    fn on_parent_set(&mut self, _parent: &SharedStructure) {}

    /// Builds the quotient of a two-sided congruence.
    ///
    /// Returning [`Quotient::Shared`] with the parent is allowed when the
    /// strategy knows the congruence is trivial over it.
    fn build_quotient(
        &mut self,
        parent: Option<&SharedStructure>,
        state: &RunState,
    ) -> Result<Quotient>;

    /// Cheap, conservative finiteness test. `false` means "don't know".
    fn is_quotient_obviously_finite(&mut self) -> bool {
        false
    }

    /// Cheap, conservative infiniteness test. `false` means "don't know".
    fn is_quotient_obviously_infinite(&mut self) -> bool {
        false
    }
}

impl<S: ClassificationStrategy + ?Sized> ClassificationStrategy for Box<S> {
    fn word_to_class_index(&mut self, word: &[Letter], state: &RunState) -> ClassIndex {
        (**self).word_to_class_index(word, state)
    }

    fn const_word_to_class_index(&self, word: &[Letter]) -> Option<ClassIndex> {
        (**self).const_word_to_class_index(word)
    }

    fn class_index_to_word(&mut self, index: ClassIndex, state: &RunState) -> Option<Word> {
        (**self).class_index_to_word(index, state)
    }

    fn number_of_classes(&mut self, state: &RunState) -> ClassCount {
        (**self).number_of_classes(state)
    }

    fn on_generator_count_set(&mut self, generators: usize) {
        (**self).on_generator_count_set(generators)
    }

    fn on_pair_added(&mut self, lhs: &[Letter], rhs: &[Letter]) {
        (**self).on_pair_added(lhs, rhs)
    }

    fn on_parent_set(&mut self, parent: &SharedStructure) {
        (**self).on_parent_set(parent)
    }

    fn build_quotient(
        &mut self,
        parent: Option<&SharedStructure>,
        state: &RunState,
    ) -> Result<Quotient> {
        (**self).build_quotient(parent, state)
    }

    fn is_quotient_obviously_finite(&mut self) -> bool {
        (**self).is_quotient_obviously_finite()
    }

    fn is_quotient_obviously_infinite(&mut self) -> bool {
        (**self).is_quotient_obviously_infinite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CongruenceError;

    /// Everything in one class; only the required methods are provided.
    struct Collapse;

    impl ClassificationStrategy for Collapse {
        fn word_to_class_index(&mut self, _word: &[Letter], state: &RunState) -> ClassIndex {
            state.set_finished(true);
            ClassIndex::new(0)
        }

        fn class_index_to_word(&mut self, index: ClassIndex, _state: &RunState) -> Option<Word> {
            (index.get() == 0).then(Vec::new)
        }

        fn number_of_classes(&mut self, _state: &RunState) -> ClassCount {
            ClassCount::Finite(1)
        }

        fn build_quotient(
            &mut self,
            _parent: Option<&SharedStructure>,
            _state: &RunState,
        ) -> Result<Quotient> {
            Err(CongruenceError::NoParent)
        }
    }

    #[test]
    fn provided_methods_are_conservative() {
        let mut strategy = Collapse;
        assert_eq!(strategy.const_word_to_class_index(&[0, 1]), None);
        assert!(!strategy.is_quotient_obviously_finite());
        assert!(!strategy.is_quotient_obviously_infinite());
    }

    #[test]
    fn boxed_strategy_forwards() {
        let state = RunState::new();
        let mut boxed: Box<dyn ClassificationStrategy> = Box::new(Collapse);
        assert_eq!(boxed.word_to_class_index(&[1], &state), ClassIndex::new(0));
        assert!(state.finished());
        assert_eq!(boxed.class_index_to_word(ClassIndex::new(0), &state), Some(vec![]));
        assert_eq!(boxed.class_index_to_word(ClassIndex::new(1), &state), None);
        assert_eq!(boxed.number_of_classes(&state), ClassCount::Finite(1));
        assert!(boxed.build_quotient(None, &state).is_err());
    }
}

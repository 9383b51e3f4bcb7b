//! The congruence: generating pairs, membership queries and cached
//! quotient / class data over a pluggable classification strategy.
//!
//! # Citations
//! - Howie, "Fundamentals of Semigroup Theory", Proposition 1.5.9 (1995) – congruence generated by a relation
//! - East, Mitchell et al., "Computing finite semigroups" (2019) – parent/quotient bookkeeping
//! - Kleene, "Introduction to Metamathematics", §64 (1952) – three-valued answers for partial computations

use crate::classes::NonTrivialClasses;
use crate::core::{ClassCount, ClassIndex, CongruenceKind, GeneratingPair, Letter, Tril, Word};
use crate::error::{CongruenceError, Result};
use crate::presentation::Presentation;
use crate::runner::RunState;
use crate::strategy::ClassificationStrategy;
use crate::structure::{same_structure, Quotient, SharedStructure};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// A left, right or two-sided congruence on words over `n` generators.
///
/// Class computations are delegated to `S`. The congruence records the
/// generating pairs, validates every word it is given, and caches the
/// quotient and the non-trivial classes.
///
/// # Invariants
/// - The generator count is set at most once, before any word is validated.
/// - `pairs` holds no pair with equal sides and no pair already equal in the
///   parent at the time it was added.
/// - The quotient cache is cleared by every recorded pair.
/// - A [`Quotient::Shared`] cache is always the parent itself.
pub struct Congruence<S> {
    kind: CongruenceKind,
    generators: Option<usize>,
    pairs: Vec<GeneratingPair>,
    parent: Option<SharedStructure>,
    quotient: Option<Quotient>,
    non_trivial: Option<NonTrivialClasses>,
    state: Arc<RunState>,
    strategy: S,
}

impl<S: ClassificationStrategy> Congruence<S> {
    /// Creates a congruence with a fresh run state.
    pub fn new(kind: CongruenceKind, strategy: S) -> Self {
        Self::with_run_state(kind, strategy, Arc::new(RunState::new()))
    }

    /// Creates a congruence sharing `state` with whoever drives `strategy`.
    pub fn with_run_state(kind: CongruenceKind, strategy: S, state: Arc<RunState>) -> Self {
        Self {
            kind,
            generators: None,
            pairs: Vec::new(),
            parent: None,
            quotient: None,
            non_trivial: None,
            state,
            strategy,
        }
    }

    /// Creates a congruence and loads the generators and pairs of
    /// `presentation` in order.
    pub fn from_presentation(
        kind: CongruenceKind,
        presentation: &Presentation,
        strategy: S,
    ) -> Result<Self> {
        let mut congruence = Self::new(kind, strategy);
        congruence.set_number_of_generators(presentation.generators)?;
        congruence.add_pairs(presentation.pairs.iter().cloned())?;
        Ok(congruence)
    }

    // ------------------------------------------------------------------
    // Generators and pairs
    // ------------------------------------------------------------------

    /// Sets the number of generators. Fails if it was already set, even to
    /// the same value.
    pub fn set_number_of_generators(&mut self, generators: usize) -> Result<()> {
        if let Some(current) = self.generators {
            return Err(CongruenceError::GeneratorsAlreadySet { current });
        }
        self.generators = Some(generators);
        self.strategy.on_generator_count_set(generators);
        debug!(generators, kind = %self.kind, "generators set");
        Ok(())
    }

    /// Declares `lhs` and `rhs` to be in the same class.
    ///
    /// Pairs with equal sides, and pairs already equal in the parent, are
    /// accepted but not recorded.
    pub fn add_pair(&mut self, lhs: &[Letter], rhs: &[Letter]) -> Result<()> {
        self.validate_relation(lhs, rhs)?;
        if lhs == rhs {
            trace!(?lhs, "trivial pair ignored");
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            if parent.equal_to(lhs, rhs) {
                debug!(?lhs, ?rhs, "pair already holds in the parent, ignored");
                return Ok(());
            }
        }
        self.pairs
            .push(GeneratingPair::new(lhs.to_vec(), rhs.to_vec()));
        self.reset_quotient();
        self.state.set_finished(false);
        self.strategy.on_pair_added(lhs, rhs);
        debug!(?lhs, ?rhs, pairs = self.pairs.len(), "pair recorded");
        Ok(())
    }

    /// Adds every pair in order, stopping at the first invalid one.
    pub fn add_pairs<I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = GeneratingPair>,
    {
        for pair in pairs {
            self.add_pair(&pair.lhs, &pair.rhs)?;
        }
        Ok(())
    }

    /// The recorded generating pairs, in insertion order.
    pub fn generating_pairs(&self) -> std::slice::Iter<'_, GeneratingPair> {
        self.pairs.iter()
    }

    #[inline]
    pub fn number_of_generating_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// `None` until [`set_number_of_generators`](Self::set_number_of_generators) is called.
    #[inline]
    pub fn number_of_generators(&self) -> Option<usize> {
        self.generators
    }

    #[inline]
    pub fn kind(&self) -> CongruenceKind {
        self.kind
    }

    // ------------------------------------------------------------------
    // Membership and ordering
    // ------------------------------------------------------------------

    /// Returns `true` if `lhs` and `rhs` are in the same class.
    ///
    /// Equal words short-circuit. Otherwise this runs the strategy to
    /// completion on both words, which may never terminate.
    pub fn contains(&mut self, lhs: &[Letter], rhs: &[Letter]) -> Result<bool> {
        self.validate_relation(lhs, rhs)?;
        if lhs == rhs {
            return Ok(true);
        }
        Ok(self.word_to_class_index(lhs)? == self.word_to_class_index(rhs)?)
    }

    /// Answers membership from what the strategy has computed so far.
    ///
    /// Never runs the strategy. Distinct known classes only give
    /// [`Tril::False`] once the run state is finished, since an unfinished
    /// computation may still merge them.
    pub fn bounded_contains(&self, lhs: &[Letter], rhs: &[Letter]) -> Result<Tril> {
        self.validate_relation(lhs, rhs)?;
        let answer = match (
            self.strategy.const_word_to_class_index(lhs),
            self.strategy.const_word_to_class_index(rhs),
        ) {
            (Some(a), Some(b)) if a == b || self.state.finished() => Tril::from(a == b),
            _ => Tril::Unknown,
        };
        trace!(?lhs, ?rhs, ?answer, "bounded membership");
        Ok(answer)
    }

    /// Returns `true` if the class of `lhs` precedes the class of `rhs`.
    ///
    /// The order is by class index, so it depends on the strategy; it is
    /// stable for the lifetime of this congruence.
    pub fn less(&mut self, lhs: &[Letter], rhs: &[Letter]) -> Result<bool> {
        self.validate_relation(lhs, rhs)?;
        Ok(self.word_to_class_index(lhs)? < self.word_to_class_index(rhs)?)
    }

    /// Returns the class of `word`, running the strategy as needed.
    pub fn word_to_class_index(&mut self, word: &[Letter]) -> Result<ClassIndex> {
        self.validate_word(word)?;
        self.ensure_alive()?;
        Ok(self.strategy.word_to_class_index(word, &self.state))
    }

    /// Returns a representative of the class `index`, if the class exists.
    pub fn class_index_to_word(&mut self, index: ClassIndex) -> Result<Option<Word>> {
        if self.generators.is_none() {
            return Err(CongruenceError::GeneratorsUndefined);
        }
        self.ensure_alive()?;
        Ok(self.strategy.class_index_to_word(index, &self.state))
    }

    /// Returns the number of classes.
    pub fn number_of_classes(&mut self) -> Result<ClassCount> {
        if self.strategy.is_quotient_obviously_infinite() {
            return Ok(ClassCount::Infinite);
        }
        self.ensure_alive()?;
        Ok(self.strategy.number_of_classes(&self.state))
    }

    pub fn is_quotient_obviously_finite(&mut self) -> bool {
        self.strategy.is_quotient_obviously_finite()
    }

    pub fn is_quotient_obviously_infinite(&mut self) -> bool {
        self.strategy.is_quotient_obviously_infinite()
    }

    // ------------------------------------------------------------------
    // Parent and quotient
    // ------------------------------------------------------------------

    /// Attaches the structure this congruence is defined over.
    ///
    /// Attaching the same structure again does nothing. While no pairs have
    /// been added, the quotient is the parent itself.
    pub fn set_parent(&mut self, parent: SharedStructure) {
        if let Some(current) = &self.parent {
            if same_structure(current, &parent) {
                return;
            }
        }
        debug_assert!(
            self.parent.is_none() || self.state.dead(),
            "the parent of a live congruence cannot be replaced"
        );
        debug_assert!(
            self.generators
                .map_or(true, |n| n == parent.generator_count())
                || self.state.dead(),
            "the parent has a different number of generators"
        );
        self.strategy.on_parent_set(&parent);
        if self.pairs.is_empty() {
            self.quotient = Some(Quotient::Shared(Arc::clone(&parent)));
        }
        debug!(size = parent.size(), "parent attached");
        self.parent = Some(parent);
    }

    pub fn parent(&self) -> Result<&SharedStructure> {
        self.parent.as_ref().ok_or(CongruenceError::NoParent)
    }

    #[inline]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    #[inline]
    pub fn has_quotient(&self) -> bool {
        self.quotient.is_some()
    }

    /// Returns the quotient, building and caching it on first use.
    pub fn quotient(&mut self) -> Result<&Quotient> {
        if self.kind != CongruenceKind::TwoSided {
            return Err(CongruenceError::NotTwoSided { kind: self.kind });
        }
        if self.strategy.is_quotient_obviously_infinite() {
            return Err(CongruenceError::InfiniteQuotient);
        }
        let quotient = match self.quotient.take() {
            Some(quotient) => quotient,
            None => {
                self.ensure_alive()?;
                let built = self
                    .strategy
                    .build_quotient(self.parent.as_ref(), &self.state)?;
                debug!(owned = built.is_owned(), size = built.size(), "quotient built");
                built
            }
        };
        Ok(&*self.quotient.insert(quotient))
    }

    /// Returns the classes with more than one element of the parent.
    ///
    /// Computed once by classifying every element of the parent, then
    /// cached. Later pairs do not refresh the cache. Every factorisation is
    /// validated against the generators before it is classified; a failed
    /// scan caches nothing.
    pub fn non_trivial_classes(&mut self) -> Result<&NonTrivialClasses> {
        let classes = match self.non_trivial.take() {
            Some(classes) => classes,
            None => {
                let generators = self.generators.ok_or(CongruenceError::GeneratorsUndefined)?;
                let parent = Arc::clone(self.parent()?);
                if !self.number_of_classes()?.is_finite() {
                    return Err(CongruenceError::InfinitelyManyClasses);
                }
                let strategy = &mut self.strategy;
                let state = &*self.state;
                let classes = NonTrivialClasses::scan(parent.as_ref(), |word| {
                    check_word(generators, word)?;
                    Ok(strategy.word_to_class_index(word, state))
                })?;
                debug!(
                    scanned = parent.size(),
                    non_trivial = classes.len(),
                    "non-trivial classes computed"
                );
                classes
            }
        };
        Ok(&*self.non_trivial.insert(classes))
    }

    pub fn number_of_non_trivial_classes(&mut self) -> Result<usize> {
        Ok(self.non_trivial_classes()?.len())
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    pub fn validate_letter(&self, letter: Letter) -> Result<()> {
        let generators = self.generators.ok_or(CongruenceError::GeneratorsUndefined)?;
        if letter < generators {
            Ok(())
        } else {
            Err(CongruenceError::InvalidLetter {
                letter,
                word: vec![letter],
                generators,
            })
        }
    }

    pub fn validate_word(&self, word: &[Letter]) -> Result<()> {
        let generators = self.generators.ok_or(CongruenceError::GeneratorsUndefined)?;
        check_word(generators, word)
    }

    pub fn validate_relation(&self, lhs: &[Letter], rhs: &[Letter]) -> Result<()> {
        self.validate_word(lhs)?;
        self.validate_word(rhs)
    }

    pub fn validate_pair(&self, pair: &GeneratingPair) -> Result<()> {
        self.validate_relation(&pair.lhs, &pair.rhs)
    }

    // ------------------------------------------------------------------
    // Run state and strategy access
    // ------------------------------------------------------------------

    /// The run state shared with whatever drives the strategy.
    pub fn run_state(&self) -> &Arc<RunState> {
        &self.state
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.state.finished()
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    /// Drops the cached quotient. An owned quotient is released here; a
    /// shared one only loses this reference.
    fn reset_quotient(&mut self) {
        if let Some(quotient) = self.quotient.take() {
            debug!(owned = quotient.is_owned(), "quotient invalidated");
        }
    }

    fn ensure_alive(&self) -> Result<()> {
        if self.state.dead() {
            Err(CongruenceError::Killed)
        } else {
            Ok(())
        }
    }
}

/// Checks every letter of `word` against `generators`.
fn check_word(generators: usize, word: &[Letter]) -> Result<()> {
    match word.iter().find(|&&letter| letter >= generators) {
        Some(&letter) => Err(CongruenceError::InvalidLetter {
            letter,
            word: word.to_vec(),
            generators,
        }),
        None => Ok(()),
    }
}

impl<S> fmt::Debug for Congruence<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Congruence")
            .field("kind", &self.kind)
            .field("generators", &self.generators)
            .field("pairs", &self.pairs)
            .field("has_parent", &self.parent.is_some())
            .field("quotient", &self.quotient)
            .field("non_trivial", &self.non_trivial)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

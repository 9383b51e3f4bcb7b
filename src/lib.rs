//! Congruence: bookkeeping for congruences on finitely generated structures.
//!
//! A congruence is an equivalence relation on words over a set of generators
//! that is compatible with concatenation on the left, the right, or both.
//! This crate manages everything around the actual class computation:
//! - generators and generating pairs, with validation;
//! - definite (`contains`, `less`) and three-valued (`bounded_contains`)
//!   membership queries over a computation that may still be running;
//! - the parent structure being refined and the lazily built quotient, with
//!   explicit owned vs. shared quotient references;
//! - lazy extraction of the non-trivial classes of the parent.
//!
//! The class computation itself is a [`ClassificationStrategy`] supplied by
//! the caller (Todd–Coxeter, pair orbit enumeration, Knuth–Bendix, ...).
//!
//! # Mathematical Foundations
//!
//! For a semigroup `S` generated by `A`, a congruence `ρ` is an equivalence
//! on `A⁺` such that `u ρ v` implies `wu ρ wv` (left), `uw ρ vw` (right), or
//! both (two-sided). Two-sided congruences have a quotient `S / ρ`.
//!
//! # References
//!
//! - Howie, J.M. "Fundamentals of Semigroup Theory" (1995) – congruences and quotients
//! - Froidure, V. and Pin, J.-E. "Algorithms for computing finite semigroups" (1997)
//! - Todd, J.A. and Coxeter, H.S.M. "A practical method for enumerating cosets" (1936)
//!
//! # Example
//!
//! ```
//! use congruence::prelude::*;
//! use congruence::testing::TableStrategy;
//!
//! let strategy = TableStrategy::new().known(vec![0, 0], 0).known(vec![0], 0);
//! let mut cong = Congruence::new(CongruenceKind::TwoSided, strategy);
//! cong.set_number_of_generators(2).unwrap();
//! cong.add_pair(&[0, 0], &[0]).unwrap();
//! assert!(cong.contains(&[0, 0], &[0]).unwrap());
//! assert_eq!(cong.bounded_contains(&[0], &[1]).unwrap(), Tril::Unknown);
//! ```

pub mod classes;
pub mod congruence;
pub mod core;
pub mod error;
pub mod presentation;
pub mod runner;
pub mod strategy;
pub mod structure;

#[doc(hidden)]
pub mod testing;

pub use crate::classes::NonTrivialClasses;
pub use crate::congruence::Congruence;
pub use crate::core::{
    ClassCount, ClassIndex, CongruenceKind, GeneratingPair, Letter, ParseKindError, Tril, Word,
};
pub use crate::error::{CongruenceError, ErrorCategory, Result};
pub use crate::presentation::Presentation;
pub use crate::runner::RunState;
pub use crate::strategy::ClassificationStrategy;
pub use crate::structure::{FiniteStructure, Quotient, SharedStructure};

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::classes::NonTrivialClasses;
    pub use crate::congruence::Congruence;
    pub use crate::core::{
        ClassCount, ClassIndex, CongruenceKind, GeneratingPair, Letter, Tril, Word,
    };
    pub use crate::error::{CongruenceError, ErrorCategory};
    pub use crate::presentation::Presentation;
    pub use crate::runner::RunState;
    pub use crate::strategy::ClassificationStrategy;
    pub use crate::structure::{same_structure, FiniteStructure, Quotient, SharedStructure};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use crate::testing::{TableStrategy, TableStructure};
    use std::sync::Arc;

    /// A fresh congruence answers nothing definite without generators.
    #[test]
    fn empty_congruence() {
        let cong = Congruence::new(CongruenceKind::TwoSided, TableStrategy::new());
        assert_eq!(cong.number_of_generators(), None);
        assert_eq!(cong.number_of_generating_pairs(), 0);
        assert!(!cong.has_parent());
        assert!(!cong.has_quotient());
        assert!(!cong.finished());
    }

    /// Walks a congruence over a parent through its whole life cycle.
    #[test]
    fn life_cycle_over_a_parent() {
        // Parent: the monoid {1, a, a²} with a³ = a², written as words in one generator.
        let parent: SharedStructure = Arc::new(
            TableStructure::new(1, vec![vec![], vec![0], vec![0, 0]]).with_alias(vec![0, 0, 0], 2),
        );
        let strategy = TableStrategy::new()
            .known(vec![], 0)
            .pending(vec![0], 1)
            .pending(vec![0, 0], 1)
            .with_quotient(|| Box::new(TableStructure::new(1, vec![vec![], vec![0]])));
        let mut cong = Congruence::new(CongruenceKind::TwoSided, strategy);
        cong.set_number_of_generators(1).unwrap();
        cong.set_parent(Arc::clone(&parent));

        // Already true in the parent: dropped.
        cong.add_pair(&[0, 0, 0], &[0, 0]).unwrap();
        assert_eq!(cong.number_of_generating_pairs(), 0);
        assert!(cong.quotient().unwrap().shares(&parent));

        cong.add_pair(&[0, 0], &[0]).unwrap();
        assert_eq!(cong.number_of_generating_pairs(), 1);
        assert_eq!(cong.bounded_contains(&[0], &[0, 0]).unwrap(), Tril::Unknown);

        assert!(cong.contains(&[0], &[0, 0]).unwrap());
        assert!(cong.finished());
        assert_eq!(cong.bounded_contains(&[0], &[0, 0]).unwrap(), Tril::True);
        assert_eq!(cong.bounded_contains(&[], &[0]).unwrap(), Tril::False);
        assert!(cong.less(&[], &[0]).unwrap());

        let quotient = cong.quotient().unwrap();
        assert!(quotient.is_owned());
        assert_eq!(quotient.size(), 2);

        let classes = cong.non_trivial_classes().unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(
            classes.get(ClassIndex::new(1)),
            Some(&[vec![0], vec![0, 0]][..])
        );
    }

    #[test]
    fn kind_labels_are_exhaustive() {
        let labels: Vec<_> = CongruenceKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(labels, vec!["left", "right", "two-sided"]);
    }
}

//! Finite structures a congruence can refine, and the quotient reference.
//!
//! A congruence may be defined over a *parent* finite structure (for example
//! a Froidure–Pin enumeration of a transformation semigroup). The parent is
//! always shared. The quotient is either the parent itself, when no extra
//! pairs have been added, or a fresh structure owned by the congruence.
//!
//! # Citations
//! - Froidure & Pin, "Algorithms for computing finite semigroups" (1997) – element factorisation
//! - Howie, "Fundamentals of Semigroup Theory", Section 1.5 (1995) – quotient semigroups

use crate::core::{Letter, Word};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A finitely generated structure whose elements can be written as words.
pub trait FiniteStructure {
    /// Number of elements.
    fn size(&self) -> usize;

    /// Returns a word in the generators representing the element at
    /// `position`, for `position < self.size()`.
    fn factorisation(&self, position: usize) -> Word;

    /// Returns `true` if `u` and `v` represent the same element.
    fn equal_to(&self, u: &[Letter], v: &[Letter]) -> bool;

    /// Number of generators.
    fn generator_count(&self) -> usize;
}

/// Shared handle to a parent structure.
pub type SharedStructure = Arc<dyn FiniteStructure>;

/// Returns `true` if both handles point at the same structure.
///
/// Compares data addresses only; vtable pointers of the same object may
/// differ between codegen units.
#[inline]
pub fn same_structure(a: &SharedStructure, b: &SharedStructure) -> bool {
    Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
}

/// Quotient of a two-sided congruence.
///
/// `Shared` aliases the parent and is never released by the congruence;
/// `Owned` is released exactly once, when the congruence drops it.
pub enum Quotient {
    Owned(Box<dyn FiniteStructure>),
    Shared(SharedStructure),
}

impl Quotient {
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Quotient::Owned(_))
    }

    /// Returns `true` if this quotient is `structure` itself.
    pub fn shares(&self, structure: &SharedStructure) -> bool {
        match self {
            Quotient::Shared(shared) => same_structure(shared, structure),
            Quotient::Owned(_) => false,
        }
    }

    #[inline]
    pub fn as_structure(&self) -> &(dyn FiniteStructure + 'static) {
        match self {
            Quotient::Owned(owned) => owned.as_ref(),
            Quotient::Shared(shared) => shared.as_ref(),
        }
    }
}

impl Deref for Quotient {
    type Target = dyn FiniteStructure;

    fn deref(&self) -> &Self::Target {
        self.as_structure()
    }
}

impl fmt::Debug for Quotient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Quotient::Owned(_) => "Owned",
            Quotient::Shared(_) => "Shared",
        };
        f.debug_struct("Quotient")
            .field("tag", &tag)
            .field("size", &self.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TableStructure;

    fn two_elements() -> TableStructure {
        TableStructure::new(1, vec![vec![0], vec![0, 0]])
    }

    #[test]
    fn shared_quotient_is_identified_with_its_parent() {
        let parent: SharedStructure = Arc::new(two_elements());
        let other: SharedStructure = Arc::new(two_elements());
        let quotient = Quotient::Shared(Arc::clone(&parent));
        assert!(!quotient.is_owned());
        assert!(quotient.shares(&parent));
        assert!(!quotient.shares(&other));
        assert_eq!(quotient.size(), 2);
    }

    #[test]
    fn owned_quotient_shares_nothing() {
        let parent: SharedStructure = Arc::new(two_elements());
        let quotient = Quotient::Owned(Box::new(two_elements()));
        assert!(quotient.is_owned());
        assert!(!quotient.shares(&parent));
        assert_eq!(quotient.factorisation(1), vec![0, 0]);
    }

    #[test]
    fn deref_reaches_the_underlying_structure() {
        let parent: SharedStructure = Arc::new(two_elements());
        for quotient in [
            Quotient::Shared(Arc::clone(&parent)),
            Quotient::Owned(Box::new(two_elements())),
        ] {
            let structure: &dyn FiniteStructure = &*quotient;
            assert_eq!(structure.size(), 2);
            assert_eq!(structure.generator_count(), 1);
            assert!(structure.equal_to(&[0, 0], &[0, 0]));
            assert_eq!(quotient.as_structure().factorisation(0), vec![0]);
        }
    }

    #[test]
    fn debug_shows_tag_and_size() {
        let quotient = Quotient::Owned(Box::new(two_elements()));
        let rendered = format!("{quotient:?}");
        assert!(rendered.contains("Owned"));
        assert!(rendered.contains("size: 2"));
    }
}

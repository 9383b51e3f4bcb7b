//! Non-trivial congruence classes of a parent structure.

use crate::core::{ClassIndex, Letter, Word};
use crate::error::Result;
use crate::structure::FiniteStructure;
use std::collections::BTreeMap;

/// Classes containing at least two elements of the parent structure.
///
/// Each class maps to the factorisations of its elements, in the order in
/// which the elements appear in the parent. Classes iterate in ascending
/// [`ClassIndex`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NonTrivialClasses {
    classes: BTreeMap<ClassIndex, Vec<Word>>,
}

impl NonTrivialClasses {
    /// Factorises every element of `parent`, classifies it with `classify`
    /// and keeps the buckets holding more than one word.
    ///
    /// Stops at the first word `classify` rejects.
    pub(crate) fn scan<F>(parent: &dyn FiniteStructure, mut classify: F) -> Result<Self>
    where
        F: FnMut(&[Letter]) -> Result<ClassIndex>,
    {
        let mut buckets: BTreeMap<ClassIndex, Vec<Word>> = BTreeMap::new();
        for position in 0..parent.size() {
            let word = parent.factorisation(position);
            let index = classify(&word)?;
            buckets.entry(index).or_default().push(word);
        }
        buckets.retain(|_, words| words.len() > 1);
        Ok(Self { classes: buckets })
    }

    /// Number of non-trivial classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Words of the class `index`, if it is non-trivial.
    pub fn get(&self, index: ClassIndex) -> Option<&[Word]> {
        self.classes.get(&index).map(Vec::as_slice)
    }

    /// Iterates over `(class, words)` in ascending class order.
    pub fn iter(&self) -> impl Iterator<Item = (ClassIndex, &[Word])> + '_ {
        self.classes
            .iter()
            .map(|(&index, words)| (index, words.as_slice()))
    }

    /// Iterates over the word lists only.
    pub fn classes(&self) -> impl Iterator<Item = &[Word]> + '_ {
        self.classes.values().map(Vec::as_slice)
    }
}

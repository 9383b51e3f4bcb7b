//! Core data types: letters, words, class indices and congruence kinds.
//!
//! A *word* is a finite sequence of generator indices. A congruence over a
//! finitely generated structure partitions words into classes, each
//! identified by a [`ClassIndex`] handed out by the classification strategy.
//!
//! # Citations
//! - Howie, "Fundamentals of Semigroup Theory", Section 1.5 (1995) – congruences and quotients
//! - Ruškuc, "Semigroup Presentations", PhD thesis, Chapter 1 (1995) – words over generators

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Index of a generator.
pub type Letter = usize;

/// A finite sequence of generator indices.
pub type Word = Vec<Letter>;

/// Identifier of a congruence class.
///
/// Indices are assigned by the classification strategy and stay stable for
/// the lifetime of the congruence once handed out. "Not yet determined" is
/// expressed as `Option::<ClassIndex>::None`, never as a reserved value.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassIndex(usize);

impl ClassIndex {
    /// Creates a class index from a raw `usize`.
    #[inline]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw `usize` representation.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ClassIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassIndex({})", self.0)
    }
}

/// Number of classes of a congruence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassCount {
    Finite(usize),
    Infinite,
}

impl ClassCount {
    #[inline]
    pub const fn is_finite(self) -> bool {
        matches!(self, ClassCount::Finite(_))
    }
}

/// Three-valued answer to a membership question asked of an incomplete
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tril {
    True,
    False,
    Unknown,
}

impl From<bool> for Tril {
    fn from(value: bool) -> Self {
        if value {
            Tril::True
        } else {
            Tril::False
        }
    }
}

/// A pair of words declared to lie in the same class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratingPair {
    pub lhs: Word,
    pub rhs: Word,
}

impl GeneratingPair {
    #[inline]
    pub fn new(lhs: Word, rhs: Word) -> Self {
        Self { lhs, rhs }
    }
}

impl From<(Word, Word)> for GeneratingPair {
    fn from((lhs, rhs): (Word, Word)) -> Self {
        Self { lhs, rhs }
    }
}

/// Sidedness of a congruence.
///
/// A left congruence is compatible with multiplication on the left, a right
/// congruence with multiplication on the right, and a two-sided congruence
/// with both. Only two-sided congruences have a quotient structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CongruenceKind {
    Left,
    Right,
    TwoSided,
}

impl CongruenceKind {
    /// All kinds, in declaration order.
    pub const ALL: [CongruenceKind; 3] = [
        CongruenceKind::Left,
        CongruenceKind::Right,
        CongruenceKind::TwoSided,
    ];

    /// Canonical label of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            CongruenceKind::TwoSided => "two-sided",
            CongruenceKind::Left => "left",
            CongruenceKind::Right => "right",
        }
    }
}

impl fmt::Display for CongruenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label does not name a [`CongruenceKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid congruence kind '{0}'; expected one of: left, right, two-sided")]
pub struct ParseKindError(String);

impl FromStr for CongruenceKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CongruenceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError(s.to_owned()))
    }
}

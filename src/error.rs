//! Error type for congruence operations.
//!
//! Every failure is a synchronous contract violation or a mathematical
//! impossibility. None of them poison the congruence: the caller may keep
//! using it after an error.

use crate::core::{CongruenceKind, Letter, Word};
use thiserror::Error;

/// Coarse grouping of [`CongruenceError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The generator count was set twice or used before being set.
    Configuration,
    /// A letter outside `[0, generators)` was supplied.
    Validation,
    /// The requested object does not exist for this congruence.
    Consistency,
    /// The run state was killed before a blocking query.
    Cancelled,
}

/// Errors raised by [`Congruence`](crate::Congruence).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CongruenceError {
    #[error("the number of generators cannot be set more than once (already {current})")]
    GeneratorsAlreadySet { current: usize },

    #[error("no generators have been defined")]
    GeneratorsUndefined,

    #[error("invalid letter {letter} in word {word:?}, the valid range is [0, {generators})")]
    InvalidLetter {
        letter: Letter,
        word: Word,
        generators: usize,
    },

    #[error("the congruence must be two-sided, found {kind}")]
    NotTwoSided { kind: CongruenceKind },

    #[error("cannot find the quotient, it is infinite")]
    InfiniteQuotient,

    #[error("the parent structure is not defined")]
    NoParent,

    #[error("the congruence has infinitely many classes")]
    InfinitelyManyClasses,

    #[error("the computation was killed")]
    Killed,
}

impl CongruenceError {
    /// Returns the category this error belongs to.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::GeneratorsAlreadySet { .. } | Self::GeneratorsUndefined => {
                ErrorCategory::Configuration
            }
            Self::InvalidLetter { .. } => ErrorCategory::Validation,
            Self::NotTwoSided { .. }
            | Self::InfiniteQuotient
            | Self::NoParent
            | Self::InfinitelyManyClasses => ErrorCategory::Consistency,
            Self::Killed => ErrorCategory::Cancelled,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CongruenceError>;

//! Serializable defining data of a congruence.
//!
//! A `Presentation` is the construction-time configuration of a
//! [`Congruence`](crate::Congruence): how many generators there are and which
//! pairs are equated. It derives `serde` traits so callers can store it in
//! whatever format they already use.

use crate::core::{GeneratingPair, Word};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub generators: usize,
    #[serde(default)]
    pub pairs: Vec<GeneratingPair>,
}

impl Presentation {
    pub fn new(generators: usize) -> Self {
        Self {
            generators,
            pairs: Vec::new(),
        }
    }

    /// Appends a pair, builder style. No validation happens here.
    pub fn with_pair(mut self, lhs: Word, rhs: Word) -> Self {
        self.pairs.push(GeneratingPair::new(lhs, rhs));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_insertion_order() {
        let p = Presentation::new(2)
            .with_pair(vec![0, 0], vec![0])
            .with_pair(vec![1, 1], vec![1]);
        assert_eq!(p.generators, 2);
        assert_eq!(p.pairs[0].lhs, vec![0, 0]);
        assert_eq!(p.pairs[1].rhs, vec![1]);
    }

    #[test]
    fn cbor_persistence() {
        let p = Presentation::new(3).with_pair(vec![0, 1, 2], vec![2]);
        let bytes = serde_cbor::to_vec(&p).unwrap();
        let back: Presentation = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(back, p);
    }
}

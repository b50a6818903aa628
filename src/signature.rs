//! Enumeration of every `log` overload's parameter list.
//!
//! Output order is part of the contract: regenerated files are diffed, so
//! the list must be identical across runs.
//!
//! Layout of the result:
//!   [empty] [38 single types] [4^2 pairs] [4^3 triples] [4^4 quadruples]
//! Each multi-argument block is in odometer order (rightmost varies fastest).

use crate::constants::MAX_LOG_ARITY;
use crate::vocabulary::{TypeName, Vocabulary};

/// Ordered parameter types of one overloaded entry point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Signature(Vec<TypeName>);

impl Signature {
    /// The zero-argument signature.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parameter types, in order.
    pub fn args(&self) -> &[TypeName] {
        &self.0
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// Parameter types joined with `,`, no spaces (`string,uint`).
    pub fn joined(&self) -> String {
        self.0.iter().map(TypeName::as_str).collect::<Vec<_>>().join(",")
    }
}

impl<const N: usize> From<[&str; N]> for Signature {
    fn from(args: [&str; N]) -> Self {
        Self(args.into_iter().map(TypeName::from).collect())
    }
}

/// Every tuple of length `k` over `types`, repetition allowed, in odometer order.
///
/// Yields `types.len()^k` tuples; `k == 0` yields the single empty tuple.
pub fn cartesian_power(types: &[TypeName], k: usize) -> Vec<Signature> {
    if k > 0 && types.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(types.len().pow(k as u32));
    let mut indices = vec![0usize; k];
    loop {
        out.push(Signature(indices.iter().map(|&i| types[i].clone()).collect()));

        // Advance the odometer from the rightmost position.
        let mut pos = k;
        loop {
            if pos == 0 {
                return out;
            }
            pos -= 1;
            indices[pos] += 1;
            if indices[pos] < types.len() {
                break;
            }
            indices[pos] = 0;
        }
    }
}

/// The complete ordered list of `log` signatures for a vocabulary.
pub fn enumerate(vocabulary: &Vocabulary) -> Vec<Signature> {
    let mut signatures = vec![Signature::empty()];

    signatures.extend(vocabulary.full().iter().map(|ty| Signature(vec![ty.clone()])));

    for k in 2..=MAX_LOG_ARITY {
        signatures.extend(cartesian_power(vocabulary.combinable(), k));
    }

    signatures
}

/// Number of signatures `enumerate` produces for a vocabulary.
pub fn expected_count(vocabulary: &Vocabulary) -> usize {
    let c = vocabulary.combinable().len();
    1 + vocabulary.full().len() + (2..=MAX_LOG_ARITY).map(|k| c.pow(k as u32)).sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combinable() -> Vec<TypeName> {
        Vocabulary::console().combinable().to_vec()
    }

    #[test]
    fn test_total_count() {
        let vocab = Vocabulary::console();
        let signatures = enumerate(&vocab);
        assert_eq!(signatures.len(), 375);
        assert_eq!(expected_count(&vocab), 375);
    }

    #[test]
    fn test_block_layout() {
        let signatures = enumerate(&Vocabulary::console());

        assert_eq!(signatures[0], Signature::empty());
        assert!(signatures[1..39].iter().all(|s| s.arity() == 1));
        assert!(signatures[39..55].iter().all(|s| s.arity() == 2));
        assert!(signatures[55..119].iter().all(|s| s.arity() == 3));
        assert!(signatures[119..].iter().all(|s| s.arity() == 4));
        assert_eq!(signatures[119..].len(), 256);
    }

    #[test]
    fn test_single_types_follow_vocabulary_order() {
        let vocab = Vocabulary::console();
        let signatures = enumerate(&vocab);
        for (sig, ty) in signatures[1..39].iter().zip(vocab.full()) {
            assert_eq!(sig.args(), std::slice::from_ref(ty));
        }
    }

    #[test]
    fn test_pair_block_odometer_order() {
        let pairs = cartesian_power(&combinable(), 2);
        assert_eq!(pairs.len(), 16);
        assert_eq!(pairs[0], Signature::from(["string", "string"]));
        assert_eq!(pairs[1], Signature::from(["string", "uint"]));
        assert_eq!(pairs[2], Signature::from(["string", "address"]));
        assert_eq!(pairs[4], Signature::from(["uint", "string"]));
        assert_eq!(pairs[15], Signature::from(["bool", "bool"]));
    }

    #[test]
    fn test_pair_block_follows_single_types() {
        let signatures = enumerate(&Vocabulary::console());
        assert_eq!(signatures[38], Signature::from(["bytes32"]));
        assert_eq!(signatures[39..55], cartesian_power(&combinable(), 2)[..]);
        assert_eq!(signatures[55], Signature::from(["string", "string", "string"]));
    }

    #[test]
    fn test_quadruple_block_bounds() {
        let signatures = enumerate(&Vocabulary::console());
        assert_eq!(signatures[119], Signature::from(["string", "string", "string", "string"]));
        assert_eq!(signatures[120], Signature::from(["string", "string", "string", "uint"]));
        assert_eq!(signatures[374], Signature::from(["bool", "bool", "bool", "bool"]));
    }

    #[test]
    fn test_no_duplicate_signatures() {
        let signatures = enumerate(&Vocabulary::console());
        let unique: std::collections::HashSet<_> = signatures.iter().collect();
        assert_eq!(unique.len(), signatures.len());
    }

    #[test]
    fn test_cartesian_power_edge_cases() {
        assert_eq!(cartesian_power(&combinable(), 0), vec![Signature::empty()]);
        assert!(cartesian_power(&[], 2).is_empty());
        assert_eq!(cartesian_power(&combinable(), 1).len(), 4);
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let vocab = Vocabulary::console();
        assert_eq!(enumerate(&vocab), enumerate(&vocab));
    }

    #[test]
    fn test_joined() {
        let sig = Signature::from(["string", "uint"]);
        assert_eq!(sig.joined(), "string,uint");
        assert_eq!(Signature::empty().joined(), "");
    }
}

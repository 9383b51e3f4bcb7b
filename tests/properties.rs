//! Property-based tests for validation and membership decisions.
//!
//! These check the laws every congruence must obey regardless of the
//! strategy behind it: reflexivity without computation, trivial pairs never
//! being recorded, and the three-valued decision table of `bounded_contains`.

use proptest::prelude::*;

use congruence::prelude::*;
use congruence::testing::TableStrategy;

const GENERATORS: usize = 4;

fn word(max_letter: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..max_letter, 0..8)
}

fn congruence_with(strategy: TableStrategy) -> Congruence<TableStrategy> {
    let mut cong = Congruence::new(CongruenceKind::TwoSided, strategy);
    cong.set_number_of_generators(GENERATORS).unwrap();
    cong
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn contains_is_reflexive_without_classification(w in word(GENERATORS)) {
        let mut cong = congruence_with(TableStrategy::new());
        prop_assert!(cong.contains(&w, &w).unwrap());
        prop_assert_eq!(cong.strategy().blocking_calls(), 0);
    }

    #[test]
    fn trivial_pairs_never_change_the_pair_count(w in word(GENERATORS), extra in word(GENERATORS)) {
        let mut cong = congruence_with(TableStrategy::new());
        let before = cong.number_of_generating_pairs();
        cong.add_pair(&w, &w).unwrap();
        prop_assert_eq!(cong.number_of_generating_pairs(), before);
        if extra != w {
            cong.add_pair(&w, &extra).unwrap();
            prop_assert_eq!(cong.number_of_generating_pairs(), before + 1);
        }
    }

    #[test]
    fn validate_word_fails_iff_a_letter_is_out_of_range(w in word(GENERATORS + 3)) {
        let cong = congruence_with(TableStrategy::new());
        let out_of_range = w.iter().any(|&letter| letter >= GENERATORS);
        let result = cong.validate_word(&w);
        prop_assert_eq!(result.is_err(), out_of_range);
        if let Err(err) = result {
            prop_assert_eq!(err.category(), ErrorCategory::Validation);
        }
    }

    #[test]
    fn bounded_contains_follows_the_decision_table(
        u in word(GENERATORS),
        v in word(GENERATORS),
        u_class in prop::option::of(0usize..3),
        v_class in prop::option::of(0usize..3),
        finished in any::<bool>(),
    ) {
        prop_assume!(u != v);
        let mut strategy = TableStrategy::new();
        if let Some(index) = u_class {
            strategy = strategy.known(u.clone(), index);
        }
        if let Some(index) = v_class {
            strategy = strategy.known(v.clone(), index);
        }
        let cong = congruence_with(strategy);
        cong.run_state().set_finished(finished);

        let expected = match (u_class, v_class) {
            (Some(a), Some(b)) if a == b => Tril::True,
            (Some(_), Some(_)) if finished => Tril::False,
            _ => Tril::Unknown,
        };
        prop_assert_eq!(cong.bounded_contains(&u, &v).unwrap(), expected);
        prop_assert_eq!(cong.strategy().blocking_calls(), 0);
    }

    #[test]
    fn generators_set_twice_always_fails(first in 0usize..10, second in 0usize..10) {
        let mut cong = Congruence::new(CongruenceKind::Left, TableStrategy::new());
        cong.set_number_of_generators(first).unwrap();
        let err = cong.set_number_of_generators(second).unwrap_err();
        prop_assert_eq!(err.category(), ErrorCategory::Configuration);
        prop_assert_eq!(cong.number_of_generators(), Some(first));
    }

    #[test]
    fn one_sided_congruences_have_no_quotient(finished in any::<bool>(), left in any::<bool>()) {
        let kind = if left { CongruenceKind::Left } else { CongruenceKind::Right };
        let mut cong = Congruence::new(kind, TableStrategy::new());
        cong.set_number_of_generators(1).unwrap();
        cong.run_state().set_finished(finished);
        let err = cong.quotient().unwrap_err();
        prop_assert_eq!(err.category(), ErrorCategory::Consistency);
    }
}

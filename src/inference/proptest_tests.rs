//! Property-based tests for unification, subsumption and the prover.

use super::{prove, subsumes, unify, Substitution};
use crate::config::ResourceBudget;
use crate::data::{Atom, Clause, Literal, Term};
use crate::inference::Matching;
use proptest::prelude::*;

/// Random term of bounded depth over a small fixed vocabulary.
fn arb_term(max_depth: u32) -> BoxedStrategy<Term> {
    let leaf = prop_oneof![
        (0..4u8).prop_map(|i| Term::variable(format!("x{}", i))),
        (0..4u8).prop_map(|i| Term::constant(format!("c{}", i))),
    ];
    if max_depth == 0 {
        leaf.boxed()
    } else {
        prop_oneof![
            3 => leaf,
            2 => (0..2u8, proptest::collection::vec(arb_term(max_depth - 1), 1..=2))
                .prop_map(|(f, args)| Term::compound(format!("f{}", f), args)),
        ]
        .boxed()
    }
}

fn arb_ground_term(max_depth: u32) -> BoxedStrategy<Term> {
    let leaf = (0..4u8).prop_map(|i| Term::constant(format!("c{}", i)));
    if max_depth == 0 {
        leaf.boxed()
    } else {
        prop_oneof![
            3 => leaf,
            2 => (0..2u8, proptest::collection::vec(arb_ground_term(max_depth - 1), 1..=2))
                .prop_map(|(f, args)| Term::compound(format!("f{}", f), args)),
        ]
        .boxed()
    }
}

fn arb_literal() -> impl Strategy<Value = Literal> {
    (any::<bool>(), 0..2u8, proptest::collection::vec(arb_term(1), 1..=2))
        .prop_map(|(sign, p, args)| Literal::new(sign, Atom::new(format!("P{}", p), args)))
}

fn arb_clause() -> impl Strategy<Value = Clause> {
    proptest::collection::vec(arb_literal(), 1..=3).prop_map(Clause::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn unifier_makes_terms_equal(t1 in arb_term(3), t2 in arb_term(3)) {
        if let Some(subst) = unify(&t1, &t2, &Substitution::new()) {
            prop_assert_eq!(subst.apply(&t1), subst.apply(&t2));
        }
    }

    #[test]
    fn unifier_is_idempotent(t1 in arb_term(3), t2 in arb_term(3), probe in arb_term(3)) {
        if let Some(subst) = unify(&t1, &t2, &Substitution::new()) {
            let once = subst.apply(&probe);
            prop_assert_eq!(subst.apply(&once), once);
        }
    }

    #[test]
    fn unify_with_self_is_empty(t in arb_term(3)) {
        let subst = unify(&t, &t, &Substitution::new());
        prop_assert_eq!(subst, Some(Substitution::new()));
    }

    #[test]
    fn unification_is_symmetric_in_success(t1 in arb_term(3), t2 in arb_term(3)) {
        let forward = unify(&t1, &t2, &Substitution::new());
        let backward = unify(&t2, &t1, &Substitution::new());
        prop_assert_eq!(forward.is_some(), backward.is_some());
    }

    #[test]
    fn ground_terms_unify_only_when_equal(t1 in arb_ground_term(3), t2 in arb_ground_term(3)) {
        let result = unify(&t1, &t2, &Substitution::new());
        prop_assert_eq!(result.is_some(), t1 == t2);
    }

    #[test]
    fn composed_substitution_is_idempotent(
        t1 in arb_term(2),
        t2 in arb_term(2),
        t3 in arb_term(2),
        t4 in arb_term(2),
        probe in arb_term(3),
    ) {
        if let Some(first) = unify(&t1, &t2, &Substitution::new()) {
            let a = first.apply(&t3);
            let b = first.apply(&t4);
            if let Some(second) = unify(&a, &b, &Substitution::new()) {
                let composed = first.compose(&second);
                let once = composed.apply(&probe);
                prop_assert_eq!(composed.apply(&once), once);
            }
        }
    }

    #[test]
    fn clause_subsumes_itself(clause in arb_clause()) {
        prop_assert!(subsumes(&clause, &clause));
    }

    #[test]
    fn matching_agrees_with_instantiation(t in arb_term(2), ground in arb_ground_term(2)) {
        // instantiate t by unifying it with a ground term, then match back
        if let Some(subst) = unify(&t, &ground, &Substitution::new()) {
            let general = Atom::new("P", vec![t.clone()]);
            let specific = Atom::new("P", vec![subst.apply(&t)]);
            let mut bindings = Matching::new();
            prop_assert!(super::match_atoms(&general, &specific, &mut bindings));
        }
    }

    #[test]
    fn prover_is_deterministic(clauses in proptest::collection::vec(arb_clause(), 1..=4)) {
        let budget = ResourceBudget::new()
            .with_max_iterations(60)
            .with_max_clauses(60)
            .without_deadline();
        let first = prove(clauses.clone(), budget);
        let second = prove(clauses, budget);
        prop_assert_eq!(first.outcome, second.outcome);
        prop_assert_eq!(first.history, second.history);
        prop_assert_eq!(first.stats, second.stats);
    }
}

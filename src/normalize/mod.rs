//! Conversion of parsed premises into clausal normal form.
//!
//! Each formula goes through implication elimination, negation normal form,
//! standardizing apart, Skolemization, dropping of universal quantifiers,
//! distribution of `or` over `and`, and finally splitting into clauses.
//! Variable names and Skolem symbols are tracked across every formula a
//! [`Normalizer`] sees.

pub mod cnf;
mod prenex;
mod skolem;

pub use prenex::prenex;

use crate::data::Clause;
use crate::parser::Formula;
use log::debug;
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// Internal invariant violations. A parsed premise never triggers these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("`{shape}` reached the {stage} stage")]
    UnexpectedShape { stage: &'static str, shape: &'static str },
}

impl NormalizeError {
    pub(crate) fn unexpected(stage: &'static str, formula: &Formula) -> Self {
        NormalizeError::UnexpectedShape { stage, shape: formula.shape() }
    }
}

/// Clausifier for one premise set.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    /// Quantified variable names handed out so far
    variables: HashSet<String>,
    /// Predicate, function and constant names, Skolem symbols included
    symbols: BTreeSet<String>,
    next_skolem: usize,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep Skolem symbols clear of every name used in `formula`.
    pub fn reserve_symbols(&mut self, formula: &Formula) {
        self.symbols.extend(formula.symbol_names());
    }

    /// Clauses of one formula, tautologies removed.
    pub fn clausify(&mut self, formula: &Formula) -> Result<Vec<Clause>, NormalizeError> {
        self.reserve_symbols(formula);

        let formula = cnf::eliminate_implications(formula);
        let formula = cnf::negation_normal_form(&formula)?;
        let formula = self.standardize_apart(&formula);
        let formula = self.skolemize(&formula)?;
        let formula = cnf::drop_universals(&formula)?;
        let formula = cnf::distribute(&formula)?;
        let clauses = cnf::split(&formula)?;

        debug!("clausified into {} clause(s): {}", clauses.len(), formula);
        Ok(clauses)
    }

    /// Clauses of every formula, in premise order.
    ///
    /// All symbols are reserved before the first formula is processed, so a
    /// Skolem symbol never collides with a name used by a later premise.
    pub fn clausify_all(&mut self, formulas: &[Formula]) -> Result<Vec<Clause>, NormalizeError> {
        for formula in formulas {
            self.reserve_symbols(formula);
        }

        let mut clauses = Vec::new();
        for formula in formulas {
            clauses.extend(self.clausify(formula)?);
        }
        Ok(clauses)
    }
}

#[cfg(test)]
mod tests {
    use super::Normalizer;
    use crate::parser::{parse_premise, Formula};

    fn parse(text: &str) -> Formula {
        parse_premise(text).expect("valid premise")
    }

    fn rendered(formulas: &[Formula]) -> Vec<String> {
        Normalizer::new()
            .clausify_all(formulas)
            .expect("clausify")
            .iter()
            .map(|clause| clause.to_string())
            .collect()
    }

    #[test]
    fn syllogism_premises() {
        let clauses = rendered(&[
            parse("(forall x (implies (Human x) (Mortal x)))"),
            parse("(Human Socrates)"),
            parse("(not (Mortal Socrates))"),
        ]);
        assert_eq!(
            clauses,
            vec!["(or (not (Human x)) (Mortal x))", "(Human Socrates)", "(not (Mortal Socrates))"]
        );
    }

    #[test]
    fn standardizes_apart_across_premises() {
        let clauses = rendered(&[
            parse("(forall x (P x))"),
            parse("(forall x (not (P x)))"),
        ]);
        assert_eq!(clauses, vec!["(P x)", "(not (P x1))"]);
    }

    #[test]
    fn negated_universal_gives_skolem_constant() {
        let clauses = rendered(&[parse("(not (forall x (P x)))")]);
        assert_eq!(clauses, vec!["(not (P sk1))"]);
    }

    #[test]
    fn existential_under_universal_gives_skolem_function() {
        let clauses = rendered(&[parse("(forall x (exists y (Loves x y)))")]);
        assert_eq!(clauses, vec!["(Loves x (sk1 x))"]);
    }

    #[test]
    fn skolem_symbols_avoid_later_premises() {
        let clauses = rendered(&[parse("(exists y (P y))"), parse("(Q sk1)")]);
        assert_eq!(clauses, vec!["(P sk2)", "(Q sk1)"]);
    }

    #[test]
    fn conjunction_splits_and_tautologies_drop() {
        let clauses = rendered(&[parse("(and (implies (P a) (P a)) (and (Q a) (R b)))")]);
        assert_eq!(clauses, vec!["(Q a)", "(R b)"]);
    }

    #[test]
    fn biconditional_expands_to_four_clauses_minus_tautologies() {
        let clauses = rendered(&[parse(
            "(or (and (P a) (Q a)) (and (not (P a)) (not (Q a))))",
        )]);
        assert_eq!(clauses, vec!["(or (P a) (not (Q a)))", "(or (Q a) (not (P a)))"]);
    }
}

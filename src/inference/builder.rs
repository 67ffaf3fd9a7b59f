//! Entry point from premise text to a finished refutation.

use crate::config::{ResourceBudget, Statistics};
use crate::data::{Clause, ClauseSet};
use crate::inference::history::HistoryLine;
use crate::inference::{ProofOutcome, Prover};
use crate::normalize::{NormalizeError, Normalizer};
use crate::parser::{ParseError, Parser};
use serde::Serialize;
use std::time::Instant;
use thiserror::Error;

/// Why premises could not be refuted at all.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RefuteError {
    /// Every premise that failed to parse, in premise order
    #[error("{}", join_errors(.0))]
    Parse(Vec<ParseError>),
    #[error("internal error: {0}")]
    Internal(#[from] NormalizeError),
}

fn join_errors(errors: &[ParseError]) -> String {
    errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("; ")
}

/// Result of running the prover on a premise list.
#[derive(Clone, Debug, Serialize)]
pub struct Refutation {
    pub outcome: ProofOutcome,
    pub contradiction_found: bool,
    pub history: Vec<HistoryLine>,
    /// Every clause of the run, inputs first
    pub clauses: ClauseSet,
    pub stats: Statistics,
}

/// Build and run a prover from premise strings.
#[derive(Clone, Debug, Default)]
pub struct ProverBuilder {
    budget: ResourceBudget,
    premises: Vec<String>,
}

impl ProverBuilder {
    /// Create a new builder with the default budget and no premises.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(mut self, budget: ResourceBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn premise(mut self, premise: impl Into<String>) -> Self {
        self.premises.push(premise.into());
        self
    }

    pub fn premises<I, S>(mut self, premises: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.premises.extend(premises.into_iter().map(Into::into));
        self
    }

    pub fn budget(&self) -> &ResourceBudget {
        &self.budget
    }

    /// Parse and clausify the premises without searching.
    ///
    /// Parse errors of all premises are reported together.
    pub fn clausify(&self) -> Result<Vec<Clause>, RefuteError> {
        let parser = Parser::new();
        let mut formulas = Vec::with_capacity(self.premises.len());
        let mut errors = Vec::new();

        for result in parser.parse_premises(&self.premises) {
            match result {
                Ok(formula) => formulas.push(formula),
                Err(err) => errors.push(err),
            }
        }
        if !errors.is_empty() {
            return Err(RefuteError::Parse(errors));
        }

        Ok(Normalizer::new().clausify_all(&formulas)?)
    }

    /// Clausify the premises and run the search.
    ///
    /// The deadline covers clausification as well as the search.
    pub fn run(self) -> Result<Refutation, RefuteError> {
        let started = Instant::now();
        let clauses = self.clausify()?;
        let result = Prover::new(self.budget).started_at(started).prove(clauses);
        let history = result.history.render(&result.clauses);

        Ok(Refutation {
            outcome: result.outcome,
            contradiction_found: result.contradiction_found(),
            history,
            clauses: result.clauses,
            stats: result.stats,
        })
    }
}

/// Decide whether `premises` are contradictory within `budget`.
pub fn refute<S: AsRef<str>>(premises: &[S], budget: ResourceBudget) -> Result<Refutation, RefuteError> {
    ProverBuilder::new()
        .with_budget(budget)
        .premises(premises.iter().map(|premise| premise.as_ref()))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseErrorKind;

    #[test]
    fn build_from_simple_input() {
        let refutation = ProverBuilder::new()
            .premise("(P a)")
            .premise("(not (P a))")
            .run()
            .expect("refute");

        assert!(refutation.contradiction_found);
        let last = refutation.history.last().expect("one step");
        assert_eq!(last.resolvent, "false");
    }

    #[test]
    fn collects_every_parse_error() {
        let err = refute(&["(P a", "(Q b)", "(not (P a) (Q b))"], ResourceBudget::default())
            .unwrap_err();
        match err {
            RefuteError::Parse(errors) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].premise, Some(0));
                assert_eq!(errors[0].kind, ParseErrorKind::UnbalancedParenthesis);
                assert_eq!(errors[1].premise, Some(2));
            }
            other => panic!("expected parse errors, got {other:?}"),
        }
    }

    #[test]
    fn handle_empty_input() {
        let premises: [&str; 0] = [];
        let refutation = refute(&premises, ResourceBudget::default()).expect("refute");
        assert_eq!(refutation.outcome, ProofOutcome::Saturated);
        assert!(!refutation.contradiction_found);
        assert!(refutation.history.is_empty());
    }

    #[test]
    fn clausify_reports_input_clauses() {
        let clauses = ProverBuilder::new()
            .premise("(forall x (implies (Human x) (Mortal x)))")
            .clausify()
            .expect("clausify");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].to_string(), "(or (not (Human x)) (Mortal x))");
    }
}

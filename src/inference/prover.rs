//! Resolution-refutation prover.
//!
//! The search works through a frontier of untried clause pairs in a fixed
//! order: ascending by (later id, earlier id). A new clause's pairs queue
//! behind every pair already waiting, so every pair is eventually tried.

use crate::config::stats::{
    CLAUSES_KEPT, PAIRS_TRIED, RESOLVENTS_GENERATED, SUBSUMED_DISCARDED, TAUTOLOGIES_DISCARDED,
};
use crate::config::{Deadline, LimitKind, ResourceBudget, Statistics};
use crate::data::{Clause, ClauseId, ClauseSet};
use crate::inference::history::{DerivationStep, History};
use crate::inference::{all_resolvents_until, forward_subsumed};
use log::{debug, trace};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Instant;

/// Terminal state of a proof search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProofOutcome {
    /// The empty clause was derived (or given as input)
    Contradiction { empty_clause: ClauseId },
    /// Every pair was tried without deriving the empty clause
    Saturated,
    /// The budget ran out first; nothing is known about the clause set
    ResourceExceeded { limit: LimitKind },
}

impl ProofOutcome {
    pub fn is_contradiction(&self) -> bool {
        matches!(self, ProofOutcome::Contradiction { .. })
    }
}

/// Everything a finished search hands back to the caller.
#[derive(Clone, Debug)]
pub struct ProofResult {
    pub outcome: ProofOutcome,
    pub history: History,
    pub clauses: ClauseSet,
    pub stats: Statistics,
}

impl ProofResult {
    pub fn contradiction_found(&self) -> bool {
        self.outcome.is_contradiction()
    }
}

/// Resolution prover owning all state of a single run.
#[derive(Debug)]
pub struct Prover {
    budget: ResourceBudget,
    /// Storage for all clauses, inputs first
    clauses: ClauseSet,
    /// Untried pairs, earlier id first
    frontier: VecDeque<(ClauseId, ClauseId)>,
    history: History,
    stats: Statistics,
    iterations: usize,
    /// When the deadline starts counting, the call to `prove` by default
    started: Option<Instant>,
}

impl Prover {
    pub fn new(budget: ResourceBudget) -> Self {
        Self {
            budget,
            clauses: ClauseSet::new(),
            frontier: VecDeque::new(),
            history: History::new(),
            stats: Statistics::new(),
            iterations: 0,
            started: None,
        }
    }

    /// Count elapsed time from `started` instead of from the start of the
    /// search, so work done before it (clausification) uses up the deadline.
    pub fn started_at(mut self, started: Instant) -> Self {
        self.started = Some(started);
        self
    }

    /// Run the search over `input` until a terminal state is reached.
    pub fn prove<I>(mut self, input: I) -> ProofResult
    where
        I: IntoIterator<Item = Clause>,
    {
        let deadline = self.budget.deadline_from(self.started.unwrap_or_else(Instant::now));

        for clause in input {
            self.add_clause(clause);
        }
        debug!("starting search with {} clauses", self.clauses.len());

        let empty_input =
            self.clauses.iter().find(|(_, clause)| clause.is_empty()).map(|(id, _)| id);
        if let Some(id) = empty_input {
            debug!("input clause {} is empty", id);
            return self.finish(ProofOutcome::Contradiction { empty_clause: id });
        }

        loop {
            if self.frontier.is_empty() {
                debug!("saturated after {} pairs", self.iterations);
                return self.finish(ProofOutcome::Saturated);
            }

            if let Some(limit) = self.exceeded_limit(&deadline) {
                debug!("resource limit {} reached after {} pairs", limit, self.iterations);
                return self.finish(ProofOutcome::ResourceExceeded { limit });
            }

            let Some((earlier, later)) = self.frontier.pop_front() else {
                continue;
            };

            if let Some(outcome) = self.resolve_pair(earlier, later, &deadline) {
                return self.finish(outcome);
            }
        }
    }

    /// Resolve one pair, keeping every new, non-redundant resolvent.
    ///
    /// Returns a terminal outcome when the pair derives the empty clause or
    /// the deadline expires while it is being worked on.
    fn resolve_pair(
        &mut self,
        earlier: ClauseId,
        later: ClauseId,
        deadline: &Deadline,
    ) -> Option<ProofOutcome> {
        self.iterations += 1;
        self.stats.increment(PAIRS_TRIED);
        trace!("trying pair ({}, {})", earlier, later);

        let (Some(first), Some(second)) = (self.clauses.get(earlier), self.clauses.get(later))
        else {
            return None;
        };
        let Some(resolvents) = all_resolvents_until(first, second, deadline) else {
            debug!("deadline expired while resolving ({}, {})", earlier, later);
            return Some(ProofOutcome::ResourceExceeded { limit: LimitKind::Time });
        };

        for resolvent in resolvents {
            self.stats.increment(RESOLVENTS_GENERATED);

            if resolvent.clause.is_empty() {
                let id = self.clauses.insert(resolvent.clause);
                self.history.record(DerivationStep {
                    premise: earlier,
                    other: later,
                    substitution: resolvent.substitution,
                    resolvent: id,
                });
                debug!("empty clause {} derived from {} and {}", id, earlier, later);
                return Some(ProofOutcome::Contradiction { empty_clause: id });
            }

            if deadline.is_expired() {
                debug!("deadline expired while filtering resolvents of ({}, {})", earlier, later);
                return Some(ProofOutcome::ResourceExceeded { limit: LimitKind::Time });
            }

            if resolvent.clause.is_tautology() {
                self.stats.increment(TAUTOLOGIES_DISCARDED);
                trace!("discarding tautology {}", resolvent.clause);
                continue;
            }

            if forward_subsumed(&resolvent.clause, self.clauses.iter().map(|(_, c)| c)) {
                self.stats.increment(SUBSUMED_DISCARDED);
                trace!("discarding subsumed {}", resolvent.clause);
                continue;
            }

            debug!("kept {} from ({}, {})", resolvent.clause, earlier, later);
            let id = self.add_clause(resolvent.clause);
            self.stats.increment(CLAUSES_KEPT);
            self.history.record(DerivationStep {
                premise: earlier,
                other: later,
                substitution: resolvent.substitution,
                resolvent: id,
            });

            if self.clauses.len() >= self.budget.max_clauses {
                break;
            }
        }

        None
    }

    /// Insert a clause and queue its pairs with every clause before it.
    fn add_clause(&mut self, clause: Clause) -> ClauseId {
        let id = self.clauses.insert(clause);
        self.frontier.extend((0..id.0).map(|earlier| (ClauseId(earlier), id)));
        id
    }

    fn exceeded_limit(&self, deadline: &Deadline) -> Option<LimitKind> {
        if self.iterations >= self.budget.max_iterations {
            return Some(LimitKind::Iterations);
        }
        if self.clauses.len() >= self.budget.max_clauses {
            return Some(LimitKind::Clauses);
        }
        if deadline.is_expired() {
            return Some(LimitKind::Time);
        }
        None
    }

    fn finish(self, outcome: ProofOutcome) -> ProofResult {
        ProofResult { outcome, history: self.history, clauses: self.clauses, stats: self.stats }
    }
}

/// Run a fresh [`Prover`] over `clauses` with the given budget.
pub fn prove<I>(clauses: I, budget: ResourceBudget) -> ProofResult
where
    I: IntoIterator<Item = Clause>,
{
    Prover::new(budget).prove(clauses)
}

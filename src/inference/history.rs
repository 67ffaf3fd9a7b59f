//! Derivation history of a proof run.

use crate::data::{ClauseId, ClauseSet};
use crate::inference::Substitution;
use serde::Serialize;

/// One accepted resolution step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivationStep {
    /// First parent, the lower clause id of the pair
    pub premise: ClauseId,
    /// Second parent
    pub other: ClauseId,
    /// Substitution applied to the parents, factoring included
    pub substitution: Substitution,
    /// Id given to the resolvent
    pub resolvent: ClauseId,
}

/// Steps in the order the resolvents were accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    steps: Vec<DerivationStep>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: DerivationStep) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&DerivationStep> {
        self.steps.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DerivationStep> {
        self.steps.iter()
    }

    /// Render every step against the clause set that produced it.
    pub fn render(&self, clauses: &ClauseSet) -> Vec<HistoryLine> {
        self.steps
            .iter()
            .map(|step| HistoryLine {
                premise_id: step.premise,
                premise: clauses.render(step.premise),
                other_id: step.other,
                other: clauses.render(step.other),
                resolvent_id: step.resolvent,
                resolvent: clauses.render(step.resolvent),
                substitution: step.substitution.to_string(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a DerivationStep;
    type IntoIter = std::slice::Iter<'a, DerivationStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Human-readable form of a [`DerivationStep`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryLine {
    pub premise_id: ClauseId,
    pub premise: String,
    pub other_id: ClauseId,
    pub other: String,
    pub resolvent_id: ClauseId,
    pub resolvent: String,
    pub substitution: String,
}

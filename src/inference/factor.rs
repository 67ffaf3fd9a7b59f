//! Factoring inference rule.
//!
//! Factoring simplifies clauses by merging unifiable literals of the same sign.
//!
//! Example:
//!   Input:  (or (P x) (or (P (f a)) (Q b)))
//!   Output: (or (P (f a)) (Q b))    (by unifying x with (f a))
//!
//! The prover never keeps factors as clauses of their own; it resolves on
//! every factor of both parents instead.

use crate::config::Deadline;
use crate::data::Clause;
use crate::inference::{subsumes, unify_atoms, Substitution};

/// Result of factoring a clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factor {
    /// The factored clause
    pub clause: Clause,
    /// Substitution taking the parent to this factor
    pub substitution: Substitution,
}

/// Factors obtained by merging one pair of unifiable same-sign literals.
///
/// Returns all possible factors (there may be multiple if several pairs unify).
pub fn factor_clause(clause: &Clause) -> Vec<Factor> {
    let mut factors = Vec::new();

    for i in 0..clause.len() {
        for j in (i + 1)..clause.len() {
            let (Some(lit1), Some(lit2)) = (clause.literal(i), clause.literal(j)) else {
                continue;
            };

            // Can only factor literals with the same sign
            if lit1.sign != lit2.sign {
                continue;
            }

            if let Some(subst) = unify_atoms(&lit1.atom, &lit2.atom, &Substitution::new()) {
                // lit2 becomes identical to lit1 under subst
                let factored = subst.apply_to_clause(&clause.without(j));
                factors.push(Factor { clause: factored, substitution: subst });
            }
        }
    }

    factors
}

/// The clause itself followed by every factor reachable by repeated merging.
///
/// Each merge removes at least one literal, so the closure is finite. Factors
/// that are variants of one already found are skipped, which keeps the
/// closure of `n` interchangeable literals at `n` members.
pub fn factor_closure(clause: &Clause) -> Vec<Factor> {
    factor_closure_until(clause, &Deadline::never()).unwrap_or_default()
}

/// Like [`factor_closure`], giving up with `None` once `deadline` expires.
pub fn factor_closure_until(clause: &Clause, deadline: &Deadline) -> Option<Vec<Factor>> {
    let mut closure = vec![Factor { clause: clause.clone(), substitution: Substitution::new() }];
    let mut next = 0;

    while next < closure.len() {
        if deadline.is_expired() {
            return None;
        }
        let current = closure[next].clone();
        next += 1;

        for factor in factor_clause(&current.clause) {
            if closure.iter().any(|known| is_variant(&known.clause, &factor.clause)) {
                continue;
            }
            closure.push(Factor {
                substitution: current.substitution.compose(&factor.substitution),
                clause: factor.clause,
            });
        }
    }

    Some(closure)
}

fn is_variant(a: &Clause, b: &Clause) -> bool {
    a.len() == b.len() && subsumes(a, b) && subsumes(b, a)
}

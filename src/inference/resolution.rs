//! Binary resolution between two clauses.

use crate::config::Deadline;
use crate::data::{Clause, Literal};
use crate::inference::factor::factor_closure_until;
use crate::inference::{unify_atoms, Substitution};
use std::collections::HashSet;

/// Result of a resolution attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolvent {
    /// The resulting clause after resolution
    pub clause: Clause,
    /// Substitution applied to the (renamed) parents, factoring included
    pub substitution: Substitution,
}

/// Rename the variables of `clause` that also occur in `fixed`.
///
/// A clashing variable gets prime suffixes (`x'`, `x''`…) until its name is
/// unused by either clause. Non-clashing variables keep their names.
pub fn rename_apart(fixed: &Clause, clause: &Clause) -> Clause {
    let taken: HashSet<&str> = fixed.variables().into_iter().collect();
    let own = clause.variables();
    if !own.iter().any(|var| taken.contains(var)) {
        return clause.clone();
    }

    let mut used: HashSet<String> = taken.iter().map(|var| var.to_string()).collect();
    used.extend(own.iter().map(|var| var.to_string()));

    let mut renaming = Vec::new();
    for var in own.iter().filter(|var| taken.contains(*var)) {
        let mut fresh = format!("{}'", var);
        while used.contains(&fresh) {
            fresh.push('\'');
        }
        used.insert(fresh.clone());
        renaming.push((var.to_string(), fresh));
    }

    let rename = |name: &str| {
        renaming.iter().find(|(old, _)| old == name).map(|(_, new)| new.clone())
    };
    clause
        .iter()
        .map(|lit| Literal::new(lit.sign, lit.atom.map_args(|arg| arg.rename_variables(&rename))))
        .collect()
}

/// Attempt binary resolution on `clause1[lit1_index]` and `clause2[lit2_index]`.
///
/// The clauses must already be variable-disjoint. Returns `None` when the
/// literals are not complementary or their atoms do not unify.
pub fn binary_resolve(
    clause1: &Clause,
    lit1_index: usize,
    clause2: &Clause,
    lit2_index: usize,
) -> Option<Resolvent> {
    let lit1 = clause1.literal(lit1_index)?;
    let lit2 = clause2.literal(lit2_index)?;

    // Literals must have opposite signs and the same predicate to resolve
    if !lit1.is_complementary_to(lit2) {
        return None;
    }

    let subst = unify_atoms(&lit1.atom, &lit2.atom, &Substitution::new())?;

    let mut clause = subst.apply_to_clause(&clause1.without(lit1_index));
    for lit in clause2.without(lit2_index).iter() {
        clause.add_literal(subst.apply_to_literal(lit));
    }

    Some(Resolvent { clause, substitution: subst })
}

/// Find all resolvents between two clauses, factors of either parent included.
///
/// `clause2` is renamed apart from `clause1` first. Resolvents come out in a
/// fixed order: factors in closure order, then literal positions.
pub fn all_resolvents(clause1: &Clause, clause2: &Clause) -> Vec<Resolvent> {
    all_resolvents_until(clause1, clause2, &Deadline::never()).unwrap_or_default()
}

/// Like [`all_resolvents`], giving up with `None` once `deadline` expires.
pub fn all_resolvents_until(
    clause1: &Clause,
    clause2: &Clause,
    deadline: &Deadline,
) -> Option<Vec<Resolvent>> {
    let clause2 = rename_apart(clause1, clause2);
    let factors1 = factor_closure_until(clause1, deadline)?;
    let factors2 = factor_closure_until(&clause2, deadline)?;
    let mut results = Vec::new();

    for f1 in &factors1 {
        for f2 in &factors2 {
            if deadline.is_expired() {
                return None;
            }
            // factor substitutions touch disjoint variables
            let factoring = f1.substitution.compose(&f2.substitution);
            for i in 0..f1.clause.len() {
                for j in 0..f2.clause.len() {
                    if let Some(mut resolvent) = binary_resolve(&f1.clause, i, &f2.clause, j) {
                        resolvent.substitution = factoring.compose(&resolvent.substitution);
                        results.push(resolvent);
                    }
                }
            }
        }
    }

    Some(results)
}

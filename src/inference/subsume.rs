//! Subsumption checking for clauses.
//!
//! A clause C subsumes clause D if there exists a substitution θ such that
//! Cθ ⊆ D. This means C is more general than D, and D can be deleted.

use crate::data::{Atom, Clause, Literal, Term};
use indexmap::IndexMap;

/// Bindings built by one-way matching, general variable to specific term.
///
/// Unlike a unifier these are never applied to one another: the specific
/// side may reuse the general side's variable names.
pub type Matching = IndexMap<String, Term>;

/// Check if clause `general` subsumes clause `specific`.
///
/// Returns true if general is more general than (or equal to) specific.
pub fn subsumes(general: &Clause, specific: &Clause) -> bool {
    // Quick check: general must have <= literals than specific
    if general.len() > specific.len() {
        return false;
    }

    let general_lits: Vec<&Literal> = general.iter().collect();
    let specific_lits: Vec<&Literal> = specific.iter().collect();

    // Try to find a substitution that maps general's literals into specific
    subsumes_recursive(
        &general_lits,
        0,
        &specific_lits,
        &mut vec![false; specific_lits.len()],
        &mut Matching::new(),
    )
}

/// Recursive backtracking search for subsumption.
fn subsumes_recursive(
    general_lits: &[&Literal],
    gen_idx: usize,
    specific_lits: &[&Literal],
    used: &mut [bool],
    bindings: &mut Matching,
) -> bool {
    // Base case: all general literals matched
    let Some(gen_lit) = general_lits.get(gen_idx) else {
        return true;
    };

    for (spec_idx, spec_lit) in specific_lits.iter().enumerate() {
        if used[spec_idx] || gen_lit.sign != spec_lit.sign {
            continue;
        }

        let saved = bindings.clone();

        if match_atoms(&gen_lit.atom, &spec_lit.atom, bindings) {
            used[spec_idx] = true;

            if subsumes_recursive(general_lits, gen_idx + 1, specific_lits, used, bindings) {
                return true;
            }

            // Backtrack
            used[spec_idx] = false;
        }

        *bindings = saved;
    }

    false
}

/// One-way matching of atoms: extend `bindings` so that `general` instantiated
/// by them equals `specific`. On failure `bindings` may be partially extended.
pub fn match_atoms(general: &Atom, specific: &Atom, bindings: &mut Matching) -> bool {
    general.is_compatible(specific)
        && general
            .args
            .iter()
            .zip(specific.args.iter())
            .all(|(g, s)| match_term(g, s, bindings))
}

/// One-way matching of terms (general to specific).
fn match_term(general: &Term, specific: &Term, bindings: &mut Matching) -> bool {
    match (general, specific) {
        // Variable in general can match anything in specific
        (Term::Variable(name), _) => match bindings.get(name) {
            // Must match same term
            Some(bound) => bound == specific,
            None => {
                bindings.insert(name.clone(), specific.clone());
                true
            }
        },
        (Term::Constant(c1), Term::Constant(c2)) => c1 == c2,
        (
            Term::Compound { functor: f1, args: args1 },
            Term::Compound { functor: f2, args: args2 },
        ) => {
            f1 == f2
                && args1.len() == args2.len()
                && args1.iter().zip(args2.iter()).all(|(a1, a2)| match_term(a1, a2, bindings))
        }
        _ => false,
    }
}

/// Check if a clause is subsumed by any clause in a list.
pub fn forward_subsumed<'a, I>(clause: &Clause, clauses: I) -> bool
where
    I: IntoIterator<Item = &'a Clause>,
{
    clauses.into_iter().any(|c| subsumes(c, clause))
}

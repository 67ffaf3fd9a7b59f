//! Inference engine components for the prover.
//!
//! This module contains unification, factoring, resolution and subsumption,
//! the search loop that combines them, and the derivation history it keeps.

mod builder;
mod factor;
pub mod history;
mod output;
mod prover;
mod resolution;
mod subsume;
mod unify;

#[cfg(test)]
mod proptest_tests;

pub use builder::{refute, ProverBuilder, RefuteError, Refutation};
pub use factor::{factor_clause, factor_closure, factor_closure_until, Factor};
pub use history::{DerivationStep, History, HistoryLine};
pub use output::{outcome_summary, to_json, OutputFormatter};
pub use prover::{prove, ProofOutcome, ProofResult, Prover};
pub use resolution::{all_resolvents, all_resolvents_until, binary_resolve, rename_apart, Resolvent};
pub use subsume::{forward_subsumed, match_atoms, subsumes, Matching};
pub use unify::{unify, unify_atoms, Substitution, UnificationError, Unifier};

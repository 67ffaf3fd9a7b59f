//! Core data structures used throughout the prover.
//!
//! Terms, atoms and literals are plain value types; substitution application
//! always builds new values. A [`ClauseSet`] owns the clauses of one proof run.

pub mod clause;
pub mod clause_store;
pub mod literal;
pub mod term;

pub use clause::{Clause, ClauseId};
pub use clause_store::ClauseSet;
pub use literal::{Atom, Literal};
pub use term::{Term, TermKind};

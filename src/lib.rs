//! Resolution refutation prover for first-order premises written in prefix
//! notation.
//!
//! Premises are parsed into formulas, converted to clausal normal form and
//! handed to a resolution search that looks for the empty clause within a
//! resource budget. The derivation it finds is returned step by step.
//!
//! ```
//! use refuter::{refute, ResourceBudget};
//!
//! let premises = [
//!     "(forall x (implies (Human x) (Mortal x)))",
//!     "(Human Socrates)",
//!     "(not (Mortal Socrates))",
//! ];
//! let refutation = refute(&premises, ResourceBudget::default()).unwrap();
//! assert!(refutation.contradiction_found);
//! ```

pub mod config;
pub mod data;
pub mod inference;
pub mod normalize;
pub mod parser;
pub mod problems;
pub mod session;

pub use config::{Deadline, LimitKind, ResourceBudget, Statistics};
pub use data::{Atom, Clause, ClauseId, ClauseSet, Literal, Term, TermKind};
pub use inference::{
    prove, refute, unify, unify_atoms, DerivationStep, History, HistoryLine, OutputFormatter,
    ProofOutcome, ProofResult, Prover, ProverBuilder, RefuteError, Refutation, Substitution,
    UnificationError, Unifier,
};
pub use normalize::{prenex, NormalizeError, Normalizer};
pub use parser::{parse_premise, Formula, ParseError, ParseErrorKind, Parser};
pub use problems::Problem;
pub use session::{LineTranslator, PlainRenderer, Renderer, Session, SessionError, Translator};

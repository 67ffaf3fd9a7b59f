//! Parser for premises written in fully parenthesized prefix notation, e.g.
//! `(forall x (implies (Human x) (Mortal x)))`.

mod formula;
mod syntax;

pub use formula::Formula;
pub use syntax::{parse_premise, ParseError, ParseErrorKind, Parser};

//! First-order formula tree produced by the parser.

use crate::data::{Atom, Term};
use std::collections::BTreeSet;
use std::fmt;

/// A first-order formula with quantifiers and logical connectives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// Atomic formula
    Atom(Atom),
    /// Negation
    Not(Box<Formula>),
    /// Conjunction
    And(Box<Formula>, Box<Formula>),
    /// Disjunction
    Or(Box<Formula>, Box<Formula>),
    /// Implication
    Implies(Box<Formula>, Box<Formula>),
    /// Universal quantification
    ForAll(String, Box<Formula>),
    /// Existential quantification
    Exists(String, Box<Formula>),
}

impl Formula {
    pub fn atom(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Formula::Atom(Atom::new(predicate, args))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Formula) -> Self {
        Formula::Not(Box::new(inner))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn forall(var: impl Into<String>, body: Formula) -> Self {
        Formula::ForAll(var.into(), Box::new(body))
    }

    pub fn exists(var: impl Into<String>, body: Formula) -> Self {
        Formula::Exists(var.into(), Box::new(body))
    }

    /// Keyword naming the top-level node, `atom` for atoms.
    pub fn shape(&self) -> &'static str {
        match self {
            Formula::Atom(_) => "atom",
            Formula::Not(_) => "not",
            Formula::And(..) => "and",
            Formula::Or(..) => "or",
            Formula::Implies(..) => "implies",
            Formula::ForAll(..) => "forall",
            Formula::Exists(..) => "exists",
        }
    }

    /// Every predicate, function and constant name used in the formula.
    pub fn symbol_names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_symbols(&mut names);
        names
    }

    fn collect_symbols(&self, names: &mut BTreeSet<String>) {
        match self {
            Formula::Atom(atom) => {
                names.insert(atom.predicate.clone());
                for arg in &atom.args {
                    collect_term_symbols(arg, names);
                }
            }
            Formula::Not(inner) | Formula::ForAll(_, inner) | Formula::Exists(_, inner) => {
                inner.collect_symbols(names)
            }
            Formula::And(a, b) | Formula::Or(a, b) | Formula::Implies(a, b) => {
                a.collect_symbols(names);
                b.collect_symbols(names);
            }
        }
    }
}

fn collect_term_symbols(term: &Term, names: &mut BTreeSet<String>) {
    match term {
        Term::Variable(_) => {}
        Term::Constant(name) => {
            names.insert(name.clone());
        }
        Term::Compound { functor, args } => {
            names.insert(functor.clone());
            for arg in args {
                collect_term_symbols(arg, names);
            }
        }
    }
}

/// Prints the same prefix notation the parser reads.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(atom) => write!(f, "{}", atom),
            Formula::Not(inner) => write!(f, "(not {})", inner),
            Formula::And(a, b) => write!(f, "(and {} {})", a, b),
            Formula::Or(a, b) => write!(f, "(or {} {})", a, b),
            Formula::Implies(a, b) => write!(f, "(implies {} {})", a, b),
            Formula::ForAll(var, body) => write!(f, "(forall {} {})", var, body),
            Formula::Exists(var, body) => write!(f, "(exists {} {})", var, body),
        }
    }
}

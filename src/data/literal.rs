use super::term::Term;
use std::fmt;

/// Predicate applied to an ordered list of argument terms.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom {
    pub predicate: String,
    pub args: Vec<Term>,
}

impl Atom {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Self { predicate: predicate.into(), args }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Same predicate name and arity, the precondition for unification.
    pub fn is_compatible(&self, other: &Atom) -> bool {
        self.predicate == other.predicate && self.arity() == other.arity()
    }

    pub fn collect_variables<'a>(&'a self, acc: &mut Vec<&'a str>) {
        for arg in &self.args {
            arg.collect_variables(acc);
        }
    }

    pub fn map_args<F>(&self, f: F) -> Atom
    where
        F: Fn(&Term) -> Term,
    {
        Atom { predicate: self.predicate.clone(), args: self.args.iter().map(f).collect() }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.predicate)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        f.write_str(")")
    }
}

/// Representation of a clause literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    pub sign: bool,
    pub atom: Atom,
}

impl Literal {
    pub fn new(sign: bool, atom: Atom) -> Self {
        Self { sign, atom }
    }

    pub fn positive(atom: Atom) -> Self {
        Self::new(true, atom)
    }

    pub fn negative(atom: Atom) -> Self {
        Self::new(false, atom)
    }

    pub fn negated(&self) -> Self {
        Self { sign: !self.sign, atom: self.atom.clone() }
    }

    /// Opposite polarity on a predicate of the same name and arity.
    pub fn is_complementary_to(&self, other: &Literal) -> bool {
        self.sign != other.sign && self.atom.is_compatible(&other.atom)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign {
            write!(f, "{}", self.atom)
        } else {
            write!(f, "(not {})", self.atom)
        }
    }
}

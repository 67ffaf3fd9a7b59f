use super::literal::Literal;
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

/// Identifier for clauses, assigned monotonically from 0 by a clause set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClauseId(pub u32);

impl ClauseId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Disjunction of literals. Duplicate literals collapse and equality ignores
/// order, while iteration keeps insertion order so rendering is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clause {
    literals: IndexSet<Literal>,
}

impl Clause {
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self { literals: literals.into_iter().collect() }
    }

    /// The clause with zero literals, i.e. a derived contradiction.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Returns false if an equal literal was already present.
    pub fn add_literal(&mut self, literal: Literal) -> bool {
        self.literals.insert(literal)
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    pub fn literal(&self, index: usize) -> Option<&Literal> {
        self.literals.get_index(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// A clause holding both a literal and its exact negation.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .filter(|lit| lit.sign)
            .any(|lit| self.literals.contains(&lit.negated()))
    }

    /// Clause without the literal at `index`.
    pub fn without(&self, index: usize) -> Clause {
        Clause {
            literals: self
                .literals
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, lit)| lit.clone())
                .collect(),
        }
    }

    /// Variable names in first-occurrence order.
    pub fn variables(&self) -> Vec<&str> {
        let mut vars = Vec::new();
        for lit in &self.literals {
            lit.atom.collect_variables(&mut vars);
        }
        vars
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Unit clauses print as their literal, larger clauses as a right-nested
/// `or`, and the empty clause as `false`.
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lits: Vec<&Literal> = self.literals.iter().collect();
        match lits.split_last() {
            None => f.write_str("false"),
            Some((last, [])) => write!(f, "{}", last),
            Some((last, init)) => {
                for lit in init {
                    write!(f, "(or {} ", lit)?;
                }
                write!(f, "{}", last)?;
                for _ in init {
                    f.write_str(")")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Clause, ClauseId};
    use crate::data::{Atom, Literal, Term};

    fn p(name: &str, arg: &str) -> Atom {
        Atom::new(name, vec![Term::constant(arg)])
    }

    #[test]
    fn clause_construction() {
        let clause = Clause::new(vec![Literal::positive(p("P", "a"))]);
        assert_eq!(clause.len(), 1);
        assert!(!clause.is_empty());
        assert!(Clause::empty().is_empty());
        assert_eq!(ClauseId(7).index(), 7);
    }

    #[test]
    fn duplicate_literals_collapse() {
        let mut clause = Clause::new(vec![
            Literal::positive(p("P", "a")),
            Literal::positive(p("P", "a")),
        ]);
        assert_eq!(clause.len(), 1);
        assert!(!clause.add_literal(Literal::positive(p("P", "a"))));
        assert!(clause.add_literal(Literal::negative(p("Q", "b"))));
        assert_eq!(clause.len(), 2);
    }

    #[test]
    fn equality_ignores_order() {
        let a = Clause::new(vec![Literal::positive(p("P", "a")), Literal::positive(p("Q", "b"))]);
        let b = Clause::new(vec![Literal::positive(p("Q", "b")), Literal::positive(p("P", "a"))]);
        assert_eq!(a, b);
    }

    #[test]
    fn detects_tautology() {
        let taut = Clause::new(vec![
            Literal::positive(p("P", "a")),
            Literal::positive(p("Q", "b")),
            Literal::negative(p("P", "a")),
        ]);
        assert!(taut.is_tautology());
        let plain = Clause::new(vec![Literal::positive(p("P", "a")), Literal::negative(p("P", "b"))]);
        assert!(!plain.is_tautology());
    }

    #[test]
    fn render_nested_disjunction() {
        let clause = Clause::new(vec![
            Literal::positive(p("T", "a")),
            Literal::positive(p("R", "c")),
            Literal::negative(p("Q", "b")),
        ]);
        assert_eq!(clause.to_string(), "(or (T a) (or (R c) (not (Q b))))");
        assert_eq!(Clause::empty().to_string(), "false");
    }

    #[test]
    fn without_removes_single_literal() {
        let clause = Clause::new(vec![Literal::positive(p("P", "a")), Literal::positive(p("Q", "b"))]);
        let rest = clause.without(0);
        assert_eq!(rest, Clause::new(vec![Literal::positive(p("Q", "b"))]));
    }
}

//! Unification algorithm for first-order terms.
//!
//! Implements Robinson unification with occurs check. Substitutions are kept
//! idempotent: every new binding is applied to the existing right-hand sides,
//! so a single pass of [`Substitution::apply`] fully instantiates a term.

use crate::data::{Atom, Clause, Literal, Term};
use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

/// A substitution mapping variable names to terms, in binding order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: IndexMap<String, Term>,
}

impl Substitution {
    /// Create an empty substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable to a term.
    ///
    /// The term is first instantiated by the current bindings. Binding a
    /// variable to itself is a no-op; binding it to a term that contains it
    /// fails the occurs check and leaves the substitution unchanged.
    pub fn bind(&mut self, var: impl Into<String>, term: Term) -> Result<(), UnificationError> {
        let var = var.into();
        let term = self.apply(&term);

        if let Term::Variable(name) = &term {
            if *name == var {
                return Ok(());
            }
        }
        if term.contains_variable(&var) {
            return Err(UnificationError::OccursCheck { var, term });
        }

        let single = Substitution { bindings: IndexMap::from([(var.clone(), term.clone())]) };
        for bound in self.bindings.values_mut() {
            *bound = single.apply(bound);
        }
        self.bindings.insert(var, term);
        Ok(())
    }

    /// Look up a variable's binding.
    pub fn lookup(&self, var: &str) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Check if the substitution is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Iterate over all bindings in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.bindings.iter().map(|(var, term)| (var.as_str(), term))
    }

    /// Apply this substitution to a term, returning a new term.
    pub fn apply(&self, term: &Term) -> Term {
        match term {
            Term::Variable(name) => match self.lookup(name) {
                Some(bound) => bound.clone(),
                None => term.clone(),
            },
            Term::Constant(_) => term.clone(),
            Term::Compound { functor, args } => Term::Compound {
                functor: functor.clone(),
                args: args.iter().map(|arg| self.apply(arg)).collect(),
            },
        }
    }

    pub fn apply_to_atom(&self, atom: &Atom) -> Atom {
        atom.map_args(|arg| self.apply(arg))
    }

    /// Apply this substitution to a literal.
    pub fn apply_to_literal(&self, lit: &Literal) -> Literal {
        Literal::new(lit.sign, self.apply_to_atom(&lit.atom))
    }

    /// Apply this substitution to every literal; literals that become equal merge.
    pub fn apply_to_clause(&self, clause: &Clause) -> Clause {
        clause.iter().map(|lit| self.apply_to_literal(lit)).collect()
    }

    /// Compose this substitution with another.
    /// The result applies self first, then other.
    ///
    /// `other` is expected to be computed on terms already instantiated by
    /// `self`, which is how the prover chains factoring and resolution; under
    /// that condition the composition stays idempotent.
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut bindings = IndexMap::new();

        for (var, term) in &self.bindings {
            let term = other.apply(term);
            if term != Term::Variable(var.clone()) {
                bindings.insert(var.clone(), term);
            }
        }

        for (var, term) in &other.bindings {
            if !self.bindings.contains_key(var) {
                bindings.insert(var.clone(), term.clone());
            }
        }

        Substitution { bindings }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (var, term)) in self.bindings.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} -> {}", var, term)?;
        }
        f.write_str("}")
    }
}

/// Errors that can occur during unification.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnificationError {
    /// Occurs check failed (variable occurs in term it's being unified with)
    #[error("occurs check failed: {var} occurs in {term}")]
    OccursCheck { var: String, term: Term },
    /// Symbol clash (different constants or function symbols)
    #[error("symbol clash between {left} and {right}")]
    SymbolClash { left: Term, right: Term },
    /// Arity mismatch
    #[error("arity mismatch: expected {expected}, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    /// Atoms with different predicate names or arities
    #[error("predicate mismatch: {left} vs {right}")]
    PredicateMismatch { left: String, right: String },
}

/// Unifier for first-order terms.
#[derive(Clone, Debug, Default)]
pub struct Unifier {
    /// Current substitution being built
    substitution: Substitution,
}

impl Unifier {
    /// Create a new unifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing substitution.
    pub fn with_substitution(substitution: Substitution) -> Self {
        Self { substitution }
    }

    /// Get the current substitution.
    pub fn substitution(&self) -> &Substitution {
        &self.substitution
    }

    /// Consume the unifier and return the substitution.
    pub fn into_substitution(self) -> Substitution {
        self.substitution
    }

    /// Attempt to unify two terms.
    ///
    /// Returns Ok(()) if unification succeeds, updating the internal substitution.
    /// On error the substitution may hold bindings made before the failure.
    pub fn unify(&mut self, t1: &Term, t2: &Term) -> Result<(), UnificationError> {
        // Apply current substitution to get the "dereferenced" terms
        let t1 = self.substitution.apply(t1);
        let t2 = self.substitution.apply(t2);

        match (&t1, &t2) {
            (Term::Variable(v1), Term::Variable(v2)) if v1 == v2 => Ok(()),

            (Term::Variable(var), _) => self.substitution.bind(var.clone(), t2),

            (_, Term::Variable(var)) => self.substitution.bind(var.clone(), t1),

            (Term::Constant(c1), Term::Constant(c2)) => {
                if c1 == c2 {
                    Ok(())
                } else {
                    Err(UnificationError::SymbolClash { left: t1, right: t2 })
                }
            }

            (
                Term::Compound { functor: f1, args: args1 },
                Term::Compound { functor: f2, args: args2 },
            ) => {
                if f1 != f2 {
                    return Err(UnificationError::SymbolClash { left: t1.clone(), right: t2.clone() });
                }
                if args1.len() != args2.len() {
                    return Err(UnificationError::ArityMismatch {
                        expected: args1.len(),
                        found: args2.len(),
                    });
                }
                for (a1, a2) in args1.iter().zip(args2.iter()) {
                    self.unify(a1, a2)?;
                }
                Ok(())
            }

            _ => Err(UnificationError::SymbolClash { left: t1, right: t2 }),
        }
    }

    /// Unify two atoms argument by argument, left to right.
    pub fn unify_atoms(&mut self, a1: &Atom, a2: &Atom) -> Result<(), UnificationError> {
        if !a1.is_compatible(a2) {
            return Err(UnificationError::PredicateMismatch {
                left: format!("{}/{}", a1.predicate, a1.arity()),
                right: format!("{}/{}", a2.predicate, a2.arity()),
            });
        }
        for (t1, t2) in a1.args.iter().zip(a2.args.iter()) {
            self.unify(t1, t2)?;
        }
        Ok(())
    }
}

/// Most general unifier of two terms extending `current`, or `None`.
pub fn unify(t1: &Term, t2: &Term, current: &Substitution) -> Option<Substitution> {
    let mut unifier = Unifier::with_substitution(current.clone());
    unifier.unify(t1, t2).ok()?;
    Some(unifier.into_substitution())
}

/// Most general unifier of two atoms extending `current`, or `None`.
pub fn unify_atoms(a1: &Atom, a2: &Atom, current: &Substitution) -> Option<Substitution> {
    let mut unifier = Unifier::with_substitution(current.clone());
    unifier.unify_atoms(a1, a2).ok()?;
    Some(unifier.into_substitution())
}

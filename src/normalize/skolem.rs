//! Standardizing apart and Skolemization.
//!
//! Both stages need state shared across the premises of one problem, so they
//! live on [`Normalizer`].

use super::{NormalizeError, Normalizer};
use crate::data::{Atom, Term};
use crate::parser::Formula;
use std::collections::HashMap;

impl Normalizer {
    /// Give every quantified variable a name unused so far in the premise
    /// set. The first quantifier over a name keeps it; later ones get the
    /// smallest free numeric suffix.
    pub fn standardize_apart(&mut self, formula: &Formula) -> Formula {
        let mut scope = Vec::new();
        self.standardize(formula, &mut scope)
    }

    fn standardize(&mut self, formula: &Formula, scope: &mut Vec<(String, String)>) -> Formula {
        match formula {
            Formula::Atom(atom) => Formula::Atom(atom.map_args(|arg| {
                arg.rename_variables(&|name: &str| {
                    scope
                        .iter()
                        .rev()
                        .find(|(old, _)| old == name)
                        .map(|(_, new)| new.clone())
                })
            })),
            Formula::Not(inner) => Formula::not(self.standardize(inner, scope)),
            Formula::And(a, b) => {
                let a = self.standardize(a, scope);
                Formula::and(a, self.standardize(b, scope))
            }
            Formula::Or(a, b) => {
                let a = self.standardize(a, scope);
                Formula::or(a, self.standardize(b, scope))
            }
            Formula::Implies(a, b) => {
                let a = self.standardize(a, scope);
                Formula::implies(a, self.standardize(b, scope))
            }
            Formula::ForAll(var, body) => {
                let fresh = self.fresh_variable(var);
                scope.push((var.clone(), fresh.clone()));
                let body = self.standardize(body, scope);
                scope.pop();
                Formula::forall(fresh, body)
            }
            Formula::Exists(var, body) => {
                let fresh = self.fresh_variable(var);
                scope.push((var.clone(), fresh.clone()));
                let body = self.standardize(body, scope);
                scope.pop();
                Formula::exists(fresh, body)
            }
        }
    }

    fn fresh_variable(&mut self, base: &str) -> String {
        let name = if self.name_taken(base) {
            (1..)
                .map(|n| format!("{}{}", base, n))
                .find(|candidate| !self.name_taken(candidate))
                .unwrap_or_else(|| base.to_string())
        } else {
            base.to_string()
        };
        self.variables.insert(name.clone());
        name
    }

    /// Variables never share a name with a symbol, so rendered clauses stay
    /// unambiguous.
    fn name_taken(&self, name: &str) -> bool {
        self.variables.contains(name) || self.symbols.contains(name)
    }

    /// Replace each existential variable by a Skolem term over the universal
    /// variables in scope and drop the existential quantifier.
    ///
    /// Expects standardized negation normal form.
    pub fn skolemize(&mut self, formula: &Formula) -> Result<Formula, NormalizeError> {
        let mut universals = Vec::new();
        let mut witnesses = HashMap::new();
        self.skolemize_in(formula, &mut universals, &mut witnesses)
    }

    fn skolemize_in(
        &mut self,
        formula: &Formula,
        universals: &mut Vec<String>,
        witnesses: &mut HashMap<String, Term>,
    ) -> Result<Formula, NormalizeError> {
        Ok(match formula {
            Formula::Atom(atom) => Formula::Atom(instantiate(atom, witnesses)),
            Formula::Not(inner) => match inner.as_ref() {
                Formula::Atom(atom) => Formula::not(Formula::Atom(instantiate(atom, witnesses))),
                _ => return Err(NormalizeError::unexpected("skolemize", formula)),
            },
            Formula::And(a, b) => Formula::and(
                self.skolemize_in(a, universals, witnesses)?,
                self.skolemize_in(b, universals, witnesses)?,
            ),
            Formula::Or(a, b) => Formula::or(
                self.skolemize_in(a, universals, witnesses)?,
                self.skolemize_in(b, universals, witnesses)?,
            ),
            Formula::ForAll(var, body) => {
                universals.push(var.clone());
                let body = self.skolemize_in(body, universals, witnesses);
                universals.pop();
                Formula::forall(var.clone(), body?)
            }
            Formula::Exists(var, body) => {
                let symbol = self.fresh_skolem();
                let witness = if universals.is_empty() {
                    Term::constant(symbol)
                } else {
                    Term::compound(symbol, universals.iter().map(Term::variable).collect())
                };
                witnesses.insert(var.clone(), witness);
                let body = self.skolemize_in(body, universals, witnesses);
                witnesses.remove(var);
                body?
            }
            Formula::Implies(..) => return Err(NormalizeError::unexpected("skolemize", formula)),
        })
    }

    fn fresh_skolem(&mut self) -> String {
        loop {
            self.next_skolem += 1;
            let name = format!("sk{}", self.next_skolem);
            if !self.variables.contains(&name) && self.symbols.insert(name.clone()) {
                return name;
            }
        }
    }
}

/// Witness terms never mention existential variables, so one pass suffices.
fn instantiate(atom: &Atom, witnesses: &HashMap<String, Term>) -> Atom {
    if witnesses.is_empty() {
        return atom.clone();
    }
    atom.map_args(|arg| replace_variables(arg, witnesses))
}

fn replace_variables(term: &Term, witnesses: &HashMap<String, Term>) -> Term {
    match term {
        Term::Variable(name) => witnesses.get(name).cloned().unwrap_or_else(|| term.clone()),
        Term::Constant(_) => term.clone(),
        Term::Compound { functor, args } => Term::Compound {
            functor: functor.clone(),
            args: args.iter().map(|arg| replace_variables(arg, witnesses)).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::normalize::Normalizer;
    use crate::parser::{parse_premise, Formula};

    fn parse(text: &str) -> Formula {
        parse_premise(text).expect("valid premise")
    }

    #[test]
    fn first_use_keeps_name_later_uses_get_suffix() {
        let mut normalizer = Normalizer::new();
        let first = normalizer.standardize_apart(&parse("(forall x (P x))"));
        let second = normalizer.standardize_apart(&parse("(forall x (exists x (Q x)))"));
        assert_eq!(first.to_string(), "(forall x (P x))");
        assert_eq!(second.to_string(), "(forall x1 (exists x2 (Q x2)))");
    }

    #[test]
    fn shadowing_is_respected() {
        let mut normalizer = Normalizer::new();
        let f = normalizer
            .standardize_apart(&parse("(forall x (and (P x) (exists x (and (Q x) (R x)))))"));
        assert_eq!(f.to_string(), "(forall x (and (P x) (exists x1 (and (Q x1) (R x1)))))");
    }

    #[test]
    fn skolem_constant_without_universals() {
        let mut normalizer = Normalizer::new();
        let f = normalizer.skolemize(&parse("(exists y (P y))")).expect("skolemize");
        assert_eq!(f.to_string(), "(P sk1)");
    }

    #[test]
    fn skolem_function_over_universals_in_scope() {
        let mut normalizer = Normalizer::new();
        let f = normalizer
            .skolemize(&parse("(forall x (forall z (exists y (R x y z))))"))
            .expect("skolemize");
        assert_eq!(f.to_string(), "(forall x (forall z (R x (sk1 x z) z)))");
    }

    #[test]
    fn skolem_symbols_avoid_existing_names() {
        let premise = parse("(and (P sk1) (exists y (Q y)))");
        let mut normalizer = Normalizer::new();
        normalizer.reserve_symbols(&premise);
        let f = normalizer.skolemize(&premise).expect("skolemize");
        assert_eq!(f.to_string(), "(and (P sk1) (Q sk2))");
    }

    #[test]
    fn variables_avoid_symbol_names() {
        let constants = parse("(Q x1 x)");
        let mut normalizer = Normalizer::new();
        normalizer.reserve_symbols(&constants);
        normalizer.standardize_apart(&parse("(forall y (P y))"));
        let f = normalizer.standardize_apart(&parse("(forall x (exists y (R x y)))"));
        assert_eq!(f.to_string(), "(forall x2 (exists y1 (R x2 y1)))");
    }

    #[test]
    fn skolem_symbols_avoid_variable_names() {
        let mut normalizer = Normalizer::new();
        let f = normalizer.standardize_apart(&parse("(forall sk1 (exists y (P sk1 y)))"));
        let f = normalizer.skolemize(&f).expect("skolemize");
        assert_eq!(f.to_string(), "(forall sk1 (P sk1 (sk2 sk1)))");
    }
}

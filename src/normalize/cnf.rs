//! Stateless rewriting stages: implication elimination, negation normal
//! form, quantifier dropping, distribution and clause splitting.

use super::NormalizeError;
use crate::data::{Clause, Literal};
use crate::parser::Formula;

/// Rewrite every `(implies A B)` as `(or (not A) B)`.
pub fn eliminate_implications(formula: &Formula) -> Formula {
    match formula {
        Formula::Atom(_) => formula.clone(),
        Formula::Not(inner) => Formula::not(eliminate_implications(inner)),
        Formula::And(a, b) => Formula::and(eliminate_implications(a), eliminate_implications(b)),
        Formula::Or(a, b) => Formula::or(eliminate_implications(a), eliminate_implications(b)),
        Formula::Implies(a, b) => Formula::or(
            Formula::not(eliminate_implications(a)),
            eliminate_implications(b),
        ),
        Formula::ForAll(var, body) => Formula::forall(var.clone(), eliminate_implications(body)),
        Formula::Exists(var, body) => Formula::exists(var.clone(), eliminate_implications(body)),
    }
}

/// Push negations down to atoms using De Morgan's laws and quantifier
/// duality; double negations cancel.
pub fn negation_normal_form(formula: &Formula) -> Result<Formula, NormalizeError> {
    Ok(match formula {
        Formula::Atom(_) => formula.clone(),
        Formula::Not(inner) => negate(inner)?,
        Formula::And(a, b) => Formula::and(negation_normal_form(a)?, negation_normal_form(b)?),
        Formula::Or(a, b) => Formula::or(negation_normal_form(a)?, negation_normal_form(b)?),
        Formula::ForAll(var, body) => Formula::forall(var.clone(), negation_normal_form(body)?),
        Formula::Exists(var, body) => Formula::exists(var.clone(), negation_normal_form(body)?),
        Formula::Implies(..) => return Err(NormalizeError::unexpected("negation", formula)),
    })
}

/// Negation normal form of `(not formula)`.
fn negate(formula: &Formula) -> Result<Formula, NormalizeError> {
    Ok(match formula {
        Formula::Atom(_) => Formula::not(formula.clone()),
        Formula::Not(inner) => negation_normal_form(inner)?,
        Formula::And(a, b) => Formula::or(negate(a)?, negate(b)?),
        Formula::Or(a, b) => Formula::and(negate(a)?, negate(b)?),
        Formula::ForAll(var, body) => Formula::exists(var.clone(), negate(body)?),
        Formula::Exists(var, body) => Formula::forall(var.clone(), negate(body)?),
        Formula::Implies(..) => return Err(NormalizeError::unexpected("negation", formula)),
    })
}

/// Remove universal quantifiers; free variables are read as universal.
pub fn drop_universals(formula: &Formula) -> Result<Formula, NormalizeError> {
    Ok(match formula {
        Formula::Atom(_) | Formula::Not(_) => formula.clone(),
        Formula::And(a, b) => Formula::and(drop_universals(a)?, drop_universals(b)?),
        Formula::Or(a, b) => Formula::or(drop_universals(a)?, drop_universals(b)?),
        Formula::ForAll(_, body) => drop_universals(body)?,
        Formula::Exists(..) | Formula::Implies(..) => {
            return Err(NormalizeError::unexpected("universals", formula))
        }
    })
}

/// Distribute `or` over `and` until the formula is a conjunction of
/// disjunctions of literals.
pub fn distribute(formula: &Formula) -> Result<Formula, NormalizeError> {
    match formula {
        Formula::Atom(_) | Formula::Not(_) => Ok(formula.clone()),
        Formula::And(a, b) => Ok(Formula::and(distribute(a)?, distribute(b)?)),
        Formula::Or(a, b) => Ok(merge_or(distribute(a)?, distribute(b)?)),
        _ => Err(NormalizeError::unexpected("distribute", formula)),
    }
}

/// `(or left right)` for operands already in CNF.
fn merge_or(left: Formula, right: Formula) -> Formula {
    match (left, right) {
        (Formula::And(a, b), right) => {
            Formula::and(merge_or(*a, right.clone()), merge_or(*b, right))
        }
        (left, Formula::And(a, b)) => {
            Formula::and(merge_or(left.clone(), *a), merge_or(left, *b))
        }
        (left, right) => Formula::or(left, right),
    }
}

/// Split a CNF formula into clauses, left to right, dropping tautologies.
pub fn split(formula: &Formula) -> Result<Vec<Clause>, NormalizeError> {
    let mut clauses = Vec::new();
    split_into(formula, &mut clauses)?;
    Ok(clauses)
}

fn split_into(formula: &Formula, clauses: &mut Vec<Clause>) -> Result<(), NormalizeError> {
    match formula {
        Formula::And(a, b) => {
            split_into(a, clauses)?;
            split_into(b, clauses)
        }
        _ => {
            let mut clause = Clause::empty();
            collect_disjuncts(formula, &mut clause)?;
            if !clause.is_tautology() {
                clauses.push(clause);
            }
            Ok(())
        }
    }
}

fn collect_disjuncts(formula: &Formula, clause: &mut Clause) -> Result<(), NormalizeError> {
    match formula {
        Formula::Or(a, b) => {
            collect_disjuncts(a, clause)?;
            collect_disjuncts(b, clause)
        }
        Formula::Atom(atom) => {
            clause.add_literal(Literal::positive(atom.clone()));
            Ok(())
        }
        Formula::Not(inner) => match inner.as_ref() {
            Formula::Atom(atom) => {
                clause.add_literal(Literal::negative(atom.clone()));
                Ok(())
            }
            other => Err(NormalizeError::unexpected("split", other)),
        },
        _ => Err(NormalizeError::unexpected("split", formula)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_premise;

    fn parse(text: &str) -> Formula {
        parse_premise(text).expect("valid premise")
    }

    #[test]
    fn implication_becomes_disjunction() {
        let f = eliminate_implications(&parse("(implies (P a) (Q a))"));
        assert_eq!(f, parse("(or (not (P a)) (Q a))"));
    }

    #[test]
    fn de_morgan_and_double_negation() {
        let f = negation_normal_form(&parse("(not (and (P a) (not (Q b))))")).expect("nnf");
        assert_eq!(f, parse("(or (not (P a)) (Q b))"));

        let g = negation_normal_form(&parse("(not (or (P a) (Q b)))")).expect("nnf");
        assert_eq!(g, parse("(and (not (P a)) (not (Q b)))"));
    }

    #[test]
    fn quantifier_duality() {
        let f = negation_normal_form(&parse("(not (forall x (exists y (R x y))))")).expect("nnf");
        assert_eq!(f, parse("(exists x (forall y (not (R x y))))"));
    }

    #[test]
    fn negation_stage_rejects_implication() {
        let err = negation_normal_form(&parse("(implies (P a) (Q a))")).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::UnexpectedShape { stage: "negation", shape: "implies" }
        );
    }

    #[test]
    fn distributes_or_over_and() {
        let f = distribute(&parse("(or (P a) (and (Q a) (R a)))")).expect("cnf");
        assert_eq!(f, parse("(and (or (P a) (Q a)) (or (P a) (R a)))"));

        let clauses = split(&f).expect("split");
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].to_string(), "(or (P a) (Q a))");
        assert_eq!(clauses[1].to_string(), "(or (P a) (R a))");
    }

    #[test]
    fn split_drops_tautologies() {
        let clauses = split(&parse("(and (or (P a) (not (P a))) (Q b))")).expect("split");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].to_string(), "(Q b)");
    }

    #[test]
    fn split_merges_duplicate_literals() {
        let clauses = split(&parse("(or (P a) (P a))")).expect("split");
        assert_eq!(clauses[0].len(), 1);
    }
}

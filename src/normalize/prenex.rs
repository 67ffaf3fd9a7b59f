//! Prenex normal form, for display.

use super::{cnf, NormalizeError, Normalizer};
use crate::parser::Formula;

enum Quantifier {
    ForAll(String),
    Exists(String),
}

/// Prenex normal form of a single formula: implications eliminated,
/// negations pushed inward, variables standardized apart and every
/// quantifier pulled to the front in the order it was met.
pub fn prenex(formula: &Formula) -> Result<Formula, NormalizeError> {
    let mut normalizer = Normalizer::new();
    normalizer.prenex(formula)
}

impl Normalizer {
    /// Like [`prenex`], sharing variable names with other premises of this
    /// normalizer.
    pub fn prenex(&mut self, formula: &Formula) -> Result<Formula, NormalizeError> {
        let nnf = cnf::negation_normal_form(&cnf::eliminate_implications(formula))?;
        let standardized = self.standardize_apart(&nnf);

        let mut prefix = Vec::new();
        let matrix = pull_quantifiers(&standardized, &mut prefix)?;

        Ok(prefix.into_iter().rev().fold(matrix, |body, quantifier| match quantifier {
            Quantifier::ForAll(var) => Formula::forall(var, body),
            Quantifier::Exists(var) => Formula::exists(var, body),
        }))
    }
}

/// Names are unique after standardizing, so moving a quantifier outward
/// cannot capture anything.
fn pull_quantifiers(
    formula: &Formula,
    prefix: &mut Vec<Quantifier>,
) -> Result<Formula, NormalizeError> {
    Ok(match formula {
        Formula::Atom(_) | Formula::Not(_) => formula.clone(),
        Formula::And(a, b) => {
            let a = pull_quantifiers(a, prefix)?;
            Formula::and(a, pull_quantifiers(b, prefix)?)
        }
        Formula::Or(a, b) => {
            let a = pull_quantifiers(a, prefix)?;
            Formula::or(a, pull_quantifiers(b, prefix)?)
        }
        Formula::ForAll(var, body) => {
            prefix.push(Quantifier::ForAll(var.clone()));
            pull_quantifiers(body, prefix)?
        }
        Formula::Exists(var, body) => {
            prefix.push(Quantifier::Exists(var.clone()));
            pull_quantifiers(body, prefix)?
        }
        Formula::Implies(..) => return Err(NormalizeError::unexpected("prenex", formula)),
    })
}

#[cfg(test)]
mod tests {
    use super::prenex;
    use crate::parser::parse_premise;

    #[test]
    fn pulls_quantifiers_to_front() {
        let f = parse_premise("(implies (forall x (P x)) (exists y (Q y)))").expect("parse");
        let p = prenex(&f).expect("prenex");
        assert_eq!(p.to_string(), "(exists x (exists y (or (not (P x)) (Q y))))");
    }

    #[test]
    fn renames_clashing_quantifiers() {
        let f = parse_premise("(and (forall x (P x)) (forall x (Q x)))").expect("parse");
        let p = prenex(&f).expect("prenex");
        assert_eq!(p.to_string(), "(forall x (forall x1 (and (P x) (Q x1))))");
    }
}

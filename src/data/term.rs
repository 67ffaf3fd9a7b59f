use std::fmt;

/// Basic classification of terms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TermKind {
    Variable,
    Constant,
    Compound,
}

/// Representation of a first-order term.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    Variable(String),
    Constant(String),
    Compound { functor: String, args: Vec<Term> },
}

impl Term {
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Self::Constant(name.into())
    }

    pub fn compound(functor: impl Into<String>, args: Vec<Term>) -> Self {
        Self::Compound { functor: functor.into(), args }
    }

    pub fn kind(&self) -> TermKind {
        match self {
            Term::Variable(_) => TermKind::Variable,
            Term::Constant(_) => TermKind::Constant,
            Term::Compound { .. } => TermKind::Compound,
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Term::Compound { args, .. } => args.len(),
            _ => 0,
        }
    }

    /// True if the variable `var` occurs anywhere inside this term.
    pub fn contains_variable(&self, var: &str) -> bool {
        match self {
            Term::Variable(name) => name == var,
            Term::Constant(_) => false,
            Term::Compound { args, .. } => {
                args.iter().any(|arg| arg.contains_variable(var))
            }
        }
    }

    /// Collect variable names in first-occurrence order, without duplicates.
    pub fn collect_variables<'a>(&'a self, acc: &mut Vec<&'a str>) {
        match self {
            Term::Variable(name) => {
                if !acc.contains(&name.as_str()) {
                    acc.push(name);
                }
            }
            Term::Constant(_) => {}
            Term::Compound { args, .. } => {
                for arg in args {
                    arg.collect_variables(acc);
                }
            }
        }
    }

    /// Rename variables through `rename`, leaving unmapped names untouched.
    pub fn rename_variables<F>(&self, rename: &F) -> Term
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            Term::Variable(name) => match rename(name) {
                Some(new_name) => Term::Variable(new_name),
                None => self.clone(),
            },
            Term::Constant(_) => self.clone(),
            Term::Compound { functor, args } => Term::Compound {
                functor: functor.clone(),
                args: args.iter().map(|arg| arg.rename_variables(rename)).collect(),
            },
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(name) | Term::Constant(name) => f.write_str(name),
            Term::Compound { functor, args } => {
                write!(f, "({}", functor)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Term, TermKind};

    #[test]
    fn classify_terms() {
        let t_const = Term::constant("a");
        let t_var = Term::variable("x");
        let t_fun = Term::compound("f", vec![t_const.clone(), t_var.clone()]);
        assert_eq!(t_const.kind(), TermKind::Constant);
        assert_eq!(t_var.kind(), TermKind::Variable);
        assert_eq!(t_fun.kind(), TermKind::Compound);
        assert_eq!(t_fun.arity(), 2);
        assert_eq!(t_var.arity(), 0);
    }

    #[test]
    fn render_prefix_notation() {
        let term = Term::compound(
            "f",
            vec![Term::variable("x"), Term::compound("g", vec![Term::constant("a")])],
        );
        assert_eq!(term.to_string(), "(f x (g a))");
    }

    #[test]
    fn occurs_detects_nested_variable() {
        let term = Term::compound("f", vec![Term::compound("g", vec![Term::variable("x")])]);
        assert!(term.contains_variable("x"));
        assert!(!term.contains_variable("y"));
        // constants never count as variables, even with the same name
        assert!(!Term::constant("x").contains_variable("x"));
    }

    #[test]
    fn collect_variables_in_order() {
        let term = Term::compound(
            "f",
            vec![Term::variable("y"), Term::variable("x"), Term::variable("y")],
        );
        let mut vars = Vec::new();
        term.collect_variables(&mut vars);
        assert_eq!(vars, vec!["y", "x"]);
    }
}

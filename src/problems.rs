//! Bundled test problems.
//!
//! Each problem pairs a word problem with its premises already written in
//! prefix notation, the conclusion negated so that a contradiction proves it.

/// A bundled word problem and its premises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Problem {
    pub name: &'static str,
    pub text: &'static str,
    pub premises: &'static [&'static str],
}

const PROBLEMS: &[Problem] = &[
    Problem {
        name: "socrates",
        text: "All humans are mortal. Socrates is a human. Socrates is mortal.",
        premises: &[
            "(forall x (implies (Human x) (Mortal x)))",
            "(Human Socrates)",
            "(not (Mortal Socrates))",
        ],
    },
    Problem {
        name: "quacks",
        text: "Some patients like all doctors. No patient likes any quack. No doctor is a quack.",
        premises: &[
            "(exists x (and (Patient x) (forall y (implies (Doctor y) (Likes x y)))))",
            "(forall x (implies (Patient x) (forall y (implies (Quack y) (not (Likes x y))))))",
            "(exists x (and (Doctor x) (Quack x)))",
        ],
    },
    Problem {
        name: "grandparent",
        text: "Tom is a parent of Bob. Bob is a parent of Ann. A parent of a parent is a grandparent. Tom is a grandparent of Ann.",
        premises: &[
            "(Parent Tom Bob)",
            "(Parent Bob Ann)",
            "(forall x (forall y (forall z (implies (and (Parent x y) (Parent y z)) (Grandparent x z)))))",
            "(not (Grandparent Tom Ann))",
        ],
    },
    Problem {
        name: "barber",
        text: "There is a barber who shaves exactly those who do not shave themselves.",
        premises: &[
            "(exists b (forall y (and (implies (Shaves b y) (not (Shaves y y))) (implies (not (Shaves y y)) (Shaves b y)))))",
        ],
    },
    Problem {
        name: "drinks",
        text: "Alice drinks tea. Bob drinks coffee. Alice drinks coffee.",
        premises: &[
            "(Drinks Alice Tea)",
            "(Drinks Bob Coffee)",
            "(not (Drinks Alice Coffee))",
        ],
    },
    Problem {
        name: "numbers",
        text: "Zero is a number. The successor of a number is a number. Zero is even.",
        premises: &[
            "(Number zero)",
            "(forall x (implies (Number x) (Number (succ x))))",
            "(not (Even zero))",
        ],
    },
];

/// Every bundled problem, in menu order.
pub fn catalog() -> &'static [Problem] {
    PROBLEMS
}

/// Look a problem up by name.
pub fn find(name: &str) -> Option<&'static Problem> {
    PROBLEMS.iter().find(|problem| problem.name == name)
}

#[cfg(test)]
mod tests {
    use super::{catalog, find};
    use crate::parser::Parser;

    #[test]
    fn every_premise_parses() {
        let parser = Parser::new();
        for problem in catalog() {
            for result in parser.parse_premises(problem.premises) {
                assert!(result.is_ok(), "{}: {:?}", problem.name, result);
            }
        }
    }

    #[test]
    fn names_are_unique() {
        for problem in catalog() {
            assert_eq!(find(problem.name), Some(problem));
        }
        assert!(find("missing").is_none());
    }
}

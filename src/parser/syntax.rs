use super::formula::Formula;
use crate::data::{Atom, Term};
use thiserror::Error;

const KEYWORDS: [&str; 6] = ["forall", "exists", "implies", "not", "and", "or"];

/// What went wrong while reading a premise.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("empty premise")]
    Empty,
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,
    #[error("expected '(' but found `{found}`")]
    ExpectedOpenParen { found: String },
    #[error("expected a predicate, function or connective name")]
    ExpectedName,
    #[error("`{quantifier}` must be followed by a variable name")]
    MissingVariable { quantifier: String },
    #[error("`{connective}` takes {expected} operand(s) but {found} given")]
    Arity { connective: String, expected: usize, found: usize },
    #[error("unexpected trailing input")]
    TrailingInput,
}

/// Parser error information.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}position {position}: {kind}", premise_label(.premise))]
pub struct ParseError {
    /// Zero-based index of the premise, when parsed as part of a premise list.
    pub premise: Option<usize>,
    /// Byte offset into the premise text.
    pub position: usize,
    pub kind: ParseErrorKind,
}

fn premise_label(premise: &Option<usize>) -> String {
    match premise {
        Some(index) => format!("premise {}, ", index + 1),
        None => String::new(),
    }
}

impl ParseError {
    fn new(position: usize, kind: ParseErrorKind) -> Self {
        Self { premise: None, position, kind }
    }

    pub fn in_premise(mut self, index: usize) -> Self {
        self.premise = Some(index);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum TokenKind<'a> {
    Open,
    Close,
    Ident(&'a str),
}

#[derive(Clone, Debug)]
struct Token<'a> {
    kind: TokenKind<'a>,
    pos: usize,
}

/// Split into tokens and check parenthesis balance up front.
fn tokenize(text: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut open_positions = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            c if c.is_whitespace() => {}
            '(' => {
                open_positions.push(pos);
                tokens.push(Token { kind: TokenKind::Open, pos });
            }
            ')' => {
                if open_positions.pop().is_none() {
                    return Err(ParseError::new(pos, ParseErrorKind::UnbalancedParenthesis));
                }
                tokens.push(Token { kind: TokenKind::Close, pos });
            }
            _ => {
                let mut end = pos + ch.len_utf8();
                while let Some(&(next_pos, next)) = chars.peek() {
                    if next.is_whitespace() || next == '(' || next == ')' {
                        break;
                    }
                    end = next_pos + next.len_utf8();
                    chars.next();
                }
                tokens.push(Token { kind: TokenKind::Ident(&text[pos..end]), pos });
            }
        }
    }

    if let Some(pos) = open_positions.pop() {
        return Err(ParseError::new(pos, ParseErrorKind::UnbalancedParenthesis));
    }
    Ok(tokens)
}

/// Parse one premise in fully parenthesized prefix notation.
pub fn parse_premise(text: &str) -> Result<Formula, ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ParseError::new(0, ParseErrorKind::Empty));
    }

    let mut parser = PrefixParser { tokens, index: 0, end: text.len(), scope: Vec::new() };
    let formula = parser.parse_formula()?;
    if let Some(token) = parser.peek() {
        return Err(ParseError::new(token.pos, ParseErrorKind::TrailingInput));
    }
    Ok(formula)
}

/// Parser entry point for premise lists.
#[derive(Clone, Debug, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_str(&self, premise: &str) -> Result<Formula, ParseError> {
        parse_premise(premise)
    }

    /// Parse every premise independently; a failure never stops the rest.
    pub fn parse_premises<S: AsRef<str>>(
        &self,
        premises: &[S],
    ) -> Vec<Result<Formula, ParseError>> {
        premises
            .iter()
            .enumerate()
            .map(|(index, text)| {
                parse_premise(text.as_ref()).map_err(|err| err.in_premise(index))
            })
            .collect()
    }
}

/// Internal recursive-descent state over the token list.
struct PrefixParser<'a> {
    tokens: Vec<Token<'a>>,
    index: usize,
    end: usize,
    /// Quantified variables enclosing the current position, innermost last.
    scope: Vec<String>,
}

impl<'a> PrefixParser<'a> {
    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.index)
    }

    fn next(&mut self) -> Result<Token<'a>, ParseError> {
        let token = self
            .tokens
            .get(self.index)
            .cloned()
            .ok_or_else(|| ParseError::new(self.end, ParseErrorKind::UnexpectedEnd))?;
        self.index += 1;
        Ok(token)
    }

    fn at_close(&self) -> bool {
        matches!(self.peek().map(|t| &t.kind), Some(TokenKind::Close))
    }

    fn expect_close(&mut self) -> Result<(), ParseError> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Close => Ok(()),
            _ => Err(ParseError::new(token.pos, ParseErrorKind::UnbalancedParenthesis)),
        }
    }

    fn parse_formula(&mut self) -> Result<Formula, ParseError> {
        let open = self.next()?;
        match open.kind {
            TokenKind::Open => {}
            TokenKind::Ident(found) => {
                return Err(ParseError::new(
                    open.pos,
                    ParseErrorKind::ExpectedOpenParen { found: found.to_string() },
                ))
            }
            TokenKind::Close => {
                return Err(ParseError::new(
                    open.pos,
                    ParseErrorKind::ExpectedOpenParen { found: ")".to_string() },
                ))
            }
        }

        let head = self.next()?;
        let name = match head.kind {
            TokenKind::Ident(name) => name,
            _ => return Err(ParseError::new(head.pos, ParseErrorKind::ExpectedName)),
        };

        match name {
            "forall" | "exists" => self.parse_quantifier(name, head.pos),
            "not" => {
                let mut operands = self.parse_operands(name, 1, head.pos)?;
                Ok(Formula::not(operands.remove(0)))
            }
            "and" | "or" | "implies" => {
                let mut operands = self.parse_operands(name, 2, head.pos)?;
                let right = operands.remove(1);
                let left = operands.remove(0);
                Ok(match name {
                    "and" => Formula::and(left, right),
                    "or" => Formula::or(left, right),
                    _ => Formula::implies(left, right),
                })
            }
            predicate => {
                let mut args = Vec::new();
                while !self.at_close() {
                    args.push(self.parse_term()?);
                }
                self.expect_close()?;
                Ok(Formula::Atom(Atom::new(predicate, args)))
            }
        }
    }

    fn parse_quantifier(&mut self, quantifier: &str, pos: usize) -> Result<Formula, ParseError> {
        let var = match self.peek().map(|t| t.kind.clone()) {
            Some(TokenKind::Ident(var)) if !KEYWORDS.contains(&var) => {
                self.index += 1;
                var.to_string()
            }
            _ => {
                let at = self.peek().map(|t| t.pos).unwrap_or(self.end);
                return Err(ParseError::new(
                    at,
                    ParseErrorKind::MissingVariable { quantifier: quantifier.to_string() },
                ));
            }
        };

        self.scope.push(var.clone());
        let operands = self.parse_operands(quantifier, 1, pos);
        self.scope.pop();
        let body = operands?.remove(0);

        Ok(if quantifier == "forall" {
            Formula::ForAll(var, Box::new(body))
        } else {
            Formula::Exists(var, Box::new(body))
        })
    }

    /// Read formulas up to the closing parenthesis and check their count.
    fn parse_operands(
        &mut self,
        connective: &str,
        expected: usize,
        pos: usize,
    ) -> Result<Vec<Formula>, ParseError> {
        let mut operands = Vec::with_capacity(expected);
        while !self.at_close() {
            if self.peek().is_none() {
                return Err(ParseError::new(self.end, ParseErrorKind::UnexpectedEnd));
            }
            operands.push(self.parse_formula()?);
        }
        self.expect_close()?;

        if operands.len() != expected {
            return Err(ParseError::new(
                pos,
                ParseErrorKind::Arity {
                    connective: connective.to_string(),
                    expected,
                    found: operands.len(),
                },
            ));
        }
        Ok(operands)
    }

    fn parse_term(&mut self) -> Result<Term, ParseError> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Ident(name) => Ok(self.atomic_term(name)),
            TokenKind::Open => {
                let head = self.next()?;
                let functor = match head.kind {
                    TokenKind::Ident(name) => name,
                    _ => return Err(ParseError::new(head.pos, ParseErrorKind::ExpectedName)),
                };
                let mut args = Vec::new();
                while !self.at_close() {
                    args.push(self.parse_term()?);
                }
                self.expect_close()?;
                if args.is_empty() {
                    Ok(Term::constant(functor))
                } else {
                    Ok(Term::compound(functor, args))
                }
            }
            TokenKind::Close => Err(ParseError::new(token.pos, ParseErrorKind::UnexpectedEnd)),
        }
    }

    /// Bound tokens are variables, everything else is a constant.
    fn atomic_term(&self, name: &str) -> Term {
        if self.scope.iter().any(|bound| bound == name) {
            Term::variable(name)
        } else {
            Term::constant(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_premise, ParseErrorKind, Parser};
    use crate::data::Term;
    use crate::parser::Formula;

    #[test]
    fn parse_simple_atom() {
        let f = parse_premise("(Human Socrates)").expect("parse atom");
        assert_eq!(f, Formula::atom("Human", vec![Term::constant("Socrates")]));
    }

    #[test]
    fn bound_tokens_become_variables() {
        let f = parse_premise("(forall x (implies (Human x) (Mortal y)))").expect("parse");
        let expected = Formula::forall(
            "x",
            Formula::implies(
                Formula::atom("Human", vec![Term::variable("x")]),
                Formula::atom("Mortal", vec![Term::constant("y")]),
            ),
        );
        assert_eq!(f, expected);
    }

    #[test]
    fn variable_scope_ends_with_quantifier() {
        let f = parse_premise("(and (exists x (P x)) (Q x))").expect("parse");
        let expected = Formula::and(
            Formula::exists("x", Formula::atom("P", vec![Term::variable("x")])),
            Formula::atom("Q", vec![Term::constant("x")]),
        );
        assert_eq!(f, expected);
    }

    #[test]
    fn nested_compound_terms() {
        let f = parse_premise("(forall x (Loves (mother x) (f (g x) a)))").expect("parse");
        let expected = Formula::forall(
            "x",
            Formula::atom(
                "Loves",
                vec![
                    Term::compound("mother", vec![Term::variable("x")]),
                    Term::compound(
                        "f",
                        vec![Term::compound("g", vec![Term::variable("x")]), Term::constant("a")],
                    ),
                ],
            ),
        );
        assert_eq!(f, expected);
    }

    #[test]
    fn empty_argument_list_is_constant() {
        let f = parse_premise("(P (c))").expect("parse");
        assert_eq!(f, Formula::atom("P", vec![Term::constant("c")]));
        let prop = parse_premise("(Raining)").expect("parse");
        assert_eq!(prop, Formula::atom("Raining", vec![]));
    }

    #[test]
    fn reject_empty_input() {
        let err = parse_premise("   ").expect_err("empty");
        assert_eq!(err.kind, ParseErrorKind::Empty);
    }

    #[test]
    fn reject_unbalanced_parentheses() {
        let err = parse_premise("(P a").expect_err("unclosed");
        assert_eq!(err.kind, ParseErrorKind::UnbalancedParenthesis);
        assert_eq!(err.position, 0);

        let err = parse_premise("(P a))").expect_err("extra close");
        assert_eq!(err.kind, ParseErrorKind::UnbalancedParenthesis);
        assert_eq!(err.position, 5);
    }

    #[test]
    fn reject_wrong_arity() {
        let err = parse_premise("(not (P a) (Q b))").expect_err("not with two");
        assert_eq!(
            err.kind,
            ParseErrorKind::Arity { connective: "not".into(), expected: 1, found: 2 }
        );

        let err = parse_premise("(and (P a))").expect_err("and with one");
        assert_eq!(
            err.kind,
            ParseErrorKind::Arity { connective: "and".into(), expected: 2, found: 1 }
        );

        let err = parse_premise("(implies)").expect_err("implies with none");
        assert!(matches!(err.kind, ParseErrorKind::Arity { found: 0, .. }));
    }

    #[test]
    fn reject_quantifier_without_variable() {
        let err = parse_premise("(forall (P x))").expect_err("missing variable");
        assert_eq!(err.kind, ParseErrorKind::MissingVariable { quantifier: "forall".into() });
    }

    #[test]
    fn reject_bare_token_and_trailing_input() {
        let err = parse_premise("P").expect_err("bare token");
        assert_eq!(err.kind, ParseErrorKind::ExpectedOpenParen { found: "P".into() });

        let err = parse_premise("(P a) (Q b)").expect_err("two formulas");
        assert_eq!(err.kind, ParseErrorKind::TrailingInput);
        assert_eq!(err.position, 6);
    }

    #[test]
    fn errors_are_reported_per_premise() {
        let parser = Parser::new();
        let results = parser.parse_premises(&["(P a)", "(not)", "(Q b)"]);
        assert!(results[0].is_ok());
        assert!(results[2].is_ok());
        let err = results[1].as_ref().expect_err("second premise fails");
        assert_eq!(err.premise, Some(1));
        assert!(err.to_string().starts_with("premise 2, position 1:"));
    }

    #[test]
    fn display_round_trips() {
        let text = "(forall x (implies (and (P x) (not (Q (f x) b))) (exists y (R x y))))";
        let f = parse_premise(text).expect("parse");
        assert_eq!(f.to_string(), text);
        assert_eq!(parse_premise(&f.to_string()).expect("reparse"), f);
    }
}

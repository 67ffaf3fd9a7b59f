//! Interactive text session around the prover.
//!
//! Translating word problems into premises and explaining results in prose
//! are left to outside collaborators behind [`Translator`] and [`Renderer`];
//! the defaults here work on plain text.

use crate::config::ResourceBudget;
use crate::inference::{outcome_summary, refute, ProofOutcome, RefuteError, Refutation};
use crate::problems::{catalog, Problem};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Line that ends a custom problem.
pub const END_OF_PROBLEM: &str = "end";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("translation failed: {0}")]
    Translate(String),
    #[error(transparent)]
    Refute(#[from] RefuteError),
}

/// Turns problem text into prefix-notation premises.
pub trait Translator {
    fn translate(&mut self, text: &str) -> Result<Vec<String>, SessionError>;
}

/// Takes every non-empty line as one premise.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineTranslator;

impl Translator for LineTranslator {
    fn translate(&mut self, text: &str) -> Result<Vec<String>, SessionError> {
        let premises: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if premises.is_empty() {
            return Err(SessionError::Translate("no premises in problem text".to_string()));
        }
        Ok(premises)
    }
}

/// Explains a refutation to the user.
pub trait Renderer {
    fn render(
        &mut self,
        text: &str,
        premises: &[String],
        refutation: &Refutation,
    ) -> Result<String, SessionError>;
}

/// Reports the verdict and, for a contradiction, the numbered derivation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(
        &mut self,
        _text: &str,
        _premises: &[String],
        refutation: &Refutation,
    ) -> Result<String, SessionError> {
        let mut out = outcome_summary(&refutation.outcome);
        if let ProofOutcome::Contradiction { .. } = refutation.outcome {
            for (idx, step) in refutation.history.iter().enumerate() {
                out.push_str(&format!(
                    "\n{}. {} + {} = {}",
                    idx + 1,
                    step.premise,
                    step.other,
                    step.resolvent
                ));
            }
        }
        Ok(out)
    }
}

/// Menu loop reading commands from `input` and writing to `output`.
pub struct Session<R, W> {
    input: R,
    output: W,
    translator: Box<dyn Translator>,
    renderer: Box<dyn Renderer>,
    budget: ResourceBudget,
    problems: &'static [Problem],
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            translator: Box::new(LineTranslator),
            renderer: Box::new(PlainRenderer),
            budget: ResourceBudget::default(),
            problems: catalog(),
        }
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn with_budget(mut self, budget: ResourceBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends. Only I/O errors end the loop.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "1 - select a test problem")?;
            writeln!(self.output, "2 - enter a problem")?;
            writeln!(self.output, "3 - exit")?;
            let Some(choice) = self.prompt("choose an action: ")? else {
                return Ok(());
            };

            match choice.trim() {
                "1" => self.select_problem()?,
                "2" => self.custom_problem()?,
                "3" => return Ok(()),
                _ => writeln!(self.output, "enter a valid action")?,
            }
        }
    }

    fn select_problem(&mut self) -> io::Result<()> {
        for (idx, problem) in self.problems.iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, problem.text)?;
        }
        let Some(answer) = self.prompt("choose a problem number: ")? else {
            return Ok(());
        };

        let problem = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.problems.get(idx));
        let Some(problem) = problem else {
            return writeln!(self.output, "enter a valid number");
        };

        writeln!(self.output, "problem: {}", problem.text)?;
        let premises: Vec<String> = problem.premises.iter().map(|p| p.to_string()).collect();
        let result = self.solve(problem.text, premises);
        self.report(result)
    }

    fn custom_problem(&mut self) -> io::Result<()> {
        let mut text = String::new();
        loop {
            let prompt = format!("enter a sentence (`{}` to finish): ", END_OF_PROBLEM);
            let Some(line) = self.prompt(&prompt)? else {
                break;
            };
            if line.trim() == END_OF_PROBLEM {
                break;
            }
            text.push_str(line.trim_end());
            text.push('\n');
        }

        writeln!(self.output, "problem: {}", text.trim_end())?;
        let result = self
            .translator
            .translate(&text)
            .and_then(|premises| self.solve(&text, premises));
        self.report(result)
    }

    fn solve(&mut self, text: &str, premises: Vec<String>) -> Result<String, SessionError> {
        let refutation = refute(&premises, self.budget)?;
        self.renderer.render(text, &premises, &refutation)
    }

    fn report(&mut self, result: Result<String, SessionError>) -> io::Result<()> {
        match result {
            Ok(explanation) => writeln!(self.output, "{}", explanation),
            Err(err) => writeln!(self.output, "error: {}", err),
        }
    }

    /// Print `message` and read one line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

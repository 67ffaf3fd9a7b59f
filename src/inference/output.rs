//! Output formatting for refutation results.
//!
//! Plain text for terminals and JSON for other programs.

use crate::config::Statistics;
use crate::data::ClauseSet;
use crate::inference::history::HistoryLine;
use crate::inference::{ProofOutcome, Refutation};
use std::fmt;

/// Build a plain-text report section by section.
#[derive(Clone, Debug, Default)]
pub struct OutputFormatter {
    /// Buffer for output
    output: String,
}

impl OutputFormatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the formatted output.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consume the formatter and return the output.
    pub fn into_output(self) -> String {
        self.output
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        self.output.push_str(&args.to_string());
        self.output.push('\n');
    }

    fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Write the banner.
    pub fn write_banner(&mut self) {
        self.line(format_args!("----- refuter {} -----", env!("CARGO_PKG_VERSION")));
    }

    pub fn write_premises<S: AsRef<str>>(&mut self, premises: &[S]) {
        self.blank();
        self.line(format_args!("------------- premises --------------"));
        for (idx, premise) in premises.iter().enumerate() {
            self.line(format_args!("{}. {}", idx + 1, premise.as_ref()));
        }
    }

    pub fn write_clauses(&mut self, clauses: &ClauseSet) {
        self.blank();
        self.line(format_args!("-------------- clauses --------------"));
        for (id, clause) in clauses.iter() {
            self.line(format_args!("[{}] {}", id, clause));
        }
    }

    /// Numbered derivation steps, one per line.
    pub fn write_history(&mut self, history: &[HistoryLine]) {
        self.blank();
        self.line(format_args!("------------ derivation -------------"));
        for (idx, step) in history.iter().enumerate() {
            self.line(format_args!(
                "{}. [{}] {} + [{}] {} => [{}] {}",
                idx + 1,
                step.premise_id,
                step.premise,
                step.other_id,
                step.other,
                step.resolvent_id,
                step.resolvent,
            ));
            if step.substitution != "{}" {
                self.line(format_args!("   with {}", step.substitution));
            }
        }
    }

    /// Write the result of proof search.
    pub fn write_result(&mut self, outcome: &ProofOutcome) {
        self.blank();
        self.line(format_args!("{}", outcome_summary(outcome)));
    }

    /// Write statistics section.
    pub fn write_statistics(&mut self, stats: &Statistics) {
        self.blank();
        self.line(format_args!("-------------- statistics -------------"));
        for (name, value) in stats.iter() {
            self.line(format_args!("{:<26} {:>8}", name.replace('_', " "), value));
        }
    }

    /// The full report: premises, derivation, result and statistics.
    pub fn write_refutation<S: AsRef<str>>(&mut self, premises: &[S], refutation: &Refutation) {
        self.write_banner();
        self.write_premises(premises);
        if !refutation.history.is_empty() {
            self.write_history(&refutation.history);
        }
        self.write_result(&refutation.outcome);
        self.write_statistics(&refutation.stats);
    }
}

/// One-line verdict. Saturation reads `no contradiction found` verbatim.
pub fn outcome_summary(outcome: &ProofOutcome) -> String {
    match outcome {
        ProofOutcome::Contradiction { empty_clause } => {
            format!("contradiction found: clause {} is empty", empty_clause)
        }
        ProofOutcome::Saturated => "no contradiction found".to_string(),
        ProofOutcome::ResourceExceeded { limit } => {
            format!("undetermined: search stopped by {} limit", limit)
        }
    }
}

/// Pretty-printed JSON form of a refutation.
pub fn to_json(refutation: &Refutation) -> serde_json::Result<String> {
    serde_json::to_string_pretty(refutation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LimitKind, ResourceBudget};
    use crate::data::ClauseId;
    use crate::inference::refute;

    #[test]
    fn format_statistics() {
        let mut formatter = OutputFormatter::new();
        let mut stats = Statistics::new();
        stats.set("pairs_tried", 89);
        stats.set("clauses_kept", 14);

        formatter.write_statistics(&stats);
        let output = formatter.output();

        assert!(output.contains("pairs tried"));
        assert!(output.contains("89"));
        assert!(output.contains("clauses kept"));
    }

    #[test]
    fn format_outcomes() {
        assert_eq!(outcome_summary(&ProofOutcome::Saturated), "no contradiction found");
        assert_eq!(
            outcome_summary(&ProofOutcome::Contradiction { empty_clause: ClauseId(4) }),
            "contradiction found: clause 4 is empty"
        );
        assert_eq!(
            outcome_summary(&ProofOutcome::ResourceExceeded { limit: LimitKind::Clauses }),
            "undetermined: search stopped by max_clauses limit"
        );
    }

    #[test]
    fn format_proof_report() {
        let premises = ["(P a)", "(not (P a))"];
        let refutation = refute(&premises, ResourceBudget::default()).expect("refute");

        let mut formatter = OutputFormatter::new();
        formatter.write_refutation(&premises, &refutation);
        let output = formatter.into_output();

        assert!(output.contains("1. (P a)"));
        assert!(output.contains("1. [0] (P a) + [1] (not (P a)) => [2] false"));
        assert!(output.contains("contradiction found"));
    }

    #[test]
    fn json_report_has_outcome_and_history() {
        let refutation =
            refute(&["(P a)", "(not (P a))"], ResourceBudget::default()).expect("refute");
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&refutation).expect("serialize")).expect("parse json");

        assert_eq!(json["contradiction_found"], true);
        assert_eq!(json["outcome"]["status"], "contradiction");
        assert_eq!(json["outcome"]["empty_clause"], 2);
        assert_eq!(json["history"][0]["resolvent"], "false");
        assert_eq!(json["clauses"][0], "(P a)");
        assert_eq!(json["stats"]["pairs_tried"], 1);
    }
}

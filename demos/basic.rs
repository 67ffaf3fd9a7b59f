extern crate refuter;
use refuter::config::stats::{CLAUSES_KEPT, PAIRS_TRIED};
use refuter::problems::catalog;
use refuter::{refute, ProofOutcome, ResourceBudget};

fn main() {
    let budget = ResourceBudget::default();

    for problem in catalog() {
        println!("{}: {}", problem.name, problem.text);
        for premise in problem.premises {
            println!("  {}", premise);
        }

        let refutation = match refute(problem.premises, budget) {
            Ok(refutation) => refutation,
            Err(err) => {
                eprintln!("  error: {}", err);
                continue;
            }
        };

        match refutation.outcome {
            ProofOutcome::Contradiction { empty_clause } => {
                println!("  contradiction, empty clause {}", empty_clause);
                for step in &refutation.history {
                    println!("    {} + {} = {}", step.premise, step.other, step.resolvent);
                }
            }
            ProofOutcome::Saturated => println!("  saturated"),
            ProofOutcome::ResourceExceeded { limit } => println!("  resource limit: {}", limit),
        }

        println!(
            "  pairs tried: {}, clauses kept: {}",
            refutation.stats.count(PAIRS_TRIED),
            refutation.stats.count(CLAUSES_KEPT)
        );
        println!();
    }
}

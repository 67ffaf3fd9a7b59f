//! Command-line entry point for the refuter prover.
//!
//! Premises come from the command line or a file, one per line. With
//! neither, an interactive session starts.
//!
//! Exit codes: 0 contradiction found, 1 I/O failure, 2 invalid input,
//! 3 resource limit reached, 4 saturated without contradiction.
#![forbid(unsafe_code)]
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use refuter::inference::to_json;
use refuter::{
    refute, LineTranslator, OutputFormatter, ProofOutcome, ResourceBudget, Session, Translator,
};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "refuter", version)]
#[command(about = "Decide whether first-order premises are contradictory by resolution", long_about = None)]
struct Cli {
    /// Premises in prefix notation, e.g. "(forall x (P x))"
    #[arg(value_name = "PREMISE")]
    premises: Vec<String>,

    /// Read premises from a file, one per non-empty line
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Start the interactive menu
    #[arg(short, long)]
    interactive: bool,

    /// Maximum number of clause pairs to try
    #[arg(long, env = "REFUTER_MAX_ITERATIONS", default_value_t = ResourceBudget::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Maximum number of clauses, inputs included
    #[arg(long, env = "REFUTER_MAX_CLAUSES", default_value_t = ResourceBudget::DEFAULT_MAX_CLAUSES)]
    max_clauses: usize,

    /// Wall-clock limit in seconds (0 for none)
    #[arg(long, env = "REFUTER_MAX_SECONDS", default_value_t = 10)]
    max_seconds: u64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain-text report
    Text,
    /// JSON document
    Json,
}

impl Cli {
    fn budget(&self) -> ResourceBudget {
        let budget = ResourceBudget::new()
            .with_max_iterations(self.max_iterations)
            .with_max_clauses(self.max_clauses);
        if self.max_seconds == 0 {
            budget.without_deadline()
        } else {
            budget.with_max_duration(Duration::from_secs(self.max_seconds))
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    pretty_env_logger::formatted_builder().filter_level(level).parse_default_env().init();
}

fn run_interactive(budget: ResourceBudget) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock()).with_budget(budget).run()
}

fn collect_premises(cli: &Cli) -> Result<Vec<String>, String> {
    let mut premises = cli.premises.clone();
    if let Some(path) = &cli.file {
        let text = fs::read_to_string(path)
            .map_err(|err| format!("cannot read {}: {}", path.display(), err))?;
        let from_file = LineTranslator.translate(&text).map_err(|err| err.to_string())?;
        premises.extend(from_file);
    }
    Ok(premises)
}

fn run_prover(cli: &Cli, premises: &[String]) -> i32 {
    let refutation = match refute(premises, cli.budget()) {
        Ok(refutation) => refutation,
        Err(err) => {
            eprintln!("error: {}", err);
            return 2;
        }
    };

    match cli.format {
        OutputFormat::Text => {
            let mut formatter = OutputFormatter::new();
            formatter.write_refutation(premises, &refutation);
            print!("{}", formatter.output());
        }
        OutputFormat::Json => match to_json(&refutation) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("error: {}", err);
                return 1;
            }
        },
    }

    match refutation.outcome {
        ProofOutcome::Contradiction { .. } => 0,
        ProofOutcome::ResourceExceeded { .. } => 3,
        ProofOutcome::Saturated => 4,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.interactive || (cli.premises.is_empty() && cli.file.is_none()) {
        if let Err(err) = run_interactive(cli.budget()) {
            eprintln!("error: {}", err);
            process::exit(1);
        }
        return;
    }

    let premises = match collect_premises(&cli) {
        Ok(premises) => premises,
        Err(message) => {
            eprintln!("error: {}", message);
            process::exit(2);
        }
    };

    process::exit(run_prover(&cli, &premises));
}

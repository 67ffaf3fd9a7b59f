//! Print the parsed form, prenex form and clauses of each premise.
//!
//! Premises are taken from the arguments, or from stdin one per line.
use refuter::{prenex, Normalizer, Parser};
use std::env;
use std::io::{self, Read};
use std::process;

fn read_premises() -> io::Result<Vec<String>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn main() {
    pretty_env_logger::init();

    let premises = match read_premises() {
        Ok(premises) => premises,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    let mut formulas = Vec::new();
    let mut failed = false;
    for result in Parser::new().parse_premises(&premises) {
        match result {
            Ok(formula) => formulas.push(formula),
            Err(err) => {
                eprintln!("error: {}", err);
                failed = true;
            }
        }
    }
    if failed {
        process::exit(2);
    }

    let mut normalizer = Normalizer::new();
    for formula in &formulas {
        normalizer.reserve_symbols(formula);
    }

    for (idx, formula) in formulas.iter().enumerate() {
        println!("{}. {}", idx + 1, formula);
        match prenex(formula) {
            Ok(prenex_form) => println!("   prenex:  {}", prenex_form),
            Err(err) => eprintln!("   prenex failed: {}", err),
        }
        match normalizer.clausify(formula) {
            Ok(clauses) if clauses.is_empty() => println!("   clauses: none (tautology)"),
            Ok(clauses) => {
                for clause in clauses {
                    println!("   clause:  {}", clause);
                }
            }
            Err(err) => {
                eprintln!("   clausify failed: {}", err);
                process::exit(1);
            }
        }
    }
}

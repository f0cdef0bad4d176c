//! Command-line driver: runs the interactive proof for a sample formula.
//!
//! ```text
//! tqbf <formula> [--seed N] [--config file.json] [--transcript-dir DIR] [--json]
//! ```
//!
//! Exits 0 when the verifier accepts and 1 when it rejects or on error.

use qbf_ip::{formulas, run_verifier, HonestProver, ProtocolConfig, Prover, Transcript};
use std::{env, path::PathBuf};

fn fatal(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn print_help() {
    println!(
        "Usage: tqbf <formula> [--seed N] [--config file.json] [--transcript-dir DIR] [--json]"
    );
    println!("  formulas: {}", formulas::NAMES.join(", "));
}

struct Options {
    formula: String,
    seed: Option<u64>,
    config: Option<PathBuf>,
    transcript_dir: Option<PathBuf>,
    json: bool,
}

fn parse_args(args: Vec<String>) -> Options {
    let mut formula = None;
    let mut seed = None;
    let mut config = None;
    let mut transcript_dir = None;
    let mut json = false;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| fatal("--seed requires a value"));
                seed = Some(
                    value
                        .parse::<u64>()
                        .unwrap_or_else(|_| fatal(&format!("invalid seed: {value}"))),
                );
            }
            "--config" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| fatal("--config requires a path"));
                config = Some(PathBuf::from(value));
            }
            "--transcript-dir" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| fatal("--transcript-dir requires a path"));
                transcript_dir = Some(PathBuf::from(value));
            }
            "--json" => json = true,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other if other.starts_with("--") => fatal(&format!("unknown flag: {other}")),
            other => {
                if formula.replace(other.to_string()).is_some() {
                    fatal("only one formula may be given");
                }
            }
        }
    }
    let formula = formula.unwrap_or_else(|| {
        print_help();
        std::process::exit(1);
    });
    Options {
        formula,
        seed,
        config,
        transcript_dir,
        json,
    }
}

fn main() {
    let options = parse_args(env::args().skip(1).collect());

    let mut config = match &options.config {
        Some(path) => ProtocolConfig::load(path).unwrap_or_else(|err| fatal(&err.to_string())),
        None => ProtocolConfig::default(),
    };
    if let Some(seed) = options.seed {
        config.seed = seed;
    }
    if let Some(dir) = options.transcript_dir {
        config.transcript_dir = Some(dir);
    }

    let qbf = formulas::by_name(&options.formula)
        .unwrap_or_else(|| fatal(&format!("unknown formula: {}", options.formula)));
    let prover = HonestProver::with_prime_lower_bound(&qbf, config.prime_lower_bound_for(&qbf))
        .unwrap_or_else(|err| fatal(&format!("prover construction failed: {err}")));

    let mut transcript = Transcript::new();
    let accepted = run_verifier(&qbf, &prover, prover.prime(), config.seed, &mut transcript)
        .unwrap_or_else(|err| fatal(&format!("protocol aborted: {err}")));

    if options.json {
        let json = transcript
            .to_json()
            .unwrap_or_else(|err| fatal(&err.to_string()));
        println!("{json}");
    } else {
        println!("formula: {qbf}");
        println!("seed: {}", config.seed);
        let lines = transcript
            .to_lines()
            .unwrap_or_else(|err| fatal(&err.to_string()));
        for line in lines {
            println!("{line}");
        }
    }

    if let Some(dir) = &config.transcript_dir {
        let path = transcript
            .write(dir, &options.formula, config.seed as usize)
            .unwrap_or_else(|err| fatal(&format!("failed to write transcript: {err}")));
        eprintln!("transcript written to {}", path.display());
    }

    if !accepted {
        std::process::exit(1);
    }
}

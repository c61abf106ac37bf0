//! `petvet` console driver.

mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use petvet_core::{run_reference_checks, Lexicon, PetVetAssist, Species};
use tracing_subscriber::EnvFilter;

use cli::{CliArgs, Commands};

/// Sample consultations shown by `petvet demo`.
const DEMO_DESCRIPTIONS: &[&str] = &[
    "My dog has been vomiting and has diarrhea for 2 days",
    "Emergency! My cat was hit by a car and is bleeding",
    "My rabbit hasn't eaten in 24 hours and seems lethargic",
];

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let assistant = build_assistant(&args)?;

    match args.command {
        Commands::Triage { description, json } => {
            let description = description.join(" ");
            let result = assistant.triage(&description);
            if json {
                println!(
                    "{}",
                    result.to_json_pretty().context("Failed to serialize triage result")?
                );
            } else {
                print!(
                    "{}",
                    output::Consultation {
                        description: &description,
                        result: &result,
                    }
                );
            }
        }
        Commands::Tasks { species, json } => {
            let tasks = assistant.daily_tasks(Species::parse(&species));
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&tasks).context("Failed to serialize tasks")?
                );
            } else {
                print!("{}", output::TaskList(&tasks));
            }
        }
        Commands::Check => {
            let report = run_reference_checks(&assistant);
            print!("{}", output::Report(&report));
            if !report.all_passed() {
                std::process::exit(1);
            }
        }
        Commands::Demo => run_demo(&assistant),
    }

    Ok(())
}

/// Logs go to stderr so `--json` output stays parseable.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

fn build_assistant(args: &CliArgs) -> Result<PetVetAssist> {
    match &args.lexicon {
        Some(path) => {
            let lexicon = Lexicon::load(path)
                .with_context(|| format!("Failed to load lexicon from {}", path.display()))?;
            Ok(PetVetAssist::with_lexicon(lexicon))
        }
        None => {
            tracing::debug!("Using built-in lexicon");
            Ok(PetVetAssist::new())
        }
    }
}

fn run_demo(assistant: &PetVetAssist) {
    print!("{}", output::Report(&run_reference_checks(assistant)));

    for &description in DEMO_DESCRIPTIONS {
        println!();
        println!("{}", "=".repeat(60));
        let result = assistant.triage(description);
        print!(
            "{}",
            output::Consultation {
                description,
                result: &result,
            }
        );
        println!();
        let tasks = assistant.daily_tasks(Species::default());
        print!("{}", output::TaskList(&tasks));
    }
}

//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PetVet Assist: pet symptom triage (not medical advice)
#[derive(Parser, Debug)]
#[command(name = "petvet")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    /// Load a custom lexicon JSON instead of the built-in one
    #[arg(long, global = true, env = "PETVET_LEXICON", value_name = "PATH")]
    pub lexicon: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Triage a symptom description
    Triage {
        /// Free-text description of the symptoms
        #[arg(value_name = "DESCRIPTION", required = true, num_args = 1..)]
        description: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the daily wellness checklist
    Tasks {
        /// dog, cat or any other species name
        #[arg(long, short, default_value = "dog")]
        species: String,
        /// Print the tasks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the reference consultations and report accuracy
    Check,
    /// Run the checks followed by sample consultations
    Demo,
}

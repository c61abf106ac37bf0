//! Domain models for the PetVet triage system.

mod triage;
mod wellness;

pub use triage::*;
pub use wellness::*;

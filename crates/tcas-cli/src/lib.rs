//! TCAS CLI - command line tools for the decision core.
//!
//! This crate provides the CLI binaries:
//! - evaluate_encounter: evaluate one encounter from JSON or a canned scenario
//! - demo_scenario: run canned and random encounters through the evaluator

pub mod scenarios;

pub use scenarios::{builtin_scenarios, random_encounter, Encounter};

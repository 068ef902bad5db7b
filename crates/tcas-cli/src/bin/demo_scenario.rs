//! Run every canned scenario plus a batch of random encounters through
//! the evaluator and print one summary line per encounter.
//!
//! Usage:
//!   cargo run -p tcas-cli --bin demo_scenario -- --random 10

use anyhow::Result;
use clap::Parser;

use tcas_cli::scenarios;
use tcas_core::{EncounterEvaluator, Maneuver, ThreatAssessment, ThreatLevel};

#[derive(Parser, Debug)]
#[command(version, about = "Run demo encounters through the TCAS core")]
struct Args {
    /// Number of random encounters appended after the canned set
    #[arg(long, default_value_t = 5)]
    random: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let evaluator = EncounterEvaluator::default();

    let mut encounters = scenarios::builtin_scenarios();
    for i in 0..args.random {
        encounters.push(scenarios::random_encounter(i));
    }

    println!("[DEMO] evaluating {} encounters", encounters.len());
    for (idx, encounter) in encounters.iter().enumerate() {
        let assessment = evaluator.evaluate(&encounter.own, &encounter.intruder);
        println!(
            "[{:3}] {:<20} {}",
            idx + 1,
            encounter.name,
            format_line(&assessment)
        );
    }

    Ok(())
}

fn format_line(assessment: &ThreatAssessment) -> String {
    let label = match assessment.threat_level {
        ThreatLevel::None => "CLEAR",
        ThreatLevel::TrafficAdvisory => "TRAFFIC",
        ThreatLevel::ResolutionAdvisory => match assessment.maneuver {
            Some(Maneuver::Climb) => "RA CLIMB",
            Some(Maneuver::Descend) => "RA DESCEND",
            None => "RA",
        },
    };
    format!(
        "{:<10} | SL{} tau_range={:>6.1}s tau_vert={:>6.1}s tca={:>6.1}s",
        label,
        assessment.sensitivity_level.ordinal(),
        assessment.taus.tau_range_s,
        assessment.taus.tau_vert_s,
        assessment.time_to_closest_s
    )
}

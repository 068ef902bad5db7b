//! Evaluate a single encounter from a JSON file or a canned scenario.
//!
//! Usage:
//!   cargo run -p tcas-cli --bin evaluate_encounter -- --scenario crossing_descent
//!   cargo run -p tcas-cli --bin evaluate_encounter -- --input encounter.json --json

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tcas_cli::scenarios;
use tcas_core::{AdvisoryConfig, AircraftState, EncounterEvaluator, ThreatAssessment};

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate one own-ship/intruder encounter")]
struct Args {
    /// JSON file holding an encounter input
    #[arg(long, conflicts_with = "scenario")]
    input: Option<PathBuf>,

    /// Name of a canned scenario (run demo_scenario for the list)
    #[arg(long)]
    scenario: Option<String>,

    /// Emit the full assessment as pretty JSON instead of a summary
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// On-disk encounter format accepted by --input.
#[derive(Debug, Deserialize)]
struct EncounterInput {
    own: AircraftState,
    intruder: AircraftState,
    #[serde(default)]
    config: Option<AdvisoryConfig>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let (own, intruder, config) = if let Some(path) = &args.input {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading encounter file {}", path.display()))?;
        let input: EncounterInput = serde_json::from_str(&raw).context("parsing encounter JSON")?;
        (input.own, input.intruder, input.config.unwrap_or_default())
    } else if let Some(name) = &args.scenario {
        let Some(scenario) = scenarios::find_scenario(name) else {
            bail!("unknown scenario '{name}'; run demo_scenario for the list");
        };
        (scenario.own, scenario.intruder, AdvisoryConfig::default())
    } else {
        bail!("either --input or --scenario is required");
    };

    own.validate().context("own-ship state")?;
    intruder.validate().context("intruder state")?;

    tracing::debug!(?config, "evaluating encounter");
    let assessment = EncounterEvaluator::new(config).evaluate(&own, &intruder);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print_summary(&assessment);
    }

    Ok(())
}

fn print_summary(assessment: &ThreatAssessment) {
    println!(
        "threat: {:?} (SL{})",
        assessment.threat_level,
        assessment.sensitivity_level.ordinal()
    );
    println!(
        "tau_range: {:.1}s  tau_vert: {:.1}s  tca: {:.1}s",
        assessment.taus.tau_range_s, assessment.taus.tau_vert_s, assessment.time_to_closest_s
    );
    match assessment.maneuver {
        Some(maneuver) => println!("maneuver: {maneuver:?}"),
        None => println!("maneuver: none required"),
    }
}

//! Simulate command implementation.

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use qsketch_recognize::Recognizer;
use qsketch_sim::StatevectorSimulator;

use super::common::{load_config, load_strokes, print_probabilities, print_summary};

/// Execute the simulate command.
pub fn execute(input: &str, config: Option<&str>, format: &str, max_qubits: u32) -> Result<()> {
    let json = match format.to_lowercase().as_str() {
        "table" => false,
        "json" => true,
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    };

    let config = load_config(config)?;
    let strokes = load_strokes(input)?;
    let circuit = Recognizer::new(config).recognize(&strokes);
    info!(
        "Recognized {} qubits and {} gates",
        circuit.qubits,
        circuit.gates.len()
    );

    let result = StatevectorSimulator::with_max_qubits(max_qubits)
        .run(&circuit)
        .context("Simulation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} Simulating {}",
        style("→").cyan().bold(),
        style(input).green()
    );
    print_summary(&circuit);
    print_probabilities(&result);

    Ok(())
}

//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qsketch_ir::{Circuit, Stroke};
use qsketch_recognize::RecognizerConfig;
use qsketch_sim::SimulationResult;

/// Most basis states listed in table output.
const MAX_ROWS: usize = 32;

/// Load finished strokes from a JSON file.
pub fn load_strokes(path: &str) -> Result<Vec<Stroke>> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    Stroke::list_from_json(&source).with_context(|| format!("Invalid stroke file: {path}"))
}

/// Load the recognizer configuration, applying environment overrides.
pub fn load_config(path: Option<&str>) -> Result<RecognizerConfig> {
    RecognizerConfig::load(path).context("Failed to load configuration")
}

/// Print a one-line circuit summary.
pub fn print_summary(circuit: &Circuit) {
    println!(
        "  Circuit: {} qubits, depth {}, {} gates",
        style(circuit.qubits).yellow(),
        circuit.depth,
        circuit.gates.len()
    );
}

/// Print basis-state probabilities as a table with bars.
pub fn print_probabilities(result: &SimulationResult) {
    println!(
        "\n{} Probabilities ({} qubits):",
        style("✓").green().bold(),
        result.num_qubits
    );

    for (label, prob) in result.outcomes().take(MAX_ROWS) {
        let percent = prob * 100.0;
        let bar: String = "█".repeat((percent / 2.0).round() as usize);

        println!(
            "  {}: {:.4} ({:>6.2}%) {}",
            style(format!("|{label}⟩")).cyan(),
            prob,
            percent,
            style(bar).green()
        );
    }

    if result.probabilities.len() > MAX_ROWS {
        println!(
            "  ... and {} more states",
            result.probabilities.len() - MAX_ROWS
        );
    }

    if result.skipped_gates > 0 {
        println!(
            "\n  {} {} gate(s) have no effect in simulation",
            style("!").yellow().bold(),
            result.skipped_gates
        );
    }
}

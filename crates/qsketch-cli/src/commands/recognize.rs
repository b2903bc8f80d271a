//! Recognize command implementation.

use anyhow::{Context, Result};
use console::style;
use std::fs;

use qsketch_recognize::Recognizer;

use super::common::{load_config, load_strokes, print_summary};

/// Execute the recognize command.
///
/// Without an output path the circuit JSON goes to stdout and nothing else
/// is printed there, so the command can sit in a pipeline.
pub fn execute(input: &str, output: Option<&str>, config: Option<&str>) -> Result<()> {
    let config = load_config(config)?;
    let strokes = load_strokes(input)?;
    let circuit = Recognizer::new(config).recognize(&strokes);
    circuit
        .validate()
        .context("Recognized circuit is invalid")?;

    let json = circuit.to_json()?;

    let Some(output) = output else {
        println!("{json}");
        return Ok(());
    };

    println!(
        "{} Recognizing {} ({} strokes)",
        style("→").cyan().bold(),
        style(input).green(),
        strokes.len()
    );
    print_summary(&circuit);

    fs::write(output, json).with_context(|| format!("Failed to write file: {output}"))?;
    println!("  Output: {}", style(output).green());

    Ok(())
}

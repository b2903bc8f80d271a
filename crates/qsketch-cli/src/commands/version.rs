//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - sketch quantum circuits, simulate them instantly",
        style("qsketch").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qsketch-ir         Strokes, gates and circuits");
    println!("  qsketch-recognize  Sketch-to-circuit recognition");
    println!("  qsketch-sim        Statevector simulation");
    println!("  qsketch-board      Live sketch board");
    println!("  qsketch-cli        Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}

//! qsketch Command-Line Interface
//!
//! Recognize hand-drawn circuit sketches and simulate them.
//!
//! ```text
//!  q0 ──[H]────●──────────
//!              │
//!  q1 ─────────⊕────●─────
//!                   │
//!  q2 ──────────────⊕─────
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{recognize, simulate, version};

/// qsketch - turn circuit sketches into statevector simulations
#[derive(Parser)]
#[command(name = "qsketch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recognize a circuit from a stroke file
    Recognize {
        /// Input stroke file (JSON array of strokes)
        #[arg(short, long)]
        input: String,

        /// Output file for the circuit JSON (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Recognizer configuration file (YAML)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Recognize and simulate a stroke file
    Simulate {
        /// Input stroke file (JSON array of strokes)
        #[arg(short, long)]
        input: String,

        /// Recognizer configuration file (YAML)
        #[arg(short, long)]
        config: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Refuse circuits wider than this
        #[arg(long, default_value_t = qsketch_sim::DEFAULT_MAX_QUBITS)]
        max_qubits: u32,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Recognize {
            input,
            output,
            config,
        } => recognize::execute(&input, output.as_deref(), config.as_deref()),
        Commands::Simulate {
            input,
            config,
            format,
            max_qubits,
        } => simulate::execute(&input, config.as_deref(), &format, max_qubits),
        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

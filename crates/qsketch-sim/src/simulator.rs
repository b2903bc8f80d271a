//! Circuit runner and simulation results.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, instrument};

use qsketch_ir::{Circuit, Gate, GateKind};

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Default cap on simulated qubits (a 16 MB statevector).
pub const DEFAULT_MAX_QUBITS: u32 = 20;

/// Widest statevector whose byte size is addressable on this platform.
pub const MAX_SUPPORTED_QUBITS: u32 = usize::BITS - 6;

/// Simulator limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Largest circuit the simulator accepts.
    #[serde(default = "default_max_qubits")]
    pub max_qubits: u32,
}

fn default_max_qubits() -> u32 {
    DEFAULT_MAX_QUBITS
}

impl SimulatorConfig {
    /// The configured limit, capped at [`MAX_SUPPORTED_QUBITS`].
    pub fn effective_max_qubits(&self) -> u32 {
        self.max_qubits.min(MAX_SUPPORTED_QUBITS)
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }
}

/// Final state of a simulated circuit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Number of simulated qubits.
    pub num_qubits: u32,
    /// Amplitudes indexed by basis state.
    pub amplitudes: Vec<Complex64>,
    /// `|amplitude|²` per basis state.
    pub probabilities: Vec<f64>,
    /// Gates that changed nothing because they are not simulated.
    pub skipped_gates: usize,
}

impl SimulationResult {
    fn from_statevector(sv: &Statevector, skipped_gates: usize) -> Self {
        Self {
            num_qubits: sv.num_qubits() as u32,
            amplitudes: sv.state_vector().to_vec(),
            probabilities: sv.probabilities(),
            skipped_gates,
        }
    }

    /// Sum of all probabilities.
    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Bitstring label of a basis state, highest qubit first.
    pub fn label(&self, index: usize) -> String {
        basis_label(index, self.num_qubits as usize)
    }

    /// Basis states with their labels and probabilities, in index order.
    pub fn outcomes(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.probabilities
            .iter()
            .enumerate()
            .map(|(index, &p)| (self.label(index), p))
    }
}

/// Binary label of basis state `index`, most significant qubit first,
/// zero-padded to `num_qubits` digits.
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    if num_qubits == 0 {
        return String::new();
    }
    format!("{index:0num_qubits$b}")
}

/// Bra-ket label of basis state `index`, e.g. `|01⟩`.
pub fn ket_label(index: usize, num_qubits: usize) -> String {
    format!("|{}⟩", basis_label(index, num_qubits))
}

/// Runs recognized circuits on a fresh statevector.
#[derive(Debug, Clone, Default)]
pub struct StatevectorSimulator {
    config: SimulatorConfig,
}

impl StatevectorSimulator {
    /// Create a simulator with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: SimulatorConfig { max_qubits },
        }
    }

    /// Create a simulator from a configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// The active limits.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Simulate a circuit from |0...0⟩.
    ///
    /// The circuit is validated first. Gates are applied left to right by
    /// their drawn x-position; gates at the same x keep their list order.
    #[instrument(skip(self, circuit), fields(qubits = circuit.qubits, gates = circuit.gates.len()))]
    pub fn run(&self, circuit: &Circuit) -> SimResult<SimulationResult> {
        circuit.validate()?;
        let max_qubits = self.config.effective_max_qubits();
        if circuit.qubits > max_qubits {
            return Err(SimError::TooManyQubits {
                qubits: circuit.qubits,
                max_qubits,
            });
        }

        let start = Instant::now();
        let mut sv = Statevector::new(circuit.num_qubits());

        let mut skipped = 0;
        for gate in time_ordered(&circuit.gates) {
            if !gate.kind.is_simulated() || !gate_acts(gate) {
                skipped += 1;
            }
            sv.apply_gate(gate);
        }

        debug!(
            "Simulation completed in {:?} ({} gates skipped)",
            start.elapsed(),
            skipped
        );

        Ok(SimulationResult::from_statevector(&sv, skipped))
    }
}

/// Gates sorted by x-position, stable for equal positions.
pub fn time_ordered(gates: &[Gate]) -> Vec<&Gate> {
    let mut ordered: Vec<&Gate> = gates.iter().collect();
    ordered.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
    ordered
}

fn gate_acts(gate: &Gate) -> bool {
    match gate.kind {
        GateKind::Cnot => gate
            .controls
            .first()
            .zip(gate.targets.first())
            .is_some_and(|(c, t)| c != t),
        _ => true,
    }
}

/// Simulate a circuit with default limits.
pub fn simulate_circuit(circuit: &Circuit) -> SimResult<SimulationResult> {
    StatevectorSimulator::new().run(circuit)
}

//! qsketch Statevector Simulator
//!
//! Exact simulation of sketched circuits over a full statevector of
//! `2^n` complex amplitudes. Bit `k` of a basis-state index is qubit `k`.
//!
//! # Supported Gates
//!
//! | Gate | Effect |
//! |------|--------|
//! | Hadamard | Superposition on one qubit |
//! | Pauli-X | Bit flip |
//! | Pauli-Z | Phase flip |
//! | CNOT | Flips the target where the control is 1 |
//! | Pauli-Y | Not simulated (state unchanged) |
//! | Measure | Not simulated (no collapse) |
//!
//! # Memory
//!
//! | Qubits | Memory |
//! |--------|--------|
//! | 10 | ~16 KB |
//! | 15 | ~512 KB |
//! | 20 | ~16 MB |
//!
//! The runner refuses circuits wider than [`SimulatorConfig::max_qubits`].
//!
//! # Example
//!
//! ```rust
//! use qsketch_ir::{Circuit, Gate, GateKind, Point, QubitId};
//! use qsketch_sim::simulate_circuit;
//!
//! let circuit = Circuit::new(
//!     2,
//!     4,
//!     vec![
//!         Gate::single(GateKind::Hadamard, QubitId(0), Point::new(40.0, 100.0)),
//!         Gate::cnot(QubitId(0), QubitId(1), Point::new(120.0, 200.0)),
//!     ],
//! );
//!
//! let result = simulate_circuit(&circuit).unwrap();
//! assert!((result.probabilities[0] - 0.5).abs() < 1e-12);
//! assert!((result.probabilities[3] - 0.5).abs() < 1e-12);
//! ```

pub mod error;
pub mod simulator;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use simulator::{
    DEFAULT_MAX_QUBITS, MAX_SUPPORTED_QUBITS, SimulationResult, SimulatorConfig, StatevectorSimulator, basis_label,
    ket_label, simulate_circuit, time_ordered,
};
pub use statevector::Statevector;

//! Error types for the IR crate.

use crate::gate::GateKind;
use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A gate target lies outside the circuit's qubit range.
    #[error("Target {qubit} of gate #{gate_index} ({kind}) is out of range for {num_qubits} qubits")]
    TargetOutOfRange {
        /// Position of the gate in the circuit's gate list.
        gate_index: usize,
        /// Kind of the offending gate.
        kind: GateKind,
        /// The out-of-range qubit.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
    },

    /// A gate control lies outside the circuit's qubit range.
    #[error("Control {qubit} of gate #{gate_index} ({kind}) is out of range for {num_qubits} qubits")]
    ControlOutOfRange {
        /// Position of the gate in the circuit's gate list.
        gate_index: usize,
        /// Kind of the offending gate.
        kind: GateKind,
        /// The out-of-range qubit.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
    },

    /// A gate was built without any target.
    #[error("Gate #{gate_index} ({kind}) has no targets")]
    MissingTarget {
        /// Position of the gate in the circuit's gate list.
        gate_index: usize,
        /// Kind of the offending gate.
        kind: GateKind,
    },

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced when simulating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The circuit references qubits it does not have.
    #[error("Circuit rejected: {0}")]
    InvalidCircuit(#[from] qsketch_ir::IrError),

    /// The statevector would exceed the configured size.
    #[error("Circuit has {qubits} qubits but the simulator allows at most {max_qubits}")]
    TooManyQubits {
        /// Qubits in the circuit.
        qubits: u32,
        /// Configured limit.
        max_qubits: u32,
    },
}

/// Result type for simulation.
pub type SimResult<T> = Result<T, SimError>;

//! Recognized circuits and their structural validation.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;

/// A circuit recognized from a set of strokes.
///
/// Built fresh on every recognition pass; nothing is carried over between
/// passes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubit wires.
    pub qubits: u32,
    /// Number of time-columns the circuit spans.
    pub depth: u32,
    /// Gates in recognition order (not necessarily time order).
    pub gates: Vec<Gate>,
}

impl Circuit {
    /// Create a circuit from its parts.
    pub fn new(qubits: u32, depth: u32, gates: Vec<Gate>) -> Self {
        Self {
            qubits,
            depth,
            gates,
        }
    }

    /// Create an empty circuit with `qubits` wires and no gates.
    pub fn with_qubits(qubits: u32) -> Self {
        Self::new(qubits, 1, vec![])
    }

    /// Number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubits as usize
    }

    /// Number of gates.
    #[inline]
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Check if the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Check structural well-formedness.
    ///
    /// A circuit without qubits is always valid. Otherwise every gate needs
    /// at least one target, and every target and every control must index an
    /// existing qubit; the first offending gate is reported.
    pub fn validate(&self) -> IrResult<()> {
        if self.qubits == 0 {
            return Ok(());
        }

        for (gate_index, gate) in self.gates.iter().enumerate() {
            if gate.targets.is_empty() {
                return Err(IrError::MissingTarget {
                    gate_index,
                    kind: gate.kind,
                });
            }
            if let Some(&qubit) = gate.targets.iter().find(|q| q.0 >= self.qubits) {
                return Err(IrError::TargetOutOfRange {
                    gate_index,
                    kind: gate.kind,
                    qubit,
                    num_qubits: self.qubits,
                });
            }
            if let Some(&qubit) = gate.controls.iter().find(|q| q.0 >= self.qubits) {
                return Err(IrError::ControlOutOfRange {
                    gate_index,
                    kind: gate.kind,
                    qubit,
                    num_qubits: self.qubits,
                });
            }
        }

        Ok(())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> IrResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Accept or reject a circuit before simulation.
pub fn validate_circuit(circuit: &Circuit) -> bool {
    circuit.validate().is_ok()
}

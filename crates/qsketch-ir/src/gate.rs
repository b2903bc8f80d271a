//! Recognized gate types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;
use crate::stroke::Point;

/// Gates that can be drawn on the sketch surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GateKind {
    /// Hadamard gate.
    Hadamard,
    /// Pauli-X gate.
    PauliX,
    /// Pauli-Y gate.
    PauliY,
    /// Pauli-Z gate.
    PauliZ,
    /// Controlled-NOT. Without a control it is an unpaired CNOT mark.
    Cnot,
    /// Measurement.
    Measure,
}

impl GateKind {
    /// Get the short name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Hadamard => "h",
            GateKind::PauliX => "x",
            GateKind::PauliY => "y",
            GateKind::PauliZ => "z",
            GateKind::Cnot => "cx",
            GateKind::Measure => "measure",
        }
    }

    /// Check if this gate acts unitarily on the statevector.
    ///
    /// Pauli-Y and measurement are carried through the circuit but not
    /// simulated.
    #[inline]
    pub fn is_simulated(&self) -> bool {
        match self {
            GateKind::Hadamard | GateKind::PauliX | GateKind::PauliZ | GateKind::Cnot => true,
            GateKind::PauliY | GateKind::Measure => false,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A gate placed on one or more qubit wires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The gate type.
    #[serde(rename = "type")]
    pub kind: GateKind,
    /// Target qubits, order-significant.
    pub targets: Vec<QubitId>,
    /// Control qubits; empty for uncontrolled gates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<QubitId>,
    /// Where the gate was drawn.
    pub position: Point,
}

impl Gate {
    /// Create an uncontrolled single-target gate.
    pub fn single(kind: GateKind, target: QubitId, position: Point) -> Self {
        Self {
            kind,
            targets: vec![target],
            controls: vec![],
            position,
        }
    }

    /// Create a CNOT gate.
    pub fn cnot(control: QubitId, target: QubitId, position: Point) -> Self {
        Self {
            kind: GateKind::Cnot,
            targets: vec![target],
            controls: vec![control],
            position,
        }
    }

    /// Check if the gate has at least one control.
    #[inline]
    pub fn is_controlled(&self) -> bool {
        !self.controls.is_empty()
    }

    /// All qubits the gate touches: controls first, then targets.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.controls.iter().chain(self.targets.iter()).copied()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        let mut first = true;
        for q in self.qubits() {
            if first {
                write!(f, " {q}")?;
                first = false;
            } else {
                write!(f, ", {q}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_gate() {
        let gate = Gate::single(GateKind::Hadamard, QubitId(1), Point::new(40.0, 200.0));
        assert!(!gate.is_controlled());
        assert_eq!(gate.qubits().collect::<Vec<_>>(), vec![QubitId(1)]);
        assert_eq!(format!("{gate}"), "h q1");
    }

    #[test]
    fn test_cnot_gate() {
        let gate = Gate::cnot(QubitId(0), QubitId(2), Point::new(120.0, 300.0));
        assert!(gate.is_controlled());
        assert_eq!(gate.qubits().collect::<Vec<_>>(), vec![QubitId(0), QubitId(2)]);
        assert_eq!(format!("{gate}"), "cx q0, q2");
    }

    #[test]
    fn test_simulated_kinds() {
        assert!(GateKind::Hadamard.is_simulated());
        assert!(GateKind::Cnot.is_simulated());
        assert!(!GateKind::PauliY.is_simulated());
        assert!(!GateKind::Measure.is_simulated());
    }

    #[test]
    fn test_gate_json_shape() {
        let gate = Gate::single(GateKind::PauliZ, QubitId(0), Point::new(80.0, 100.0));
        let value = serde_json::to_value(&gate).unwrap();
        assert_eq!(value["type"], "pauliZ");
        assert_eq!(value["targets"], serde_json::json!([0]));
        assert!(value.get("controls").is_none());

        let cnot = Gate::cnot(QubitId(0), QubitId(1), Point::new(0.0, 0.0));
        let value = serde_json::to_value(&cnot).unwrap();
        assert_eq!(value["controls"], serde_json::json!([0]));
    }
}

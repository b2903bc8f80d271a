//! Stroke-to-circuit recognition.
//!
//! Recognition is a pure function of the stroke set: wires are located
//! first, every gate stroke is then anchored by its first point to the
//! closest wire, and CNOT marks are paired per time-column in a second pass.

use std::collections::BTreeMap;

use qsketch_ir::{Circuit, Gate, GateKind, Point, QubitId, Stroke};
use tracing::{debug, trace};

use crate::config::RecognizerConfig;
use crate::geometry::{WireMap, column_of};

/// One end of a CNOT, anchored to a qubit but not yet paired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CnotMark {
    /// Wire the mark was drawn on.
    pub target: QubitId,
    /// First point of the mark's stroke.
    pub position: Point,
}

/// Converts stroke collections into circuits.
#[derive(Debug, Clone, Default)]
pub struct Recognizer {
    config: RecognizerConfig,
}

impl Recognizer {
    /// Create a recognizer with the given grid and snap settings.
    pub fn new(config: RecognizerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Recognize a circuit from finished strokes.
    ///
    /// Gate strokes that start too far from every wire, and strokes without
    /// points, are dropped without error.
    pub fn recognize(&self, strokes: &[Stroke]) -> Circuit {
        let wires = WireMap::from_strokes(strokes);

        let mut gates = vec![];
        let mut cnot_marks = vec![];

        for stroke in strokes {
            let Some(kind) = stroke.tool.gate_kind() else {
                continue;
            };
            let Some(anchor) = stroke.first_point() else {
                trace!("Ignoring empty {} stroke", stroke.tool);
                continue;
            };
            let Some(target) = wires.locate(anchor.y, self.config.gate_snap_threshold) else {
                debug!(
                    "Dropping {} stroke at ({}, {}): no wire within {}px",
                    stroke.tool, anchor.x, anchor.y, self.config.gate_snap_threshold
                );
                continue;
            };

            match kind {
                GateKind::Cnot => cnot_marks.push(CnotMark {
                    target,
                    position: anchor,
                }),
                GateKind::Hadamard
                | GateKind::PauliX
                | GateKind::PauliY
                | GateKind::PauliZ
                | GateKind::Measure => gates.push(Gate::single(kind, target, anchor)),
            }
        }

        gates.extend(self.process_cnot_gates(&cnot_marks));

        let depth = self.depth_of(&gates);
        debug!(
            "Recognized {} qubits, {} gates, depth {} from {} strokes",
            wires.len(),
            gates.len(),
            depth,
            strokes.len()
        );

        Circuit::new(
            u32::try_from(wires.len()).unwrap_or(u32::MAX),
            depth,
            gates,
        )
    }

    /// Pair CNOT marks that share a time-column.
    ///
    /// Within a column, marks are ordered by qubit and consumed two at a
    /// time: the upper mark controls, the lower one is the target. Two marks
    /// on the same qubit cannot form a gate and stay as two unpaired marks,
    /// as does a final leftover mark in a column with an odd count.
    pub fn process_cnot_gates(&self, marks: &[CnotMark]) -> Vec<Gate> {
        let mut columns: BTreeMap<i64, Vec<CnotMark>> = BTreeMap::new();
        for mark in marks {
            columns
                .entry(column_of(mark.position.x, self.config.grid_size))
                .or_default()
                .push(*mark);
        }

        let mut gates = Vec::with_capacity(marks.len());
        for (column, mut column_marks) in columns {
            column_marks.sort_by_key(|mark| mark.target);

            let mut pairs = column_marks.chunks_exact(2);
            for pair in &mut pairs {
                let (control, target) = (pair[0], pair[1]);
                if control.target == target.target {
                    debug!(
                        "Column {column}: two CNOT marks on {}, keeping them unpaired",
                        control.target
                    );
                    gates.push(Gate::single(GateKind::Cnot, control.target, control.position));
                    gates.push(Gate::single(GateKind::Cnot, target.target, target.position));
                } else {
                    gates.push(Gate::cnot(control.target, target.target, target.position));
                }
            }

            if let [leftover] = pairs.remainder() {
                trace!("Column {column}: unpaired CNOT mark on {}", leftover.target);
                gates.push(Gate::single(GateKind::Cnot, leftover.target, leftover.position));
            }
        }

        gates
    }

    /// Number of time-columns spanned by the rightmost gate, plus one.
    ///
    /// Saturates at `u32::MAX` for gates placed absurdly far right.
    fn depth_of(&self, gates: &[Gate]) -> u32 {
        let max_x = gates
            .iter()
            .map(|gate| gate.position.x)
            .fold(0.0_f64, f64::max);
        ((max_x / self.config.grid_size).ceil() as u32).saturating_add(1)
    }
}

/// Recognize a circuit with the default grid and snap settings.
pub fn recognize_circuit(strokes: &[Stroke]) -> Circuit {
    Recognizer::default().recognize(strokes)
}

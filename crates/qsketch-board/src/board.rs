//! The live sketch board.

use tracing::{debug, warn};

use qsketch_ir::{Circuit, Point, Stroke, StrokeBuilder, ToolKind, validate_circuit};
use qsketch_recognize::{Recognizer, RecognizerConfig, WireMap};
use qsketch_sim::{SimulationResult, SimulatorConfig, StatevectorSimulator};

use crate::error::{BoardError, BoardResult};

/// Outcome of re-running the pipeline after the stroke set changed.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardUpdate {
    /// The new circuit was accepted and simulated.
    Accepted,
    /// The new circuit was rejected; the previous circuit and simulation are
    /// still current.
    Rejected {
        /// Why the circuit was not accepted.
        reason: String,
    },
}

impl BoardUpdate {
    /// Check if the update replaced the current circuit.
    pub fn is_accepted(&self) -> bool {
        matches!(self, BoardUpdate::Accepted)
    }
}

/// A drawing session: the strokes drawn so far, the gesture in progress,
/// and the last circuit that passed validation together with its simulation.
///
/// Every change to the finished strokes re-runs recognition, validation and
/// simulation from scratch.
#[derive(Debug)]
pub struct SketchBoard {
    recognizer: Recognizer,
    simulator: StatevectorSimulator,
    strokes: Vec<Stroke>,
    pending: Option<StrokeBuilder>,
    circuit: Circuit,
    simulation: Option<SimulationResult>,
}

impl Default for SketchBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchBoard {
    /// Create an empty board with default settings.
    pub fn new() -> Self {
        Self::with_settings(RecognizerConfig::default(), SimulatorConfig::default())
    }

    /// Create an empty board with custom recognition and simulation settings.
    pub fn with_settings(recognizer: RecognizerConfig, simulator: SimulatorConfig) -> Self {
        let mut board = Self {
            recognizer: Recognizer::new(recognizer),
            simulator: StatevectorSimulator::with_config(simulator),
            strokes: vec![],
            pending: None,
            circuit: Circuit::default(),
            simulation: None,
        };
        board.refresh();
        board
    }

    // =========================================================================
    // Stroke capture
    // =========================================================================

    /// Start a gesture (pointer down).
    pub fn begin_stroke(
        &mut self,
        tool: ToolKind,
        color: impl Into<String>,
        width: f64,
    ) -> BoardResult<()> {
        if let Some(pending) = &self.pending {
            return Err(BoardError::StrokeInProgress(pending.tool()));
        }
        self.pending = Some(
            StrokeBuilder::new(tool)
                .with_color(color)
                .with_width(width),
        );
        Ok(())
    }

    /// Record a pointer position for the gesture in progress.
    pub fn extend_stroke(&mut self, point: Point) -> BoardResult<()> {
        let pending = self
            .pending
            .as_mut()
            .ok_or(BoardError::NoStrokeInProgress)?;
        pending.push(point);
        Ok(())
    }

    /// Finish the gesture in progress (pointer up) and update the circuit.
    ///
    /// A wire that starts close to an existing wire is moved onto it, so
    /// the two collapse into one qubit.
    pub fn finish_stroke(&mut self) -> BoardResult<BoardUpdate> {
        let pending = self.pending.take().ok_or(BoardError::NoStrokeInProgress)?;
        let stroke = pending.finish();
        let stroke = if stroke.is_wire() {
            self.snap_wire(stroke)
        } else {
            stroke
        };
        Ok(self.add_stroke(stroke))
    }

    /// Abandon the gesture in progress without touching the circuit.
    pub fn cancel_stroke(&mut self) -> Option<StrokeBuilder> {
        self.pending.take()
    }

    /// Gesture in progress, if any.
    pub fn pending(&self) -> Option<&StrokeBuilder> {
        self.pending.as_ref()
    }

    fn snap_wire(&self, mut stroke: Stroke) -> Stroke {
        let Some(first) = stroke.first_point() else {
            return stroke;
        };
        let wires = WireMap::from_strokes(&self.strokes);
        let threshold = self.recognizer.config().wire_snap_threshold;
        if let Some(qubit) = wires.locate(first.y, threshold) {
            let offset = wires.positions()[qubit.index()] - first.y;
            for point in &mut stroke.points {
                point.y += offset;
            }
        }
        stroke
    }

    // =========================================================================
    // Stroke set
    // =========================================================================

    /// Add a finished stroke and update the circuit.
    pub fn add_stroke(&mut self, stroke: Stroke) -> BoardUpdate {
        self.strokes.push(stroke);
        self.refresh()
    }

    /// Remove the most recent stroke. Returns `None` if there is none.
    pub fn undo(&mut self) -> Option<BoardUpdate> {
        self.strokes.pop()?;
        Some(self.refresh())
    }

    /// Remove every stroke.
    pub fn clear(&mut self) -> BoardUpdate {
        self.strokes.clear();
        self.pending = None;
        self.refresh()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Finished strokes in drawing order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// The last accepted circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Simulation of the last accepted circuit.
    pub fn simulation(&self) -> Option<&SimulationResult> {
        self.simulation.as_ref()
    }

    fn refresh(&mut self) -> BoardUpdate {
        let circuit = self.recognizer.recognize(&self.strokes);

        if !validate_circuit(&circuit) {
            warn!("Recognized circuit failed validation; keeping previous circuit");
            return BoardUpdate::Rejected {
                reason: "circuit failed validation".into(),
            };
        }

        match self.simulator.run(&circuit) {
            Ok(simulation) => {
                debug!(
                    "Accepted circuit: {} qubits, {} gates",
                    circuit.qubits,
                    circuit.gates.len()
                );
                self.circuit = circuit;
                self.simulation = Some(simulation);
                BoardUpdate::Accepted
            }
            Err(e) => {
                warn!("Simulation failed: {e}; keeping previous circuit");
                BoardUpdate::Rejected {
                    reason: e.to_string(),
                }
            }
        }
    }
}

//! Pointer strokes drawn on the sketch surface.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gate::GateKind;

/// A continuous pixel coordinate on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position; grows along the circuit's timeline.
    pub x: f64,
    /// Vertical position; selects the qubit wire.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The drawing tool a stroke was made with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolKind {
    /// Draws a qubit wire.
    Wire,
    /// Places a Hadamard gate.
    Hadamard,
    /// Places a Pauli-X gate.
    PauliX,
    /// Places a Pauli-Y gate.
    PauliY,
    /// Places a Pauli-Z gate.
    PauliZ,
    /// Places one end of a CNOT (control or target).
    Cnot,
    /// Places a measurement.
    Measure,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub const ALL: [ToolKind; 7] = [
        ToolKind::Wire,
        ToolKind::Hadamard,
        ToolKind::PauliX,
        ToolKind::PauliY,
        ToolKind::PauliZ,
        ToolKind::Cnot,
        ToolKind::Measure,
    ];

    /// The gate this tool places, or `None` for the wire tool.
    #[inline]
    pub fn gate_kind(self) -> Option<GateKind> {
        match self {
            ToolKind::Wire => None,
            ToolKind::Hadamard => Some(GateKind::Hadamard),
            ToolKind::PauliX => Some(GateKind::PauliX),
            ToolKind::PauliY => Some(GateKind::PauliY),
            ToolKind::PauliZ => Some(GateKind::PauliZ),
            ToolKind::Cnot => Some(GateKind::Cnot),
            ToolKind::Measure => Some(GateKind::Measure),
        }
    }

    /// The serialized tag of this tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Wire => "wire",
            ToolKind::Hadamard => "hadamard",
            ToolKind::PauliX => "pauliX",
            ToolKind::PauliY => "pauliY",
            ToolKind::PauliZ => "pauliZ",
            ToolKind::Cnot => "cnot",
            ToolKind::Measure => "measure",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<GateKind> for ToolKind {
    fn from(kind: GateKind) -> Self {
        match kind {
            GateKind::Hadamard => ToolKind::Hadamard,
            GateKind::PauliX => ToolKind::PauliX,
            GateKind::PauliY => ToolKind::PauliY,
            GateKind::PauliZ => ToolKind::PauliZ,
            GateKind::Cnot => ToolKind::Cnot,
            GateKind::Measure => ToolKind::Measure,
        }
    }
}

/// A finished pointer gesture, tagged with the tool active when it was drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Sampled pointer positions, in drawing order.
    pub points: Vec<Point>,
    /// Tool used for the gesture.
    pub tool: ToolKind,
    /// Stroke color as drawn (CSS color string).
    #[serde(default = "default_color")]
    pub color: String,
    /// Stroke width in pixels.
    #[serde(default = "default_width")]
    pub width: f64,
}

fn default_color() -> String {
    "#000000".into()
}

fn default_width() -> f64 {
    2.0
}

impl Stroke {
    /// Create a stroke with the default color and width.
    pub fn new(tool: ToolKind, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            tool,
            color: default_color(),
            width: default_width(),
        }
    }

    /// A single-point stroke, as produced by a tap.
    pub fn tap(tool: ToolKind, x: f64, y: f64) -> Self {
        Self::new(tool, [Point::new(x, y)])
    }

    /// A horizontal wire stroke from `x_start` to `x_end` at height `y`.
    pub fn wire(y: f64, x_start: f64, x_end: f64) -> Self {
        Self::new(ToolKind::Wire, [Point::new(x_start, y), Point::new(x_end, y)])
    }

    /// First recorded point, which anchors the stroke during recognition.
    #[inline]
    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Check if this stroke was drawn with the wire tool.
    #[inline]
    pub fn is_wire(&self) -> bool {
        self.tool == ToolKind::Wire
    }

    /// Parse a JSON array of strokes.
    pub fn list_from_json(json: &str) -> crate::IrResult<Vec<Stroke>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// An in-progress gesture that grows while the pointer is down.
///
/// Call [`StrokeBuilder::finish`] on pointer-up to obtain the immutable
/// [`Stroke`] that recognition consumes.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    points: Vec<Point>,
    tool: ToolKind,
    color: String,
    width: f64,
}

impl StrokeBuilder {
    /// Start a gesture with the given tool.
    pub fn new(tool: ToolKind) -> Self {
        Self {
            points: vec![],
            tool,
            color: default_color(),
            width: default_width(),
        }
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the stroke width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Append a sampled pointer position.
    pub fn push(&mut self, point: Point) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Tool of the gesture.
    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Points recorded so far.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Finalize the gesture.
    pub fn finish(self) -> Stroke {
        Stroke {
            points: self.points,
            tool: self.tool,
            color: self.color,
            width: self.width,
        }
    }
}

//! Freehand strokes to quantum circuits.
//!
//! Turns the strokes captured on the sketch surface into a
//! [`qsketch_ir::Circuit`]:
//!
//! - **Wires** become qubits, numbered top to bottom by their height
//! - **Gate strokes** snap to the closest wire within a threshold
//! - **CNOT marks** drawn in the same time-column pair up into
//!   control/target gates
//!
//! # Quick start
//!
//! ```rust
//! use qsketch_ir::{Stroke, ToolKind};
//! use qsketch_recognize::recognize_circuit;
//!
//! let strokes = vec![
//!     Stroke::wire(100.0, 0.0, 400.0),
//!     Stroke::wire(200.0, 0.0, 400.0),
//!     Stroke::tap(ToolKind::Hadamard, 40.0, 100.0),
//!     Stroke::tap(ToolKind::Cnot, 120.0, 100.0),
//!     Stroke::tap(ToolKind::Cnot, 120.0, 200.0),
//! ];
//!
//! let circuit = recognize_circuit(&strokes);
//! assert_eq!(circuit.qubits, 2);
//! assert_eq!(circuit.gates.len(), 2);
//! assert_eq!(circuit.depth, 4);
//! ```

pub mod config;
pub mod geometry;
pub mod recognizer;

pub use config::{ConfigError, RecognizerConfig};
pub use geometry::{WireMap, column_of, nearest_wire, snap_to_column, snap_to_nearest_wire};
pub use recognizer::{CnotMark, Recognizer, recognize_circuit};

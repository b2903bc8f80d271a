//! qsketch Stroke and Circuit Representation
//!
//! This crate holds the data shared by every stage of the sketch pipeline:
//! the raw strokes produced by the drawing surface and the circuits the
//! recognizer builds from them.
//!
//! # Core Components
//!
//! - **Strokes**: [`Point`], [`Stroke`] and [`StrokeBuilder`], tagged with a
//!   [`ToolKind`]
//! - **Gates**: [`GateKind`] and [`Gate`] with targets, controls and drawn
//!   position
//! - **Circuit**: [`Circuit`] with its qubit count and depth
//! - **Validation**: [`validate_circuit`] gates circuits before simulation
//!
//! # Example
//!
//! ```rust
//! use qsketch_ir::{validate_circuit, Circuit, Gate, GateKind, Point, QubitId};
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
//! assert!(validate_circuit(&circuit));
//! ```
//!
//! # Tools
//!
//! | Tool | Serialized | Produces |
//! |------|------------|----------|
//! | Wire | `wire` | a qubit |
//! | Hadamard | `hadamard` | `h` |
//! | Pauli-X/Y/Z | `pauliX`, `pauliY`, `pauliZ` | `x`, `y`, `z` |
//! | CNOT | `cnot` | `cx` (paired per column) |
//! | Measure | `measure` | `measure` |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod stroke;

pub use circuit::{Circuit, validate_circuit};
pub use error::{IrError, IrResult};
pub use gate::{Gate, GateKind};
pub use qubit::QubitId;
pub use stroke::{Point, Stroke, StrokeBuilder, ToolKind};

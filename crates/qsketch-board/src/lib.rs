//! Live sketch board for qsketch.
//!
//! [`SketchBoard`] ties the pipeline together the way a drawing surface
//! drives it: strokes are captured point by point, finalized on pointer-up,
//! and every change re-runs recognition, validation and simulation. A
//! circuit that fails validation or simulation never replaces the last good
//! one.
//!
//! ```rust
//! use qsketch_board::SketchBoard;
//! use qsketch_ir::{Stroke, ToolKind};
//!
//! let mut board = SketchBoard::new();
//! board.add_stroke(Stroke::wire(100.0, 0.0, 400.0));
//! board.add_stroke(Stroke::tap(ToolKind::PauliX, 40.0, 100.0));
//!
//! let sim = board.simulation().unwrap();
//! assert_eq!(sim.probabilities, vec![0.0, 1.0]);
//! ```

pub mod board;
pub mod error;

pub use board::{BoardUpdate, SketchBoard};
pub use error::{BoardError, BoardResult};

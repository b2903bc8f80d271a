//! Grid mapping from pixel coordinates to qubits and time-columns.

use qsketch_ir::{QubitId, Stroke};

/// Default width of a time-column, in pixels.
pub const DEFAULT_GRID_SIZE: f64 = 40.0;

/// Default maximum distance between a point and the wire it snaps to.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 20.0;

/// Index of the wire closest to `y`, if it lies within `snap_threshold`.
///
/// When two wires are equally close the first one in `wire_positions` wins.
pub fn nearest_wire(y: f64, wire_positions: &[f64], snap_threshold: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, &wire_y) in wire_positions.iter().enumerate() {
        let distance = (y - wire_y).abs();
        if distance.is_nan() {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.filter(|&(_, distance)| distance <= snap_threshold)
        .map(|(index, _)| index)
}

/// Snap `y` onto the closest wire within `snap_threshold`, or return it
/// unchanged.
pub fn snap_to_nearest_wire(y: f64, wire_positions: &[f64], snap_threshold: f64) -> f64 {
    nearest_wire(y, wire_positions, snap_threshold).map_or(y, |index| wire_positions[index])
}

/// Time-column of a horizontal position: `x` rounded to the nearest multiple
/// of `grid_size`, expressed in grid units. Halfway values round up.
#[inline]
pub fn column_of(x: f64, grid_size: f64) -> i64 {
    (x / grid_size + 0.5).floor() as i64
}

/// `x` rounded to the nearest multiple of `grid_size`.
#[inline]
pub fn snap_to_column(x: f64, grid_size: f64) -> f64 {
    column_of(x, grid_size) as f64 * grid_size
}

/// Mapping from wire heights to qubit indices for one recognition pass.
///
/// Qubit `i` is the `i`-th distinct wire height in ascending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireMap {
    positions: Vec<f64>,
}

impl WireMap {
    /// Collect the distinct first-point heights of all wire strokes.
    ///
    /// Wire strokes starting at exactly the same height collapse into one
    /// qubit; wire strokes without points, or starting at a non-finite
    /// height, are ignored.
    pub fn from_strokes<'a>(strokes: impl IntoIterator<Item = &'a Stroke>) -> Self {
        let mut positions: Vec<f64> = strokes
            .into_iter()
            .filter(|stroke| stroke.is_wire())
            .filter_map(Stroke::first_point)
            .map(|point| point.y)
            .filter(|y| y.is_finite())
            .collect();

        positions.sort_by(f64::total_cmp);
        positions.dedup();
        Self { positions }
    }

    /// Build a map directly from wire heights. Non-finite heights are
    /// ignored.
    pub fn from_positions(positions: impl IntoIterator<Item = f64>) -> Self {
        let mut positions: Vec<f64> = positions
            .into_iter()
            .filter(|y| y.is_finite())
            .collect();
        positions.sort_by(f64::total_cmp);
        positions.dedup();
        Self { positions }
    }

    /// Number of qubits.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if no wires were drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Wire heights in qubit order.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Qubit whose wire is within `snap_threshold` of `y`.
    pub fn locate(&self, y: f64, snap_threshold: f64) -> Option<QubitId> {
        nearest_wire(y, &self.positions, snap_threshold).map(QubitId::from)
    }
}

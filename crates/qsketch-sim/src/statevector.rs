//! Statevector simulation engine.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;
use tracing::{trace, warn};

use qsketch_ir::{Gate, GateKind};

/// A statevector representing a quantum state.
///
/// Bit `k` of an amplitude's index is the value of qubit `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    ///
    /// With zero qubits the state is the single amplitude `1`.
    ///
    /// # Panics
    ///
    /// Panics if `2^num_qubits` amplitudes cannot be addressed. Use
    /// [`StatevectorSimulator`](crate::StatevectorSimulator) to have the
    /// width checked up front.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Read-only view of the amplitudes.
    pub fn state_vector(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Measurement probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Sum of all probabilities; `1` up to rounding for unitary evolution.
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Apply a recognized gate.
    ///
    /// Pauli-Y, measurement and CNOT marks without a control leave the state
    /// untouched.
    pub fn apply_gate(&mut self, gate: &Gate) {
        match gate.kind {
            GateKind::Hadamard => {
                for target in &gate.targets {
                    self.apply_hadamard(target.index());
                }
            }
            GateKind::PauliX => {
                for target in &gate.targets {
                    self.apply_pauli_x(target.index());
                }
            }
            GateKind::PauliY => {
                for target in &gate.targets {
                    self.apply_pauli_y(target.index());
                }
            }
            GateKind::PauliZ => {
                for target in &gate.targets {
                    self.apply_pauli_z(target.index());
                }
            }
            GateKind::Cnot => match (gate.controls.first(), gate.targets.first()) {
                (Some(control), Some(target)) => {
                    self.apply_cnot(control.index(), target.index());
                }
                _ => trace!("Skipping unpaired CNOT mark at x={}", gate.position.x),
            },
            GateKind::Measure => {
                for target in &gate.targets {
                    self.measure(target.index());
                }
            }
        }
    }

    fn check_qubit(&self, qubit: usize) -> bool {
        if qubit < self.num_qubits {
            true
        } else {
            warn!(
                "Ignoring gate on qubit {} of a {}-qubit state",
                qubit, self.num_qubits
            );
            false
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    /// Apply a Hadamard gate.
    ///
    /// Each output amplitude mixes a pair of inputs, so the prior state is
    /// copied before any slot is overwritten.
    pub fn apply_hadamard(&mut self, qubit: usize) {
        if !self.check_qubit(qubit) {
            return;
        }
        let mask = 1 << qubit;
        let previous = self.amplitudes.clone();
        self.amplitudes.fill(Complex64::new(0.0, 0.0));

        for (i, &amp) in previous.iter().enumerate() {
            let partner = i ^ mask;
            let share = amp * FRAC_1_SQRT_2;
            if i & mask == 0 {
                self.amplitudes[i] += share;
                self.amplitudes[partner] += share;
            } else {
                self.amplitudes[i] -= share;
                self.amplitudes[partner] += share;
            }
        }
    }

    /// Apply a Pauli-X (bit flip).
    pub fn apply_pauli_x(&mut self, qubit: usize) {
        if !self.check_qubit(qubit) {
            return;
        }
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    /// Pauli-Y is not simulated; the state is left unchanged.
    pub fn apply_pauli_y(&mut self, qubit: usize) {
        trace!("Pauli-Y on qubit {} is not simulated", qubit);
    }

    /// Apply a Pauli-Z (phase flip).
    pub fn apply_pauli_z(&mut self, qubit: usize) {
        if !self.check_qubit(qubit) {
            return;
        }
        let mask = 1 << qubit;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp = -*amp;
            }
        }
    }

    /// Measurement does not collapse the state; probabilities are read with
    /// [`Statevector::probabilities`] instead.
    pub fn measure(&mut self, qubit: usize) {
        trace!("Measurement on qubit {} leaves the state unchanged", qubit);
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    /// Apply a CNOT: flip `target` on every basis state where `control` is 1.
    pub fn apply_cnot(&mut self, control: usize, target: usize) {
        if !self.check_qubit(control) || !self.check_qubit(target) {
            return;
        }
        if control == target {
            warn!("Ignoring CNOT controlled by its own target q{}", target);
            return;
        }
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_zero_qubits() {
        let mut sv = Statevector::new(0);
        assert_eq!(sv.state_vector(), &[Complex64::new(1.0, 0.0)]);
        sv.apply_hadamard(0);
        sv.apply_cnot(0, 1);
        assert_eq!(sv.probabilities(), vec![1.0]);
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_hadamard(0);

        assert!(approx_eq(sv.amplitudes[0], Complex64::new(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(FRAC_1_SQRT_2, 0.0)));
    }

    #[test]
    fn test_hadamard_on_one() {
        let mut sv = Statevector::new(1);
        sv.apply_pauli_x(0);
        sv.apply_hadamard(0);

        assert!(approx_eq(sv.amplitudes[0], Complex64::new(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(-FRAC_1_SQRT_2, 0.0)));
    }

    #[test]
    fn test_hadamard_twice_is_identity() {
        let mut sv = Statevector::new(2);
        sv.apply_pauli_x(1);
        let before = sv.clone();
        sv.apply_hadamard(1);
        sv.apply_hadamard(1);
        for (a, b) in sv.amplitudes.iter().zip(before.amplitudes.iter()) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply_hadamard(0);
        sv.apply_cnot(0, 1);

        assert!(approx_eq(sv.amplitudes[0], Complex64::new(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(FRAC_1_SQRT_2, 0.0)));
    }

    #[test]
    fn test_x_gate() {
        let mut sv = Statevector::new(1);
        sv.apply_pauli_x(0);

        assert!(approx_eq(sv.amplitudes[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_z_gate_negates_one_component() {
        let mut sv = Statevector::new(1);
        sv.apply_hadamard(0);
        sv.apply_pauli_z(0);

        assert!(approx_eq(sv.amplitudes[0], Complex64::new(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(-FRAC_1_SQRT_2, 0.0)));
    }

    #[test]
    fn test_cnot_control_zero_is_identity() {
        let mut sv = Statevector::new(2);
        sv.apply_cnot(0, 1);
        assert_eq!(sv.probabilities(), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cnot_control_one_flips_target() {
        let mut sv = Statevector::new(2);
        sv.apply_pauli_x(0);
        sv.apply_cnot(0, 1);
        assert_eq!(sv.probabilities(), vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_self_controlled_cnot_is_ignored() {
        let mut sv = Statevector::new(2);
        sv.apply_hadamard(0);
        let before = sv.clone();
        sv.apply_cnot(0, 0);
        assert_eq!(sv, before);
    }

    #[test]
    fn test_unsupported_ops_are_noops() {
        let mut sv = Statevector::new(2);
        sv.apply_hadamard(1);
        let before = sv.clone();
        sv.apply_pauli_y(1);
        sv.measure(0);
        sv.measure(1);
        assert_eq!(sv, before);
    }

    #[test]
    fn test_out_of_range_qubit_is_ignored() {
        let mut sv = Statevector::new(1);
        sv.apply_pauli_x(3);
        sv.apply_hadamard(64);
        assert_eq!(sv.probabilities(), vec![1.0, 0.0]);
    }
}

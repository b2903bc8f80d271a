//! Tests for circuit simulation.

use proptest::prelude::*;
use qsketch_ir::{Circuit, Gate, GateKind, Point, QubitId};
use qsketch_sim::{Statevector, StatevectorSimulator, ket_label, simulate_circuit};

const EPS: f64 = 1e-9;

fn assert_probs(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < EPS, "state {i}: got {a}, expected {e}");
    }
}

fn at(x: f64) -> Point {
    Point::new(x, 0.0)
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn hadamard_gives_even_split() {
    let circuit = Circuit::new(
        1,
        3,
        vec![Gate::single(GateKind::Hadamard, QubitId(0), at(80.0))],
    );
    let result = simulate_circuit(&circuit).unwrap();
    assert_probs(&result.probabilities, &[0.5, 0.5]);
}

#[test]
fn bell_circuit_probabilities() {
    let circuit = Circuit::new(
        2,
        4,
        vec![
            Gate::single(GateKind::Hadamard, QubitId(0), at(40.0)),
            Gate::cnot(QubitId(0), QubitId(1), at(120.0)),
        ],
    );
    let result = simulate_circuit(&circuit).unwrap();
    assert_probs(&result.probabilities, &[0.5, 0.0, 0.0, 0.5]);

    let labels: Vec<_> = (0..4).map(|i| ket_label(i, 2)).collect();
    assert_eq!(labels, vec!["|00⟩", "|01⟩", "|10⟩", "|11⟩"]);
}

#[test]
fn pauli_x_flips_single_qubit() {
    let circuit = Circuit::new(
        1,
        2,
        vec![Gate::single(GateKind::PauliX, QubitId(0), at(40.0))],
    );
    let result = simulate_circuit(&circuit).unwrap();
    assert_probs(&result.probabilities, &[0.0, 1.0]);
}

#[test]
fn gates_apply_in_x_order_not_list_order() {
    // X then CNOT flips the target; CNOT then X would not.
    let circuit = Circuit::new(
        2,
        4,
        vec![
            Gate::cnot(QubitId(0), QubitId(1), at(120.0)),
            Gate::single(GateKind::PauliX, QubitId(0), at(40.0)),
        ],
    );
    let result = simulate_circuit(&circuit).unwrap();
    assert_probs(&result.probabilities, &[0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn zero_qubit_circuit_is_trivial() {
    let result = simulate_circuit(&Circuit::default()).unwrap();
    assert_eq!(result.num_qubits, 0);
    assert_probs(&result.probabilities, &[1.0]);
    assert_eq!(result.label(0), "");
}

#[test]
fn unsupported_gates_keep_state() {
    let circuit = Circuit::new(
        1,
        4,
        vec![
            Gate::single(GateKind::Hadamard, QubitId(0), at(40.0)),
            Gate::single(GateKind::PauliY, QubitId(0), at(80.0)),
            Gate::single(GateKind::Measure, QubitId(0), at(120.0)),
        ],
    );
    let result = simulate_circuit(&circuit).unwrap();
    assert_probs(&result.probabilities, &[0.5, 0.5]);
    assert_eq!(result.skipped_gates, 2);
}

#[test]
fn cnot_on_control_zero_and_one() {
    let mut sv = Statevector::new(2);
    sv.apply_cnot(1, 0);
    assert_probs(&sv.probabilities(), &[1.0, 0.0, 0.0, 0.0]);

    let mut sv = Statevector::new(2);
    sv.apply_pauli_x(1);
    sv.apply_cnot(1, 0);
    assert_probs(&sv.probabilities(), &[0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn result_serializes_to_json() {
    let circuit = Circuit::new(
        1,
        2,
        vec![Gate::single(GateKind::PauliX, QubitId(0), at(40.0))],
    );
    let result = StatevectorSimulator::new().run(&circuit).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["num_qubits"], 1);
    assert_eq!(value["probabilities"], serde_json::json!([0.0, 1.0]));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Op {
    H(usize),
    X(usize),
    Z(usize),
    Cx(usize, usize),
}

fn arb_ops(num_qubits: usize) -> impl Strategy<Value = Vec<Op>> {
    let single = prop_oneof![
        (0..num_qubits).prop_map(Op::H),
        (0..num_qubits).prop_map(Op::X),
        (0..num_qubits).prop_map(Op::Z),
        (0..num_qubits, 0..num_qubits).prop_map(|(c, t)| Op::Cx(c, t)),
    ];
    prop::collection::vec(single, 0..24)
}

fn run_ops(num_qubits: usize, ops: &[Op]) -> Statevector {
    let mut sv = Statevector::new(num_qubits);
    for op in ops {
        match *op {
            Op::H(q) => sv.apply_hadamard(q),
            Op::X(q) => sv.apply_pauli_x(q),
            Op::Z(q) => sv.apply_pauli_z(q),
            Op::Cx(c, t) => sv.apply_cnot(c, t),
        }
    }
    sv
}

proptest! {
    #[test]
    fn probabilities_sum_to_one(
        (n, ops) in (1_usize..=5).prop_flat_map(|n| (Just(n), arb_ops(n)))
    ) {
        let sv = run_ops(n, &ops);
        let total: f64 = sv.probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() < EPS, "total probability {}", total);
    }

    #[test]
    fn hadamard_pair_restores_basis_state(n in 1_usize..=5, basis in 0_usize..32, q in 0_usize..5) {
        let basis = basis % (1 << n);
        let q = q % n;
        let mut sv = Statevector::new(n);
        for bit in 0..n {
            if basis & (1 << bit) != 0 {
                sv.apply_pauli_x(bit);
            }
        }
        let before = sv.clone();
        sv.apply_hadamard(q);
        sv.apply_hadamard(q);
        for (a, b) in sv.state_vector().iter().zip(before.state_vector()) {
            prop_assert!((a - b).norm() < EPS);
        }
    }

    #[test]
    fn pauli_x_is_self_inverse(
        (n, ops) in (1_usize..=4).prop_flat_map(|n| (Just(n), arb_ops(n))),
        q in 0_usize..4,
    ) {
        let q = q % n;
        let mut sv = run_ops(n, &ops);
        let before = sv.clone();
        sv.apply_pauli_x(q);
        sv.apply_pauli_x(q);
        prop_assert_eq!(sv, before);
    }
}

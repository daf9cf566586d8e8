//! High-level circuit builder API.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::Instruction;
use crate::qubit::{Clbit, ClbitId, Qubit, QubitId};

/// A quantum circuit.
///
/// An append-only log of [`Instruction`]s over a qubit register and a
/// classical register. Every instruction is validated when it is appended,
/// so a constructed circuit always satisfies:
///
/// - every qubit and classical bit index is inside its register;
/// - no instruction names the same qubit twice;
/// - a qubit is measured at most once and is never touched after that.
///
/// Instructions are never removed or reordered.
#[derive(Debug, Clone, Serialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit.
    qubits: Vec<Qubit>,
    /// Classical bits in the circuit.
    clbits: Vec<Clbit>,
    /// The operation log, in application order.
    ops: Vec<Instruction>,
    /// Per-qubit flag set once the qubit has been measured.
    #[serde(skip)]
    measured: Vec<bool>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            clbits: vec![],
            ops: vec![],
            measured: vec![],
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        for _ in 0..num_clbits {
            circuit.add_clbit();
        }
        circuit
    }

    fn next_qubit_id(&self) -> QubitId {
        QubitId(self.qubits.len() as u32)
    }

    fn next_clbit_id(&self) -> ClbitId {
        ClbitId(self.clbits.len() as u32)
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = self.next_qubit_id();
        self.qubits.push(Qubit::new(id));
        self.measured.push(false);
        id
    }

    /// Add a named quantum register with multiple qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = self.next_qubit_id();
            self.qubits.push(Qubit::in_register(id, name.as_str(), i));
            self.measured.push(false);
            ids.push(id);
        }
        ids
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = self.next_clbit_id();
        self.clbits.push(Clbit::new(id));
        id
    }

    /// Add a named classical register with multiple bits.
    pub fn add_creg(&mut self, name: impl Into<String>, size: u32) -> Vec<ClbitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = self.next_clbit_id();
            self.clbits.push(Clbit::in_register(id, name.as_str(), i));
            ids.push(id);
        }
        ids
    }

    // =========================================================================
    // Appending
    // =========================================================================

    /// Validate `inst` against the registers and the given measured flags.
    fn check(&self, inst: &Instruction, measured: &[bool]) -> IrResult<()> {
        let gate_name = || Some(inst.name().to_string());

        let expected = inst.expected_qubits();
        if inst.qubits.len() as u32 != expected {
            return Err(IrError::QubitCountMismatch {
                gate_name: inst.name().to_string(),
                expected,
                got: inst.qubits.len() as u32,
            });
        }

        for (i, &qubit) in inst.qubits.iter().enumerate() {
            if qubit.index() >= self.qubits.len() {
                return Err(IrError::QubitNotFound {
                    qubit,
                    num_qubits: self.qubits.len(),
                    gate_name: gate_name(),
                });
            }
            if inst.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name(),
                });
            }
            if measured[qubit.index()] {
                return Err(IrError::QubitAlreadyMeasured {
                    qubit,
                    gate_name: gate_name(),
                });
            }
        }

        for &clbit in &inst.clbits {
            if clbit.index() >= self.clbits.len() {
                return Err(IrError::ClbitNotFound {
                    clbit,
                    num_clbits: self.clbits.len(),
                    gate_name: gate_name(),
                });
            }
        }

        if inst.is_measure() && inst.clbits.len() != 1 {
            return Err(IrError::QubitCountMismatch {
                gate_name: "measure".into(),
                expected: 1,
                got: inst.clbits.len() as u32,
            });
        }

        Ok(())
    }

    fn mark_measured(measured: &mut [bool], inst: &Instruction) {
        if inst.is_measure() {
            for q in &inst.qubits {
                measured[q.index()] = true;
            }
        }
    }

    /// Append one instruction to the end of the circuit.
    pub fn append(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.check(&instruction, &self.measured)?;
        Self::mark_measured(&mut self.measured, &instruction);
        self.ops.push(instruction);
        Ok(self)
    }

    /// Inline every operation of `other`, sending its qubit `k` to `mapping[k]`.
    ///
    /// The mapping must have exactly one entry per sub-circuit qubit and be
    /// injective. Classical bit indices are kept as-is. Either all of
    /// `other`'s operations are appended or none are.
    pub fn append_subcircuit(&mut self, other: &Circuit, mapping: &[QubitId]) -> IrResult<&mut Self> {
        if mapping.len() != other.num_qubits() {
            return Err(IrError::MappingSizeMismatch {
                subcircuit: other.name.clone(),
                expected: other.num_qubits(),
                got: mapping.len(),
            });
        }
        for (i, &qubit) in mapping.iter().enumerate() {
            if mapping[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(other.name.clone()),
                });
            }
            if qubit.index() >= self.qubits.len() {
                return Err(IrError::QubitNotFound {
                    qubit,
                    num_qubits: self.qubits.len(),
                    gate_name: Some(other.name.clone()),
                });
            }
        }

        let mut measured = self.measured.clone();
        let mut staged = Vec::with_capacity(other.ops.len());
        for inst in &other.ops {
            let inst = inst.remapped(mapping);
            self.check(&inst, &measured)?;
            Self::mark_measured(&mut measured, &inst);
            staged.push(inst);
        }

        self.measured = measured;
        self.ops.extend(staged);
        Ok(self)
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::two_qubit_gate(
            StandardGate::CP(theta),
            control,
            target,
        ))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::two_qubit_gate(StandardGate::Swap, q1, q2))
    }

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.append(Instruction::measure(qubit, clbit))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Get the number of operations.
    pub fn num_ops(&self) -> usize {
        self.ops.len()
    }

    /// The operation log in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.ops
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the classical bits in the circuit.
    pub fn clbits(&self) -> &[Clbit] {
        &self.clbits
    }

    /// `(qubit, clbit)` pairs of every measurement, in log order.
    pub fn measurements(&self) -> impl Iterator<Item = (QubitId, ClbitId)> + '_ {
        self.ops
            .iter()
            .filter(|inst| inst.is_measure())
            .map(|inst| (inst.qubits[0], inst.clbits[0]))
    }

    /// Number of operations per instruction name.
    pub fn count_ops(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for inst in &self.ops {
            *counts.entry(inst.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Get the circuit depth.
    ///
    /// Operations on disjoint wires share a layer; a measurement occupies
    /// both its qubit and its classical bit.
    pub fn depth(&self) -> usize {
        let mut qubit_level = vec![0usize; self.qubits.len()];
        let mut clbit_level = vec![0usize; self.clbits.len()];
        let mut depth = 0;

        for inst in &self.ops {
            let start = inst
                .qubits
                .iter()
                .map(|q| qubit_level[q.index()])
                .chain(inst.clbits.iter().map(|c| clbit_level[c.index()]))
                .max()
                .unwrap_or(0);
            let level = start + 1;
            for q in &inst.qubits {
                qubit_level[q.index()] = level;
            }
            for c in &inst.clbits {
                clbit_level[c.index()] = level;
            }
            depth = depth.max(level);
        }

        depth
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "circuit {} ({} qubits, {} clbits, depth {})",
            self.name,
            self.num_qubits(),
            self.num_clbits(),
            self.depth()
        )?;
        for (i, inst) in self.ops.iter().enumerate() {
            writeln!(f, "  {i:>3}: {inst}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.num_clbits(), 0);
        assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn test_circuit_with_size() {
        let circuit = Circuit::with_size("test", 3, 2);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
    }

    #[test]
    fn test_add_registers() {
        let mut circuit = Circuit::new("scan");
        let count = circuit.add_qreg("count", 3);
        let target = circuit.add_qreg("target", 4);
        let creg = circuit.add_creg("c", 3);

        assert_eq!(count, vec![QubitId(0), QubitId(1), QubitId(2)]);
        assert_eq!(target[0], QubitId(3));
        assert_eq!(creg.len(), 3);
        assert_eq!(circuit.num_qubits(), 7);
        assert_eq!(circuit.qubits()[4].to_string(), "target[1]");
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap()
            .measure(QubitId(1), ClbitId(1))
            .unwrap();

        assert_eq!(circuit.num_ops(), 4);
        assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
    }

    #[test]
    fn test_append_preserves_order() {
        let mut circuit = Circuit::with_size("order", 2, 0);
        circuit
            .x(QubitId(1))
            .unwrap()
            .h(QubitId(0))
            .unwrap()
            .cp(PI / 4.0, QubitId(0), QubitId(1))
            .unwrap();

        let names: Vec<_> = circuit.instructions().iter().map(Instruction::name).collect();
        assert_eq!(names, ["x", "h", "cp"]);
    }

    #[test]
    fn test_out_of_range_qubit_rejected() {
        let mut circuit = Circuit::with_size("test", 2, 1);
        let err = circuit.h(QubitId(2)).unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitNotFound {
                qubit: QubitId(2),
                num_qubits: 2,
                ..
            }
        ));
        assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn test_out_of_range_clbit_rejected() {
        let mut circuit = Circuit::with_size("test", 2, 1);
        let err = circuit.measure(QubitId(0), ClbitId(1)).unwrap_err();
        assert!(matches!(err, IrError::ClbitNotFound { .. }));
    }

    #[test]
    fn test_duplicate_operand_rejected() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit.cx(QubitId(1), QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_wrong_operand_count_rejected() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        let inst = Instruction::gate(StandardGate::Swap, [QubitId(0)]);
        let err = circuit.append(inst).unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitCountMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_measured_qubit_is_final() {
        let mut circuit = Circuit::with_size("test", 1, 2);
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        assert!(matches!(
            circuit.measure(QubitId(0), ClbitId(1)),
            Err(IrError::QubitAlreadyMeasured { .. })
        ));
        assert!(matches!(
            circuit.h(QubitId(0)),
            Err(IrError::QubitAlreadyMeasured { .. })
        ));
    }

    #[test]
    fn test_append_subcircuit_remaps_qubits() {
        let mut sub = Circuit::with_size("sub", 2, 0);
        sub.h(QubitId(0)).unwrap().cx(QubitId(0), QubitId(1)).unwrap();

        let mut circuit = Circuit::with_size("outer", 4, 0);
        circuit
            .append_subcircuit(&sub, &[QubitId(3), QubitId(1)])
            .unwrap();

        let ops = circuit.instructions();
        assert_eq!(ops[0].qubits, vec![QubitId(3)]);
        assert_eq!(ops[1].qubits, vec![QubitId(3), QubitId(1)]);
    }

    #[test]
    fn test_append_subcircuit_mapping_size_mismatch() {
        let sub = Circuit::with_size("sub", 3, 0);
        let mut circuit = Circuit::with_size("outer", 4, 0);
        let err = circuit
            .append_subcircuit(&sub, &[QubitId(0), QubitId(1)])
            .unwrap_err();
        assert_eq!(
            err,
            IrError::MappingSizeMismatch {
                subcircuit: "sub".into(),
                expected: 3,
                got: 2,
            }
        );
    }

    #[test]
    fn test_append_subcircuit_requires_injective_mapping() {
        let sub = Circuit::with_size("sub", 2, 0);
        let mut circuit = Circuit::with_size("outer", 4, 0);
        let err = circuit
            .append_subcircuit(&sub, &[QubitId(2), QubitId(2)])
            .unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_append_subcircuit_is_all_or_nothing() {
        let mut sub = Circuit::with_size("sub", 1, 0);
        sub.h(QubitId(0)).unwrap().x(QubitId(0)).unwrap();

        let mut circuit = Circuit::with_size("outer", 2, 1);
        circuit.measure(QubitId(1), ClbitId(0)).unwrap();
        assert!(circuit.append_subcircuit(&sub, &[QubitId(1)]).is_err());
        assert_eq!(circuit.num_ops(), 1);
    }

    #[test]
    fn test_count_ops_and_measurements() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .h(QubitId(1))
            .unwrap()
            .measure(QubitId(1), ClbitId(0))
            .unwrap();

        let counts = circuit.count_ops();
        assert_eq!(counts.get("h"), Some(&2));
        assert_eq!(counts.get("measure"), Some(&1));
        let pairs: Vec<_> = circuit.measurements().collect();
        assert_eq!(pairs, vec![(QubitId(1), ClbitId(0))]);
        assert!(!counts.contains_key("swap"));
    }

    #[test]
    fn test_serializes_operation_log() {
        let mut circuit = Circuit::with_size("ser", 2, 0);
        circuit.swap(QubitId(0), QubitId(1)).unwrap();
        let json = serde_json::to_value(&circuit).unwrap();
        assert_eq!(json["name"], "ser");
        assert_eq!(json["ops"].as_array().unwrap().len(), 1);
        assert!(json.get("measured").is_none());
    }

    #[test]
    fn test_display_lists_ops() {
        let mut circuit = Circuit::with_size("ping", 2, 1);
        circuit.h(QubitId(0)).unwrap().measure(QubitId(0), ClbitId(0)).unwrap();
        let text = circuit.to_string();
        assert!(text.starts_with("circuit ping (2 qubits, 1 clbits, depth 2)"));
        assert!(text.contains("h q0"));
        assert!(text.contains("measure q0 -> c0"));
    }
}

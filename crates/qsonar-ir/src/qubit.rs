//! Qubit and classical bit types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a qubit within a circuit's register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl QubitId {
    /// Position of this qubit as a `usize`, for indexing and bit masks.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// Index of a classical bit within a circuit's register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClbitId(pub u32);

impl ClbitId {
    /// Position of this bit as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl From<u32> for ClbitId {
    fn from(id: u32) -> Self {
        ClbitId(id)
    }
}

/// Position of a bit inside a named register.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegisterSlot {
    /// Register name, e.g. `count`.
    pub name: String,
    /// Offset within the register.
    pub offset: u32,
}

/// A declared qubit or classical bit.
///
/// Bits added one at a time carry no register; bits declared through
/// [`Circuit::add_qreg`](crate::Circuit::add_qreg) or
/// [`Circuit::add_creg`](crate::Circuit::add_creg) remember their slot so
/// listings can print `count[1]` instead of `q1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bit<I> {
    pub id: I,
    pub slot: Option<RegisterSlot>,
}

/// A qubit declaration.
pub type Qubit = Bit<QubitId>;

/// A classical bit declaration.
pub type Clbit = Bit<ClbitId>;

impl<I> Bit<I> {
    /// A bit outside any register.
    pub fn new(id: I) -> Self {
        Self { id, slot: None }
    }

    /// A bit at `offset` in register `name`.
    pub fn in_register(id: I, name: impl Into<String>, offset: u32) -> Self {
        Self {
            id,
            slot: Some(RegisterSlot {
                name: name.into(),
                offset,
            }),
        }
    }

    /// Name of the owning register.
    pub fn register(&self) -> Option<&str> {
        self.slot.as_ref().map(|s| s.name.as_str())
    }
}

impl<I: fmt::Display> fmt::Display for Bit<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(slot) => write!(f, "{}[{}]", slot.name, slot.offset),
            None => self.id.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_display() {
        assert_eq!(Qubit::new(QubitId(0)).to_string(), "q0");
        assert_eq!(Clbit::new(ClbitId(2)).to_string(), "c2");

        let target = Qubit::in_register(QubitId(4), "target", 1);
        assert_eq!(target.to_string(), "target[1]");
        assert_eq!(target.register(), Some("target"));
        assert_eq!(Clbit::in_register(ClbitId(1), "count", 1).to_string(), "count[1]");
    }

    #[test]
    fn test_ids_order_by_index() {
        assert!(QubitId(1) < QubitId(2));
        assert_eq!(QubitId(6).index(), 6);
        assert_eq!(ClbitId::from(3).index(), 3);
    }
}

//! Dense deadhead matrix.

use crate::models::Terminal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nested `origin → destination → minutes` representation.
pub type NestedDeadheads = BTreeMap<Terminal, BTreeMap<Terminal, u32>>;

/// Empty repositioning times between terminals, in minutes.
///
/// Stored as a dense n×n grid in row-major order over the terminals named so
/// far. A pair that was never set has no entry: lookups return `None` and
/// callers decide how to fail. There is no default duration.
///
/// Serializes as a nested map, e.g. `{"a": {"a": 0, "b": 15}}`.
///
/// # Examples
///
/// ```
/// use u_blocking::deadhead::DeadheadMatrix;
///
/// let mut dh = DeadheadMatrix::new();
/// dh.insert("a", "b", 15);
/// dh.insert("b", "a", 20);
/// assert_eq!(dh.get(&"a".into(), &"b".into()), Some(15));
/// assert_eq!(dh.get(&"a".into(), &"a".into()), None);
/// assert_eq!(dh.num_terminals(), 2);
/// ```
///
/// Two matrices are equal when they hold the same entries, regardless of
/// the order their terminals were registered in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "NestedDeadheads", into = "NestedDeadheads")]
pub struct DeadheadMatrix {
    index: BTreeMap<Terminal, usize>,
    terminals: Vec<Terminal>,
    data: Vec<Option<u32>>,
}

impl DeadheadMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a matrix from a nested `origin → destination → minutes` map.
    pub fn from_nested(nested: &NestedDeadheads) -> Self {
        let mut dm = Self::new();
        for (from, row) in nested {
            for (to, &minutes) in row {
                dm.insert(from.clone(), to.clone(), minutes);
            }
        }
        dm
    }

    /// Builds a matrix from an explicit n×n grid over the given terminals.
    ///
    /// Returns `None` if the data length doesn't match `n * n` or a terminal
    /// is listed twice.
    pub fn from_data(terminals: Vec<Terminal>, data: Vec<Option<u32>>) -> Option<Self> {
        let n = terminals.len();
        if data.len() != n * n {
            return None;
        }
        let mut index = BTreeMap::new();
        for (i, t) in terminals.iter().enumerate() {
            if index.insert(t.clone(), i).is_some() {
                return None;
            }
        }
        Some(Self {
            index,
            terminals,
            data,
        })
    }

    /// Sets the deadhead time from `from` to `to`, registering new terminals.
    pub fn insert(&mut self, from: impl Into<Terminal>, to: impl Into<Terminal>, minutes: u32) {
        let i = self.register(from.into());
        let j = self.register(to.into());
        let n = self.terminals.len();
        self.data[i * n + j] = Some(minutes);
    }

    /// Returns the deadhead time from `from` to `to`, if known.
    pub fn get(&self, from: &Terminal, to: &Terminal) -> Option<u32> {
        let i = *self.index.get(from)?;
        let j = *self.index.get(to)?;
        self.data[i * self.terminals.len() + j]
    }

    /// Position of `terminal` in [`DeadheadMatrix::terminals`].
    pub fn index_of(&self, terminal: &Terminal) -> Option<usize> {
        self.index.get(terminal).copied()
    }

    /// Returns the deadhead time between terminals given by position.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get_by_index(&self, from: usize, to: usize) -> Option<u32> {
        self.data[from * self.terminals.len() + to]
    }

    /// Returns `true` if the matrix has an entry from `from` to `to`.
    pub fn contains(&self, from: &Terminal, to: &Terminal) -> bool {
        self.get(from, to).is_some()
    }

    /// Number of terminals named in this matrix.
    pub fn num_terminals(&self) -> usize {
        self.terminals.len()
    }

    /// Terminals in registration order.
    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }

    /// Returns `true` if every ordered terminal pair has an entry.
    pub fn is_complete(&self) -> bool {
        self.data.iter().all(Option::is_some)
    }

    /// Returns `true` if every pair present in both directions has equal
    /// times and no pair is present in only one direction.
    pub fn is_symmetric(&self) -> bool {
        let n = self.terminals.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.data[i * n + j] != self.data[j * n + i] {
                    return false;
                }
            }
        }
        true
    }

    /// Converts back to the nested map representation.
    pub fn to_nested(&self) -> NestedDeadheads {
        let n = self.terminals.len();
        let mut nested = NestedDeadheads::new();
        for (i, from) in self.terminals.iter().enumerate() {
            for (j, to) in self.terminals.iter().enumerate() {
                if let Some(minutes) = self.data[i * n + j] {
                    nested
                        .entry(from.clone())
                        .or_default()
                        .insert(to.clone(), minutes);
                }
            }
        }
        nested
    }

    fn register(&mut self, terminal: Terminal) -> usize {
        if let Some(&i) = self.index.get(&terminal) {
            return i;
        }
        let old = self.terminals.len();
        let n = old + 1;
        let mut data = vec![None; n * n];
        for i in 0..old {
            data[i * n..i * n + old].copy_from_slice(&self.data[i * old..(i + 1) * old]);
        }
        self.data = data;
        self.index.insert(terminal.clone(), old);
        self.terminals.push(terminal);
        old
    }
}

impl PartialEq for DeadheadMatrix {
    fn eq(&self, other: &Self) -> bool {
        if self.terminals == other.terminals {
            return self.data == other.data;
        }
        self.to_nested() == other.to_nested()
    }
}

impl Eq for DeadheadMatrix {}

impl From<NestedDeadheads> for DeadheadMatrix {
    fn from(nested: NestedDeadheads) -> Self {
        Self::from_nested(&nested)
    }
}

impl From<DeadheadMatrix> for NestedDeadheads {
    fn from(dm: DeadheadMatrix) -> Self {
        dm.to_nested()
    }
}

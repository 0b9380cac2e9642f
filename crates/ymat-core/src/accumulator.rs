//! Sparse admittance accumulator.
//!
//! Entries live in a dense slot vector with a side index keyed by the
//! canonical [`NodePair`]. A slot whose value collapses to exactly zero is
//! released to a free set and handed out again (lowest index first) before
//! the vector grows:
//!
//! ```text
//! slots:  [ (1,1) | (2,2) | free | (1,2) ]
//! index:  {(1,1)→0, (2,2)→1, (1,2)→3}
//! free:   {2}
//! ```
//!
//! Mutual terms are stored once for `low < high` and read back symmetrically.

use num_complex::Complex64;
use serde::Serialize;
use sprs::{CsMat, TriMat};
use std::collections::{BTreeSet, HashMap};

use crate::admittance::{LineParams, Sign};
use crate::error::{YMatrixError, YMatrixResult};
use crate::node::{NodeId, NodePair};

/// A live (nonzero) cell of the admittance matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Entry {
    pub pair: NodePair,
    pub value: Complex64,
}

/// Incrementally built sparse nodal admittance matrix.
#[derive(Debug, Clone, Default)]
pub struct YMatrixAccumulator {
    slots: Vec<Option<Entry>>,
    index: HashMap<NodePair, usize>,
    free: BTreeSet<usize>,
}

#[inline]
fn is_zero(value: Complex64) -> bool {
    value.re == 0.0 && value.im == 0.0
}

impl YMatrixAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the store for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            free: BTreeSet::new(),
        }
    }

    /// Add a line between `a` and `b` (order does not matter).
    ///
    /// Updates `Y[a,a]`, `Y[b,b]` and the mutual term `Y[a,b]`. The call either
    /// applies all three updates or, on error, none of them.
    pub fn add_line(&mut self, a: NodeId, b: NodeId, params: LineParams) -> YMatrixResult<()> {
        self.apply_package(a, b, &params, Sign::Add)
    }

    /// Remove a previously added line. Exact inverse of [`add_line`](Self::add_line).
    pub fn subtract_line(
        &mut self,
        a: NodeId,
        b: NodeId,
        params: LineParams,
    ) -> YMatrixResult<()> {
        self.apply_package(a, b, &params, Sign::Subtract)
    }

    fn apply_package(
        &mut self,
        a: NodeId,
        b: NodeId,
        params: &LineParams,
        sign: Sign,
    ) -> YMatrixResult<()> {
        let pair = NodePair::new(a, b);
        let y_series = params
            .series_admittance()
            .ok_or(YMatrixError::ZeroImpedance {
                node1: pair.low,
                node2: pair.high,
            })?;
        self.reserve_for(3)?;

        for cell in [
            NodePair::diagonal(pair.low),
            NodePair::diagonal(pair.high),
            pair,
        ] {
            self.merge(cell, contribution(cell, params, y_series, sign));
        }
        Ok(())
    }

    /// Apply one line's contribution to a single cell.
    ///
    /// A diagonal `pair` receives the self term (`G`, `B + C/2`); any other
    /// pair receives the mutual term (`-G`, `-B`).
    pub fn apply_line_contribution(
        &mut self,
        pair: NodePair,
        params: &LineParams,
        sign: Sign,
    ) -> YMatrixResult<()> {
        let y_series = params
            .series_admittance()
            .ok_or(YMatrixError::ZeroImpedance {
                node1: pair.low,
                node2: pair.high,
            })?;
        self.reserve_for(1)?;
        self.merge(pair, contribution(pair, params, y_series, sign));
        Ok(())
    }

    /// Make room for up to `additional` new entries without touching any slot.
    fn reserve_for(&mut self, additional: usize) -> YMatrixResult<()> {
        let growth = additional.saturating_sub(self.free.len());
        let requested = self.slots.len() + growth;
        self.slots
            .try_reserve(growth)
            .map_err(|_| YMatrixError::StorageExhausted { requested })?;
        self.index
            .try_reserve(additional)
            .map_err(|_| YMatrixError::StorageExhausted { requested })?;
        Ok(())
    }

    fn merge(&mut self, pair: NodePair, delta: Complex64) {
        if let Some(&slot) = self.index.get(&pair) {
            let collapsed = match self.slots[slot].as_mut() {
                Some(entry) => {
                    entry.value += delta;
                    is_zero(entry.value)
                }
                None => false,
            };
            if collapsed {
                self.release(slot);
            }
            return;
        }

        if is_zero(delta) {
            return;
        }
        let slot = match self.free.pop_first() {
            Some(slot) => slot,
            None => {
                self.slots.push(None);
                self.slots.len() - 1
            }
        };
        self.slots[slot] = Some(Entry { pair, value: delta });
        self.index.insert(pair, slot);
    }

    fn release(&mut self, slot: usize) {
        if let Some(entry) = self.slots[slot].take() {
            self.index.remove(&entry.pair);
            self.free.insert(slot);
        }
    }

    /// Read `Y[a,b]`. Unrepresented pairs read as zero.
    pub fn get(&self, a: NodeId, b: NodeId) -> Complex64 {
        self.index
            .get(&NodePair::new(a, b))
            .and_then(|&slot| self.slots[slot])
            .map(|entry| entry.value)
            .unwrap_or_default()
    }

    /// Drop every entry and release the storage.
    pub fn reset(&mut self) {
        self.slots = Vec::new();
        self.index = HashMap::new();
        self.free = BTreeSet::new();
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of physical slots, live or free
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of released slots awaiting reuse
    pub fn free_slots(&self) -> usize {
        self.free.len()
    }

    /// Slot currently holding `pair`, if any.
    pub fn slot_of(&self, a: NodeId, b: NodeId) -> Option<usize> {
        self.index.get(&NodePair::new(a, b)).copied()
    }

    /// Live entries in slot order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.slots.iter().flatten()
    }

    /// Live entries in row-major order of their canonical pair.
    pub fn sorted_entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.entries().copied().collect();
        entries.sort_by_key(|entry| entry.pair);
        entries
    }

    /// Highest node index referenced by a live entry.
    pub fn max_node(&self) -> Option<NodeId> {
        self.index.keys().map(|pair| pair.high).max()
    }

    /// Export G and B as symmetric `dimension × dimension` CSR matrices.
    ///
    /// Node `k` maps to row/column `k - 1`; entries beyond `dimension` are
    /// left out.
    pub fn to_csr(&self, dimension: usize) -> (CsMat<f64>, CsMat<f64>) {
        let mut g_triplet = TriMat::new((dimension, dimension));
        let mut b_triplet = TriMat::new((dimension, dimension));

        for entry in self.entries() {
            let (Some(i), Some(j)) = (
                to_index(entry.pair.low, dimension),
                to_index(entry.pair.high, dimension),
            ) else {
                continue;
            };
            if entry.value.re != 0.0 {
                g_triplet.add_triplet(i, j, entry.value.re);
                if i != j {
                    g_triplet.add_triplet(j, i, entry.value.re);
                }
            }
            if entry.value.im != 0.0 {
                b_triplet.add_triplet(i, j, entry.value.im);
                if i != j {
                    b_triplet.add_triplet(j, i, entry.value.im);
                }
            }
        }

        (g_triplet.to_csr(), b_triplet.to_csr())
    }
}

/// Delta for one cell: self term on the diagonal, mutual term elsewhere.
fn contribution(
    pair: NodePair,
    params: &LineParams,
    y_series: Complex64,
    sign: Sign,
) -> Complex64 {
    let delta = if pair.is_diagonal() {
        params.self_term(y_series)
    } else {
        params.mutual_term(y_series)
    };
    sign.apply(delta)
}

fn to_index(node: NodeId, dimension: usize) -> Option<usize> {
    let idx = usize::try_from(node.value()).ok()?.checked_sub(1)?;
    (idx < dimension).then_some(idx)
}

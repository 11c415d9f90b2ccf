//! SymmetricMatrix — one value per unordered node pair.
//!
//! Distances and pheromones are both keyed by unordered pairs, so they share
//! this container. Only the strict upper triangle is stored, row by row, in a
//! flat vector; `(i, j)` and `(j, i)` resolve to the same cell and the
//! diagonal is the implicit zero `T::default()`.

use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// A dense symmetric matrix over `n` nodes with an implicit zero diagonal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixCells<T>")]
pub struct SymmetricMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

/// Unchecked wire form, validated into a [`SymmetricMatrix`] on load.
#[derive(Deserialize)]
struct MatrixCells<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T> TryFrom<MatrixCells<T>> for SymmetricMatrix<T> {
    type Error = String;

    fn try_from(raw: MatrixCells<T>) -> Result<Self, Self::Error> {
        let expected = raw
            .size
            .checked_mul(raw.size.saturating_sub(1))
            .map(|n| n / 2)
            .ok_or_else(|| format!("matrix size {} is too large", raw.size))?;
        if raw.cells.len() != expected {
            return Err(format!(
                "a matrix over {} nodes needs {} cells, found {}",
                raw.size,
                expected,
                raw.cells.len()
            ));
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl<T: Copy + Default> SymmetricMatrix<T> {
    /// A matrix over `size` nodes with every pair set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; pair_count(size)],
        }
    }

    /// Build a matrix by evaluating `f(i, j)` once for every pair `i < j`.
    pub fn from_fn(size: usize, mut f: impl FnMut(NodeId, NodeId) -> T) -> Self {
        let mut cells = Vec::with_capacity(pair_count(size));
        for i in 0..size {
            for j in (i + 1)..size {
                cells.push(f(NodeId(i), NodeId(j)));
            }
        }
        Self { size, cells }
    }

    /// Number of nodes the matrix spans.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored (off-diagonal, unordered) pairs.
    pub fn pair_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `id` is inside the matrix.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.size
    }

    /// Value for the pair, in either order. The diagonal reads as `T::default()`.
    /// `None` when either id is outside the matrix.
    pub fn get(&self, a: NodeId, b: NodeId) -> Option<T> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        if a == b {
            return Some(T::default());
        }
        Some(self.cells[self.offset(a.0, b.0)])
    }

    /// Mutable access to an off-diagonal cell. `None` for the diagonal and
    /// for ids outside the matrix.
    pub fn get_mut(&mut self, a: NodeId, b: NodeId) -> Option<&mut T> {
        if a == b || !self.contains(a) || !self.contains(b) {
            return None;
        }
        let offset = self.offset(a.0, b.0);
        Some(&mut self.cells[offset])
    }

    /// Apply `f` to every stored cell.
    pub fn map_in_place(&mut self, mut f: impl FnMut(T) -> T) {
        for cell in &mut self.cells {
            *cell = f(*cell);
        }
    }

    /// Iterate `(i, j, value)` for every pair with `i < j`.
    pub fn iter_pairs(&self) -> impl Iterator<Item = (NodeId, NodeId, T)> + '_ {
        let size = self.size;
        (0..size)
            .flat_map(move |i| ((i + 1)..size).map(move |j| (i, j)))
            .zip(self.cells.iter())
            .map(|((i, j), value)| (NodeId(i), NodeId(j), *value))
    }

    /// Stored values in row order.
    pub fn values(&self) -> &[T] {
        &self.cells
    }

    fn offset(&self, a: usize, b: usize) -> usize {
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        // Rows before i hold (n-1) + (n-2) + ... + (n-i) cells.
        i * (2 * self.size - i - 1) / 2 + (j - i - 1)
    }
}

fn pair_count(size: usize) -> usize {
    size * size.saturating_sub(1) / 2
}

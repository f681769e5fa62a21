use super::BitMatrix;
use super::module::Direction;
use crate::error::{Error, Result};

/// Square matrix of filled / empty QR modules, quiet zone excluded.
///
/// Indexed by `(row, col)`, both 0-based from the top-left. The side
/// length is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    bits: BitMatrix,
}

impl ModuleGrid {
    /// Create an all-empty grid of `size x size` modules
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidGrid("grid must have at least one module".into()));
        }
        Ok(Self {
            bits: BitMatrix::new(size, size),
        })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Result<Self> {
        let mut grid = Self::new(size)?;
        for row in 0..size {
            for col in 0..size {
                grid.set(row, col, f(row, col));
            }
        }
        Ok(grid)
    }

    /// Build a grid from rows of booleans; every row must be as long as there are rows
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if let Some((idx, len)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != size)
        {
            return Err(Error::InvalidGrid(format!(
                "row {idx} has {len} cells, expected {size}"
            )));
        }
        Self::from_fn(size, |row, col| rows[row].as_ref()[col])
    }

    /// Modules per side
    pub fn size(&self) -> usize {
        self.bits.width()
    }

    /// Whether the module at (row, col) is filled. Outside the grid reads as empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.bits.get(col, row)
    }

    /// Mark a module filled or empty
    pub fn set(&mut self, row: usize, col: usize, filled: bool) {
        self.bits.set(col, row, filled);
    }

    /// Whether the neighbor of (row, col) in `direction` exists and is filled
    pub fn neighbor_filled(&self, row: usize, col: usize, direction: Direction) -> bool {
        let (dr, dc) = direction.offset();
        match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
            (Some(r), Some(c)) => self.is_filled(r, c),
            _ => false,
        }
    }

    /// Number of filled modules
    pub fn filled_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Filled module positions in row-major order
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size();
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.is_filled(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_rejected() {
        assert!(matches!(ModuleGrid::new(0), Err(Error::InvalidGrid(_))));
        let rows: [[bool; 0]; 0] = [];
        assert!(ModuleGrid::from_rows(&rows).is_err());
    }

    #[test]
    fn test_non_square_rows_rejected() {
        let rows = vec![vec![true, false], vec![true]];
        assert!(matches!(
            ModuleGrid::from_rows(&rows),
            Err(Error::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_from_rows_orientation() {
        let rows = [[true, false], [false, false]];
        let grid = ModuleGrid::from_rows(&rows).unwrap();
        assert_eq!(grid.size(), 2);
        assert!(grid.is_filled(0, 0));
        assert!(!grid.is_filled(0, 1));
        assert_eq!(grid.filled_count(), 1);
        assert_eq!(grid.filled().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn test_neighbor_lookup_at_edges() {
        let grid = ModuleGrid::from_fn(3, |_, _| true).unwrap();
        assert!(!grid.neighbor_filled(0, 0, Direction::Top));
        assert!(!grid.neighbor_filled(0, 0, Direction::Left));
        assert!(grid.neighbor_filled(0, 0, Direction::Right));
        assert!(grid.neighbor_filled(0, 0, Direction::Bottom));
        assert!(!grid.neighbor_filled(2, 2, Direction::Right));
        assert!(!grid.neighbor_filled(2, 2, Direction::Bottom));
    }
}

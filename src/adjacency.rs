//! Four-direction connectivity of filled modules
//!
//! Neighbor lookups are index based on the [`ModuleGrid`] itself, so the
//! analysis is independent of pixel geometry.

use crate::models::{CornerRounding, Direction, Module, ModuleGrid, Neighbors};

/// Edge neighbors of the module at (row, col)
pub fn neighbors_of(grid: &ModuleGrid, row: usize, col: usize) -> Neighbors {
    Neighbors {
        top: grid.neighbor_filled(row, col, Direction::Top),
        right: grid.neighbor_filled(row, col, Direction::Right),
        bottom: grid.neighbor_filled(row, col, Direction::Bottom),
        left: grid.neighbor_filled(row, col, Direction::Left),
    }
}

/// Connectivity of every filled module, in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    modules: Vec<Module>,
    /// `row_starts[r]..row_starts[r + 1]` indexes the modules of row `r`
    row_starts: Vec<usize>,
}

/// Rounded / square corner totals over a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CornerStats {
    /// Corners that get a quarter-circle
    pub rounded: usize,
    /// Corners left square
    pub square: usize,
}

impl Adjacency {
    /// Analyze every filled module of `grid`
    pub fn analyze(grid: &ModuleGrid) -> Self {
        let size = grid.size();
        let mut modules = Vec::with_capacity(grid.filled_count());
        let mut row_starts = Vec::with_capacity(size + 1);

        for row in 0..size {
            row_starts.push(modules.len());
            for col in 0..size {
                if grid.is_filled(row, col) {
                    modules.push(Module {
                        row,
                        col,
                        neighbors: neighbors_of(grid, row, col),
                    });
                }
            }
        }
        row_starts.push(modules.len());

        Self {
            modules,
            row_starts,
        }
    }

    /// All filled modules
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Filled modules of one grid row (empty past the last row)
    pub fn row(&self, row: usize) -> &[Module] {
        match (self.row_starts.get(row), self.row_starts.get(row + 1)) {
            (Some(&start), Some(&end)) => &self.modules[start..end],
            _ => &[],
        }
    }

    /// Number of filled modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True when the grid has no filled module
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Count corner decisions across all modules
    pub fn corner_stats(&self) -> CornerStats {
        let mut stats = CornerStats::default();
        for module in &self.modules {
            let decisions = module.corners();
            for corner in crate::models::Corner::ALL {
                match decisions.get(corner) {
                    CornerRounding::Rounded => stats.rounded += 1,
                    CornerRounding::Square => stats.square += 1,
                }
            }
        }
        stats
    }
}

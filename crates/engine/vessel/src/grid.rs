//! World grid seam
//!
//! The hosting world is external; the engine only needs to read a cell
//! and write a material+data pair back. [`MemoryGrid`] is the
//! in-process implementation used by tests and the CLI.

use crate::block::{BlockSample, Material};
use glam::IVec3;
use std::collections::HashMap;

/// Read/write access to the voxel world the engine operates on.
///
/// All calls are synchronous; the engine never holds a sample across a
/// write to the same cell.
pub trait BlockGrid {
    /// Snapshot the cell at `pos`. Unoccupied cells read as air.
    fn sample(&self, pos: IVec3) -> BlockSample;

    /// Overwrite the cell at `pos`.
    fn set(&mut self, pos: IVec3, material: Material, data: u8);

    /// Clear the cell at `pos` back to air.
    fn clear(&mut self, pos: IVec3) {
        self.set(pos, Material::Air, 0);
    }
}

/// Sparse in-memory grid: absent cells are air.
#[derive(Debug, Default, Clone)]
pub struct MemoryGrid {
    cells: HashMap<IVec3, (Material, u8)>,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of non-air cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all non-air cells.
    pub fn iter(&self) -> impl Iterator<Item = BlockSample> + '_ {
        self.cells
            .iter()
            .map(|(&pos, &(material, data))| BlockSample::new(pos, material, data))
    }
}

impl BlockGrid for MemoryGrid {
    fn sample(&self, pos: IVec3) -> BlockSample {
        match self.cells.get(&pos) {
            Some(&(material, data)) => BlockSample::new(pos, material, data),
            None => BlockSample::air(pos),
        }
    }

    fn set(&mut self, pos: IVec3, material: Material, data: u8) {
        if material.is_air() {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, (material, data));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_cells_are_air() {
        let grid = MemoryGrid::new();
        let sample = grid.sample(IVec3::new(3, -7, 12));
        assert!(sample.is_air());
        assert_eq!(sample.pos, IVec3::new(3, -7, 12));
    }

    #[test]
    fn test_set_and_sample() {
        let mut grid = MemoryGrid::new();
        grid.set(IVec3::ZERO, Material::Furnace, 2);

        let sample = grid.sample(IVec3::ZERO);
        assert_eq!(sample.material, Material::Furnace);
        assert_eq!(sample.data, 2);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_clear_removes_cell() {
        let mut grid = MemoryGrid::new();
        grid.set(IVec3::ZERO, Material::Stone, 0);
        grid.clear(IVec3::ZERO);

        assert!(grid.sample(IVec3::ZERO).is_air());
        assert!(grid.is_empty());
    }
}

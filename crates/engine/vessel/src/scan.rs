//! Bounded flood-fill structure scanner
//!
//! Explores outward from a seed coordinate and collects every
//! connected non-air cell, plus a thin hull of air cells face-adjacent
//! to the structure. The hull is what lets a moving structure clear
//! the cells it vacates without leaving stragglers behind; diagonal
//! air is skipped so the fill cannot leak out into open space.

use crate::block::BlockSample;
use crate::grid::BlockGrid;
use glam::IVec3;
use std::collections::HashSet;
use thiserror::Error;

/// Hard ceiling on the member count (air hull included). A scan that
/// exceeds it fails as a whole; no partial structure is returned.
pub const MAX_BLOCKS: usize = 5000;

/// Neighbor topology used when expanding a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// All 26 cells of the 3x3x3 cube around the current cell.
    Moore26,

    /// Faces and edges only (18 cells, no corners). Earlier revisions
    /// scanned with this; kept for structures built against it.
    Edge18,
}

impl Topology {
    /// Neighbor offsets, enumerated row-major (x, y, z) from -1..=1
    /// with the origin skipped. The order matters: positions
    /// {4, 10, 12, 13, 15, 21} of the Moore26 enumeration are the six
    /// face neighbors.
    pub fn offsets(self) -> Vec<IVec3> {
        let mut offsets = Vec::new();
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    if x == 0 && y == 0 && z == 0 {
                        continue;
                    }
                    let nonzero = [x, y, z].iter().filter(|&&c| c != 0).count();
                    match self {
                        Topology::Moore26 => offsets.push(IVec3::new(x, y, z)),
                        Topology::Edge18 => {
                            if nonzero <= 2 {
                                offsets.push(IVec3::new(x, y, z));
                            }
                        }
                    }
                }
            }
        }
        offsets
    }

    /// Neighbor coordinates of `pos` in enumeration order.
    pub fn neighbors(self, pos: IVec3) -> Vec<IVec3> {
        self.offsets().iter().map(|&o| pos + o).collect()
    }
}

/// A direct neighbor shares a face with the cell being expanded.
#[inline]
fn is_direct(offset: IVec3) -> bool {
    offset.abs().x + offset.abs().y + offset.abs().z == 1
}

/// Scan failure.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The member set outgrew the hard limit mid-scan.
    #[error("structure exceeds the {limit} block limit")]
    TooManyBlocks { limit: usize },
}

/// Flood-fill the structure connected to `seed`.
///
/// The seed cell itself is not seeded into the member set; it joins
/// the usual way when a neighbor expansion reaches it. Air cells join
/// only as face neighbors and are never expanded, so each non-air
/// coordinate is expanded at most once and the fill terminates.
pub fn scan<G: BlockGrid>(
    grid: &G,
    seed: IVec3,
    topology: Topology,
) -> Result<Vec<BlockSample>, ScanError> {
    let offsets = topology.offsets();

    let mut members: Vec<BlockSample> = Vec::new();
    let mut index: HashSet<IVec3> = HashSet::new();
    let mut expanded: HashSet<IVec3> = HashSet::new();
    let mut pending: Vec<IVec3> = vec![seed];
    expanded.insert(seed);

    while let Some(cell) = pending.pop() {
        for &offset in &offsets {
            let pos = cell + offset;
            if index.contains(&pos) {
                continue;
            }

            let sample = grid.sample(pos);

            if !sample.is_air() || is_direct(offset) {
                index.insert(pos);
                members.push(sample);
                if members.len() > MAX_BLOCKS {
                    tracing::debug!(seed = ?seed, "scan aborted at {} members", members.len());
                    return Err(ScanError::TooManyBlocks { limit: MAX_BLOCKS });
                }
            }

            if !sample.is_air() && expanded.insert(pos) {
                pending.push(pos);
            }
        }
    }

    tracing::debug!(seed = ?seed, members = members.len(), "scan complete");
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Material;
    use crate::grid::MemoryGrid;

    #[test]
    fn test_offset_counts() {
        assert_eq!(Topology::Moore26.offsets().len(), 26);
        assert_eq!(Topology::Edge18.offsets().len(), 18);
    }

    #[test]
    fn test_moore_direct_positions() {
        // The six face neighbors sit at fixed positions of the
        // row-major enumeration.
        let offsets = Topology::Moore26.offsets();
        let direct: Vec<usize> = offsets
            .iter()
            .enumerate()
            .filter(|(_, &o)| is_direct(o))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(direct, vec![4, 10, 12, 13, 15, 21]);
    }

    #[test]
    fn test_edge18_has_no_corners() {
        for offset in Topology::Edge18.offsets() {
            let nonzero = [offset.x, offset.y, offset.z]
                .iter()
                .filter(|&&c| c != 0)
                .count();
            assert!(nonzero <= 2);
        }
    }

    #[test]
    fn test_single_block_hull() {
        // A lone block: itself plus its six face air cells, plus the
        // seed's own direct air cells reached before the block expands.
        let mut grid = MemoryGrid::new();
        let block = IVec3::new(1, 0, 0);
        grid.set(block, Material::Stone, 0);

        let members = scan(&grid, IVec3::ZERO, Topology::Moore26).unwrap();

        let coords: HashSet<IVec3> = members.iter().map(|m| m.pos).collect();
        assert!(coords.contains(&block));
        // The block's own face hull is present
        for offset in [
            IVec3::X,
            IVec3::NEG_X,
            IVec3::Y,
            IVec3::NEG_Y,
            IVec3::Z,
            IVec3::NEG_Z,
        ] {
            assert!(coords.contains(&(block + offset)), "missing hull at {offset:?}");
        }
        // Exactly one non-air member
        assert_eq!(members.iter().filter(|m| !m.is_air()).count(), 1);
    }

    #[test]
    fn test_empty_seed_yields_direct_hull() {
        // Seed surrounded by nothing at all: the minimal hull of six
        // direct air cells. Intentional, not a bug.
        let grid = MemoryGrid::new();
        let members = scan(&grid, IVec3::ZERO, Topology::Moore26).unwrap();

        assert_eq!(members.len(), 6);
        assert!(members.iter().all(|m| m.is_air()));
        for m in &members {
            assert!(is_direct(m.pos));
        }
    }
}

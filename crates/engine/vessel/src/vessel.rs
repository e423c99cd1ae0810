//! Vessel aggregate: captured member set, heading state and the
//! rigid-body transforms that move it through the grid.

use crate::block::BlockSample;
use crate::grid::BlockGrid;
use crate::heading::{Heading, Turn};
use crate::scan::{scan, ScanError, Topology};
use crate::spin::rotated_data;
use glam::IVec3;
use std::collections::HashSet;

/// Somebody standing on the vessel. When a rotation moves the deck
/// cell directly beneath them, they are carried along: rotated about
/// the same origin with their view yaw adjusted by the same quarter
/// turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occupant {
    /// Cell the occupant stands in
    pub pos: IVec3,

    /// View yaw in degrees
    pub yaw: f32,
}

/// A connected block structure that moves as a unit.
///
/// Members are unique by coordinate and include the thin air hull the
/// scanner collects; the hull is what clears vacated cells during
/// translation. The member set is never empty for a successfully
/// captured vessel.
#[derive(Debug, Clone)]
pub struct Vessel {
    owner: String,
    world: String,
    members: Vec<BlockSample>,
    index: HashSet<IVec3>,
    topology: Topology,
    heading: Heading,
    /// Last horizontal heading, restored when leveling off after a
    /// vertical leg. Always one of the four compass points.
    prior_heading: Heading,
    reversing: bool,
}

impl Vessel {
    /// Capture the structure connected to `seed`.
    ///
    /// Fails with [`ScanError::TooManyBlocks`] if the flood fill
    /// exceeds the member limit; nothing is created in that case.
    pub fn capture<G: BlockGrid>(
        grid: &G,
        seed: IVec3,
        topology: Topology,
        owner: impl Into<String>,
        world: impl Into<String>,
        heading: Heading,
    ) -> Result<Vessel, ScanError> {
        let members = scan(grid, seed, topology)?;
        let owner = owner.into();
        let world = world.into();
        tracing::info!(
            owner = %owner,
            members = members.len(),
            "captured vessel at {seed}"
        );
        Ok(Vessel::assemble(owner, world, heading, topology, members))
    }

    /// Rebuild a vessel from already-known members (persistence path).
    pub(crate) fn assemble(
        owner: String,
        world: String,
        heading: Heading,
        topology: Topology,
        members: Vec<BlockSample>,
    ) -> Vessel {
        let index = members.iter().map(|m| m.pos).collect();
        let prior_heading = if heading.is_vertical() {
            Heading::North
        } else {
            heading
        };
        Vessel {
            owner,
            world,
            members,
            index,
            topology,
            heading,
            prior_heading,
            reversing: false,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn world(&self) -> &str {
        &self.world
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn prior_heading(&self) -> Heading {
        self.prior_heading
    }

    pub fn is_reversing(&self) -> bool {
        self.reversing
    }

    pub fn members(&self) -> &[BlockSample] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Is `pos` one of this vessel's cells (hull included)?
    pub fn contains(&self, pos: IVec3) -> bool {
        self.index.contains(&pos)
    }

    /// Change heading. Entering a vertical leg records the current
    /// compass heading for later restore and disengages reverse.
    pub fn set_heading(&mut self, heading: Heading) {
        if heading.is_vertical() {
            if !self.heading.is_vertical() {
                self.prior_heading = self.heading;
            }
            self.reversing = false;
        }
        self.heading = heading;
    }

    /// Engage or release reverse. Either way the vessel levels off
    /// first: a vertical heading snaps back to the recorded compass
    /// heading. Engaging reverse twice is a no-op.
    pub fn set_reversing(&mut self, reversing: bool) {
        if reversing && self.reversing {
            return;
        }
        if self.heading.is_vertical() {
            self.heading = self.prior_heading;
        }
        self.reversing = reversing;
    }

    /// Discard the member set and re-run the flood fill, reseeding
    /// from the first non-air member (reseeding from a hull cell would
    /// grow the hull around it; any non-air member reproduces the same
    /// set). On failure the previous member set is kept untouched.
    ///
    /// # Panics
    ///
    /// Panics if the vessel has no members; a captured vessel always
    /// has at least its hull.
    pub fn rescan<G: BlockGrid>(&mut self, grid: &G) -> Result<(), ScanError> {
        let seed = self
            .members
            .iter()
            .find(|m| !m.is_air())
            .or_else(|| self.members.first())
            .expect("rescan on a vessel with no members")
            .pos;
        let members = scan(grid, seed, self.topology)?;
        self.members = members;
        self.reindex();
        tracing::debug!(owner = %self.owner, members = self.members.len(), "rescanned vessel");
        Ok(())
    }

    /// One unit step along the current heading.
    ///
    /// Horizontal travel is inverted while reversing; vertical travel
    /// never is. Two passes against the grid: every current cell is
    /// cleared before any new cell is written, so members cannot
    /// clobber a cell a later member is about to vacate. Writes whose
    /// destination already holds identical material+data are skipped.
    /// Cells on the path outside the vessel are overwritten without
    /// collision checks.
    pub fn translate<G: BlockGrid>(&mut self, grid: &mut G) {
        let delta = self.step_delta();

        for member in &self.members {
            grid.clear(member.pos);
        }

        for member in &mut self.members {
            member.pos += delta;
            let current = grid.sample(member.pos);
            if current.material == member.material && current.data == member.data {
                continue;
            }
            grid.set(member.pos, member.material, member.data);
        }

        self.reindex();
    }

    fn step_delta(&self) -> IVec3 {
        let delta = self.heading.delta();
        if self.reversing && !self.heading.is_vertical() {
            -delta
        } else {
            delta
        }
    }

    /// Quarter-turn the vessel about the midpoint of its horizontal
    /// bounding box.
    ///
    /// The origin uses truncating integer division, so even-width
    /// vessels pivot about a point biased toward the minimum corner;
    /// that asymmetry is long-standing behavior and is kept. Every
    /// member is cleared, repositioned by the 2-D rotation and has its
    /// data remapped through the per-family tables, then everything is
    /// written back. The heading advances by the same quarter turn
    /// (vertical headings are left alone).
    ///
    /// If a member cell sat directly beneath `occupant` before the
    /// turn, the occupant is rotated about the same origin and their
    /// yaw adjusted by ±90°.
    ///
    /// # Panics
    ///
    /// Panics if the vessel has no members.
    pub fn rotate<G: BlockGrid>(
        &mut self,
        grid: &mut G,
        turn: Turn,
        occupant: Option<&mut Occupant>,
    ) {
        assert!(!self.members.is_empty(), "rotate on a vessel with no members");

        let (origin_x, origin_z) = self.yaw_origin();

        let carry_occupant = occupant
            .as_deref()
            .is_some_and(|occ| self.index.contains(&(occ.pos + IVec3::NEG_Y)));

        for member in &self.members {
            grid.clear(member.pos);
        }

        for member in &mut self.members {
            let (x, z) = rotate_about(member.pos.x, member.pos.z, origin_x, origin_z, turn);
            member.pos.x = x;
            member.pos.z = z;
            member.data = rotated_data(member.material, member.data, turn);
        }

        for member in &self.members {
            grid.set(member.pos, member.material, member.data);
        }

        self.heading = self.heading.turned(turn);
        self.reindex();

        if carry_occupant {
            if let Some(occ) = occupant {
                let (x, z) = rotate_about(occ.pos.x, occ.pos.z, origin_x, origin_z, turn);
                occ.pos.x = x;
                occ.pos.z = z;
                occ.yaw += match turn {
                    Turn::Clockwise => 90.0,
                    Turn::CounterClockwise => -90.0,
                };
            }
        }

        tracing::debug!(owner = %self.owner, heading = %self.heading, "rotated vessel");
    }

    /// Midpoint of the horizontal bounding box, truncating division.
    fn yaw_origin(&self) -> (i32, i32) {
        let first = self.members[0].pos;
        let (mut min_x, mut max_x) = (first.x, first.x);
        let (mut min_z, mut max_z) = (first.z, first.z);
        for member in &self.members {
            min_x = min_x.min(member.pos.x);
            max_x = max_x.max(member.pos.x);
            min_z = min_z.min(member.pos.z);
            max_z = max_z.max(member.pos.z);
        }
        ((min_x + max_x) / 2, (min_z + max_z) / 2)
    }

    fn reindex(&mut self) {
        self.index.clear();
        self.index.extend(self.members.iter().map(|m| m.pos));
    }
}

/// 2-D quarter rotation of `(x, z)` about `(origin_x, origin_z)`.
/// Clockwise (N→E seen from above): `(dx, dz) → (-dz, dx)`.
fn rotate_about(x: i32, z: i32, origin_x: i32, origin_z: i32, turn: Turn) -> (i32, i32) {
    let dx = x - origin_x;
    let dz = z - origin_z;
    match turn {
        Turn::Clockwise => (origin_x - dz, origin_z + dx),
        Turn::CounterClockwise => (origin_x + dz, origin_z - dx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_about_origin() {
        // North of the origin swings east on a clockwise turn
        assert_eq!(rotate_about(0, -2, 0, 0, Turn::Clockwise), (2, 0));
        assert_eq!(rotate_about(2, 0, 0, 0, Turn::Clockwise), (0, 2));
        assert_eq!(rotate_about(0, -2, 0, 0, Turn::CounterClockwise), (-2, 0));
    }

    #[test]
    fn test_rotate_about_offset_origin() {
        assert_eq!(rotate_about(11, 4, 10, 5, Turn::Clockwise), (11, 6));
        assert_eq!(rotate_about(11, 6, 10, 5, Turn::CounterClockwise), (11, 4));
    }

    #[test]
    fn test_four_quarter_turns_identity() {
        let (mut x, mut z) = (7, -3);
        for _ in 0..4 {
            let (nx, nz) = rotate_about(x, z, 2, 1, Turn::Clockwise);
            x = nx;
            z = nz;
        }
        assert_eq!((x, z), (7, -3));
    }
}

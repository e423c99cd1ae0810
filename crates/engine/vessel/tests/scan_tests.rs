//! Scanner behavior: hull shape, size bound, membership stability

use glam::IVec3;
use std::collections::HashSet;
use vessel::{scan, BlockGrid, Heading, Material, MemoryGrid, ScanError, Topology, Vessel};

/// Straight line of `n` stone blocks along +x starting at the origin.
fn line_grid(n: i32) -> MemoryGrid {
    let mut grid = MemoryGrid::new();
    for x in 0..n {
        grid.set(IVec3::new(x, 0, 0), Material::Stone, 0);
    }
    grid
}

fn coords(members: &[vessel::BlockSample]) -> HashSet<IVec3> {
    members.iter().map(|m| m.pos).collect()
}

#[test]
fn test_six_face_scenario() {
    // Empty seed cell with exactly its six face neighbors occupied
    let mut grid = MemoryGrid::new();
    let faces = [
        (IVec3::NEG_X, Material::Furnace, 4),
        (IVec3::X, Material::Chest, 5),
        (IVec3::NEG_Y, Material::Stone, 0),
        (IVec3::Y, Material::Wool, 14),
        (IVec3::NEG_Z, Material::Ladder, 2),
        (IVec3::Z, Material::Rails, 6),
    ];
    for (pos, material, data) in faces {
        grid.set(pos, material, data);
    }

    let members = scan(&grid, IVec3::ZERO, Topology::Moore26).unwrap();

    // Every face cell is a member carrying its own material
    for (pos, material, data) in faces {
        let member = members.iter().find(|m| m.pos == pos).unwrap();
        assert_eq!(member.material, material);
        assert_eq!(member.data, data);
    }

    // Nothing else non-air, and the fill never leaves the seed's
    // immediate region (face cells plus their own face hull)
    assert_eq!(members.iter().filter(|m| !m.is_air()).count(), 6);
    for m in &members {
        let d = m.pos.abs();
        assert!(d.x + d.y + d.z <= 2, "fill escaped to {}", m.pos);
    }
}

#[test]
fn test_line_member_count() {
    // A line of n blocks collects 5n+2 members: the line itself, four
    // lateral hull cells per block and the two end caps.
    let grid = line_grid(10);
    let members = scan(&grid, IVec3::ZERO, Topology::Moore26).unwrap();
    assert_eq!(members.len(), 52);
    assert_eq!(members.iter().filter(|m| !m.is_air()).count(), 10);
}

#[test]
fn test_scan_within_bound_succeeds() {
    // 999 blocks -> 4997 members, just under the 5000 ceiling
    let grid = line_grid(999);
    let members = scan(&grid, IVec3::ZERO, Topology::Moore26).unwrap();
    assert_eq!(members.len(), 4997);
}

#[test]
fn test_scan_over_bound_fails() {
    // 1000 blocks would need 5002 members; the scan aborts as a whole
    let grid = line_grid(1000);
    let err = scan(&grid, IVec3::ZERO, Topology::Moore26).unwrap_err();
    match err {
        ScanError::TooManyBlocks { limit } => assert_eq!(limit, 5000),
    }
}

#[test]
fn test_membership_stable_across_seeds() {
    // Plus-shaped platform with a mast
    let mut grid = MemoryGrid::new();
    for pos in [
        IVec3::new(0, 0, 0),
        IVec3::new(1, 0, 0),
        IVec3::new(-1, 0, 0),
        IVec3::new(0, 0, 1),
        IVec3::new(0, 0, -1),
        IVec3::new(0, 1, 0),
    ] {
        grid.set(pos, Material::Wood, 0);
    }

    let reference = coords(&scan(&grid, IVec3::ZERO, Topology::Moore26).unwrap());

    // Reseeding from any solid member reproduces the set exactly
    let solid_seeds: Vec<IVec3> = scan(&grid, IVec3::ZERO, Topology::Moore26)
        .unwrap()
        .iter()
        .filter(|m| !m.is_air())
        .map(|m| m.pos)
        .collect();
    for seed in solid_seeds {
        let rescan = coords(&scan(&grid, seed, Topology::Moore26).unwrap());
        assert_eq!(rescan, reference, "reseed from {seed} diverged");
    }
}

#[test]
fn test_vessel_rescan_is_stable() {
    let mut grid = MemoryGrid::new();
    grid.set(IVec3::ZERO, Material::Wood, 0);
    grid.set(IVec3::X, Material::Furnace, 2);

    let mut v = Vessel::capture(
        &grid,
        IVec3::ZERO,
        Topology::Moore26,
        "pilot",
        "world",
        Heading::North,
    )
    .unwrap();
    let before = coords(v.members());

    v.rescan(&grid).unwrap();
    assert_eq!(coords(v.members()), before);
}

#[test]
fn test_failed_rescan_keeps_members() {
    let mut grid = MemoryGrid::new();
    grid.set(IVec3::ZERO, Material::Wood, 0);

    let mut v = Vessel::capture(
        &grid,
        IVec3::ZERO,
        Topology::Moore26,
        "pilot",
        "world",
        Heading::North,
    )
    .unwrap();
    let before = coords(v.members());

    // The structure has since grown past the limit
    for x in 1..1200 {
        grid.set(IVec3::new(x, 0, 0), Material::Stone, 0);
    }

    assert!(v.rescan(&grid).is_err());
    assert_eq!(coords(v.members()), before, "failed rescan must not touch members");
}

#[test]
fn test_edge18_mode_scans() {
    // Diagonal-in-plane contact is connectivity in both modes; the
    // corner-only contact below links in neither.
    let mut grid = MemoryGrid::new();
    grid.set(IVec3::ZERO, Material::Stone, 0);
    grid.set(IVec3::new(1, 0, 1), Material::Stone, 0);
    grid.set(IVec3::new(2, 1, 2), Material::Dirt, 0); // corner of (1,0,1)

    let members = scan(&grid, IVec3::ZERO, Topology::Edge18).unwrap();
    let set = coords(&members);
    assert!(set.contains(&IVec3::new(1, 0, 1)));
    assert!(!set.contains(&IVec3::new(2, 1, 2)));

    let moore = coords(&scan(&grid, IVec3::ZERO, Topology::Moore26).unwrap());
    assert!(moore.contains(&IVec3::new(2, 1, 2)));
}

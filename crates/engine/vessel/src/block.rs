//! Block materials and captured voxel samples

use glam::IVec3;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Block material tag.
///
/// Covers every directional family the rotation tables know about plus
/// a few orientation-insensitive solids. Unknown world materials are
/// outside this engine's scope; the hosting grid adapter maps them to
/// the closest tag (or `Air` for anything passable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Air,

    // Plain solids (no orientation data)
    Stone,
    Dirt,
    Wood,
    Glass,
    Wool,

    // Wall-mounted torches
    Torch,
    RedstoneTorchOff,
    RedstoneTorchOn,

    // Rails
    Rails,
    PoweredRail,
    DetectorRail,
    ActivatorRail,

    // Stairs
    WoodStairs,
    CobblestoneStairs,
    BrickStairs,
    SmoothStairs,
    NetherBrickStairs,
    SandstoneStairs,
    SpruceWoodStairs,
    BirchWoodStairs,
    JungleWoodStairs,
    QuartzStairs,

    // Levers and buttons
    Lever,
    StoneButton,
    WoodButton,

    // Two-part doors
    WoodenDoor,
    IronDoor,

    // Side-mounted, 2-bit facing
    Cocoa,
    TripwireHook,

    // Signs
    SignPost,
    WallSign,

    // Wall-attached / 4-state facing furniture
    Ladder,
    Chest,
    EnderChest,
    TrappedChest,
    Furnace,
    BurningFurnace,
    Hopper,

    // Powered 4-state facing
    Dispenser,
    Dropper,

    // Ground-facing 4-state
    Pumpkin,
    JackOLantern,

    // Axis-aligned logs
    HayBlock,
    Log,

    // Redstone components with delay/mode bits
    RedstoneComparatorOff,
    RedstoneComparatorOn,
    DiodeBlockOff,
    DiodeBlockOn,

    // Hinged
    TrapDoor,

    // Pistons
    PistonBase,
    PistonStickyBase,
    PistonExtension,

    // Giant mushroom caps
    BrownMushroom,
    RedMushroom,

    // Misc directional
    Vine,
    FenceGate,
    Anvil,
    Bed,
    Skull,
}

impl Material {
    /// Every material tag, in declaration order.
    pub const ALL: &'static [Material] = &[
        Material::Air,
        Material::Stone,
        Material::Dirt,
        Material::Wood,
        Material::Glass,
        Material::Wool,
        Material::Torch,
        Material::RedstoneTorchOff,
        Material::RedstoneTorchOn,
        Material::Rails,
        Material::PoweredRail,
        Material::DetectorRail,
        Material::ActivatorRail,
        Material::WoodStairs,
        Material::CobblestoneStairs,
        Material::BrickStairs,
        Material::SmoothStairs,
        Material::NetherBrickStairs,
        Material::SandstoneStairs,
        Material::SpruceWoodStairs,
        Material::BirchWoodStairs,
        Material::JungleWoodStairs,
        Material::QuartzStairs,
        Material::Lever,
        Material::StoneButton,
        Material::WoodButton,
        Material::WoodenDoor,
        Material::IronDoor,
        Material::Cocoa,
        Material::TripwireHook,
        Material::SignPost,
        Material::WallSign,
        Material::Ladder,
        Material::Chest,
        Material::EnderChest,
        Material::TrappedChest,
        Material::Furnace,
        Material::BurningFurnace,
        Material::Hopper,
        Material::Dispenser,
        Material::Dropper,
        Material::Pumpkin,
        Material::JackOLantern,
        Material::HayBlock,
        Material::Log,
        Material::RedstoneComparatorOff,
        Material::RedstoneComparatorOn,
        Material::DiodeBlockOff,
        Material::DiodeBlockOn,
        Material::TrapDoor,
        Material::PistonBase,
        Material::PistonStickyBase,
        Material::PistonExtension,
        Material::BrownMushroom,
        Material::RedMushroom,
        Material::Vine,
        Material::FenceGate,
        Material::Anvil,
        Material::Bed,
        Material::Skull,
    ];

    /// Canonical persisted name (SCREAMING_SNAKE_CASE).
    pub fn as_str(self) -> &'static str {
        match self {
            Material::Air => "AIR",
            Material::Stone => "STONE",
            Material::Dirt => "DIRT",
            Material::Wood => "WOOD",
            Material::Glass => "GLASS",
            Material::Wool => "WOOL",
            Material::Torch => "TORCH",
            Material::RedstoneTorchOff => "REDSTONE_TORCH_OFF",
            Material::RedstoneTorchOn => "REDSTONE_TORCH_ON",
            Material::Rails => "RAILS",
            Material::PoweredRail => "POWERED_RAIL",
            Material::DetectorRail => "DETECTOR_RAIL",
            Material::ActivatorRail => "ACTIVATOR_RAIL",
            Material::WoodStairs => "WOOD_STAIRS",
            Material::CobblestoneStairs => "COBBLESTONE_STAIRS",
            Material::BrickStairs => "BRICK_STAIRS",
            Material::SmoothStairs => "SMOOTH_STAIRS",
            Material::NetherBrickStairs => "NETHER_BRICK_STAIRS",
            Material::SandstoneStairs => "SANDSTONE_STAIRS",
            Material::SpruceWoodStairs => "SPRUCE_WOOD_STAIRS",
            Material::BirchWoodStairs => "BIRCH_WOOD_STAIRS",
            Material::JungleWoodStairs => "JUNGLE_WOOD_STAIRS",
            Material::QuartzStairs => "QUARTZ_STAIRS",
            Material::Lever => "LEVER",
            Material::StoneButton => "STONE_BUTTON",
            Material::WoodButton => "WOOD_BUTTON",
            Material::WoodenDoor => "WOODEN_DOOR",
            Material::IronDoor => "IRON_DOOR",
            Material::Cocoa => "COCOA",
            Material::TripwireHook => "TRIPWIRE_HOOK",
            Material::SignPost => "SIGN_POST",
            Material::WallSign => "WALL_SIGN",
            Material::Ladder => "LADDER",
            Material::Chest => "CHEST",
            Material::EnderChest => "ENDER_CHEST",
            Material::TrappedChest => "TRAPPED_CHEST",
            Material::Furnace => "FURNACE",
            Material::BurningFurnace => "BURNING_FURNACE",
            Material::Hopper => "HOPPER",
            Material::Dispenser => "DISPENSER",
            Material::Dropper => "DROPPER",
            Material::Pumpkin => "PUMPKIN",
            Material::JackOLantern => "JACK_O_LANTERN",
            Material::HayBlock => "HAY_BLOCK",
            Material::Log => "LOG",
            Material::RedstoneComparatorOff => "REDSTONE_COMPARATOR_OFF",
            Material::RedstoneComparatorOn => "REDSTONE_COMPARATOR_ON",
            Material::DiodeBlockOff => "DIODE_BLOCK_OFF",
            Material::DiodeBlockOn => "DIODE_BLOCK_ON",
            Material::TrapDoor => "TRAP_DOOR",
            Material::PistonBase => "PISTON_BASE",
            Material::PistonStickyBase => "PISTON_STICKY_BASE",
            Material::PistonExtension => "PISTON_EXTENSION",
            Material::BrownMushroom => "BROWN_MUSHROOM",
            Material::RedMushroom => "RED_MUSHROOM",
            Material::Vine => "VINE",
            Material::FenceGate => "FENCE_GATE",
            Material::Anvil => "ANVIL",
            Material::Bed => "BED",
            Material::Skull => "SKULL",
        }
    }

    /// Look up a material by its persisted name.
    pub fn from_name(name: &str) -> Option<Material> {
        Material::ALL.iter().copied().find(|m| m.as_str() == name)
    }

    /// Air-equivalent cells terminate the flood fill.
    #[inline]
    pub fn is_air(self) -> bool {
        self == Material::Air
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of one grid cell: position, material and the
/// packed orientation/data byte.
///
/// Equality and hashing consider the position ONLY. Two samples at the
/// same coordinate are the same member regardless of material, which is
/// what the scanner's already-visited check relies on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlockSample {
    /// World position of the cell
    pub pos: IVec3,

    /// Material tag
    pub material: Material,

    /// Packed orientation/data byte (semantics per material family)
    pub data: u8,
}

impl BlockSample {
    pub fn new(pos: IVec3, material: Material, data: u8) -> Self {
        Self {
            pos,
            material,
            data,
        }
    }

    /// An air cell at `pos`.
    pub fn air(pos: IVec3) -> Self {
        Self::new(pos, Material::Air, 0)
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        self.material.is_air()
    }
}

impl PartialEq for BlockSample {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for BlockSample {}

impl Hash for BlockSample {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

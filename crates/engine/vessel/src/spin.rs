//! Orientation remap tables for 90° yaw rotation
//!
//! Each material family carries a [`SpinRule`] describing how its
//! packed data byte changes under a quarter turn. `rotated_data` is
//! total: codes a family does not map pass through unchanged, and the
//! two turn senses are exact inverses for every family (the mushroom
//! stage remap only on its 0..10 value domain, which is the whole
//! domain such blocks use).
//!
//! The tables are written out per family on purpose; do not "simplify"
//! a cycle without checking it against the block's actual facing codes.

use crate::block::Material;
use crate::heading::Turn;

/// Rotation rule descriptor for one material family.
#[derive(Debug, Clone, Copy)]
enum SpinRule {
    /// No orientation data; byte is left alone.
    Fixed,

    /// Fixed permutation of facing codes. `keep` masks bits preserved
    /// across the turn (power/thrown flags); `steps` lists the
    /// clockwise `(from, to)` pairs over the remaining bits, applied in
    /// reverse for counter-clockwise. Codes outside the cycle pass
    /// through.
    Cycle { keep: u8, steps: &'static [(u8, u8)] },

    /// Facing in the low two bits advances +1 mod 4 clockwise, high
    /// bits preserved.
    QuarterRing,

    /// 16-state ring: +4 mod 16 clockwise, +12 counter-clockwise.
    Ring16,

    /// Rotate the low four bits by one position (vine side flags).
    NibbleRoll,

    /// Swap the axis bits (xor `mask`) when the byte lies in
    /// `lo..=hi`; outside that range the byte has no horizontal axis.
    AxisSwap { lo: u8, hi: u8, mask: u8 },

    /// Symmetric single-bit toggle.
    Toggle { mask: u8 },

    /// Growth-stage pseudo-rotation: bytes below `cap` map through
    /// x3 mod 10 clockwise and x7 mod 10 counter-clockwise (modular
    /// inverses on this domain only); bytes at or above `cap` encode a
    /// non-rotatable full-block state.
    CapStages { cap: u8 },

    /// Byte is returned unchanged while `flag` is set (door top halves
    /// carry no orientation); otherwise the inner rule applies.
    SkipFlag {
        flag: u8,
        inner: &'static SpinRule,
    },
}

// Wall torches: codes 1-4, east/west/south/north.
const TORCH_FACING: SpinRule = SpinRule::Cycle {
    keep: 0,
    steps: &[(1, 3), (2, 4), (3, 2), (4, 1)],
};

// Plain rails: 0-5 straight/sloped (cycled like the powered family,
// no flag bits), 6-9 the curve subrange cycling among itself.
const RAIL_SHAPE: SpinRule = SpinRule::Cycle {
    keep: 0,
    steps: &[
        (0, 1),
        (1, 0),
        (2, 5),
        (3, 4),
        (4, 2),
        (5, 3),
        (6, 7),
        (7, 8),
        (8, 9),
        (9, 6),
    ],
};

// Powered/detector/activator rails: low three bits shape, bit 3 power.
const POWERED_RAIL_SHAPE: SpinRule = SpinRule::Cycle {
    keep: 0xF8,
    steps: &[(0, 1), (1, 0), (2, 5), (3, 4), (4, 2), (5, 3)],
};

// Stairs: 0-3 ascending direction, 4-7 the upside-down variants.
const STAIR_FACING: SpinRule = SpinRule::Cycle {
    keep: 0,
    steps: &[
        (0, 2),
        (1, 3),
        (2, 1),
        (3, 0),
        (4, 6),
        (5, 7),
        (6, 5),
        (7, 4),
    ],
};

// Levers and buttons: 0-7 mount position, bit 3 thrown/pressed.
const LEVER_FACING: SpinRule = SpinRule::Cycle {
    keep: 0x8,
    steps: &[
        (0, 7),
        (1, 3),
        (2, 4),
        (3, 2),
        (4, 1),
        (5, 6),
        (6, 5),
        (7, 0),
    ],
};

// Ladders, wall signs, chests, furnaces, hoppers: codes 2-5.
const SIDE_FACING: SpinRule = SpinRule::Cycle {
    keep: 0,
    steps: &[(2, 5), (3, 4), (4, 2), (5, 3)],
};

// Dispensers/droppers: same cycle with bit 3 (powered) preserved.
const POWERED_SIDE_FACING: SpinRule = SpinRule::Cycle {
    keep: 0x8,
    steps: &[(2, 5), (3, 4), (4, 2), (5, 3)],
};

// Pistons: low three bits facing (0/1 vertical, untouched).
const PISTON_FACING: SpinRule = SpinRule::Cycle {
    keep: 0xF8,
    steps: &[(2, 5), (3, 4), (4, 2), (5, 3)],
};

// Pumpkins: 0-3 face direction, 4 faceless.
const PUMPKIN_FACING: SpinRule = SpinRule::Cycle {
    keep: 0,
    steps: &[(0, 1), (1, 2), (2, 3), (3, 0)],
};

// Trapdoors: low two bits hinge side, upper bits open/top flags.
const TRAPDOOR_FACING: SpinRule = SpinRule::Cycle {
    keep: 0xFC,
    steps: &[(0, 3), (1, 2), (2, 0), (3, 1)],
};

// Skulls: floor-mounted 1 untouched, wall codes 2-5.
const SKULL_FACING: SpinRule = SpinRule::Cycle {
    keep: 0,
    steps: &[(2, 5), (3, 4), (4, 2), (5, 3)],
};

// Cocoa, tripwire hooks, repeaters, comparators, fence gates, beds:
// facing in the low two bits, attachment/delay/occupied bits above.
const QUARTER_FACING: SpinRule = SpinRule::QuarterRing;

// Door bottom halves rotate like the quarter-ring family; top halves
// (bit 3) carry no orientation.
const DOOR_FACING: SpinRule = SpinRule::SkipFlag {
    flag: 0x8,
    inner: &SpinRule::QuarterRing,
};

const LOG_AXIS: SpinRule = SpinRule::AxisSwap {
    lo: 4,
    hi: 11,
    mask: 0xC,
};

const MUSHROOM_STAGES: SpinRule = SpinRule::CapStages { cap: 10 };

fn rule(material: Material) -> SpinRule {
    use Material::*;
    match material {
        Torch | RedstoneTorchOff | RedstoneTorchOn => TORCH_FACING,
        Rails => RAIL_SHAPE,
        PoweredRail | DetectorRail | ActivatorRail => POWERED_RAIL_SHAPE,
        WoodStairs | CobblestoneStairs | BrickStairs | SmoothStairs | NetherBrickStairs
        | SandstoneStairs | SpruceWoodStairs | BirchWoodStairs | JungleWoodStairs
        | QuartzStairs => STAIR_FACING,
        Lever | StoneButton | WoodButton => LEVER_FACING,
        WoodenDoor | IronDoor => DOOR_FACING,
        Cocoa | TripwireHook | RedstoneComparatorOff | RedstoneComparatorOn | DiodeBlockOff
        | DiodeBlockOn | FenceGate | Bed => QUARTER_FACING,
        SignPost => SpinRule::Ring16,
        Ladder | WallSign | Chest | EnderChest | TrappedChest | Furnace | BurningFurnace
        | Hopper => SIDE_FACING,
        Dispenser | Dropper => POWERED_SIDE_FACING,
        PistonBase | PistonStickyBase | PistonExtension => PISTON_FACING,
        Pumpkin | JackOLantern => PUMPKIN_FACING,
        HayBlock | Log => LOG_AXIS,
        BrownMushroom | RedMushroom => MUSHROOM_STAGES,
        Vine => SpinRule::NibbleRoll,
        Anvil => SpinRule::Toggle { mask: 0x1 },
        TrapDoor => TRAPDOOR_FACING,
        Skull => SKULL_FACING,
        Air | Stone | Dirt | Wood | Glass | Wool => SpinRule::Fixed,
    }
}

fn apply(rule: SpinRule, data: u8, turn: Turn) -> u8 {
    match rule {
        SpinRule::Fixed => data,

        SpinRule::Cycle { keep, steps } => {
            let low = data & !keep;
            let mapped = match turn {
                Turn::Clockwise => steps.iter().find(|&&(from, _)| from == low).map(|&(_, to)| to),
                Turn::CounterClockwise => {
                    steps.iter().find(|&&(_, to)| to == low).map(|&(from, _)| from)
                }
            };
            match mapped {
                Some(low) => low | (data & keep),
                None => data,
            }
        }

        SpinRule::QuarterRing => {
            let step = match turn {
                Turn::Clockwise => 1,
                Turn::CounterClockwise => 3,
            };
            (data & !0x3) | (data.wrapping_add(step) & 0x3)
        }

        // 256 is a multiple of 16, so wrapping addition agrees with
        // plain mod-16 arithmetic over the whole byte range.
        SpinRule::Ring16 => match turn {
            Turn::Clockwise => data.wrapping_add(4) % 16,
            Turn::CounterClockwise => data.wrapping_add(12) % 16,
        },

        SpinRule::NibbleRoll => match turn {
            Turn::Clockwise => ((data << 1) | (data >> 3)) & 0xF,
            Turn::CounterClockwise => ((data >> 1) | (data << 3)) & 0xF,
        },

        SpinRule::AxisSwap { lo, hi, mask } => {
            if (lo..=hi).contains(&data) {
                data ^ mask
            } else {
                data
            }
        }

        SpinRule::Toggle { mask } => data ^ mask,

        SpinRule::CapStages { cap } => {
            if data >= cap {
                data
            } else {
                match turn {
                    Turn::Clockwise => (data * 3) % 10,
                    Turn::CounterClockwise => (data * 7) % 10,
                }
            }
        }

        SpinRule::SkipFlag { flag, inner } => {
            if data & flag != 0 {
                data
            } else {
                apply(*inner, data, turn)
            }
        }
    }
}

/// New data byte for `material` after a quarter turn.
pub fn rotated_data(material: Material, data: u8, turn: Turn) -> u8 {
    apply(rule(material), data, turn)
}

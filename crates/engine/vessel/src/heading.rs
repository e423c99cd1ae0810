//! Travel headings and quarter turns

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Direction of travel: four compass points plus vertical.
///
/// Axis convention: north = -Z, south = +Z, east = +X, west = -X,
/// up = +Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

/// 90° yaw turn sense. `Clockwise` is the compass sense N→E→S→W as
/// seen from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

impl Turn {
    /// The inverse turn.
    pub fn reversed(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }
}

impl Heading {
    /// Unit step vector.
    #[inline]
    pub fn delta(self) -> IVec3 {
        match self {
            Heading::North => IVec3::NEG_Z,
            Heading::East => IVec3::X,
            Heading::South => IVec3::Z,
            Heading::West => IVec3::NEG_X,
            Heading::Up => IVec3::Y,
            Heading::Down => IVec3::NEG_Y,
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Heading::Up | Heading::Down)
    }

    /// Advance by a quarter turn. Vertical headings are unaffected.
    pub fn turned(self, turn: Turn) -> Heading {
        match (self, turn) {
            (Heading::North, Turn::Clockwise) => Heading::East,
            (Heading::East, Turn::Clockwise) => Heading::South,
            (Heading::South, Turn::Clockwise) => Heading::West,
            (Heading::West, Turn::Clockwise) => Heading::North,
            (Heading::North, Turn::CounterClockwise) => Heading::West,
            (Heading::West, Turn::CounterClockwise) => Heading::South,
            (Heading::South, Turn::CounterClockwise) => Heading::East,
            (Heading::East, Turn::CounterClockwise) => Heading::North,
            (vertical, _) => vertical,
        }
    }

    /// Bucket a view yaw (degrees) into a compass heading.
    ///
    /// Yaw 0 faces south and increases turning right, so ±135..180 is
    /// north, -45..45 south, negative quadrant east, positive west.
    pub fn from_yaw(yaw: f32) -> Heading {
        // Normalize to -180..180
        let yaw = if yaw.abs() > 180.0 {
            (((yaw.abs() + 180.0) % 360.0) - 180.0) * yaw.signum()
        } else {
            yaw
        };

        if yaw.abs() >= 135.0 {
            Heading::North
        } else if yaw.abs() <= 45.0 {
            Heading::South
        } else if yaw < 0.0 {
            Heading::East
        } else {
            Heading::West
        }
    }

    /// Persisted name.
    pub fn as_str(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
            Heading::Up => "UP",
            Heading::Down => "DOWN",
        }
    }

    /// Look up a heading by its persisted name.
    pub fn from_name(name: &str) -> Option<Heading> {
        match name {
            "NORTH" => Some(Heading::North),
            "EAST" => Some(Heading::East),
            "SOUTH" => Some(Heading::South),
            "WEST" => Some(Heading::West),
            "UP" => Some(Heading::Up),
            "DOWN" => Some(Heading::Down),
            _ => None,
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

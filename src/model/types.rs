//! Interfaces the renderer consumes from the simulation.
//!
//! The simulation owns the world and the actions; the renderer only reads
//! them through these traits.

/// A compass bearing, clockwise from north in whole degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassBearing {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassBearing {
    /// All eight bearings in clockwise order starting at north
    pub const ALL: [CompassBearing; 8] = [
        CompassBearing::North,
        CompassBearing::NorthEast,
        CompassBearing::East,
        CompassBearing::SouthEast,
        CompassBearing::South,
        CompassBearing::SouthWest,
        CompassBearing::West,
        CompassBearing::NorthWest,
    ];

    /// Bearing angle in degrees (0, 45, ..., 315)
    pub const fn degrees(self) -> i32 {
        match self {
            CompassBearing::North => 0,
            CompassBearing::NorthEast => 45,
            CompassBearing::East => 90,
            CompassBearing::SouthEast => 135,
            CompassBearing::South => 180,
            CompassBearing::SouthWest => 225,
            CompassBearing::West => 270,
            CompassBearing::NorthWest => 315,
        }
    }

    /// Parse a bearing from degrees. Only the eight compass angles are accepted.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|bearing| bearing.degrees() == degrees)
    }

    /// Grid offset (columns, rows) of one step in this direction. Rows grow southwards.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            CompassBearing::North => (0, -1),
            CompassBearing::NorthEast => (1, -1),
            CompassBearing::East => (1, 0),
            CompassBearing::SouthEast => (1, 1),
            CompassBearing::South => (0, 1),
            CompassBearing::SouthWest => (-1, 1),
            CompassBearing::West => (-1, 0),
            CompassBearing::NorthWest => (-1, -1),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CompassBearing::North => "North",
            CompassBearing::NorthEast => "North-East",
            CompassBearing::East => "East",
            CompassBearing::SouthEast => "South-East",
            CompassBearing::South => "South",
            CompassBearing::SouthWest => "South-West",
            CompassBearing::West => "West",
            CompassBearing::NorthWest => "North-West",
        }
    }
}

/// What kind of command an action is, as far as the command panel cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// A move. `bearing` is `None` when the simulation produced a move
    /// without a usable compass bearing.
    Move { bearing: Option<CompassBearing> },
    Other,
}

/// A command the active actor may perform this tick
pub trait Action {
    /// Button label. Non-move actions are ordered by this string.
    fn description(&self) -> &str;

    fn kind(&self) -> ActionKind;

    fn is_move(&self) -> bool {
        matches!(self.kind(), ActionKind::Move { .. })
    }
}

/// One cell of the world grid
pub trait Location {
    /// Terrain symbol, used to pick the background texture
    fn symbol(&self) -> char;

    /// Human readable description, shown as the tile tooltip
    fn long_description(&self) -> String;
}

/// Anything that can occupy a location
pub trait GridEntity {
    fn symbol(&self) -> &str;
    fn description(&self) -> &str;
}

/// Read-only view of the world grid and of what stands on each cell
pub trait GridModel {
    type Location: Location;
    type Entity: GridEntity;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Location at the given column and row. Callers stay within `width` x `height`.
    fn location_at(&self, col: usize, row: usize) -> &Self::Location;

    /// Occupants of a location, in the manager's iteration order
    fn contents_of(&self, location: &Self::Location) -> Vec<&Self::Entity>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearing_degrees_round_trip() {
        for bearing in CompassBearing::ALL {
            assert_eq!(CompassBearing::from_degrees(bearing.degrees()), Some(bearing));
        }
    }

    #[test]
    fn test_bearing_rejects_non_compass_angles() {
        assert_eq!(CompassBearing::from_degrees(-1), None);
        assert_eq!(CompassBearing::from_degrees(30), None);
        assert_eq!(CompassBearing::from_degrees(360), None);
    }

    #[test]
    fn test_bearing_offsets_point_the_right_way() {
        assert_eq!(CompassBearing::North.offset(), (0, -1));
        assert_eq!(CompassBearing::SouthEast.offset(), (1, 1));
        assert_eq!(CompassBearing::West.offset(), (-1, 0));
    }
}

//! Compass directions and the per-game direction pool.
//!
//! Each of the eight compass labels maps to a unit vector of
//! `(row delta, col delta)` with rows increasing downward:
//!
//! | Label | Vector  |
//! |-------|---------|
//! | N     | (-1, 0) |
//! | S     | ( 1, 0) |
//! | E     | ( 0, 1) |
//! | W     | ( 0,-1) |
//! | NE    | (-1, 1) |
//! | NW    | (-1,-1) |
//! | SE    | ( 1, 1) |
//! | SW    | ( 1,-1) |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

/// One of the eight compass directions.
///
/// Serializes as the compass label (`"N"`, `"NE"`, ...), the same labels
/// [`FromStr`] accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "NW")]
    NorthWest,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "SW")]
    SouthWest,
}

impl Direction {
    /// All eight directions, in the pool's initial order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Unit vector as `(row delta, col delta)`; rows increase downward.
    #[must_use]
    pub const fn vector(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }

    /// Compass label, e.g. `"NE"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for unrecognized compass labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl std::fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid direction: {}", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

/// The shrinking pool of directions still available to Player 2.
///
/// Starts with all eight entries and only loses members (each direction is
/// consumed at most once per game); undo restores a prior pool wholesale.
/// Insertion order is preserved but carries no meaning.
///
/// `SmallVec` keeps the pool inline, so cloning it for a history snapshot
/// never shares storage with the live set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionSet(SmallVec<[Direction; 8]>);

impl DirectionSet {
    /// The full pool of all eight directions.
    #[must_use]
    pub fn full() -> Self {
        Self(SmallVec::from_slice(&Direction::ALL))
    }

    /// An empty pool.
    #[must_use]
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, direction: Direction) -> bool {
        self.0.contains(&direction)
    }

    /// Remove a direction by value.
    ///
    /// Returns true if the direction was present.
    pub fn remove(&mut self, direction: Direction) -> bool {
        if let Some(idx) = self.0.iter().position(|&d| d == direction) {
            self.0.remove(idx);
            true
        } else {
            false
        }
    }

    /// Number of directions remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the pool is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the remaining directions.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.iter().copied()
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::full()
    }
}

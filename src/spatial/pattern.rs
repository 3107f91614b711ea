//! Edge pattern vocabulary and compass directions
//!
//! Patterns are the symbols printed on tile edges. Two touching edges match
//! exactly when their patterns are equal. Directions double as edge indices on
//! a piece and as neighbour offsets on the board.

use std::fmt;

/// Symbol printed on one edge of a tile
///
/// Discriminants are stable and non-zero so that zero can stand for an
/// unconstrained edge when packing constraint keys.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pattern {
    /// Blue star motif
    BlueStar = 1,
    /// Plain edge found on the outer ring of the puzzle
    Border = 2,
    /// Pink circle motif
    PinkCircle = 3,
    /// Pink trident motif
    PinkTrident = 4,
    /// Yellow circle motif
    YellowCircle = 5,
    /// Red and yellow triangle motif
    RedYellowTriangle = 6,
    /// Yellow and green triangle motif
    YellowGreenTriangle = 7,
    /// Red trident motif
    RedTrident = 8,
}

impl Pattern {
    /// Every pattern in code order
    pub const ALL: [Self; 8] = [
        Self::BlueStar,
        Self::Border,
        Self::PinkCircle,
        Self::PinkTrident,
        Self::YellowCircle,
        Self::RedYellowTriangle,
        Self::YellowGreenTriangle,
        Self::RedTrident,
    ];

    /// Numeric code used when packing keys (always non-zero)
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Pattern::code`]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::BlueStar),
            2 => Some(Self::Border),
            3 => Some(Self::PinkCircle),
            4 => Some(Self::PinkTrident),
            5 => Some(Self::YellowCircle),
            6 => Some(Self::RedYellowTriangle),
            7 => Some(Self::YellowGreenTriangle),
            8 => Some(Self::RedTrident),
            _ => None,
        }
    }

    /// Short colour name used in text output
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::BlueStar => "Blue",
            Self::Border => "Border",
            Self::PinkCircle => "Purple",
            Self::PinkTrident => "Yellow",
            Self::YellowCircle => "White",
            Self::RedYellowTriangle => "Pink",
            Self::YellowGreenTriangle => "Green",
            Self::RedTrident => "Red",
        }
    }

    /// Descriptive motif name
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::BlueStar => "BlueStar",
            Self::Border => "Border",
            Self::PinkCircle => "PinkCircle",
            Self::PinkTrident => "PinkTrident",
            Self::YellowCircle => "YellowCircle",
            Self::RedYellowTriangle => "RedYellowTriangle",
            Self::YellowGreenTriangle => "YellowGreenTriangle",
            Self::RedTrident => "RedTrident",
        }
    }

    /// Parse either the long or the short name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pattern| {
            pattern.long_name().eq_ignore_ascii_case(name)
                || pattern.short_name().eq_ignore_ascii_case(name)
        })
    }

    /// Fill colour used by the PNG renderer
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::BlueStar => [40, 90, 200, 255],
            Self::Border => [70, 70, 70, 255],
            Self::PinkCircle => [150, 60, 170, 255],
            Self::PinkTrident => [240, 200, 40, 255],
            Self::YellowCircle => [235, 235, 235, 255],
            Self::RedYellowTriangle => [240, 120, 170, 255],
            Self::YellowGreenTriangle => [90, 180, 70, 255],
            Self::RedTrident => [200, 40, 40, 255],
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Display name of a possibly unconstrained edge
pub const fn restriction_name(restriction: Option<Pattern>) -> &'static str {
    match restriction {
        Some(pattern) => pattern.short_name(),
        None => "--",
    }
}

/// Compass direction of a tile edge or board neighbour
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row 0
    North = 0,
    /// Towards the last column
    East = 1,
    /// Towards the last row
    South = 2,
    /// Towards column 0
    West = 3,
}

impl Direction {
    /// Clockwise order starting at north
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Position in [`Direction::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction at a clockwise position, wrapping modulo four
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// The facing direction; applying it twice is the identity
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Row and column step towards the neighbour in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }

    /// Single-letter label
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        };
        f.write_str(name)
    }
}

//! Shared value types for Divercite positions.
//!
//! These types are the vocabulary of the Game Engine contract: players,
//! piece colors and categories, board locations, neighbor cells and
//! per-player inventories. They are small `Copy` values so engines and the
//! search core can pass them around freely.

use std::fmt;

/// Identifier of a seat at the table. Seat 0 moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// Resource color. Both cities and resources carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl ResourceColor {
    pub const ALL: [ResourceColor; 4] = [
        ResourceColor::Red,
        ResourceColor::Green,
        ResourceColor::Blue,
        ResourceColor::Yellow,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ResourceColor::Red => 0,
            ResourceColor::Green => 1,
            ResourceColor::Blue => 2,
            ResourceColor::Yellow => 3,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            ResourceColor::Red => 'R',
            ResourceColor::Green => 'G',
            ResourceColor::Blue => 'B',
            ResourceColor::Yellow => 'Y',
        }
    }

    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'R' => Some(ResourceColor::Red),
            'G' => Some(ResourceColor::Green),
            'B' => Some(ResourceColor::Blue),
            'Y' => Some(ResourceColor::Yellow),
            _ => None,
        }
    }
}

/// Piece category (color is carried separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceCategory {
    Resource,
    City,
}

impl PieceCategory {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceCategory::Resource => 0,
            PieceCategory::City => 1,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceCategory::Resource => 'R',
            PieceCategory::City => 'C',
        }
    }

    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'R' => Some(PieceCategory::Resource),
            'C' => Some(PieceCategory::City),
            _ => None,
        }
    }
}

/// A piece placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: ResourceColor,
    pub category: PieceCategory,
    pub owner: PlayerId,
}

impl Piece {
    #[inline]
    pub const fn new(color: ResourceColor, category: PieceCategory, owner: PlayerId) -> Self {
        Self {
            color,
            category,
            owner,
        }
    }

    #[inline]
    pub const fn is_city(&self) -> bool {
        matches!(self.category, PieceCategory::City)
    }
}

/// Signed grid coordinate. Neighbors of edge cells may fall off the grid,
/// so rows and columns can be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardLocation {
    pub row: i8,
    pub col: i8,
}

impl BoardLocation {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// One step in `direction`, or `None` past the edge of the coordinate range.
    #[inline]
    pub fn offset(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        Some(Self {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal direction from a cell to one of its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// What a board cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellContent {
    Empty,
    OutOfBounds,
    Occupied(Piece),
}

/// One entry of a neighborhood query. `location` is `None` when the step
/// leaves the coordinate range; `content` is then `OutOfBounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub direction: Direction,
    pub content: CellContent,
    pub location: Option<BoardLocation>,
}

/// Remaining pieces of one player, indexed `[category][color]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Inventory {
    pub counts: [[u8; 4]; 2],
}

impl Inventory {
    pub const fn empty() -> Self {
        Self { counts: [[0; 4]; 2] }
    }

    /// Same count of every color, per category.
    pub const fn uniform(resources_per_color: u8, cities_per_color: u8) -> Self {
        Self {
            counts: [[resources_per_color; 4], [cities_per_color; 4]],
        }
    }

    #[inline]
    pub const fn count(&self, category: PieceCategory, color: ResourceColor) -> u8 {
        self.counts[category.index()][color.index()]
    }

    #[inline]
    pub fn set(&mut self, category: PieceCategory, color: ResourceColor, count: u8) {
        self.counts[category.index()][color.index()] = count;
    }

    /// Removes one piece. Returns `false` (leaving the inventory untouched)
    /// when none is left.
    pub fn take(&mut self, category: PieceCategory, color: ResourceColor) -> bool {
        let slot = &mut self.counts[category.index()][color.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn total(&self) -> u32 {
        self.counts
            .iter()
            .flat_map(|per_color| per_color.iter())
            .map(|&count| u32::from(count))
            .sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

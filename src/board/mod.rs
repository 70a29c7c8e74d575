//! Board representation for Jatsuna

pub mod board;


use serde::{Deserialize, Serialize};

// Re-exports
pub use board::{Board, BoardParseError};

/// Canonical board size (7x7)
pub const BOARD_SIZE: usize = 7;

/// Largest supported board. Positions are stored as `u8`.
pub const MAX_BOARD_SIZE: usize = 19;

/// Stone colors. Exactly three exist; none of them owns another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    /// Orb, written `O`
    Orb,
    /// Gem, written `C`
    Gem,
    /// Stella, written `P`
    Stella,
}

impl Color {
    /// All colors in canonical order
    pub const ALL: [Color; 3] = [Color::Orb, Color::Gem, Color::Stella];

    /// Dense index for per-color tables
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::Orb => 0,
            Color::Gem => 1,
            Color::Stella => 2,
        }
    }

    /// One-letter symbol used in the text board format
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Color::Orb => 'O',
            Color::Gem => 'C',
            Color::Stella => 'P',
        }
    }

    #[inline]
    pub fn from_symbol(symbol: char) -> Option<Color> {
        match symbol {
            'O' => Some(Color::Orb),
            'C' => Some(Color::Gem),
            'P' => Some(Color::Stella),
            _ => None,
        }
    }

    /// The two other colors, in canonical order
    pub fn rivals(self) -> [Color; 2] {
        match self {
            Color::Orb => [Color::Gem, Color::Stella],
            Color::Gem => [Color::Orb, Color::Stella],
            Color::Stella => [Color::Orb, Color::Gem],
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Orb => "Orb",
            Color::Gem => "Gem",
            Color::Stella => "Stella",
        };
        write!(f, "{} ({})", name, self.symbol())
    }
}

/// Content of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Permanent obstacle: never captured, never scored
    Wall,
    Stone(Color),
}

impl Cell {
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Stone(color) => Some(color),
            _ => None,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Wall => '#',
            Cell::Stone(color) => color.symbol(),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Step `steps` times along `(dr, dc)`, or `None` when leaving the board
    #[inline]
    pub fn offset(self, (dr, dc): (i8, i8), steps: i32, size: usize) -> Option<Pos> {
        let r = self.row as i32 + dr as i32 * steps;
        let c = self.col as i32 + dc as i32 * steps;
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Corner of a `size` x `size` board
    #[inline]
    pub fn is_corner(self, size: usize) -> bool {
        let last = size as u8 - 1;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }

    /// Any border cell, corners included
    #[inline]
    pub fn is_edge(self, size: usize) -> bool {
        let last = size as u8 - 1;
        self.row == 0 || self.row == last || self.col == 0 || self.col == last
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order, matching move enumeration
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

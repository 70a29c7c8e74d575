//! Board structure and its text form

use std::fmt;
use std::str::FromStr;

use super::{Cell, Color, Pos, MAX_BOARD_SIZE};

/// Errors from parsing the text board format
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("board text is empty")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("board has {rows} rows but {cols} columns")]
    NotSquare { rows: usize, cols: usize },
    #[error("unknown cell symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
    #[error("board size {0} exceeds {}", MAX_BOARD_SIZE)]
    TooLarge(usize),
}

/// Square game board. Boards are plain values: rule functions take one by
/// reference and return a fresh board, never sharing cells with the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Empty `size` x `size` board
    ///
    /// # Panics
    /// If `size` is zero or above `MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size {} outside 1..={}",
            size,
            MAX_BOARD_SIZE
        );
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Parse the text form (see `FromStr`) from a slice of rows
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        rows.join("\n").parse()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get cell at position
    ///
    /// # Panics
    /// If `pos` lies outside the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        assert!(self.contains(pos), "position {} outside {}x{} board", pos, self.size, self.size);
        self.cells[pos.to_index(self.size)]
    }

    /// Color of the stone at `pos`, if any
    #[inline]
    pub fn color_at(&self, pos: Pos) -> Option<Color> {
        self.get(pos).color()
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place a stone (no capture processing). Use `rules::apply_move` for
    /// game moves.
    ///
    /// # Panics
    /// If `pos` is outside the board or holds a wall.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, color: Color) {
        self.set(pos, Cell::Stone(color));
    }

    /// Place a wall during setup.
    ///
    /// # Panics
    /// If `pos` is outside the board.
    pub fn place_wall(&mut self, pos: Pos) {
        assert!(self.contains(pos), "wall {} outside {}x{} board", pos, self.size, self.size);
        self.cells[pos.to_index(self.size)] = Cell::Wall;
    }

    /// Overwrite a non-wall cell
    #[inline]
    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        let current = self.get(pos);
        assert!(current != Cell::Wall, "walls are immutable: tried to write {:?} at {}", cell, pos);
        self.cells[pos.to_index(self.size)] = cell;
    }

    /// All cells with their positions, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Pos::from_index(idx, size), cell))
    }

    /// Empty cells, row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.iter()
            .filter(|&(_, cell)| cell == Cell::Empty)
            .map(|(pos, _)| pos)
    }

    /// Stones of one color
    pub fn stones(&self, color: Color) -> impl Iterator<Item = Pos> + '_ {
        self.iter()
            .filter(move |&(_, cell)| cell == Cell::Stone(color))
            .map(|(pos, _)| pos)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| matches!(c, Cell::Stone(_))).count()
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    #[inline]
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Wall).count()
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }
}

/// One row per line: `.` empty, `#` wall, `O`/`C`/`P` stones.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Inverse of `Display`. Whitespace inside a row is ignored and blank lines
/// are skipped, so boards can be written as indented literals.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(BoardParseError::Empty);
        };
        let size = first.len();
        if size > MAX_BOARD_SIZE {
            return Err(BoardParseError::TooLarge(size));
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(BoardParseError::RaggedRow {
                    row,
                    found: cells.len(),
                    expected: size,
                });
            }
        }
        if rows.len() != size {
            return Err(BoardParseError::NotSquare {
                rows: rows.len(),
                cols: size,
            });
        }

        let mut board = Board::new(size);
        for (row, cells) in rows.iter().enumerate() {
            for (col, &symbol) in cells.iter().enumerate() {
                let pos = Pos::new(row as u8, col as u8);
                match symbol {
                    '.' => {}
                    '#' => board.place_wall(pos),
                    _ => match Color::from_symbol(symbol) {
                        Some(color) => board.place_stone(pos, color),
                        None => return Err(BoardParseError::UnknownSymbol { symbol, row, col }),
                    },
                }
            }
        }
        Ok(board)
    }
}

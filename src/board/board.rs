//! Board structure with per-cell ownership

use tracing::instrument;

use super::{Cell, Player, Pos};
use crate::error::{BoardError, MoveError};

/// Rectangular game board.
///
/// Cells are stored row by row in one contiguous vector, so a cell at
/// `(x, y)` lives at index `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Largest side length; columns and rows past this cannot be addressed
/// through the signed move API.
pub const MAX_SIDE: usize = i32::MAX as usize;

impl Board {
    /// Create an empty board. Both dimensions must be positive and no
    /// larger than [`MAX_SIDE`].
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let too_large = BoardError::TooLarge { width, height };
        if width > MAX_SIDE || height > MAX_SIDE {
            return Err(too_large);
        }
        let len = width.checked_mul(height).ok_or(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, Cell::Empty);
        Ok(Self { width, height, cells })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resolve signed coordinates into a position on this board
    #[inline]
    pub fn locate(&self, x: i32, y: i32) -> Option<Pos> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| Pos::new(x, y))
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.locate(x, y).is_some()
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(pos.x < self.width && pos.y < self.height);
        pos.y * self.width + pos.x
    }

    /// Get cell at a position known to be on the board
    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Get cell at signed coordinates
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, MoveError> {
        self.locate(x, y)
            .map(|pos| self.cell(pos))
            .ok_or(MoveError::OutOfBounds { x, y })
    }

    /// Claim an empty cell for `player`.
    ///
    /// Nothing but the target cell is touched, and only on success.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, x: i32, y: i32, player: Player) -> Result<Pos, MoveError> {
        let pos = self.locate(x, y).ok_or(MoveError::OutOfBounds { x, y })?;
        let idx = self.index(pos);
        if !self.cells[idx].is_empty() {
            return Err(MoveError::CellOccupied { x, y });
        }
        self.cells[idx] = Cell::Owned(player);
        Ok(pos)
    }

    /// Clear every cell, keeping the dimensions
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of owned cells
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Iterate over every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Pos::new(idx % width, idx / width), cell))
    }
}

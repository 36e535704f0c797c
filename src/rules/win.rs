//! Win detection for five-in-a-row
//!
//! A move wins when one of the four axes through it holds five consecutive
//! cells of the mover. Each axis is scanned in one linear pass with its own
//! run accumulator, and the scan stops at the fifth consecutive cell, so a
//! longer run reports the first five cells met in scan order.
//!
//! Rows and columns are scanned end to end. Diagonals are scanned in two
//! legs: forward from the anchor (inclusive) to the edge, then backward from
//! the cell just behind the anchor to the opposite edge. The legs do not
//! share a run, so a diagonal five that is only completed across the anchor
//! is found from the end of the line it was completed at.

use tracing::{debug, instrument};

use crate::board::{Board, Cell, Player, Pos};

/// Number of consecutive cells needed to win
pub const WIN_LENGTH: usize = 5;

/// Line direction through the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Increasing row and column
    DiagonalUp,
    /// Increasing row, decreasing column
    DiagonalDown,
}

impl Axis {
    /// Evaluation order; the first axis with a win is reported
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalUp,
        Axis::DiagonalDown,
    ];

    /// `(dx, dy)` step along the axis
    #[inline]
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::DiagonalUp => (1, 1),
            Axis::DiagonalDown => (-1, 1),
        }
    }
}

/// Outcome of a win check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinResult {
    NoWin,
    Win {
        axis: Axis,
        run: [Pos; WIN_LENGTH],
    },
}

impl WinResult {
    #[inline]
    pub fn is_win(&self) -> bool {
        matches!(self, WinResult::Win { .. })
    }

    /// Winning cells in scan order
    pub fn run(&self) -> Option<&[Pos; WIN_LENGTH]> {
        match self {
            WinResult::Win { run, .. } => Some(run),
            WinResult::NoWin => None,
        }
    }
}

/// Consecutive cells seen so far on one scan
struct RunTracker {
    cells: [Pos; WIN_LENGTH],
    len: usize,
}

impl RunTracker {
    fn new() -> Self {
        Self {
            cells: [Pos::new(0, 0); WIN_LENGTH],
            len: 0,
        }
    }

    /// Extend the run, returning it once it is long enough
    fn push(&mut self, pos: Pos) -> Option<[Pos; WIN_LENGTH]> {
        self.cells[self.len] = pos;
        self.len += 1;
        (self.len == WIN_LENGTH).then_some(self.cells)
    }

    fn clear(&mut self) {
        self.len = 0;
    }
}

/// Walk `cells` in order and report the first five consecutive `player` cells
fn scan(board: &Board, player: Player, cells: impl IntoIterator<Item = Pos>) -> Option<[Pos; WIN_LENGTH]> {
    let mut run = RunTracker::new();
    for pos in cells {
        if board.cell(pos) == Cell::Owned(player) {
            if let Some(line) = run.push(pos) {
                return Some(line);
            }
        } else {
            run.clear();
        }
    }
    None
}

/// Cells from `start` stepping by `(dx, dy)` until the board edge.
/// Yields nothing when `start` itself is off the board.
fn ray(board: &Board, start: (isize, isize), (dx, dy): (isize, isize)) -> impl Iterator<Item = Pos> {
    let (width, height) = (board.width(), board.height());
    std::iter::successors(Some(start), move |&(x, y)| Some((x + dx, y + dy))).map_while(move |(x, y)| {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < width && y < height).then(|| Pos::new(x, y))
    })
}

fn scan_axis(board: &Board, pos: Pos, player: Player, axis: Axis) -> Option<[Pos; WIN_LENGTH]> {
    let (x, y) = (pos.x as isize, pos.y as isize);
    let (dx, dy) = axis.step();
    match axis {
        Axis::Horizontal => scan(board, player, ray(board, (0, y), (dx, dy))),
        Axis::Vertical => scan(board, player, ray(board, (x, 0), (dx, dy))),
        Axis::DiagonalUp | Axis::DiagonalDown => {
            scan(board, player, ray(board, (x, y), (dx, dy)))
                .or_else(|| scan(board, player, ray(board, (x - dx, y - dy), (-dx, -dy))))
        }
    }
}

/// Check whether the stone `player` just placed at `pos` wins.
///
/// `pos` must hold `player` on `board`.
#[instrument(level = "debug", skip(board), fields(width = board.width(), height = board.height()))]
pub fn check_win(board: &Board, pos: Pos, player: Player) -> WinResult {
    debug_assert_eq!(board.cell(pos), Cell::Owned(player));

    for axis in Axis::ALL {
        if let Some(run) = scan_axis(board, pos, player, axis) {
            debug!(?axis, ?run, "five in a row");
            return WinResult::Win { axis, run };
        }
    }
    WinResult::NoWin
}

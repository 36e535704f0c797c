//! Board rendering for the GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Player, Pos};
use crate::rules::WIN_LENGTH;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area, excluding the margin
    grid_rect: Rect,
    /// Rows in the board last drawn
    rows: usize,
    /// Cell under the pointer on the last frame
    hovered: Option<Pos>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            grid_rect: Rect::NOTHING,
            rows: 0,
            hovered: None,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell coordinates, if any.
    ///
    /// Coordinates are returned unchecked; clicks on the margin map to
    /// cells just outside the board.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_run: Option<&[Pos; WIN_LENGTH]>,
        game_over: bool,
    ) -> Option<(i32, i32)> {
        let available = ui.available_size();
        let (cols, rows) = (board.width() as f32, board.height() as f32);
        self.rows = board.height();

        // Square cells that fit the available space
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / cols)
            .min((available.y - 2.0 * BOARD_MARGIN) / rows)
            .max(4.0);
        let grid_size = Vec2::new(cols * self.cell_size, rows * self.cell_size);

        let (response, painter) =
            ui.allocate_painter(grid_size + Vec2::splat(2.0 * BOARD_MARGIN), Sense::click());
        self.grid_rect = Rect::from_min_size(response.rect.min + Vec2::splat(BOARD_MARGIN), grid_size);

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter, board);
        self.draw_markers(&painter, board);

        if let Some(pos) = last_move {
            painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(run) = winning_run {
            self.draw_victory_line(&painter, run);
        }

        self.hovered = None;
        if game_over {
            return None;
        }

        let pointer = response.hover_pos()?;
        let (x, y) = self.screen_to_cell(pointer);
        if let Some(pos) = board.locate(x, y) {
            self.hovered = Some(pos);
            if board.cell(pos).is_empty() {
                let half = Vec2::splat(self.cell_size * 0.5 - 1.0);
                let center = self.cell_center(pos);
                painter.rect_filled(Rect::from_min_max(center - half, center + half), CornerRadius::ZERO, hover_valid());
            }
        }

        response.clicked().then_some((x, y))
    }

    /// Cell under the pointer, if it is on the board
    pub fn hovered(&self) -> Option<Pos> {
        self.hovered
    }

    /// Forget per-round visual state
    pub fn clear(&mut self) {
        self.hovered = None;
    }

    /// Draw the cell borders
    fn draw_grid(&self, painter: &Painter, board: &Board) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let rect = self.grid_rect;

        for col in 0..=board.width() {
            let x = rect.min.x + col as f32 * self.cell_size;
            painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], stroke);
        }
        for row in 0..=board.height() {
            let y = rect.min.y + row as f32 * self.cell_size;
            painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], stroke);
        }
    }

    /// Draw a ring for Player One and a cross for Player Two
    fn draw_markers(&self, painter: &Painter, board: &Board) {
        let radius = self.cell_size * MARKER_RADIUS_RATIO;
        let width = (self.cell_size * MARKER_STROKE_RATIO).max(1.5);

        for (pos, cell) in board.iter() {
            let center = self.cell_center(pos);
            match cell {
                Cell::Owned(Player::One) => {
                    painter.circle_stroke(center, radius, Stroke::new(width, RING_MARKER));
                }
                Cell::Owned(Player::Two) => {
                    let stroke = Stroke::new(width, CROSS_MARKER);
                    let d = Vec2::splat(radius * std::f32::consts::FRAC_1_SQRT_2);
                    let e = Vec2::new(d.x, -d.y);
                    painter.line_segment([center - d, center + d], stroke);
                    painter.line_segment([center - e, center + e], stroke);
                }
                Cell::Empty => {}
            }
        }
    }

    /// Draw the victory line through the winning run
    fn draw_victory_line(&self, painter: &Painter, run: &[Pos; WIN_LENGTH]) {
        let stroke = Stroke::new(VICTORY_LINE_WIDTH, WIN_HIGHLIGHT);
        for pair in run.windows(2) {
            painter.line_segment([self.cell_center(pair[0]), self.cell_center(pair[1])], stroke);
        }
    }

    /// Convert screen coordinates to (possibly off-board) cell coordinates.
    /// Row 0 is drawn at the bottom.
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> (i32, i32) {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row_from_top = (relative.y / self.cell_size).floor() as i32;
        (col, self.rows as i32 - 1 - row_from_top)
    }

    /// Center of a cell in screen coordinates
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let row_from_top = self.rows - 1 - pos.y;
        Pos2::new(
            self.grid_rect.min.x + (pos.x as f32 + 0.5) * self.cell_size,
            self.grid_rect.min.y + (row_from_top as f32 + 0.5) * self.cell_size,
        )
    }
}

//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Playing area (the grid, without the label margin)
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks are only reported on empty cells while `accepts_input` is set.
    pub fn show<const N: usize>(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board<N>,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        accepts_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / N as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        painter.rect_filled(response.rect, CornerRadius::same(6), BOARD_BG);
        self.grid_rect = response.rect.shrink(BOARD_MARGIN);

        self.draw_grid::<N>(&painter);
        self.draw_coordinates::<N>(&painter);

        for pos in (0..N * N).map(|idx| Pos::from_index(idx, N)) {
            self.draw_mark(&painter, pos, board.get(pos), 255);
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if !accepts_input {
            return None;
        }

        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_board::<N>(p))
            .filter(|&pos| board.is_empty(pos));

        if let Some(pos) = hovered {
            painter.rect_filled(self.cell_rect(pos).shrink(4.0), CornerRadius::same(4), hover_valid());
            self.draw_mark(&painter, pos, Mark::Human, 90);
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw the inner grid lines
    fn draw_grid<const N: usize>(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.grid_rect.min;
        let extent = self.cell_size * N as f32;

        for i in 1..N {
            let offset = i as f32 * self.cell_size;
            painter.line_segment([min + Vec2::new(offset, 0.0), min + Vec2::new(offset, extent)], stroke);
            painter.line_segment([min + Vec2::new(0.0, offset), min + Vec2::new(extent, offset)], stroke);
        }
    }

    /// Draw 1-based row and column labels
    fn draw_coordinates<const N: usize>(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        for i in 0..N {
            let center = (i as f32 + 0.5) * self.cell_size;
            let label = format!("{}", i + 1);

            let top = Pos2::new(self.grid_rect.min.x + center, self.grid_rect.min.y - BOARD_MARGIN * 0.5);
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), LABEL);

            let left = Pos2::new(self.grid_rect.min.x - BOARD_MARGIN * 0.5, self.grid_rect.min.y + center);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), LABEL);
        }
    }

    /// Draw an `X` or `O` with the given opacity
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, alpha: u8) {
        let center = self.board_to_screen(pos);
        let half = self.cell_size * MARK_SIZE_RATIO;

        match mark {
            Mark::Engine => {
                let color = ENGINE_MARK.gamma_multiply(f32::from(alpha) / 255.0);
                let stroke = Stroke::new(MARK_STROKE_WIDTH, color);
                painter.line_segment([center + Vec2::new(-half, -half), center + Vec2::new(half, half)], stroke);
                painter.line_segment([center + Vec2::new(-half, half), center + Vec2::new(half, -half)], stroke);
            }
            Mark::Human => {
                let color = HUMAN_MARK.gamma_multiply(f32::from(alpha) / 255.0);
                painter.circle_stroke(center, half, Stroke::new(MARK_STROKE_WIDTH, color));
            }
            Mark::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).right_bottom() - Vec2::splat(LAST_MOVE_MARKER_RADIUS * 2.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Strike through the completed line
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let (Some(&first), Some(&last)) = (line.first(), line.last()) else {
            return;
        };
        let stroke = Stroke::new(MARK_STROKE_WIDTH + 2.0, WIN_HIGHLIGHT);
        painter.line_segment([self.board_to_screen(first), self.board_to_screen(last)], stroke);
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board<const N: usize>(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Pos::checked(row, col, N)
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.grid_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.grid_rect.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 100.0,
            grid_rect: Rect::from_min_size(Pos2::new(32.0, 32.0), Vec2::splat(300.0)),
        }
    }

    #[test]
    fn test_cell_centers_map_back() {
        let view = view();
        for idx in 0..9 {
            let pos = Pos::from_index(idx, 3);
            assert_eq!(view.screen_to_board::<3>(view.board_to_screen(pos)), Some(pos));
        }
    }

    #[test]
    fn test_outside_grid_is_none() {
        let view = view();
        assert_eq!(view.screen_to_board::<3>(Pos2::new(10.0, 50.0)), None);
        assert_eq!(view.screen_to_board::<3>(Pos2::new(50.0, 340.0)), None);
    }
}

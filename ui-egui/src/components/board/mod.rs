//! Board view: a 3x3 grid of clickable cells

mod interaction;
mod renderer;

pub use interaction::BoardInteraction;
pub use renderer::BoardRenderer;

use crate::ui_config::BoardConfig;
use egui::{Pos2, Rect, Response, Sense, Ui, Vec2};
use tictactoe_core::{Board, Coord, GameError, Symbol, BOARD_SIZE};
use tracing::{debug, warn};

/// Symbol stamped by every cell click
pub const CLICK_SYMBOL: &str = "X";

/// Edge length of the whole board in pixels
pub fn board_pixel_size(config: &BoardConfig) -> f32 {
    let n = BOARD_SIZE as f32;
    n * config.cell_size + (n - 1.0) * config.cell_gap
}

/// Screen rectangle of one cell
pub fn cell_rect(coord: Coord, board_rect: Rect, config: &BoardConfig) -> Rect {
    let stride = config.cell_size + config.cell_gap;
    let min = Pos2::new(
        board_rect.min.x + coord.col as f32 * stride,
        board_rect.min.y + coord.row as f32 * stride,
    );
    Rect::from_min_size(min, Vec2::splat(config.cell_size))
}

/// Convert screen position to board coordinate. Gaps map to `None`.
pub fn pos_to_coord(pos: Pos2, board_rect: Rect, config: &BoardConfig) -> Option<Coord> {
    if !board_rect.contains(pos) {
        return None;
    }

    let stride = config.cell_size + config.cell_gap;
    let rel = pos - board_rect.min;
    let col = (rel.x / stride).floor() as usize;
    let row = (rel.y / stride).floor() as usize;
    let coord = Coord::new(row, col);

    if coord.is_valid() && cell_rect(coord, board_rect, config).contains(pos) {
        Some(coord)
    } else {
        None
    }
}

/// Board view owning its current board snapshot
#[derive(Default)]
pub struct BoardView {
    board: Board,
    interaction: BoardInteraction,
    /// Where the board was laid out in the last frame
    rect: Option<Rect>,
}

impl BoardView {
    /// Mount with an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Current board snapshot
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Screen rectangle of the board from the last frame
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Cell under the pointer during the last frame
    pub fn hovered(&self) -> Option<Coord> {
        self.interaction.get_hover_pos()
    }

    /// Replace the board with the snapshot that has `coord` marked
    pub fn mark_cell(&mut self, coord: Coord, symbol: Symbol) -> Result<(), GameError> {
        match self.board.mark_cell(coord, symbol) {
            Ok(next) => {
                debug!(%coord, occupied = next.occupied_count(), "Cell marked");
                self.board = next;
                Ok(())
            }
            Err(e) => {
                warn!(%coord, "Rejected mark: {}", e);
                Err(e)
            }
        }
    }

    /// Handle a click on a cell
    pub fn handle_click(&mut self, coord: Coord) {
        let result = self.mark_cell(coord, Symbol::from(CLICK_SYMBOL));
        debug_assert!(result.is_ok(), "click resolved to off-board cell {}", coord);
    }

    /// Draw the board and apply any click from this frame
    pub fn show(&mut self, ui: &mut Ui, config: &BoardConfig) -> Response {
        let size = Vec2::splat(board_pixel_size(config));
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        self.rect = Some(rect);

        if let Some(coord) = self.interaction.handle_interaction(&response, rect, config) {
            self.handle_click(coord);
        }

        if ui.is_rect_visible(rect) {
            BoardRenderer::render(
                &ui.painter_at(rect),
                rect,
                &self.board,
                self.interaction.get_hover_pos(),
                config,
            );
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_config::UiConfig;

    fn board_rect(config: &BoardConfig) -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(board_pixel_size(config)))
    }

    #[test]
    fn test_cell_centers_map_to_coords() {
        let config = UiConfig::default().board;
        let rect = board_rect(&config);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row, col);
                let center = cell_rect(coord, rect, &config).center();
                assert_eq!(pos_to_coord(center, rect, &config), Some(coord));
            }
        }
    }

    #[test]
    fn test_gap_and_outside_map_to_none() {
        let config = UiConfig::default().board;
        let rect = board_rect(&config);

        let gap_x = rect.min.x + config.cell_size + config.cell_gap / 2.0;
        let gap = Pos2::new(gap_x, rect.min.y + config.cell_size / 2.0);
        assert_eq!(pos_to_coord(gap, rect, &config), None);

        let outside = rect.max + Vec2::splat(5.0);
        assert_eq!(pos_to_coord(outside, rect, &config), None);
    }

    #[test]
    fn test_click_stamps_fixed_symbol() {
        let mut view = BoardView::new();
        view.handle_click(Coord::new(0, 0));
        view.handle_click(Coord::new(2, 2));

        let symbol = Symbol::from(CLICK_SYMBOL);
        assert_eq!(view.board().get(Coord::new(0, 0)), Some(&symbol));
        assert_eq!(view.board().get(Coord::new(2, 2)), Some(&symbol));
        assert_eq!(view.board().occupied_count(), 2);
    }

    #[test]
    fn test_rejected_mark_keeps_board() {
        let mut view = BoardView::new();
        view.handle_click(Coord::new(1, 1));

        let result = view.mark_cell(Coord::new(4, 0), Symbol::from("X"));
        assert!(matches!(result, Err(GameError::InvalidCoordinate { row: 4, col: 0 })));
        assert_eq!(view.board().occupied_count(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "off-board cell")]
    fn test_off_board_click_is_caught() {
        let mut view = BoardView::new();
        view.handle_click(Coord::new(0, 3));
    }
}

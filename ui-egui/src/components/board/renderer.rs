//! Board rendering logic

use crate::ui_config::BoardConfig;
use egui::{Align2, Color32, FontId, Painter, Rect, Rounding};
use tictactoe_core::{Board, Coord};

/// Board renderer component
pub struct BoardRenderer;

impl BoardRenderer {
    /// Render background, cells and placed symbols
    pub fn render(
        painter: &Painter,
        rect: Rect,
        board: &Board,
        hover: Option<Coord>,
        config: &BoardConfig,
    ) {
        painter.rect_filled(
            rect,
            Rounding::same(config.corner_radius),
            Color32::from(config.background_color),
        );

        for (coord, symbol) in board.cells() {
            let cell = super::cell_rect(coord, rect, config);
            let fill = if hover == Some(coord) {
                config.hover_color
            } else {
                config.cell_color
            };
            painter.rect_filled(
                cell,
                Rounding::same(config.corner_radius),
                Color32::from(fill),
            );

            if let Some(symbol) = symbol {
                painter.text(
                    cell.center(),
                    Align2::CENTER_CENTER,
                    symbol.as_str(),
                    FontId::proportional(config.symbol_font_size),
                    Color32::from(config.symbol_color),
                );
            }
        }
    }
}

//! Board interaction handling

use crate::ui_config::BoardConfig;
use egui::{Rect, Response};
use tictactoe_core::Coord;

/// Tracks the hovered cell and resolves clicks to cells
#[derive(Debug, Default)]
pub struct BoardInteraction {
    /// Current hover position
    hover_pos: Option<Coord>,
}

impl BoardInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update hover state and return the clicked cell, if any
    pub fn handle_interaction(
        &mut self,
        response: &Response,
        rect: Rect,
        config: &BoardConfig,
    ) -> Option<Coord> {
        self.hover_pos = response
            .hover_pos()
            .and_then(|pos| super::pos_to_coord(pos, rect, config));

        if response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|pos| super::pos_to_coord(pos, rect, config));
        }

        None
    }

    /// Get current hover position
    pub fn get_hover_pos(&self) -> Option<Coord> {
        self.hover_pos
    }
}

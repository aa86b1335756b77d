//! Player view: name label or edit field, toggled by an Edit/Save button

use crate::ui_config::PlayerConfig;
use egui::{Color32, FontId, Rect, Response, RichText, Rounding, Stroke, Ui, Vec2};
use tictactoe_core::{GameError, Player, Symbol};
use tracing::debug;

/// Hint shown in an empty name field
pub const NAME_REQUIRED_HINT: &str = "Name required";

/// Player view owning one player's identity and edit mode
pub struct PlayerView {
    player: Player,
    /// Name field rectangle from the last frame, while editing
    field_rect: Option<Rect>,
    /// Edit/Save button rectangle from the last frame
    button_rect: Option<Rect>,
}

impl PlayerView {
    /// Mount with the externally supplied name and symbol
    pub fn new(initial_name: impl Into<String>, symbol: impl Into<Symbol>) -> Self {
        Self {
            player: Player::new(initial_name, symbol),
            field_rect: None,
            button_rect: None,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn field_rect(&self) -> Option<Rect> {
        self.field_rect
    }

    pub fn button_rect(&self) -> Option<Rect> {
        self.button_rect
    }

    /// Flip edit mode. Leaving edit mode does not validate the name.
    pub fn toggle_edit(&mut self) {
        self.player.toggle_edit();
        debug!(
            symbol = %self.player.symbol(),
            editing = self.player.is_editing(),
            "Player edit mode toggled"
        );
    }

    /// Replace the name while editing
    pub fn rename_to(&mut self, text: impl Into<String>) -> Result<(), GameError> {
        self.player.rename_to(text)?;
        debug!(symbol = %self.player.symbol(), name = self.player.name(), "Player renamed");
        Ok(())
    }

    /// Draw the row and apply edits from this frame. Returns the button response.
    pub fn show(&mut self, ui: &mut Ui, config: &PlayerConfig) -> Response {
        ui.horizontal(|ui| {
            let name_font = FontId::proportional(config.name_font_size);

            if let Some(name) = self.player.name_mut() {
                let field = ui.add(
                    egui::TextEdit::singleline(&mut *name)
                        .font(name_font)
                        .hint_text(NAME_REQUIRED_HINT)
                        .desired_width(config.input_width),
                );
                self.field_rect = Some(field.rect);

                // Checked after the field applied this frame's input
                if name.is_empty() {
                    ui.painter().rect_stroke(
                        field.rect.expand(1.0),
                        Rounding::same(2.0),
                        Stroke::new(1.5, Color32::from(config.required_color)),
                    );
                }

                if field.changed() {
                    debug!(name = self.player.name(), "Player name edited");
                }
            } else {
                self.field_rect = None;
                ui.label(
                    RichText::new(self.player.name())
                        .font(name_font)
                        .color(Color32::from(config.name_color)),
                );
            }

            ui.label(
                RichText::new(self.player.symbol().as_str())
                    .size(config.symbol_font_size)
                    .color(Color32::from(config.symbol_color))
                    .strong(),
            );

            let (w, h) = config.button_min_size;
            let button = ui.add(
                egui::Button::new(self.player.button_label()).min_size(Vec2::new(w, h)),
            );
            self.button_rect = Some(button.rect);
            if button.clicked() {
                self.toggle_edit();
            }

            button
        })
        .inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_requires_edit_mode() {
        let mut view = PlayerView::new("Alice", "X");
        assert_eq!(view.rename_to("Bob"), Err(GameError::NotEditing));

        view.toggle_edit();
        view.rename_to("Bob").unwrap();
        view.toggle_edit();
        assert_eq!(view.player().name(), "Bob");
        assert_eq!(view.player().symbol().as_str(), "X");
    }
}

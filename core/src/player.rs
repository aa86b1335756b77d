// SPDX-License-Identifier: MIT OR Apache-2.0

//! Player identity with an editable display name

use crate::{GameError, Symbol};
use serde::{Deserialize, Serialize};

/// A player's display name, fixed symbol, and edit-mode flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    symbol: Symbol,
    editing: bool,
}

impl Player {
    /// Create a player in view mode
    pub fn new(initial_name: impl Into<String>, symbol: impl Into<Symbol>) -> Self {
        Self {
            name: initial_name.into(),
            symbol: symbol.into(),
            editing: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Flip between viewing and editing the name
    pub fn toggle_edit(&mut self) {
        self.editing = !self.editing;
    }

    /// Replace the name verbatim. Only allowed while editing.
    pub fn rename_to(&mut self, text: impl Into<String>) -> Result<(), GameError> {
        if !self.editing {
            return Err(GameError::NotEditing);
        }

        self.name = text.into();
        Ok(())
    }

    /// Live handle on the name for a text field, present only while editing
    pub fn name_mut(&mut self) -> Option<&mut String> {
        if self.editing {
            Some(&mut self.name)
        } else {
            None
        }
    }

    /// Label for the mode toggle button
    pub fn button_label(&self) -> &'static str {
        if self.editing {
            "Save"
        } else {
            "Edit"
        }
    }

    /// An empty name fails the field's required marker
    pub fn is_name_missing(&self) -> bool {
        self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_viewing() {
        let player = Player::new("Alice", "X");
        assert!(!player.is_editing());
        assert_eq!(player.button_label(), "Edit");
    }

    #[test]
    fn test_name_mut_only_while_editing() {
        let mut player = Player::new("Alice", "X");
        assert!(player.name_mut().is_none());

        player.toggle_edit();
        if let Some(name) = player.name_mut() {
            name.push_str(" Smith");
        }
        assert_eq!(player.name(), "Alice Smith");
        assert_eq!(player.button_label(), "Save");
    }

    #[test]
    fn test_blank_name_is_missing() {
        let mut player = Player::new("Alice", "X");
        player.toggle_edit();
        player.rename_to("").unwrap();
        assert!(player.is_name_missing());
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

use tictactoe_core::{GameError, Player, Symbol};

#[test]
fn toggle_edit_is_its_own_inverse() {
    let mut player = Player::new("Alice", "X");
    let original = player.is_editing();

    player.toggle_edit();
    assert_ne!(player.is_editing(), original);

    player.toggle_edit();
    assert_eq!(player.is_editing(), original);
}

#[test]
fn rename_outside_edit_mode_is_rejected() {
    let mut player = Player::new("Alice", "X");

    assert_eq!(player.rename_to("Bob"), Err(GameError::NotEditing));
    assert_eq!(player.name(), "Alice");
}

#[test]
fn rename_round_trip_keeps_symbol() {
    let mut player = Player::new("Alice", "X");

    player.toggle_edit();
    player.rename_to("Bob").expect("rename while editing");
    player.toggle_edit();

    assert_eq!(player.name(), "Bob");
    assert_eq!(player.symbol(), &Symbol::from("X"));
    assert!(!player.is_editing());
}

#[test]
fn rename_is_verbatim() {
    let mut player = Player::new("Alice", "O");
    player.toggle_edit();

    let long_name = format!("  {}  ", "z".repeat(500));
    player.rename_to(long_name.clone()).unwrap();
    assert_eq!(player.name(), long_name);
}

#[test]
fn save_does_not_require_a_name() {
    let mut player = Player::new("Alice", "X");
    player.toggle_edit();
    player.rename_to("").unwrap();
    assert!(player.is_name_missing());

    // Leaving edit mode is never blocked
    player.toggle_edit();
    assert!(!player.is_editing());
    assert_eq!(player.name(), "");
}

#[test]
fn button_label_follows_mode() {
    let mut player = Player::new("Alice", "X");
    assert_eq!(player.button_label(), "Edit");
    player.toggle_edit();
    assert_eq!(player.button_label(), "Save");
}

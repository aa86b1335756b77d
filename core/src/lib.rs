// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tic-Tac-Toe Core - Board and Player State
//!
//! This crate holds the UI-free state behind the two views:
//! - the fixed 3x3 board and its copy-on-mark snapshots
//! - player identity with a name that can only change in edit mode

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod player;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use board::{Board, BOARD_SIZE};
pub use player::Player;

/// A short display token placed into a cell (e.g. "X")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any display token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token as text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Symbol {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Board coordinate addressing one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, top to bottom
    pub row: usize,
    /// Column index, left to right
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if coordinate addresses a cell on the board
    pub fn is_valid(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors raised by board and player operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the 3x3 board
    #[error("Invalid coordinate ({row}, {col})")]
    InvalidCoordinate { row: usize, col: usize },

    /// The player's name can only change while editing
    #[error("Player is not in edit mode")]
    NotEditing,
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application shell mounting the player views and the board view

use crate::components::{BoardView, PlayerView};
use crate::ui_config::UiConfig;
use eframe::egui::{self, Color32, RichText};

/// Top-level app. The views it mounts never exchange data.
pub struct App {
    config: UiConfig,
    players: Vec<PlayerView>,
    board: BoardView,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        let players = config
            .players
            .iter()
            .map(|seed| PlayerView::new(seed.initial_name.clone(), seed.symbol.as_str()))
            .collect();

        tracing::info!(players = config.players.len(), "Mounting views");

        Self {
            config,
            players,
            board: BoardView::new(),
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn players(&self) -> &[PlayerView] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [PlayerView] {
        &mut self.players
    }

    pub fn board(&self) -> &BoardView {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut BoardView {
        &mut self.board
    }

    /// Draw one frame
    pub fn show(&mut self, ctx: &egui::Context) {
        ctx.set_visuals(egui::Visuals::dark());

        let frame = egui::Frame::none()
            .fill(Color32::from(self.config.window.background_color))
            .inner_margin(self.config.window.padding);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(&self.config.window.title).size(28.0));
                ui.add_space(12.0);

                for (index, view) in self.players.iter_mut().enumerate() {
                    ui.push_id(index, |ui| {
                        view.show(ui, &self.config.player);
                    });
                }

                ui.add_space(16.0);
                self.board.show(ui, &self.config.board);
            });
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

//! Main application for the GUI

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::debug;

use crate::board::Player;
use crate::session::{GameSession, MoveOutcome, ResetEvent};

use super::board_view::BoardView;
use super::theme::*;

/// Five-in-a-row desktop front-end
pub struct GomokuApp {
    session: GameSession,
    resets: Receiver<ResetEvent>,
    board_view: BoardView,
    reset_delay: Duration,
    /// When the finished round is cleared automatically
    reset_at: Option<Instant>,
    message: Option<String>,
}

impl GomokuApp {
    /// Wrap a session; finished rounds are reset after `reset_delay`
    pub fn new(mut session: GameSession, reset_delay: Duration) -> Self {
        let resets = session.subscribe_resets();
        Self {
            session,
            resets,
            board_view: BoardView::default(),
            reset_delay,
            reset_at: None,
            message: None,
        }
    }

    /// Drop everything drawn for the previous round
    fn clear_round_visuals(&mut self, event: ResetEvent) {
        debug!(round = event.round, "clearing round visuals");
        self.board_view.clear();
        self.reset_at = None;
        self.message = None;
    }

    fn submit(&mut self, x: i32, y: i32) {
        match self.session.submit_move(x, y) {
            MoveOutcome::Placed(_) => self.message = None,
            MoveOutcome::PlacedAndWon(..) => {
                self.message = None;
                self.reset_at = Some(Instant::now() + self.reset_delay);
            }
            MoveOutcome::Rejected(err) => self.message = Some(err.to_string()),
        }
    }

    fn marker_label(player: Player) -> (&'static str, egui::Color32) {
        match player {
            Player::One => ("O", RING_MARKER),
            Player::Two => ("X", CROSS_MARKER),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Round (N)").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let board = self.session.board();
                    ui.label(format!("{} x {}", board.width(), board.height()));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("FIVE IN A ROW").size(20.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_round_card(ui);

                if let Some(winner) = self.session.winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.session.current_turn();
            let (symbol, color) = Self::marker_label(player);

            ui.horizontal(|ui| {
                ui.label(RichText::new(symbol).size(32.0).strong().color(color));
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(player.to_string()).size(18.0).strong().color(TEXT_PRIMARY));
                    let (status, status_color) = if self.session.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", STATUS_OK)
                    };
                    ui.label(RichText::new(status).size(12.0).color(status_color));
                });
            });
        });
    }

    fn render_round_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ROUND").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("#{}  Move #{}", self.session.round().wrapping_add(1), self.session.move_count()))
                    .size(14.0)
                    .color(TEXT_PRIMARY),
            );
            if let Some(pos) = self.board_view.hovered() {
                ui.label(RichText::new(format!("Cell {pos}")).size(11.0).color(TEXT_SECONDARY));
            }
            if self.session.board().is_full() && !self.session.is_over() {
                ui.label(RichText::new("Board full, start a new round").size(11.0).color(STATUS_WARNING));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Player) {
        let (symbol, color) = Self::marker_label(winner);
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(symbol).size(28.0).strong().color(color));
                        ui.label(RichText::new(format!("{winner} wins!")).size(16.0).strong().color(TEXT_PRIMARY));
                    });

                    if let Some(at) = self.reset_at {
                        let left = at.saturating_duration_since(Instant::now());
                        ui.label(
                            RichText::new(format!("New round in {:.0}s", left.as_secs_f32().ceil()))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                    }

                    ui.add_space(8.0);
                    if ui.button("New Round").clicked() {
                        self.session.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(4.0);
            let clicked = ui
                .vertical_centered(|ui| {
                    self.board_view.show(
                        ui,
                        self.session.board(),
                        self.session.last_move(),
                        self.session.winning_run(),
                        self.session.is_over(),
                    )
                })
                .inner;

            if let Some((x, y)) = clicked {
                self.submit(x, y);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.session.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        if let Some(at) = self.reset_at {
            let now = Instant::now();
            if now >= at {
                self.session.reset();
            } else {
                ctx.request_repaint_after((at - now).min(Duration::from_millis(250)));
            }
        }

        while let Ok(event) = self.resets.try_recv() {
            self.clear_round_visuals(event);
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

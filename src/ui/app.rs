//! Main application for the Reversi GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::config::{MAX_DEPTH, MIN_DEPTH};
use crate::game::{Action, Outcome, Status};
use crate::{GameConfig, Player, SeatControl};

use super::board_view::BoardView;
use super::session::Session;
use super::theme::*;

/// Main Reversi application
pub struct ReversiApp {
    session: Session,
    board_view: BoardView,
    /// Settings edited in the side panel, applied on change
    pending_config: GameConfig,
    show_debug: bool,
}

impl ReversiApp {
    /// Create a new app with the given seat configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            session: Session::new(config),
            board_view: BoardView::default(),
            pending_config: config,
            show_debug: false,
        }
    }

    fn start_new_game(&mut self, config: GameConfig) {
        self.pending_config = config;
        self.session.new_game(config);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let depth = self.pending_config.depth;
                    if ui.button("New Game (You: Black)").clicked() {
                        self.start_new_game(GameConfig::new(SeatControl::Human, SeatControl::Agent, depth));
                        ui.close_menu();
                    }
                    if ui.button("New Game (You: White)").clicked() {
                        self.start_new_game(GameConfig::new(SeatControl::Agent, SeatControl::Human, depth));
                        ui.close_menu();
                    }
                    if ui.button("New Game (Two players)").clicked() {
                        self.start_new_game(GameConfig::new(SeatControl::Human, SeatControl::Human, depth));
                        ui.close_menu();
                    }
                    if ui.button("New Game (Engine vs engine)").clicked() {
                        self.start_new_game(GameConfig::agents(depth));
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                    if ui.button("Redo").clicked() {
                        self.session.redo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.session.game.config();
                    ui.label(format!(
                        "Black: {} | White: {} | Depth {}",
                        seat_label(config.black),
                        seat_label(config.white),
                        config.depth
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and controls
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(12.0);
                    self.render_title_card(ui);
                    ui.add_space(12.0);

                    self.render_turn_card(ui);
                    ui.add_space(10.0);

                    self.render_score_card(ui);
                    ui.add_space(10.0);

                    self.render_actions_card(ui);
                    ui.add_space(10.0);

                    self.render_settings_card(ui);

                    if self.show_debug {
                        ui.add_space(10.0);
                        self.render_debug_card(ui);
                    }

                    if let Status::Ended(outcome) = self.session.game.status() {
                        ui.add_space(10.0);
                        self.render_game_over_card(ui, outcome);
                    }

                    if let Some(msg) = self.session.message.clone() {
                        ui.add_space(10.0);
                        self.render_message_card(ui, &msg);
                    }

                    ui.add_space(10.0);
                    self.render_history_card(ui);
                });
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("REVERSI").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let game = &self.session.game;

        Self::card_frame().show(ui, |ui| {
            let is_black = game.to_move() == Player::Black;
            let (stone_char, color_name, accent) = if is_black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black { TEXT_PRIMARY } else { BLACK_STONE };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.session.is_ai_thinking() {
                        let secs = self.session.ai_thinking_elapsed().unwrap_or_default().as_secs_f32();
                        (format!("AI thinking... {secs:.1}s"), STATUS_BUSY)
                    } else {
                        (game.turn_message(), STATUS_GOOD)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        let (black, white) = self.session.game.score();

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STONES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for (symbol, name, count, other) in [("●", "Black", black, white), ("○", "White", white, black)] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(symbol).size(18.0).color(TEXT_PRIMARY));
                    ui.label(RichText::new(name).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let text = RichText::new(format!("{count}")).size(16.0).strong();
                        let text = if count > other { text.color(WIN_HIGHLIGHT) } else { text.color(TEXT_PRIMARY) };
                        ui.label(text);
                    });
                });
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                let buttons: [(&str, fn(&mut Session)); 4] = [
                    ("↩ Undo", Session::undo),
                    ("↪ Redo", Session::redo),
                    ("💡 Hint", Session::request_suggestion),
                    ("🔄 New", Session::reset),
                ];

                for (label, action) in buttons {
                    btn_frame.show(ui, |ui| {
                        let label = egui::Label::new(RichText::new(label).size(12.0).color(TEXT_PRIMARY))
                            .sense(egui::Sense::click());
                        if ui.add(label).clicked() {
                            action(&mut self.session);
                        }
                    });
                }
            });

            ui.add_space(8.0);
            let history = self.session.game.history();
            ui.label(
                RichText::new(format!("Ply {} of {}", history.cursor(), history.len() - 1))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SETTINGS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let mut config = self.pending_config;

            egui::Grid::new("seat_settings").num_columns(3).show(ui, |ui| {
                ui.label(RichText::new("Black").color(TEXT_SECONDARY));
                ui.radio_value(&mut config.black, SeatControl::Human, "Human");
                ui.radio_value(&mut config.black, SeatControl::Agent, "AI");
                ui.end_row();

                ui.label(RichText::new("White").color(TEXT_SECONDARY));
                ui.radio_value(&mut config.white, SeatControl::Human, "Human");
                ui.radio_value(&mut config.white, SeatControl::Agent, "AI");
                ui.end_row();
            });

            ui.add_space(6.0);
            ui.add(egui::Slider::new(&mut config.depth, MIN_DEPTH..=MAX_DEPTH).text("AI depth"));

            if config != self.pending_config && self.session.reconfigure(config) {
                self.pending_config = config;
            }
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &self.session.last_ai_result {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("Depth {}", result.depth)).size(11.0).strong().color(STATUS_GOOD));
                        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                let best = result.best_move.map_or_else(|| "pass".to_string(), |pos| pos.to_string());
                ui.add_space(4.0);
                ui.label(RichText::new(format!("→ {best}")).size(12.0).strong().color(WIN_HIGHLIGHT));
            } else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
            }

            if let Some(time) = self.session.ai_thinking_time {
                ui.label(RichText::new(format!("Last AI: {:.3}s", time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_history_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            egui::Grid::new("move_table").num_columns(3).striped(true).show(ui, |ui| {
                for row in self.session.game.move_table() {
                    ui.label(RichText::new(format!("{}.", row.index)).size(11.0).color(TEXT_MUTED));
                    ui.label(RichText::new(row.mover.name()).size(11.0).color(TEXT_SECONDARY));
                    let action = match row.action {
                        Action::Place(pos) => pos.to_string(),
                        Action::Pass => "pass".to_string(),
                        Action::Start => String::new(),
                    };
                    let suffix = if row.by_agent { " (AI)" } else { "" };
                    ui.label(RichText::new(format!("{action}{suffix}")).size(11.0).color(TEXT_PRIMARY));
                    ui.end_row();
                }
            });
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let (title, accent) = match outcome {
            Outcome::Winner(Player::Black) => ("BLACK WINS", egui::Color32::from_rgb(70, 70, 75)),
            Outcome::Winner(Player::White) => ("WHITE WINS", egui::Color32::from_rgb(220, 220, 225)),
            Outcome::Draw => ("DRAW", TEXT_SECONDARY),
        };
        let (black, white) = self.session.game.score();

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(title).size(18.0).strong().color(accent));
                    ui.label(RichText::new(format!("{black} - {white}")).size(14.0).color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(RichText::new("🔄 New Game").size(14.0).strong().color(TEXT_PRIMARY))
                                .sense(egui::Sense::click());
                            if ui.add(label).clicked() {
                                self.session.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let accept_input = self.session.game.is_human_turn() && !self.session.is_ai_thinking();
            let clicked = self.board_view.show(
                ui,
                &self.session.game,
                self.session.suggestion,
                self.session.flip_animation.as_ref(),
                accept_input,
            );

            if let Some(pos) = clicked {
                self.session.try_place_stone(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::H) {
                self.session.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }
            if i.key_pressed(egui::Key::R) {
                self.session.redo();
            }
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

fn seat_label(seat: SeatControl) -> &'static str {
    match seat {
        SeatControl::Human => "Human",
        SeatControl::Agent => "AI",
    }
}

impl eframe::App for ReversiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();

        if self.session.flip_animation.as_ref().is_some_and(|a| a.is_complete()) {
            self.session.flip_animation = None;
        }

        if self.session.game.is_agent_turn() && !self.session.is_ai_thinking() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Request repaint if animation is playing or AI is thinking
        if self.session.is_ai_thinking() || self.session.flip_animation.is_some() {
            ctx.request_repaint();
        }
    }
}

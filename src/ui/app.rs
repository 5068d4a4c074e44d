//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::Mark;
use crate::engine::DEFAULT_MAX_DEPTH;
use crate::rules::GameStatus;

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Supported board sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSize {
    Three,
    Four,
}

impl BoardSize {
    fn label(self) -> &'static str {
        match self {
            BoardSize::Three => "3x3",
            BoardSize::Four => "4x4",
        }
    }
}

/// Game in progress, one variant per board size
enum Session {
    Three(GameState<3>),
    Four(GameState<4>),
}

impl Session {
    fn new(size: BoardSize, first: Mark, depth: u8) -> Self {
        match size {
            BoardSize::Three => Session::Three(GameState::new(first, depth)),
            BoardSize::Four => Session::Four(GameState::new(first, depth)),
        }
    }

    fn size(&self) -> BoardSize {
        match self {
            Session::Three(_) => BoardSize::Three,
            Session::Four(_) => BoardSize::Four,
        }
    }

    fn undo(&mut self) {
        match self {
            Session::Three(state) => state.undo(),
            Session::Four(state) => state.undo(),
        }
    }

    /// Engine to move or searching
    fn is_engine_busy(&self) -> bool {
        match self {
            Session::Three(state) => state.is_ai_thinking() || state.game.is_engine_turn(),
            Session::Four(state) => state.is_ai_thinking() || state.game.is_engine_turn(),
        }
    }

    /// Collect a finished search and start the next one if needed
    fn tick(&mut self) {
        match self {
            Session::Three(state) => Self::tick_state(state),
            Session::Four(state) => Self::tick_state(state),
        }
    }

    fn tick_state<const N: usize>(state: &mut GameState<N>) {
        state.check_ai_result();
        state.start_ai_thinking();
    }
}

/// Options picked from the menu for the next game
struct Settings {
    size: BoardSize,
    engine_first: bool,
    depth: u8,
    show_debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: BoardSize::Three,
            engine_first: false,
            depth: DEFAULT_MAX_DEPTH,
            show_debug: true,
        }
    }
}

impl Settings {
    fn first(&self) -> Mark {
        if self.engine_first {
            Mark::Engine
        } else {
            Mark::Human
        }
    }
}

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    session: Session,
    settings: Settings,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            session: Session::new(settings.size, settings.first(), settings.depth),
            settings,
            board_view: BoardView::default(),
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self) {
        self.session = Session::new(self.settings.size, self.settings.first(), self.settings.depth);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for size in [BoardSize::Three, BoardSize::Four] {
                        if ui.button(format!("New {} game", size.label())).clicked() {
                            self.settings.size = size;
                            self.new_game();
                            ui.close_menu();
                        }
                    }
                    ui.checkbox(&mut self.settings.engine_first, "Engine moves first");
                    ui.add(egui::Slider::new(&mut self.settings.depth, 1..=9).text("Search depth"));
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.settings.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let first = if self.settings.engine_first { "engine" } else { "you" };
                    ui.label(format!("{} - next game: {} first", self.session.size().label(), first));
                });
            });
        });
    }

    /// Render the side panel and the board for the current session
    fn render_session(&mut self, ctx: &Context) {
        let show_debug = self.settings.show_debug;
        let board_view = &mut self.board_view;
        let new_game = match &mut self.session {
            Session::Three(state) => show_state(ctx, state, board_view, show_debug),
            Session::Four(state) => show_state(ctx, state, board_view, show_debug),
        };
        if new_game {
            self.new_game();
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.settings.show_debug = !self.settings.show_debug;
        }
        if undo {
            self.session.undo();
        }
        if new_game {
            self.new_game();
        }
    }
}

/// Draw panels for one board size. Returns true when a new game was requested.
fn show_state<const N: usize>(
    ctx: &Context,
    state: &mut GameState<N>,
    board_view: &mut BoardView,
    show_debug: bool,
) -> bool {
    let mut new_game = false;

    SidePanel::right("info_panel")
        .min_width(240.0)
        .max_width(280.0)
        .frame(Frame::new().fill(PANEL_BG))
        .show(ctx, |ui| {
            ui.add_space(12.0);
            render_title_card(ui, N);
            ui.add_space(12.0);
            render_turn_card(ui, state);
            ui.add_space(10.0);
            new_game |= render_actions_card(ui, state);

            if show_debug {
                ui.add_space(10.0);
                render_debug_card(ui, state);
            }

            if let Some(msg) = &state.message {
                ui.add_space(10.0);
                render_message_card(ui, msg);
            }
        });

    CentralPanel::default().show(ctx, |ui| {
        let winning_line = state.winning_line();
        let clicked = board_view.show(
            ui,
            state.game.board(),
            state.game.last_move(),
            winning_line.as_ref().map(|line| line.as_slice()),
            state.accepts_input(),
        );

        if let Some(pos) = clicked {
            if let Err(err) = state.try_place(pos) {
                state.message = Some(err.to_string());
            }
        }
    });

    new_game
}

fn card_frame() -> Frame {
    Frame::new()
        .fill(CARD_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(12.0)
}

fn render_title_card(ui: &mut egui::Ui, size: usize) {
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
    });
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new(format!("{0}x{0} board, {0} in a row", size)).size(11.0).color(TEXT_MUTED));
    });
}

fn render_turn_card<const N: usize>(ui: &mut egui::Ui, state: &GameState<N>) {
    card_frame().show(ui, |ui| {
        let (headline, detail, color) = match state.status() {
            GameStatus::EngineWins => ("Engine wins", "X completed a line", STATUS_LOSS),
            GameStatus::HumanWins => ("You win", "O completed a line", WIN_HIGHLIGHT),
            GameStatus::Draw => ("Draw", "No empty cell left", TEXT_SECONDARY),
            GameStatus::InProgress if state.is_ai_thinking() => ("Engine", "Thinking...", STATUS_BUSY),
            GameStatus::InProgress if state.game.is_engine_turn() => ("Engine", "About to move", STATUS_BUSY),
            GameStatus::InProgress => ("Your turn", "Click an empty cell", STATUS_OK),
        };

        ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
        ui.label(RichText::new(detail).size(12.0).color(color));
        ui.add_space(4.0);
        ui.label(RichText::new("You: O   Engine: X").size(10.0).color(TEXT_MUTED));
    });
}

fn render_actions_card<const N: usize>(ui: &mut egui::Ui, state: &mut GameState<N>) -> bool {
    let mut new_game = false;

    card_frame().show(ui, |ui| {
        ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                let label = egui::Label::new(RichText::new("Undo (U)").size(12.0).color(TEXT_PRIMARY));
                if ui.add(label.sense(egui::Sense::click())).clicked() {
                    state.undo();
                }
            });

            ui.add_space(4.0);

            btn_frame.show(ui, |ui| {
                let label = egui::Label::new(RichText::new("New Game (N)").size(12.0).color(TEXT_PRIMARY));
                if ui.add(label.sense(egui::Sense::click())).clicked() {
                    new_game = true;
                }
            });
        });

        ui.add_space(8.0);
        ui.label(
            RichText::new(format!("Move #{}", state.game.history().len()))
                .size(11.0)
                .color(TEXT_SECONDARY),
        );
    });

    new_game
}

fn render_debug_card<const N: usize>(ui: &mut egui::Ui, state: &GameState<N>) {
    Frame::new()
        .fill(DEBUG_CARD_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(RichText::new("ENGINE DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Depth {}", state.game.engine().max_depth()))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );

            if let Some(elapsed) = state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("Searching {:.2}s", elapsed.as_secs_f32()))
                        .size(12.0)
                        .color(STATUS_BUSY),
                );
            }

            let Some(result) = &state.last_ai_result else {
                ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(RichText::new(format!("Score: {}", result.score)).size(11.0).strong().color(STATUS_OK));
            ui.label(
                RichText::new(format!("{} nodes, {} cutoffs", result.nodes, result.cutoffs))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!("{:.3}ms", result.elapsed.as_secs_f64() * 1000.0))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("-> row {}, col {}", pos.row + 1, pos.col + 1))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
        });
}

fn render_message_card(ui: &mut egui::Ui, msg: &str) {
    Frame::new()
        .fill(MESSAGE_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
        });
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.session.tick();

        self.render_menu_bar(ctx);
        self.render_session(ctx);

        if self.session.is_engine_busy() {
            ctx.request_repaint();
        }
    }
}

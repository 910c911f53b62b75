//! Board rendering for the Reversi GUI

use crate::{Cell, GameState, Player, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::session::FlipAnimation;
use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked legal square, if any.
    ///
    /// Clicks are only reported when `accept_input` is set.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        game: &GameState,
        suggestion: Option<Pos>,
        flash: Option<&FlipAnimation>,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_FRAME);
        painter.rect_filled(self.play_area(), CornerRadius::same(0), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, game);

        if let Some(animation) = flash {
            self.draw_flip_flash(&painter, animation);
        }

        if let Some(pos) = game.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        let legal = game.legal_moves();
        if accept_input {
            for &pos in &legal {
                painter.circle_filled(
                    self.cell_center(pos),
                    self.cell_size * LEGAL_MARKER_RADIUS_RATIO,
                    legal_marker(),
                );
            }
        }

        if let Some(pos) = suggestion {
            self.draw_suggestion(&painter, pos, game.to_move());
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if accept_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    if legal.contains(&board_pos) {
                        self.draw_hover_preview(&painter, board_pos, game.to_move());

                        if response.clicked() {
                            clicked_pos = Some(board_pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    fn play_area(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        )
    }

    /// Draw the 9 lines in each direction that separate the 8x8 squares
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let area = self.play_area();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment(
                [Pos2::new(area.min.x + offset, area.min.y), Pos2::new(area.min.x + offset, area.max.y)],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [Pos2::new(area.min.x, area.min.y + offset), Pos2::new(area.max.x, area.min.y + offset)],
                stroke,
            );
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        let area = self.play_area();
        for (x, y) in STAR_POINTS {
            let center = area.min + Vec2::new(x as f32, y as f32) * self.cell_size;
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (A-H across, 1-8 down)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let half = BOARD_MARGIN * 0.5;

        for i in 0..BOARD_SIZE {
            let center = self.cell_center(Pos::new(i as u8, i as u8));

            let letter = (b'A' + i as u8) as char;
            for y in [self.board_rect.min.y + half, self.board_rect.max.y - half] {
                painter.text(Pos2::new(center.x, y), egui::Align2::CENTER_CENTER, letter, font.clone(), COORD_TEXT);
            }

            let number = format!("{}", i + 1);
            for x in [self.board_rect.min.x + half, self.board_rect.max.x - half] {
                painter.text(Pos2::new(x, center.y), egui::Align2::CENTER_CENTER, &number, font.clone(), COORD_TEXT);
            }
        }
    }

    fn draw_stones(&self, painter: &Painter, game: &GameState) {
        for (pos, cell) in game.board().iter() {
            match cell {
                Cell::Black => self.draw_stone(painter, pos, Player::Black),
                Cell::White => self.draw_stone(painter, pos, Player::White),
                Cell::Empty => {}
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match player {
            Player::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Player::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Fading ring around the stones flipped by the latest move
    fn draw_flip_flash(&self, painter: &Painter, animation: &FlipAnimation) {
        let alpha = ((1.0 - animation.progress()) * 255.0) as u8;
        let color = Color32::from_rgba_unmultiplied(FLIP_FLASH.r(), FLIP_FLASH.g(), FLIP_FLASH.b(), alpha);
        let radius = self.cell_size * STONE_RADIUS_RATIO + 2.0;

        for &pos in animation.cells() {
            painter.circle_stroke(self.cell_center(pos), radius, Stroke::new(3.0, color));
        }
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Player) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let (fill, text) = match turn {
            Player::Black => (hover_black(), WHITE_STONE),
            Player::White => (hover_white(), BLACK_STONE),
        };

        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius, Stroke::new(2.0, WIN_HIGHLIGHT));
        painter.text(center, egui::Align2::CENTER_CENTER, "?", egui::FontId::proportional(18.0), text);
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player) {
        let color = match turn {
            Player::Black => hover_black(),
            Player::White => hover_white(),
        };
        painter.circle_filled(self.cell_center(pos), self.cell_size * STONE_RADIUS_RATIO, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.play_area().min;
        let x = (relative.x / self.cell_size).floor() as i32;
        let y = (relative.y / self.cell_size).floor() as i32;

        Pos::is_valid(x, y).then(|| Pos::new(x as u8, y as u8))
    }

    /// Center of a square in screen coordinates
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let area = self.play_area();
        Pos2::new(
            area.min.x + (pos.x as f32 + 0.5) * self.cell_size,
            area.min.y + (pos.y as f32 + 0.5) * self.cell_size,
        )
    }
}

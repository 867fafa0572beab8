use ratatui::style::Color;

use crate::config::{
    FINAL_SCORE_TEXT_SIZE, GAME_OVER_TEXT, GAME_OVER_TEXT_SIZE, PALETTE, PANEL_HEIGHT,
    PANEL_WIDTH, RESTART_TEXT, RESTART_TEXT_SIZE, SCORE_TEXT_SIZE, UNIT_SIZE,
};
use crate::game::GameState;

/// 2D drawing context the presenter paints onto.
///
/// Coordinates are logical canvas units with the origin at the top-left and
/// y growing downward.
pub trait Surface {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Fills the ellipse inscribed in the given rectangle.
    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Draws `text` with its left edge at `x` and its baseline at `baseline`.
    fn draw_text(&mut self, text: &str, x: i32, baseline: i32, size: i32, color: Color);

    /// Width `text` would occupy at `size`, in canvas units.
    fn text_width(&self, text: &str, size: i32) -> i32;
}

/// Renders one frame from immutable state.
pub fn render<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    if state.is_running() {
        render_board(surface, state);
    } else {
        render_game_over(surface, state.score);
    }
}

/// The "Score: N" label shown in both screens.
#[must_use]
pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

fn render_board<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    let food = state.food.position;
    surface.fill_oval(food.x, food.y, UNIT_SIZE, UNIT_SIZE, PALETTE.food);

    for (index, segment) in state.snake.segments().enumerate() {
        let color = if index == 0 {
            PALETTE.snake_head
        } else {
            PALETTE.snake_body
        };
        surface.fill_rect(segment.x, segment.y, UNIT_SIZE, UNIT_SIZE, color);
    }

    draw_centered(
        surface,
        &score_label(state.score),
        SCORE_TEXT_SIZE,
        SCORE_TEXT_SIZE,
        PALETTE.text,
    );
}

fn render_game_over<S: Surface + ?Sized>(surface: &mut S, score: u32) {
    let middle = PANEL_HEIGHT / 2;

    draw_centered(
        surface,
        GAME_OVER_TEXT,
        middle,
        GAME_OVER_TEXT_SIZE,
        PALETTE.game_over,
    );
    draw_centered(
        surface,
        &score_label(score),
        middle + 50,
        FINAL_SCORE_TEXT_SIZE,
        PALETTE.text,
    );
    draw_centered(
        surface,
        RESTART_TEXT,
        middle + 100,
        RESTART_TEXT_SIZE,
        PALETTE.text,
    );
}

fn draw_centered<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    baseline: i32,
    size: i32,
    color: Color,
) {
    let x = (PANEL_WIDTH - surface.text_width(text, size)) / 2;
    surface.draw_text(text, x, baseline, size, color);
}

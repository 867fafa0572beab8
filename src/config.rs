use std::time::Duration;

use ratatui::style::Color;

/// Logical canvas width in drawing units.
pub const PANEL_WIDTH: i32 = 600;

/// Logical canvas height in drawing units.
pub const PANEL_HEIGHT: i32 = 600;

/// Side length of one grid cell in drawing units.
pub const UNIT_SIZE: i32 = 25;

/// Number of cell columns on the board.
pub const GRID_COLUMNS: i32 = PANEL_WIDTH / UNIT_SIZE;

/// Number of cell rows on the board.
pub const GRID_ROWS: i32 = PANEL_HEIGHT / UNIT_SIZE;

/// Upper bound on snake segments; segment storage is reserved to this size up front.
pub const MAX_SEGMENTS: usize = (PANEL_WIDTH * PANEL_HEIGHT / UNIT_SIZE) as usize;

/// Fixed simulation period.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Segment count of a freshly reset snake.
pub const INITIAL_BODY_PARTS: usize = 3;

// Head coordinate of a freshly reset snake.
pub const START_HEAD_X: i32 = 100;
pub const START_HEAD_Y: i32 = 100;

/// Fixed palette used by the presenter.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub food: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub text: Color,
    pub game_over: Color,
}

pub const PALETTE: Palette = Palette {
    background: Color::Black,
    food: Color::Red,
    snake_head: Color::Green,
    snake_body: Color::Rgb(45, 180, 0),
    text: Color::White,
    game_over: Color::Red,
};

// Text sizes in drawing units. The score line's size is also its baseline.
pub const SCORE_TEXT_SIZE: i32 = 20;
pub const GAME_OVER_TEXT_SIZE: i32 = 75;
pub const FINAL_SCORE_TEXT_SIZE: i32 = 30;
pub const RESTART_TEXT_SIZE: i32 = 25;

pub const GAME_OVER_TEXT: &str = "Game Over";
pub const RESTART_TEXT: &str = "Press SPACE to Restart";

/// Title of the frame drawn around the canvas.
pub const WINDOW_TITLE: &str = "Snake Game";

#[cfg(test)]
mod tests {
    use super::{GRID_COLUMNS, GRID_ROWS, MAX_SEGMENTS, PANEL_WIDTH, UNIT_SIZE};

    #[test]
    fn grid_is_twenty_four_cells_square() {
        assert_eq!(GRID_COLUMNS, 24);
        assert_eq!(GRID_ROWS, 24);
        assert_eq!(GRID_COLUMNS * UNIT_SIZE, PANEL_WIDTH);
    }

    #[test]
    fn segment_capacity_covers_every_cell() {
        assert_eq!(MAX_SEGMENTS, 14_400);
        assert!(MAX_SEGMENTS >= (GRID_COLUMNS * GRID_ROWS) as usize);
    }
}

use rand::Rng;

use crate::config::{GRID_COLUMNS, GRID_ROWS, UNIT_SIZE};
use crate::snake::Position;

/// The single food item on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Places food on a uniformly random cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(spawn_position(rng))
    }
}

/// Draws a uniformly random cell over the whole board.
///
/// Cells under the snake are not excluded, so food can appear beneath the body.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R) -> Position {
    let column = rng.gen_range(0..GRID_COLUMNS);
    let row = rng.gen_range(0..GRID_ROWS);
    Position::new(column * UNIT_SIZE, row * UNIT_SIZE)
}

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::food::Food;
use crate::input::Direction;
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why the last session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    SelfCollision,
    WallCollision,
}

/// What a single simulation step did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The game was not running; nothing moved.
    Idle,
    Moved,
    Ate,
    Died(DeathReason),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    rng: StdRng,
}

impl GameState {
    /// Creates a running game whose food placement is seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let food = Food::spawn(&mut rng);

        Self {
            snake: Snake::new(),
            food,
            score: 0,
            status: GameStatus::Running,
            death_reason: None,
            rng,
        }
    }

    /// Puts the snake back on its start cells and begins a fresh round.
    pub fn reset(&mut self) {
        self.snake = Snake::new();
        self.score = 0;
        self.status = GameStatus::Running;
        self.death_reason = None;
        self.spawn_food();
        info!("new round started, food at {:?}", self.food.position);
    }

    /// Re-rolls the food cell.
    pub fn spawn_food(&mut self) {
        self.food = Food::spawn(&mut self.rng);
        debug!("food spawned at {:?}", self.food.position);
    }

    /// Advances the simulation by one tick.
    ///
    /// Moves the snake, eats food under the new head, then checks for
    /// collisions with the body and the board edges.
    pub fn step(&mut self) -> StepOutcome {
        if self.status != GameStatus::Running {
            return StepOutcome::Idle;
        }

        self.snake.advance();

        let ate = self.snake.head() == self.food.position;
        if ate {
            self.snake.grow();
            self.score += 1;
            debug!("food eaten, score {}, length {}", self.score, self.snake.len());
            self.spawn_food();
        }

        if let Some(reason) = self.collision() {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(reason);
            info!("game over ({reason:?}) with score {}", self.score);
            return StepOutcome::Died(reason);
        }

        if ate {
            StepOutcome::Ate
        } else {
            StepOutcome::Moved
        }
    }

    /// Applies a heading request. Reversals are ignored.
    pub fn turn(&mut self, direction: Direction) -> bool {
        let accepted = self.snake.turn(direction);
        if !accepted {
            debug!("ignored reversal from {:?} to {direction:?}", self.snake.heading());
        }
        accepted
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    fn collision(&self) -> Option<DeathReason> {
        if self.snake.head_overlaps_body() {
            return Some(DeathReason::SelfCollision);
        }

        if !self.snake.head().is_on_board() {
            return Some(DeathReason::WallCollision);
        }

        None
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::food::{Food, spawn_position};
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameState, GameStatus, StepOutcome};

    fn state_with_food_far_away(seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(seed);
        state.food = Food::new(Position::new(575, 575));
        state
    }

    #[test]
    fn one_step_moves_the_head_right() {
        let mut state = state_with_food_far_away(1);

        assert_eq!(state.step(), StepOutcome::Moved);

        assert_eq!(state.snake.head(), Position::new(125, 100));
        assert_eq!(state.snake.segments().nth(1), Some(&Position::new(100, 100)));
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn eating_grows_scores_and_respawns() {
        let mut state = GameState::new_with_seed(2);
        state.food = Food::new(Position::new(125, 100));

        assert_eq!(state.step(), StepOutcome::Ate);

        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 1);

        // The second draw from the same seed, after the initial placement.
        let mut rng = StdRng::seed_from_u64(2);
        let _initial = spawn_position(&mut rng);
        assert_eq!(state.food.position, spawn_position(&mut rng));
    }

    #[test]
    fn food_can_spawn_under_the_snake() {
        let mut state = GameState::new_with_seed(12);

        let landed_on_body = (0..10_000).any(|_| {
            state.spawn_food();
            state
                .snake
                .segments()
                .any(|segment| *segment == state.food.position)
        });

        assert!(landed_on_body, "food never landed on a body segment");
    }

    // 2x2 loop: heading down puts the head on the cell the tail just left.
    fn tail_chasing_loop() -> Snake {
        Snake::from_segments(
            vec![
                Position::new(100, 100),
                Position::new(125, 100),
                Position::new(125, 125),
                Position::new(100, 125),
            ],
            Direction::Down,
        )
    }

    #[test]
    fn following_the_tail_is_not_a_collision() {
        let mut state = state_with_food_far_away(13);
        state.snake = tail_chasing_loop();

        assert_eq!(state.step(), StepOutcome::Moved);
        assert_eq!(state.snake.head(), Position::new(100, 125));
        assert!(state.is_running());
    }

    #[test]
    fn eating_on_the_vacated_tail_cell_grows_into_the_head() {
        let mut state = GameState::new_with_seed(14);
        state.snake = tail_chasing_loop();
        state.food = Food::new(Position::new(100, 125));

        assert_eq!(
            state.step(),
            StepOutcome::Died(DeathReason::SelfCollision)
        );
        assert_eq!(state.snake.len(), 5);
        assert_eq!(state.score, 1);
        assert!(state.is_game_over());
    }

    #[test]
    fn length_only_grows_on_the_food_cell() {
        let mut state = state_with_food_far_away(3);

        for _ in 0..5 {
            state.step();
            assert_eq!(state.snake.len(), 3);
            assert_eq!(state.score, 0);
        }
    }

    #[test]
    fn running_into_the_body_ends_the_game() {
        let mut state = state_with_food_far_away(4);
        state.snake = Snake::from_segments(
            vec![
                Position::new(100, 100),
                Position::new(125, 100),
                Position::new(125, 125),
                Position::new(100, 125),
                Position::new(75, 125),
            ],
            Direction::Left,
        );
        state.turn(Direction::Down);

        assert_eq!(
            state.step(),
            StepOutcome::Died(DeathReason::SelfCollision)
        );
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
    }

    #[test]
    fn leaving_the_board_ends_the_game_on_every_edge() {
        for (head, heading) in [
            (Position::new(0, 300), Direction::Left),
            (Position::new(575, 300), Direction::Right),
            (Position::new(300, 0), Direction::Up),
            (Position::new(300, 575), Direction::Down),
        ] {
            let mut state = state_with_food_far_away(5);
            state.snake = Snake::from_segments(vec![head], heading);

            assert_eq!(
                state.step(),
                StepOutcome::Died(DeathReason::WallCollision),
                "{heading:?} from {head:?}"
            );
            assert!(state.is_game_over());
        }
    }

    #[test]
    fn steps_after_game_over_are_idle() {
        let mut state = state_with_food_far_away(6);
        state.status = GameStatus::GameOver;
        let head = state.snake.head();

        assert_eq!(state.step(), StepOutcome::Idle);
        assert_eq!(state.snake.head(), head);
    }

    #[test]
    fn reset_restores_the_start_position() {
        let mut state = GameState::new_with_seed(7);
        state.food = Food::new(Position::new(125, 100));
        state.step();
        state.turn(Direction::Down);
        state.status = GameStatus::GameOver;
        state.death_reason = Some(DeathReason::WallCollision);

        state.reset();

        let segments: Vec<_> = state.snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position::new(100, 100),
                Position::new(75, 100),
                Position::new(50, 100),
            ]
        );
        assert_eq!(state.snake.heading(), Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.death_reason, None);
    }

    #[test]
    fn reversal_requests_keep_the_heading() {
        let mut state = GameState::new_with_seed(8);

        assert!(!state.turn(Direction::Left));
        assert_eq!(state.snake.heading(), Direction::Right);
        assert!(state.turn(Direction::Down));
        assert_eq!(state.snake.heading(), Direction::Down);
    }
}

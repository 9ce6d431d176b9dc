use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GameConfig, GridSize};
use crate::error::{ConfigError, LayoutError};
use crate::grid::{random_free_cell, Cell};
use crate::input::Direction;
use crate::snake::Snake;

/// Direction every start/restart faces.
pub const START_DIRECTION: Direction = Direction::Right;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
    /// The snake filled every cell, so no food could be placed.
    BoardFull,
}

/// What a single [`GameStepEngine::step`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The game was already over; nothing changed.
    Idle,
    Moved,
    Ate { score: u32 },
    Ended(GameOverReason),
}

/// Read-only copy of everything a presentation layer draws.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub status: GameStatus,
    pub direction: Direction,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameStepEngine {
    config: GameConfig,
    snake: Snake,
    direction: Direction,
    pending_direction: Direction,
    food: Option<Cell>,
    score: u32,
    status: GameStatus,
    game_over_reason: Option<GameOverReason>,
    tick_count: u64,
    rng: StdRng,
}

impl GameStepEngine {
    /// Creates a running game seeded from OS entropy.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible runs.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a running game from an explicit snake, heading and food cell.
    ///
    /// The layout must lie inside the grid, the snake must not overlap itself
    /// and the food must be free. Later food placement and restarts draw from
    /// a generator seeded with `seed`.
    pub fn from_layout(
        config: GameConfig,
        seed: u64,
        snake: Vec<Cell>,
        direction: Direction,
        food: Cell,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        let bounds = config.grid();

        if snake.is_empty() {
            return Err(LayoutError::EmptySnake);
        }

        let mut seen = HashSet::with_capacity(snake.len());
        for &cell in &snake {
            if !cell.is_within_bounds(bounds) {
                return Err(LayoutError::OutOfBounds(cell));
            }
            if !seen.insert(cell) {
                return Err(LayoutError::SelfOverlap(cell));
            }
        }

        if !food.is_within_bounds(bounds) {
            return Err(LayoutError::OutOfBounds(food));
        }
        if seen.contains(&food) {
            return Err(LayoutError::FoodOnSnake(food));
        }

        Ok(Self {
            config,
            snake: Snake::from_segments(snake),
            direction,
            pending_direction: direction,
            food: Some(food),
            score: 0,
            status: GameStatus::Running,
            game_over_reason: None,
            tick_count: 0,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            config,
            snake: Snake::centered(config.grid()),
            direction: START_DIRECTION,
            pending_direction: START_DIRECTION,
            food: None,
            score: 0,
            status: GameStatus::Running,
            game_over_reason: None,
            tick_count: 0,
            rng,
        };
        engine.restart();
        Ok(engine)
    }

    /// Resets snake, heading, food and score and resumes play.
    pub fn restart(&mut self) {
        let bounds = self.bounds();
        self.snake = Snake::centered(bounds);
        self.direction = START_DIRECTION;
        self.pending_direction = START_DIRECTION;
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.game_over_reason = None;
        self.food = random_free_cell(&mut self.rng, bounds, self.snake.occupied());

        log::info!(
            "game started on {}x{} grid, food at {:?}",
            bounds.cols,
            bounds.rows,
            self.food
        );
    }

    /// Queues `direction` for the next step unless it reverses the current heading.
    ///
    /// Later requests overwrite earlier ones; only the last accepted value
    /// before a step is applied. Ignored once the game is over.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if self.status != GameStatus::Running {
            return;
        }
        if direction.is_opposite_of(self.direction) {
            log::trace!("ignoring reversal to {direction:?}");
            return;
        }
        self.pending_direction = direction;
    }

    /// Advances simulation by one gameplay tick.
    pub fn step(&mut self) -> StepOutcome {
        if self.status != GameStatus::Running {
            return StepOutcome::Idle;
        }

        self.tick_count += 1;
        self.direction = self.pending_direction;

        let bounds = self.bounds();
        let new_head = self.snake.head().step(self.direction);
        if !new_head.is_within_bounds(bounds) {
            return self.end(GameOverReason::WallCollision);
        }

        let eats = self.food == Some(new_head);
        if self.snake.would_collide(new_head, eats) {
            return self.end(GameOverReason::SelfCollision);
        }

        self.snake.advance(new_head, eats);
        if !eats {
            return StepOutcome::Moved;
        }

        self.score = self.score.saturating_add(self.config.score_increment);
        self.food = random_free_cell(&mut self.rng, bounds, self.snake.occupied());
        log::debug!(
            "ate food at {new_head}, score {}, next food {:?}",
            self.score,
            self.food
        );

        if self.food.is_none() {
            return self.end(GameOverReason::BoardFull);
        }

        StepOutcome::Ate { score: self.score }
    }

    fn end(&mut self, reason: GameOverReason) -> StepOutcome {
        self.status = GameStatus::GameOver;
        self.game_over_reason = Some(reason);
        log::info!(
            "game over after {} ticks: {reason:?}, score {}",
            self.tick_count,
            self.score
        );
        StepOutcome::Ended(reason)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
            direction: self.direction,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid()
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Current food cell; `None` only after the board filled up.
    #[must_use]
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

use std::collections::VecDeque;

use super::{
    command::{Command, Direction},
    config::GameConfig,
    events::{EventSink, GameEvent},
    food::{Food, FoodSpawner, SpawnExhausted},
    grid::{Grid, Position},
    snake::Snake,
};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Read-only view of the game for rendering, valid for one tick
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Side length of the grid, in cells
    pub grid_size: usize,
    /// Snake cells, head first
    pub snake: &'a [Position],
    pub food: Food,
    pub bonus_food: Option<Food>,
    pub score: u32,
    pub level: u32,
    pub status: GameStatus,
    pub direction: Direction,
}

/// The tick-driven game state machine.
///
/// Owns all game state exclusively. External input arrives as queued
/// commands which are drained once per tick boundary, so the latest valid
/// direction wins the tick and no tick sees a half-applied command.
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    spawner: FoodSpawner,
    snake: Snake,
    direction: Direction,
    food: Position,
    bonus_food: Option<Position>,
    score: u32,
    status: GameStatus,
    commands: VecDeque<Command>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl GameEngine {
    /// Create a new engine with a fresh game
    pub fn new(config: GameConfig) -> Result<Self, SpawnExhausted> {
        let spawner = FoodSpawner::new(config.max_spawn_attempts);
        Self::with_spawner(config, spawner)
    }

    /// Engine with a deterministic food spawner, for tests
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, SpawnExhausted> {
        let spawner = FoodSpawner::seeded(seed, config.max_spawn_attempts);
        Self::with_spawner(config, spawner)
    }

    fn with_spawner(config: GameConfig, mut spawner: FoodSpawner) -> Result<Self, SpawnExhausted> {
        let grid = Grid::new(config.grid_size);
        let snake = Snake::new(grid.center(), Direction::Right, config.initial_snake_length);
        let food = spawner.spawn(grid, snake.cells())?;

        Ok(Self {
            config,
            grid,
            spawner,
            snake,
            direction: Direction::Right,
            food,
            bonus_food: None,
            score: 0,
            status: GameStatus::Running,
            commands: VecDeque::new(),
            sinks: Vec::new(),
        })
    }

    /// Register a subscriber for game events
    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Queue a command for the next tick boundary
    pub fn queue(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// Queue a direction change, rejected at apply time if it reverses
    /// the current direction
    pub fn set_direction(&mut self, direction: Direction) {
        self.queue(Command::SetDirection(direction));
    }

    /// Queue a Running/Paused toggle
    pub fn toggle_pause(&mut self) {
        self.queue(Command::TogglePause);
    }

    /// Queue a restart with fresh snake, food and score
    pub fn reset(&mut self) {
        self.queue(Command::Reset);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Level derived from score, starting at 1
    pub fn level(&self) -> u32 {
        self.score / self.config.bonus_period + 1
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Read-only state for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid_size: self.grid.size(),
            snake: self.snake.cells(),
            food: Food::regular(self.food),
            bonus_food: self.bonus_food.map(Food::bonus),
            score: self.score,
            level: self.level(),
            status: self.status,
            direction: self.direction,
        }
    }

    /// Advance the game by one step.
    ///
    /// Commands queued since the previous tick are applied first, so
    /// pause and reset take effect even while no game is running.
    pub fn tick(&mut self) -> Result<(), SpawnExhausted> {
        self.drain_commands()?;

        if self.status != GameStatus::Running {
            return Ok(());
        }

        // Candidate head is never committed if it is illegal; the snake
        // keeps its pre-move cells on game over.
        let candidate = self.snake.head().step(self.direction);
        if !self.grid.in_bounds(candidate) || self.snake.contains(candidate) {
            self.status = GameStatus::GameOver;
            self.emit(GameEvent::GameOver);
            return Ok(());
        }

        let ate_regular = candidate == self.food;
        let ate_bonus = self.bonus_food == Some(candidate);

        self.snake.advance(candidate, ate_regular || ate_bonus);

        if ate_regular {
            // Respawn avoiding the post-move snake and the live bonus
            let mut occupied = self.snake.cells().to_vec();
            occupied.extend(self.bonus_food);
            self.food = self.spawner.spawn(self.grid, &occupied)?;
        }

        if ate_bonus {
            self.bonus_food = None;
        }

        if ate_regular || ate_bonus {
            self.score += 1;
            self.emit(GameEvent::FoodEaten { bonus: ate_bonus });
        }

        // Bonus trigger, evaluated once per tick after all mutation
        if self.score > 0 && self.score % self.config.bonus_period == 0 && self.bonus_food.is_none()
        {
            let mut occupied = self.snake.cells().to_vec();
            occupied.push(self.food);
            self.bonus_food = Some(self.spawner.spawn(self.grid, &occupied)?);
            self.emit(GameEvent::BonusAppeared);
        }

        Ok(())
    }

    fn drain_commands(&mut self) -> Result<(), SpawnExhausted> {
        while let Some(command) = self.commands.pop_front() {
            match command {
                Command::SetDirection(direction) => {
                    if self.status != GameStatus::GameOver
                        && !direction.is_opposite(self.direction)
                    {
                        self.direction = direction;
                    }
                }
                Command::TogglePause => {
                    self.status = match self.status {
                        GameStatus::Running => GameStatus::Paused,
                        GameStatus::Paused => GameStatus::Running,
                        GameStatus::GameOver => GameStatus::GameOver,
                    };
                }
                Command::Reset => self.restart()?,
            }
        }

        Ok(())
    }

    fn restart(&mut self) -> Result<(), SpawnExhausted> {
        self.snake = Snake::new(
            self.grid.center(),
            Direction::Right,
            self.config.initial_snake_length,
        );
        self.direction = Direction::Right;
        self.food = self.spawner.spawn(self.grid, self.snake.cells())?;
        self.bonus_food = None;
        self.score = 0;
        self.status = GameStatus::Running;

        Ok(())
    }

    fn emit(&mut self, event: GameEvent) {
        for sink in &mut self.sinks {
            sink.notify(event);
        }
    }
}

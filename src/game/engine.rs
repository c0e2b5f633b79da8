use super::{
    action::{Action, Direction},
    arena::Arena,
    config::GameConfig,
    state::{CollisionType, GameState, Phase, Position, Snake},
};
use log::{debug, warn};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// How many cells in front of the starting head arenas must leave open
const RUN_UP: i32 = 3;

/// Information about a step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// The snake filled every free cell
    pub board_full: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle(terminated: bool) -> Self {
        Self {
            terminated,
            info: StepInfo::default(),
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GameConfig {
        &mut self.config
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let width = self.config.grid_width;
        let height = self.config.grid_height;
        let head = Position::new((width / 2) as i32, (height / 2) as i32);

        let snake = Snake::new(head, Direction::Right, self.config.initial_snake_length);

        let mut protected = snake.body.clone();
        protected.extend((1..=RUN_UP).map(|i| head.moved_by(i, 0)));
        let arena = Arena::build(self.config.arena, width, height, &protected);

        let mut state = GameState::new(snake, head, width, height).with_arena(arena);
        match self.spawn_food(&state) {
            Some(food) => state.food = food,
            None => {
                warn!("no free cell for food on a {}x{} grid", width, height);
                state.phase = Phase::GameOver;
            }
        }

        state
    }

    /// Buffer a direction for the next tick. Returns false when the turn is
    /// rejected because it would reverse the snake onto itself.
    ///
    /// The first steer of a round starts it, even if the turn is rejected.
    pub fn steer(&self, state: &mut GameState, direction: Direction) -> bool {
        if state.phase == Phase::GameOver {
            return false;
        }
        if state.phase == Phase::Ready {
            state.phase = Phase::Running;
        }
        Self::buffer_direction(state, direction)
    }

    /// Flip between running and paused. Returns false when the round has not
    /// started yet or is already over.
    pub fn toggle_pause(&self, state: &mut GameState) -> bool {
        state.phase = match state.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Ready | Phase::GameOver => return false,
        };
        true
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        match state.phase {
            Phase::Running => {}
            Phase::GameOver => return StepResult::idle(true),
            Phase::Ready | Phase::Paused => return StepResult::idle(false),
        }

        if let Action::Move(direction) = action {
            Self::buffer_direction(state, direction);
        }
        state.snake.direction = state.next_direction;
        state.steps += 1;

        let food = state.food;
        state
            .arena
            .advance_obstacles(state.grid_width, state.grid_height, |pos| pos == food);

        let new_head = state.snake.head().moved_in_direction(state.snake.direction);

        if let Some(collision_type) = self.check_collision(state, new_head) {
            debug!(
                "collision {:?} at ({}, {}) after {} steps, score {}",
                collision_type, new_head.x, new_head.y, state.steps, state.score
            );
            state.phase = Phase::GameOver;

            return StepResult {
                terminated: true,
                info: StepInfo {
                    collision_type: Some(collision_type),
                    ..StepInfo::default()
                },
            };
        }

        let ate_food = new_head == state.food;
        state.snake.move_snake(ate_food);

        if !ate_food {
            return StepResult::idle(false);
        }

        state.score += self.config.food_score;

        match self.spawn_food(state) {
            Some(next) => {
                state.food = next;
                StepResult {
                    terminated: false,
                    info: StepInfo {
                        ate_food: true,
                        ..StepInfo::default()
                    },
                }
            }
            None => {
                debug!("board full at score {}", state.score);
                state.phase = Phase::GameOver;
                StepResult {
                    terminated: true,
                    info: StepInfo {
                        ate_food: true,
                        board_full: true,
                        ..StepInfo::default()
                    },
                }
            }
        }
    }

    fn buffer_direction(state: &mut GameState, direction: Direction) -> bool {
        let is_reversing = state.snake.len() > 1 && state.snake.direction.is_opposite(direction);
        if !is_reversing {
            state.next_direction = direction;
        }
        !is_reversing
    }

    /// Check if the new head position causes a collision. Obstacles have
    /// already moved for this tick.
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        // An obstacle walked into the snake
        if state
            .arena
            .obstacles
            .iter()
            .any(|o| state.snake.occupies(o.position))
        {
            return Some(CollisionType::Obstacle);
        }

        if !state.is_in_bounds(pos) || state.arena.is_wall(pos) {
            return Some(CollisionType::Wall);
        }

        // The tail has not moved yet, so it counts too
        if state.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        if state.arena.has_obstacle_at(pos) {
            return Some(CollisionType::Obstacle);
        }

        None
    }

    /// Pick a random free cell, or None when the board is full
    fn spawn_food(&mut self, state: &GameState) -> Option<Position> {
        let free: Vec<Position> = (0..state.grid_height as i32)
            .flat_map(|y| (0..state.grid_width as i32).map(move |x| Position::new(x, y)))
            .filter(|pos| state.is_free(*pos))
            .collect();

        free.choose(&mut self.rng).copied()
    }
}

use super::action::Direction;
use super::arena::Arena;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Whether the position lies on a `width` x `height` grid
    pub fn is_within(&self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.x < width as i32 && self.y >= 0 && self.y < height as i32
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Direction the snake moved in on the last tick
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Add initial body segments behind the head
        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Whether any segment, head or tail included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Move snake in current direction, growing if should_grow is true
    pub fn move_snake(&mut self, should_grow: bool) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);

        if !should_grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid or hit an arena wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// Snake and a moving obstacle met
    Obstacle,
}

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first direction key
    Ready,
    Running,
    Paused,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Direction that will be committed on the next tick
    pub next_direction: Direction,
    pub food: Position,
    pub arena: Arena,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub phase: Phase,
}

impl GameState {
    /// Create a new game state on an empty arena
    pub fn new(snake: Snake, food: Position, grid_width: usize, grid_height: usize) -> Self {
        Self {
            next_direction: snake.direction,
            snake,
            food,
            arena: Arena::empty(),
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            phase: Phase::Ready,
        }
    }

    pub fn with_arena(mut self, arena: Arena) -> Self {
        self.arena = arena;
        self
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_within(self.grid_width, self.grid_height)
    }

    /// A cell food may be placed on: on the grid and clear of snake, walls
    /// and obstacles
    pub fn is_free(&self, pos: Position) -> bool {
        self.is_in_bounds(pos)
            && !self.snake.occupies(pos)
            && !self.arena.is_wall(pos)
            && !self.arena.has_obstacle_at(pos)
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::arena::MovingObstacle;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(10, 10), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.body,
            vec![
                Position::new(10, 10),
                Position::new(9, 10),
                Position::new(8, 10)
            ]
        );
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        // Move without growing
        snake.move_snake(false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));

        // Move with growing
        snake.move_snake(true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(7, 5));
    }

    #[test]
    fn test_occupies_includes_head_and_tail() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(10, 10)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(10, 10),
            20,
            20,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_free_cells_exclude_walls_and_obstacles() {
        let mut arena = Arena::empty();
        arena.walls.insert(Position::new(1, 1));
        arena
            .obstacles
            .push(MovingObstacle::new(Position::new(2, 2), Direction::Up));

        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(9, 9),
            10,
            10,
        )
        .with_arena(arena);

        assert!(!state.is_free(Position::new(1, 1)));
        assert!(!state.is_free(Position::new(2, 2)));
        assert!(!state.is_free(Position::new(4, 5)));
        assert!(!state.is_free(Position::new(10, 0)));
        assert!(state.is_free(Position::new(0, 0)));
        assert_eq!(state.phase, Phase::Ready);
    }
}

//! Arena presets: static walls plus obstacles that patrol the grid
//!
//! Walls are a fixed set of cells checked by membership. Moving obstacles
//! advance one cell per tick and bounce off anything they cannot enter.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::action::Direction;
use super::state::Position;

/// Which layout to play on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArenaPreset {
    /// Open field, only the boundary kills
    #[default]
    Classic,
    /// Inner ring with a gap in the middle of each side
    Box,
    /// Two bars crossing at the centre with an opening around it
    Cross,
    /// A 2x2 block in every quadrant
    Pillars,
    /// Open field with obstacles walking back and forth
    Patrol,
}

impl ArenaPreset {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Box => "Box",
            Self::Cross => "Cross",
            Self::Pillars => "Pillars",
            Self::Patrol => "Patrol",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Classic => Self::Box,
            Self::Box => Self::Cross,
            Self::Cross => Self::Pillars,
            Self::Pillars => Self::Patrol,
            Self::Patrol => Self::Classic,
        }
    }
}

/// An obstacle that walks in a straight line and turns around when blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingObstacle {
    pub position: Position,
    pub direction: Direction,
}

impl MovingObstacle {
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Move one cell. If the cell ahead is blocked the obstacle reverses and
    /// tries the other way; if both are blocked it stays put.
    pub fn advance(&mut self, is_blocked: impl Fn(Position) -> bool) {
        let ahead = self.position.moved_in_direction(self.direction);
        if !is_blocked(ahead) {
            self.position = ahead;
            return;
        }

        self.direction = self.direction.opposite();
        let behind = self.position.moved_in_direction(self.direction);
        if !is_blocked(behind) {
            self.position = behind;
        }
    }
}

/// Static walls and moving obstacles of one round
#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    pub preset: ArenaPreset,
    pub walls: HashSet<Position>,
    pub obstacles: Vec<MovingObstacle>,
}

impl Arena {
    /// An arena with nothing in it
    pub fn empty() -> Self {
        Self {
            preset: ArenaPreset::Classic,
            walls: HashSet::new(),
            obstacles: Vec::new(),
        }
    }

    /// Lay out `preset` on a `width` x `height` grid. Cells in `protected`
    /// (the starting snake and the run-up in front of it) are kept clear.
    pub fn build(preset: ArenaPreset, width: usize, height: usize, protected: &[Position]) -> Self {
        let w = width as i32;
        let h = height as i32;
        let cx = w / 2;
        let cy = h / 2;

        let mut walls = HashSet::new();
        let mut obstacles = Vec::new();

        match preset {
            ArenaPreset::Classic => {}
            ArenaPreset::Box => {
                for x in 1..=w - 2 {
                    if (x - cx).abs() > 1 {
                        walls.insert(Position::new(x, 1));
                        walls.insert(Position::new(x, h - 2));
                    }
                }
                for y in 1..=h - 2 {
                    if (y - cy).abs() > 1 {
                        walls.insert(Position::new(1, y));
                        walls.insert(Position::new(w - 2, y));
                    }
                }
            }
            ArenaPreset::Cross => {
                for y in 2..=h - 3 {
                    if (y - cy).abs() > 2 {
                        walls.insert(Position::new(cx, y));
                    }
                }
                for x in 2..=w - 3 {
                    if (x - cx).abs() > 2 {
                        walls.insert(Position::new(x, cy));
                    }
                }
            }
            ArenaPreset::Pillars => {
                let left = w / 4;
                let right = w - w / 4 - 2;
                let top = h / 4;
                let bottom = h - h / 4 - 2;
                for (ox, oy) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
                    for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                        walls.insert(Position::new(ox + dx, oy + dy));
                    }
                }
            }
            ArenaPreset::Patrol => {
                obstacles.push(MovingObstacle::new(
                    Position::new(1, h / 4),
                    Direction::Right,
                ));
                obstacles.push(MovingObstacle::new(
                    Position::new(w - 2, h - h / 4 - 1),
                    Direction::Left,
                ));
                obstacles.push(MovingObstacle::new(
                    Position::new(w - w / 4 - 1, h - 2),
                    Direction::Up,
                ));
            }
        }

        for pos in protected {
            walls.remove(pos);
        }
        obstacles.retain(|o| !protected.contains(&o.position));

        Self {
            preset,
            walls,
            obstacles,
        }
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.contains(&pos)
    }

    pub fn has_obstacle_at(&self, pos: Position) -> bool {
        self.obstacles.iter().any(|o| o.position == pos)
    }

    /// Advance every moving obstacle by one cell, in order. Obstacles treat
    /// the grid edge, walls, each other and any cell in `extra_blocked` as
    /// solid, so two of them never share a cell.
    pub fn advance_obstacles(
        &mut self,
        width: usize,
        height: usize,
        extra_blocked: impl Fn(Position) -> bool,
    ) {
        for i in 0..self.obstacles.len() {
            let mut obstacle = self.obstacles[i];
            let others = &self.obstacles;
            let walls = &self.walls;
            obstacle.advance(|pos| {
                !pos.is_within(width, height)
                    || walls.contains(&pos)
                    || others
                        .iter()
                        .enumerate()
                        .any(|(j, other)| j != i && other.position == pos)
                    || extra_blocked(pos)
            });
            self.obstacles[i] = obstacle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_cells() -> Vec<Position> {
        // Default 20x20 snake plus three cells of run-up
        (8..=13).map(|x| Position::new(x, 10)).collect()
    }

    #[test]
    fn test_classic_is_empty() {
        let arena = Arena::build(ArenaPreset::Classic, 20, 20, &start_cells());
        assert!(arena.walls.is_empty());
        assert!(arena.obstacles.is_empty());
    }

    #[test]
    fn test_presets_keep_start_clear() {
        let protected = start_cells();
        for preset in [
            ArenaPreset::Classic,
            ArenaPreset::Box,
            ArenaPreset::Cross,
            ArenaPreset::Pillars,
            ArenaPreset::Patrol,
        ] {
            let arena = Arena::build(preset, 20, 20, &protected);
            for pos in &protected {
                assert!(!arena.is_wall(*pos), "{:?} walls {:?}", preset, pos);
                assert!(!arena.has_obstacle_at(*pos), "{:?} obstacle {:?}", preset, pos);
            }
        }
    }

    #[test]
    fn test_walls_stay_inside_grid() {
        for (w, h) in [(10, 10), (20, 20), (31, 17)] {
            for preset in [ArenaPreset::Box, ArenaPreset::Cross, ArenaPreset::Pillars] {
                let arena = Arena::build(preset, w, h, &[]);
                assert!(!arena.walls.is_empty());
                assert!(arena.walls.iter().all(|p| p.is_within(w, h)));
            }
        }
    }

    #[test]
    fn test_box_has_gaps() {
        let arena = Arena::build(ArenaPreset::Box, 20, 20, &[]);
        assert!(arena.is_wall(Position::new(1, 1)));
        assert!(arena.is_wall(Position::new(18, 18)));
        assert!(!arena.is_wall(Position::new(10, 1)));
        assert!(!arena.is_wall(Position::new(1, 10)));
    }

    #[test]
    fn test_obstacle_bounces_off_edge() {
        let mut obstacle = MovingObstacle::new(Position::new(9, 0), Direction::Right);
        let blocked = |p: Position| !p.is_within(10, 10);

        obstacle.advance(blocked);
        assert_eq!(obstacle.position, Position::new(8, 0));
        assert_eq!(obstacle.direction, Direction::Left);

        obstacle.advance(blocked);
        assert_eq!(obstacle.position, Position::new(7, 0));
    }

    #[test]
    fn test_boxed_in_obstacle_stays() {
        let mut obstacle = MovingObstacle::new(Position::new(5, 5), Direction::Up);
        obstacle.advance(|_| true);
        assert_eq!(obstacle.position, Position::new(5, 5));
        assert_eq!(obstacle.direction, Direction::Down);
    }

    #[test]
    fn test_advance_obstacles_respects_walls() {
        let mut arena = Arena::empty();
        arena.walls.insert(Position::new(3, 0));
        arena
            .obstacles
            .push(MovingObstacle::new(Position::new(2, 0), Direction::Right));

        arena.advance_obstacles(10, 10, |_| false);

        assert_eq!(arena.obstacles[0].position, Position::new(1, 0));
        assert_eq!(arena.obstacles[0].direction, Direction::Left);
    }

    #[test]
    fn test_obstacles_block_each_other() {
        let mut arena = Arena::empty();
        arena
            .obstacles
            .push(MovingObstacle::new(Position::new(2, 0), Direction::Right));
        arena
            .obstacles
            .push(MovingObstacle::new(Position::new(4, 0), Direction::Left));

        arena.advance_obstacles(10, 10, |_| false);

        // The first one takes the middle cell, the second turns back
        assert_eq!(arena.obstacles[0].position, Position::new(3, 0));
        assert_eq!(arena.obstacles[1].position, Position::new(5, 0));
        assert_eq!(arena.obstacles[1].direction, Direction::Right);

        // Head on: neither walks through the other
        let mut arena = Arena::empty();
        arena
            .obstacles
            .push(MovingObstacle::new(Position::new(2, 0), Direction::Right));
        arena
            .obstacles
            .push(MovingObstacle::new(Position::new(3, 0), Direction::Left));
        for _ in 0..6 {
            arena.advance_obstacles(10, 10, |_| false);
            assert_ne!(arena.obstacles[0].position, arena.obstacles[1].position);
        }
        assert!(arena.obstacles[0].position.x < arena.obstacles[1].position.x);
    }

    #[test]
    fn test_preset_cycle_round_trips() {
        let mut preset = ArenaPreset::Classic;
        for _ in 0..5 {
            preset = preset.next();
        }
        assert_eq!(preset, ArenaPreset::Classic);
    }
}

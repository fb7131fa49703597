use std::collections::VecDeque;

use crate::cell::{Cell, Point, BODY_CHAR};
use crate::grid::Grid;
use Direction::*;

pub const INITIAL_SNAKE_LENGTH: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Left | Right)
    }

    /// The point one unit away from `from` in this direction.
    pub fn step(self, from: Point) -> Point {
        match self {
            Up => Point::new(from.x, from.y - 1),
            Down => Point::new(from.x, from.y + 1),
            Left => Point::new(from.x - 1, from.y),
            Right => Point::new(from.x + 1, from.y),
        }
    }
}

/// What a single step changed on screen.
#[derive(Debug, PartialEq)]
pub struct Moved {
    pub new_head: Cell,
    pub old_tail: Option<Cell>,
}

pub struct Snake {
    // Tail at the front, head at the back
    body: VecDeque<Cell>,
    direction: Direction,
    can_rotate: bool,
    alive: bool,
}

impl Snake {
    /// A snake of the initial length lying rightwards from the centre of the grid.
    pub fn new(grid: &Grid) -> Self {
        let center = grid.center();
        let body = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|i| Point::new(center.x + i, center.y))
            .collect();

        Snake::with_body(body, Right)
    }

    /// Builds a snake from tail to head. `body` must not be empty.
    pub fn with_body(body: Vec<Point>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one cell");

        let body = body.into_iter().map(Cell::body).collect();
        Snake { body, direction, can_rotate: true, alive: true }
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> &Cell {
        &self.body[self.body.len() - 1]
    }

    #[cfg(test)]
    pub fn tail(&self) -> &Cell {
        &self.body[0]
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn can_rotate(&self) -> bool {
        self.can_rotate
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Turns onto the other axis. Only the first turn between two steps is
    /// taken; reversals and same-axis requests are dropped.
    pub fn rotate(&mut self, new_direction: Direction) -> bool {
        if !self.alive || !self.can_rotate {
            return false;
        }

        if new_direction.is_horizontal() == self.direction.is_horizontal() {
            return false;
        }

        self.direction = new_direction;
        self.can_rotate = false;
        true
    }

    /// Where the head goes on the next step.
    pub fn next_head(&self) -> Point {
        self.direction.step(self.head().point())
    }

    /// Advances the head one cell. With `clear_tail` the tail cell is dropped
    /// so the length stays the same.
    pub fn step(&mut self, clear_tail: bool) -> Option<Moved> {
        if !self.alive {
            return None;
        }

        let new_head = Cell::body(self.next_head());
        self.body.push_back(new_head);

        let old_tail = if clear_tail { self.body.pop_front() } else { None };
        self.can_rotate = true;

        Some(Moved { new_head, old_tail })
    }

    /// Swallows `food`: it becomes the new head and the tail stays put.
    pub fn grow(&mut self, mut food: Cell) -> Option<Cell> {
        if !self.alive {
            return None;
        }

        food.set_glyph(BODY_CHAR);
        self.body.push_back(food);
        Some(food)
    }

    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().take(self.body.len() - 1).any(|cell| cell == head)
    }
}

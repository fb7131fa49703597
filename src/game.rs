use std::sync::mpsc::{channel, Receiver, Sender};

use log::{debug, info};

use crate::cell::Cell;
use crate::food::FoodFactory;
use crate::grid::{Grid, Walls};
use crate::snake::{Direction, Snake};

/// Where the game shows itself. The game only ever writes to it.
pub trait Canvas {
    fn draw(&mut self, cell: &Cell);
    fn clear(&mut self, cell: &Cell);
    fn game_over(&mut self);

    /// Called once at the end of every tick.
    fn present(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

pub struct SnakeGame<C: Canvas> {
    walls: Walls,
    snake: Snake,
    food_factory: FoodFactory,
    food: Option<Cell>,
    canvas: C,
    steering_tx: Sender<Direction>,
    steering_rx: Receiver<Direction>,
    death: Option<DeathReason>,
}

impl<C: Canvas> SnakeGame<C> {
    /// Sets up walls, snake and the first food, drawing each on `canvas`.
    pub fn new(grid: Grid, food_factory: FoodFactory, mut canvas: C) -> Self {
        let walls = grid.walls();
        for cell in walls.cells() {
            canvas.draw(cell);
        }

        let snake = Snake::new(&grid);
        for cell in snake.body() {
            canvas.draw(cell);
        }

        let (steering_tx, steering_rx) = channel();
        let mut game = SnakeGame {
            walls,
            snake,
            food_factory,
            food: None,
            canvas,
            steering_tx,
            steering_rx,
            death: None,
        };

        game.spawn_food();
        game.canvas.present();
        game
    }

    /// A handle for the input side. Requests queue up and are applied at the
    /// start of the next tick.
    pub fn steering(&self) -> Sender<Direction> {
        self.steering_tx.clone()
    }

    pub fn is_alive(&self) -> bool {
        self.snake.is_alive()
    }

    pub fn death(&self) -> Option<DeathReason> {
        self.death
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub fn food(&self) -> Option<&Cell> {
        self.food.as_ref()
    }

    #[cfg(test)]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Advances the game by one step. Collisions are checked on the current
    /// head before looking ahead, so a snake that has just entered a wall is
    /// still alive until the following tick.
    pub fn tick(&mut self) {
        if !self.snake.is_alive() {
            return;
        }

        self.apply_steering();

        let head = self.snake.head().point();
        if self.walls.contains(head) {
            return self.end(DeathReason::WallCollision);
        }

        if self.snake.bites_itself() {
            return self.end(DeathReason::SelfCollision);
        }

        let next = self.snake.next_head();

        match self.food.take() {
            Some(food) if food.point() == next => {
                if let Some(head) = self.snake.grow(food) {
                    debug!("Ate food at ({}, {}), length {}", next.x, next.y, self.snake.len());
                    self.canvas.draw(&head);
                }
                self.spawn_food();
            },
            food => {
                self.food = food;
                if let Some(moved) = self.snake.step(true) {
                    // Clear first: the head may have moved onto the old tail
                    if let Some(old_tail) = moved.old_tail {
                        self.canvas.clear(&old_tail);
                    }
                    self.canvas.draw(&moved.new_head);
                }
            },
        }

        self.canvas.present();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn apply_steering(&mut self) {
        for direction in self.steering_rx.try_iter() {
            if self.snake.rotate(direction) {
                debug!("Turned {:?}", direction);
            }
        }
    }

    fn spawn_food(&mut self) {
        self.food = self.food_factory.create(self.snake.body());

        match &self.food {
            Some(food) => {
                debug!("Food placed at ({}, {})", food.point().x, food.point().y);
                self.canvas.draw(food);
            },
            None => info!("No free cell left for food"),
        }
    }

    fn end(&mut self, reason: DeathReason) {
        self.snake.kill();
        self.death = Some(reason);
        info!("Game over: {:?} at length {}", reason, self.snake.len());

        self.canvas.game_over();
        self.canvas.present();
    }
}

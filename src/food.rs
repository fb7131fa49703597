use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::cell::{Cell, Point};
use crate::grid::Grid;

pub struct FoodFactory {
    positions: Vec<Point>,
    rng: StdRng,
    seed: u64,
}

impl FoodFactory {
    pub fn new(grid: &Grid, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());

        // Food never goes on the last interior row or column
        let mut positions = vec![];
        for y in 1..grid.height() - 1 {
            for x in 1..grid.width() - 1 {
                positions.push(Point::new(x, y));
            }
        }

        FoodFactory { positions, rng: StdRng::seed_from_u64(seed), seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Picks a random free position for the next food, or `None` if the snake
    /// covers every candidate.
    pub fn create<'a, I>(&mut self, occupied: I) -> Option<Cell>
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let taken: HashSet<Point> = occupied.into_iter().map(Cell::point).collect();
        let choices: Vec<&Point> = self.positions.iter().filter(|pos| !taken.contains(*pos)).collect();

        choices.choose(&mut self.rng).map(|pos| Cell::food(**pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::FOOD_CHAR;

    const NOTHING: [Cell; 0] = [];

    #[test]
    fn food_stays_inside_the_interior() {
        let grid = Grid::new(20, 10);
        let mut factory = FoodFactory::new(&grid, Some(7));

        for _ in 0..500 {
            let food = factory.create(&NOTHING).unwrap();
            let p = food.point();
            assert!(p.x >= 1 && p.x < grid.width() - 1, "x out of range: {:?}", p);
            assert!(p.y >= 1 && p.y < grid.height() - 1, "y out of range: {:?}", p);
            assert_eq!(food.glyph(), FOOD_CHAR);
        }
    }

    #[test]
    fn food_avoids_occupied_cells() {
        let grid = Grid::new(10, 5);
        let mut factory = FoodFactory::new(&grid, Some(1));

        // Leave a single free candidate at (4, 2)
        let occupied: Vec<Cell> = (1..4)
            .flat_map(|y| (1..9).map(move |x| Point::new(x, y)))
            .filter(|p| *p != Point::new(4, 2))
            .map(Cell::body)
            .collect();

        for _ in 0..20 {
            assert_eq!(factory.create(&occupied).unwrap().point(), Point::new(4, 2));
        }
    }

    #[test]
    fn full_board_yields_no_food() {
        let grid = Grid::new(10, 5);
        let mut factory = FoodFactory::new(&grid, Some(1));
        let occupied: Vec<Cell> = factory.positions.iter().copied().map(Cell::body).collect();

        assert!(factory.create(&occupied).is_none());
    }

    #[test]
    fn same_seed_same_food() {
        let grid = Grid::new(40, 20);
        let mut a = FoodFactory::new(&grid, Some(42));
        let mut b = FoodFactory::new(&grid, Some(42));

        assert_eq!(a.seed(), 42);
        for _ in 0..10 {
            assert_eq!(a.create(&NOTHING).unwrap().point(), b.create(&NOTHING).unwrap().point());
        }
    }
}

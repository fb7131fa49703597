use std::collections::HashSet;

use crate::Coord;
use crate::cell::{Cell, Point};

/// Playfield dimensions. Walls sit on x = 0, x = width, y = 0 and y = height,
/// so the terminal needs `width + 1` columns and `height + 1` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: Coord,
    height: Coord,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        Grid { width: Coord::from(width), height: Coord::from(height) }
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    pub fn walls(&self) -> Walls {
        Walls::new(self.width, self.height)
    }
}

pub struct Walls {
    cells: Vec<Cell>,
    points: HashSet<Point>,
}

impl Walls {
    fn new(width: Coord, height: Coord) -> Self {
        let mut cells = Vec::with_capacity(2 * (width + height) as usize);

        for x in 0..width {
            cells.push(Cell::wall(Point::new(x, 0)));
            cells.push(Cell::wall(Point::new(x, height)));
        }

        for y in 0..height {
            cells.push(Cell::wall(Point::new(0, y)));
            cells.push(Cell::wall(Point::new(width, y)));
        }

        let points = cells.iter().map(Cell::point).collect();
        Walls { cells, points }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_trace_the_perimeter() {
        let walls = Grid::new(80, 30).walls();

        assert!(walls.contains(Point::new(0, 5)));
        assert!(walls.contains(Point::new(80, 5)));
        assert!(walls.contains(Point::new(12, 0)));
        assert!(walls.contains(Point::new(12, 30)));
        assert!(!walls.contains(Point::new(1, 1)));
        assert!(!walls.contains(Point::new(79, 29)));
        assert!(walls.cells().iter().all(|c| c.glyph() == '#'));
    }

    #[test]
    fn far_corner_is_left_open() {
        let walls = Grid::new(10, 5).walls();
        assert!(walls.contains(Point::new(0, 0)));
        assert!(!walls.contains(Point::new(10, 5)));
    }
}

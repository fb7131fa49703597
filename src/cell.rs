use std::hash::{Hash, Hasher};

use crate::Coord;

pub const WALL_CHAR: char = '#';
pub const BODY_CHAR: char = 'x';
pub const FOOD_CHAR: char = '@';
pub const EMPTY_CHAR: char = ' ';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub fn new(x: Coord, y: Coord) -> Self {
        Point { x, y }
    }
}

/// A grid position with the glyph shown there.
///
/// Equality and hashing only look at the position, so a food cell that has
/// been relabelled as body still matches the point it sits on.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    point: Point,
    glyph: char,
}

impl Cell {
    pub fn new(point: Point, glyph: char) -> Self {
        Cell { point, glyph }
    }

    pub fn wall(point: Point) -> Self {
        Cell::new(point, WALL_CHAR)
    }

    pub fn body(point: Point) -> Self {
        Cell::new(point, BODY_CHAR)
    }

    pub fn food(point: Point) -> Self {
        Cell::new(point, FOOD_CHAR)
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn set_glyph(&mut self, glyph: char) {
        self.glyph = glyph;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cells_compare_by_point_only() {
        let p = Point::new(3, 4);
        assert_eq!(Cell::food(p), Cell::body(p));
        assert_ne!(Cell::body(p), Cell::body(Point::new(4, 3)));
    }

    #[test]
    fn relabelled_cell_keeps_its_hash_slot() {
        let mut cell = Cell::food(Point::new(7, 2));
        let mut set = HashSet::new();
        set.insert(cell);

        cell.set_glyph(BODY_CHAR);
        assert_eq!(cell.glyph(), BODY_CHAR);
        assert!(set.contains(&cell));
    }
}

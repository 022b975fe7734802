//! Torus-wrapped cell grid.
//!
//! Both axes wrap: stepping off one edge lands on the opposite one. Cells are
//! stored row-major in a single `Vec` so neighbor lookups never allocate.

use formica_data::{Cell, Direction, Location};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Grid {
    pub cells: Vec<Cell>,
    pub width: u16,
    pub height: u16,
}

impl Grid {
    /// Creates an empty grid. Both dimensions must be non-zero; `World`
    /// checks this before calling.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Cell::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    #[inline(always)]
    pub fn index(&self, location: Location) -> usize {
        (location.y as usize * self.width as usize) + location.x as usize
    }

    #[inline]
    pub fn contains(&self, location: Location) -> bool {
        location.x < self.width && location.y < self.height
    }

    /// Maps any coordinate pair, negative or oversized, onto the torus.
    #[inline]
    pub fn wrap(&self, x: i64, y: i64) -> Location {
        Location {
            x: x.rem_euclid(i64::from(self.width)) as u16,
            y: y.rem_euclid(i64::from(self.height)) as u16,
        }
    }

    /// The cell reached by one step from `location` towards `direction`.
    #[inline]
    pub fn neighbor(&self, location: Location, direction: Direction) -> Location {
        let (dx, dy) = direction.offset();
        self.wrap(
            i64::from(location.x) + i64::from(dx),
            i64::from(location.y) + i64::from(dy),
        )
    }

    pub fn get(&self, location: Location) -> &Cell {
        let location = self.wrap(i64::from(location.x), i64::from(location.y));
        &self.cells[self.index(location)]
    }

    pub fn get_mut(&mut self, location: Location) -> &mut Cell {
        let location = self.wrap(i64::from(location.x), i64::from(location.y));
        let idx = self.index(location);
        &mut self.cells[idx]
    }

    /// Iterates every cell together with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &Cell)> {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            (
                Location::new((i % width) as u16, (i / width) as u16),
                cell,
            )
        })
    }

    pub fn evaporate(&mut self, colony_rate: f64, food_rate: f64) {
        for cell in &mut self.cells {
            cell.evaporate(colony_rate, food_rate);
        }
    }
}

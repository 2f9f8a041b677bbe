use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Cell, Grid};

/// Picks a cell uniformly among the cells of `grid` not in `occupied`.
///
/// Free cells are enumerated rather than rejection-sampled, so this always
/// terminates; `None` means the board is full.
pub fn generate_position<'a, R>(
    grid: &Grid,
    occupied: impl IntoIterator<Item = &'a Cell>,
    rng: &mut R,
) -> Option<Cell>
where
    R: Rng + ?Sized,
{
    let occupied: HashSet<Cell> = occupied.into_iter().copied().collect();
    let mut free = Vec::with_capacity(grid.area().saturating_sub(occupied.len()));
    free.extend(grid.cells().filter(|cell| !occupied.contains(cell)));
    free.choose(rng).copied()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn spawn<'a, R>(grid: &Grid, occupied: impl IntoIterator<Item = &'a Cell>, rng: &mut R) -> Option<Self>
    where
        R: Rng + ?Sized,
    {
        generate_position(grid, occupied, rng).map(Self::at)
    }

    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a fresh free cell. Returns `false`, leaving the food
    /// where it was, when no free cell exists.
    pub fn respawn<'a, R>(&mut self, grid: &Grid, occupied: impl IntoIterator<Item = &'a Cell>, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        match generate_position(grid, occupied, rng) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_lands_on_occupied_cells() {
        let grid = Grid::new(6, 6);
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: Vec<Cell> = grid.cells().filter(|c| c.x < 5).collect();
        for _ in 0..200 {
            let cell = generate_position(&grid, &occupied, &mut rng).unwrap();
            assert_eq!(cell.x, 5);
            assert!(grid.in_bounds(cell));
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let grid = Grid::new(10, 10);
        let mut rng = StdRng::seed_from_u64(1);
        let occupied: Vec<Cell> = grid.cells().filter(|c| *c != Cell::new(3, 8)).collect();
        assert_eq!(generate_position(&grid, &occupied, &mut rng), Some(Cell::new(3, 8)));
    }

    #[test]
    fn full_board_yields_nothing() {
        let grid = Grid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let occupied: Vec<Cell> = grid.cells().collect();
        assert_eq!(generate_position(&grid, &occupied, &mut rng), None);

        let mut food = Food::at(Cell::new(0, 0));
        assert!(!food.respawn(&grid, &occupied, &mut rng));
        assert_eq!(food.position(), Cell::new(0, 0));
    }

    #[test]
    fn reaches_every_free_cell() {
        let grid = Grid::new(3, 2);
        let mut rng = StdRng::seed_from_u64(42);
        let occupied = [Cell::new(0, 0)];
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(generate_position(&grid, &occupied, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), grid.area() - 1);
    }

    #[test]
    fn respawn_avoids_body() {
        let grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(3);
        let body = [Cell::new(1, 1), Cell::new(2, 1), Cell::new(3, 1)];
        let mut food = Food::spawn(&grid, &body, &mut rng).unwrap();
        for _ in 0..50 {
            assert!(food.respawn(&grid, &body, &mut rng));
            assert!(!body.contains(&food.position()));
        }
    }
}

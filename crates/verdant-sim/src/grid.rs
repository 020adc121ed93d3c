//! Defense grid: cell geometry and occupancy.
//!
//! The grid holds non-owning back-references to defender entities. Occupancy
//! is set at placement and cleared only by the cleanup system when the
//! defender despawns.

use hecs::Entity;

use verdant_core::constants::{
    ATTACKER_HEIGHT, CELL_HEIGHT, CELL_WIDTH, GRID_COLS, GRID_ROWS,
};
use verdant_core::types::{GridPos, Position};

/// Pixel-space center of a grid cell. The grid is inset half a cell from the
/// left edge and one full cell from the top.
pub fn cell_center(pos: GridPos) -> Position {
    Position::new(
        CELL_WIDTH * (pos.col as f64 + 0.5),
        CELL_HEIGHT * (pos.row as f64 + 1.5),
    )
}

/// Y coordinate an attacker walks at in a given row. Attackers sit slightly
/// above the lane center so their bodies line up with defenders.
pub fn attacker_y(row: usize) -> f64 {
    CELL_HEIGHT * (row as f64 + 1.5) - ATTACKER_HEIGHT / 2.0
}

pub fn in_bounds(row: usize, col: usize) -> bool {
    row < GRID_ROWS && col < GRID_COLS
}

#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: [[Option<Entity>; GRID_COLS]; GRID_ROWS],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn occupant(&self, pos: GridPos) -> Option<Entity> {
        self.cells
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .flatten()
    }

    pub fn occupy(&mut self, pos: GridPos, entity: Entity) {
        if in_bounds(pos.row, pos.col) {
            self.cells[pos.row][pos.col] = Some(entity);
        }
    }

    pub fn clear(&mut self, pos: GridPos) {
        if in_bounds(pos.row, pos.col) {
            self.cells[pos.row][pos.col] = None;
        }
    }

    pub fn reset(&mut self) {
        self.cells = Default::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_roundtrip() {
        let mut grid = Grid::new();
        let mut world = hecs::World::new();
        let e = world.spawn(());

        let pos = GridPos::new(2, 1);
        assert!(grid.occupant(pos).is_none());
        grid.occupy(pos, e);
        assert_eq!(grid.occupant(pos), Some(e));
        grid.clear(pos);
        assert!(grid.occupant(pos).is_none());
    }

    #[test]
    fn out_of_bounds_is_harmless() {
        let mut grid = Grid::new();
        let mut world = hecs::World::new();
        let e = world.spawn(());

        let oob = GridPos::new(GRID_ROWS, 0);
        grid.occupy(oob, e);
        assert!(grid.occupant(oob).is_none());
        grid.clear(oob);
    }

    #[test]
    fn cell_centers_are_inset() {
        let first = cell_center(GridPos::new(0, 0));
        assert!((first.x - CELL_WIDTH * 0.5).abs() < 1e-9);
        assert!((first.y - CELL_HEIGHT * 1.5).abs() < 1e-9);

        // Attacker walks half a body height above the lane center.
        assert!((attacker_y(0) - (first.y - ATTACKER_HEIGHT / 2.0)).abs() < 1e-9);
    }
}

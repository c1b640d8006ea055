use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single grid square of the play area, identified by integer coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Cell { col, row }
    }
}

/// Play-area geometry, fixed for a session's lifetime.
///
/// Cell (col, row) is anchored at origin + (col, row) * cell_size in plane
/// coordinates; snake positions are always multiples of cell_size from the
/// origin after a move.
#[derive(Clone, Debug)]
pub struct Playfield {
    pub cols: i32,
    pub rows: i32,
    pub cell_size: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl Playfield {
    pub fn new(cols: i32, rows: i32, cell_size: f32, origin_x: f32, origin_y: f32) -> Self {
        Playfield {
            cols,
            rows,
            cell_size,
            origin_x,
            origin_y,
        }
    }

    /// Plane coordinates of a cell's anchor point.
    /// Valid for out-of-field cells too (pure arithmetic, no clamping).
    pub fn cell_anchor(&self, cell: Cell) -> (f32, f32) {
        (
            self.origin_x + cell.col as f32 * self.cell_size,
            self.origin_y + cell.row as f32 * self.cell_size,
        )
    }

    /// Nearest lattice cell for a plane point
    pub fn point_to_cell(&self, x: f32, y: f32) -> Cell {
        Cell::new(
            ((x - self.origin_x) / self.cell_size).round() as i32,
            ((y - self.origin_y) / self.cell_size).round() as i32,
        )
    }

    /// Check if a cell lies inside the play area
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.cols && cell.row >= 0 && cell.row < self.rows
    }

    pub fn cell_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }
}

/// Axis-aligned hit rectangle in plane coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl HitRect {
    /// Build a rectangle centered on (cx, cy) with the given half extent
    pub fn centered(cx: f32, cy: f32, half_extent: f32) -> Self {
        HitRect {
            left: cx - half_extent,
            top: cy - half_extent,
            right: cx + half_extent,
            bottom: cy + half_extent,
        }
    }

    pub fn intersects(&self, other: &HitRect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// Snapshot partition of the play area into occupied and free cells.
///
/// Recomputed every tick from current snake geometry; it has no persistent
/// identity and callers receive owned sets.
#[derive(Clone, Debug)]
pub struct Occupancy {
    pub occupied: HashSet<Cell>,
    pub free: Vec<Cell>,
}

impl Occupancy {
    /// Build the occupied/free partition for the given snake geometry.
    /// Pure and O(cells); cells outside the field are ignored.
    pub fn recompute(playfield: &Playfield, head_cell: Cell, segment_cells: &[Cell]) -> Self {
        let mut occupied = HashSet::new();

        if playfield.contains(head_cell) {
            occupied.insert(head_cell);
        }
        for &cell in segment_cells {
            if playfield.contains(cell) {
                occupied.insert(cell);
            }
        }

        let mut free = Vec::with_capacity(playfield.cell_count() - occupied.len());
        for row in 0..playfield.rows {
            for col in 0..playfield.cols {
                let cell = Cell::new(col, row);
                if !occupied.contains(&cell) {
                    free.push(cell);
                }
            }
        }

        Occupancy { occupied, free }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_to_cell_rounds_to_nearest() {
        let field = Playfield::new(18, 18, 40.0, 0.0, 0.0);

        assert_eq!(field.point_to_cell(80.0, 120.0), Cell::new(2, 3));
        // Just off the lattice still snaps to the nearest cell
        assert_eq!(field.point_to_cell(81.5, 118.9), Cell::new(2, 3));
        assert_eq!(field.point_to_cell(-40.0, 0.0), Cell::new(-1, 0));
    }

    #[test]
    fn test_anchor_respects_origin() {
        let field = Playfield::new(18, 18, 40.0, 10.0, 20.0);

        assert_eq!(field.cell_anchor(Cell::new(0, 0)), (10.0, 20.0));
        assert_eq!(field.cell_anchor(Cell::new(3, 1)), (130.0, 60.0));
        // Round trip through the lattice
        let (x, y) = field.cell_anchor(Cell::new(7, 11));
        assert_eq!(field.point_to_cell(x, y), Cell::new(7, 11));
    }

    #[test]
    fn test_occupancy_is_a_partition() {
        let field = Playfield::new(6, 6, 40.0, 0.0, 0.0);
        let head = Cell::new(2, 2);
        let segments = vec![Cell::new(1, 2), Cell::new(0, 2), Cell::new(1, 2)];

        let occ = Occupancy::recompute(&field, head, &segments);

        // occupied and free together cover every cell exactly once
        assert_eq!(occ.occupied.len() + occ.free.len(), field.cell_count());
        for cell in &occ.free {
            assert!(!occ.occupied.contains(cell));
        }
        assert!(occ.occupied.contains(&head));
        assert!(occ.occupied.contains(&Cell::new(1, 2)));
        assert!(occ.occupied.contains(&Cell::new(0, 2)));
    }

    #[test]
    fn test_occupancy_ignores_out_of_field_head() {
        let field = Playfield::new(4, 4, 40.0, 0.0, 0.0);

        let occ = Occupancy::recompute(&field, Cell::new(-1, 2), &[]);

        assert!(occ.occupied.is_empty());
        assert_eq!(occ.free.len(), 16);
    }

    #[test]
    fn test_hit_rect_intersection() {
        let a = HitRect::centered(100.0, 100.0, 20.0);
        let b = HitRect::centered(130.0, 100.0, 20.0);
        let c = HitRect::centered(141.0, 100.0, 20.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        // Exactly touching edges do not count as an overlap
        let d = HitRect::centered(140.0, 100.0, 20.0);
        assert!(!a.intersects(&d));
    }
}

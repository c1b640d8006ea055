use crate::field::{Cell, Playfield};

/// One body segment of the chain. Each segment stores the position it must
/// move to next, written by the segment (or head) directly ahead of it, and
/// applies that target on its own update. This one-move lag is what makes
/// the chain trail the head's historical path.
#[derive(Clone, Debug)]
pub struct SnakeSegment {
    pub x: f32,
    pub y: f32,
    pending_x: f32,
    pending_y: f32,
}

impl SnakeSegment {
    /// Create a segment holding position until a target is written
    pub fn new(x: f32, y: f32) -> Self {
        SnakeSegment {
            x,
            y,
            pending_x: x,
            pending_y: y,
        }
    }

    /// Record the position this segment moves to on its next update
    pub fn set_pending(&mut self, x: f32, y: f32) {
        self.pending_x = x;
        self.pending_y = y;
    }

    /// Move to the stored target position
    pub fn apply_pending(&mut self) {
        self.x = self.pending_x;
        self.y = self.pending_y;
    }

    /// The cell this segment currently occupies
    pub fn cell(&self, playfield: &Playfield) -> Cell {
        playfield.point_to_cell(self.x, self.y)
    }
}

use crate::direction::Direction;
use crate::field::{Cell, Playfield};

/// Snake head with continuous plane position and a frame-gated movement
/// throttle. The position is snapped back onto the cell lattice after every
/// move, so it is always a whole number of cells from the field origin.
#[derive(Clone, Debug)]
pub struct SnakeHead {
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    /// Rotation used purely for rendering, in degrees (Right = 0)
    pub facing_degrees: f32,
    /// Minimum ticks between two consecutive moves (lower = faster)
    move_interval: u32,
    ticks_since_move: u32,
}

impl SnakeHead {
    pub fn new(x: f32, y: f32, direction: Direction, move_interval: u32) -> Self {
        SnakeHead {
            x,
            y,
            direction,
            facing_degrees: facing_for(direction),
            move_interval,
            ticks_since_move: 0,
        }
    }

    /// Count one elapsed tick against the movement throttle.
    /// Returns true once the interval has elapsed, resetting the counter.
    pub fn can_update(&mut self) -> bool {
        self.ticks_since_move += 1;
        if self.ticks_since_move >= self.move_interval {
            self.ticks_since_move = 0;
            true
        } else {
            false
        }
    }

    /// Step exactly one cell in the current direction and snap the result
    /// onto the lattice. Callers must gate this behind `can_update`.
    pub fn advance(&mut self, playfield: &Playfield) {
        let (dcol, drow) = self.direction.delta();
        let raw_x = self.x + dcol as f32 * playfield.cell_size;
        let raw_y = self.y + drow as f32 * playfield.cell_size;

        // Round to the nearest lattice point so float drift never accumulates
        let cell = playfield.point_to_cell(raw_x, raw_y);
        let (x, y) = playfield.cell_anchor(cell);
        self.x = x;
        self.y = y;

        self.facing_degrees = facing_for(self.direction);
    }

    /// The cell the head currently occupies
    pub fn cell(&self, playfield: &Playfield) -> Cell {
        playfield.point_to_cell(self.x, self.y)
    }
}

fn facing_for(direction: Direction) -> f32 {
    match direction {
        Direction::Right => 0.0,
        Direction::Down => 90.0,
        Direction::Left => 180.0,
        Direction::Up => 270.0,
    }
}

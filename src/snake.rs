use crate::body::SnakeSegment;
use crate::direction::Direction;
use crate::field::{Cell, HitRect, Playfield};
use crate::head::SnakeHead;

/// The snake aggregate: head, ordered segment chain (index 0 = neck), and
/// growth bookkeeping. Owned by the session driving the simulation; renderers
/// only read positions through the public fields and accessors.
#[derive(Clone, Debug)]
pub struct Snake {
    pub head: SnakeHead,
    pub segments: Vec<SnakeSegment>,
    /// Chain length the segment list converges to, one append per tick
    target_segment_count: usize,
    /// Position last vacated by the tail, used as the spawn point for
    /// newly appended segments so growth never teleports
    last_tail_x: f32,
    last_tail_y: f32,
}

impl Snake {
    /// Create a session-fresh snake at the given start cell
    pub fn new(
        playfield: &Playfield,
        start_cell: Cell,
        direction: Direction,
        move_interval: u32,
    ) -> Self {
        let (x, y) = playfield.cell_anchor(start_cell);
        Snake {
            head: SnakeHead::new(x, y, direction, move_interval),
            segments: Vec::new(),
            target_segment_count: 1,
            last_tail_x: x,
            last_tail_y: y,
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Appends at most one segment if the chain is short of its target, then
    /// moves the head if its throttle has elapsed and propagates positions
    /// down the chain. The committed direction from the input gate is applied
    /// atomically at the moment of the actual move, never between throttle
    /// ticks. Returns true if the head moved this tick.
    pub fn update(&mut self, committed: Direction, playfield: &Playfield) -> bool {
        if self.segments.len() < self.target_segment_count {
            self.segments
                .push(SnakeSegment::new(self.last_tail_x, self.last_tail_y));
        }

        if !self.head.can_update() {
            // Segments hold position too: propagation only happens
            // alongside an actual head move
            return false;
        }

        let prev = (self.head.x, self.head.y);
        self.head.direction = committed;
        self.head.advance(playfield);

        // Follow the leader: each segment's target is the position the one
        // ahead of it held before this move
        let mut vacated = prev;
        for segment in &mut self.segments {
            segment.set_pending(vacated.0, vacated.1);
            vacated = (segment.x, segment.y);
            segment.apply_pending();
        }
        self.last_tail_x = vacated.0;
        self.last_tail_y = vacated.1;

        true
    }

    /// Increase the target chain length by one (food-consumed event)
    pub fn grow(&mut self) {
        self.target_segment_count += 1;
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn target_segment_count(&self) -> usize {
        self.target_segment_count
    }

    pub fn head_cell(&self, playfield: &Playfield) -> Cell {
        self.head.cell(playfield)
    }

    pub fn segment_cells(&self, playfield: &Playfield) -> Vec<Cell> {
        self.segments.iter().map(|s| s.cell(playfield)).collect()
    }

    /// Boundary violation: the head's cell lies outside the play area
    pub fn hits_boundary(&self, playfield: &Playfield) -> bool {
        !playfield.contains(self.head_cell(playfield))
    }

    /// Self collision: the head occupies the same lattice cell as any
    /// existing segment
    pub fn hits_self(&self, playfield: &Playfield) -> bool {
        let head_cell = self.head_cell(playfield);
        self.segments
            .iter()
            .any(|s| s.cell(playfield) == head_cell)
    }

    /// Padded hit rectangle around the head, used for food overlap checks
    pub fn head_hit_rect(&self, half_extent: f32) -> HitRect {
        HitRect::centered(self.head.x, self.head.y, half_extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield::new(18, 18, 40.0, 0.0, 0.0)
    }

    #[test]
    fn test_head_moves_one_cell_per_elapsed_interval() {
        let field = field();
        let mut snake = Snake::new(&field, Cell::new(1, 2), Direction::Right, 2);

        // Interval 2: every second tick moves the head one cell right
        let mut cells = vec![snake.head_cell(&field)];
        for _ in 0..6 {
            if snake.update(Direction::Right, &field) {
                cells.push(snake.head_cell(&field));
            }
        }
        assert_eq!(
            cells,
            vec![
                Cell::new(1, 2),
                Cell::new(2, 2),
                Cell::new(3, 2),
                Cell::new(4, 2)
            ]
        );

        // Seventh tick: throttle not yet elapsed, head holds position
        assert!(!snake.update(Direction::Right, &field));
        assert_eq!(snake.head_cell(&field), Cell::new(4, 2));
    }

    #[test]
    fn test_chain_grows_one_segment_per_tick() {
        let field = field();
        let mut snake = Snake::new(&field, Cell::new(5, 5), Direction::Right, 1);
        snake.grow();
        snake.grow();
        assert_eq!(snake.target_segment_count(), 3);

        let mut previous_len = snake.len();
        for _ in 0..5 {
            snake.update(Direction::Right, &field);
            assert!(snake.len() <= snake.target_segment_count());
            assert!(snake.len() - previous_len <= 1);
            previous_len = snake.len();
        }
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_segments_trail_with_one_move_lag() {
        let field = field();
        let mut snake = Snake::new(&field, Cell::new(3, 3), Direction::Right, 1);
        snake.grow();
        snake.grow();

        // History of head cells, newest last
        let mut history = vec![snake.head_cell(&field)];
        for _ in 0..6 {
            snake.update(Direction::Right, &field);
            history.push(snake.head_cell(&field));
        }

        let cells = snake.segment_cells(&field);
        // Segment i sits where the head was i+1 moves ago
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(*cell, history[history.len() - 2 - i]);
        }
    }

    #[test]
    fn test_direction_applied_only_on_move() {
        let field = field();
        let mut snake = Snake::new(&field, Cell::new(5, 5), Direction::Right, 3);

        // The committed direction does not touch the head between moves
        assert!(!snake.update(Direction::Up, &field));
        assert_eq!(snake.head.direction, Direction::Right);
        assert!(!snake.update(Direction::Up, &field));
        assert_eq!(snake.head.direction, Direction::Right);

        assert!(snake.update(Direction::Up, &field));
        assert_eq!(snake.head.direction, Direction::Up);
        assert_eq!(snake.head_cell(&field), Cell::new(5, 4));
    }

    #[test]
    fn test_boundary_detection() {
        let field = field();
        let mut snake = Snake::new(&field, Cell::new(0, 0), Direction::Left, 1);

        assert!(!snake.hits_boundary(&field));
        snake.update(Direction::Left, &field);
        assert!(snake.hits_boundary(&field));
    }

    #[test]
    fn test_self_collision_on_tight_turn() {
        let field = field();
        let mut snake = Snake::new(&field, Cell::new(5, 5), Direction::Right, 1);
        for _ in 0..4 {
            snake.grow();
        }
        // Build up the chain while moving right
        for _ in 0..5 {
            snake.update(Direction::Right, &field);
            assert!(!snake.hits_self(&field));
        }

        // A tight loop drives the head back into the chain
        snake.update(Direction::Down, &field);
        assert!(!snake.hits_self(&field));
        snake.update(Direction::Left, &field);
        assert!(!snake.hits_self(&field));
        snake.update(Direction::Up, &field);
        assert!(snake.hits_self(&field));
    }

    #[test]
    fn test_moving_into_vacated_cell_is_safe() {
        let field = field();
        let mut snake = Snake::new(&field, Cell::new(5, 5), Direction::Right, 1);
        snake.grow();
        snake.grow();
        for _ in 0..4 {
            snake.update(Direction::Right, &field);
        }
        assert_eq!(snake.len(), 3);

        // A 2x2 loop: every move enters the cell the tail vacates on the
        // same tick, which must never count as a self collision
        for dir in [
            Direction::Down,
            Direction::Left,
            Direction::Up,
            Direction::Right,
        ] {
            snake.update(dir, &field);
            assert!(!snake.hits_self(&field));
        }
    }
}

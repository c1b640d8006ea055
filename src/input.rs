use crate::direction::Direction;

/// Gate between raw directional input and the snake's movement.
///
/// Holds the last direction the player committed to, which is distinct from
/// the head's in-flight direction: rapid taps register here immediately even
/// while the head is still waiting out its movement throttle. Requests that
/// would reverse the committed direction by 180 degrees are dropped silently,
/// which is what prevents reversing straight into the neck.
#[derive(Clone, Debug)]
pub struct DirectionGate {
    committed: Direction,
}

impl DirectionGate {
    pub fn new(initial: Direction) -> Self {
        DirectionGate { committed: initial }
    }

    pub fn committed(&self) -> Direction {
        self.committed
    }

    /// Validate and commit a turn request. Returns true if the request was
    /// accepted (callers surface this as a one-shot turn event); a rejected
    /// request leaves the gate unchanged.
    pub fn request_turn(&mut self, requested: Direction) -> bool {
        if requested.is_opposite(self.committed) {
            return false;
        }
        self.committed = requested;
        true
    }
}

use crate::config::Config;
use crate::direction::Direction;
use crate::field::{Cell, Occupancy, Playfield};
use crate::food::{Food, PlacementError};
use crate::input::DirectionGate;
use crate::snake::Snake;
use rand::rngs::ThreadRng;

/// Why a session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameOverReason {
    /// The head's cell left the play area
    WallCollision,
    /// The head landed on a body segment
    SelfCollision,
}

/// Signals surfaced from a single tick, consumed by the owning loop.
/// These replace hidden event callbacks: collision outcomes and turn
/// feedback are plain output values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickSignal {
    /// A turn request passed the direction gate
    TurnAccepted(Direction),
    /// The head overlapped the food this tick
    FoodConsumed { cell: Cell, score: u32 },
    /// Boundary or self collision; the session stops updating
    GameOver(GameOverReason),
    /// No free cell remains for food placement: the field is full,
    /// terminal but distinct from an ordinary game over
    FieldFull,
}

/// One game session: playfield, snake, food, input gate and score.
///
/// The session is the only owner of mutable simulation state. A restart is
/// a fresh `GameSession`, never a reset in place, so no stale throttle
/// counter or partial chain survives.
pub struct GameSession {
    pub playfield: Playfield,
    pub snake: Snake,
    pub food: Option<Food>,
    pub score: u32,
    gate: DirectionGate,
    finished: bool,
    place_requested: bool,
    /// Sprite half extent plus hit-box padding, shared by head and food rects
    hit_half_extent: f32,
    rng: ThreadRng,
}

impl GameSession {
    /// Build a fresh session from a validated configuration, with the
    /// initial food already placed on a free cell.
    pub fn new(config: &Config) -> Result<Self, String> {
        config.validate()?;

        let playfield = Playfield::new(
            config.field.cols,
            config.field.rows,
            config.field.cell_size,
            config.field.origin_x,
            config.field.origin_y,
        );
        let start_cell = Cell::new(config.snake.start_col, config.snake.start_row);
        let direction = Direction::from_name(&config.snake.start_direction)
            .ok_or_else(|| format!("Unknown start direction '{}'", config.snake.start_direction))?;

        let snake = Snake::new(&playfield, start_cell, direction, config.snake.move_interval);
        let hit_half_extent = config.snake.sprite_half_extent + config.snake.hitbox_padding;
        let mut rng = rand::thread_rng();

        let occupancy =
            Occupancy::recompute(&playfield, snake.head_cell(&playfield), &[]);
        let food = Food::place(&playfield, &occupancy.free, hit_half_extent, &mut rng)
            .map_err(|e| format!("Failed to place initial food: {}", e))?;

        Ok(GameSession {
            playfield,
            snake,
            food: Some(food),
            score: 0,
            gate: DirectionGate::new(direction),
            finished: false,
            place_requested: false,
            hit_half_extent,
            rng,
        })
    }

    /// Current occupied/free partition of the play area
    pub fn occupancy(&self) -> Occupancy {
        Occupancy::recompute(
            &self.playfield,
            self.snake.head_cell(&self.playfield),
            &self.snake.segment_cells(&self.playfield),
        )
    }

    /// The direction the player last committed to
    pub fn committed_direction(&self) -> Direction {
        self.gate.committed()
    }

    /// True once a terminal signal has fired; further ticks are no-ops
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Run one simulation tick.
    ///
    /// Order: input gating, snake advance (growth, throttled head move,
    /// chain propagation), collision checks, food relocation. Returns the
    /// signals raised this tick; after a terminal signal the session
    /// ignores subsequent calls.
    pub fn tick(&mut self, input: Option<Direction>) -> Vec<TickSignal> {
        let mut signals = Vec::new();
        if self.finished {
            return signals;
        }

        if let Some(requested) = input {
            if self.gate.request_turn(requested) {
                signals.push(TickSignal::TurnAccepted(requested));
            }
        }

        let moved = self.snake.update(self.gate.committed(), &self.playfield);
        if !moved {
            return signals;
        }

        if self.snake.hits_boundary(&self.playfield) {
            self.finished = true;
            signals.push(TickSignal::GameOver(GameOverReason::WallCollision));
            return signals;
        }
        if self.snake.hits_self(&self.playfield) {
            self.finished = true;
            signals.push(TickSignal::GameOver(GameOverReason::SelfCollision));
            return signals;
        }

        if let Some(food) = &self.food {
            let head_rect = self.snake.head_hit_rect(self.hit_half_extent);
            if head_rect.intersects(&food.rect) {
                self.score += 1;
                self.snake.grow();
                signals.push(TickSignal::FoodConsumed {
                    cell: food.cell,
                    score: self.score,
                });
                self.food = None;
                self.place_requested = true;
            }
        }

        // Relocation only happens on request, with the post-collision free
        // set; an exhausted field ends the session
        if self.place_requested {
            let occupancy = self.occupancy();
            match Food::place(
                &self.playfield,
                &occupancy.free,
                self.hit_half_extent,
                &mut self.rng,
            ) {
                Ok(food) => {
                    self.food = Some(food);
                    self.place_requested = false;
                }
                Err(PlacementError::NoFreeCells) => {
                    self.finished = true;
                    signals.push(TickSignal::FieldFull);
                }
            }
        }

        signals
    }
}

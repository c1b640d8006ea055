pub mod body;
pub mod config;
pub mod direction;
pub mod event_log;
pub mod field;
pub mod food;
pub mod head;
pub mod input;
pub mod session;
pub mod snake;

pub use config::Config;
pub use direction::Direction;
pub use field::{Cell, HitRect, Occupancy, Playfield};
pub use food::{Food, PlacementError};
pub use session::{GameOverReason, GameSession, TickSignal};
pub use snake::Snake;

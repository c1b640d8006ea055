use crate::direction::Direction;
use crate::field::Cell;
use crate::session::GameOverReason;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Gameplay events worth recording for later analysis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum GameEvent {
    /// A turn request passed the gate
    TurnAccepted { direction: Direction },
    /// The snake ate the food (cell it was on, score afterwards)
    FoodConsumed { cell: Cell, score: u32 },
    /// The session ended with a collision
    GameOver { reason: GameOverReason },
    /// The session ended with no free cell left for food
    FieldFull,
    /// A fresh session replaced the previous one
    SessionRestarted,
}

/// Recorded event with timestamp
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Milliseconds since the log was created
    pub timestamp_ms: u64,
    pub event: GameEvent,
}

/// In-memory gameplay event log with JSON export
pub struct EventLog {
    start_time: Instant,
    events: Vec<LoggedEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog {
            start_time: Instant::now(),
            events: Vec::new(),
        }
    }

    /// Record an event with the current timestamp
    pub fn log(&mut self, event: GameEvent) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.events.push(LoggedEvent {
            timestamp_ms,
            event,
        });
    }

    pub fn events(&self) -> &[LoggedEvent] {
        &self.events
    }

    /// Save the log to a JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&self.events)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Print the log to the console
    pub fn print(&self) {
        println!("\n=== Event Log ({} events) ===", self.events.len());
        for (i, logged) in self.events.iter().enumerate() {
            println!(
                "[{:6}ms] #{:3} {:?}",
                logged.timestamp_ms,
                i + 1,
                logged.event
            );
        }
        println!("=== End of Log ===\n");
    }

    /// Summary statistics for the recorded session(s)
    pub fn summary(&self) -> String {
        let mut turns = 0;
        let mut foods = 0;
        let mut game_overs = 0;
        let mut restarts = 0;
        let mut best_score = 0;

        for logged in &self.events {
            match &logged.event {
                GameEvent::TurnAccepted { .. } => turns += 1,
                GameEvent::FoodConsumed { score, .. } => {
                    foods += 1;
                    if *score > best_score {
                        best_score = *score;
                    }
                }
                GameEvent::GameOver { .. } | GameEvent::FieldFull => game_overs += 1,
                GameEvent::SessionRestarted => restarts += 1,
            }
        }

        let duration = self.events.last().map(|e| e.timestamp_ms).unwrap_or(0);

        format!(
            "Session Duration: {}ms\n\
             Total Events: {}\n\
             Turns Accepted: {}\n\
             Food Consumed: {} (best score: {})\n\
             Sessions Ended: {} ({} restarts)",
            duration,
            self.events.len(),
            turns,
            foods,
            best_score,
            game_overs,
            restarts
        )
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

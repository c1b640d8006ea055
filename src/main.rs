use arboard::Clipboard;
use macroquad::prelude::*;
use rustsnake::event_log::{EventLog, GameEvent};
use rustsnake::{Cell, Config, Direction, GameOverReason, GameSession, TickSignal};

/// Visualization state: the running session plus everything the driver
/// needs for drawing and logging
struct VisState {
    config: Config,
    session: GameSession,
    event_log: Option<EventLog>,
    /// Why the last session ended, for the overlay text
    ended: Option<String>,
}

impl VisState {
    fn new() -> Result<Self, String> {
        let config = Config::load();
        let session = GameSession::new(&config)?;
        let event_log = if config.logging.enable_event_log {
            Some(EventLog::new())
        } else {
            None
        };

        Ok(VisState {
            config,
            session,
            event_log,
            ended: None,
        })
    }

    /// Discard the finished session and start a fresh one
    fn restart(&mut self) -> Result<(), String> {
        self.session = GameSession::new(&self.config)?;
        self.ended = None;
        if let Some(log) = &mut self.event_log {
            log.log(GameEvent::SessionRestarted);
        }
        Ok(())
    }

    /// Sample the per-frame directional input (already edge-debounced by
    /// macroquad's is_key_pressed)
    fn sample_input() -> Option<Direction> {
        if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
            Some(Direction::Up)
        } else if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
            Some(Direction::Down)
        } else if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
            Some(Direction::Left)
        } else if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Run one simulation tick and fold its signals into log and overlay
    fn tick(&mut self, input: Option<Direction>) {
        for signal in self.session.tick(input) {
            match signal {
                TickSignal::TurnAccepted(direction) => {
                    if let Some(log) = &mut self.event_log {
                        log.log(GameEvent::TurnAccepted { direction });
                    }
                }
                TickSignal::FoodConsumed { cell, score } => {
                    if let Some(log) = &mut self.event_log {
                        log.log(GameEvent::FoodConsumed { cell, score });
                    }
                }
                TickSignal::GameOver(reason) => {
                    self.ended = Some(match reason {
                        GameOverReason::WallCollision => "Game over: hit the wall".to_string(),
                        GameOverReason::SelfCollision => "Game over: bit yourself".to_string(),
                    });
                    if let Some(log) = &mut self.event_log {
                        log.log(GameEvent::GameOver { reason });
                    }
                }
                TickSignal::FieldFull => {
                    self.ended = Some("You won: the field is full!".to_string());
                    if let Some(log) = &mut self.event_log {
                        log.log(GameEvent::FieldFull);
                    }
                }
            }
        }
    }

    /// Textual snapshot of the field: s = head, o = segment, * = food
    fn field_to_string(&self) -> String {
        let playfield = &self.session.playfield;
        let head_cell = self.session.snake.head_cell(playfield);
        let segment_cells = self.session.snake.segment_cells(playfield);
        let food_cell = self.session.food.as_ref().map(|f| f.cell);

        let mut result = String::new();
        for row in 0..playfield.rows {
            for col in 0..playfield.cols {
                let cell = Cell::new(col, row);
                let symbol = if cell == head_cell {
                    's'
                } else if segment_cells.contains(&cell) {
                    'o'
                } else if food_cell == Some(cell) {
                    '*'
                } else {
                    '□'
                };
                result.push(symbol);
            }
            result.push('\n');
        }
        result
    }

    fn copy_to_clipboard(&self) {
        let field_string = self.field_to_string();
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&field_string) {
                    println!("Failed to copy to clipboard: {}", e);
                } else {
                    println!("Field layout copied to clipboard!");
                    // Keep clipboard alive for a moment so clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                println!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn draw(&self) {
        let visual = &self.config.visual;
        clear_background(Color::from_rgba(
            visual.background_r,
            visual.background_g,
            visual.background_b,
            255,
        ));

        let playfield = &self.session.playfield;
        let size = playfield.cell_size;
        let half = size / 2.0;

        // Field background and grid lines; cell anchors are cell centers
        // for drawing purposes, so rectangles start half a cell earlier
        if visual.show_grid_lines {
            for row in 0..playfield.rows {
                for col in 0..playfield.cols {
                    let (cx, cy) = playfield.cell_anchor(Cell::new(col, row));
                    draw_rectangle(
                        cx - half,
                        cy - half,
                        size - 1.0,
                        size - 1.0,
                        Color::from_rgba(45, 45, 45, 255),
                    );
                }
            }
        }

        // Food
        if let Some(food) = &self.session.food {
            let (cx, cy) = playfield.cell_anchor(food.cell);
            draw_rectangle(cx - half * 0.6, cy - half * 0.6, half * 1.2, half * 1.2, RED);
        }

        // Segment chain, then head on top
        for segment in &self.session.snake.segments {
            draw_rectangle(
                segment.x - half * 0.8,
                segment.y - half * 0.8,
                half * 1.6,
                half * 1.6,
                Color::from_rgba(100, 200, 100, 255),
            );
        }
        let head = &self.session.snake.head;
        draw_rectangle(head.x - half * 0.9, head.y - half * 0.9, half * 1.8, half * 1.8, GREEN);

        // Facing marker on the head
        let facing = head.facing_degrees.to_radians();
        draw_circle(
            head.x + facing.cos() * half * 0.5,
            head.y + facing.sin() * half * 0.5,
            half * 0.2,
            DARKGREEN,
        );

        let info = format!(
            "Score: {}\nArrows/WASD: turn\nR: restart\nC: copy field to clipboard\nEsc: quit",
            self.session.score
        );
        draw_text(&info, 10.0, 20.0, 20.0, WHITE);

        if let Some(message) = &self.ended {
            let text = format!("{} (press R to restart)", message);
            draw_text(&text, 10.0, screen_height() / 2.0, 30.0, YELLOW);
        }
    }
}

#[macroquad::main("RustSnake")]
async fn main() {
    let mut state = match VisState::new() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to start session: {}", e);
            return;
        }
    };

    loop {
        let input = VisState::sample_input();

        if is_key_pressed(KeyCode::R) {
            if let Err(e) = state.restart() {
                eprintln!("Failed to restart session: {}", e);
                break;
            }
        }

        if is_key_pressed(KeyCode::C) {
            state.copy_to_clipboard();
        }

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        state.tick(input);
        state.draw();

        next_frame().await
    }

    if let Some(log) = &state.event_log {
        println!("{}", log.summary());
        if let Err(e) = log.save_to_file(&state.config.logging.event_log_path) {
            eprintln!("Failed to save event log: {}", e);
        } else {
            println!("Event log saved to {}", state.config.logging.event_log_path);
        }
    }
}

use crate::direction::Direction;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub snake: SnakeConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct FieldConfig {
    #[serde(default = "default_cols")]
    pub cols: i32,
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    #[serde(default)]
    pub origin_x: f32,
    #[serde(default)]
    pub origin_y: f32,
}

#[derive(Debug, Deserialize)]
pub struct SnakeConfig {
    /// Ticks between two consecutive head moves (lower = faster)
    #[serde(default = "default_move_interval")]
    pub move_interval: u32,
    #[serde(default = "default_start_col")]
    pub start_col: i32,
    #[serde(default = "default_start_row")]
    pub start_row: i32,
    #[serde(default = "default_start_direction")]
    pub start_direction: String,
    #[serde(default = "default_sprite_half_extent")]
    pub sprite_half_extent: f32,
    #[serde(default = "default_hitbox_padding")]
    pub hitbox_padding: f32,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
    #[serde(default = "default_show_grid_lines")]
    pub show_grid_lines: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_event_log: bool,
    #[serde(default = "default_event_log_path")]
    pub event_log_path: String,
}

// Default values
fn default_cols() -> i32 { 18 }
fn default_rows() -> i32 { 18 }
fn default_cell_size() -> f32 { 40.0 }
fn default_move_interval() -> u32 { 6 }
fn default_start_col() -> i32 { 1 }
fn default_start_row() -> i32 { 2 }
fn default_start_direction() -> String { "right".to_string() }
fn default_sprite_half_extent() -> f32 { 16.0 }
fn default_hitbox_padding() -> f32 { 4.0 }
fn default_bg_r() -> u8 { 30 }
fn default_bg_g() -> u8 { 30 }
fn default_bg_b() -> u8 { 30 }
fn default_show_grid_lines() -> bool { true }
fn default_event_log_path() -> String { "event_log.json".to_string() }

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            cols: default_cols(),
            rows: default_rows(),
            cell_size: default_cell_size(),
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            move_interval: default_move_interval(),
            start_col: default_start_col(),
            start_row: default_start_row(),
            start_direction: default_start_direction(),
            sprite_half_extent: default_sprite_half_extent(),
            hitbox_padding: default_hitbox_padding(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
            show_grid_lines: default_show_grid_lines(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_event_log: false,
            event_log_path: default_event_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            snake: SnakeConfig::default(),
            visual: VisualConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from config.toml");
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }

    /// Check that the configured values describe a playable session
    pub fn validate(&self) -> Result<(), String> {
        if self.field.cols < 2 || self.field.rows < 2 {
            return Err("Field must be at least 2x2 cells".to_string());
        }
        if self.field.cell_size <= 0.0 {
            return Err("Cell size must be positive".to_string());
        }
        if self.snake.move_interval == 0 {
            return Err("Move interval must be at least 1 tick".to_string());
        }
        if self.snake.start_col < 0
            || self.snake.start_col >= self.field.cols
            || self.snake.start_row < 0
            || self.snake.start_row >= self.field.rows
        {
            return Err(format!(
                "Start cell ({}, {}) lies outside the {}x{} field",
                self.snake.start_col, self.snake.start_row, self.field.cols, self.field.rows
            ));
        }
        if Direction::from_name(&self.snake.start_direction).is_none() {
            return Err(format!(
                "Unknown start direction '{}' (expected up/down/left/right)",
                self.snake.start_direction
            ));
        }
        if self.snake.sprite_half_extent <= 0.0 || self.snake.hitbox_padding < 0.0 {
            return Err("Sprite half extent must be positive and padding non-negative".to_string());
        }
        Ok(())
    }
}

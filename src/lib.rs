//! Flappy - a side-scrolling flap-and-dodge game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, scoring, screens)
//! - `renderer`: Render intents (what to draw where, never pixels)
//! - `audio`: Fire-and-forget sound effect dispatch
//! - `platform`: Input, frame pacing and the outer frame loop
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed frame rate of the simulation
    pub const GAME_FPS: u32 = 30;

    /// Logical screen dimensions
    pub const SCREEN_WIDTH: f32 = 288.0;
    pub const SCREEN_HEIGHT: f32 = 512.0;

    /// Floor sprite (wider than the screen so it can scroll)
    pub const FLOOR_WIDTH: f32 = 336.0;
    pub const FLOOR_HEIGHT: f32 = 112.0;

    /// Actor sprite
    pub const ACTOR_WIDTH: f32 = 34.0;
    pub const ACTOR_HEIGHT: f32 = 24.0;

    /// Obstacle sprite (one half of a pair)
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    pub const OBSTACLE_HEIGHT: f32 = 320.0;

    /// Wing pose per animation frame: 0 = up, 1 = mid, 2 = down
    pub const WING_SEQUENCE: [u8; 20] = [
        0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1,
    ];
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed-size step per frame
//! - Seeded RNG only
//! - Obstacle pairs kept in x order
//! - No rendering, audio or platform dependencies

pub mod actor;
pub mod collision;
pub mod obstacle;
pub mod score;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorState, FlightParams, WingPose};
pub use collision::{CollisionJudge, Impact, Rect};
pub use obstacle::{Facing, Obstacle, ObstaclePair, ObstacleTrack};
pub use score::ScoreKeeper;
pub use state::{
    ActorColor, Background, CosmeticVariant, FloorScroll, GameEvent, GamePhase, GameState,
    ObstacleColor, RunResult, Screen,
};
pub use tick::{TickInput, tick};

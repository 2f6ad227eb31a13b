//! Sprite keys and draw commands
//!
//! The core names what to draw by logical key; the asset provider maps the
//! key to an image.

use std::borrow::Cow;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{ActorColor, Background, Facing, ObstacleColor, WingPose};

/// Logical image key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKey {
    Background(Background),
    Floor,
    Actor { color: ActorColor, pose: WingPose },
    Obstacle { color: ObstacleColor, facing: Facing },
    Title,
    Ready,
    Tap,
    GameOver,
    /// Score glyph 0-9
    Digit(u8),
}

impl SpriteKey {
    /// Asset name the provider is asked for
    pub fn asset_key(&self) -> Cow<'static, str> {
        match self {
            SpriteKey::Background(Background::Day) => Cow::Borrowed("day"),
            SpriteKey::Background(Background::Night) => Cow::Borrowed("night"),
            SpriteKey::Floor => Cow::Borrowed("floor"),
            SpriteKey::Actor { color, pose } => {
                let color = match color {
                    ActorColor::Red => "red",
                    ActorColor::Blue => "blue",
                    ActorColor::Yellow => "yellow",
                };
                let pose = match pose {
                    WingPose::Up => "up",
                    WingPose::Mid => "mid",
                    WingPose::Down => "down",
                };
                Cow::Owned(format!("{color}-{pose}"))
            }
            // Both halves use one image; the upper one is drawn flipped
            SpriteKey::Obstacle { color, .. } => match color {
                ObstacleColor::Green => Cow::Borrowed("green-pipe"),
                ObstacleColor::Red => Cow::Borrowed("red-pipe"),
            },
            SpriteKey::Title => Cow::Borrowed("title"),
            SpriteKey::Ready => Cow::Borrowed("ready"),
            SpriteKey::Tap => Cow::Borrowed("tap"),
            SpriteKey::GameOver => Cow::Borrowed("game-over"),
            SpriteKey::Digit(d) => Cow::Owned((*d).min(9).to_string()),
        }
    }

    /// Drawn upside down
    pub fn is_flipped(&self) -> bool {
        matches!(
            self,
            SpriteKey::Obstacle {
                facing: Facing::Down,
                ..
            }
        )
    }
}

/// One placement request for the render sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub sprite: SpriteKey,
    /// Top-left corner in screen space
    pub pos: Vec2,
    /// Degrees counter-clockwise (0 = upright)
    pub rotation: f32,
}

impl DrawCommand {
    pub fn at(sprite: SpriteKey, pos: Vec2) -> Self {
        Self {
            sprite,
            pos,
            rotation: 0.0,
        }
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
}

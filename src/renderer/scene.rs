//! Per-frame draw list
//!
//! Turns the current `GameState` into ordered draw commands, back to front.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sprite::{DrawCommand, SpriteKey};
use crate::sim::{GameState, ObstacleTrack, Screen};

/// Sizes of HUD images the layout centers (physics sprites live in `Tuning`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteMetrics {
    pub title: Vec2,
    pub ready: Vec2,
    pub tap: Vec2,
    pub game_over: Vec2,
    pub digit: Vec2,
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        Self {
            title: Vec2::new(178.0, 48.0),
            ready: Vec2::new(184.0, 50.0),
            tap: Vec2::new(114.0, 98.0),
            game_over: Vec2::new(192.0, 42.0),
            digit: Vec2::new(24.0, 36.0),
        }
    }
}

/// Build the draw list for the current frame
pub fn compose(state: &GameState, metrics: &SpriteMetrics) -> Vec<DrawCommand> {
    let tuning = &state.tuning;
    let width = tuning.screen_width;
    let floor_y = tuning.floor_y();
    let centered = |size: Vec2, y: f32| Vec2::new((width - size.x) / 2.0, y);

    let mut cmds = Vec::with_capacity(16);
    cmds.push(DrawCommand::at(
        SpriteKey::Background(state.variant.background),
        Vec2::ZERO,
    ));
    let floor = DrawCommand::at(SpriteKey::Floor, Vec2::new(state.floor.offset, floor_y));

    let actor = state.actor();
    let actor_sprite = SpriteKey::Actor {
        color: state.variant.actor_color,
        pose: actor.wing_pose(),
    };

    match &state.screen {
        Screen::Menu { .. } => {
            // Offsets below are relative to the floor's height
            let below_floor = tuning.screen_height - floor_y;
            cmds.push(floor);
            cmds.push(DrawCommand::at(
                SpriteKey::Title,
                centered(metrics.title, below_floor / 1.5),
            ));
            cmds.push(DrawCommand::at(
                SpriteKey::Ready,
                centered(metrics.ready, below_floor / 0.63),
            ));
            cmds.push(DrawCommand::at(
                SpriteKey::Tap,
                centered(metrics.tap, below_floor / 0.45),
            ));
            cmds.push(DrawCommand::at(actor_sprite, actor.pos));
        }
        Screen::Play { track, score, .. } => {
            push_obstacles(&mut cmds, track, state);
            cmds.push(floor);
            push_score(&mut cmds, score.score(), width, tuning.screen_height, metrics);
            cmds.push(DrawCommand::at(actor_sprite, actor.pos).rotated(actor.rotation));
        }
        Screen::End { result } => {
            push_obstacles(&mut cmds, &result.track, state);
            cmds.push(floor);
            cmds.push(DrawCommand::at(
                SpriteKey::GameOver,
                Vec2::new(
                    (width - metrics.game_over.x) / 2.0,
                    (floor_y - metrics.game_over.y) / 2.0,
                ),
            ));
            cmds.push(DrawCommand::at(actor_sprite, actor.pos).rotated(actor.rotation));
            push_score(&mut cmds, result.score, width, tuning.screen_height, metrics);
        }
    }

    cmds
}

fn push_obstacles(cmds: &mut Vec<DrawCommand>, track: &ObstacleTrack, state: &GameState) {
    let color = state.variant.obstacle_color();
    for pair in track.pairs() {
        for obstacle in pair.obstacles() {
            cmds.push(DrawCommand::at(
                SpriteKey::Obstacle {
                    color,
                    facing: obstacle.facing,
                },
                obstacle.rect.min,
            ));
        }
    }
}

/// Centered row of digit glyphs near the top of the screen
fn push_score(
    cmds: &mut Vec<DrawCommand>,
    score: u32,
    width: f32,
    height: f32,
    metrics: &SpriteMetrics,
) {
    let digits = score.to_string();
    let advance = metrics.digit.x * 1.1;
    let mut x = (width - digits.len() as f32 * advance) / 2.0;
    let y = height * 0.1;

    for d in digits.bytes() {
        cmds.push(DrawCommand::at(SpriteKey::Digit(d - b'0'), Vec2::new(x, y)));
        x += advance;
    }
}

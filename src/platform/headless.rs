//! Headless collaborators
//!
//! Stand-ins for a window, speakers and a player so the core can run (and
//! be tested) without any display or audio device.

use super::{FrameInput, InputSource};
use crate::audio::AudioSink;
use crate::renderer::{DrawCommand, RenderSink};
use crate::sim::{ActorState, GameState, Screen};

/// Plays back a fixed list of inputs, then quits
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    frames: std::vec::IntoIter<FrameInput>,
}

impl ScriptedInput {
    pub fn new(frames: Vec<FrameInput>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> FrameInput {
        self.frames.next().unwrap_or(FrameInput::QUIT)
    }
}

/// Simple automatic player for demos
///
/// Waits a moment on each menu and end screen, and during a run flaps
/// whenever the actor sinks near the bottom of the next gap.
#[derive(Debug, Clone)]
pub struct Autopilot {
    frames_left: u64,
    /// Frames spent on the current menu/end screen
    idle_frames: u32,
}

impl Autopilot {
    /// Frames to linger on menu and end screens before activating
    const LINGER: u32 = 20;
    /// How far above the gap bottom the actor's feet are kept
    const MARGIN: f32 = 20.0;

    pub fn new(frame_budget: u64) -> Self {
        Self {
            frames_left: frame_budget,
            idle_frames: 0,
        }
    }

    fn linger(&mut self) -> bool {
        self.idle_frames += 1;
        if self.idle_frames >= Self::LINGER {
            self.idle_frames = 0;
            true
        } else {
            false
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> FrameInput {
        if self.frames_left == 0 {
            return FrameInput::QUIT;
        }
        self.frames_left -= 1;

        let activate = match &state.screen {
            Screen::Menu { .. } => self.linger(),
            Screen::Play { actor, track, .. } => {
                let target = track
                    .pairs()
                    .iter()
                    .find(|p| p.right() >= actor.left())
                    .map(|p| p.gap_bottom() - Self::MARGIN)
                    .unwrap_or(state.tuning.floor_y() / 2.0);
                actor.pos.y + actor.size.y > target && actor.vel_y >= 0.0
            }
            Screen::End { result } => {
                result.actor.state == ActorState::Grounded && self.linger()
            }
        };

        FrameInput {
            quit: false,
            activate,
        }
    }
}

/// Render sink that only counts and traces draw calls
#[derive(Debug, Default)]
pub struct LogRenderSink {
    frames: u64,
    draws: usize,
}

impl LogRenderSink {
    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogRenderSink {
    fn draw(&mut self, cmd: &DrawCommand) {
        self.draws += 1;
        log::trace!(
            "draw {} at ({:.1}, {:.1}) rot {}",
            cmd.sprite.asset_key(),
            cmd.pos.x,
            cmd.pos.y,
            cmd.rotation
        );
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!("present frame {} ({} draws)", self.frames, self.draws);
        self.draws = 0;
    }
}

/// Audio sink that logs each sound instead of playing it
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudioSink;

impl AudioSink for LogAudioSink {
    fn play(&mut self, key: &'static str, volume: f32) {
        log::debug!("sound {key} (volume {volume:.2})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use crate::tuning::Tuning;

    #[test]
    fn test_autopilot_leaves_menu_after_linger() {
        let state = GameState::new(Tuning::default(), 1);
        let mut pilot = Autopilot::new(100);
        let presses: Vec<bool> = (0..20).map(|_| pilot.poll(&state).activate).collect();
        assert_eq!(presses.iter().filter(|p| **p).count(), 1);
        assert!(presses[19]);
        assert_eq!(state.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_autopilot_quits_when_budget_spent() {
        let state = GameState::new(Tuning::default(), 1);
        let mut pilot = Autopilot::new(2);
        assert!(!pilot.poll(&state).quit);
        assert!(!pilot.poll(&state).quit);
        assert_eq!(pilot.poll(&state), FrameInput::QUIT);
    }

    #[test]
    fn test_scripted_input_then_quit() {
        let state = GameState::new(Tuning::default(), 1);
        let press = FrameInput {
            quit: false,
            activate: true,
        };
        let mut input = ScriptedInput::new(vec![press]);
        assert_eq!(input.poll(&state), press);
        assert_eq!(input.poll(&state), FrameInput::QUIT);
    }
}

//! Platform abstraction layer
//!
//! Everything outside the simulation that a frame touches:
//! - Input sampling (one quit flag and one activate flag per frame)
//! - Fixed-rate frame pacing
//! - The outer frame loop that dispatches to the sim, audio and renderer

pub mod headless;

use std::time::{Duration, Instant};

use crate::audio::AudioManager;
use crate::renderer::{RenderSink, SpriteMetrics, compose};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Input sampled for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Stop the process now
    pub quit: bool,
    /// Any activation (tap, click, key) happened this frame
    pub activate: bool,
}

impl FrameInput {
    pub const QUIT: Self = Self {
        quit: true,
        activate: false,
    };
}

/// Source of per-frame input
pub trait InputSource {
    /// Sample input for the coming frame. The state is visible so scripted
    /// or automated players can react to it.
    fn poll(&mut self, state: &GameState) -> FrameInput;
}

/// Paces the loop to a frame period
pub trait FramePacer {
    fn wait(&mut self);
}

/// Sleeps out the rest of each fixed frame period
#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    next_deadline: Instant,
}

impl FrameClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_deadline: Instant::now() + period,
        }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / fps.max(1) as f64))
    }
}

impl FramePacer for FrameClock {
    fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next_deadline {
            std::thread::sleep(self.next_deadline - now);
            self.next_deadline += self.period;
        } else {
            // Running behind: don't try to catch up with a burst of frames
            self.next_deadline = now + self.period;
        }
    }
}

/// No pacing at all (tests, fast replays)
#[derive(Debug, Default, Clone, Copy)]
pub struct Unpaced;

impl FramePacer for Unpaced {
    fn wait(&mut self) {}
}

/// What happened during one process session (in memory only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub runs: u32,
    pub best_score: u32,
    pub last_score: Option<u32>,
}

impl SessionStats {
    fn record(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::RunStarted { run } => self.runs = run,
            GameEvent::Died { score } => {
                self.best_score = self.best_score.max(score);
                self.last_score = Some(score);
            }
            _ => {}
        }
    }
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    metrics: SpriteMetrics,
    audio: AudioManager,
    stats: SessionStats,
}

impl Game {
    pub fn new(settings: &Settings, seed: u64, audio: AudioManager) -> Self {
        Self {
            state: GameState::new(settings.tuning.clone(), seed),
            metrics: settings.sprites,
            audio,
            stats: SessionStats::default(),
        }
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Process one frame. Returns false when the frame asked to quit.
    pub fn frame(&mut self, input: FrameInput, render: &mut dyn RenderSink) -> bool {
        if input.quit {
            log::info!("Quit requested after {} frames", self.stats.frames);
            return false;
        }

        tick(
            &mut self.state,
            &TickInput {
                activate: input.activate,
            },
        );
        self.stats.frames += 1;

        for event in self.state.drain_events() {
            self.stats.record(&event);
            self.audio.handle_event(&event);
        }

        render.submit(&compose(&self.state, &self.metrics));
        true
    }

    /// Run frames until the input source asks to quit
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        render: &mut dyn RenderSink,
        pacer: &mut dyn FramePacer,
    ) -> SessionStats {
        loop {
            let frame_input = input.poll(&self.state);
            if !self.frame(frame_input, render) {
                break;
            }
            pacer.wait();
        }
        self.stats
    }
}

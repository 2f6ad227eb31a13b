//! Flappy entry point
//!
//! Runs the game headless: an autopilot plays at the fixed frame rate,
//! draw calls are traced and sounds are logged. Set `RUST_LOG=debug` (or
//! `trace` for every draw call) to watch it.

use flappy::Settings;
use flappy::audio::AudioManager;
use flappy::platform::headless::{Autopilot, LogAudioSink, LogRenderSink};
use flappy::platform::{FrameClock, Game};

fn main() {
    env_logger::init();
    log::info!("Flappy (headless) starting...");

    let settings = Settings::load();
    let seed = settings.seed_or_now();
    log::info!(
        "Seed {seed}, {} fps, {} demo frames",
        settings.fps,
        settings.demo_frames
    );

    let audio = AudioManager::from_settings(Box::new(LogAudioSink), &settings);
    let mut game = Game::new(&settings, seed, audio);
    let mut input = Autopilot::new(settings.demo_frames);
    let mut render = LogRenderSink::default();
    let mut clock = FrameClock::from_fps(settings.fps);

    let stats = game.run(&mut input, &mut render, &mut clock);

    if let Some(result) = game.state.run_result() {
        match serde_json::to_string(result) {
            Ok(json) => log::debug!("Last run result: {json}"),
            Err(e) => log::warn!("Could not serialize run result: {e}"),
        }
    }

    log::info!(
        "Session over (seed {}): {} frames, {} runs, best score {}",
        game.state.seed,
        stats.frames,
        stats.runs,
        stats.best_score
    );
}

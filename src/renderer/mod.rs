//! Render intent module
//!
//! The core decides what to draw and where; a `RenderSink` owns the pixels.

pub mod scene;
pub mod sprite;

pub use scene::{SpriteMetrics, compose};
pub use sprite::{DrawCommand, SpriteKey};

/// Receives one frame of draw commands, then a present call
pub trait RenderSink {
    fn draw(&mut self, cmd: &DrawCommand);

    fn present(&mut self);

    /// Draw a whole frame in order and present it
    fn submit(&mut self, cmds: &[DrawCommand]) {
        for cmd in cmds {
            self.draw(cmd);
        }
        self.present();
    }
}

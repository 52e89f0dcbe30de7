//! Application shell: frame clock and the winit window wrapper that feeds
//! events into the walker.

pub mod frame;
pub mod window;

pub use frame::FrameClock;
pub use window::{FrameHooks, ShellError, run};

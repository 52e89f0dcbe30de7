//! Input abstraction for the walker: raw key events, the action keymap,
//! movement intent flags, and mouse-look accumulation.

pub mod intent;
pub mod keyboard;
pub mod keymap;
pub mod mouse;

pub use intent::MoveIntent;
pub use keyboard::RawKeyEvent;
pub use keymap::{KeyMap, WalkerAction};
pub use mouse::MouseLook;

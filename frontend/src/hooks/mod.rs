pub mod use_dark_mode;
pub mod use_sound;
pub mod use_wheel_game;

pub use use_dark_mode::*;
pub use use_sound::*;
pub use use_wheel_game::*;

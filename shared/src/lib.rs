pub mod constants;
pub mod error;
pub mod name_list;
pub mod shared_wheel_game;
pub mod validation;
pub mod wheel_layout;
pub mod wheel_selection;
pub mod wheel_spin;
pub mod wheel_view;

pub use error::WheelError;
pub use shared_wheel_game::WheelGame;

use shared::wheel_layout::WheelGeometry;
use web_sys::window;

pub const SPIN_SOUND_PATH: &str = "/audio/spin-sound.mp3";
pub const WIN_SOUND_PATH: &str = "/audio/spin-winner.mp3";

pub fn get_asset_base_url() -> String {
    // Assets are served next to the page, wherever it is hosted
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    // Relative URLs when there is no location (tests, prerendering)
    "".to_string()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_asset_base_url(), path)
    }
}

pub fn wheel_geometry() -> WheelGeometry {
    WheelGeometry::default()
}

pub const WHEEL_COLORS: [&str; 12] = [
    "#FF6B6B",
    "#4ECDC4",
    "#45B7D1",
    "#96CEB4",
    "#FFEEAD",
    "#D4A5A5",
    "#9B5DE5",
    "#F15BB5",
    "#00BBF9",
    "#00F5D4",
    "#FEE440",
    "#9B5DE5",
];

pub const WHEEL_RADIUS: f64 = 150.0;
pub const WHEEL_CENTER: f64 = WHEEL_RADIUS + 50.0;
pub const WHEEL_VIEWBOX: f64 = (WHEEL_CENTER + 50.0) * 2.0;
pub const LABEL_RADIUS_RATIO: f64 = 0.75;

pub const SPIN_DURATION_MS: u32 = 3000;  // Duration of spin animation in milliseconds
pub const MIN_SPINS: u32 = 5;            // Minimum number of full rotations
pub const MAX_SPINS: u32 = 8;            // Maximum number of full rotations
pub const SECTOR_MARGIN: f64 = 0.1;      // Fraction of a sector kept clear of its edges at rest

pub const MAX_NAME_LENGTH: usize = 40;

pub const EMPTY_NAME_ERROR: &str = "Please enter a name";
pub const NAME_TOO_LONG_ERROR: &str = "Names can be at most 40 characters long";
pub const DUPLICATE_NAME_ERROR: &str = "That name is already on the wheel";
pub const SPIN_IN_PROGRESS_ERROR: &str = "Wait for the wheel to stop spinning";

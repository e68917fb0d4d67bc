//! Configuration and settings for chartboard.

mod layout;
mod settings;

pub use layout::{load_layout, LayoutConfig, MountLayout};
pub use settings::{
    get_output_dir,
    API_URL_ENV,
    BAR_MOUNT,
    CATEGORIES_PATH,
    DEFAULT_API_URL,
    DEFAULT_MOUNT_HEIGHT,
    DEFAULT_MOUNT_WIDTH,
    DOUGHNUT_MOUNT,
    LINE_MOUNT,
    MOUNT_IDS,
    PIE_MOUNT,
    POLAR_MOUNT,
    RADAR_MOUNT,
    RECORDS_PATH,
};

//! Application settings and path constants.

use std::path::PathBuf;


/// Default base URL of the data API.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "CHARTBOARD_API_URL";

/// API endpoints, relative to the base URL.
pub const CATEGORIES_PATH: &str = "/api/categories";
pub const RECORDS_PATH: &str = "/api/records";

/// Mount point ids, one per chart.
pub const BAR_MOUNT: &str = "chart-category-bar";
pub const LINE_MOUNT: &str = "chart-value-line";
pub const PIE_MOUNT: &str = "chart-category-pie";
pub const DOUGHNUT_MOUNT: &str = "chart-location-doughnut";
pub const POLAR_MOUNT: &str = "chart-location-polar";
pub const RADAR_MOUNT: &str = "chart-value-radar";

/// Every mount id in dashboard order.
pub const MOUNT_IDS: [&str; 6] = [
    BAR_MOUNT,
    LINE_MOUNT,
    PIE_MOUNT,
    DOUGHNUT_MOUNT,
    POLAR_MOUNT,
    RADAR_MOUNT,
];

/// Layout box for mounts not sized by a layout file.
pub const DEFAULT_MOUNT_WIDTH: f64 = 480.0;
pub const DEFAULT_MOUNT_HEIGHT: f64 = 320.0;


/// Get the default directory for exported charts.
pub fn get_output_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".chartboard")
        .join("output")
}

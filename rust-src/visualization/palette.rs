//! Shared chart colors.

/// Category colors, cycled by index.
pub const PALETTE: [&str; 10] = [
    "#f97316",
    "#fb7185",
    "#22c55e",
    "#38bdf8",
    "#8b5cf6",
    "#facc15",
    "#14b8a6",
    "#ef4444",
    "#0ea5e9",
    "#a855f7",
];

// Surface and axis colors
pub const TEXT_COLOR: &str = "#475569";
pub const MUTED_TEXT: &str = "#64748b";
pub const AXIS_DOMAIN: &str = "#cbd5f5";
pub const GRID_LINE: &str = "#e2e8f0";
pub const SLICE_STROKE: &str = "#ffffff";

// Line chart accent
pub const ACCENT: &str = "#f97316";
pub const ACCENT_AREA: &str = "rgba(249, 115, 22, 0.18)";

// Radar series
pub const MIN_SERIES_STROKE: &str = "#10b981";
pub const MIN_SERIES_FILL: &str = "rgba(16, 185, 129, 0.18)";
pub const MAX_SERIES_STROKE: &str = "#f97316";
pub const MAX_SERIES_FILL: &str = "rgba(249, 115, 22, 0.16)";

// Tooltip
pub const TOOLTIP_BACKGROUND: &str = "rgba(15, 23, 42, 0.95)";
pub const TOOLTIP_TEXT: &str = "#f8fafc";


/// Palette color for a category position.
///
/// Colors follow position, not category identity, so inserting a category
/// shifts the colors of every category after it.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

//! Chart rendering: palette, scene, scales, tooltip, renderers and export.

pub mod charts;
pub mod export;
pub mod geometry;
pub mod palette;
pub mod scale;
pub mod scene;
pub mod tooltip;

pub use charts::{
    render_bar_chart, render_line_chart, render_pie_chart, render_polar_area_chart, render_radar_chart,
    ChartDatum, RadarData, RadarSeries, DOUGHNUT_INNER_RATIO,
};
pub use export::{export_html, export_pngs, export_svgs, mount_svg, open_file, HTML_FILE_NAME};
pub use geometry::{Point, Size};
pub use scene::Mount;
pub use tooltip::{PointerEvent, Tooltip};

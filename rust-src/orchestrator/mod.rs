//! Render orchestration: projections, the dashboard and the session trigger.

mod dashboard;
mod projection;
mod session;

pub use dashboard::Dashboard;
pub use projection::{radar_tooltip, summary_tooltip, ChartProjections, MAX_SERIES_NAME, MIN_SERIES_NAME};
pub use session::{DataOrigin, RenderGate, Session, SessionOutcome};

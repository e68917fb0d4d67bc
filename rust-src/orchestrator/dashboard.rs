//! The six-chart dashboard: mount points plus the shared tooltip.

use crate::aggregation::{aggregate, CategorySummary};
use crate::config::{
    LayoutConfig, BAR_MOUNT, DOUGHNUT_MOUNT, LINE_MOUNT, PIE_MOUNT, POLAR_MOUNT, RADAR_MOUNT,
};
use crate::models::{Category, ChartPayload, Record};
use crate::visualization::{
    render_bar_chart, render_line_chart, render_pie_chart, render_polar_area_chart, render_radar_chart,
    Mount, Point, PointerEvent, Size, Tooltip, DOUGHNUT_INNER_RATIO,
};

use super::projection::ChartProjections;


/// Owns the mount points and the one tooltip every chart shares.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    mounts: Vec<Mount>,
    tooltip: Tooltip,
    passes: usize,
}


impl Dashboard {
    pub fn new(layout: &LayoutConfig) -> Self {
        let mounts = layout
            .mounts
            .iter()
            .map(|m| Mount::new(m.id.as_str(), Size::new(m.width, m.height)))
            .collect();
        Self::with_mounts(mounts)
    }

    pub fn with_mounts(mounts: Vec<Mount>) -> Self {
        Self {
            mounts,
            tooltip: Tooltip::new(),
            passes: 0,
        }
    }

    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    pub fn mount(&self, id: &str) -> Option<&Mount> {
        self.mounts.iter().find(|m| m.id() == id)
    }

    pub fn mount_mut(&mut self, id: &str) -> Option<&mut Mount> {
        self.mounts.iter_mut().find(|m| m.id() == id)
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Number of completed render passes.
    pub fn render_count(&self) -> usize {
        self.passes
    }

    /// Run one full render pass and return the summary it was drawn from.
    pub fn render(&mut self, categories: &[Category], records: &[Record]) -> Vec<CategorySummary> {
        let summary = aggregate(categories, records);
        let projections = ChartProjections::from_summary(&summary);

        // Elements under the pointer are about to be replaced.
        self.tooltip.hide();

        render_bar_chart(self.target(BAR_MOUNT), &projections.bar);
        render_line_chart(self.target(LINE_MOUNT), &projections.line);
        render_pie_chart(self.target(PIE_MOUNT), &projections.pie, 0.0);
        render_pie_chart(self.target(DOUGHNUT_MOUNT), &projections.doughnut, DOUGHNUT_INNER_RATIO);
        render_polar_area_chart(self.target(POLAR_MOUNT), &projections.polar);
        render_radar_chart(self.target(RADAR_MOUNT), &projections.radar);

        self.passes += 1;
        log::info!(
            "Rendered {} categories from {} records (pass {})",
            summary.len(),
            records.len(),
            self.passes
        );
        summary
    }

    pub fn render_payload(&mut self, payload: &ChartPayload) -> Vec<CategorySummary> {
        self.render(&payload.categories, &payload.records)
    }

    pub fn pointer_enter(&mut self, mount_id: &str, target: usize, pointer: Point) -> bool {
        self.pointer(mount_id, target, PointerEvent::Enter(pointer))
    }

    pub fn pointer_move(&mut self, mount_id: &str, target: usize, pointer: Point) -> bool {
        self.pointer(mount_id, target, PointerEvent::Move(pointer))
    }

    pub fn pointer_leave(&mut self, mount_id: &str, target: usize) -> bool {
        self.pointer(mount_id, target, PointerEvent::Leave)
    }

    fn pointer(&mut self, mount_id: &str, target: usize, event: PointerEvent) -> bool {
        match self.mounts.iter_mut().find(|m| m.id() == mount_id) {
            Some(mount) => mount.dispatch(target, event, &mut self.tooltip),
            None => false,
        }
    }

    fn target(&mut self, id: &str) -> Option<&mut Mount> {
        let mount = self.mounts.iter_mut().find(|m| m.id() == id);
        if mount.is_none() {
            log::debug!("Mount point '{id}' not found; skipping its chart");
        }
        mount
    }
}

//! Waypoint list editing with linear undo/redo history.
//!
//! Every completed edit commits a full copy of the waypoint list as a new
//! history entry; committing after an undo discards the redo branch. An
//! in-progress drag works on a draft copy so intermediate pointer moves do
//! not flood the history; the draft is committed as a single entry on
//! release.

use glam::DVec2;

use gcs_core::mission::MissionPlan;
use gcs_core::types::GeoCoordinate;

use crate::map::MapBounds;

/// An active waypoint drag: the index being moved and the draft list the
/// pointer is editing.
#[derive(Debug, Clone)]
struct DragState {
    index: usize,
    draft: Vec<GeoCoordinate>,
}

/// The mission plan editor.
#[derive(Debug, Clone)]
pub struct PlanEditor {
    history: Vec<Vec<GeoCoordinate>>,
    cursor: usize,
    drag: Option<DragState>,
    bounds: MapBounds,
}

impl Default for PlanEditor {
    fn default() -> Self {
        Self::new(MapBounds::default())
    }
}

impl PlanEditor {
    /// Create an editor over the given map bounds, with one empty state.
    pub fn new(bounds: MapBounds) -> Self {
        Self {
            history: vec![Vec::new()],
            cursor: 0,
            drag: None,
            bounds,
        }
    }

    /// The currently visible waypoint list: the drag draft while a drag is
    /// in progress, otherwise the history entry at the cursor.
    pub fn waypoints(&self) -> &[GeoCoordinate] {
        match &self.drag {
            Some(drag) => &drag.draft,
            None => &self.history[self.cursor],
        }
    }

    pub fn bounds(&self) -> &MapBounds {
        &self.bounds
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Append a waypoint at the clicked screen position. Ignored while a
    /// drag is in progress.
    pub fn place_waypoint(&mut self, point: DVec2, viewport: DVec2) {
        if self.drag.is_some() {
            return;
        }
        let coord = self.bounds.screen_to_geo(point, viewport);
        let mut next = self.history[self.cursor].clone();
        next.push(coord);
        self.commit(next);
    }

    /// Start dragging the waypoint at `index`. Out-of-range indices are
    /// ignored.
    pub fn begin_drag(&mut self, index: usize) {
        if self.drag.is_some() || index >= self.history[self.cursor].len() {
            return;
        }
        self.drag = Some(DragState {
            index,
            draft: self.history[self.cursor].clone(),
        });
    }

    /// Move the dragged waypoint to the pointer position. Only the draft is
    /// touched; no history entry is created.
    pub fn drag_move(&mut self, point: DVec2, viewport: DVec2) {
        let coord = self.bounds.screen_to_geo(point, viewport);
        if let Some(drag) = &mut self.drag {
            drag.draft[drag.index] = coord;
        }
    }

    /// Finish the drag, committing the draft as exactly one history entry.
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.commit(drag.draft);
        }
    }

    /// Step the cursor back one entry. No-op at the start of history or
    /// during a drag.
    pub fn undo(&mut self) {
        if self.drag.is_none() && self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Step the cursor forward one entry. No-op at the end of history or
    /// during a drag.
    pub fn redo(&mut self) {
        if self.drag.is_none() && self.cursor + 1 < self.history.len() {
            self.cursor += 1;
        }
    }

    /// Commit an empty list. No-op when the visible list is already empty.
    pub fn clear(&mut self) {
        if self.drag.is_none() && !self.history[self.cursor].is_empty() {
            self.commit(Vec::new());
        }
    }

    /// Replace the whole history with a loaded plan's waypoints.
    pub fn load_plan(&mut self, plan: &MissionPlan) {
        self.history = vec![plan.waypoints.clone()];
        self.cursor = 0;
        self.drag = None;
    }

    /// Build an immutable plan from the current state. History is not
    /// touched.
    pub fn assemble_plan(&self, name: &str, altitude: u32, speed: u32) -> MissionPlan {
        MissionPlan {
            id: None,
            name: name.to_string(),
            waypoints: self.waypoints().to_vec(),
            altitude,
            speed,
        }
    }

    /// Truncate the redo branch and append a new entry at the cursor.
    fn commit(&mut self, next: Vec<GeoCoordinate>) {
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;
    }
}

//! Pre-flight checklist and the launch gate.
//!
//! The gate is a boundary rule on the launch action, not an editor
//! invariant: a plan needs at least two waypoints and every checklist item
//! acknowledged.

use serde::{Deserialize, Serialize};

use gcs_core::constants::MIN_LAUNCH_WAYPOINTS;

use crate::editor::PlanEditor;

/// One acknowledgeable checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
}

/// The pre-flight checklist shown in the mission setup view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreflightChecklist {
    items: Vec<ChecklistItem>,
}

impl Default for PreflightChecklist {
    fn default() -> Self {
        let items = [
            ("battery", "Battery Charged & Secure"),
            ("props", "Propellers Secure"),
            ("gps", "GPS Lock Acquired"),
            ("weather", "Weather Conditions Checked"),
        ];
        Self {
            items: items
                .into_iter()
                .map(|(id, text)| ChecklistItem {
                    id: id.to_string(),
                    text: text.to_string(),
                    checked: false,
                })
                .collect(),
        }
    }
}

impl PreflightChecklist {
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Flip the item with the given id. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.checked = !item.checked;
        }
    }

    /// Acknowledge every item at once.
    pub fn check_all(&mut self) {
        for item in &mut self.items {
            item.checked = true;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|item| item.checked)
    }
}

/// Whether the launch action is permitted for the current editor state.
pub fn can_launch(editor: &PlanEditor, checklist: &PreflightChecklist) -> bool {
    editor.waypoints().len() >= MIN_LAUNCH_WAYPOINTS && checklist.is_complete()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    const VIEWPORT: DVec2 = DVec2::new(800.0, 600.0);

    #[test]
    fn fresh_checklist_incomplete() {
        let checklist = PreflightChecklist::default();
        assert_eq!(checklist.items().len(), 4);
        assert!(!checklist.is_complete());
    }

    #[test]
    fn toggle_and_check_all() {
        let mut checklist = PreflightChecklist::default();
        checklist.toggle("battery");
        assert!(checklist.items()[0].checked);
        checklist.toggle("battery");
        assert!(!checklist.items()[0].checked);
        checklist.toggle("unknown");
        assert!(!checklist.is_complete());

        checklist.check_all();
        assert!(checklist.is_complete());
    }

    #[test]
    fn launch_needs_two_waypoints_and_full_checklist() {
        let mut editor = PlanEditor::default();
        let mut checklist = PreflightChecklist::default();
        assert!(!can_launch(&editor, &checklist));

        checklist.check_all();
        assert!(!can_launch(&editor, &checklist));

        editor.place_waypoint(DVec2::new(100.0, 100.0), VIEWPORT);
        assert!(!can_launch(&editor, &checklist));

        editor.place_waypoint(DVec2::new(200.0, 200.0), VIEWPORT);
        assert!(can_launch(&editor, &checklist));
    }
}

//! Mission plan editor: waypoint placement on a bounded map projection,
//! undo/redo history with drag support, and pre-flight launch gating.

pub mod checklist;
pub mod editor;
pub mod map;

pub use editor::PlanEditor;
pub use gcs_core as core;

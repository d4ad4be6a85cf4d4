//! brickify: a desktop editor shell for composable brick models.
//!
//! The interesting part is the viewport camera. A [`CameraPose`] holds the
//! camera's distance along its view axis and three accumulated axis angles;
//! a [`ViewportController`] turns pointer and wheel input into pose changes:
//!
//! - secondary-button drag orbits (vertical motion pitches about X,
//!   horizontal motion yaws about Y, half a degree per pixel)
//! - wheel away zooms out by 10%, wheel toward zooms in by 10%
//! - [`ViewportController::reset_camera`] restores the canonical view
//!
//! ```
//! use brickify::{Axis, PointerButton, ViewportController, ViewportEvent};
//!
//! let mut viewport = ViewportController::new();
//! viewport.handle_event(ViewportEvent::Pressed {
//!     button: PointerButton::Secondary,
//!     x: 100.0,
//!     y: 100.0,
//! });
//! viewport.handle_event(ViewportEvent::Moved { x: 120.0, y: 100.0 });
//! assert_eq!(viewport.pose().angle_of(Axis::Y), 55.0);
//! ```
//!
//! The part catalog, project files, history and export live behind the
//! [`Editor`] shell and its collaborators.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod app;
pub mod editor;
pub mod init;
pub mod viewport;

pub use app::{run_app, App};
pub use editor::{Editor, EditorAction};
pub use init::{create_editor, init_logging, run};
pub use viewport::{DragAnchor, PointerButton, ViewportController, ViewportEvent};

// Re-export core types
pub use brickify_catalog::{HttpCatalog, PartCatalog, PartService};
pub use brickify_core::{
    error::{BrickifyError, Result},
    options::Options,
    part::Part,
    pose::{Axis, AxisRotation, CameraPose, PoseSnapshot},
};
pub use brickify_render::{CameraUniforms, ViewCamera};

//! Core types for brickify.
//!
//! This crate provides the state shared by the editor's crates:
//! - [`CameraPose`], the viewport camera's distance and axis rotations
//! - [`Part`], the catalog record served by the backend
//! - [`Options`], application configuration
//! - [`BrickifyError`] and the crate [`Result`] alias

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod options;
pub mod part;
pub mod pose;

pub use error::{BrickifyError, Result};
pub use options::Options;
pub use part::Part;
pub use pose::{Axis, AxisRotation, CameraPose, PoseSnapshot};

// Re-export glam types for convenience
pub use glam::{DMat4, DVec3, Mat4, Vec3};

//! Render-side camera math for brickify.
//!
//! This crate turns a [`brickify_core::PoseSnapshot`] into the matrices a
//! renderer consumes:
//! - [`camera_transform`] composes the pose (translation, then X, Y, Z rotations)
//! - [`ViewCamera`] adds the lens: field of view, aspect ratio and clip planes
//! - [`CameraUniforms`] is the GPU-ready packing of both

pub mod camera;

pub use camera::{camera_position, camera_transform, CameraUniforms, ViewCamera};

//! Viewport input controller: pointer and wheel events to camera pose changes.
//!
//! Secondary-button drags orbit the camera, the wheel zooms. Vertical pointer
//! movement drives the X (pitch) rotation and horizontal movement drives the
//! Y (yaw) rotation.
//!
//! Every move during a drag is measured against the point where the drag
//! started, and the resulting rotation is added to the current angles. Two
//! moves of 10 px each therefore add 5° and then 10°, not 5° twice.

use brickify_core::pose::{DRAG_DEGREES_PER_PIXEL, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use brickify_core::{Axis, CameraPose};

/// Pointer button identity, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button; selection and editing, ignored here.
    Primary,
    /// Right button; rotates the camera.
    Secondary,
    Middle,
    Other,
}

/// A raw input event addressed to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// A button went down at the given screen position.
    Pressed { button: PointerButton, x: f64, y: f64 },
    /// A button went up.
    Released { button: PointerButton },
    /// The pointer moved to the given screen position.
    Moved { x: f64, y: f64 },
    /// The wheel turned; positive means away from the user.
    Scrolled { delta_y: f64 },
}

/// Pointer position and angles captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub screen_x: f64,
    pub screen_y: f64,
    pub start_angle_x: f64,
    pub start_angle_y: f64,
}

/// Owns one viewport's camera pose and the drag state that drives it.
#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    pose: CameraPose,
    anchor: Option<DragAnchor>,
    secondary_down: bool,
}

impl ViewportController {
    /// Creates a controller with the camera in its canonical view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one input event.
    pub fn handle_event(&mut self, event: ViewportEvent) {
        match event {
            ViewportEvent::Scrolled { delta_y } => self.scroll(delta_y),
            ViewportEvent::Pressed {
                button: PointerButton::Secondary,
                x,
                y,
            } => self.begin_drag(x, y),
            ViewportEvent::Released {
                button: PointerButton::Secondary,
            } => self.end_drag(),
            ViewportEvent::Moved { x, y } => self.drag_to(x, y),
            ViewportEvent::Pressed { .. } | ViewportEvent::Released { .. } => {}
        }
    }

    /// Zooms out for positive deltas, in otherwise.
    pub fn scroll(&mut self, delta_y: f64) {
        let factor = if delta_y > 0.0 {
            ZOOM_OUT_FACTOR
        } else {
            ZOOM_IN_FACTOR
        };
        self.pose.zoom(factor);
    }

    /// Starts a rotate drag at screen position `(x, y)`.
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.anchor = Some(DragAnchor {
            screen_x: x,
            screen_y: y,
            start_angle_x: self.pose.angle_of(Axis::X),
            start_angle_y: self.pose.angle_of(Axis::Y),
        });
        self.secondary_down = true;
        log::debug!("rotate drag started at ({x}, {y})");
    }

    /// Rotates by the displacement from the drag anchor. No-op when idle.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        if !self.secondary_down {
            return;
        }
        let Some(anchor) = self.anchor else {
            return;
        };

        let delta_x = x - anchor.screen_x;
        let delta_y = y - anchor.screen_y;
        self.pose.rotate_by(
            delta_y * DRAG_DEGREES_PER_PIXEL,
            delta_x * DRAG_DEGREES_PER_PIXEL,
            0.0,
        );
    }

    /// Ends the current drag. The anchor is kept until the next press.
    pub fn end_drag(&mut self) {
        if self.secondary_down {
            log::debug!("rotate drag ended");
        }
        self.secondary_down = false;
    }

    /// Puts the camera back in its canonical view.
    pub fn reset_camera(&mut self) {
        self.pose.reset();
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn pose_mut(&mut self) -> &mut CameraPose {
        &mut self.pose
    }

    /// The most recent drag anchor, if any press has happened yet.
    pub fn anchor(&self) -> Option<&DragAnchor> {
        self.anchor.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.secondary_down
    }
}

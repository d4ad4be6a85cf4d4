//! Camera pose: a translation along the view axis plus three axis rotations.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Distance of the camera along its forward axis in the canonical view.
pub const INITIAL_DISTANCE: f64 = -1000.0;
/// Initial rotation about the X axis, in degrees.
pub const INITIAL_ANGLE_X: f64 = 45.0;
/// Initial rotation about the Y axis, in degrees.
pub const INITIAL_ANGLE_Y: f64 = 45.0;
/// Initial rotation about the Z axis, in degrees.
pub const INITIAL_ANGLE_Z: f64 = 0.0;

/// Zoom factor applied when scrolling away from the user.
pub const ZOOM_OUT_FACTOR: f64 = 1.1;
/// Zoom factor applied when scrolling toward the user.
pub const ZOOM_IN_FACTOR: f64 = 0.9;
/// Degrees of rotation per pixel of pointer displacement while dragging.
pub const DRAG_DEGREES_PER_PIXEL: f64 = 0.5;

/// Cardinal rotation axis.
///
/// The declaration order is the composition order: X, then Y, then Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in composition order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in [`Axis::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Returns the unit basis vector for this axis.
    #[must_use]
    pub const fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }

    /// Returns display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// Angle this axis starts at in the canonical view.
    #[must_use]
    pub const fn initial_angle(self) -> f64 {
        match self {
            Axis::X => INITIAL_ANGLE_X,
            Axis::Y => INITIAL_ANGLE_Y,
            Axis::Z => INITIAL_ANGLE_Z,
        }
    }
}

/// A rotation bound to one cardinal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRotation {
    axis: Axis,
    /// Accumulated angle in degrees. Never wrapped.
    pub angle_degrees: f64,
}

impl AxisRotation {
    fn initial(axis: Axis) -> Self {
        Self {
            axis,
            angle_degrees: axis.initial_angle(),
        }
    }

    /// The axis this rotation turns about.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The axis as a unit vector.
    #[must_use]
    pub fn axis_vector(&self) -> DVec3 {
        self.axis.unit()
    }
}

/// The viewport camera's extrinsic transform.
///
/// Consumers must compose the translation first and then the rotations in
/// [`Axis::ALL`] order; Euler composition does not commute.
///
/// Serialized as a [`PoseSnapshot`], so the axis binding always comes from
/// [`Axis::ALL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PoseSnapshot", into = "PoseSnapshot")]
pub struct CameraPose {
    distance: f64,
    rotations: [AxisRotation; 3],
}

impl CameraPose {
    /// Creates a pose in the canonical starting view.
    #[must_use]
    pub fn new() -> Self {
        Self {
            distance: INITIAL_DISTANCE,
            rotations: Axis::ALL.map(AxisRotation::initial),
        }
    }

    /// Restores the canonical distance and angles. Axes are left untouched.
    pub fn reset(&mut self) {
        self.distance = INITIAL_DISTANCE;
        for rotation in &mut self.rotations {
            rotation.angle_degrees = rotation.axis.initial_angle();
        }
        log::trace!("camera pose reset");
    }

    /// Multiplies the distance by `factor`. No clamping is applied.
    pub fn zoom(&mut self, factor: f64) {
        self.distance *= factor;
        log::trace!("camera zoom x{factor}: distance = {}", self.distance);
    }

    /// Adds the given degrees to the X, Y and Z angles respectively.
    pub fn rotate_by(&mut self, dx: f64, dy: f64, dz: f64) {
        for (rotation, delta) in self.rotations.iter_mut().zip([dx, dy, dz]) {
            rotation.angle_degrees += delta;
        }
        if log::log_enabled!(log::Level::Trace) {
            let angles: Vec<String> = self
                .rotations
                .iter()
                .map(|r| format!("{}={}", r.axis.name(), r.angle_degrees))
                .collect();
            log::trace!("camera rotate by ({dx}, {dy}, {dz}): {}", angles.join(" "));
        }
    }

    /// Current angle in degrees for `axis`.
    #[must_use]
    pub fn angle_of(&self, axis: Axis) -> f64 {
        self.rotations[axis.index()].angle_degrees
    }

    /// Signed translation along the camera's forward axis.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The rotation component bound to `axis`.
    #[must_use]
    pub fn rotation(&self, axis: Axis) -> &AxisRotation {
        &self.rotations[axis.index()]
    }

    /// Rotation components in composition order.
    pub fn rotations(&self) -> impl Iterator<Item = &AxisRotation> {
        self.rotations.iter()
    }

    /// Copies the distance and all three angles together.
    #[must_use]
    pub fn snapshot(&self) -> PoseSnapshot {
        PoseSnapshot {
            distance: self.distance,
            angle_x: self.angle_of(Axis::X),
            angle_y: self.angle_of(Axis::Y),
            angle_z: self.angle_of(Axis::Z),
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new()
    }
}

impl From<PoseSnapshot> for CameraPose {
    fn from(snapshot: PoseSnapshot) -> Self {
        Self {
            distance: snapshot.distance,
            rotations: Axis::ALL.map(|axis| AxisRotation {
                axis,
                angle_degrees: snapshot.angle(axis),
            }),
        }
    }
}

impl From<CameraPose> for PoseSnapshot {
    fn from(pose: CameraPose) -> Self {
        pose.snapshot()
    }
}

/// A plain copy of a pose, handed to render consumers once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseSnapshot {
    pub distance: f64,
    pub angle_x: f64,
    pub angle_y: f64,
    pub angle_z: f64,
}

impl PoseSnapshot {
    /// Angle in degrees for `axis`.
    #[must_use]
    pub fn angle(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.angle_x,
            Axis::Y => self.angle_y,
            Axis::Z => self.angle_z,
        }
    }
}

impl Default for PoseSnapshot {
    fn default() -> Self {
        CameraPose::new().snapshot()
    }
}

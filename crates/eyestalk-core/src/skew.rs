//! Closed-form tower shape solver and the shear transform chain.
//!
//! The tower reaches the eye by stretching along its own y axis and shearing
//! toward the eye's horizontal direction. The shear is built from three
//! stacked nodes (self -> child -> content): a non-uniform scale on self
//! tilts the child's axes to the desired angle, a compensating scale on the
//! child restores their lengths, and a counter-rotation on the content keeps
//! whatever sits inside it at a stable world orientation.

use crate::math::Node;
use glam::{Quat, Vec3};

/// Per-frame shape of the tower, derived from the eye position alone.
#[derive(Clone, Copy, Debug)]
pub struct TowerShape {
    /// Horizontal direction of displacement, degrees around the y axis.
    pub facing_angle: f32,
    /// Desired angle between the sheared y axis and the x axis, degrees.
    pub skew_angle: f32,
    /// Tower elongation needed to reach the eye; 1.0 at rest length.
    pub stretch_scale: f32,
}

impl TowerShape {
    /// Decompose the eye's position into facing, skew, and stretch.
    ///
    /// `rest_position` must be non-zero; configuration validation rejects a
    /// zero-length rest position before any solving happens.
    pub fn solve(current: Vec3, rest_position: Vec3) -> Self {
        let horizontal = (current.x * current.x + current.z * current.z).sqrt();
        let facing_angle = current.x.atan2(current.z).to_degrees() + 90.0;
        let skew_angle = horizontal.atan2(current.y).to_degrees() + 90.0;
        let stretch_scale = current.length() / rest_position.length();
        Self {
            facing_angle,
            skew_angle,
            stretch_scale,
        }
    }
}

/// The three-node shear chain plus the stretch node above it.
///
/// `stretch` applies (1, stretch_scale, 1) before the shear; `root`, `child`
/// and `content` carry the shear itself. Content placed under `content`
/// shears as a whole without its own orientation or scale distorting.
pub struct SkewChain {
    pub stretch: Node,
    pub root: Node,
    pub child: Node,
    pub content: Node,
    clamp_min: f32,
    clamp_max: f32,
}

impl SkewChain {
    pub fn new(clamp_degrees: (f32, f32)) -> Self {
        Self {
            stretch: Node::default(),
            root: Node::default(),
            child: Node::default(),
            content: Node::default(),
            clamp_min: clamp_degrees.0,
            clamp_max: clamp_degrees.1,
        }
    }

    /// Recompute every node from the shape. Stateless: the previous frame's
    /// transforms never feed back in.
    pub fn apply(&mut self, shape: &TowerShape) {
        // The shear scale diverges at 0 and 180 degrees, so stay inside the
        // configured safe range.
        let skew = shape.skew_angle.clamp(self.clamp_min, self.clamp_max);

        // Extending our own x axis by this much puts the child's x and y
        // axes at the desired skew angle.
        let desired_scale = 1.0 / ((skew * 0.5).to_radians()).tan();
        self.root.local_scale = Vec3::new(desired_scale, 1.0, 1.0);

        // That warp also changed the child axes' lengths; scale them back so
        // the result is skewed but not stretched.
        let child_scale = 1.0 / (0.5 + desired_scale * desired_scale * 0.5).sqrt();
        self.child.local_scale = Vec3::new(child_scale, child_scale, 1.0);

        // Rotate ourselves so the shear happens along the facing direction,
        // and counter-rotate the content so what's inside stays put.
        let y_rotation = Quat::from_axis_angle(Vec3::Y, shape.facing_angle.to_radians());
        self.root.local_rotation =
            y_rotation * Quat::from_axis_angle(Vec3::Z, (skew * 0.5).to_radians());
        self.content.local_rotation = y_rotation.inverse();

        // Stretch-to-reach is composed above the shear, on its own node.
        self.stretch.local_scale = Vec3::new(1.0, shape.stretch_scale, 1.0);
    }
}

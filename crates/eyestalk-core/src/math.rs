//! Rays, planes, and transform nodes.

use glam::{Mat4, Quat, Vec3};

/// World-space ray with unit direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Infinite plane described by a unit normal and any point on it.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl Plane {
    #[inline]
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal: normal.normalize(),
            point,
        }
    }

    /// Distance along `ray` to the intersection with this plane.
    ///
    /// Returns `None` when the ray is parallel to the plane or the
    /// intersection lies behind the ray origin.
    pub fn raycast(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.dir);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = self.normal.dot(self.point - ray.origin) / denom;
        (t >= 0.0).then_some(t)
    }
}

/// A scene-graph transform node: local TRS plus explicit composition.
///
/// Chains are composed by multiplying local matrices parent-first; there is
/// no retained hierarchy here, the host owns parent-child structure.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub local_position: Vec3,
    pub local_rotation: Quat,
    pub local_scale: Vec3,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            local_position: Vec3::ZERO,
            local_rotation: Quat::IDENTITY,
            local_scale: Vec3::ONE,
        }
    }
}

impl Node {
    /// Local transform matrix (translation * rotation * scale).
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.local_scale,
            self.local_rotation,
            self.local_position,
        )
    }
}

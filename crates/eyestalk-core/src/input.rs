//! Per-frame input snapshot and picking helpers.

use crate::math::Ray;
use glam::{Vec2, Vec3};

/// Pointer state sampled once per frame by the host.
#[derive(Default, Clone, Copy, Debug)]
pub struct InputFrame {
    pub primary_down: bool,
    pub pointer: Vec2,
    pub scroll_delta: f32,
}

/// Distance along `ray` to the first intersection with a sphere, or `None`
/// on a miss.
#[inline]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

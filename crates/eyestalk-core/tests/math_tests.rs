// Ray, plane, picking, and transform node primitives.

use approx::assert_relative_eq;
use eyestalk_core::input::ray_sphere;
use eyestalk_core::{Node, Plane, Ray};
use glam::{Mat4, Quat, Vec3};

#[test]
fn ray_plane_intersection_hits_in_front() {
    let plane = Plane::new(Vec3::Z, Vec3::ZERO);
    let ray = Ray::new(Vec3::new(1.0, 2.0, 5.0), Vec3::NEG_Z);

    let t = plane.raycast(&ray).expect("ray aims at the plane");
    assert_relative_eq!(t, 5.0, epsilon = 1e-5);
    assert_relative_eq!(ray.point_at(t).z, 0.0, epsilon = 1e-5);
}

#[test]
fn parallel_ray_has_no_intersection() {
    let plane = Plane::new(Vec3::Z, Vec3::ZERO);
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X);

    assert!(plane.raycast(&ray).is_none());
}

#[test]
fn intersection_behind_the_origin_is_rejected() {
    let plane = Plane::new(Vec3::Z, Vec3::ZERO);
    // Pointing away from the plane.
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);

    assert!(plane.raycast(&ray).is_none());
}

#[test]
fn plane_constructor_normalizes_the_normal() {
    let plane = Plane::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    assert_relative_eq!(plane.normal.length(), 1.0, epsilon = 1e-6);
}

#[test]
fn ray_sphere_hit_and_miss() {
    let ray = Ray::new(Vec3::ZERO, Vec3::Z);

    let t = ray_sphere(&ray, Vec3::new(0.0, 0.0, 5.0), 2.0).expect("straight-on hit");
    assert_relative_eq!(t, 3.0, epsilon = 1e-5);

    assert!(ray_sphere(&ray, Vec3::new(10.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn default_node_is_identity() {
    let node = Node::default();
    assert_eq!(node.local_matrix(), Mat4::IDENTITY);
}

#[test]
fn node_matrix_applies_scale_then_rotation_then_translation() {
    let node = Node {
        local_position: Vec3::new(1.0, 0.0, 0.0),
        local_rotation: Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
        local_scale: Vec3::new(2.0, 1.0, 1.0),
    };

    // x-hat: scaled to (2, 0, 0), rotated to (0, 2, 0), translated to (1, 2, 0).
    let p = node.local_matrix().transform_point3(Vec3::X);
    assert_relative_eq!(p.x, 1.0, epsilon = 1e-5);
    assert_relative_eq!(p.y, 2.0, epsilon = 1e-5);
    assert_relative_eq!(p.z, 0.0, epsilon = 1e-5);
}

use glam::{Vec2, Vec3};
use itertools::Itertools;

use crate::ray::Ray;
use crate::scene::{NodeId, SceneGraph};

/// Analytic pick geometry of a node, expressed in node-local space.
///
/// Picking runs against shapes, not triangles: the hit ordering is what
/// interaction depends on, not the exact surface parameterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickShape {
    /// Not pickable.
    None,
    /// Sphere centered at the node origin.
    Sphere { radius: f32 },
    /// Axis-aligned box around the node origin.
    Aabb { min: Vec3, max: Vec3 },
    /// Flat ring in the local XZ plane.
    Annulus { inner: f32, outer: f32 },
    /// Axis-aligned rectangle in the local XZ plane.
    Rect { half_extents: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub node: NodeId,
    pub distance: f32,
}

/// Ray/scene intersection over every pickable node in the graph.
///
/// Hits come back sorted by increasing distance, ties broken by node id so
/// the ordering is deterministic. The ray is transformed into each node's
/// local space; transforms are rigid (see [crate::scene::Transform]) so
/// local distances are world distances.
pub fn pick_all(scene: &SceneGraph, ray: Ray) -> Vec<PickHit> {
    scene
        .iter()
        .filter_map(|(id, node)| {
            if matches!(node.shape, PickShape::None) {
                return None;
            }
            let inverse = scene.world_transform(id).inverse();
            let local = Ray::new(
                inverse.transform_point3(ray.origin),
                inverse.transform_vector3(ray.dir),
            );
            let distance = match node.shape {
                PickShape::None => return None,
                PickShape::Sphere { radius } => local.sphere_hit(Vec3::ZERO, radius)?,
                PickShape::Aabb { min, max } => local.aabb_hit(min, max)?,
                PickShape::Annulus { inner, outer } => {
                    local.annulus_hit(Vec3::ZERO, inner, outer)?
                }
                PickShape::Rect { half_extents } => local.rect_hit(Vec3::ZERO, half_extents)?,
            };
            Some(PickHit { node: id, distance })
        })
        .sorted_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.node.cmp(&b.node))
        })
        .collect()
}

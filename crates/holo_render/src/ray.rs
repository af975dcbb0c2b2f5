use glam::{Vec2, Vec3};

/// A picking ray in scene units. `dir` is kept normalized so intersection
/// distances are comparable across shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

const PARALLEL_EPSILON: f32 = 1e-6;

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Nearest non-negative hit distance against a sphere at `center`.
    pub fn sphere_hit(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.dot(oc) - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let t_near = -b - sqrt_d;
        let t_far = -b + sqrt_d;
        if t_near >= 0.0 {
            Some(t_near)
        } else if t_far >= 0.0 {
            // origin inside the sphere; the exit point is the first hit
            Some(t_far)
        } else {
            None
        }
    }

    /// Slab test against an axis-aligned box; returns the entry distance.
    pub fn aabb_hit(&self, min: Vec3, max: Vec3) -> Option<f32> {
        let mut t_min = 0.0f32;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let o = self.origin[axis];
            let d = self.dir[axis];
            if d.abs() < PARALLEL_EPSILON {
                if o < min[axis] || o > max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t1 = (min[axis] - o) * inv;
            let mut t2 = (max[axis] - o) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_max < t_min {
                return None;
            }
        }
        Some(t_min)
    }

    /// Intersection with the horizontal plane `y = plane_y`.
    fn horizontal_plane_hit(&self, plane_y: f32) -> Option<f32> {
        if self.dir.y.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (plane_y - self.origin.y) / self.dir.y;
        (t >= 0.0).then_some(t)
    }

    /// Flat annulus in the XZ plane at `center`, radii measured in-plane.
    pub fn annulus_hit(&self, center: Vec3, inner: f32, outer: f32) -> Option<f32> {
        let t = self.horizontal_plane_hit(center.y)?;
        let p = self.at(t);
        let r = Vec2::new(p.x - center.x, p.z - center.z).length();
        (r >= inner && r <= outer).then_some(t)
    }

    /// Axis-aligned rectangle in the XZ plane at `center` with the given
    /// half extents.
    pub fn rect_hit(&self, center: Vec3, half_extents: Vec2) -> Option<f32> {
        let t = self.horizontal_plane_hit(center.y)?;
        let p = self.at(t);
        let inside = (p.x - center.x).abs() <= half_extents.x
            && (p.z - center.z).abs() <= half_extents.y;
        inside.then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{vec2, vec3};
    use rstest::rstest;

    #[test]
    fn sphere_front_hit() {
        let ray = Ray::new(vec3(0.0, 0.0, 10.0), vec3(0.0, 0.0, -1.0));
        let t = ray.sphere_hit(Vec3::ZERO, 0.5).unwrap();
        assert!((t - 9.5).abs() < 1e-5);
    }

    #[test]
    fn sphere_miss() {
        let ray = Ray::new(vec3(2.0, 0.0, 10.0), vec3(0.0, 0.0, -1.0));
        assert!(ray.sphere_hit(Vec3::ZERO, 0.5).is_none());
    }

    #[test]
    fn sphere_behind_origin_misses() {
        let ray = Ray::new(vec3(0.0, 0.0, 10.0), vec3(0.0, 0.0, 1.0));
        assert!(ray.sphere_hit(Vec3::ZERO, 0.5).is_none());
    }

    #[rstest]
    #[case(vec3(0.0, 10.0, 0.0), vec3(0.0, -1.0, 0.0), Some(9.0))]
    #[case(vec3(5.0, 10.0, 0.0), vec3(0.0, -1.0, 0.0), None)]
    fn aabb_entry_distance(
        #[case] origin: Vec3,
        #[case] dir: Vec3,
        #[case] expected: Option<f32>,
    ) {
        let ray = Ray::new(origin, dir);
        let hit = ray.aabb_hit(vec3(-1.0, -1.0, -1.0), vec3(1.0, 1.0, 1.0));
        match expected {
            Some(t) => assert!((hit.unwrap() - t).abs() < 1e-5),
            None => assert!(hit.is_none()),
        }
    }

    #[test]
    fn annulus_respects_radii() {
        let down = vec3(0.0, -1.0, 0.0);
        let center = Vec3::ZERO;
        // through the band
        let hit = Ray::new(vec3(1.2, 5.0, 0.0), down).annulus_hit(center, 1.0, 1.5);
        assert!((hit.unwrap() - 5.0).abs() < 1e-5);
        // through the hole
        assert!(Ray::new(vec3(0.2, 5.0, 0.0), down)
            .annulus_hit(center, 1.0, 1.5)
            .is_none());
        // outside the band
        assert!(Ray::new(vec3(3.0, 5.0, 0.0), down)
            .annulus_hit(center, 1.0, 1.5)
            .is_none());
    }

    #[test]
    fn rect_hit_inside_only() {
        let down = vec3(0.0, -1.0, 0.0);
        let half = vec2(10.0, 10.0);
        assert!(Ray::new(vec3(9.0, 2.0, -9.0), down)
            .rect_hit(Vec3::ZERO, half)
            .is_some());
        assert!(Ray::new(vec3(11.0, 2.0, 0.0), down)
            .rect_hit(Vec3::ZERO, half)
            .is_none());
    }
}

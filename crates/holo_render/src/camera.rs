use glam::{vec3, Mat4, Vec2, Vec3};

use crate::ray::Ray;

/// Pixel size of the render surface. Pointer coordinates are measured from
/// the top-left corner in the same units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Perspective camera orbiting the map. Only the matrices leave this type;
/// the render backend consumes `view_projection` and the picker consumes
/// `screen_ray`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    /// The default overhead view of the map: 60 degree fov from (0, 80, 120)
    /// looking at the origin.
    pub fn map_view() -> Self {
        Self {
            position: vec3(0.0, 80.0, 120.0),
            target: Vec3::ZERO,
            fov_y: 60f32.to_radians(),
            z_near: 0.1,
            z_far: 1000.0,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.z_near, self.z_far)
    }

    pub fn view_projection(&self, viewport: Viewport) -> Mat4 {
        self.projection(viewport.aspect()) * self.view()
    }

    /// Casts a ray from the camera through a screen-space point.
    ///
    /// Screen coordinates are converted to normalized device coordinates
    /// (x right, y up) and unprojected through the inverse view-projection
    /// matrix; `perspective_rh` maps the near plane to ndc z = 0 and the far
    /// plane to z = 1.
    pub fn screen_ray(&self, screen: Vec2, viewport: Viewport) -> Ray {
        let ndc_x = (screen.x / viewport.width) * 2.0 - 1.0;
        let ndc_y = -(screen.y / viewport.height) * 2.0 + 1.0;
        let inverse = self.view_projection(viewport).inverse();
        let near = inverse.project_point3(vec3(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(vec3(ndc_x, ndc_y, 1.0));
        Ray::new(near, far - near)
    }
}

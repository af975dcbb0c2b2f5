use glam::{vec2, vec3, Vec3};
use tracing::info;

use crate::material::{rgb, Material};
use crate::picking::PickShape;
use crate::scene::{NodeId, NodeKind, SceneGraph, Transform};

pub const TERRAIN_SEGMENTS: u32 = 100;
pub const TERRAIN_MAIN_COLOR: u32 = 0x0088ff;
pub const TERRAIN_ACCENT_COLOR: u32 = 0xff0088;
pub const TERRAIN_PULSE_SPEED: f64 = 2.0;
pub const WIREFRAME_COLOR: u32 = 0x00ccff;
pub const WIREFRAME_OPACITY: f32 = 0.1;
/// The wireframe overlay floats slightly above the surface.
pub const WIREFRAME_LIFT: f32 = 0.1;

pub const GRID_SCALE: f32 = 1.5;
pub const GRID_COLOR: u32 = 0x00ccff;
pub const GRID_PULSE_SPEED: f64 = 2.0;
pub const GRID_OPACITY: f32 = 0.3;
/// The grid sits just below the terrain.
pub const GRID_DROP: f32 = 0.5;

/// Height of the synthetic terrain at a ground-plane point.
pub fn terrain_height(x: f32, z: f32) -> f32 {
    (x * 0.1).sin() * (z * 0.1).cos() * 2.0
}

/// Indexed triangle mesh, ready for a render backend to upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// A `size` x `size` terrain patch centered on the origin, `segments`
    /// quads per side, displaced by [terrain_height] with smooth normals.
    pub fn terrain(size: f32, segments: u32) -> Self {
        let verts_per_side = segments + 1;
        let step = size / segments as f32;
        let half = size * 0.5;

        let mut positions = Vec::with_capacity((verts_per_side * verts_per_side) as usize);
        for row in 0..verts_per_side {
            for col in 0..verts_per_side {
                let x = -half + col as f32 * step;
                let z = -half + row as f32 * step;
                positions.push(vec3(x, terrain_height(x, z), z));
            }
        }

        let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
        for row in 0..segments {
            for col in 0..segments {
                let a = row * verts_per_side + col;
                let b = a + 1;
                let c = a + verts_per_side;
                let d = c + 1;
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }

        let mut normals = vec![Vec3::ZERO; positions.len()];
        for tri in indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let face = (positions[b] - positions[a])
                .cross(positions[c] - positions[a]);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }
        for n in &mut normals {
            *n = n.normalize_or_zero();
        }

        Self {
            positions,
            normals,
            indices,
        }
    }

    pub fn aabb(&self) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in &self.positions {
            min = min.min(*p);
            max = max.max(*p);
        }
        (min, max)
    }
}

/// Adds the shaded terrain surface and its wireframe overlay to the scene.
/// The surface is pickable via its bounds so rays can land on the map
/// itself; the coplanar overlay is not (it would only duplicate hits).
pub fn spawn_terrain(scene: &mut SceneGraph, size: f32) -> NodeId {
    let mesh = Mesh::terrain(size, TERRAIN_SEGMENTS);
    let (min, max) = mesh.aabb();
    info!(
        vertices = mesh.positions.len(),
        triangles = mesh.indices.len() / 3,
        "generated terrain mesh"
    );

    let surface = scene.spawn(None, NodeKind::TerrainSurface);
    {
        let node = scene.get_mut(surface).expect("node spawned above");
        node.shape = PickShape::Aabb { min, max };
        let mut material = Material::pulsing(rgb(TERRAIN_MAIN_COLOR), TERRAIN_PULSE_SPEED);
        material.accent = Some(rgb(TERRAIN_ACCENT_COLOR));
        node.material = Some(material);
        node.mesh = Some(mesh.clone());
    }

    let wireframe = scene.spawn(None, NodeKind::TerrainWireframe);
    {
        let node = scene.get_mut(wireframe).expect("node spawned above");
        node.transform = Transform::from_translation(vec3(0.0, WIREFRAME_LIFT, 0.0));
        let mut material = Material::basic(rgb(WIREFRAME_COLOR)).with_opacity(WIREFRAME_OPACITY);
        material.wireframe = true;
        node.material = Some(material);
        node.mesh = Some(mesh);
    }

    surface
}

/// Adds the pulsing holographic grid plane under the terrain.
pub fn spawn_grid(scene: &mut SceneGraph, map_size: f32) -> NodeId {
    let grid_size = map_size * GRID_SCALE;
    let grid = scene.spawn(None, NodeKind::HoloGrid);
    let node = scene.get_mut(grid).expect("node spawned above");
    node.transform = Transform::from_translation(vec3(0.0, -GRID_DROP, 0.0));
    node.shape = PickShape::Rect {
        half_extents: vec2(grid_size * 0.5, grid_size * 0.5),
    };
    node.material = Some(
        Material::pulsing(rgb(GRID_COLOR), GRID_PULSE_SPEED).with_opacity(GRID_OPACITY),
    );
    grid
}

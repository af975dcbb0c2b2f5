//! CPU-side scene data for the holographic map.
//!
//! This crate owns everything a rendering backend needs to draw the map
//! (a node graph with transforms and materials, generated terrain/grid
//! meshes, marker composites) plus the camera math and ray casting used to
//! resolve pointer input. It deliberately owns no GPU device or window; a
//! rendering collaborator consumes the data each frame.

pub mod animation;
pub mod camera;
pub mod marker;
pub mod material;
pub mod picking;
pub mod ray;
pub mod scene;
pub mod terrain;

pub use animation::{advance_frame, AnimationClock};
pub use camera::{Camera, Viewport};
pub use marker::MarkerVisual;
pub use material::{rgb, Material, Pulse, Rgba8};
pub use picking::{pick_all, PickHit, PickShape};
pub use ray::Ray;
pub use scene::{Node, NodeId, NodeKind, SceneGraph, Transform};
pub use terrain::{spawn_grid, spawn_terrain, terrain_height, Mesh};

//! Location markers on the holographic map.
//!
//! Turns the location list from `holo_api` into scene content: projects
//! DMS coordinates onto the map plane, spawns one marker composite per
//! mappable location, and keeps the registry that resolves picked scene
//! nodes back to their locations.

mod category;
mod manager;
mod projection;
mod registry;

pub use category::Category;
pub use manager::MarkerManager;
pub use projection::{project, ScenePosition, MAP_SIZE};
pub use registry::MarkerRegistry;

use glam::Vec2;
use holo_api::Location;
use holo_render::{pick_all, Camera, MarkerVisual, NodeId, Ray, SceneGraph, Viewport};
use tracing::{debug, info};

use crate::category::Category;
use crate::projection::project;
use crate::registry::MarkerRegistry;

/// Owns every location marker in the scene.
///
/// One instance per scene session: `rebuild` places markers for a freshly
/// loaded location list (discarding whatever was there before), and
/// `resolve` answers pointer queries with the location a ray lands on.
#[derive(Debug, Default)]
pub struct MarkerManager {
    registry: MarkerRegistry,
}

impl MarkerManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    /// Wholesale rebuild from a location list. No diffing: old marker
    /// subtrees are removed and every mappable location gets a fresh
    /// composite. Locations without a position are skipped.
    pub fn rebuild(&mut self, scene: &mut SceneGraph, locations: &[Location]) {
        let stale: Vec<NodeId> = self.registry.iter().map(|(visual, _)| visual.group).collect();
        for group in stale {
            scene.remove_subtree(group);
        }
        self.registry.clear();

        for location in locations {
            let Some(dms) = &location.dms else {
                debug!(id = %location.id, "location has no position, no marker");
                continue;
            };
            let position = project(dms);
            let color = Category::from_kind(&location.kind).color();
            let visual = MarkerVisual::build(scene, position.to_vec3(), color);
            self.registry.add(visual, location.clone());
        }
        info!(
            markers = self.registry.len(),
            locations = locations.len(),
            "rebuilt location markers"
        );
    }

    /// Resolves a screen-space pointer position to the location under it.
    pub fn resolve(
        &self,
        scene: &SceneGraph,
        camera: &Camera,
        screen: Vec2,
        viewport: Viewport,
    ) -> Option<&Location> {
        self.resolve_ray(scene, camera.screen_ray(screen, viewport))
    }

    /// Walks ray hits nearest-first and returns the first one that carries a
    /// back-reference. Terrain, grid, beams and rings intersect too; they
    /// simply have no registry entry and are passed over.
    pub fn resolve_ray(&self, scene: &SceneGraph, ray: Ray) -> Option<&Location> {
        pick_all(scene, ray)
            .iter()
            .find_map(|hit| self.registry.location_of(hit.node))
    }
}

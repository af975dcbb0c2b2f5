use holo_api::Location;
use holo_render::{MarkerVisual, NodeId};
use indexmap::IndexMap;
use tracing::warn;

/// Insertion-ordered collection of (marker visual, location) pairs for one
/// scene session.
///
/// Keyed by the indicator node id, this doubles as the back-reference table
/// from picked scene nodes to their source locations: a one-way lookup, so
/// scene nodes never own location data and either side can be torn down
/// independently. Cleared and rebuilt wholesale on a fresh data load.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    entries: IndexMap<NodeId, (MarkerVisual, Location)>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, visual: MarkerVisual, location: Location) {
        if let Some((_, previous)) = self.entries.insert(visual.indicator, (visual, location)) {
            // can only happen if a visual is registered twice
            warn!(id = %previous.id, "marker registry entry replaced");
        }
    }

    /// The back-reference lookup: which location does this scene node stand
    /// for? Only indicator nodes have an answer.
    pub fn location_of(&self, node: NodeId) -> Option<&Location> {
        self.entries.get(&node).map(|(_, location)| location)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&MarkerVisual, &Location)> {
        self.entries.values().map(|(visual, location)| (visual, location))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use holo_render::{rgb, SceneGraph};

    fn location(id: &str) -> Location {
        Location {
            id: id.into(),
            name: id.into(),
            kind: "city".into(),
            dms: None,
            desc: None,
            url: None,
        }
    }

    #[test]
    fn lookup_answers_only_for_indicators() {
        let mut scene = SceneGraph::new();
        let visual = MarkerVisual::build(&mut scene, Vec3::ZERO, rgb(0x00ffff));
        let mut registry = MarkerRegistry::new();
        registry.add(visual, location("A"));

        assert_eq!(registry.location_of(visual.indicator).unwrap().id, "A");
        assert!(registry.location_of(visual.beam).is_none());
        assert!(registry.location_of(visual.ring).is_none());
        assert!(registry.location_of(visual.group).is_none());
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut scene = SceneGraph::new();
        let mut registry = MarkerRegistry::new();
        for id in ["first", "second", "third"] {
            let visual = MarkerVisual::build(&mut scene, Vec3::ZERO, rgb(0x00ffff));
            registry.add(visual, location(id));
        }
        let ids: Vec<&str> = registry.iter().map(|(_, l)| l.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn clear_empties_the_registry() {
        let mut scene = SceneGraph::new();
        let mut registry = MarkerRegistry::new();
        registry.add(
            MarkerVisual::build(&mut scene, Vec3::ZERO, rgb(0x00ffff)),
            location("A"),
        );
        registry.clear();
        assert!(registry.is_empty());
    }
}

use glam::Vec2;
use holo_api::Location;
use holo_marker::MarkerManager;
use holo_render::{Camera, SceneGraph, Viewport};
use tracing::info;

/// The display collaborator: whatever shows location details to the user.
/// Exactly one of these is called per click resolution.
pub trait LocationDisplay {
    fn show_details(&mut self, location: &Location);
    fn hide_details(&mut self);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Showing(Location),
}

/// Resolves pointer input against the scene and drives the display
/// collaborator. Two observable states: idle (nothing shown) and showing a
/// location. Hover feedback is cosmetic and never transitions state.
#[derive(Debug, Default)]
pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Cursor affordance for the current pointer position: a pointing hand
    /// over anything clickable, the default arrow otherwise.
    pub fn hover_cursor(
        &self,
        scene: &SceneGraph,
        camera: &Camera,
        markers: &MarkerManager,
        screen: Vec2,
        viewport: Viewport,
    ) -> egui::CursorIcon {
        if markers.resolve(scene, camera, screen, viewport).is_some() {
            egui::CursorIcon::PointingHand
        } else {
            egui::CursorIcon::Default
        }
    }

    /// Click resolution: show the location under the pointer, or clear the
    /// display when the click lands on nothing.
    pub fn on_click(
        &mut self,
        scene: &SceneGraph,
        camera: &Camera,
        markers: &MarkerManager,
        screen: Vec2,
        viewport: Viewport,
        display: &mut dyn LocationDisplay,
    ) {
        match markers.resolve(scene, camera, screen, viewport) {
            Some(location) => {
                info!(id = %location.id, name = %location.name, "location selected");
                self.state = InteractionState::Showing(location.clone());
                display.show_details(location);
            }
            None => {
                self.state = InteractionState::Idle;
                display.hide_details();
            }
        }
    }
}

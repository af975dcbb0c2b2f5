use holo_api::Location;
use holo_marker::Category;

use crate::interaction::LocationDisplay;

/// The egui info panel, the default display collaborator. Holds the last
/// shown location and renders it as a floating window each frame.
#[derive(Debug, Default)]
pub struct InfoPanel {
    location: Option<Location>,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.location.is_some()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn gui(&mut self, ctx: &egui::Context) {
        let Some(location) = &self.location else {
            return;
        };
        egui::Window::new("Location").show(ctx, |ui| {
            ui.heading(location.name.as_str());
            ui.label(format!(
                "Type: {}",
                Category::from_kind(&location.kind).label()
            ));
            if let Some(desc) = &location.desc {
                ui.label(desc.as_str());
            }
            if let Some(url) = &location.url {
                ui.hyperlink_to("More Info", url.as_str());
            }
        });
    }
}

impl LocationDisplay for InfoPanel {
    fn show_details(&mut self, location: &Location) {
        self.location = Some(location.clone());
    }

    fn hide_details(&mut self) {
        self.location = None;
    }
}

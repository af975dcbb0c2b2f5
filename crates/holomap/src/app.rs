use std::sync::Arc;

use cap_std::fs_utf8::Dir;
use glam::Vec2;
use holo_api::{Location, LocationClient};
use holo_marker::{MarkerManager, MAP_SIZE};
use holo_render::{
    advance_frame, spawn_grid, spawn_terrain, AnimationClock, Camera, SceneGraph, Viewport,
};
use miette::{Context, IntoDiagnostic, Result};
use tracing::{info, warn};
use url::Url;

use crate::fetch::LocationFetch;
use crate::interaction::InteractionController;
use crate::panel::InfoPanel;

pub struct FrameStatistics {
    pub fps_last_reset: f64,
    pub frame_count: u32,
    pub total_frame_count: u32,
    pub average_fps: u32,
}

impl FrameStatistics {
    pub fn new(current_time: f64) -> Self {
        Self {
            fps_last_reset: current_time,
            frame_count: 0,
            total_frame_count: 0,
            average_fps: 0,
        }
    }

    pub fn tick(&mut self, current_time: f64) {
        self.total_frame_count += 1;
        self.frame_count += 1;
        if current_time - self.fps_last_reset > 1.0 {
            self.average_fps = self.frame_count;
            self.frame_count = 0;
            self.fps_last_reset = current_time;
        }
    }

    pub fn gui(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("fps: {}", self.average_fps));
    }
}

/// Pointer state for one frame, in screen pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInput {
    pub position: Option<Vec2>,
    pub clicked: bool,
}

/// The holomap session: scene, camera, markers, interaction and panel,
/// advanced one frame at a time by whatever drives the event loop.
pub struct Holomap {
    pub scene: SceneGraph,
    pub camera: Camera,
    viewport: Viewport,
    clock: AnimationClock,
    fetch: Option<LocationFetch>,
    markers: MarkerManager,
    interaction: InteractionController,
    info_panel: InfoPanel,
    frame_stats: FrameStatistics,
    egui_context: egui::Context,
}

impl Holomap {
    /// Builds the static scene (terrain, grid, camera) and kicks off the
    /// background location fetch.
    pub fn new(client: LocationClient, viewport: Viewport) -> Self {
        let mut scene = SceneGraph::new();
        spawn_terrain(&mut scene, MAP_SIZE);
        spawn_grid(&mut scene, MAP_SIZE);

        Self {
            scene,
            camera: Camera::map_view(),
            viewport,
            clock: AnimationClock::start(),
            fetch: Some(LocationFetch::spawn(Arc::new(client))),
            markers: MarkerManager::new(),
            interaction: InteractionController::new(),
            info_panel: InfoPanel::new(),
            frame_stats: FrameStatistics::new(0.0),
            egui_context: egui::Context::default(),
        }
    }

    pub fn markers(&self) -> &MarkerManager {
        &self.markers
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn info_panel(&self) -> &InfoPanel {
        &self.info_panel
    }

    /// True until the location fetch has been consumed (successfully or not).
    pub fn is_loading(&self) -> bool {
        self.fetch.is_some()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        info!(?viewport, "resizing viewport");
        self.viewport = viewport;
    }

    fn poll_fetch(&mut self) {
        let Some(fetch) = &self.fetch else { return };
        match fetch.try_take() {
            Some(Ok(locations)) => {
                self.markers.rebuild(&mut self.scene, &locations);
                self.fetch = None;
            }
            Some(Err(message)) => {
                // already logged by the fetch worker; the map stays empty
                warn!(%message, "continuing without location markers");
                self.fetch = None;
            }
            None => {}
        }
    }

    /// Advances the session one frame: polls the fetch, runs the visual
    /// update pass, resolves pointer input, and produces the egui output
    /// for the render backend.
    pub fn tick(&mut self, pointer: PointerInput) -> egui::FullOutput {
        let time = self.clock.elapsed_secs();
        self.frame_stats.tick(time);
        self.poll_fetch();
        advance_frame(&mut self.scene, time);

        let cursor = pointer.position.map(|position| {
            self.interaction.hover_cursor(
                &self.scene,
                &self.camera,
                &self.markers,
                position,
                self.viewport,
            )
        });
        if pointer.clicked {
            if let Some(position) = pointer.position {
                self.interaction.on_click(
                    &self.scene,
                    &self.camera,
                    &self.markers,
                    position,
                    self.viewport,
                    &mut self.info_panel,
                );
            }
        }

        let loading = self.is_loading();
        let panel = &mut self.info_panel;
        let frame_stats = &mut self.frame_stats;
        self.egui_context.clone().run(egui::RawInput::default(), |ctx| {
            if let Some(icon) = cursor {
                ctx.output_mut(|o| o.cursor_icon = icon);
            }
            panel.gui(ctx);
            egui::Window::new("Session").show(ctx, |ui| {
                frame_stats.gui(ui);
                if loading {
                    ui.label("loading locations...");
                }
            });
        })
    }
}

const DEFAULT_BASE_URL: &str = "http://localhost:3000/datasets/";
const OFFLINE_LOCATIONS_FILE: &str = "locations.json";

fn build_client(data_dir: &Dir) -> Result<LocationClient> {
    if let Ok(base) = std::env::var("HOLOMAP_DATA_URL") {
        let base = Url::parse(&base)
            .into_diagnostic()
            .wrap_err(base.clone())
            .wrap_err("failed to parse HOLOMAP_DATA_URL")?;
        info!(%base, "using remote location service");
        return Ok(LocationClient::new(base));
    }
    let base = Url::parse(DEFAULT_BASE_URL).expect("static url is valid");
    if data_dir.exists(OFFLINE_LOCATIONS_FILE) {
        let raw = data_dir
            .read_to_string(OFFLINE_LOCATIONS_FILE)
            .into_diagnostic()
            .wrap_err("failed to read offline locations.json")?;
        let locations: Vec<Location> = serde_json::from_str(&raw)
            .into_diagnostic()
            .wrap_err("failed to decode offline locations.json")?;
        info!(count = locations.len(), "using offline location dataset");
        return Ok(LocationClient::with_locations(base, locations));
    }
    info!(%base, "no offline dataset, using the default service url");
    Ok(LocationClient::new(base))
}

/// Headless session entry: builds the app, pumps frames until the location
/// data has landed (or the fetch gave up), and reports what the scene holds.
/// A windowed front end would drive [Holomap::tick] from its event loop
/// instead.
pub fn start_holomap(data_dir: &Dir) -> Result<()> {
    let client = build_client(data_dir)?;
    let mut app = Holomap::new(client, Viewport::new(1280.0, 720.0));

    let frame_time = std::time::Duration::from_millis(16);
    // bounded by the request timeout; a hung fetch must not hang the session
    for _ in 0..900 {
        if !app.is_loading() {
            break;
        }
        app.tick(PointerInput::default());
        std::thread::sleep(frame_time);
    }
    // a few more frames so the visual update pass runs over the markers
    for _ in 0..10 {
        app.tick(PointerInput::default());
        std::thread::sleep(frame_time);
    }

    info!(
        nodes = app.scene.len(),
        markers = app.markers().registry().len(),
        "holomap session ready"
    );
    Ok(())
}

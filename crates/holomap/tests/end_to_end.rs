//! Full-session test: load a dataset, place markers, click them.

use glam::{vec2, vec3, Vec2};
use holo_api::{Dms, Location, LocationClient};
use holo_render::Viewport;
use holomap::{Holomap, InteractionState, PointerInput};
use url::Url;

const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

fn dataset() -> Vec<Location> {
    vec![
        Location {
            id: "X1".into(),
            name: "Solis".into(),
            kind: "capital".into(),
            dms: Some(Dms {
                lat: [35.0, 0.0, 0.0],
                lng: [10.0, 0.0, 0.0],
            }),
            desc: Some("Capital of the southern region.".into()),
            url: Some(Url::parse("https://example.com/solis").unwrap()),
        },
        Location {
            id: "X2".into(),
            name: "Drift Station".into(),
            kind: "research".into(),
            dms: Some(Dms {
                lat: [-20.0, 0.0, 0.0],
                lng: [-40.0, 0.0, 0.0],
            }),
            desc: None,
            url: None,
        },
        Location {
            id: "X3".into(),
            name: "Unmapped Ridge".into(),
            kind: "other".into(),
            dms: None,
            desc: None,
            url: None,
        },
    ]
}

fn loaded_app() -> Holomap {
    let base = Url::parse("http://localhost:3000/datasets/").unwrap();
    let client = LocationClient::with_locations(base, dataset());
    let mut app = Holomap::new(client, VIEWPORT);
    for _ in 0..500 {
        app.tick(PointerInput::default());
        if !app.is_loading() {
            return app;
        }
        std::thread::sleep(std::time::Duration::from_millis(2));
    }
    panic!("location fetch never finished");
}

/// Screen pixel that projects onto a world-space point.
fn screen_over(app: &Holomap, world: glam::Vec3) -> Vec2 {
    let ndc = app.camera.view_projection(VIEWPORT).project_point3(world);
    vec2(
        (ndc.x + 1.0) * 0.5 * VIEWPORT.width,
        (1.0 - ndc.y) * 0.5 * VIEWPORT.height,
    )
}

#[test]
fn positionless_locations_are_skipped_at_load() {
    let app = loaded_app();
    assert_eq!(app.markers().registry().len(), 2);
    assert!(app
        .markers()
        .registry()
        .iter()
        .all(|(_, location)| location.id != "X3"));
}

#[test]
fn clicking_solis_shows_its_details() {
    let mut app = loaded_app();
    // where the projection formula puts lat 35 / lng 10 on a 100-unit map
    let screen = screen_over(&app, vec3(2.777_778, 0.0, -19.444_445));

    let output = app.tick(PointerInput {
        position: Some(screen),
        clicked: true,
    });

    assert_eq!(
        output.platform_output.cursor_icon,
        egui::CursorIcon::PointingHand
    );
    match app.interaction().state() {
        InteractionState::Showing(location) => {
            assert_eq!(location.id, "X1");
            assert_eq!(location.name, "Solis");
        }
        other => panic!("expected a selection, got {other:?}"),
    }
    let shown = app.info_panel().location().expect("panel should be visible");
    assert_eq!(shown.name, "Solis");
    assert_eq!(holo_marker::Category::from_kind(&shown.kind).label(), "Capital City");
}

#[test]
fn clicking_the_sky_clears_the_panel() {
    let mut app = loaded_app();
    let screen = screen_over(&app, vec3(2.777_778, 0.0, -19.444_445));
    app.tick(PointerInput {
        position: Some(screen),
        clicked: true,
    });
    assert!(app.info_panel().is_visible());

    // top-left corner: above the horizon, nothing to hit
    app.tick(PointerInput {
        position: Some(vec2(1.0, 1.0)),
        clicked: true,
    });
    assert_eq!(app.interaction().state(), &InteractionState::Idle);
    assert!(!app.info_panel().is_visible());
}

#[test]
fn pointer_mapping_follows_a_resize() {
    let mut app = loaded_app();
    let small = Viewport::new(640.0, 360.0);
    app.resize(small);

    // the same world point lands on a different pixel in the smaller surface
    let ndc = app
        .camera
        .view_projection(small)
        .project_point3(vec3(2.777_778, 0.0, -19.444_445));
    let screen = vec2(
        (ndc.x + 1.0) * 0.5 * small.width,
        (1.0 - ndc.y) * 0.5 * small.height,
    );
    app.tick(PointerInput {
        position: Some(screen),
        clicked: true,
    });
    assert!(matches!(
        app.interaction().state(),
        InteractionState::Showing(location) if location.id == "X1"
    ));
}

#[test]
fn clicks_before_data_arrives_are_harmless() {
    let base = Url::parse("http://localhost:3000/datasets/").unwrap();
    let client = LocationClient::with_locations(base, dataset());
    let mut app = Holomap::new(client, VIEWPORT);
    // no waiting: the registry may well still be empty here
    app.tick(PointerInput {
        position: Some(vec2(640.0, 360.0)),
        clicked: true,
    });
    assert_eq!(app.interaction().state(), &InteractionState::Idle);
    assert!(!app.info_panel().is_visible());
}

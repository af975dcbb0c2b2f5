//! The holomap application: wires the location client, the marker manager
//! and the scene into an interactive session, and renders the info panel
//! with egui. Window and GPU backends are external collaborators; the app
//! itself runs headless.

mod app;
mod fetch;
pub mod init;
mod interaction;
mod panel;

pub use app::{start_holomap, Holomap, PointerInput};
pub use fetch::{FetchStatus, LocationFetch};
pub use interaction::{InteractionController, InteractionState, LocationDisplay};
pub use panel::InfoPanel;

//! Robotics Club site - Leptos frontend
//!
//! Club home page and hackathon microsite, the team registration and
//! project submission forms, and the once-per-session intro animation.

pub mod app;
pub mod components;
pub mod content;
pub mod error;
pub mod form;
pub mod gate;
pub mod motion;
pub mod pages;
pub mod session;
pub mod submission;
pub mod transport;

pub use app::App;
pub use error::{Result, SiteAppError};

/// Client-side entry point, called from the site's index.html once the
/// WASM module has loaded
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    tracing::info!("Mounting robotics site");
    leptos::mount::mount_to_body(App);
}

//! Reusable view components

pub mod loading_gate;
pub mod nav;
pub mod reveal;
pub mod status_banner;
pub mod submission_form;

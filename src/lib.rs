// src/lib.rs

//! Internal library for webgl-testpage – not published on crates.io

pub mod app_controller;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    config::{TestPageConfig, TestPageConfigBuilder},
    render::{render_page, render_to_file, substitute},
};
pub use ui::browser::{BrowserLauncher, SystemBrowser};

//! picklist - a searchable, virtualized multi-select dropdown
//!
//! A GPU-rendered desktop and web demo: 100,000 generated items, filtered by
//! a case-insensitive substring query, of which only the rows in view are
//! ever built and drawn.

mod app;
pub mod config;
pub mod constants;
mod message;
pub mod model;

pub use app::PicklistApp;
pub use config::{ConfigError, LogLevel, PicklistConfig, ThemeChoice};
pub use message::Message;

use picklist_ui::{GpuConfig, Settings};

/// Runtime settings derived from a configuration.
pub fn settings(config: &PicklistConfig, fonts: Vec<Vec<u8>>) -> Settings {
    Settings {
        window_title: Some(constants::TITLE.to_string()),
        window_size: constants::window::DEFAULT_SIZE,
        resizable: true,
        log_level: config.log_level.to_level_filter(),
        theme: config.theme.theme(),
        gpu: GpuConfig::default().with_clear_color(config.theme.clear_color()),
        fonts,
    }
}

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

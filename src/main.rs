//! capy-tasklist - Running apps task list for Hyprland
//!
//! Listens to compositor window events on a background thread and applies
//! them on the main thread, one event at a time.

use capy_tasklist::config::TaskListConfig;
use capy_tasklist::event_bus;
use capy_tasklist::services;
use capy_tasklist::tasklist::{TaskListController, render};
use env_logger::Env;
use log::{info, warn};
use std::error::Error;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn Error>> {
    let loaded = TaskListConfig::default_path()
        .map(|path| TaskListConfig::load(&path))
        .transpose();
    let (config, config_error) = match loaded {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (TaskListConfig::default(), Some(e)),
    };

    let default_filter = config.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Some(e) = config_error {
        warn!("Using default config: {}", e);
    }

    info!("Starting capy-tasklist...");

    let backend = services::wm::connect()?;
    let cache = services::apps::build_cache(&config);
    let mut controller =
        TaskListController::new(Arc::clone(&backend), cache, render::for_kind(config.renderer));

    let (tx, rx) = event_bus::channel();
    backend.start_listener(tx);

    // Materialize every existing workspace; the focused one gets seeded.
    match backend.workspaces() {
        Ok(ids) => controller.sync_workspaces(&ids),
        Err(e) => warn!("Failed to list workspaces: {}", e),
    }

    info!(
        "capy-tasklist running with {} workspace views.",
        controller.view_ids().len()
    );

    let handled = event_bus::run(&rx, &mut controller);
    info!("Event stream closed after {} events, exiting", handled);

    Ok(())
}

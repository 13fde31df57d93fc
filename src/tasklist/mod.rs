//! Running-application task list.
//!
//! - `controller` - applies compositor events, owns all state
//! - `running_apps` - resolved windows in opening order
//! - `workspace_view` - per-workspace button list
//! - `render` - button descriptors and renderers

pub mod controller;
pub mod render;
pub mod running_apps;
pub mod workspace_view;

pub use controller::TaskListController;
pub use render::{ButtonDescriptor, TaskListRenderer};

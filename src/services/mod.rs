//! Shared services for the task list.
//!
//! - `apps` - desktop entry resolution (capy-apps)
//! - `wm` - compositor backend (capy-wm)

pub mod apps;
pub mod wm;

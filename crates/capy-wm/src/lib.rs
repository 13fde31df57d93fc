//! capy-wm: Window manager abstraction for tiling window managers
//!
//! Provides a unified interface for querying windows and workspaces and for
//! receiving window lifecycle events. Currently supports Hyprland with
//! architecture ready for Sway, Niri, etc.

pub mod error;
pub mod types;
pub mod window_backend;

#[cfg(feature = "hyprland")]
pub mod hyprland;

pub use error::WmError;
pub use types::*;
pub use window_backend::*;

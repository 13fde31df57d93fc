//! capy-tasklist - running apps task list for the CapyShell taskbar
//!
//! Resolves compositor windows to installed applications and keeps one
//! ordered button list per workspace.

pub mod config;
pub mod event_bus;
pub mod services;
pub mod tasklist;

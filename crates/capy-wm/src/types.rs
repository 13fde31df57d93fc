//! Core types for window manager abstraction.

/// Compositor workspace identifier.
pub type WorkspaceId = i32;

/// Detected window manager type.
/// More will come soon (define soon)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WmType {
    Hyprland,
    Sway,
    Niri,
    Unknown,
}

impl std::fmt::Display for WmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WmType::Hyprland => write!(f, "Hyprland"),
            WmType::Sway => write!(f, "Sway"),
            WmType::Niri => write!(f, "Niri"),
            WmType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A toplevel window as reported by the compositor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Window {
    /// Stable unique address (e.g. "0x55d1c0a3b2f0" on Hyprland).
    pub address: String,
    /// Window class (app identifier).
    pub class_name: String,
    /// Workspace the window is currently on.
    pub workspace_id: WorkspaceId,
    /// Window title. Often empty right after the window maps.
    pub title: String,
}

/// Events emitted by the window manager backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WmEvent {
    /// A window was mapped.
    WindowAdded(Window),
    /// A window was closed. The compositor only knows its address by now.
    WindowClosed { address: String },
    /// A window moved to another workspace.
    WindowMoved {
        address: String,
        workspace_id: WorkspaceId,
    },
    /// The focused workspace changed.
    ActiveWorkspaceChanged(WorkspaceId),
    /// Workspaces were created or destroyed; carries the full current list.
    WorkspacesChanged(Vec<WorkspaceId>),
}

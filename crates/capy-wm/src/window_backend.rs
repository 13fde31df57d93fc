use crate::{Window, WmError, WmEvent, WmType, WorkspaceId};
use crossbeam_channel::Sender;

#[cfg(feature = "hyprland")]
use crate::hyprland;

/// Trait that all window manager backends must implement.
/// This provides a unified interface regardless of the underlying WM.
pub trait WindowBackend: Send + Sync {
    /// All currently mapped windows.
    fn windows(&self) -> Result<Vec<Window>, WmError>;

    /// IDs of all existing workspaces.
    fn workspaces(&self) -> Result<Vec<WorkspaceId>, WmError>;

    /// The focused workspace.
    fn active_workspace(&self) -> Result<WorkspaceId, WmError>;

    /// Focus the window with the given address.
    fn focus_window(&self, address: &str) -> Result<(), WmError>;

    /// Start the background event listener.
    /// This spawns a thread that forwards WM events into `events`.
    fn start_listener(&self, events: Sender<WmEvent>);
}

/// Detect the current window manager from environment variables.
pub fn detect_wm() -> WmType {
    if let Ok(desktop) = std::env::var("XDG_CURRENT_DESKTOP") {
        let desktop_lower = desktop.to_lowercase();
        if desktop_lower.contains("hyprland") {
            return WmType::Hyprland;
        }
        if desktop_lower.contains("sway") {
            return WmType::Sway;
        }
        if desktop_lower.contains("niri") {
            return WmType::Niri;
        }
    }

    // Specific Wm checks
    if std::env::var("HYPRLAND_INSTANCE_SIGNATURE").is_ok() {
        return WmType::Hyprland;
    }

    if std::env::var("SWAYSOCK").is_ok() {
        return WmType::Sway;
    }

    WmType::Unknown
}

/// Create the appropriate backend for the detected window manager.
pub fn create_backend() -> Result<Box<dyn WindowBackend>, WmError> {
    match detect_wm() {
        #[cfg(feature = "hyprland")]
        WmType::Hyprland => Ok(Box::new(hyprland::HyprlandBackend::new())),

        // Future backends:
        // WmType::Sway => Ok(Box::new(sway::SwayBackend::new())),
        _ => Err(WmError::Unsupported),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Use a mutex to ensure tests that modify env vars don't race
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_detect_wm_hyprland_xdg() {
        let _guard = ENV_LOCK.lock().unwrap();

        unsafe {
            env::set_var("XDG_CURRENT_DESKTOP", "Hyprland");
        }
        assert_eq!(detect_wm(), WmType::Hyprland);
        unsafe {
            env::remove_var("XDG_CURRENT_DESKTOP");
        }
    }

    #[test]
    fn test_detect_wm_unknown() {
        let _guard = ENV_LOCK.lock().unwrap();

        // Clear potential env vars
        unsafe {
            env::remove_var("XDG_CURRENT_DESKTOP");
            env::remove_var("HYPRLAND_INSTANCE_SIGNATURE");
            env::remove_var("SWAYSOCK");
        }

        assert_eq!(detect_wm(), WmType::Unknown);
        assert!(matches!(create_backend(), Err(WmError::Unsupported)));
    }
}

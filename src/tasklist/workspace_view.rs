//! Per-workspace task list.

use super::render::ButtonDescriptor;
use super::running_apps::RunningApps;
use capy_wm::{Window, WindowBackend, WorkspaceId};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// The buttons shown for one workspace.
#[derive(Debug)]
pub struct WorkspaceView {
    workspace_id: WorkspaceId,
    buttons: Vec<ButtonDescriptor>,
}

impl WorkspaceView {
    pub fn new(workspace_id: WorkspaceId) -> Self {
        Self {
            workspace_id,
            buttons: Vec::new(),
        }
    }

    pub fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    /// Current buttons, in running-apps order.
    pub fn buttons(&self) -> &[ButtonDescriptor] {
        &self.buttons
    }

    /// Rebuild the button list.
    ///
    /// `windows` is the compositor's current window list: an entry whose window
    /// now sits on another workspace is left out here but stays in `running`.
    pub fn resync(
        &mut self,
        running: &RunningApps,
        windows: &[Window],
        backend: &Arc<dyn WindowBackend>,
    ) -> &[ButtonDescriptor] {
        let workspace_of: HashMap<&str, WorkspaceId> = windows
            .iter()
            .map(|w| (w.address.as_str(), w.workspace_id))
            .collect();

        self.buttons = running
            .iter()
            .filter(|(address, _)| workspace_of.get(address) == Some(&self.workspace_id))
            .map(|(address, info)| {
                let backend = Arc::clone(backend);
                let target = address.to_string();
                ButtonDescriptor::new(address.to_string(), info.icon.clone(), move || {
                    if let Err(e) = backend.focus_window(&target) {
                        warn!("Failed to focus window {}: {}", target, e);
                    }
                })
            })
            .collect();

        debug!(
            "Workspace {} resynced: {} buttons",
            self.workspace_id,
            self.buttons.len()
        );
        &self.buttons
    }
}

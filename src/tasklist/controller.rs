//! Task list controller.
//!
//! Owns every piece of task list state and applies compositor events to it.
//! Runs on the dispatch thread only, so nothing here is locked.

use super::render::TaskListRenderer;
use super::running_apps::RunningApps;
use super::workspace_view::WorkspaceView;
use capy_apps::{AppResolver, ResolutionCache};
use capy_wm::{Window, WindowBackend, WmEvent, WorkspaceId};
use log::{debug, info, warn};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

pub struct TaskListController<R> {
    backend: Arc<dyn WindowBackend>,
    cache: ResolutionCache<R>,
    running: RunningApps,
    views: BTreeMap<WorkspaceId, WorkspaceView>,
    /// Last known workspace of every window in `running`.
    close_bindings: HashMap<String, WorkspaceId>,
    renderer: Box<dyn TaskListRenderer>,
}

impl<R: AppResolver> TaskListController<R> {
    pub fn new(
        backend: Arc<dyn WindowBackend>,
        cache: ResolutionCache<R>,
        renderer: Box<dyn TaskListRenderer>,
    ) -> Self {
        Self {
            backend,
            cache,
            running: RunningApps::new(),
            views: BTreeMap::new(),
            close_bindings: HashMap::new(),
            renderer,
        }
    }

    pub fn running_apps(&self) -> &RunningApps {
        &self.running
    }

    pub fn view(&self, workspace_id: WorkspaceId) -> Option<&WorkspaceView> {
        self.views.get(&workspace_id)
    }

    /// Materialized workspace IDs, ascending.
    pub fn view_ids(&self) -> Vec<WorkspaceId> {
        self.views.keys().copied().collect()
    }

    pub fn cache(&self) -> &ResolutionCache<R> {
        &self.cache
    }

    /// Apply one compositor event.
    pub fn handle_event(&mut self, event: WmEvent) {
        match event {
            WmEvent::WindowAdded(window) => self.on_window_added(window),
            WmEvent::WindowClosed { address } => self.on_window_closed(&address),
            WmEvent::WindowMoved {
                address,
                workspace_id,
            } => self.on_window_moved(&address, workspace_id),
            WmEvent::ActiveWorkspaceChanged(id) => self.on_active_workspace_changed(id),
            WmEvent::WorkspacesChanged(ids) => self.sync_workspaces(&ids),
        }
    }

    pub fn on_window_added(&mut self, window: Window) {
        // No title yet means a transient or not-yet-ready window.
        if window.title.is_empty() {
            debug!("Ignoring untitled window {}", window.address);
            return;
        }

        if self.track(&window) {
            self.resync_view(window.workspace_id);
        }
    }

    pub fn on_window_closed(&mut self, address: &str) {
        self.running.remove(address);

        match self.close_bindings.remove(address) {
            Some(workspace_id) => {
                debug!("Window {} closed on workspace {}", address, workspace_id);
                self.resync_view(workspace_id);
            }
            None => debug!("Closed window {} was not tracked", address),
        }
    }

    pub fn on_window_moved(&mut self, address: &str, workspace_id: WorkspaceId) {
        let Some(binding) = self.close_bindings.get_mut(address) else {
            return;
        };
        let previous = std::mem::replace(binding, workspace_id);

        debug!(
            "Window {} moved from workspace {} to {}",
            address, previous, workspace_id
        );
        self.resync_view(previous);
        if previous != workspace_id {
            self.resync_view(workspace_id);
        }
    }

    /// Seed the newly focused workspace, materializing its view if needed.
    pub fn on_active_workspace_changed(&mut self, workspace_id: WorkspaceId) {
        self.materialize(workspace_id, true);
    }

    /// Add a view for `workspace_id`. The active workspace gets seeded from
    /// the windows already on it.
    pub fn register_view(&mut self, workspace_id: WorkspaceId) {
        let is_active = match self.backend.active_workspace() {
            Ok(active) => active == workspace_id,
            Err(e) => {
                warn!("Failed to query active workspace: {}", e);
                false
            }
        };
        self.materialize(workspace_id, is_active);
    }

    pub fn remove_view(&mut self, workspace_id: WorkspaceId) {
        if self.views.remove(&workspace_id).is_some() {
            debug!("Removed view for workspace {}", workspace_id);
            self.renderer.render(workspace_id, &[]);
        }
    }

    /// Make the set of views match the compositor's workspace list.
    pub fn sync_workspaces(&mut self, workspace_ids: &[WorkspaceId]) {
        let stale: Vec<WorkspaceId> = self
            .views
            .keys()
            .filter(|id| !workspace_ids.contains(id))
            .copied()
            .collect();
        for id in stale {
            self.remove_view(id);
        }

        for &id in workspace_ids {
            if !self.views.contains_key(&id) {
                self.register_view(id);
            }
        }
    }

    /// Rebuild one view and hand it to the renderer. No-op without a view.
    pub fn resync_view(&mut self, workspace_id: WorkspaceId) {
        if !self.views.contains_key(&workspace_id) {
            return;
        }

        let windows = self.current_windows();
        if let Some(view) = self.views.get_mut(&workspace_id) {
            let buttons = view.resync(&self.running, &windows, &self.backend);
            self.renderer.render(workspace_id, buttons);
        }
    }

    fn materialize(&mut self, workspace_id: WorkspaceId, seed: bool) {
        if !self.views.contains_key(&workspace_id) {
            info!("Creating task list view for workspace {}", workspace_id);
            self.views
                .insert(workspace_id, WorkspaceView::new(workspace_id));
        }

        if seed {
            let windows = self.current_windows();
            for window in windows.iter().filter(|w| w.workspace_id == workspace_id) {
                self.track(window);
            }
        }

        self.resync_view(workspace_id);
    }

    /// Resolve a window and record it. Returns whether it resolved.
    fn track(&mut self, window: &Window) -> bool {
        let Some(info) = self.cache.lookup(&window.class_name) else {
            debug!(
                "No desktop entry for '{}' ({})",
                window.class_name, window.address
            );
            return false;
        };

        self.running.insert(window.address.clone(), info);
        self.close_bindings
            .insert(window.address.clone(), window.workspace_id);
        true
    }

    fn current_windows(&self) -> Vec<Window> {
        self.backend.windows().unwrap_or_else(|e| {
            warn!("Failed to query windows: {}", e);
            Vec::new()
        })
    }
}

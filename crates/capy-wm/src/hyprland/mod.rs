//! Hyprland backend for capy-wm.
//!
//! Implements the WindowBackend trait for the Hyprland compositor.

use crate::{Window, WindowBackend, WmError, WmEvent, WorkspaceId};
use crossbeam_channel::Sender;
use hyprland::data::{Client, Clients, Workspace, Workspaces};
use hyprland::dispatch::{Dispatch, DispatchType, WindowIdentifier};
use hyprland::event_listener::EventListener;
use hyprland::shared::{Address, HyprData, HyprDataActive};
use log::{debug, error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

static RUNNING: AtomicBool = AtomicBool::new(false);

/// Hyprland window manager backend.
pub struct HyprlandBackend;

impl HyprlandBackend {
    /// Create a new Hyprland backend instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HyprlandBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn ipc_err(e: impl std::fmt::Display) -> WmError {
    WmError::Ipc(e.to_string())
}

fn window_from_client(client: &Client) -> Window {
    Window {
        address: client.address.to_string(),
        class_name: client.class.clone(),
        workspace_id: client.workspace.id,
        title: client.title.clone(),
    }
}

/// Look a single window up by address. `None` if it already vanished.
fn find_window(address: &str) -> Option<Window> {
    Clients::get()
        .ok()?
        .iter()
        .find(|c| c.address.to_string() == address)
        .map(window_from_client)
}

fn workspace_ids() -> Result<Vec<WorkspaceId>, WmError> {
    let mut ids: Vec<WorkspaceId> = Workspaces::get()
        .map_err(ipc_err)?
        .iter()
        .map(|ws| ws.id)
        .collect();
    ids.sort_unstable();
    Ok(ids)
}

fn forward(events: &Sender<WmEvent>, event: WmEvent) {
    if events.send(event).is_err() {
        debug!("Event receiver dropped, discarding Hyprland event");
    }
}

impl WindowBackend for HyprlandBackend {
    fn windows(&self) -> Result<Vec<Window>, WmError> {
        Ok(Clients::get()
            .map_err(ipc_err)?
            .iter()
            .map(window_from_client)
            .collect())
    }

    fn workspaces(&self) -> Result<Vec<WorkspaceId>, WmError> {
        workspace_ids()
    }

    fn active_workspace(&self) -> Result<WorkspaceId, WmError> {
        Workspace::get_active().map(|ws| ws.id).map_err(ipc_err)
    }

    fn focus_window(&self, address: &str) -> Result<(), WmError> {
        debug!("Focusing window {}", address);
        Dispatch::call(DispatchType::FocusWindow(WindowIdentifier::Address(
            Address::new(address),
        )))
        .map_err(ipc_err)
    }

    fn start_listener(&self, events: Sender<WmEvent>) {
        if RUNNING.swap(true, Ordering::SeqCst) {
            info!("Hyprland listener already running");
            return;
        }

        info!("Starting Hyprland event listener...");

        thread::spawn(move || {
            let mut listener = EventListener::new();

            let tx = events.clone();
            listener.add_window_opened_handler(move |data| {
                debug!("Window opened: {:?}", data);
                let address = data.window_address.to_string();
                // The event only names the workspace; ask for the full client.
                let window = find_window(&address).unwrap_or_else(|| Window {
                    address,
                    class_name: data.window_class.clone(),
                    workspace_id: data.workspace_name.parse().unwrap_or_default(),
                    title: data.window_title.clone(),
                });
                forward(&tx, WmEvent::WindowAdded(window));
            });

            let tx = events.clone();
            listener.add_window_closed_handler(move |addr| {
                debug!("Window closed: {:?}", addr);
                forward(
                    &tx,
                    WmEvent::WindowClosed {
                        address: addr.to_string(),
                    },
                );
            });

            let tx = events.clone();
            listener.add_window_moved_handler(move |data| {
                debug!("Window moved: {:?}", data);
                let address = data.window_address.to_string();
                match find_window(&address) {
                    Some(window) => forward(
                        &tx,
                        WmEvent::WindowMoved {
                            address,
                            workspace_id: window.workspace_id,
                        },
                    ),
                    None => debug!("Moved window {} is gone", address),
                }
            });

            let tx = events.clone();
            listener.add_workspace_changed_handler(move |ws| {
                debug!("Workspace changed event: {:?}", ws);
                match Workspace::get_active() {
                    Ok(active) => forward(&tx, WmEvent::ActiveWorkspaceChanged(active.id)),
                    Err(e) => warn!("Failed to query active workspace: {}", e),
                }
            });

            let tx = events.clone();
            listener.add_workspace_added_handler(move |ws| {
                debug!("Workspace added: {:?}", ws);
                match workspace_ids() {
                    Ok(ids) => forward(&tx, WmEvent::WorkspacesChanged(ids)),
                    Err(e) => warn!("Failed to query workspaces: {}", e),
                }
            });

            let tx = events;
            listener.add_workspace_deleted_handler(move |ws| {
                debug!("Workspace deleted: {:?}", ws);
                match workspace_ids() {
                    Ok(ids) => forward(&tx, WmEvent::WorkspacesChanged(ids)),
                    Err(e) => warn!("Failed to query workspaces: {}", e),
                }
            });

            info!("Hyprland event listener active");
            if let Err(e) = listener.start_listener() {
                error!("Hyprland listener failed: {}", e);
                RUNNING.store(false, Ordering::SeqCst);
            }
        });
    }
}

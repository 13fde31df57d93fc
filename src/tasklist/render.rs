//! Button descriptors and the renderers that consume them.

use capy_wm::WorkspaceId;
use log::{info, warn};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

use crate::config::RendererKind;

/// One task list button: what to show and what clicking does.
#[derive(Clone)]
pub struct ButtonDescriptor {
    /// Address of the window this button focuses.
    pub address: String,
    /// Icon name from the desktop entry.
    pub icon: String,
    on_activate: Rc<dyn Fn()>,
}

impl ButtonDescriptor {
    pub fn new(address: String, icon: String, on_activate: impl Fn() + 'static) -> Self {
        Self {
            address,
            icon,
            on_activate: Rc::new(on_activate),
        }
    }

    /// Run the click action.
    pub fn activate(&self) {
        (self.on_activate)()
    }
}

impl fmt::Debug for ButtonDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonDescriptor")
            .field("address", &self.address)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// Whatever draws the buttons. Gets the full list for a workspace after
/// every resync and does its own diffing.
pub trait TaskListRenderer {
    fn render(&mut self, workspace_id: WorkspaceId, buttons: &[ButtonDescriptor]);
}

/// Logs each list. Useful when running headless.
pub struct LogRenderer;

impl TaskListRenderer for LogRenderer {
    fn render(&mut self, workspace_id: WorkspaceId, buttons: &[ButtonDescriptor]) {
        let icons: Vec<&str> = buttons.iter().map(|b| b.icon.as_str()).collect();
        info!("Workspace {} task list: {:?}", workspace_id, icons);
    }
}

#[derive(Serialize)]
struct ButtonSnapshot<'a> {
    address: &'a str,
    icon: &'a str,
}

#[derive(Serialize)]
struct TaskListSnapshot<'a> {
    workspace: WorkspaceId,
    buttons: Vec<ButtonSnapshot<'a>>,
}

/// Writes one JSON object per update, for bars that read a command's stdout.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TaskListRenderer for JsonRenderer<W> {
    fn render(&mut self, workspace_id: WorkspaceId, buttons: &[ButtonDescriptor]) {
        let snapshot = TaskListSnapshot {
            workspace: workspace_id,
            buttons: buttons
                .iter()
                .map(|b| ButtonSnapshot {
                    address: &b.address,
                    icon: &b.icon,
                })
                .collect(),
        };

        let written = serde_json::to_writer(&mut self.out, &snapshot)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());

        if let Err(e) = written {
            warn!("Failed to write task list for workspace {}: {}", workspace_id, e);
        }
    }
}

/// Build the renderer selected in the config.
pub fn for_kind(kind: RendererKind) -> Box<dyn TaskListRenderer> {
    match kind {
        RendererKind::Log => Box::new(LogRenderer),
        RendererKind::Json => Box::new(JsonRenderer::new(std::io::stdout())),
    }
}

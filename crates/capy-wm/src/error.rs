//! Error types for capy-wm

/// Window manager backend errors
#[derive(Debug, thiserror::Error)]
pub enum WmError {
    #[error("IPC error: {0}")]
    Ipc(String),

    #[error("No supported window manager detected")]
    Unsupported,
}

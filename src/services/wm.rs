use capy_wm::{WindowBackend, WmError, detect_wm};
use log::info;
use std::sync::Arc;

/// Connect to the running compositor.
pub fn connect() -> Result<Arc<dyn WindowBackend>, WmError> {
    info!("Detected window manager: {}", detect_wm());
    capy_wm::create_backend().map(Arc::from)
}

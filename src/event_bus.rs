//! Event bus between the compositor listener and the dispatch thread.
//!
//! The backend's listener thread only sends; every `WmEvent` is applied to
//! the controller on the thread that calls [`run`], in arrival order.

use crate::tasklist::TaskListController;
use capy_apps::AppResolver;
use capy_wm::WmEvent;
use crossbeam_channel::{Receiver, Sender};
use log::debug;

/// Unbounded: window events are rare and must never be dropped.
pub fn channel() -> (Sender<WmEvent>, Receiver<WmEvent>) {
    crossbeam_channel::unbounded()
}

/// Apply events until every sender is gone. Returns the number handled.
pub fn run<R: AppResolver>(rx: &Receiver<WmEvent>, controller: &mut TaskListController<R>) -> usize {
    let mut handled = 0;
    for event in rx.iter() {
        debug!("Dispatching {:?}", event);
        controller.handle_event(event);
        handled += 1;
    }
    handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasklist::testing::{FakeBackend, MapResolver, RecordingRenderer, window};
    use capy_apps::ResolutionCache;
    use capy_wm::WindowBackend;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_events_from_other_thread_apply_in_order() {
        let backend = Arc::new(FakeBackend::new(1));
        let dyn_backend: Arc<dyn WindowBackend> = backend.clone();
        let mut controller = TaskListController::new(
            dyn_backend,
            ResolutionCache::new(MapResolver::new(&[("kitty", "kitty")])),
            Box::new(RecordingRenderer::default()),
        );
        controller.register_view(1);

        let kitty = window("0x1", "kitty", 1, "kitty");
        backend.open(kitty.clone());

        let (tx, rx) = channel();
        let producer = thread::spawn(move || {
            tx.send(WmEvent::WindowAdded(kitty)).unwrap();
            tx.send(WmEvent::WindowClosed {
                address: "0x1".into(),
            })
            .unwrap();
        });
        producer.join().unwrap();

        assert_eq!(run(&rx, &mut controller), 2);
        assert!(controller.running_apps().is_empty());
    }
}

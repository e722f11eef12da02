//! Content registrations: setup and draw listeners.

use std::panic::{catch_unwind, AssertUnwindSafe};

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type SetupFn<U> = Box<dyn FnMut(&mut U, bool)>;
type DrawFn<U> = Box<dyn FnMut(&mut U)>;

/// Ordered setup and draw listeners. Invocation order is registration order.
pub(crate) struct Listeners<U> {
    next_id: u64,
    setup: Vec<(ListenerId, SetupFn<U>)>,
    draw: Vec<(ListenerId, DrawFn<U>)>,
}

impl<U> Default for Listeners<U> {
    fn default() -> Self {
        Self {
            next_id: 0,
            setup: Vec::new(),
            draw: Vec::new(),
        }
    }
}

impl<U> Listeners<U> {
    fn next_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn add_setup(&mut self, listener: SetupFn<U>) -> ListenerId {
        let id = self.next_id();
        self.setup.push((id, listener));
        id
    }

    pub(crate) fn add_draw(&mut self, listener: DrawFn<U>) -> ListenerId {
        let id = self.next_id();
        self.draw.push((id, listener));
        id
    }

    /// Removes a listener of either kind. Returns false for unknown ids.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.setup.len() + self.draw.len();
        self.setup.retain(|(existing, _)| *existing != id);
        self.draw.retain(|(existing, _)| *existing != id);
        before != self.setup.len() + self.draw.len()
    }

    pub(crate) fn draw_count(&self) -> usize {
        self.draw.len()
    }

    pub(crate) fn notify_setup(&mut self, ui: &mut U, success: bool) {
        for (id, listener) in &mut self.setup {
            if catch_unwind(AssertUnwindSafe(|| listener(ui, success))).is_err() {
                log::error!("setup listener {id:?} panicked");
            }
        }
    }

    /// Runs every draw listener once.
    ///
    /// A panicking listener is logged and skipped; the remaining listeners
    /// still run so the caller can close the frame.
    pub(crate) fn notify_draw(&mut self, ui: &mut U) -> usize {
        let mut failed = 0;
        for (id, listener) in &mut self.draw {
            if catch_unwind(AssertUnwindSafe(|| listener(ui))).is_err() {
                log::error!("draw listener {id:?} panicked");
                failed += 1;
            }
        }
        failed
    }
}

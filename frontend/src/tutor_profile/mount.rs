use std::cell::Cell;
use std::rc::Rc;

/// Tracks whether the screen is still mounted.
///
/// Requests are never aborted on unmount, so every task that finishes after
/// the screen went away must check the guard before touching state.
#[derive(Clone, Debug)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self { mounted: Rc::new(Cell::new(true)) }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn unmount(&self) {
        self.mounted.set(false);
    }

    /// Runs `f` only while mounted; returns whether it ran.
    pub fn run_if_mounted(&self, f: impl FnOnce()) -> bool {
        if self.is_mounted() {
            f();
            true
        } else {
            false
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MountGuard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.mounted, &other.mounted)
    }
}

//! Busy indicators shared between the editor and its front end

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cloneable on/off flag, e.g. "uploading" or "loading"
///
/// Clones observe the same flag, so a front end can disable controls while
/// an action it does not own is running.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    /// New, cleared flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the flag is currently set
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Set the flag unless it is already set
    ///
    /// The flag is cleared again when the returned guard drops.
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| BusyGuard {
                flag: Arc::clone(&self.0),
                armed: true,
            })
    }
}

/// Clears its [`BusyFlag`] on drop
#[derive(Debug)]
pub struct BusyGuard {
    flag: Arc<AtomicBool>,
    armed: bool,
}

impl BusyGuard {
    /// Leave the flag set after this guard is gone
    pub fn hold(mut self) {
        self.armed = false;
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if self.armed {
            self.flag.store(false, Ordering::SeqCst);
        }
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A flag shared between a running search and whoever may want to stop it.
///
/// Clones share the same flag. Once cancelled, a token stays cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Cancels and reports whether the token had already been cancelled before.
    pub fn interrupt(&self) -> bool {
        self.0.swap(true, Ordering::Relaxed)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

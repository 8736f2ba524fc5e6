//! Loading flag shared by the profile sub-forms.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared `isLoading` flag.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag {
    inner: Arc<AtomicBool>,
}

impl LoadingFlag {
    pub fn is_loading(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }

    pub fn set(&self, loading: bool) {
        self.inner.store(loading, Ordering::SeqCst);
    }

    /// Raise the flag until the returned guard is dropped.
    pub fn begin(&self) -> LoadingGuard {
        self.set(true);
        LoadingGuard { flag: self.clone() }
    }
}

/// A RAII guard that clears the loading flag.
#[derive(Debug)]
pub struct LoadingGuard {
    flag: LoadingFlag,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

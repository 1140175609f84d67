//! Output region abstraction.

use std::sync::{Arc, Mutex, PoisonError};

/// The region a submission renders into.
///
/// `replace` swaps the region's entire contents.
pub trait OutputSink {
    fn replace(&self, html: &str);
}

impl<T: OutputSink + ?Sized> OutputSink for &T {
    fn replace(&self, html: &str) {
        (**self).replace(html);
    }
}

impl<T: OutputSink + ?Sized> OutputSink for Arc<T> {
    fn replace(&self, html: &str) {
        (**self).replace(html);
    }
}

/// In-memory region holding only the current contents.
#[derive(Debug, Default)]
pub struct LatestSink {
    contents: Mutex<String>,
}

impl LatestSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the region (empty before the first write).
    pub fn contents(&self) -> String {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl OutputSink for LatestSink {
    fn replace(&self, html: &str) {
        let mut contents = self.contents.lock().unwrap_or_else(PoisonError::into_inner);
        contents.clear();
        contents.push_str(html);
    }
}

/// Recording sink for tests and inspection.
///
/// Keeps every write for the sink's lifetime; use [`LatestSink`] for a
/// long-lived handler.
#[derive(Debug, Default)]
pub struct MemorySink {
    writes: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the region (empty before the first write).
    pub fn contents(&self) -> String {
        self.lock().last().cloned().unwrap_or_default()
    }

    /// Every write so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OutputSink for MemorySink {
    fn replace(&self, html: &str) {
        self.lock().push(html.to_string());
    }
}

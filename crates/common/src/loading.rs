use std::sync::Arc;

use tokio::sync::watch;

/// Counted loading indicator shared by every store of a host.
///
/// Nested and concurrent actions each hold one count; the indicator is
/// active while the count is non-zero. Clones share the same counter.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    count: Arc<watch::Sender<usize>>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self {
            count: Arc::new(watch::Sender::new(0)),
        }
    }

    pub fn begin(&self) {
        self.count.send_modify(|count| *count += 1);
    }

    /// Release one count. Unbalanced calls saturate at zero.
    pub fn end(&self) {
        self.count.send_modify(|count| {
            if *count == 0 {
                tracing::warn!("loading indicator ended more times than it began");
            }
            *count = count.saturating_sub(1);
        });
    }

    /// Begin loading and end it when the returned guard drops.
    pub fn guard(&self) -> LoadingGuard {
        self.begin();
        LoadingGuard {
            indicator: self.clone(),
        }
    }

    pub fn count(&self) -> usize {
        *self.count.borrow()
    }

    pub fn is_loading(&self) -> bool {
        self.count() > 0
    }

    /// Watch the in-flight count
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.count.subscribe()
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds one count of a [`LoadingIndicator`] until dropped.
#[must_use = "dropping the guard ends loading immediately"]
#[derive(Debug)]
pub struct LoadingGuard {
    indicator: LoadingIndicator,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.indicator.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_nest() {
        let loading = LoadingIndicator::new();
        assert!(!loading.is_loading());

        loading.begin();
        loading.begin();
        assert_eq!(loading.count(), 2);

        loading.end();
        assert!(loading.is_loading());
        loading.end();
        assert!(!loading.is_loading());
    }

    #[test]
    fn test_end_saturates() {
        let loading = LoadingIndicator::new();
        loading.end();
        assert_eq!(loading.count(), 0);
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let loading = LoadingIndicator::new();
        let shared = loading.clone();
        {
            let _outer = loading.guard();
            let _inner = shared.guard();
            assert_eq!(loading.count(), 2);
        }
        assert_eq!(shared.count(), 0);
    }

    #[test]
    fn test_guard_releases_on_unwind() {
        let loading = LoadingIndicator::new();
        let inner = loading.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = inner.guard();
            panic!("action failed");
        }));

        assert!(result.is_err());
        assert!(!loading.is_loading());
    }

    #[tokio::test]
    async fn test_subscribers_observe_transitions() {
        let loading = LoadingIndicator::new();
        let mut rx = loading.subscribe();

        let guard = loading.guard();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);

        drop(guard);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 0);
    }
}

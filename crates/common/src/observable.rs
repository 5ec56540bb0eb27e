use tokio::sync::watch;

/// A value plus the set of subscribers watching it.
///
/// Reads borrow or clone the current value; writes are crate-private so
/// only the owning store can replace it. Every write wakes subscribers.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            tx: watch::Sender::new(value),
        }
    }

    /// Clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    /// Run `f` against the current value without cloning it.
    ///
    /// The value is read-locked for the duration of `f`; do not write to
    /// the same observable from inside it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Receiver that is marked changed on every write
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Replace the value, returning the previous one
    pub(crate) fn set(&self, value: T) -> T {
        self.tx.send_replace(value)
    }

    pub(crate) fn modify(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_see_writes() {
        let observable = Observable::new(vec![1, 2]);
        let mut rx = observable.subscribe();
        assert!(!rx.has_changed().unwrap());

        let previous = observable.set(vec![3]);
        assert_eq!(previous, vec![1, 2]);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), vec![3]);
    }

    #[test]
    fn test_modify_in_place() {
        let observable = Observable::new(vec![1]);
        observable.modify(|v| v.push(2));

        assert_eq!(observable.get(), vec![1, 2]);
        assert_eq!(observable.with(|v| v.len()), 2);
    }

    #[test]
    fn test_writes_without_subscribers_are_kept() {
        let observable: Observable<Vec<u8>> = Observable::default();
        assert_eq!(observable.subscriber_count(), 0);

        observable.set(vec![7]);
        assert_eq!(observable.get(), vec![7]);
    }
}

use std::sync::Mutex;

use super::lock;
use crate::toast::{Notifier, ToastMessage, ToastOptions};

/// Keeps every resolved toast so tests can assert on them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<ToastMessage>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<ToastMessage> {
        lock(&self.messages).clone()
    }

    pub fn count(&self) -> usize {
        lock(&self.messages).len()
    }
}

impl Notifier for RecordingNotifier {
    fn add(&self, options: ToastOptions) {
        lock(&self.messages).push(options.resolve());
    }
}

// tests/support/mocks/util.rs
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out the queued ids in order, then `fallback` forever. Counts calls.
pub struct SequenceIdGenerator {
    queue: Mutex<VecDeque<String>>,
    fallback: String,
    calls: AtomicUsize,
}

impl SequenceIdGenerator {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: Mutex::new(ids.into_iter().map(Into::into).collect()),
            fallback: "fallbackid".into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn repeating(id: impl Into<String>) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: id.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl dp_studio::application::ports::util::RandomIdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

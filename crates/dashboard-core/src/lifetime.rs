//! View Lifetime
//!
//! Async work started by a view checks the token before writing state, so a
//! response that lands after the view was torn down is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Mark the owning view as gone; shared by every clone
    pub fn end(&self) {
        self.alive.store(false, Ordering::Release);
    }

    /// Run `f` only while the view is alive
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self.is_alive() {
            Some(f())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_is_shared_across_clones() {
        let lifetime = ViewLifetime::new();
        let task_copy = lifetime.clone();
        assert_eq!(task_copy.run(|| 1), Some(1));

        lifetime.end();
        assert!(!task_copy.is_alive());
        assert_eq!(task_copy.run(|| 2), None);
    }
}

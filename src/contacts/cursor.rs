//! Shared pagination cursor for the paged retrieval operation.

use std::sync::{Mutex, PoisonError};

/// Offset counter shared by all retrieval requests for the lifetime of
/// the process.
///
/// Successive calls walk pages 0, 1, 2, ... until the caller observes a
/// short page and resets, producing a wrap-around scan of the table.
/// The capture-increment in [`PageCursor::advance`] is the one critical
/// section in the service; without it, concurrent retrievals could
/// observe duplicate or skipped offsets.
///
/// Injected as a dependency rather than held in process-wide state so
/// tests can instantiate isolated instances.
#[derive(Debug, Default)]
pub struct PageCursor {
    offset: Mutex<u64>,
}

impl PageCursor {
    /// Create a cursor positioned at the start of the table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current offset and advance it by `page_size`.
    ///
    /// Returns the captured (pre-increment) value, which is the offset
    /// the caller should query at.
    pub fn advance(&self, page_size: u64) -> u64 {
        let mut offset = self.offset.lock().unwrap_or_else(PoisonError::into_inner);
        let current = *offset;
        *offset += page_size;
        current
    }

    /// Rewind to the start of the table.
    ///
    /// Called after a retrieval returns fewer rows than requested.
    pub fn reset(&self) {
        let mut offset = self.offset.lock().unwrap_or_else(PoisonError::into_inner);
        *offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_advance_returns_pre_increment_offset() {
        let cursor = PageCursor::new();
        assert_eq!(cursor.advance(10), 0);
        assert_eq!(cursor.advance(10), 10);
        assert_eq!(cursor.advance(10), 20);
    }

    #[test]
    fn test_reset_restarts_at_zero() {
        let cursor = PageCursor::new();
        cursor.advance(10);
        cursor.advance(10);
        cursor.reset();
        assert_eq!(cursor.advance(10), 0);
    }

    #[test]
    fn test_concurrent_advances_never_overlap() {
        let cursor = Arc::new(PageCursor::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let cursor = Arc::clone(&cursor);
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| cursor.advance(10)).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for offset in handle.join().expect("worker panicked") {
                assert!(seen.insert(offset), "offset {} observed twice", offset);
            }
        }
        assert_eq!(seen.len(), 800);
    }
}

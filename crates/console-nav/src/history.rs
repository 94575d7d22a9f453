//! The history seam.
//!
//! The browser/OS navigation stack is an external collaborator; the navigator
//! only talks to this trait. [`MemoryHistory`] is the in-process
//! implementation used by tests and headless runs.

/// External owner of the navigation stack and current URL.
pub trait HistoryAdapter {
    /// The path the surface is currently showing.
    fn current_path(&self) -> &str;

    /// Pushes a new entry, discarding any forward entries.
    fn push(&mut self, path: &str);

    /// Replaces the current entry in place.
    fn replace(&mut self, path: &str);

    /// Steps back one entry; returns the new current path, or `None` at the
    /// start of the stack.
    fn back(&mut self) -> Option<&str>;
}

/// A plain stack-and-cursor history for tests and headless use.
///
/// # Examples
///
/// ```
/// use console_nav::{HistoryAdapter, MemoryHistory};
///
/// let mut history = MemoryHistory::new();
/// assert_eq!(history.current_path(), "/");
///
/// history.push("/agents");
/// history.push("/chat/42");
/// assert_eq!(history.back(), Some("/agents"));
/// assert_eq!(history.back(), Some("/"));
/// assert_eq!(history.back(), None);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// Starts at the root path, like a fresh browser tab on the app origin.
    pub fn new() -> Self {
        Self {
            entries: vec!["/".to_string()],
            cursor: 0,
        }
    }

    /// Number of entries currently on the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the stack never drops below one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryAdapter for MemoryHistory {
    fn current_path(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor += 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.cursor] = path.to_string();
    }

    fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_discards_forward_entries() {
        let mut history = MemoryHistory::new();
        history.push("/agents");
        history.push("/settings");
        history.back();

        history.push("/mcps");
        assert_eq!(history.current_path(), "/mcps");
        assert_eq!(history.len(), 3); // "/", "/agents", "/mcps"
    }

    #[test]
    fn replace_keeps_stack_depth() {
        let mut history = MemoryHistory::new();
        history.push("/chat");
        history.replace("/chat/42");
        assert_eq!(history.current_path(), "/chat/42");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn back_stops_at_first_entry() {
        let mut history = MemoryHistory::new();
        assert_eq!(history.back(), None);
        assert_eq!(history.current_path(), "/");
    }
}

//! Location history with push/replace semantics

/// Browser-like history of location paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// The current location
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Navigate to `path`, discarding any forward entries
    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        if path == self.current() {
            return;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(path);
        self.index += 1;
    }

    /// Swap the current entry for `path`
    pub fn replace(&mut self, path: impl Into<String>) {
        self.entries[self.index] = path.into();
    }

    /// Step back; returns `false` at the oldest entry
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward; returns `false` at the newest entry
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

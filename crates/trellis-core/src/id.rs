//! Identifier generation for graph elements

/// Monotonic id source
///
/// Produces `"1"`, `"2"`, ... for the lifetime of the owning graph. Values are
/// never reused, even after the element carrying them is deleted.
#[derive(Debug, Default)]
pub struct IdAllocator {
    current: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id, distinct from every id this allocator returned before
    pub fn generate(&mut self) -> String {
        self.current += 1;
        self.current.to_string()
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.current
    }
}

//! Navigation history.

/// Stack of visited paths. The bottom entry is never popped.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    entries: Vec<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit. Revisiting the current path does not grow the stack.
    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.current() != Some(path.as_str()) {
            self.entries.push(path);
        }
    }

    /// Step back one entry and return the path now current, or `None` when
    /// already at the first entry.
    pub fn back(&mut self) -> Option<&str> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop();
        self.current()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back() {
        let mut nav = Navigator::new();
        nav.push("/");
        nav.push("/movie/1");
        nav.push("/movie/2");

        assert_eq!(nav.back(), Some("/movie/1"));
        assert_eq!(nav.back(), Some("/"));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.current(), Some("/"));
    }

    #[test]
    fn test_repeat_push_collapses() {
        let mut nav = Navigator::new();
        nav.push("/");
        nav.push("/");
        assert_eq!(nav.depth(), 1);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_empty_history() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), None);
        assert_eq!(nav.back(), None);
    }
}

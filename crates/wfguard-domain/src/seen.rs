use std::collections::HashSet;

/// Run-scoped set of messages that have already been reported.
///
/// Grows monotonically; never shrinks. Owned by the caller and passed by
/// reference into the result processor.
#[derive(Clone, Debug, Default)]
pub struct SeenMessages {
    messages: HashSet<String>,
}

impl SeenMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages.contains(message)
    }

    /// Returns `true` when the message was not seen before.
    pub fn insert(&mut self, message: &str) -> bool {
        if self.messages.contains(message) {
            return false;
        }
        self.messages.insert(message.to_string())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_novelty_once() {
        let mut seen = SeenMessages::new();
        assert!(seen.insert("a"));
        assert!(!seen.insert("a"));
        assert!(seen.contains("a"));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn empty_string_is_a_message() {
        let mut seen = SeenMessages::new();
        assert!(seen.is_empty());
        assert!(seen.insert(""));
        assert!(!seen.is_empty());
    }
}

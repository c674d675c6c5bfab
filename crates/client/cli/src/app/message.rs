//! Message log shown under the board.
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Turn the message was produced on.
    pub turn: u32,
    pub level: MessageLevel,
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, turn: u32, level: MessageLevel, text: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry {
            text: text.into(),
            turn,
            level,
        });
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_fall_off_at_capacity() {
        let mut log = MessageLog::new(2);
        log.push(1, MessageLevel::Info, "first");
        log.push(1, MessageLevel::Info, "second");
        log.push(2, MessageLevel::Warning, "third");

        assert_eq!(log.len(), 2);
        let texts: Vec<_> = log.recent(5).map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["third", "second"]);
    }
}

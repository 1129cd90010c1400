use core::fmt;

/// One line of match narration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub turn: u32,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Turn {}: {}", self.turn, self.message)
    }
}

/// Append-only narration log for a single match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnLog {
    entries: Vec<LogEntry>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: u32, message: impl Into<String>) {
        self.entries.push(LogEntry {
            turn,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The last `count` entries, oldest first.
    pub fn tail(&self, count: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered lines (`"Turn T: message"`).
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(LogEntry::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_returns_most_recent_in_order() {
        let mut log = TurnLog::new();
        for turn in 1..=5 {
            log.push(turn, format!("event {turn}"));
        }

        let tail: Vec<_> = log.tail(2).iter().map(|e| e.turn).collect();
        assert_eq!(tail, vec![4, 5]);
        assert_eq!(log.tail(10).len(), 5);
        assert_eq!(log.last().map(|e| e.to_string()), Some("Turn 5: event 5".into()));
    }
}

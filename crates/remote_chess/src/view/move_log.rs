//! User-facing game log.

use chrono::{DateTime, Local};
use derive_getters::Getters;
use tracing::debug;

/// Category of a log entry, used to pick its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum LogKind {
    /// The local player's accepted move.
    PlayerMove,
    /// The opponent's move.
    OpponentMove,
    /// Informational notice.
    Info,
    /// A locally rejected action or a refused request.
    Warning,
    /// A transport failure.
    Error,
    /// The game ended.
    GameOver,
}

impl LogKind {
    /// Icon shown before the entry text.
    pub fn icon(self) -> &'static str {
        match self {
            LogKind::PlayerMove => "👤",
            LogKind::OpponentMove => "🤖",
            LogKind::Info => "ℹ️",
            LogKind::Warning => "❌",
            LogKind::Error => "⚠️",
            LogKind::GameOver => "🏁",
        }
    }
}

/// One immutable log line.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct LogEntry {
    /// Insertion sequence number.
    seq: u64,
    /// Local time the entry was appended.
    at: DateTime<Local>,
    /// Category.
    kind: LogKind,
    /// Plain text, without icon.
    text: String,
}

/// Append-only, ordered record of game events.
///
/// The view follows the newest entry: every append scrolls back to the end,
/// even if the user had scrolled up.
#[derive(Debug, Clone, Default)]
pub struct MoveLog {
    entries: Vec<LogEntry>,
    next_seq: u64,
    scroll_back: usize,
}

impl MoveLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and scrolls it into view.
    pub fn append(&mut self, kind: LogKind, text: impl Into<String>) -> &LogEntry {
        let entry = LogEntry {
            seq: self.next_seq,
            at: Local::now(),
            kind,
            text: text.into(),
        };
        debug!(seq = entry.seq, kind = %entry.kind, text = %entry.text, "Log entry");
        self.next_seq += 1;
        self.scroll_back = 0;
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Removes every entry. Only a session reset does this.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll_back = 0;
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scrolls towards older entries.
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_back = (self.scroll_back + lines).min(self.entries.len().saturating_sub(1));
    }

    /// Scrolls towards the newest entry.
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    /// Entries that fit in a window of `height` lines.
    pub fn visible(&self, height: usize) -> &[LogEntry] {
        let end = self.entries.len().saturating_sub(self.scroll_back);
        let start = end.saturating_sub(height);
        &self.entries[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut log = MoveLog::new();
        log.append(LogKind::Info, "first");
        log.append(LogKind::PlayerMove, "second");
        let texts: Vec<_> = log.entries().iter().map(|e| e.text().as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
        assert!(log.entries()[0].seq() < log.entries()[1].seq());
    }

    #[test]
    fn test_window_follows_newest_entry() {
        let mut log = MoveLog::new();
        for i in 0..10 {
            log.append(LogKind::Info, format!("entry {}", i));
        }
        let window = log.visible(3);
        assert_eq!(window.len(), 3);
        assert_eq!(window[2].text(), "entry 9");
    }

    #[test]
    fn test_append_snaps_back_after_scrolling() {
        let mut log = MoveLog::new();
        for i in 0..10 {
            log.append(LogKind::Info, format!("entry {}", i));
        }
        log.scroll_up(4);
        assert_eq!(log.visible(3)[2].text(), "entry 5");
        log.append(LogKind::Info, "newest");
        assert_eq!(log.visible(3)[2].text(), "newest");
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut log = MoveLog::new();
        log.append(LogKind::Info, "only");
        log.scroll_up(10);
        assert_eq!(log.visible(5).len(), 1);
        log.scroll_down(10);
        assert_eq!(log.visible(5).len(), 1);
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log = MoveLog::new();
        log.append(LogKind::Info, "a");
        log.clear();
        assert!(log.is_empty());
        assert!(log.visible(5).is_empty());
    }
}

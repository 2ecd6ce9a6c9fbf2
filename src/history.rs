use std::collections::VecDeque;

/// Previously submitted lines, oldest first. Resubmitting a line moves it to
/// the end instead of storing it twice.
#[derive(Debug, Clone)]
pub struct InputHistory {
    entries: VecDeque<String>,
    limit: usize,
    /// Index being recalled, `None` when not navigating.
    cursor: Option<usize>,
}

impl InputHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
            cursor: None,
        }
    }

    /// Records `line` (blank lines are ignored) and stops any recall.
    pub fn push(&mut self, line: &str) {
        self.cursor = None;
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.entries.retain(|e| e != line);
        self.entries.push_back(line.to_string());
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// One step toward older entries, stopping at the oldest. `None` when
    /// there is no history at all.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.entries.get(index).map(|s| s.as_str())
    }

    /// One step toward newer entries. Stepping past the newest ends the recall
    /// and yields an empty line.
    pub fn next(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        match self.cursor {
            None => Some(""),
            Some(i) if i + 1 >= self.entries.len() => {
                self.cursor = None;
                Some("")
            }
            Some(i) => {
                self.cursor = Some(i + 1);
                self.entries.get(i + 1).map(|s| s.as_str())
            }
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_navigating(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resubmitting_moves_entry_to_end() {
        let mut history = InputHistory::new(50);
        history.push("help");
        history.push("about");
        history.push("help");
        assert_eq!(history.entries(), vec!["about", "help"]);
    }

    #[test]
    fn evicts_oldest_past_limit() {
        let mut history = InputHistory::new(50);
        for i in 0..120 {
            history.push(&format!("cmd{}", i));
            assert!(history.len() <= 50);
        }
        let entries = history.entries();
        assert_eq!(entries.first().map(String::as_str), Some("cmd70"));
        assert_eq!(entries.last().map(String::as_str), Some("cmd119"));
    }

    #[test]
    fn ignores_blank_lines() {
        let mut history = InputHistory::new(50);
        history.push("   ");
        assert!(history.is_empty());
    }

    #[test]
    fn walks_back_and_forth() {
        let mut history = InputHistory::new(50);
        history.push("help");
        history.push("about");

        assert_eq!(history.previous(), Some("about"));
        assert_eq!(history.previous(), Some("help"));
        // saturates at the oldest
        assert_eq!(history.previous(), Some("help"));
        assert_eq!(history.next(), Some("about"));
        assert_eq!(history.next(), Some(""));
        assert!(!history.is_navigating());
    }

    #[test]
    fn empty_history_navigation_is_a_no_op() {
        let mut history = InputHistory::new(50);
        assert_eq!(history.previous(), None);
        assert_eq!(history.next(), None);
        assert_eq!(history.cursor(), None);
    }
}

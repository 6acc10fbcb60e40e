use super::matcher;

/// Caller-side selection state for one autocomplete interaction.
///
/// Holds the candidate snapshot, the list filtered by the latest query, and
/// the keyboard cursor. A fresh or refined picker starts with nothing
/// highlighted; navigation clamps at the list edges instead of wrapping.
#[derive(Debug, Clone, Default)]
pub struct SuggestionPicker {
    candidates: Vec<String>,
    filtered: Vec<String>,
    cursor: Option<usize>,
}

impl SuggestionPicker {
    /// Create a picker over a snapshot of rendered suggestion labels.
    pub fn new(candidates: Vec<String>) -> Self {
        let filtered = candidates.clone();
        Self {
            candidates,
            filtered,
            cursor: None,
        }
    }

    /// Re-filter the candidate snapshot against `query`.
    ///
    /// The cursor resets: a highlight made against one filtered list is
    /// meaningless against the next.
    pub fn refine(&mut self, query: &str) {
        self.filtered = matcher::filter(&self.candidates, query);
        self.cursor = None;
    }

    /// The labels the widget would currently display, in display order.
    pub fn suggestions(&self) -> &[String] {
        &self.filtered
    }

    /// Whether the suggestion box has anything to show.
    pub fn is_visible(&self) -> bool {
        !self.filtered.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.cursor
    }

    /// One "down" press. Clamps at the last entry.
    pub fn select_next(&mut self) {
        self.cursor = matcher::advance_cursor(&self.filtered, self.cursor, 1);
    }

    /// One "up" press. Stepping above the first entry clears the highlight.
    pub fn select_previous(&mut self) {
        self.cursor = matcher::retreat_cursor(&self.filtered, self.cursor, 1);
    }

    /// The entry Enter would confirm, if any.
    pub fn confirm(&self) -> Option<&str> {
        matcher::confirm(&self.filtered, self.cursor)
    }
}

#[cfg(test)]
#[path = "picker_tests.rs"]
mod picker_tests;

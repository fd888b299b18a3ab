//! # Dashboard State
//!
//! Core state for Triptych. This module contains domain state only -
//! no TUI-specific types. Presentation state (the scrollable viewport's
//! content and offset) lives in the `tui` module.
//!
//! ```text
//! Dashboard
//! ├── choices: Vec<String>     // selectable options, fixed after init
//! ├── selected: usize          // cursor into choices
//! ├── terminal_width: i32      // usable width (outer margin removed)
//! ├── terminal_height: i32     // usable height (outer margin removed)
//! └── focus: Focus             // which region receives routed keys
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::layout::{self, Layout};

/// Which of the two interactive regions receives region-routed key events.
///
/// A closed enum rather than a bool so additional regions can be added
/// without boolean-blindness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The scrollable content pane.
    Viewport,
    /// The selectable choice list.
    Choices,
}

impl Focus {
    /// The other region. Toggling twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            Focus::Viewport => Focus::Choices,
            Focus::Choices => Focus::Viewport,
        }
    }
}

pub struct Dashboard {
    pub choices: Vec<String>,
    /// Invariant: `selected < choices.len()` whenever `choices` is non-empty.
    pub selected: usize,
    /// Signed on purpose: layout math is unclamped and may go negative on
    /// tiny terminals. See [`crate::core::layout`].
    pub terminal_width: i32,
    pub terminal_height: i32,
    pub focus: Focus,
}

impl Dashboard {
    pub fn new(choices: Vec<String>) -> Self {
        Self {
            choices,
            selected: 0,
            terminal_width: 0,
            terminal_height: 0,
            focus: Focus::Choices,
        }
    }

    /// Move the selection cursor up one row. No-op at the first row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection cursor down one row. No-op at the last row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.choices.len() {
            self.selected += 1;
        }
    }

    /// Current layout metrics, recomputed from terminal dimensions and the
    /// choice count on every call.
    pub fn layout(&self) -> Layout {
        layout::compute(self.terminal_width, self.terminal_height, self.choices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dashboard {
        Dashboard::new(vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
        ])
    }

    #[test]
    fn test_dashboard_new_defaults() {
        let dash = sample();
        assert_eq!(dash.selected, 0);
        assert_eq!(dash.focus, Focus::Choices);
        assert_eq!(dash.choices.len(), 3);
    }

    #[test]
    fn test_select_prev_stops_at_first_row() {
        let mut dash = sample();
        dash.select_prev();
        assert_eq!(dash.selected, 0);
    }

    #[test]
    fn test_select_next_stops_at_last_row() {
        let mut dash = sample();
        dash.select_next();
        assert_eq!(dash.selected, 1);
        dash.select_next();
        assert_eq!(dash.selected, 2);
        dash.select_next();
        assert_eq!(dash.selected, 2);
    }

    #[test]
    fn test_select_next_empty_choices() {
        let mut dash = Dashboard::new(Vec::new());
        dash.select_next();
        assert_eq!(dash.selected, 0);
    }

    #[test]
    fn test_focus_toggle_is_involution() {
        assert_eq!(Focus::Choices.toggled(), Focus::Viewport);
        assert_eq!(Focus::Choices.toggled().toggled(), Focus::Choices);
        assert_eq!(Focus::Viewport.toggled().toggled(), Focus::Viewport);
    }
}

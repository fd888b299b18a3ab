//! # Actions
//!
//! Everything that can happen to the dashboard becomes an `Action`.
//! Terminal resized? That's `Action::Resize`. Tab pressed? That's
//! `Action::FocusToggle`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns the outbound `Effect`. No side effects
//! here. Terminal I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the fields.
//! Viewport scrolling is not an `Action` — scroll semantics belong to the
//! viewport component, and the TUI layer forwards keys to it directly when
//! it has focus.

use crate::core::state::Dashboard;

/// A discrete external event, already stripped of terminal specifics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Raw terminal dimensions from a resize event.
    Resize { width: u16, height: u16 },
    /// Flip focus between the viewport and the choice list.
    FocusToggle,
    /// Move the choice cursor up one row.
    SelectUp,
    /// Move the choice cursor down one row.
    SelectDown,
    /// Reserved hook for committing the current choice. Currently a no-op.
    Activate,
    /// Terminate the program.
    Quit,
}

/// Outbound effect requested by `update`. The only effect this dashboard
/// can produce is program termination; everything else is a state change
/// followed by a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// The reducer: apply one action to the dashboard.
///
/// A resize reserves a 1-cell outer margin on each side, so the usable
/// dimensions are the raw ones minus 2. No clamping — a terminal narrower
/// than the margin produces negative usable space, which the layout math
/// carries through unchanged.
pub fn update(dashboard: &mut Dashboard, action: Action) -> Effect {
    match action {
        Action::Resize { width, height } => {
            dashboard.terminal_width = width as i32 - 2;
            dashboard.terminal_height = height as i32 - 2;
            Effect::None
        }
        Action::FocusToggle => {
            dashboard.focus = dashboard.focus.toggled();
            Effect::None
        }
        Action::SelectUp => {
            dashboard.select_prev();
            Effect::None
        }
        Action::SelectDown => {
            dashboard.select_next();
            Effect::None
        }
        Action::Activate => {
            // Selection commit is intentionally undefined for now.
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Focus;

    fn sample() -> Dashboard {
        Dashboard::new(vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
        ])
    }

    #[test]
    fn test_resize_reserves_outer_margin() {
        let mut dash = sample();
        assert_eq!(update(&mut dash, Action::Resize { width: 82, height: 22 }), Effect::None);
        assert_eq!(dash.terminal_width, 80);
        assert_eq!(dash.terminal_height, 20);

        let layout = dash.layout();
        assert_eq!(layout.choice_area_height, 5);
        assert_eq!(layout.main_height, 13);
        assert_eq!(layout.main_width, 49);
    }

    #[test]
    fn test_resize_smaller_than_margin_goes_negative() {
        let mut dash = sample();
        update(&mut dash, Action::Resize { width: 1, height: 0 });
        assert_eq!(dash.terminal_width, -1);
        assert_eq!(dash.terminal_height, -2);
    }

    #[test]
    fn test_focus_toggle_twice_restores_focus() {
        let mut dash = sample();
        assert_eq!(dash.focus, Focus::Choices);
        update(&mut dash, Action::FocusToggle);
        assert_eq!(dash.focus, Focus::Viewport);
        update(&mut dash, Action::FocusToggle);
        assert_eq!(dash.focus, Focus::Choices);
    }

    #[test]
    fn test_focus_toggle_leaves_selection_untouched() {
        let mut dash = sample();
        dash.selected = 1;
        update(&mut dash, Action::FocusToggle);
        assert_eq!(dash.selected, 1);
    }

    #[test]
    fn test_selection_walk_clamps_at_both_ends() {
        let mut dash = sample();
        update(&mut dash, Action::SelectDown);
        assert_eq!(dash.selected, 1);
        update(&mut dash, Action::SelectDown);
        assert_eq!(dash.selected, 2);
        update(&mut dash, Action::SelectDown);
        assert_eq!(dash.selected, 2);

        update(&mut dash, Action::SelectUp);
        update(&mut dash, Action::SelectUp);
        update(&mut dash, Action::SelectUp);
        assert_eq!(dash.selected, 0);
    }

    #[test]
    fn test_activate_is_a_no_op() {
        let mut dash = sample();
        dash.selected = 2;
        assert_eq!(update(&mut dash, Action::Activate), Effect::None);
        assert_eq!(dash.selected, 2);
        assert_eq!(dash.focus, Focus::Choices);
    }

    #[test]
    fn test_quit_mutates_nothing() {
        let mut dash = sample();
        dash.selected = 1;
        dash.focus = Focus::Viewport;
        dash.terminal_width = 80;
        dash.terminal_height = 20;

        assert_eq!(update(&mut dash, Action::Quit), Effect::Quit);
        assert_eq!(dash.selected, 1);
        assert_eq!(dash.focus, Focus::Viewport);
        assert_eq!(dash.terminal_width, 80);
        assert_eq!(dash.terminal_height, 20);
    }
}

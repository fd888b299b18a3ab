//! # Frame Composition
//!
//! `draw_ui` is a pure projection of state into a frame: the viewport block
//! stacked above the choice block on the left, the sidebar on the right,
//! all inside a 1-cell outer margin. No dashboard state is mutated here —
//! only the viewport's internal scroll state, per Ratatui's
//! `StatefulWidget` pattern.
//!
//! Block rectangles come straight from the layout formulas, not from
//! constraint solving. On a terminal too small for the content the formulas
//! go negative; [`layout::as_cells`] flattens those to zero-size rects and
//! `Rect::intersection` keeps everything inside the frame, so the picture
//! degrades instead of panicking.

use crate::core::layout::{self, SIDEBAR_WIDTH};
use crate::core::state::{Dashboard, Focus};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ChoiceList, Sidebar, Viewport};

use ratatui::Frame;
use ratatui::layout::{Margin, Rect};

pub fn draw_ui(frame: &mut Frame, dashboard: &Dashboard, tui: &mut TuiState) {
    let padded = frame.area().inner(Margin::new(1, 1));
    let metrics = dashboard.layout();

    let main_width = layout::as_cells(metrics.main_width);
    let main_height = layout::as_cells(metrics.main_height);
    let choice_height = layout::as_cells(metrics.choice_area_height);

    let viewport_area =
        Rect::new(padded.x, padded.y, main_width, main_height).intersection(padded);
    let choice_area = Rect::new(
        padded.x,
        padded.y.saturating_add(main_height),
        main_width,
        choice_height,
    )
    .intersection(padded);
    let sidebar_area = Rect::new(
        padded.x.saturating_add(main_width).saturating_add(1),
        padded.y,
        SIDEBAR_WIDTH as u16,
        padded.height,
    )
    .intersection(padded);

    Viewport::new(&mut tui.viewport, dashboard.focus == Focus::Viewport)
        .render(frame, viewport_area);
    ChoiceList::new(
        &dashboard.choices,
        dashboard.selected,
        dashboard.focus == Focus::Choices,
    )
    .render(frame, choice_area);
    Sidebar::new(&tui.sidebar_text).render(frame, sidebar_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn sample() -> (Dashboard, TuiState) {
        let mut dashboard = Dashboard::new(vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
        ]);
        update(&mut dashboard, Action::Resize { width: 82, height: 22 });
        let tui = TuiState {
            viewport: crate::tui::components::ViewportState::new(
                crate::core::config::default_content(),
            ),
            sidebar_text: "lorem ipsum".to_string(),
        };
        (dashboard, tui)
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_renders_all_three_panes() {
        let backend = TestBackend::new(82, 22);
        let mut terminal = Terminal::new(backend).unwrap();
        let (dashboard, mut tui) = sample();

        terminal
            .draw(|f| draw_ui(f, &dashboard, &mut tui))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Your scrollable content here..."));
        assert!(text.contains("> Option A"));
        assert!(text.contains("  Option B"));
        assert!(text.contains("lorem ipsum"));
    }

    #[test]
    fn test_draw_ui_marker_follows_selection() {
        let backend = TestBackend::new(82, 22);
        let mut terminal = Terminal::new(backend).unwrap();
        let (mut dashboard, mut tui) = sample();
        update(&mut dashboard, Action::SelectDown);

        terminal
            .draw(|f| draw_ui(f, &dashboard, &mut tui))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("  Option A"));
        assert!(text.contains("> Option B"));
    }

    #[test]
    fn test_draw_ui_survives_degenerate_terminal() {
        // 10x5 leaves negative layout dimensions; the frame must still render.
        let backend = TestBackend::new(10, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let (mut dashboard, mut tui) = sample();
        update(&mut dashboard, Action::Resize { width: 10, height: 5 });

        terminal
            .draw(|f| draw_ui(f, &dashboard, &mut tui))
            .unwrap();
    }

    #[test]
    fn test_draw_ui_before_first_resize() {
        // Dimensions default to zero until the first resize event.
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let (mut dashboard, mut tui) = sample();
        dashboard.terminal_width = 0;
        dashboard.terminal_height = 0;

        terminal
            .draw(|f| draw_ui(f, &dashboard, &mut tui))
            .unwrap();
    }
}

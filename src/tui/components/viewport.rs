//! # Viewport Component
//!
//! The scrollable content pane. Owns all scroll-position semantics — the
//! event loop forwards keys here verbatim while the viewport has focus and
//! never reimplements scrolling itself.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ViewportState` lives in `TuiState` (content buffer, scroll offset,
//!   pushed dimensions)
//! - `Viewport` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::border_style;
use crate::tui::event::TuiEvent;

/// Left padding inside the content pane, in cells.
const CONTENT_LEFT_PAD: u16 = 6;

/// Persistent state for the content pane.
///
/// `width`/`height` are pushed in on every resize via [`set_size`] and used
/// to clamp the scroll offset between frames; the content buffer is fixed
/// after construction.
///
/// [`set_size`]: ViewportState::set_size
pub struct ViewportState {
    pub scroll_state: ScrollViewState,
    content: Vec<String>,
    width: u16,
    height: u16,
}

impl ViewportState {
    pub fn new(content: Vec<String>) -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            content,
            // Default size before the first resize event arrives.
            width: 80,
            height: 20,
        }
    }

    /// Push new dimensions, recomputed by the layout formulas on resize.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp_scroll();
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total content height in rows.
    pub fn content_height(&self) -> u16 {
        self.content.len().min(u16::MAX as usize) as u16
    }

    /// Current vertical scroll offset.
    pub fn scroll_offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    /// Clamp the scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last line.
    fn clamp_scroll(&mut self) {
        let max_y = self.content_height().saturating_sub(self.height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for ViewportState {
    type Event = (); // The viewport emits no events; scrolling is internal.

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Up => self.scroll_state.scroll_up(),
            TuiEvent::Down => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
            }
            TuiEvent::Top => self.scroll_state.scroll_to_top(),
            TuiEvent::Bottom => {
                // Computed from the pushed dimensions rather than
                // ScrollViewState::scroll_to_bottom, which only knows sizes
                // after a render pass.
                let max_y = self.content_height().saturating_sub(self.height);
                let x = self.scroll_state.offset().x;
                self.scroll_state.set_offset(Position { x, y: max_y });
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the content pane.
pub struct Viewport<'a> {
    state: &'a mut ViewportState,
    focused: bool,
}

impl<'a> Viewport<'a> {
    pub fn new(state: &'a mut ViewportState, focused: bool) -> Self {
        Self { state, focused }
    }
}

impl<'a> Component for Viewport<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style(self.focused))
            .padding(Padding::left(CONTENT_LEFT_PAD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // A degenerate layout leaves nothing to scroll into. Visual artifact
        // by design — the layout math stays honest about the shortfall.
        if inner.is_empty() {
            return;
        }

        let content_width = inner.width.saturating_sub(1); // scrollbar column
        let total_height = self.state.content_height();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let lines: Vec<Line> = self
            .state
            .content
            .iter()
            .map(|l| Line::raw(l.as_str()))
            .collect();
        scroll_view.render_widget(
            Paragraph::new(Text::from(lines)),
            Rect::new(0, 0, content_width, total_height),
        );

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

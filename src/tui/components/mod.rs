//! # TUI Components
//!
//! One file per pane of the dashboard:
//!
//! - `viewport`: scrollable content pane (persistent `ViewportState` +
//!   transient `Viewport` wrapper, the stateful pattern)
//! - `choice_list`: selectable options with a cursor marker (stateless,
//!   props-based)
//! - `sidebar`: static right-hand panel (stateless)
//!
//! Each file contains the component's state, rendering, event handling,
//! and tests — self-contained, one read to understand it.

use ratatui::style::{Color, Style};

pub mod choice_list;
pub mod sidebar;
pub mod viewport;

pub use choice_list::ChoiceList;
pub use sidebar::Sidebar;
pub use viewport::{Viewport, ViewportState};

/// Border color of the region that currently has focus (ANSI bright blue).
pub(crate) const ACTIVE_BORDER: Color = Color::Indexed(12);
/// Border color of the unfocused region (ANSI bright black).
pub(crate) const INACTIVE_BORDER: Color = Color::Indexed(8);

pub(crate) fn border_style(focused: bool) -> Style {
    let color = if focused { ACTIVE_BORDER } else { INACTIVE_BORDER };
    Style::new().fg(color)
}

//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and routes keyboard events to the core reducer or the viewport.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! `route_event` is the single entry point for external events and encodes
//! the priority order:
//!
//! 1. Resize — update dimensions, push the recomputed size into the viewport.
//! 2. Global keys — quit terminates immediately; tab flips focus and is
//!    consumed entirely (it is never also routed to a region).
//! 3. Region-routed keys — the focused region at the time of the event
//!    decides: choice list navigation, or verbatim forwarding to the
//!    viewport's own scroll handler.
//!
//! ## Redraw Strategy
//!
//! One full-screen frame is drawn after every processed event; between
//! events the loop sleeps in `poll_event` without redrawing.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::layout;
use crate::core::state::{Dashboard, Focus};
use crate::tui::component::EventHandler;
use crate::tui::components::ViewportState;
use crate::tui::event::{TuiEvent, poll_event};

/// TUI-specific presentation state (not part of core logic).
pub struct TuiState {
    /// The scrollable content pane: buffer, offset, pushed dimensions.
    pub viewport: ViewportState,
    /// Static sidebar text.
    pub sidebar_text: String,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            viewport: ViewportState::new(config.content.clone()),
            sidebar_text: config.sidebar_text.clone(),
        }
    }
}

/// Process one external event against the dashboard and viewport.
///
/// Pure state transformation — no terminal I/O — so the whole input policy
/// is unit-testable. Returns the outbound effect (only `Effect::Quit` exists).
pub fn route_event(
    dashboard: &mut Dashboard,
    viewport: &mut ViewportState,
    event: &TuiEvent,
) -> Effect {
    match event {
        TuiEvent::Quit => return update(dashboard, Action::Quit),
        TuiEvent::Resize(width, height) => {
            let effect = update(
                dashboard,
                Action::Resize {
                    width: *width,
                    height: *height,
                },
            );
            let metrics = dashboard.layout();
            viewport.set_size(
                layout::as_cells(metrics.main_width),
                layout::as_cells(metrics.main_height),
            );
            return effect;
        }
        // Tab is consumed here: it toggles focus and is NOT routed to the
        // region that was focused when it was pressed.
        TuiEvent::FocusToggle => return update(dashboard, Action::FocusToggle),
        _ => {}
    }

    match dashboard.focus {
        Focus::Choices => match event {
            TuiEvent::Up => update(dashboard, Action::SelectUp),
            TuiEvent::Down => update(dashboard, Action::SelectDown),
            TuiEvent::Activate => update(dashboard, Action::Activate),
            // Paging keys mean nothing to the list.
            _ => Effect::None,
        },
        Focus::Viewport => {
            viewport.handle_event(event);
            Effect::None
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut dashboard = Dashboard::new(config.choices.clone());
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();

    // Crossterm emits no initial resize event, so seed the dimensions from
    // the real terminal size before the first frame.
    let size = terminal.size()?;
    route_event(
        &mut dashboard,
        &mut tui.viewport,
        &TuiEvent::Resize(size.width, size.height),
    );
    info!(
        "Dashboard started ({}x{} terminal, {} choices)",
        size.width,
        size.height,
        dashboard.choices.len()
    );

    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &dashboard, &mut tui))?;
            needs_redraw = false;
        }

        let Some(event) = poll_event() else { continue };
        debug!("Event: {:?}", event);
        needs_redraw = true;

        if route_event(&mut dashboard, &mut tui.viewport, &event) == Effect::Quit {
            break;
        }
    }

    info!("Dashboard shutting down");
    ratatui::restore();
    Ok(())
}

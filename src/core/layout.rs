//! # Layout Formulas
//!
//! Pure functions of the usable terminal dimensions and the choice count.
//! Recomputed on every resize and every render — nothing here is cached.
//!
//! The arithmetic is signed and deliberately unclamped: on a terminal too
//! small for the content the derived dimensions go negative. The render
//! boundary saturates to zero when converting to cells (see [`as_cells`]),
//! which degrades the picture instead of crashing, but the formulas
//! themselves never lie about the shortfall.

/// Fixed width of the static right-hand sidebar, in cells.
pub const SIDEBAR_WIDTH: i32 = 30;

/// Derived layout metrics for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Width of the left column (viewport block and choice block).
    pub main_width: i32,
    /// Height of the viewport block.
    pub main_height: i32,
    /// Height of the choice block: one row per choice plus its border.
    pub choice_area_height: i32,
}

/// Compute the layout from usable terminal dimensions and the choice count.
///
/// `terminal_width`/`terminal_height` already have the 1-cell outer margin
/// removed (the resize handler subtracts 2 from each raw dimension).
pub fn compute(terminal_width: i32, terminal_height: i32, choice_count: usize) -> Layout {
    let choice_area_height = choice_count as i32 + 2;
    Layout {
        main_width: terminal_width - (SIDEBAR_WIDTH + 1),
        main_height: terminal_height - (choice_area_height + 2),
        choice_area_height,
    }
}

/// Convert a signed dimension to terminal cells, saturating negatives to 0.
///
/// This is the only place degenerate layouts get flattened, and only because
/// the terminal cannot draw negative space.
pub fn as_cells(dim: i32) -> u16 {
    dim.clamp(0, u16::MAX as i32) as u16
}

//! Triptych library exports for testing

pub mod core;
pub mod tui;

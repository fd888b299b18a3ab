//! # Core Dashboard Logic
//!
//! This module contains Triptych's domain logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (dashboard)    │
//!                    │  • Layout (formulas)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Dashboard` struct — all UI state in one place
//! - [`layout`]: Pure layout formulas derived from terminal dimensions
//! - [`action`]: The `Action` enum — everything that can happen
//! - [`config`]: Optional TOML config with override hierarchy

pub mod action;
pub mod config;
pub mod layout;
pub mod state;

//! # Core Application Logic
//!
//! This module contains vetnav's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ViewRegistry         │
//!                    │  • SectionNavigator     │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    CLI     │
//!             │  Adapter   │          │  --check   │
//!             │ (ratatui)  │          │  --info    │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: Sections, nav controls and the fixed mapping between them
//! - [`navigator`]: `SectionNavigator`, the single-active-section invariant
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`diagnostics`]: Readiness checks reported through a `Notifier`
//! - [`config`]: TOML config and its override hierarchy
//! - [`date`]: The localized header date

pub mod action;
pub mod config;
pub mod date;
pub mod diagnostics;
pub mod navigator;
pub mod registry;
pub mod state;

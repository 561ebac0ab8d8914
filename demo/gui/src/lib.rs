//! # Demo GUI
//!
//! Terminal dashboard for visualising Black-Scholes option values and Greeks.
//!
//! ## TUI Mode
//! Uses ratatui for rendering and crossterm for terminal handling.
//!
//! ### Layout
//! - **Selectors**: dependent variable (Value, Greeks) and independent variable
//! - **Tabs**: Call / Put
//! - **Chart**: the selected metric across the slider window
//! - **Inputs**: S, K, r, σ, t; the independent variable's input is disabled
//! - **Range slider**: window of the independent variable
//! - **Information**: description of the model, parameters and Greeks

pub mod app;
pub mod screens;
pub mod state;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::TuiApp;
    pub use crate::state::{DashboardState, Focus};
}

//! Owners TUI: terminal component inspector with an owners-stack breadcrumb bar.
//!
//! - `owners_stack`: the bar widget, its overflow latch and the dropdown
//! - `app` / `input`: single-threaded state and event dispatch
//! - `ui`: frame layout around the bar

pub mod app;
pub mod config;
pub mod input;
pub mod owners_stack;
pub mod sample_data;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use config::BarConfig;
pub use owners_stack::{EventOutcome, OwnerStack, OwnerStackAction, OwnerStackState};
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;

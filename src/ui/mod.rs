//! GUI front-end for the engine
//!
//! This module provides a native Rust GUI using egui/eframe. It only draws
//! the session and forwards clicks; all rules live in the core modules.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;

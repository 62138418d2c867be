//! tixelkit - desktop-style widget toolkit for the terminal
//!
//! Module structure:
//! - ui::core: the kernel (geometry, cell buffer, events, view tree,
//!   focus, panels and the application loop)
//! - ui::views: container and leaf views (clip, scroll, split, tabs, ...)
//! - ui::controls: focusable controls (button, slider, text field, ...)
//! - tui: terminal collaborators built on crossterm (feature "tui")
//! - logging: file-based tracing setup

pub mod logging;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;

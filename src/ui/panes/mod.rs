//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over borrowed data, so the
//! whole screen is re-derived from the store on every frame.
//!
//! # Pane Modules
//!
//! - [`header`]: Title and subtitle
//! - [`selector`]: Sidebar listing the five structures, active one highlighted
//! - [`visualization`]: The active structure drawn from its layout, plus the description line
//! - [`controls`]: Input field and the per-kind Add/Remove labels
//! - [`status`]: Status bar with keybindings and element count

pub mod controls;
pub mod header;
pub mod selector;
pub mod status;
pub mod visualization;

pub use controls::render_controls_pane;
pub use header::render_header;
pub use selector::render_selector_pane;
pub use status::render_status_bar;
pub use visualization::{render_description, render_visualization_pane};

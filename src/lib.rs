//! # Introduction
//!
//! dsviz is an interactive teaching tool for five elementary data
//! structures: array, stack, queue, linked list and binary tree. Each
//! structure is an ordered sequence of integers; the user adds and removes
//! values and watches the drawn shape change in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Key event → StructureStore → derive_layout → LayoutDescription → TUI
//! ```
//!
//! 1. [`structures`] — the five sequences, the active kind and the staged
//!    input; the only place state changes.
//! 2. [`layout`] — a pure mapping from the active sequence to what is drawn.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 4. [`cli`] and [`logging`] — command-line flags and the tracing setup used
//!    by the binary.
//!
//! ## Example
//!
//! ```
//! use dsviz::layout::derive_layout;
//! use dsviz::structures::{StructureKind, StructureStore};
//!
//! let mut store = StructureStore::with_active(StructureKind::Queue);
//! store.set_input("5");
//! store.append().unwrap();
//! assert_eq!(store.remove(), Some(1));
//!
//! let layout = derive_layout(store.active(), store.active_sequence());
//! assert_eq!(layout.displayed_values(), vec![2, 3, 4, 5]);
//! ```

pub mod cli;
pub mod layout;
pub mod logging;
pub mod structures;
pub mod ui;

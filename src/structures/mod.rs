//! Structure state and transitions
//!
//! This module holds everything the visualizer knows about the five data
//! structures it can show:
//! - [`StructureKind`]: which structure is being looked at
//! - [`StructureStore`]: one integer sequence per kind plus the pending input
//! - [`InputError`]: why a staged value could not be committed
//!
//! The store is the only place sequences are mutated. Rendering reads the
//! active sequence and never writes back.

pub mod constants;
pub mod errors;
pub mod kind;
pub mod store;

pub use errors::InputError;
pub use kind::{RemoveEnd, StructureKind};
pub use store::StructureStore;

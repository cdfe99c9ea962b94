//! Sequence store for the five structures
//!
//! [`StructureStore`] owns one `Vec<i64>` per [`StructureKind`] and the
//! text buffer the user types the next value into. Exactly one kind is
//! active at a time; `append` and `remove` only ever touch the active
//! sequence.
//!
//! # Edge behavior
//!
//! - Removing from an empty sequence is a no-op and returns `None`.
//! - A buffer that does not parse as an integer is rejected with an
//!   [`InputError`]; neither the sequence nor the buffer changes.

use super::errors::InputError;
use super::kind::{RemoveEnd, StructureKind};
use rustc_hash::FxHashMap;
use tracing::debug;

/// The visualizer's state: active kind, five sequences, pending input
#[derive(Debug, Clone)]
pub struct StructureStore {
    active: StructureKind,
    sequences: FxHashMap<StructureKind, Vec<i64>>,
    input: String,
}

impl StructureStore {
    /// Create a store seeded with the initial values, Array selected
    pub fn new() -> Self {
        Self::with_active(StructureKind::default())
    }

    /// Create a store seeded with the initial values and `kind` selected
    pub fn with_active(kind: StructureKind) -> Self {
        let sequences = StructureKind::ALL
            .iter()
            .map(|&k| (k, k.seed()))
            .collect();
        StructureStore {
            active: kind,
            sequences,
            input: String::new(),
        }
    }

    /// The selected kind
    pub fn active(&self) -> StructureKind {
        self.active
    }

    /// Select a kind. Sequence contents are not touched.
    pub fn select_kind(&mut self, kind: StructureKind) {
        if self.active != kind {
            debug!(from = %self.active, to = %kind, "select kind");
        }
        self.active = kind;
    }

    /// Contents of the active sequence
    pub fn active_sequence(&self) -> &[i64] {
        self.sequence(self.active)
    }

    /// Contents of the sequence for `kind`, active or not
    pub fn sequence(&self, kind: StructureKind) -> &[i64] {
        self.sequences.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    fn active_sequence_mut(&mut self) -> &mut Vec<i64> {
        self.sequences.entry(self.active).or_default()
    }

    /// The staged text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the staged text
    pub fn set_input(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
    }

    /// Type one character into the staged text
    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    /// Delete the last staged character
    pub fn pop_input(&mut self) -> Option<char> {
        self.input.pop()
    }

    /// Drop all staged text
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Parse the staged text and append it to the active sequence.
    ///
    /// On success the buffer is cleared and the appended value returned.
    /// On failure nothing changes.
    pub fn append(&mut self) -> Result<i64, InputError> {
        let value = match parse_value(&self.input) {
            Ok(value) => value,
            Err(err) => {
                debug!(kind = %self.active, error = %err, "append rejected");
                return Err(err);
            }
        };
        self.append_value(value);
        Ok(value)
    }

    /// Append an already-parsed value to the active sequence and clear the
    /// staged text. Stack pushes onto the top, queue enqueues at the rear,
    /// every other kind inserts at the tail; all of them are a push to the
    /// end of the sequence.
    pub fn append_value(&mut self, value: i64) {
        let kind = self.active;
        let seq = self.active_sequence_mut();
        seq.push(value);
        debug!(%kind, value, len = seq.len(), "append");
        self.input.clear();
    }

    /// Remove one element from the active sequence.
    ///
    /// Queue dequeues from the front, every other kind pops the back.
    /// Returns `None` without touching anything if the sequence is empty.
    pub fn remove(&mut self) -> Option<i64> {
        let kind = self.active;
        let seq = self.active_sequence_mut();
        if seq.is_empty() {
            debug!(%kind, "remove on empty sequence ignored");
            return None;
        }
        let removed = match kind.remove_end() {
            RemoveEnd::Front => seq.remove(0),
            RemoveEnd::Back => seq.pop()?,
        };
        debug!(%kind, value = removed, len = seq.len(), "remove");
        Some(removed)
    }
}

impl Default for StructureStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the leading integer of the staged text.
///
/// An optional sign followed by at least one digit is required; anything
/// after the digits is ignored, so `3.5` reads as 3 and `1e3` as 1.
/// Values outside `i64` are rejected.
pub fn parse_value(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    let not_an_integer = || InputError::NotAnInteger {
        input: trimmed.to_string(),
    };
    if digits_len == 0 {
        return Err(not_an_integer());
    }
    trimmed[..sign_len + digits_len]
        .parse::<i64>()
        .map_err(|_| not_an_integer())
}

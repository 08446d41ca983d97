// SPDX-License-Identifier: GPL-3.0-only

//! Input handling for the Bashkir keyboard.
//!
//! This module owns everything between a raw gesture event and a text-sink
//! command:
//!
//! - **Key activation**: [`InputHandler`] is the single entry point for
//!   simple (non-long-press) key activations. It owns the shift / caps-lock
//!   / layout-mode state and emits insert/delete commands to a [`TextSink`].
//! - **Long press**: [`PickerMachine`] is a pure state machine over one
//!   gesture's lifecycle (Idle → Anchored → Expanded), producing effect
//!   lists; [`GestureController`] is the thin adapter that feeds platform
//!   begin/move/end/cancel callbacks into it and applies the effects to the
//!   render surface, text sink, and feedback policy.
//!
//! All of it runs on a single cooperative execution context; nothing here
//! locks.

pub mod gesture;
pub mod handler;
pub mod picker;

pub use gesture::GestureController;
pub use handler::{InputHandler, KeyboardState};
pub use picker::{PickerEffect, PickerMachine, PickerPhase, PopupSession};

/// Host text-insertion sink.
///
/// Commands are assumed to always succeed; the host surface owns the text
/// field and any error handling around it.
pub trait TextSink {
    /// Inserts text at the cursor.
    fn insert_text(&mut self, text: &str);

    /// Deletes one unit backward from the cursor.
    fn delete_backward(&mut self);
}

// ============================================================================
// Test Support
// ============================================================================

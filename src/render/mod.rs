// SPDX-License-Identifier: GPL-3.0-only

//! Render adapter surface for the keyboard core.
//!
//! The core never draws anything itself. It issues one-way commands to a
//! host-provided [`RenderSurface`] implementation: apply a plane of key
//! rows, refresh glyph casing after a state change, and drive the
//! long-press popup. No command expects an acknowledgement.
//!
//! The geometry the popup commands carry is computed in [`popup`].

pub mod popup;

pub use popup::{Point, Rect};

use crate::input::KeyboardState;
use crate::layout::Row;

/// Host-implemented drawing surface for the keyboard.
///
/// Implementations position keys, paint theme tokens, and report gesture
/// events back into the input modules. All methods are fire-and-forget.
pub trait RenderSurface {
    /// Replaces the displayed key rows for the given state.
    fn apply_rows(&mut self, rows: &[Row], state: &KeyboardState);

    /// Refreshes key glyph casing after a shift/caps change without
    /// rebuilding the rows.
    fn update_glyph_casing(&mut self, state: &KeyboardState);

    /// Shows (or rebuilds) the long-press popup with the given character
    /// strip and highlight.
    fn show_popup(&mut self, frame: Rect, characters: &[String], highlight: Option<usize>);

    /// Moves the popup highlight to a new slice. The highlighted entry is
    /// rendered enlarged; the others are not.
    fn update_highlight(&mut self, index: usize);

    /// Removes the popup, playing the dismissal animation.
    fn dismiss_popup(&mut self);
}

// ============================================================================
// Test Support
// ============================================================================

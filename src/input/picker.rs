// SPDX-License-Identifier: GPL-3.0-only

//! Long-press picker state machine.
//!
//! One [`PickerMachine`] tracks one touch at a time through three phases:
//!
//! - **Idle**: no touch in flight.
//! - **Anchored**: finger down on a key with alternatives; a one-slice
//!   mini popup shows the base character and a deadline is armed. Lifting
//!   here commits the base character, exactly like a plain tap.
//! - **Expanded**: the deadline elapsed while still Anchored; the popup
//!   shows the full base-plus-alternatives strip and horizontal movement
//!   slides the highlight. Lifting commits the highlighted entry.
//!
//! The machine is pure: callers pass in the current [`Instant`] and get
//! back a list of [`PickerEffect`]s to apply. Timing works on a stored
//! deadline polled by the caller rather than a callback timer, so a
//! cancelled or superseded gesture can never fire a stale expansion.

use std::time::{Duration, Instant};

use crate::render::popup::{self, Point, Rect};

// ============================================================================
// Phases and Effects
// ============================================================================

/// Lifecycle phase of the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPhase {
    /// No touch in flight.
    Idle,
    /// Finger down, mini popup showing, deadline armed.
    Anchored,
    /// Full strip visible and tracking the finger.
    Expanded,
}

/// Everything the machine knows about the gesture in flight.
#[derive(Debug, Clone)]
pub struct PopupSession {
    /// On-screen frame of the pressed key.
    pub anchor_frame: Rect,
    /// Base character followed by its alternatives, already case-folded.
    /// Index 0 is what a fast tap commits.
    pub characters: Vec<String>,
    /// Frame of the popup currently on screen (mini while Anchored, full
    /// strip once Expanded).
    pub popup_frame: Rect,
    /// Highlighted slice; `None` until expanded.
    pub highlighted_index: Option<usize>,
    /// Whether the full strip has replaced the mini popup.
    pub is_expanded: bool,
    /// When the strip should expand if the finger is still down.
    pub deadline: Instant,
}

/// Side effect requested by a machine transition, applied by the caller
/// in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEffect {
    /// Present (or rebuild) the popup with the given slices.
    ShowPopup {
        frame: Rect,
        characters: Vec<String>,
        highlight: Option<usize>,
    },
    /// Move the highlight to a new slice.
    HighlightChanged(usize),
    /// Insert the given text into the host text field.
    Commit(String),
    /// Tear the popup down.
    DismissPopup,
}

// ============================================================================
// Picker Machine
// ============================================================================

/// Pure long-press state machine. See the module docs for the phase
/// diagram.
#[derive(Debug)]
pub struct PickerMachine {
    phase: PickerPhase,
    session: Option<PopupSession>,
    /// Bounds the popup frame is clamped into.
    surface_bounds: Rect,
}

impl PickerMachine {
    pub fn new(surface_bounds: Rect) -> Self {
        Self {
            phase: PickerPhase::Idle,
            session: None,
            surface_bounds,
        }
    }

    /// Updates the clamping bounds, e.g. after a rotation or resize.
    pub fn set_surface_bounds(&mut self, bounds: Rect) {
        self.surface_bounds = bounds;
    }

    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    /// The gesture in flight, if any.
    pub fn session(&self) -> Option<&PopupSession> {
        self.session.as_ref()
    }

    /// Begins a touch on a key with alternatives.
    ///
    /// `characters` is the full strip: the case-folded base character at
    /// index 0 followed by its alternatives. Shows the one-slice mini
    /// popup and arms the expansion deadline.
    ///
    /// A touch arriving while a previous session is still live discards
    /// that session without committing anything; the returned effects
    /// start with its dismissal in that case.
    pub fn touch_begin(
        &mut self,
        key_frame: Rect,
        characters: Vec<String>,
        delay: Duration,
        now: Instant,
    ) -> Vec<PickerEffect> {
        let mut effects = self.discard_live_session();

        if characters.is_empty() {
            // Nothing to anchor on; the caller falls back to tap handling.
            return effects;
        }

        let mini_frame = popup::popup_frame(key_frame, 1, self.surface_bounds);
        self.phase = PickerPhase::Anchored;
        self.session = Some(PopupSession {
            anchor_frame: key_frame,
            characters: characters.clone(),
            popup_frame: mini_frame,
            highlighted_index: None,
            is_expanded: false,
            deadline: now + delay,
        });
        tracing::trace!(base = %characters[0], ?delay, "picker anchored");

        effects.push(PickerEffect::ShowPopup {
            frame: mini_frame,
            characters: vec![characters[0].clone()],
            highlight: None,
        });
        effects
    }

    /// Checks the armed deadline. Expands the strip when the finger has
    /// been held past the delay; otherwise does nothing. Only an Anchored
    /// machine can expand, so a stale poll after a lift or cancel is a
    /// no-op.
    pub fn poll(&mut self, now: Instant) -> Vec<PickerEffect> {
        if self.phase != PickerPhase::Anchored {
            return Vec::new();
        }
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if now < session.deadline {
            return Vec::new();
        }

        let count = session.characters.len();
        let frame = popup::popup_frame(session.anchor_frame, count, self.surface_bounds);
        let highlight = popup::initial_highlight(&frame, &session.anchor_frame, count);
        session.popup_frame = frame;
        session.highlighted_index = Some(highlight);
        session.is_expanded = true;
        self.phase = PickerPhase::Expanded;
        tracing::debug!(count, highlight, "picker expanded");

        vec![PickerEffect::ShowPopup {
            frame,
            characters: session.characters.clone(),
            highlight: Some(highlight),
        }]
    }

    /// Tracks finger movement. Ignored unless Expanded. Movement outside
    /// the tolerance band around the strip leaves the highlight where it
    /// was; re-entering resumes tracking.
    pub fn touch_move(&mut self, point: Point) -> Vec<PickerEffect> {
        if self.phase != PickerPhase::Expanded {
            return Vec::new();
        }
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if !popup::within_tracking_bounds(&session.popup_frame, point) {
            return Vec::new();
        }

        let count = session.characters.len();
        match popup::slice_index(&session.popup_frame, point.x, count) {
            Some(index) if session.highlighted_index != Some(index) => {
                session.highlighted_index = Some(index);
                vec![PickerEffect::HighlightChanged(index)]
            }
            _ => Vec::new(),
        }
    }

    /// Ends the touch. Expanded commits the highlighted entry; Anchored
    /// commits the base character. The popup is dismissed either way.
    pub fn touch_end(&mut self) -> Vec<PickerEffect> {
        self.phase = PickerPhase::Idle;
        let Some(session) = self.session.take() else {
            return Vec::new();
        };

        let index = session.highlighted_index.unwrap_or(0);
        let committed = session
            .characters
            .get(index)
            .or_else(|| session.characters.first())
            .cloned();

        let mut effects = Vec::new();
        if let Some(text) = committed {
            effects.push(PickerEffect::Commit(text));
        }
        effects.push(PickerEffect::DismissPopup);
        effects
    }

    /// Cancels the touch without committing anything. Idempotent.
    pub fn touch_cancel(&mut self) -> Vec<PickerEffect> {
        self.discard_live_session()
    }

    /// Drops any live session, dismissing whichever popup it had on
    /// screen.
    fn discard_live_session(&mut self) -> Vec<PickerEffect> {
        self.phase = PickerPhase::Idle;
        if self.session.take().is_some() {
            vec![PickerEffect::DismissPopup]
        } else {
            Vec::new()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

// SPDX-License-Identifier: GPL-3.0-only

//! Key activation handling and keyboard modifier state.
//!
//! [`KeyboardState`] is the small value describing the current shift /
//! caps-lock / layout-mode configuration. [`InputHandler`] mutates that
//! state in response to key activations and forwards text commands to a
//! [`TextSink`](crate::input::TextSink).
//!
//! The shift key cycles through three states on successive taps:
//!
//! | before                  | after                   |
//! |-------------------------|-------------------------|
//! | lowercase               | one-shot shift          |
//! | one-shot shift          | caps lock               |
//! | caps lock               | lowercase               |
//!
//! One-shot shift clears itself after a single character insertion; caps
//! lock persists until the shift key is tapped again.

use crate::haptics::FeedbackPolicy;
use crate::input::TextSink;
use crate::layout::{Key, KeyKind, LayoutMode};

// ============================================================================
// Keyboard State
// ============================================================================

/// Modifier and layout state for the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardState {
    /// One-shot shift: the next character insert is uppercase, then the
    /// flag clears.
    pub is_shift_enabled: bool,
    /// Sticky uppercase; cleared only by tapping shift again.
    pub is_caps_locked: bool,
    /// Which key plane is active.
    pub layout_mode: LayoutMode,
}

impl KeyboardState {
    /// State at the start of an input session: shift engaged so the first
    /// letter of a sentence comes out uppercase.
    pub fn session_start() -> Self {
        Self {
            is_shift_enabled: true,
            is_caps_locked: false,
            layout_mode: LayoutMode::Letters,
        }
    }

    /// Whether character keys should currently produce uppercase.
    pub fn is_uppercase(&self) -> bool {
        self.is_shift_enabled || self.is_caps_locked
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self {
            is_shift_enabled: false,
            is_caps_locked: false,
            layout_mode: LayoutMode::Letters,
        }
    }
}

// ============================================================================
// Input Handler
// ============================================================================

/// Observer invoked after every state mutation.
type StateObserver = Box<dyn FnMut(&KeyboardState)>;

/// Routes key activations to state changes and text-sink commands.
pub struct InputHandler {
    state: KeyboardState,
    feedback: FeedbackPolicy,
    on_state_change: Option<StateObserver>,
}

impl std::fmt::Debug for InputHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputHandler")
            .field("state", &self.state)
            .field("feedback", &self.feedback)
            .finish_non_exhaustive()
    }
}

impl InputHandler {
    /// Creates a handler at session-start state.
    pub fn new(feedback: FeedbackPolicy) -> Self {
        Self {
            state: KeyboardState::session_start(),
            feedback,
            on_state_change: None,
        }
    }

    /// Registers an observer called with the new state after every
    /// mutation. The render adapter uses this to refresh key glyph casing
    /// and layout planes.
    pub fn set_state_observer(&mut self, observer: impl FnMut(&KeyboardState) + 'static) {
        self.on_state_change = Some(Box::new(observer));
    }

    /// Current state snapshot.
    pub fn state(&self) -> KeyboardState {
        self.state
    }

    /// Handles one key activation.
    ///
    /// Exactly one feedback pulse fires per activation, regardless of the
    /// key kind. Long-press flows bypass this method entirely; see
    /// [`GestureController`](crate::input::GestureController).
    pub fn handle(&mut self, key: &Key, sink: &mut dyn TextSink) {
        self.feedback.pulse_on_activation();

        match &key.kind {
            KeyKind::Character(value) => self.insert_character(value, sink),
            KeyKind::Shift => self.cycle_shift(),
            KeyKind::Backspace => sink.delete_backward(),
            KeyKind::Space => sink.insert_text(" "),
            KeyKind::Return => sink.insert_text("\n"),
            KeyKind::LayoutToggle(mode) => self.set_layout_mode(*mode),
            KeyKind::Emoji => self.toggle_emoji(),
            // Keyboard switching is owned by the host surface.
            KeyKind::NextKeyboard => {}
        }
    }

    /// Handles a long-press on a key that never enters the picker.
    ///
    /// The emoji key is the one key with distinct long-press behavior: it
    /// acts as the globe key, requesting the host's input-method switch
    /// instead of toggling the emoji plane. Long-presses on any other
    /// control key are ignored; the activation fires on the lift through
    /// [`InputHandler::handle`].
    pub fn handle_long_press(&mut self, key: &Key, sink: &mut dyn TextSink) {
        if key.kind == KeyKind::Emoji {
            let globe = Key {
                id: key.id,
                kind: KeyKind::NextKeyboard,
            };
            self.handle(&globe, sink);
        }
    }

    /// Inserts a character with the current casing, then clears one-shot
    /// shift if it was active.
    fn insert_character(&mut self, value: &str, sink: &mut dyn TextSink) {
        let text = if self.state.is_uppercase() {
            value.to_uppercase()
        } else {
            value.to_string()
        };
        sink.insert_text(&text);

        if self.state.is_shift_enabled && !self.state.is_caps_locked {
            self.mutate(|state| state.is_shift_enabled = false);
        }
    }

    /// Advances the three-state shift cycle.
    fn cycle_shift(&mut self) {
        self.mutate(|state| {
            let next = match (state.is_shift_enabled, state.is_caps_locked) {
                (false, false) => (true, false),
                (true, false) => (false, true),
                // Caps lock back to lowercase. The (true, true)
                // combination is unreachable through this cycle but
                // collapses to lowercase as well.
                _ => (false, false),
            };
            state.is_shift_enabled = next.0;
            state.is_caps_locked = next.1;
        });
        tracing::debug!(
            shift = self.state.is_shift_enabled,
            caps = self.state.is_caps_locked,
            "shift cycled"
        );
    }

    fn set_layout_mode(&mut self, mode: LayoutMode) {
        if self.state.layout_mode != mode {
            self.mutate(|state| state.layout_mode = mode);
        }
    }

    /// Emoji key toggles between the emoji grid and the letter plane.
    fn toggle_emoji(&mut self) {
        let target = if self.state.layout_mode == LayoutMode::Emoji {
            LayoutMode::Letters
        } else {
            LayoutMode::Emoji
        };
        self.mutate(|state| state.layout_mode = target);
    }

    /// Applies a mutation and notifies the observer with the new state.
    fn mutate(&mut self, apply: impl FnOnce(&mut KeyboardState)) {
        apply(&mut self.state);
        if let Some(observer) = self.on_state_change.as_mut() {
            observer(&self.state);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

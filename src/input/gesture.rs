// SPDX-License-Identifier: GPL-3.0-only

//! Gesture adapter between platform touch callbacks and the picker
//! machine.
//!
//! [`GestureController`] is deliberately thin: it resolves the pressed key
//! against the alternative-character map, reads the popup delay from the
//! settings cache at gesture start, and applies the effect lists returned
//! by [`PickerMachine`] to the render surface, text sink, and feedback
//! policy. Commit routing is the one decision it owns: a fast tap is a
//! plain activation replayed through [`InputHandler`], while a matured
//! long-press commits the highlighted entry directly.

use std::rc::Rc;
use std::time::Instant;

use crate::config::SettingsCache;
use crate::haptics::FeedbackPolicy;
use crate::input::picker::{PickerEffect, PickerMachine, PickerPhase};
use crate::input::{InputHandler, TextSink};
use crate::layout::{AlternativeCharacters, Key};
use crate::render::{Point, Rect, RenderSurface};

/// Drives the long-press picker from platform begin/move/end/cancel
/// events.
pub struct GestureController {
    machine: PickerMachine,
    settings: Rc<SettingsCache>,
    alternatives: AlternativeCharacters,
    feedback: FeedbackPolicy,
    /// Key the live gesture started on; a fast tap replays it through the
    /// tap pipeline.
    pressed_key: Option<Key>,
}

impl std::fmt::Debug for GestureController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureController")
            .field("machine", &self.machine)
            .finish_non_exhaustive()
    }
}

impl GestureController {
    pub fn new(
        surface_bounds: Rect,
        settings: Rc<SettingsCache>,
        alternatives: AlternativeCharacters,
        feedback: FeedbackPolicy,
    ) -> Self {
        Self {
            machine: PickerMachine::new(surface_bounds),
            settings,
            alternatives,
            feedback,
            pressed_key: None,
        }
    }

    /// Updates the bounds popups are clamped into, e.g. on rotation.
    pub fn set_surface_bounds(&mut self, bounds: Rect) {
        self.machine.set_surface_bounds(bounds);
    }

    /// Whether a gesture is currently tracked by the picker.
    pub fn is_tracking(&self) -> bool {
        self.machine.phase() != PickerPhase::Idle
    }

    /// Begins a touch on a key.
    ///
    /// Returns `true` when the key is a character with alternatives and
    /// the picker has taken ownership of the touch; the caller must then
    /// route the matching move/end/cancel events here instead of treating
    /// the activation as a tap. Control keys and characters without
    /// alternatives return `false` and stay on the tap path.
    pub fn touch_began(
        &mut self,
        key: &Key,
        key_frame: Rect,
        uppercase: bool,
        now: Instant,
        surface: &mut dyn RenderSurface,
    ) -> bool {
        let Some(base) = key.base_value() else {
            return false;
        };
        let Some(entry) = self.alternatives.lookup(base) else {
            return false;
        };

        // The strip leads with the base character; a fast tap commits it.
        let mut characters = vec![key.display_text(uppercase)];
        characters.extend(entry.for_case(uppercase).iter().cloned());
        let delay = self.settings.popup_delay();
        let effects = self.machine.touch_begin(key_frame, characters, delay, now);
        self.pressed_key = Some(key.clone());
        self.apply_surface_effects(&effects, surface);
        true
    }

    /// Polls the armed long-press deadline. The host calls this from its
    /// frame tick or a coarse timer; granularity only affects how late
    /// the popup appears, never whether it appears.
    pub fn poll(&mut self, now: Instant, surface: &mut dyn RenderSurface) {
        let effects = self.machine.poll(now);
        self.apply_surface_effects(&effects, surface);
    }

    /// Tracks finger movement while the popup is showing.
    pub fn touch_moved(&mut self, point: Point, surface: &mut dyn RenderSurface) {
        let effects = self.machine.touch_move(point);
        for effect in &effects {
            if matches!(effect, PickerEffect::HighlightChanged(_)) {
                self.feedback.pulse_on_selection_change();
            }
        }
        self.apply_surface_effects(&effects, surface);
    }

    /// Ends the touch.
    ///
    /// A fast tap (the strip never expanded) is a plain activation and is
    /// replayed through `handler`, so the one-shot shift is consumed the
    /// same as for any other key. Only a matured long-press commits the
    /// highlighted entry straight to the sink, bypassing the tap pipeline.
    pub fn touch_ended(
        &mut self,
        handler: &mut InputHandler,
        surface: &mut dyn RenderSurface,
        sink: &mut dyn TextSink,
    ) {
        let was_expanded = self.machine.phase() == PickerPhase::Expanded;
        let effects = self.machine.touch_end();
        let key = self.pressed_key.take();
        for effect in effects {
            match effect {
                PickerEffect::Commit(text) if was_expanded => {
                    self.feedback.pulse_on_activation();
                    sink.insert_text(&text);
                }
                PickerEffect::Commit(_) => {
                    if let Some(key) = key.as_ref() {
                        handler.handle(key, sink);
                    }
                }
                other => Self::apply_to_surface(&other, surface),
            }
        }
    }

    /// Cancels the touch. Nothing is committed.
    pub fn touch_cancelled(&mut self, surface: &mut dyn RenderSurface) {
        let effects = self.machine.touch_cancel();
        self.pressed_key = None;
        self.apply_surface_effects(&effects, surface);
    }

    fn apply_surface_effects(&self, effects: &[PickerEffect], surface: &mut dyn RenderSurface) {
        for effect in effects {
            Self::apply_to_surface(effect, surface);
        }
    }

    fn apply_to_surface(effect: &PickerEffect, surface: &mut dyn RenderSurface) {
        match effect {
            PickerEffect::ShowPopup {
                frame,
                characters,
                highlight,
            } => surface.show_popup(*frame, characters, *highlight),
            PickerEffect::HighlightChanged(index) => surface.update_highlight(*index),
            PickerEffect::DismissPopup => surface.dismiss_popup(),
            // Commits carry a text sink; handled in `touch_ended`.
            PickerEffect::Commit(_) => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, SettingsCache};
    use crate::haptics::testing::RecordingHaptics;
    use crate::haptics::PulseIntensity;
    use crate::input::testing::RecordingSink;
    use crate::layout::{KeyId, KeyKind, LayoutMode};
    use crate::render::popup::POPUP_CELL_WIDTH;
    use crate::render::testing::RecordingSurface;
    use std::cell::RefCell;
    use std::time::Duration;

    const SURFACE: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);
    const KEY_FRAME: Rect = Rect::new(180.0, 120.0, 36.0, 44.0);

    struct Fixture {
        controller: GestureController,
        handler: InputHandler,
        surface: RecordingSurface,
        sink: RecordingSink,
        haptics: Rc<RefCell<RecordingHaptics>>,
    }

    impl Fixture {
        fn lift(&mut self) {
            self.controller
                .touch_ended(&mut self.handler, &mut self.surface, &mut self.sink);
        }
    }

    fn fixture_with(settings: Settings) -> Fixture {
        let settings = Rc::new(SettingsCache::new(settings));
        let haptics = Rc::new(RefCell::new(RecordingHaptics::default()));
        let feedback = FeedbackPolicy::new(Rc::clone(&settings), haptics.clone());
        Fixture {
            controller: GestureController::new(
                SURFACE,
                settings,
                AlternativeCharacters::default(),
                feedback.clone(),
            ),
            handler: InputHandler::new(feedback),
            surface: RecordingSurface::default(),
            sink: RecordingSink::default(),
            haptics,
        }
    }

    fn fixture() -> Fixture {
        let mut settings = Settings::default();
        settings.popup_delay_secs = 0.05;
        fixture_with(settings)
    }

    fn character_key(value: &str) -> Key {
        Key {
            id: KeyId(0),
            kind: KeyKind::Character(value.to_string()),
        }
    }

    /// Full flow: press н, wait past the delay, slide to ң, lift.
    #[test]
    fn long_press_slide_and_lift_commits_alternative() {
        let mut fx = fixture();
        let key = character_key("н");
        let tracked =
            fx.controller
                .touch_began(&key, KEY_FRAME, false, Instant::now(), &mut fx.surface);
        assert!(tracked);
        assert!(fx.controller.is_tracking());

        // Touch down shows the one-slice mini popup right away.
        assert!(fx.surface.popup_visible());
        assert_eq!(fx.surface.popups_shown[0].1, vec!["н"]);

        std::thread::sleep(Duration::from_millis(50));
        fx.controller.poll(Instant::now(), &mut fx.surface);
        let (frame, characters, highlight) = fx.surface.popups_shown[1].clone();
        assert_eq!(characters, vec!["н", "ң"]);
        assert_eq!(highlight, Some(0));

        let second = Point::new(frame.x + 1.5 * POPUP_CELL_WIDTH, frame.center_y());
        fx.controller.touch_moved(second, &mut fx.surface);
        assert_eq!(fx.surface.highlights, vec![1]);

        fx.lift();
        assert_eq!(fx.sink.buffer, "ң");
        assert!(!fx.surface.popup_visible());
        assert!(!fx.controller.is_tracking());
    }

    /// A quick tap-and-lift commits the base character. Only the mini
    /// popup ever shows, and it is dismissed on the lift.
    #[test]
    fn quick_lift_commits_base_and_dismisses_mini_popup() {
        let mut fx = fixture();
        let key = character_key("з");
        fx.controller
            .touch_began(&key, KEY_FRAME, true, Instant::now(), &mut fx.surface);
        fx.lift();

        assert_eq!(fx.sink.buffer, "З");
        assert_eq!(fx.surface.popups_shown.len(), 1);
        assert_eq!(fx.surface.popups_shown[0].1, vec!["З"]);
        assert!(!fx.surface.popup_visible());
        // The fast tap went through the tap pipeline, so the session-start
        // one-shot shift is consumed.
        assert!(!fx.handler.state().is_shift_enabled);
    }

    /// Fast taps on mapped keys behave exactly like plain taps: from
    /// session start, "а" then "х" types "Ах", not "АХ".
    #[test]
    fn fast_taps_consume_one_shot_shift() {
        let mut fx = fixture();
        for value in ["а", "х"] {
            let key = character_key(value);
            let uppercase = fx.handler.state().is_uppercase();
            fx.controller
                .touch_began(&key, KEY_FRAME, uppercase, Instant::now(), &mut fx.surface);
            fx.lift();
        }

        assert_eq!(fx.sink.buffer, "Ах");
        assert!(!fx.handler.state().is_shift_enabled);
    }

    /// Control keys and plain characters decline picker tracking.
    #[test]
    fn keys_without_alternatives_stay_on_the_tap_path() {
        let mut fx = fixture();
        for kind in [
            KeyKind::Shift,
            KeyKind::Backspace,
            KeyKind::Space,
            KeyKind::NextKeyboard,
            KeyKind::Emoji,
            KeyKind::LayoutToggle(LayoutMode::Numbers),
            KeyKind::Character("ю".to_string()),
        ] {
            let key = Key { id: KeyId(0), kind };
            let tracked =
                fx.controller
                    .touch_began(&key, KEY_FRAME, false, Instant::now(), &mut fx.surface);
            assert!(!tracked, "{:?} should not enter the picker", key.kind);
        }
        assert!(!fx.controller.is_tracking());
    }

    /// Cancel dismisses the popup and never reaches the sink.
    #[test]
    fn cancel_never_commits() {
        let mut fx = fixture();
        let key = character_key("а");
        fx.controller
            .touch_began(&key, KEY_FRAME, false, Instant::now(), &mut fx.surface);
        std::thread::sleep(Duration::from_millis(50));
        fx.controller.poll(Instant::now(), &mut fx.surface);
        assert!(fx.surface.popup_visible());

        fx.controller.touch_cancelled(&mut fx.surface);
        assert!(!fx.surface.popup_visible());
        assert!(fx.sink.buffer.is_empty());
    }

    /// Highlight changes pulse the weaker selection intensity; the commit
    /// pulses a full tap.
    #[test]
    fn feedback_intensities_follow_the_gesture() {
        let mut fx = fixture();
        let key = character_key("о");
        fx.controller
            .touch_began(&key, KEY_FRAME, false, Instant::now(), &mut fx.surface);
        std::thread::sleep(Duration::from_millis(50));
        fx.controller.poll(Instant::now(), &mut fx.surface);

        let frame = fx.surface.popups_shown[1].0;
        let second = Point::new(frame.x + 1.5 * POPUP_CELL_WIDTH, frame.center_y());
        fx.controller.touch_moved(second, &mut fx.surface);
        fx.lift();

        assert_eq!(
            fx.haptics.borrow().pulses,
            vec![PulseIntensity::Selection, PulseIntensity::Tap]
        );
    }

    /// With haptics disabled in settings, the same gesture stays silent.
    #[test]
    fn disabled_haptics_silence_the_gesture() {
        let mut settings = Settings::default();
        settings.popup_delay_secs = 0.05;
        settings.haptics_enabled = false;
        let mut fx = fixture_with(settings);

        let key = character_key("о");
        fx.controller
            .touch_began(&key, KEY_FRAME, false, Instant::now(), &mut fx.surface);
        std::thread::sleep(Duration::from_millis(50));
        fx.controller.poll(Instant::now(), &mut fx.surface);
        let frame = fx.surface.popups_shown[1].0;
        let second = Point::new(frame.x + 1.5 * POPUP_CELL_WIDTH, frame.center_y());
        fx.controller.touch_moved(second, &mut fx.surface);
        fx.lift();

        assert!(fx.haptics.borrow().pulses.is_empty());
        assert_eq!(fx.sink.buffer, "ө");
    }
}

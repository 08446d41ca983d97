// SPDX-License-Identifier: GPL-3.0-only

//! Haptic feedback policy.
//!
//! A thin, stateless gate between the input modules and whatever the host
//! platform uses to produce a physical pulse. The policy consults the
//! settings cache on every call; when haptics are disabled each call is a
//! no-op. Calls never queue; each one either fires immediately or does
//! nothing, so rapid repeated invocation is always safe.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SettingsCache;

// ============================================================================
// Backend Seam
// ============================================================================

/// Strength of a feedback pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseIntensity {
    /// Full-strength pulse for a key activation.
    Tap,
    /// Weaker pulse for a slide highlight change, so sliding between
    /// alternatives feels different from a tap.
    Selection,
}

/// Platform seam producing the physical pulse.
///
/// The core ships only [`NullHaptics`]; hosts plug in their own generator.
pub trait HapticBackend {
    /// Fires one pulse at the given intensity.
    fn pulse(&mut self, intensity: PulseIntensity);
}

/// Backend that produces no feedback. Used on hosts without a haptic
/// engine and as the default in tests.
#[derive(Debug, Default)]
pub struct NullHaptics;

impl HapticBackend for NullHaptics {
    fn pulse(&mut self, _intensity: PulseIntensity) {}
}

// ============================================================================
// Policy
// ============================================================================

/// Settings-gated feedback dispatcher.
///
/// Cloneable handle: clones share the same backend and settings cache, so
/// the input state machine and the picker both feed one generator.
#[derive(Clone)]
pub struct FeedbackPolicy {
    settings: Rc<SettingsCache>,
    backend: Rc<RefCell<dyn HapticBackend>>,
}

impl FeedbackPolicy {
    /// Creates a policy over the given settings cache and backend.
    pub fn new(settings: Rc<SettingsCache>, backend: Rc<RefCell<dyn HapticBackend>>) -> Self {
        Self { settings, backend }
    }

    /// Creates a policy that never produces feedback regardless of the
    /// setting.
    pub fn silent(settings: Rc<SettingsCache>) -> Self {
        Self::new(settings, Rc::new(RefCell::new(NullHaptics)))
    }

    /// Fires a tap pulse if and only if haptics are enabled.
    ///
    /// Called exactly once per simple key activation.
    pub fn pulse_on_activation(&self) {
        if self.settings.haptics_enabled() {
            self.backend.borrow_mut().pulse(PulseIntensity::Tap);
        }
    }

    /// Fires a weaker pulse if and only if haptics are enabled.
    ///
    /// Called once per picker highlight-index change.
    pub fn pulse_on_selection_change(&self) {
        if self.settings.haptics_enabled() {
            self.backend.borrow_mut().pulse(PulseIntensity::Selection);
        }
    }
}

impl std::fmt::Debug for FeedbackPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackPolicy")
            .field("haptics_enabled", &self.settings.haptics_enabled())
            .finish()
    }
}

// ============================================================================
// Test Support
// ============================================================================


// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::testing::RecordingHaptics;
    use super::*;
    use crate::config::Settings;

    fn policy_with_recorder(
        haptics_enabled: bool,
    ) -> (FeedbackPolicy, Rc<RefCell<RecordingHaptics>>, Rc<SettingsCache>) {
        let settings = Rc::new(SettingsCache::new(Settings {
            haptics_enabled,
            ..Settings::default()
        }));
        let backend = Rc::new(RefCell::new(RecordingHaptics::default()));
        let policy = FeedbackPolicy::new(settings.clone(), backend.clone());
        (policy, backend, settings)
    }

    /// Pulses fire with the right intensity when haptics are enabled.
    #[test]
    fn test_pulses_when_enabled() {
        let (policy, backend, _settings) = policy_with_recorder(true);

        policy.pulse_on_activation();
        policy.pulse_on_selection_change();
        policy.pulse_on_activation();

        let recorder = backend.borrow();
        assert_eq!(
            recorder.pulses,
            vec![
                PulseIntensity::Tap,
                PulseIntensity::Selection,
                PulseIntensity::Tap
            ]
        );
    }

    /// Disabled haptics make every call a no-op.
    #[test]
    fn test_no_pulses_when_disabled() {
        let (policy, backend, _settings) = policy_with_recorder(false);

        policy.pulse_on_activation();
        policy.pulse_on_selection_change();

        assert!(backend.borrow().pulses.is_empty());
    }

    /// The policy reads the cache on each call, so a settings refresh takes
    /// effect immediately.
    #[test]
    fn test_follows_settings_refresh() {
        let (policy, backend, settings) = policy_with_recorder(true);

        policy.pulse_on_activation();
        settings.refresh(Settings {
            haptics_enabled: false,
            ..Settings::default()
        });
        policy.pulse_on_activation();

        assert_eq!(backend.borrow().taps(), 1);
    }

    /// Rapid repeated calls neither panic nor accumulate state.
    #[test]
    fn test_rapid_repeated_calls() {
        let (policy, backend, _settings) = policy_with_recorder(true);

        for _ in 0..1000 {
            policy.pulse_on_selection_change();
        }

        assert_eq!(backend.borrow().selections(), 1000);
    }
}

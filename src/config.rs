// SPDX-License-Identifier: GPL-3.0-only

//! User configuration snapshot consumed by the keyboard core.
//!
//! The settings UI lives in a companion application and persists a small
//! key/value snapshot under the shared app group. The core never writes the
//! snapshot; it holds a read-through [`SettingsCache`] that the host refreshes
//! whenever it receives a "settings changed" signal. Reads always return the
//! latest cached value and never block on a refresh.

use std::cell::RefCell;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app_settings;
use crate::theme::KeyboardTheme;

// ============================================================================
// Settings Snapshot
// ============================================================================

/// Persisted user configuration, read-only to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether key taps and slide highlights fire a haptic pulse.
    #[serde(rename = "settings.hapticsEnabled", default = "default_haptics")]
    pub haptics_enabled: bool,

    /// Long-press popup expansion delay in seconds.
    ///
    /// Stored unclamped; [`Settings::popup_delay`] clamps on access so a
    /// snapshot written by an older companion app cannot push the delay
    /// outside the supported range.
    #[serde(rename = "settings.popupDelay", default = "default_popup_delay")]
    pub popup_delay_secs: f32,

    /// Selected keyboard theme.
    #[serde(rename = "settings.selectedTheme", default)]
    pub selected_theme: KeyboardTheme,
}

fn default_haptics() -> bool {
    true
}

fn default_popup_delay() -> f32 {
    app_settings::DEFAULT_POPUP_DELAY
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            haptics_enabled: true,
            popup_delay_secs: app_settings::DEFAULT_POPUP_DELAY,
            selected_theme: KeyboardTheme::System,
        }
    }
}

impl Settings {
    /// Parses a settings snapshot from its persisted JSON form.
    ///
    /// Missing keys fall back to their defaults; only malformed JSON or
    /// wrongly-typed values produce an error.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(SettingsError::json_error)
    }

    /// Returns the popup expansion delay clamped to the supported range.
    pub fn popup_delay(&self) -> Duration {
        let secs = self
            .popup_delay_secs
            .clamp(app_settings::MIN_POPUP_DELAY, app_settings::MAX_POPUP_DELAY);
        Duration::from_secs_f32(secs)
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Error type for settings snapshot parsing.
///
/// Follows the canonical error struct pattern with context fields for
/// helpful error messages.
#[derive(Debug)]
pub enum SettingsError {
    /// The persisted snapshot is not valid JSON or has wrongly-typed values.
    JsonError {
        /// The underlying JSON parsing error.
        source: serde_json::Error,
        /// Line number where the error occurred (from serde_json).
        line_number: Option<usize>,
        /// Suggestion for fixing the error.
        suggestion: Option<String>,
    },
}

impl SettingsError {
    /// Creates a JSON parsing error with context.
    pub fn json_error(source: serde_json::Error) -> Self {
        // line() is 0 for errors with no position information.
        let line = source.line();
        let line_number = (line > 0).then_some(line);
        Self::JsonError {
            source,
            line_number,
            suggestion: Some(
                "Reset the keyboard settings in the companion app to rewrite the snapshot".into(),
            ),
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::JsonError {
                source,
                line_number,
                suggestion,
            } => {
                write!(f, "Settings snapshot parsing error")?;
                if let Some(line) = line_number {
                    write!(f, " at line {}", line)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::JsonError { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// Read-Through Cache
// ============================================================================

/// Cached settings snapshot shared across the core's components.
///
/// The host pushes a fresh [`Settings`] value via [`SettingsCache::refresh`]
/// when it observes an external change; every accessor reads whatever was
/// cached last. Interior mutability keeps the handle shareable as
/// `Rc<SettingsCache>` within the single-threaded input context.
#[derive(Debug, Default)]
pub struct SettingsCache {
    inner: RefCell<Settings>,
}

impl SettingsCache {
    /// Creates a cache seeded with the given snapshot.
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: RefCell::new(settings),
        }
    }

    /// Replaces the cached snapshot with a fresh one.
    pub fn refresh(&self, settings: Settings) {
        tracing::debug!(?settings, "settings snapshot refreshed");
        *self.inner.borrow_mut() = settings;
    }

    /// Returns whether haptic feedback is enabled.
    pub fn haptics_enabled(&self) -> bool {
        self.inner.borrow().haptics_enabled
    }

    /// Returns the clamped popup expansion delay.
    pub fn popup_delay(&self) -> Duration {
        self.inner.borrow().popup_delay()
    }

    /// Returns the selected theme.
    pub fn selected_theme(&self) -> KeyboardTheme {
        self.inner.borrow().selected_theme
    }

    /// Returns a copy of the whole cached snapshot.
    pub fn snapshot(&self) -> Settings {
        self.inner.borrow().clone()
    }
}

// ============================================================================
// Tests
// ============================================================================

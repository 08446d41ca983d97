// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Application ID in RDNN (reverse domain name notation) format.
pub const APP_ID: &str = "io.github.bashboard.Bashboard";

/// App-group identifier shared with the settings companion application.
///
/// The companion app writes the settings snapshot under this group; the
/// keyboard core only ever reads it.
pub const APP_GROUP: &str = "group.io.github.bashboard";

/// Settings key for the haptic feedback toggle.
pub const KEY_HAPTICS_ENABLED: &str = "settings.hapticsEnabled";

/// Settings key for the long-press popup expansion delay.
pub const KEY_POPUP_DELAY: &str = "settings.popupDelay";

/// Settings key for the selected keyboard theme.
pub const KEY_SELECTED_THEME: &str = "settings.selectedTheme";

/// Default long-press popup expansion delay in seconds.
pub const DEFAULT_POPUP_DELAY: f32 = 0.2;

/// Minimum allowed popup expansion delay in seconds.
pub const MIN_POPUP_DELAY: f32 = 0.05;

/// Maximum allowed popup expansion delay in seconds.
pub const MAX_POPUP_DELAY: f32 = 0.5;

/// Keyboard height as a fraction of the host screen height.
///
/// Sizing hint for the render adapter; the core itself only deals in the
/// surface bounds the adapter reports back.
pub const KEYBOARD_HEIGHT_RATIO: f32 = 0.35;

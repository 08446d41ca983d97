// SPDX-License-Identifier: GPL-3.0-only

//! Theme token tables for the keyboard renderer.
//!
//! The render adapter derives every color it paints from a [`ThemeTokens`]
//! value, which is a pure lookup keyed by the selected [`KeyboardTheme`] and
//! the host's light/dark [`ColorScheme`]. No state lives here; the settings
//! snapshot names the theme and the host reports the scheme.

use serde::{Deserialize, Serialize};

// ============================================================================
// Theme Selection Types
// ============================================================================

/// User-selectable keyboard theme.
///
/// Serialized by its raw name so the settings companion app and the keyboard
/// extension agree on the stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyboardTheme {
    /// Follows the host appearance (light or dark).
    #[default]
    System,
    /// Always-dark classic look.
    Classic,
    /// Translucent dark look with background blur.
    LiquidGlass,
}

impl KeyboardTheme {
    /// Human-readable name shown in the settings UI.
    pub fn display_name(self) -> &'static str {
        match self {
            KeyboardTheme::System => "System",
            KeyboardTheme::Classic => "Classic",
            KeyboardTheme::LiquidGlass => "Liquid Glass",
        }
    }

    /// Parses a stored raw value back into a theme.
    ///
    /// Returns `None` for unknown values so callers can fall back to
    /// [`KeyboardTheme::System`].
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "system" => Some(KeyboardTheme::System),
            "classic" => Some(KeyboardTheme::Classic),
            "liquidGlass" => Some(KeyboardTheme::LiquidGlass),
            _ => None,
        }
    }
}

/// Host light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    /// Light appearance.
    Light,
    /// Dark appearance.
    Dark,
}

// ============================================================================
// Color & Token Types
// ============================================================================

/// An sRGB color with alpha, framework-agnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel in [0, 1].
    pub r: f32,
    /// Green channel in [0, 1].
    pub g: f32,
    /// Blue channel in [0, 1].
    pub b: f32,
    /// Alpha channel in [0, 1].
    pub a: f32,
}

impl Color {
    /// Creates a color from individual channels.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from a 24-bit hex value (0xRRGGBB).
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Returns the same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// The full set of colors and metrics the render adapter needs for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTokens {
    /// Keyboard background color.
    pub background: Color,
    /// Default key background.
    pub key_background: Color,
    /// Background for special keys (shift, backspace, layout toggles).
    pub special_key_background: Color,
    /// Background for the return key.
    pub return_key_background: Color,
    /// Key glyph color.
    pub key_foreground: Color,
    /// Accent color for highlighted elements.
    pub accent: Color,
    /// Key corner radius in points.
    pub key_corner_radius: f32,
    /// Key shadow color.
    pub key_shadow: Color,
    /// Key shadow blur radius.
    pub key_shadow_radius: f32,
    /// Key shadow vertical offset.
    pub key_shadow_offset_y: f32,
    /// Whether the surface should render a background blur behind the keys.
    pub uses_blur: bool,
}

// ============================================================================
// Token Tables
// ============================================================================

const SYSTEM_BLUE: Color = Color::from_hex(0x007AFF);
const SYSTEM_CYAN: Color = Color::from_hex(0x32ADE6);

/// Returns the token set for a theme under the given color scheme.
///
/// Pure data lookup: the same (theme, scheme) pair always yields the same
/// tokens. `Classic` and `LiquidGlass` ignore the scheme and always render
/// dark, matching their fixed looks.
pub fn tokens(theme: KeyboardTheme, scheme: ColorScheme) -> ThemeTokens {
    match (theme, scheme) {
        (KeyboardTheme::System, ColorScheme::Light) => ThemeTokens {
            background: Color::from_hex(0xD2D3D8),
            key_background: Color::from_hex(0xFFFFFD),
            special_key_background: Color::from_hex(0xABB0BC),
            return_key_background: Color::from_hex(0xABB0BC),
            key_foreground: Color::from_hex(0x000000),
            accent: SYSTEM_BLUE,
            key_corner_radius: 5.0,
            key_shadow: Color::from_hex(0x000000).with_alpha(0.25),
            key_shadow_radius: 2.0,
            key_shadow_offset_y: 1.5,
            uses_blur: false,
        },
        (KeyboardTheme::System, ColorScheme::Dark) | (KeyboardTheme::Classic, _) => ThemeTokens {
            background: Color::from_hex(0x2D2D2D),
            key_background: Color::from_hex(0x6C6C6C),
            special_key_background: Color::from_hex(0x484848),
            return_key_background: Color::from_hex(0x484848),
            key_foreground: Color::from_hex(0xFFFFFF),
            accent: SYSTEM_BLUE,
            key_corner_radius: 5.0,
            key_shadow: Color::from_hex(0x000000).with_alpha(0.25),
            key_shadow_radius: 2.0,
            key_shadow_offset_y: 1.5,
            uses_blur: false,
        },
        (KeyboardTheme::LiquidGlass, _) => ThemeTokens {
            background: Color::rgba(0.0, 0.0, 0.0, 0.3),
            key_background: Color::rgba(60.0 / 255.0, 60.0 / 255.0, 60.0 / 255.0, 0.5),
            special_key_background: Color::rgba(60.0 / 255.0, 60.0 / 255.0, 60.0 / 255.0, 0.5),
            return_key_background: Color::from_hex(0x007AFE),
            key_foreground: Color::from_hex(0xFFFFFF),
            accent: SYSTEM_CYAN,
            key_corner_radius: 10.0,
            key_shadow: Color::from_hex(0x000000).with_alpha(0.25),
            key_shadow_radius: 2.0,
            key_shadow_offset_y: 1.5,
            uses_blur: true,
        },
    }
}

// ============================================================================
// Tests
// ============================================================================

// SPDX-License-Identifier: GPL-3.0-only

//! Bashboard - a Bashkir soft keyboard input core
//!
//! This crate provides the input core of a Bashkir on-screen keyboard: a
//! Russian-base Cyrillic layout whose Bashkir-specific letters (ҙ, ҫ, ә,
//! ү, һ, ө, ң, ғ, ҡ, ъ) are reached by long-pressing their base keys and
//! sliding across a popup picker.
//!
//! The core is presentation-agnostic. It consumes touch events and a
//! settings snapshot, and talks to the host through two narrow seams: a
//! [`input::TextSink`] for committed text and a [`render::RenderSurface`]
//! for drawing commands. Everything in between is pure, single-threaded
//! state.
//!
//! # Modules
//!
//! - `app_settings`: Centralized application constants and settings keys
//! - `config`: Settings snapshot, parsing, and the read-through cache
//! - `haptics`: Feedback policy gating pulses on the haptics setting
//! - `input`: Key activation handling and the long-press picker
//! - `layout`: Key planes, row tables, and the Bashkir alternatives map
//! - `render`: The host-facing render surface trait and popup geometry
//! - `theme`: Keyboard themes and their resolved color tokens

pub mod app_settings;
pub mod config;
pub mod haptics;
pub mod input;
pub mod layout;
pub mod render;
pub mod theme;

// ============================================================================
// Integration Tests
// ============================================================================

// SPDX-License-Identifier: GPL-3.0-only

//! Bashboard demo driver
//!
//! Runs the keyboard core headless against an in-memory text sink,
//! scripting a short typing session that exercises taps, the shift cycle,
//! and a long-press picker gesture. Useful for eyeballing the core's
//! behavior and its tracing output without a host surface.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use bashboard::config::{Settings, SettingsCache};
use bashboard::haptics::FeedbackPolicy;
use bashboard::input::{GestureController, InputHandler, TextSink};
use bashboard::layout::{AlternativeCharacters, Key, Layout, LayoutMode};
use bashboard::render::popup::POPUP_CELL_WIDTH;
use bashboard::render::{Point, Rect, RenderSurface};

/// Text sink that accumulates the typed text in memory.
#[derive(Debug, Default)]
struct BufferSink {
    buffer: String,
}

impl TextSink for BufferSink {
    fn insert_text(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn delete_backward(&mut self) {
        self.buffer.pop();
    }
}

/// Render surface that logs the drawing commands it receives.
#[derive(Debug, Default)]
struct LoggingSurface {
    popup_frame: Option<Rect>,
}

impl RenderSurface for LoggingSurface {
    fn apply_rows(&mut self, rows: &[bashboard::layout::Row], _state: &bashboard::input::KeyboardState) {
        tracing::info!(rows = rows.len(), "applied key rows");
    }

    fn update_glyph_casing(&mut self, state: &bashboard::input::KeyboardState) {
        tracing::info!(uppercase = state.is_uppercase(), "refreshed glyph casing");
    }

    fn show_popup(&mut self, frame: Rect, characters: &[String], highlight: Option<usize>) {
        tracing::info!(?characters, ?highlight, "popup shown");
        self.popup_frame = Some(frame);
    }

    fn update_highlight(&mut self, index: usize) {
        tracing::info!(index, "popup highlight moved");
    }

    fn dismiss_popup(&mut self) {
        tracing::info!("popup dismissed");
        self.popup_frame = None;
    }
}

fn find_key(layout: &Layout, value: &str) -> Key {
    layout
        .rows(LayoutMode::Letters)
        .iter()
        .flat_map(|row| row.keys.iter())
        .find(|key| key.base_value() == Some(value))
        .cloned()
        .unwrap_or_else(|| panic!("layout is missing key {value:?}"))
}

/// Presses a key, holds past the popup delay, slides to the second
/// slice, and lifts.
#[allow(clippy::too_many_arguments)]
fn long_press_second_slice(
    gestures: &mut GestureController,
    handler: &mut InputHandler,
    key: &Key,
    key_frame: Rect,
    uppercase: bool,
    delay: std::time::Duration,
    surface: &mut LoggingSurface,
    sink: &mut BufferSink,
) {
    gestures.touch_began(key, key_frame, uppercase, Instant::now(), surface);
    // A host would poll from its frame tick; here a sleep past the delay
    // followed by one poll is enough.
    std::thread::sleep(delay);
    gestures.poll(Instant::now(), surface);
    if let Some(frame) = surface.popup_frame {
        gestures.touch_moved(
            Point::new(frame.x + 1.5 * POPUP_CELL_WIDTH, frame.center_y()),
            surface,
        );
    }
    gestures.touch_ended(handler, surface, sink);
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bashboard=info".parse().unwrap()),
        )
        .init();

    let surface_bounds = Rect::new(0.0, 0.0, 400.0, 300.0);
    let settings = Rc::new(SettingsCache::new(Settings::default()));
    let haptics = Rc::new(RefCell::new(bashboard::haptics::NullHaptics));
    let feedback = FeedbackPolicy::new(Rc::clone(&settings), haptics);

    let layout = Layout::russian();
    let mut handler = InputHandler::new(feedback.clone());
    let mut gestures = GestureController::new(
        surface_bounds,
        Rc::clone(&settings),
        AlternativeCharacters::default(),
        feedback,
    );

    let mut surface = LoggingSurface::default();
    let mut sink = BufferSink::default();

    tracing::info!(delay = ?settings.popup_delay(), "starting scripted session");

    // Long-press "Ө" while the session-start shift is armed (picker
    // commits leave the one-shot shift alone), tap ф which consumes it,
    // then long-press о again lowercase: "ӨФө".
    let o_key = find_key(&layout, "о");
    let key_frame = Rect::new(180.0, 120.0, 36.0, 44.0);

    let uppercase = handler.state().is_uppercase();
    long_press_second_slice(
        &mut gestures,
        &mut handler,
        &o_key,
        key_frame,
        uppercase,
        settings.popup_delay(),
        &mut surface,
        &mut sink,
    );

    handler.handle(&find_key(&layout, "ф"), &mut sink);

    long_press_second_slice(
        &mut gestures,
        &mut handler,
        &o_key,
        key_frame,
        false,
        settings.popup_delay(),
        &mut surface,
        &mut sink,
    );

    println!("typed: {}", sink.buffer);
}

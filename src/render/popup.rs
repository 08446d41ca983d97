// SPDX-License-Identifier: GPL-3.0-only

//! Popup placement and hit-testing geometry for the long-press picker.
//!
//! The picker shows its characters as a horizontal strip of equal-width
//! slices anchored above the pressed key. This module computes where that
//! strip goes, keeps it inside the visible surface, and maps touch points to
//! slice indices during slide-to-select.

// ============================================================================
// Constants
// ============================================================================

/// Width of one popup character slice in points.
pub const POPUP_CELL_WIDTH: f32 = 48.0;

/// Height of the popup strip in points.
pub const POPUP_CELL_HEIGHT: f32 = 56.0;

/// Gap between the popup's bottom edge and the anchor key's top edge.
pub const POPUP_GAP: f32 = 8.0;

/// Symmetric margin around the popup that still counts as "inside" during
/// slide tracking. Prevents highlight flicker when the finger drifts just
/// outside the strip.
pub const HIGHLIGHT_TOLERANCE: f32 = 30.0;

// ============================================================================
// Geometry Types
// ============================================================================

/// A point on the keyboard surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle on the keyboard surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the center X coordinate.
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Returns the center Y coordinate.
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Returns the right edge X coordinate.
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge Y coordinate.
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Returns `true` if the point lies inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }

    /// Returns the rectangle grown outward by `margin` on every side.
    pub fn expanded_by(&self, margin: f32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }
}

// ============================================================================
// Popup Placement
// ============================================================================

/// Computes the popup frame for a character strip of `count` slices.
///
/// The strip sits [`POPUP_GAP`] above the anchor key with its first slice
/// centered over the key, so the base character appears directly above the
/// finger. The frame is then clamped so the whole strip stays within
/// `surface`; near an edge the strip shifts sideways (or down to the surface
/// top) rather than getting cut off.
pub fn popup_frame(anchor: Rect, count: usize, surface: Rect) -> Rect {
    let count = count.max(1) as f32;
    let width = POPUP_CELL_WIDTH * count;
    let height = POPUP_CELL_HEIGHT;

    let mut x = anchor.center_x() - POPUP_CELL_WIDTH / 2.0;
    let mut y = anchor.y - height - POPUP_GAP;

    // Clamp horizontally within the surface.
    if x < surface.x {
        x = surface.x;
    } else if x + width > surface.max_x() {
        x = surface.max_x() - width;
    }

    // Clamp to the surface top; a strip wider than the surface still starts
    // at the left edge.
    if y < surface.y {
        y = surface.y;
    }
    if x < surface.x {
        x = surface.x;
    }

    Rect::new(x, y, width, height)
}

// ============================================================================
// Slice Hit Testing
// ============================================================================

/// Maps a horizontal coordinate to the slice index under it.
///
/// The strip is divided into `count` equal-width slices; `x` is clamped into
/// the frame first, so coordinates left or right of the strip resolve to the
/// outermost slices. Returns `None` only for an empty strip.
pub fn slice_index(frame: &Rect, x: f32, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let slice_width = frame.width / count as f32;
    let adjusted = (x - frame.x).clamp(0.0, frame.width);
    let index = (adjusted / slice_width) as usize;
    Some(index.min(count - 1))
}

/// Returns `true` if a touch point should still drive slide tracking.
///
/// Uses the popup frame expanded by [`HIGHLIGHT_TOLERANCE`] on all sides;
/// points beyond the tolerance are ignored and the last highlight is kept.
pub fn within_tracking_bounds(frame: &Rect, point: Point) -> bool {
    frame.expanded_by(HIGHLIGHT_TOLERANCE).contains(point)
}

/// Initial highlight for a freshly expanded popup.
///
/// The slice geometrically containing the anchor key's horizontal center,
/// which is index 0 (the base character) unless edge clamping shifted the
/// strip.
pub fn initial_highlight(frame: &Rect, anchor: &Rect, count: usize) -> usize {
    slice_index(frame, anchor.center_x(), count).unwrap_or(0)
}

// ============================================================================
// Tests
// ============================================================================

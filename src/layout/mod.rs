// SPDX-License-Identifier: GPL-3.0-only

//! Static keyboard layout tables.
//!
//! This module defines the key descriptors and the fixed Russian/Bashkir
//! layout: four letter rows, a number plane, a symbol plane, and the bottom
//! row shown alongside the emoji panel. The tables are pure data; all
//! behavior lives in the input modules.
//!
//! Bashkir-specific letters are not printed on their own keys. They are
//! reachable by long-pressing their Cyrillic base keys, see
//! [`alternatives`].

use std::fmt;

pub mod alternatives;

pub use alternatives::{AlternativeCharacters, AlternativesEntry};

// ============================================================================
// Key Descriptors
// ============================================================================

/// Stable identity of a key within a layout.
///
/// Assigned once when the layout table is built; the render adapter reports
/// gesture events against these ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(pub u32);

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key#{}", self.0)
    }
}

/// Which plane of the keyboard is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Cyrillic letter rows.
    #[default]
    Letters,
    /// Digits and common punctuation.
    Numbers,
    /// Extended symbols.
    Symbols,
    /// Emoji panel with its own bottom row.
    Emoji,
}

/// What a key does when activated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Inserts the base grapheme, case-folded by the current shift state.
    Character(String),
    /// Cycles the shift / caps-lock state.
    Shift,
    /// Deletes backward in the host text field.
    Backspace,
    /// Inserts a space.
    Space,
    /// Inserts a newline.
    Return,
    /// Switches to the given layout plane.
    LayoutToggle(LayoutMode),
    /// Requests the host's next-input-method switch. Handled by the host
    /// surface, a no-op for the input core.
    NextKeyboard,
    /// Toggles the emoji panel on and off.
    Emoji,
}

/// A single key of the layout table.
///
/// Constructed once per table entry and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// Stable identity within the layout.
    pub id: KeyId,
    /// The key's behavior.
    pub kind: KeyKind,
}

impl Key {
    /// Returns the base grapheme for character keys, `None` otherwise.
    pub fn base_value(&self) -> Option<&str> {
        match &self.kind {
            KeyKind::Character(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the glyph shown on the key cap.
    pub fn display_text(&self, uppercase: bool) -> String {
        match &self.kind {
            KeyKind::Character(value) => {
                if uppercase {
                    value.to_uppercase()
                } else {
                    value.clone()
                }
            }
            KeyKind::Shift => "⇧".to_string(),
            KeyKind::Backspace => "⌫".to_string(),
            KeyKind::Space => String::new(),
            KeyKind::Return => "⏎".to_string(),
            KeyKind::LayoutToggle(LayoutMode::Numbers) => "123".to_string(),
            KeyKind::LayoutToggle(LayoutMode::Letters) => "АБВ".to_string(),
            KeyKind::LayoutToggle(LayoutMode::Symbols) => "#+=".to_string(),
            KeyKind::LayoutToggle(LayoutMode::Emoji) | KeyKind::Emoji => "🙂".to_string(),
            KeyKind::NextKeyboard => "🌐".to_string(),
        }
    }

    /// Returns the label reported to accessibility services.
    pub fn accessibility_label(&self) -> &str {
        match &self.kind {
            KeyKind::Character(value) => value,
            KeyKind::Shift => "Shift",
            KeyKind::Backspace => "Backspace",
            KeyKind::Space => "Space",
            KeyKind::Return => "Return",
            KeyKind::LayoutToggle(LayoutMode::Numbers) => "Numbers",
            KeyKind::LayoutToggle(LayoutMode::Letters) => "Letters",
            KeyKind::LayoutToggle(LayoutMode::Symbols) => "Symbols",
            KeyKind::LayoutToggle(LayoutMode::Emoji) | KeyKind::Emoji => "Emoji",
            KeyKind::NextKeyboard => "Next Keyboard",
        }
    }
}

/// A row of keys in a layout plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Keys in presentation order, left to right.
    pub keys: Vec<Key>,
}

// ============================================================================
// Layout Table
// ============================================================================

/// Width ratios for the four bottom-row keys (toggle, emoji, space, return).
///
/// Sizing hint for the render adapter, relative to the leftmost key.
pub const BOTTOM_ROW_WIDTH_RATIOS: [f32; 4] = [1.0, 1.0, 4.45, 2.2];

/// Default emoji strip shown when the host provides none.
pub const DEFAULT_EMOJI: [&str; 12] = [
    "😀", "😁", "😂", "🤣", "😊", "😍", "😘", "🥰", "😎", "🤩", "😭", "😡",
];

/// A complete keyboard layout across all planes.
#[derive(Debug, Clone)]
pub struct Layout {
    letter_rows: Vec<Row>,
    number_rows: Vec<Row>,
    symbol_rows: Vec<Row>,
    emoji_bottom_row: Row,
}

impl Layout {
    /// Returns the rows for a layout plane.
    ///
    /// The emoji plane has no key rows of its own; the render adapter shows
    /// the emoji panel plus [`Layout::emoji_bottom_row`] instead.
    pub fn rows(&self, mode: LayoutMode) -> &[Row] {
        match mode {
            LayoutMode::Letters => &self.letter_rows,
            LayoutMode::Numbers => &self.number_rows,
            LayoutMode::Symbols => &self.symbol_rows,
            LayoutMode::Emoji => &[],
        }
    }

    /// Returns the bottom row shown alongside the emoji panel.
    pub fn emoji_bottom_row(&self) -> &Row {
        &self.emoji_bottom_row
    }

    /// Finds a key anywhere in the layout by its id.
    pub fn key(&self, id: KeyId) -> Option<&Key> {
        self.letter_rows
            .iter()
            .chain(&self.number_rows)
            .chain(&self.symbol_rows)
            .chain(std::iter::once(&self.emoji_bottom_row))
            .flat_map(|row| &row.keys)
            .find(|key| key.id == id)
    }

    /// The Russian layout with Bashkir long-press alternatives.
    ///
    /// Row contents mirror the stock iOS Russian keyboard; ъ is not printed
    /// (it is the long-press alternative of ь).
    pub fn russian() -> Self {
        let mut ids = KeyIdGen::default();

        let letter_rows = vec![
            // Row 1: й ц у к е н г ш щ з х
            Row {
                keys: ids.characters("йцукенгшщзх"),
            },
            // Row 2: ф ы в а п р о л д ж э
            Row {
                keys: ids.characters("фывапролджэ"),
            },
            // Row 3: ⇧ я ч с м и т ь б ю ⌫
            Row {
                keys: {
                    let mut keys = vec![ids.key(KeyKind::Shift)];
                    keys.extend(ids.characters("ячсмитьбю"));
                    keys.push(ids.key(KeyKind::Backspace));
                    keys
                },
            },
            // Row 4: 123 emoji space return
            Row {
                keys: vec![
                    ids.key(KeyKind::LayoutToggle(LayoutMode::Numbers)),
                    ids.key(KeyKind::Emoji),
                    ids.key(KeyKind::Space),
                    ids.key(KeyKind::Return),
                ],
            },
        ];

        let number_rows = vec![
            // Row 1: 1 2 3 4 5 6 7 8 9 0
            Row {
                keys: ids.characters("1234567890"),
            },
            // Row 2: - / : ; ( ) ₽ & @ "
            Row {
                keys: ids.characters("-/:;()₽&@\""),
            },
            // Row 3: #+= space return ⌫
            Row {
                keys: vec![
                    ids.key(KeyKind::LayoutToggle(LayoutMode::Symbols)),
                    ids.key(KeyKind::Space),
                    ids.key(KeyKind::Return),
                    ids.key(KeyKind::Backspace),
                ],
            },
            // Row 4: АБВ (return to letters)
            Row {
                keys: vec![ids.key(KeyKind::LayoutToggle(LayoutMode::Letters))],
            },
        ];

        let symbol_rows = vec![
            // Row 1: [ ] { } # % ^ * + = _
            Row {
                keys: ids.characters("[]{}#%^*+=_"),
            },
            // Row 2: \ | ~ < > € £ ¥ • …
            Row {
                keys: ids.characters("\\|~<>€£¥•…"),
            },
            // Row 3: 123 space return ⌫
            Row {
                keys: vec![
                    ids.key(KeyKind::LayoutToggle(LayoutMode::Numbers)),
                    ids.key(KeyKind::Space),
                    ids.key(KeyKind::Return),
                    ids.key(KeyKind::Backspace),
                ],
            },
            // Row 4: АБВ (return to letters)
            Row {
                keys: vec![ids.key(KeyKind::LayoutToggle(LayoutMode::Letters))],
            },
        ];

        let emoji_bottom_row = Row {
            keys: vec![
                ids.key(KeyKind::LayoutToggle(LayoutMode::Letters)),
                ids.key(KeyKind::Emoji),
                ids.key(KeyKind::Space),
                ids.key(KeyKind::Return),
            ],
        };

        Self {
            letter_rows,
            number_rows,
            symbol_rows,
            emoji_bottom_row,
        }
    }
}

/// Sequential key-id allocator used while building a layout.
#[derive(Debug, Default)]
struct KeyIdGen {
    next: u32,
}

impl KeyIdGen {
    fn key(&mut self, kind: KeyKind) -> Key {
        let id = KeyId(self.next);
        self.next += 1;
        Key { id, kind }
    }

    fn characters(&mut self, chars: &str) -> Vec<Key> {
        chars
            .chars()
            .map(|c| self.key(KeyKind::Character(c.to_string())))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The letter plane has the documented row structure.
    #[test]
    fn test_letter_rows_structure() {
        let layout = Layout::russian();
        let rows = layout.rows(LayoutMode::Letters);
        assert_eq!(rows.len(), 4);

        // Eleven character keys in each of the first two rows.
        assert_eq!(rows[0].keys.len(), 11);
        assert_eq!(rows[1].keys.len(), 11);

        // Third row is shift + nine letters + backspace.
        assert_eq!(rows[2].keys.len(), 11);
        assert_eq!(rows[2].keys[0].kind, KeyKind::Shift);
        assert_eq!(rows[2].keys[10].kind, KeyKind::Backspace);

        // Bottom row: 123, emoji, space, return.
        let bottom: Vec<_> = rows[3].keys.iter().map(|k| k.kind.clone()).collect();
        assert_eq!(
            bottom,
            vec![
                KeyKind::LayoutToggle(LayoutMode::Numbers),
                KeyKind::Emoji,
                KeyKind::Space,
                KeyKind::Return,
            ]
        );
    }

    /// ъ never appears as a printed key; it only exists as the long-press
    /// alternative of ь.
    #[test]
    fn test_hard_sign_not_printed() {
        let layout = Layout::russian();
        for mode in [LayoutMode::Letters, LayoutMode::Numbers, LayoutMode::Symbols] {
            for row in layout.rows(mode) {
                for key in &row.keys {
                    assert_ne!(key.base_value(), Some("ъ"));
                }
            }
        }

        let alternatives = AlternativeCharacters::default();
        assert_eq!(
            alternatives.lookup("ь").unwrap().lowercase,
            vec!["ъ".to_string()]
        );
    }

    /// The emoji plane has no rows; its bottom row swaps 123 for АБВ.
    #[test]
    fn test_emoji_plane() {
        let layout = Layout::russian();
        assert!(layout.rows(LayoutMode::Emoji).is_empty());

        let bottom = layout.emoji_bottom_row();
        assert_eq!(bottom.keys.len(), 4);
        assert_eq!(
            bottom.keys[0].kind,
            KeyKind::LayoutToggle(LayoutMode::Letters)
        );
        assert_eq!(bottom.keys[1].kind, KeyKind::Emoji);
    }

    /// Key ids are unique across the whole layout and resolvable.
    #[test]
    fn test_key_ids_unique_and_resolvable() {
        let layout = Layout::russian();
        let mut seen = std::collections::HashSet::new();

        let all_rows = layout
            .rows(LayoutMode::Letters)
            .iter()
            .chain(layout.rows(LayoutMode::Numbers))
            .chain(layout.rows(LayoutMode::Symbols))
            .chain(std::iter::once(layout.emoji_bottom_row()));

        for row in all_rows {
            for key in &row.keys {
                assert!(seen.insert(key.id), "duplicate id {}", key.id);
                assert_eq!(layout.key(key.id), Some(key));
            }
        }

        assert!(layout.key(KeyId(u32::MAX)).is_none());
    }

    /// Display text folds character keys and labels special keys.
    #[test]
    fn test_display_text() {
        let layout = Layout::russian();
        let rows = layout.rows(LayoutMode::Letters);

        let first = &rows[0].keys[0];
        assert_eq!(first.display_text(false), "й");
        assert_eq!(first.display_text(true), "Й");

        let shift = &rows[2].keys[0];
        assert_eq!(shift.display_text(false), "⇧");
        assert_eq!(shift.accessibility_label(), "Shift");

        let toggle = &rows[3].keys[0];
        assert_eq!(toggle.display_text(true), "123");
        assert_eq!(toggle.accessibility_label(), "Numbers");
    }

    /// Every base grapheme of the alternatives table is present on the
    /// letter plane.
    #[test]
    fn test_alternative_bases_present() {
        let layout = Layout::russian();
        let letters: std::collections::HashSet<String> = layout
            .rows(LayoutMode::Letters)
            .iter()
            .flat_map(|row| &row.keys)
            .filter_map(|key| key.base_value().map(str::to_string))
            .collect();

        for base in ["з", "с", "а", "у", "х", "о", "н", "г", "к", "ь"] {
            assert!(letters.contains(base), "missing base {}", base);
        }
    }
}

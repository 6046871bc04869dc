//! Platform-side editing state for text fields.
//!
//! The host drives a [`FieldState`] per focused field between builds: key
//! events land here, and the widget only ever sees the resulting text via
//! its forwarded callbacks. Edits respect the behavior props of the field
//! they belong to (`editable`, `max_length`), and all caret and deletion
//! motion snaps to grapheme-cluster boundaries.

use std::ops::Range;

use alcove_core::FieldProps;
use unicode_segmentation::UnicodeSegmentation;
use web_time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct FieldState {
    pub text: String,
    /// Byte range; start == end means a caret with no selection.
    pub selection: Range<usize>,
    /// Horizontal scroll of the inner content, px.
    pub scroll_offset: f32,
    blink_start: Instant,
}

impl FieldState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            selection: 0..0,
            scroll_offset: 0.0,
            blink_start: Instant::now(),
        }
    }

    /// Seed from a controlled value, caret at the end.
    pub fn from_props(props: &FieldProps) -> Self {
        let mut st = Self::new();
        if let Some(v) = &props.value {
            st.text = v.clone();
            st.selection = st.text.len()..st.text.len();
        }
        st
    }

    /// Replace the selection with `input`, clipped so the total grapheme
    /// count stays within `props.max_length`. No-op when not editable.
    pub fn insert(&mut self, props: &FieldProps, input: &str) {
        if !props.editable {
            log::debug!("edit ignored: field is not editable");
            return;
        }
        let start = self.selection.start.min(self.text.len());
        let end = self.selection.end.min(self.text.len());

        let input = match props.max_length {
            Some(max) => {
                let kept = self.text[..start].graphemes(true).count()
                    + self.text[end..].graphemes(true).count();
                let room = max.saturating_sub(kept);
                clip_graphemes(input, room)
            }
            None => input,
        };

        self.text.replace_range(start..end, input);
        let caret = start + input.len();
        self.selection = caret..caret;
        self.reset_blink();
    }

    pub fn delete_backward(&mut self, props: &FieldProps) {
        if !props.editable {
            return;
        }
        if self.selection.start == self.selection.end {
            let pos = self.selection.start.min(self.text.len());
            if pos > 0 {
                let prev = prev_grapheme_boundary(&self.text, pos);
                self.text.replace_range(prev..pos, "");
                self.selection = prev..prev;
            }
            self.reset_blink();
        } else {
            self.insert(props, "");
        }
    }

    pub fn delete_forward(&mut self, props: &FieldProps) {
        if !props.editable {
            return;
        }
        if self.selection.start == self.selection.end {
            let pos = self.selection.start.min(self.text.len());
            if pos < self.text.len() {
                let next = next_grapheme_boundary(&self.text, pos);
                self.text.replace_range(pos..next, "");
            }
            self.reset_blink();
        } else {
            self.insert(props, "");
        }
    }

    /// Move the caret by `delta` grapheme clusters; `extend` grows the
    /// selection instead of collapsing it.
    pub fn move_caret(&mut self, delta: isize, extend: bool) {
        let mut pos = self.selection.end.min(self.text.len());
        if delta < 0 {
            for _ in 0..delta.unsigned_abs() {
                pos = prev_grapheme_boundary(&self.text, pos);
            }
        } else {
            for _ in 0..delta as usize {
                pos = next_grapheme_boundary(&self.text, pos);
            }
        }
        if extend {
            self.selection.end = pos;
        } else {
            self.selection = pos..pos;
        }
        self.reset_blink();
    }

    pub fn select_all(&mut self) {
        self.selection = 0..self.text.len();
        self.reset_blink();
    }

    pub fn selected_text(&self) -> &str {
        let start = self.selection.start.min(self.selection.end);
        let end = self.selection.start.max(self.selection.end);
        &self.text[start.min(self.text.len())..end.min(self.text.len())]
    }

    pub fn caret_index(&self) -> usize {
        self.selection.end
    }

    // Keep caret visible inside inner content width
    pub fn ensure_caret_visible(&mut self, caret_x: f32, inner_width: f32) {
        // small 2px inset
        let inset = 2.0;
        let left = self.scroll_offset + inset;
        let right = self.scroll_offset + inner_width - inset;
        if caret_x < left {
            self.scroll_offset = (caret_x - inset).max(0.0);
        } else if caret_x > right {
            self.scroll_offset = (caret_x - inner_width + inset).max(0.0);
        }
    }

    pub fn reset_blink(&mut self) {
        self.blink_start = Instant::now();
    }

    pub fn caret_visible(&self) -> bool {
        const PERIOD: Duration = Duration::from_millis(500);
        ((Instant::now() - self.blink_start).as_millis() / PERIOD.as_millis()) % 2 == 0
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_grapheme_boundary(text: &str, byte: usize) -> usize {
    let mut last = 0usize;
    for (i, _) in text.grapheme_indices(true) {
        if i >= byte {
            break;
        }
        last = i;
    }
    last
}

fn next_grapheme_boundary(text: &str, byte: usize) -> usize {
    for (i, _) in text.grapheme_indices(true) {
        if i > byte {
            return i;
        }
    }
    text.len()
}

/// Longest prefix of `input` holding at most `count` grapheme clusters.
fn clip_graphemes(input: &str, count: usize) -> &str {
    match input.grapheme_indices(true).nth(count) {
        Some((i, _)) => &input[..i],
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_caret() {
        let props = FieldProps::new();
        let mut st = FieldState::new();
        st.insert(&props, "Hello");
        assert_eq!(st.text, "Hello");
        assert_eq!(st.selection, 5..5);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let props = FieldProps::new();
        let mut st = FieldState::new();
        st.insert(&props, "Hello World");
        st.selection = 0..5;
        st.insert(&props, "Hi");
        assert_eq!(st.text, "Hi World");
        assert_eq!(st.selection, 2..2);
    }

    #[test]
    fn test_delete_backward_grapheme() {
        // thumbs up + skin tone is one grapheme cluster
        let props = FieldProps::new();
        let mut st = FieldState::new();
        st.insert(&props, "A👍🏽B");
        st.move_caret(-1, false);
        assert_eq!(st.selection.end, "A👍🏽".len());
        st.delete_backward(&props);
        assert_eq!(st.text, "AB");
        assert_eq!(st.selection, "A".len().."A".len());
    }

    #[test]
    fn test_delete_forward() {
        let props = FieldProps::new();
        let mut st = FieldState::new();
        st.insert(&props, "Hi");
        st.move_caret(-2, false);
        st.delete_forward(&props);
        assert_eq!(st.text, "i");
        assert_eq!(st.selection, 0..0);
    }

    #[test]
    fn test_max_length_clips_insert() {
        let props = FieldProps::new().max_length(5);
        let mut st = FieldState::new();
        st.insert(&props, "Hello World");
        assert_eq!(st.text, "Hello");
        // full field rejects further input but still allows replacement
        st.insert(&props, "!");
        assert_eq!(st.text, "Hello");
        st.select_all();
        st.insert(&props, "Bye");
        assert_eq!(st.text, "Bye");
    }

    #[test]
    fn test_max_length_counts_graphemes() {
        let props = FieldProps::new().max_length(2);
        let mut st = FieldState::new();
        st.insert(&props, "👍🏽👍🏽👍🏽");
        assert_eq!(st.text.graphemes(true).count(), 2);
    }

    #[test]
    fn test_not_editable_rejects_edits() {
        let props = FieldProps::new().editable(false);
        let mut st = FieldState::new();
        st.insert(&props, "nope");
        assert_eq!(st.text, "");
        st.text = "fixed".into();
        st.selection = 5..5;
        st.delete_backward(&props);
        assert_eq!(st.text, "fixed");
    }

    #[test]
    fn test_from_props_seeds_value() {
        let props = FieldProps::new().value("seeded");
        let st = FieldState::from_props(&props);
        assert_eq!(st.text, "seeded");
        assert_eq!(st.selection, 6..6);
    }

    #[test]
    fn test_selection_extend_and_selected_text() {
        let props = FieldProps::new();
        let mut st = FieldState::new();
        st.insert(&props, "Hello");
        st.move_caret(-3, false);
        st.move_caret(2, true);
        assert_eq!(st.selected_text(), "ll");
    }

    #[test]
    fn test_ensure_caret_visible_scrolls_right_then_left() {
        let mut st = FieldState::new();
        st.ensure_caret_visible(150.0, 100.0);
        assert!(st.scroll_offset > 0.0);
        let scrolled = st.scroll_offset;
        st.ensure_caret_visible(0.0, 100.0);
        assert!(st.scroll_offset < scrolled);
        assert_eq!(st.scroll_offset, 0.0);
    }
}

//! The platform text-field widget.
//!
//! [`TextField`] only carries configuration: behavior props go in as a
//! [`FieldProps`] and come back out untouched on the view, and the visual
//! attributes (`color`, `font_size`) are expected to be resolved device
//! values. Editing itself lives in [`crate::FieldState`], driven by the
//! host between builds.

use alcove_core::*;

pub const TF_FONT_PX: f32 = 16.0;

pub fn TextField(field: FieldProps, modifier: Modifier) -> View {
    let label = if field.hint.is_empty() {
        None
    } else {
        Some(field.hint.clone())
    };
    View::new(
        0,
        ViewKind::TextField {
            field,
            color: Color::BLACK,
            font_size: TF_FONT_PX,
        },
    )
    .modifier(modifier)
    .semantics(Semantics {
        role: Role::TextField,
        label,
        focused: false,
        enabled: true,
    })
}

pub trait TextFieldExt {
    fn text_color(self, c: Color) -> View;
    /// Font size in device px, already resolved.
    fn text_size(self, px: f32) -> View;
}

impl TextFieldExt for View {
    fn text_color(mut self, c: Color) -> View {
        if let ViewKind::TextField { color, .. } = &mut self.kind {
            *color = c;
        }
        self
    }
    fn text_size(mut self, px: f32) -> View {
        if let ViewKind::TextField { font_size, .. } = &mut self.kind {
            *font_size = px;
        }
        self
    }
}

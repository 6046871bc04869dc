//! The responsive styled input.
//!
//! [`Input`] wraps the platform text field in a sized, bordered container.
//! Width, height, and font size are authored in design units and resolved
//! against the current metrics locals on every build; colors accept
//! design-tool color strings (names or hex).
//!
//! Styling resolves in three layers, last write wins:
//!
//! 1. the defaults below,
//! 2. explicit named props on [`InputProps`],
//! 3. the `container_style` / `field_style` override modifiers.

use alcove_core::*;

use crate::{Row, TextField, TextFieldExt, ViewExt};

pub const INPUT_WIDTH_DU: f32 = 300.0;
pub const INPUT_HEIGHT_DU: f32 = 50.0;
pub const INPUT_FONT_DU: f32 = 16.0;
/// Horizontal inner padding keeping text off the border, du.
pub const INPUT_PADDING_X_DU: f32 = 15.0;
pub const INPUT_BORDER_WIDTH: f32 = 1.0;
pub const INPUT_BORDER_RADIUS: f32 = 8.0;

const DEFAULT_BACKGROUND: Color = Color::WHITE;
const DEFAULT_TEXT_COLOR: Color = Color(0x33, 0x33, 0x33, 255);
const DEFAULT_BORDER_COLOR: Color = Color(0xdd, 0xdd, 0xdd, 255);

/// Configuration for [`Input`]. Every styling field is optional and
/// defaults independently; `field` is handed to the platform text field
/// unmodified.
#[derive(Clone, Debug, Default)]
pub struct InputProps {
    /// Container width, du. Default 300.
    pub width: Option<f32>,
    /// Container height, du. Default 50.
    pub height: Option<f32>,
    /// Container fill. Default `"white"`.
    pub background: Option<String>,
    /// Text size, du; honors the user's font preference. Default 16.
    pub font_size: Option<f32>,
    /// Typed-text color. Default `"#333"`.
    pub text_color: Option<String>,
    /// Border color. Default `"#ddd"`.
    pub border_color: Option<String>,
    /// Border width, px (unscaled). Default 1.
    pub border_width: Option<f32>,
    /// Corner radius, px (unscaled). Default 8.
    pub border_radius: Option<f32>,
    /// Final override layer for the container.
    pub container_style: Option<Modifier>,
    /// Final override layer for the inner field.
    pub field_style: Option<Modifier>,
    /// Behavior props forwarded to the platform field.
    pub field: FieldProps,
}

impl InputProps {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn width(mut self, du: f32) -> Self {
        self.width = Some(du);
        self
    }
    pub fn height(mut self, du: f32) -> Self {
        self.height = Some(du);
        self
    }
    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }
    pub fn font_size(mut self, du: f32) -> Self {
        self.font_size = Some(du);
        self
    }
    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }
    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }
    pub fn border_width(mut self, px: f32) -> Self {
        self.border_width = Some(px);
        self
    }
    pub fn border_radius(mut self, px: f32) -> Self {
        self.border_radius = Some(px);
        self
    }
    pub fn container_style(mut self, m: Modifier) -> Self {
        self.container_style = Some(m);
        self
    }
    pub fn field_style(mut self, m: Modifier) -> Self {
        self.field_style = Some(m);
        self
    }
    pub fn field(mut self, f: FieldProps) -> Self {
        self.field = f;
        self
    }
}

pub fn Input(props: InputProps) -> View {
    let InputProps {
        width,
        height,
        background,
        font_size,
        text_color,
        border_color,
        border_width,
        border_radius,
        container_style,
        field_style,
        field,
    } = props;

    let background = resolve_color(background.as_deref(), DEFAULT_BACKGROUND);
    let text_color = resolve_color(text_color.as_deref(), DEFAULT_TEXT_COLOR);
    let border_color = resolve_color(border_color.as_deref(), DEFAULT_BORDER_COLOR);

    let container = Modifier::new()
        .width(scale(width.unwrap_or(INPUT_WIDTH_DU)))
        .height(scale(height.unwrap_or(INPUT_HEIGHT_DU)))
        .background(background)
        .border(
            border_width.unwrap_or(INPUT_BORDER_WIDTH),
            border_color,
            border_radius.unwrap_or(INPUT_BORDER_RADIUS),
        )
        .align_items_center()
        .padding_horizontal(scale(INPUT_PADDING_X_DU))
        .over(container_style.unwrap_or_default());

    let inner = Modifier::new()
        .flex_grow(1.0)
        .padding(0.0)
        .over(field_style.unwrap_or_default());

    Row(container).child(
        TextField(field, inner)
            .text_color(text_color)
            .text_size(font_scale(font_size.unwrap_or(INPUT_FONT_DU))),
    )
}

fn resolve_color(prop: Option<&str>, default: Color) -> Color {
    match prop {
        Some(s) => Color::parse_or(s, default),
        None => default,
    }
}

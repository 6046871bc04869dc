use taffy::{AlignItems, FlexDirection, JustifyContent};

use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Style attributes for a view. All values are already resolved to device
/// pixels by the time they land here; widgets run du values through
/// `metrics::scale` first where a field is scale-sensitive.
///
/// Plain data: two modifiers compare equal iff they resolve the same.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub padding: Option<f32>,
    pub padding_values: Option<PaddingValues>,
    pub background: Option<Color>,
    pub border: Option<Border>,
    pub flex_grow: Option<f32>,
    pub flex_dir: Option<FlexDirection>,
    pub align_items: Option<AlignItems>,
    pub justify_content: Option<JustifyContent>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.width = Some(w);
        self.height = Some(h);
        self
    }
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn min_size(mut self, w: f32, h: f32) -> Self {
        self.min_width = Some(w);
        self.min_height = Some(h);
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding_values = Some(padding);
        self
    }
    pub fn padding_horizontal(mut self, v: f32) -> Self {
        let mut pv = self.padding_values.unwrap_or_default();
        pv.left = v;
        pv.right = v;
        self.padding_values = Some(pv);
        self
    }
    pub fn padding_vertical(mut self, v: f32) -> Self {
        let mut pv = self.padding_values.unwrap_or_default();
        pv.top = v;
        pv.bottom = v;
        self.padding_values = Some(pv);
        self
    }
    /// Set a solid color background.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.border = Some(Border {
            width,
            color,
            radius,
        });
        self
    }
    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }
    pub fn flex_dir(mut self, d: FlexDirection) -> Self {
        self.flex_dir = Some(d);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items = Some(a);
        self
    }
    pub fn align_items_center(mut self) -> Self {
        self.align_items = Some(AlignItems::Center);
        self
    }
    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }

    /// Overlay merge: every attribute set on `over` replaces the value here,
    /// attributes left unset on `over` keep this modifier's. The last layer
    /// applied wins; there is no conflict detection.
    pub fn over(mut self, over: Modifier) -> Self {
        self.width = over.width.or(self.width);
        self.height = over.height.or(self.height);
        self.min_width = over.min_width.or(self.min_width);
        self.min_height = over.min_height.or(self.min_height);
        self.padding = over.padding.or(self.padding);
        self.padding_values = over.padding_values.or(self.padding_values);
        self.background = over.background.or(self.background);
        self.border = over.border.or(self.border);
        self.flex_grow = over.flex_grow.or(self.flex_grow);
        self.flex_dir = over.flex_dir.or(self.flex_dir);
        self.align_items = over.align_items.or(self.align_items);
        self.justify_content = over.justify_content.or(self.justify_content);
        self
    }
}

pub use crate::color::Color;
pub use crate::error::ColorParseError;
pub use crate::field::{FieldProps, Keyboard, TextCallback};
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::metrics::{
    Du, FontScale, REFERENCE_WIDTH, ScreenMetrics, du_to_px, font_scale, font_scale_factor, scale,
    screen_metrics, with_font_scale, with_screen_metrics,
};
pub use crate::semantics::{Role, Semantics};
pub use crate::style::{Border, Modifier, PaddingValues};
pub use crate::view::{View, ViewId, ViewKind};
pub use taffy::{AlignItems, FlexDirection, JustifyContent};

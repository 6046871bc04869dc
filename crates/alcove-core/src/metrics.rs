//! # Screen metrics and responsive scaling
//!
//! Alcove uses thread‑local “composition locals” for the per‑build UI
//! parameters that scaling depends on:
//!
//! - `ScreenMetrics`: the device viewport, in physical pixels.
//! - `FontScale`: the user's system‑level text size preference.
//!
//! Measurements are authored in design units (du) against a reference canvas
//! of [`REFERENCE_WIDTH`] pixels. [`scale`] maps a du value proportionally to
//! the current screen width; [`font_scale`] additionally applies the user's
//! font preference so text density follows accessibility settings.
//!
//! You can override the locals for a subtree using `with_screen_metrics` and
//! `with_font_scale`:
//!
//! ```rust
//! use alcove_core::*;
//!
//! let phone = ScreenMetrics { width: 393.0, height: 852.0 };
//! with_screen_metrics(phone, || {
//!     // all views built here resolve du values against a 393px-wide screen
//!     assert!((scale(375.0) - 393.0).abs() < 1e-4);
//! });
//! ```
//!
//! Both mappings are pure given the current locals. Any finite input is
//! accepted, including zero or negative values; callers own their meaning.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

/// Width of the reference design canvas, in pixels.
pub const REFERENCE_WIDTH: f32 = 375.0;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

/// design units (du)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Du(pub f32);

impl Du {
    /// Converts this du value into physical pixels using the current
    /// ScreenMetrics.
    pub fn to_px(self) -> f32 {
        scale(self.0)
    }
}

/// Convenience: convert a raw du scalar into px using current ScreenMetrics.
pub fn du_to_px(v: f32) -> f32 {
    Du(v).to_px()
}

/// Proportional du→px mapping against the current screen width.
pub fn scale(v: f32) -> f32 {
    v * screen_metrics().width / REFERENCE_WIDTH
}

/// Like [`scale`], with the user's text size preference applied on top.
pub fn font_scale(v: f32) -> f32 {
    scale(v) * font_scale_factor().0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMetrics {
    /// Viewport width in physical pixels.
    pub width: f32,
    /// Viewport height in physical pixels.
    pub height: f32,
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        // Reference-sized portrait viewport; scale() is the identity until
        // the host installs real metrics.
        Self {
            width: REFERENCE_WIDTH,
            height: 812.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontScale(pub f32);

impl Default for FontScale {
    fn default() -> Self {
        Self(1.0)
    }
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(t, v);
            st.borrow_mut().push(m);
        }
    });
}

pub fn with_screen_metrics<R>(metrics: ScreenMetrics, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<ScreenMetrics>(), Box::new(metrics));
        f()
    })
}

pub fn with_font_scale<R>(fs: FontScale, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<FontScale>(), Box::new(fs));
        f()
    })
}

// Getters with defaults if not set

pub fn screen_metrics() -> ScreenMetrics {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<ScreenMetrics>())
                && let Some(m) = v.downcast_ref::<ScreenMetrics>()
            {
                return *m;
            }
        }
        ScreenMetrics::default()
    })
}

pub fn font_scale_factor() -> FontScale {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<FontScale>())
                && let Some(fs) = v.downcast_ref::<FontScale>()
            {
                return *fs;
            }
        }
        FontScale::default()
    })
}

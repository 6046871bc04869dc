//! # Alcove core
//!
//! The data side of the kit: a retained `View` tree, a builder-style
//! [`Modifier`] for resolved style attributes, composition locals for the
//! device parameters scaling depends on, and the color/geometry vocabulary
//! widgets share.
//!
//! Widgets are plain functions (see `alcove-ui`) that read the current
//! [`ScreenMetrics`]/[`FontScale`] locals, resolve their props into a
//! `Modifier`, and return a `View` for the host pipeline to lay out and
//! paint. A build is a pure computation: same props plus same locals, same
//! tree.
//!
//! ```rust
//! use alcove_core::*;
//!
//! let m = Modifier::new()
//!     .size(scale(300.0), scale(50.0))
//!     .background(Color::WHITE)
//!     .border(1.0, Color::from_hex("#ddd"), 8.0);
//! assert_eq!(m.background, Some(Color::WHITE));
//! ```

pub mod color;
pub mod error;
pub mod field;
pub mod geometry;
pub mod metrics;
pub mod prelude;
pub mod semantics;
pub mod style;
pub mod tests;
pub mod view;

pub use color::*;
pub use error::*;
pub use field::*;
pub use geometry::*;
pub use metrics::*;
pub use prelude::*;
pub use semantics::*;
pub use style::*;
pub use view::*;

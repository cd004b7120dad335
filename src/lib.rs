pub mod error;
pub mod geometry;
pub mod hit;
pub mod length;
pub mod node;
pub mod paint;
pub mod style;

pub use error::{Error, LengthError, PaintError, Result, StyleError};
pub use geometry::{Point, Rect, Size};
pub use hit::HitArea;
pub use length::{Length, PercentageConverter};
pub use node::{BoxPair, HitTestable, Positionable, ReferenceBox, RenderableNode};
pub use paint::{Paint, PaintRegistry, PaintServer, PaintServerKind, ResolvedPaint, Rgba};
pub use style::{FillRule, LineCap, LineJoin, RenderStyle};

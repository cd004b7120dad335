//! The renderable node composite
//!
//! A renderable node owns one stroke/fill style block, the pair of
//! bounding boxes percentage resolution works against, the hit-test path
//! holder, and the attribute name lists the diffing system reads. The
//! positioning and hit-testing capabilities are traits implemented by the
//! concrete node type, not inherited from a base node.
//!
//! Threading: all mutation runs serialized on the rendering thread. The
//! bounding boxes and the hit-test path are the only state the input
//! thread reads; both hand out untorn snapshots (`Copy` rects read under a
//! lock, `Arc` path pointers swapped wholesale), shared via
//! [`RenderableNode::box_handle`] and [`RenderableNode::hit_handle`].

use crate::geometry::{Point, Rect};
use crate::hit::HitArea;
use crate::length::PercentageConverter;
use crate::style::RenderStyle;
use parking_lot::RwLock;
use std::sync::Arc;
use tiny_skia::Path;

/// Which bounding box a percentage resolution was based on
///
/// Returned alongside every reference lookup so diagnostics can ask
/// "was the content box used?" instead of re-deriving the precedence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceBox {
  /// The node's own content (object) bounding box
  Content,
  /// The box assigned by the embedding container's layout
  Layout,
}

/// The two independently settable bounding boxes of a node
///
/// Both start as [`Rect::ZERO`], the unset sentinel; getters never return
/// an `Option`. Setting either box is a pure replace. Callers are
/// responsible for invalidating any percentage-resolved values they cached
/// before a box changed.
#[derive(Debug, Default)]
pub struct BoxPair {
  content: RwLock<Rect>,
  layout: RwLock<Rect>,
}

impl BoxPair {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn content(&self) -> Rect {
    *self.content.read()
  }

  pub fn set_content(&self, rect: Rect) {
    *self.content.write() = rect;
  }

  pub fn layout(&self) -> Rect {
    *self.layout.read()
  }

  pub fn set_layout(&self, rect: Rect) {
    *self.layout.write() = rect;
  }

  /// The box percentages resolve against, and which one it was
  ///
  /// The content box takes precedence when set and non-degenerate;
  /// otherwise the layout box serves, whatever its state. A zero-area
  /// content box is indistinguishable from an unset one here.
  pub fn reference(&self) -> (Rect, ReferenceBox) {
    let content = self.content();
    if content.is_empty() {
      (self.layout(), ReferenceBox::Layout)
    } else {
      (content, ReferenceBox::Content)
    }
  }
}

/// Capability: serves and accepts the two bounding boxes
pub trait Positionable {
  fn content_box(&self) -> Rect;
  fn layout_box(&self) -> Rect;
  fn set_content_box(&self, rect: Rect);
  fn set_layout_box(&self, rect: Rect);
}

/// Capability: owns a replaceable hit-test path
pub trait HitTestable {
  fn hit_path(&self) -> Option<Arc<Path>>;
  fn set_hit_area(&self, path: Option<Path>);
}

/// A renderable vector-graphics node
///
/// # Examples
///
/// ```
/// use fastvector::{Positionable, Rect, RenderableNode};
///
/// let node = RenderableNode::new();
/// node.set_content_box(Rect::new(0.0, 0.0, 200.0, 100.0));
/// assert_eq!(node.resolve_width_relative("50%"), 100.0);
/// assert_eq!(node.resolve_height_relative("50%"), 50.0);
/// ```
#[derive(Debug, Default)]
pub struct RenderableNode {
  style: RenderStyle,
  boxes: Arc<BoxPair>,
  hit: Arc<HitArea>,
  prop_list: Vec<String>,
  attribute_list: Vec<String>,
}

impl RenderableNode {
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a node with its attribute name lists
  ///
  /// Both lists are fixed at registration time and order-significant: the
  /// diffing system applies incoming updates in list order, later entries
  /// overriding earlier ones.
  pub fn with_attribute_lists(prop_list: Vec<String>, attribute_list: Vec<String>) -> Self {
    Self {
      prop_list,
      attribute_list,
      ..Self::default()
    }
  }

  pub fn style(&self) -> &RenderStyle {
    &self.style
  }

  /// Mutable access to the style block, rendering thread only
  ///
  /// Changing a geometry-affecting attribute leaves the hit-test path
  /// stale; call [`RenderableNode::mark_geometry_dirty`] afterwards.
  pub fn style_mut(&mut self) -> &mut RenderStyle {
    &mut self.style
  }

  /// Names of the style properties this node subtype participates in
  pub fn prop_list(&self) -> &[String] {
    &self.prop_list
  }

  /// Names of the attributes this node subtype accepts from updates
  pub fn attribute_list(&self) -> &[String] {
    &self.attribute_list
  }

  /// The active percentage reference box and which one it is
  pub fn reference_box(&self) -> (Rect, ReferenceBox) {
    self.boxes.reference()
  }

  /// Resolver bound to the active box's width
  pub fn width_converter(&self) -> PercentageConverter {
    PercentageConverter::new(self.reference_box().0.width)
  }

  /// Resolver bound to the active box's height
  pub fn height_converter(&self) -> PercentageConverter {
    PercentageConverter::new(self.reference_box().0.height)
  }

  /// Resolver bound to the active box's normalized diagonal
  ///
  /// Serves stroke width and dash values, whose percentages relate to
  /// neither axis alone.
  pub fn diagonal_converter(&self) -> PercentageConverter {
    PercentageConverter::new(self.reference_box().0.normalized_diagonal())
  }

  /// Resolves a raw token against the active box's width
  ///
  /// Malformed tokens recover to 0 (logged) so one bad attribute cannot
  /// take down the paint pass.
  pub fn resolve_width_relative(&self, token: &str) -> f32 {
    self.width_converter().convert_or_default(token)
  }

  /// Resolves a raw token against the active box's height
  pub fn resolve_height_relative(&self, token: &str) -> f32 {
    self.height_converter().convert_or_default(token)
  }

  /// The stroke width in pixels, resolved against the normalized diagonal
  ///
  /// `auto` falls back to the documented stroke-width default of 1.
  pub fn resolved_stroke_width(&self) -> f32 {
    self
      .diagonal_converter()
      .with_default(1.0)
      .convert_length(self.style.stroke_width())
  }

  /// The rasterizer-facing stroke for this node's current geometry
  pub fn stroke_params(&self) -> tiny_skia::Stroke {
    self.style.to_stroke(&self.diagonal_converter().with_default(1.0))
  }

  /// Coarse hit test against the current path snapshot's bounds
  ///
  /// A `false` is definitive; a `true` still needs the input dispatcher's
  /// exact winding containment test. Returns `false` while the node has no
  /// hit-test path.
  pub fn hit_contains(&self, point: Point) -> bool {
    let Some(path) = self.hit.snapshot() else {
      return false;
    };
    let bounds = path.bounds();
    point.x >= bounds.left()
      && point.x <= bounds.right()
      && point.y >= bounds.top()
      && point.y <= bounds.bottom()
  }

  /// Clears the hit-test path after a geometry-affecting mutation
  ///
  /// The node stops being hit-testable until the rendering pass sets a
  /// fresh path.
  pub fn mark_geometry_dirty(&self) {
    self.hit.clear();
  }

  /// Shared handle to the bounding boxes for the input thread
  pub fn box_handle(&self) -> Arc<BoxPair> {
    Arc::clone(&self.boxes)
  }

  /// Shared handle to the hit-test path holder for the input thread
  pub fn hit_handle(&self) -> Arc<HitArea> {
    Arc::clone(&self.hit)
  }
}

impl Positionable for RenderableNode {
  fn content_box(&self) -> Rect {
    self.boxes.content()
  }

  fn layout_box(&self) -> Rect {
    self.boxes.layout()
  }

  fn set_content_box(&self, rect: Rect) {
    self.boxes.set_content(rect);
  }

  fn set_layout_box(&self, rect: Rect) {
    self.boxes.set_layout(rect);
  }
}

impl HitTestable for RenderableNode {
  fn hit_path(&self) -> Option<Arc<Path>> {
    self.hit.snapshot()
  }

  fn set_hit_area(&self, path: Option<Path>) {
    self.hit.replace(path);
  }
}

//! Hit-test path ownership
//!
//! The path used to answer point-containment queries is decoupled from the
//! path used for painting, so hit geometry can differ from visual geometry
//! (e.g. a stroke widened to a minimum hit width). This module only owns
//! and swaps the path; path construction belongs to the rendering pass.

use parking_lot::RwLock;
use std::sync::Arc;
use tiny_skia::Path;

/// Holder for a node's hit-test path
///
/// Replace-on-write: the rendering pass constructs a path fully off to the
/// side and [`HitArea::replace`] swaps it in under a write lock that covers
/// only the pointer exchange. A concurrent [`HitArea::snapshot`] therefore
/// observes either the fully-old or the fully-new path, never a partially
/// constructed one. `None` means the node is currently not hit-testable.
#[derive(Debug, Default)]
pub struct HitArea {
  path: RwLock<Option<Arc<Path>>>,
}

impl HitArea {
  pub fn new() -> Self {
    Self::default()
  }

  /// Swaps in a new hit-test path, or clears it with `None`
  pub fn replace(&self, path: Option<Path>) {
    // Arc construction happens before the lock is taken.
    let next = path.map(Arc::new);
    *self.path.write() = next;
  }

  /// Clears the path; the node stops being hit-testable
  pub fn clear(&self) {
    *self.path.write() = None;
  }

  /// Returns the current path snapshot
  ///
  /// The returned `Arc` stays valid even if the path is replaced while the
  /// caller is still using it.
  pub fn snapshot(&self) -> Option<Arc<Path>> {
    self.path.read().clone()
  }

  pub fn is_hit_testable(&self) -> bool {
    self.path.read().is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tiny_skia::PathBuilder;

  fn square(origin: f32, side: f32) -> Path {
    let rect = tiny_skia::Rect::from_xywh(origin, origin, side, side).unwrap();
    PathBuilder::from_rect(rect)
  }

  #[test]
  fn test_starts_not_hit_testable() {
    let area = HitArea::new();
    assert!(!area.is_hit_testable());
    assert!(area.snapshot().is_none());
  }

  #[test]
  fn test_replace_and_clear() {
    let area = HitArea::new();
    area.replace(Some(square(0.0, 10.0)));
    assert!(area.is_hit_testable());

    area.clear();
    assert!(!area.is_hit_testable());

    area.replace(Some(square(5.0, 10.0)));
    area.replace(None);
    assert!(area.snapshot().is_none());
  }

  #[test]
  fn test_snapshot_survives_replacement() {
    let area = HitArea::new();
    area.replace(Some(square(0.0, 10.0)));
    let old = area.snapshot().unwrap();

    area.replace(Some(square(100.0, 10.0)));
    // The old snapshot still describes the old geometry.
    assert_eq!(old.bounds().left(), 0.0);
    assert_eq!(area.snapshot().unwrap().bounds().left(), 100.0);
  }
}

//! Paint references and document-registry resolution
//!
//! A node's fill and stroke each hold a [`Paint`]: no paint at all, a
//! solid color, or a reference to a named paint server (gradient or
//! pattern) defined elsewhere in the document. The variant is stored
//! faithfully and replaced wholesale on each attribute-update cycle;
//! resolution against the document's [`PaintRegistry`] is a pure function
//! so this core carries no global state.
//!
//! `Paint::None` and a solid color with zero alpha render identically,
//! but they stay distinct variants: diffing and animation track them
//! separately.

use crate::error::PaintError;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// RGBA color
///
/// R, G, B are 0-255; alpha is 0.0 (transparent) to 1.0 (opaque).
///
/// # Examples
///
/// ```
/// use fastvector::Rgba;
///
/// let red = Rgba::new(255, 0, 0, 1.0);
/// assert!(red.is_opaque());
/// assert_eq!(red.with_alpha(0.5).a, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
  /// Red component (0-255)
  pub r: u8,
  /// Green component (0-255)
  pub g: u8,
  /// Blue component (0-255)
  pub b: u8,
  /// Alpha component (0.0-1.0)
  pub a: f32,
}

impl Rgba {
  /// Fully transparent black
  pub const TRANSPARENT: Self = Self {
    r: 0,
    g: 0,
    b: 0,
    a: 0.0,
  };

  /// Opaque black
  pub const BLACK: Self = Self {
    r: 0,
    g: 0,
    b: 0,
    a: 1.0,
  };

  /// Opaque white
  pub const WHITE: Self = Self {
    r: 255,
    g: 255,
    b: 255,
    a: 1.0,
  };

  /// Creates a color from components
  pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
    Self { r, g, b, a }
  }

  /// Creates an opaque color
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 1.0 }
  }

  /// Returns this color with a different alpha
  pub fn with_alpha(self, alpha: f32) -> Self {
    Self {
      a: alpha.clamp(0.0, 1.0),
      ..self
    }
  }

  /// Returns true if fully transparent
  pub fn is_transparent(self) -> bool {
    self.a <= 0.0
  }

  /// Returns true if fully opaque
  pub fn is_opaque(self) -> bool {
    self.a >= 1.0
  }
}

/// What kind of paint server a registered definition provides
///
/// The definitions themselves (stops, transforms, tiles) live outside this
/// core; the kind is enough for routing and diffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintServerKind {
  LinearGradient,
  RadialGradient,
  Pattern,
}

/// A paint server registered by the document root
#[derive(Debug, Clone, PartialEq)]
pub struct PaintServer {
  /// Identifier the document registered this server under
  pub id: String,
  pub kind: PaintServerKind,
}

impl PaintServer {
  pub fn new(id: impl Into<String>, kind: PaintServerKind) -> Self {
    Self {
      id: id.into(),
      kind,
    }
  }
}

/// The document-wide registry of named paint servers
///
/// Owned by the document root; nodes never hold one, they receive it as an
/// explicit parameter at resolution time.
#[derive(Debug, Default)]
pub struct PaintRegistry {
  servers: FxHashMap<String, Arc<PaintServer>>,
}

impl PaintRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a server under its id, replacing any previous definition
  pub fn register(&mut self, server: PaintServer) {
    self.servers.insert(server.id.clone(), Arc::new(server));
  }

  pub fn lookup(&self, id: &str) -> Option<&Arc<PaintServer>> {
    self.servers.get(id)
  }

  pub fn remove(&mut self, id: &str) -> Option<Arc<PaintServer>> {
    self.servers.remove(id)
  }

  pub fn len(&self) -> usize {
    self.servers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.servers.is_empty()
  }
}

/// A fill or stroke paint as stored on a node
///
/// Set once per attribute-update cycle and replaced wholesale on the next;
/// never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
  /// No paint; renders as fully absent, distinct from a zero-alpha color
  None,
  /// Solid color
  Color(Rgba),
  /// Reference to a named paint server, resolved lazily against the
  /// document registry
  Ref(String),
}

impl Paint {
  /// Creates a reference paint
  pub fn server(id: impl Into<String>) -> Self {
    Self::Ref(id.into())
  }

  pub fn is_none(&self) -> bool {
    matches!(self, Self::None)
  }

  /// Resolves this paint against the document registry
  ///
  /// Pure: the registry is an explicit parameter and the stored variant is
  /// returned unchanged for `None`/`Color`. A dangling reference fails
  /// with [`PaintError::UnresolvedReference`].
  ///
  /// # Examples
  ///
  /// ```
  /// use fastvector::{Paint, PaintRegistry, ResolvedPaint};
  ///
  /// let registry = PaintRegistry::new();
  /// let paint = Paint::server("missing");
  /// assert!(paint.resolve(&registry).is_err());
  /// assert_eq!(paint.resolve_or_none(&registry), ResolvedPaint::None);
  /// ```
  pub fn resolve<'a>(
    &'a self,
    registry: &'a PaintRegistry,
  ) -> Result<ResolvedPaint<'a>, PaintError> {
    match self {
      Self::None => Ok(ResolvedPaint::None),
      Self::Color(color) => Ok(ResolvedPaint::Color(*color)),
      Self::Ref(id) => registry
        .lookup(id)
        .map(|server| ResolvedPaint::Server(server.as_ref()))
        .ok_or_else(|| PaintError::UnresolvedReference { id: id.clone() }),
    }
  }

  /// Resolves this paint, recovering a dangling reference as no paint
  ///
  /// The failure is logged; the render never aborts over one bad
  /// reference.
  pub fn resolve_or_none<'a>(&'a self, registry: &'a PaintRegistry) -> ResolvedPaint<'a> {
    match self.resolve(registry) {
      Ok(resolved) => resolved,
      Err(err) => {
        log::warn!("treating paint as none: {err}");
        ResolvedPaint::None
      }
    }
  }
}

impl Default for Paint {
  fn default() -> Self {
    Self::None
  }
}

/// The outcome of resolving a [`Paint`] against the registry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedPaint<'a> {
  None,
  Color(Rgba),
  Server(&'a PaintServer),
}

impl ResolvedPaint<'_> {
  pub fn is_none(&self) -> bool {
    matches!(self, Self::None)
  }
}

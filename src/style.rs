//! The stroke/fill style block
//!
//! A plain aggregate of the paint and geometry parameters needed to fill
//! or stroke a path. Length-typed fields keep their raw token value and
//! resolve on demand through a bound [`PercentageConverter`]; the only
//! computed behavior on assignment is opacity clamping.

use crate::error::StyleError;
use crate::length::{Length, PercentageConverter};
use crate::paint::{Paint, Rgba};

/// Fill rule for self-intersecting paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
  #[default]
  NonZero,
  EvenOdd,
}

impl FillRule {
  pub fn to_skia(self) -> tiny_skia::FillRule {
    match self {
      Self::NonZero => tiny_skia::FillRule::Winding,
      Self::EvenOdd => tiny_skia::FillRule::EvenOdd,
    }
  }
}

/// Stroke endpoint shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
  #[default]
  Butt,
  Round,
  Square,
}

impl LineCap {
  pub fn to_skia(self) -> tiny_skia::LineCap {
    match self {
      Self::Butt => tiny_skia::LineCap::Butt,
      Self::Round => tiny_skia::LineCap::Round,
      Self::Square => tiny_skia::LineCap::Square,
    }
  }
}

/// Stroke corner shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
  #[default]
  Miter,
  Round,
  Bevel,
}

impl LineJoin {
  pub fn to_skia(self) -> tiny_skia::LineJoin {
    match self {
      Self::Miter => tiny_skia::LineJoin::Miter,
      Self::Round => tiny_skia::LineJoin::Round,
      Self::Bevel => tiny_skia::LineJoin::Bevel,
    }
  }
}

/// The aggregate fill and stroke parameters of a renderable node
///
/// Defaults follow the SVG initial values: opaque black fill, no stroke,
/// 1px stroke width, butt caps, miter joins with limit 4, solid line.
///
/// Fill/stroke opacity and paint alpha are exposed unmodified; effective
/// alpha composes multiplicatively downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
  fill: Paint,
  fill_opacity: f32,
  fill_rule: FillRule,
  stroke: Paint,
  stroke_opacity: f32,
  stroke_width: Length,
  stroke_linecap: LineCap,
  stroke_linejoin: LineJoin,
  stroke_miterlimit: f32,
  stroke_dasharray: Vec<Length>,
  stroke_dashoffset: Length,
}

impl Default for RenderStyle {
  fn default() -> Self {
    Self {
      fill: Paint::Color(Rgba::BLACK),
      fill_opacity: 1.0,
      fill_rule: FillRule::NonZero,
      stroke: Paint::None,
      stroke_opacity: 1.0,
      stroke_width: Length::Px(1.0),
      stroke_linecap: LineCap::Butt,
      stroke_linejoin: LineJoin::Miter,
      stroke_miterlimit: 4.0,
      stroke_dasharray: Vec::new(),
      stroke_dashoffset: Length::ZERO,
    }
  }
}

impl RenderStyle {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn fill(&self) -> &Paint {
    &self.fill
  }

  /// Replaces the fill paint wholesale
  pub fn set_fill(&mut self, fill: Paint) {
    self.fill = fill;
  }

  pub fn fill_opacity(&self) -> f32 {
    self.fill_opacity
  }

  /// Sets the fill opacity, clamping to [0, 1]
  pub fn set_fill_opacity(&mut self, opacity: f32) {
    self.fill_opacity = opacity.clamp(0.0, 1.0);
  }

  pub fn fill_rule(&self) -> FillRule {
    self.fill_rule
  }

  pub fn set_fill_rule(&mut self, rule: FillRule) {
    self.fill_rule = rule;
  }

  pub fn stroke(&self) -> &Paint {
    &self.stroke
  }

  /// Replaces the stroke paint wholesale
  pub fn set_stroke(&mut self, stroke: Paint) {
    self.stroke = stroke;
  }

  pub fn stroke_opacity(&self) -> f32 {
    self.stroke_opacity
  }

  /// Sets the stroke opacity, clamping to [0, 1]
  pub fn set_stroke_opacity(&mut self, opacity: f32) {
    self.stroke_opacity = opacity.clamp(0.0, 1.0);
  }

  /// The raw, pre-resolution stroke width token
  pub fn stroke_width(&self) -> Length {
    self.stroke_width
  }

  pub fn set_stroke_width(&mut self, width: Length) {
    self.stroke_width = width;
  }

  pub fn stroke_linecap(&self) -> LineCap {
    self.stroke_linecap
  }

  pub fn set_stroke_linecap(&mut self, cap: LineCap) {
    self.stroke_linecap = cap;
  }

  pub fn stroke_linejoin(&self) -> LineJoin {
    self.stroke_linejoin
  }

  pub fn set_stroke_linejoin(&mut self, join: LineJoin) {
    self.stroke_linejoin = join;
  }

  pub fn stroke_miterlimit(&self) -> f32 {
    self.stroke_miterlimit
  }

  /// Stores the miter limit as given
  ///
  /// Values below 1 are invalid input but are neither clamped nor
  /// rejected; [`RenderStyle::validate`] reports them and the downstream
  /// renderer decides the fallback.
  pub fn set_stroke_miterlimit(&mut self, limit: f32) {
    self.stroke_miterlimit = limit;
  }

  /// The raw dash array; empty means a solid line
  pub fn stroke_dasharray(&self) -> &[Length] {
    &self.stroke_dasharray
  }

  pub fn set_stroke_dasharray(&mut self, dasharray: Vec<Length>) {
    self.stroke_dasharray = dasharray;
  }

  pub fn stroke_dashoffset(&self) -> Length {
    self.stroke_dashoffset
  }

  pub fn set_stroke_dashoffset(&mut self, offset: Length) {
    self.stroke_dashoffset = offset;
  }

  /// Reports invalid stored values without changing them
  pub fn validate(&self) -> Result<(), StyleError> {
    if self.stroke_miterlimit < 1.0 {
      return Err(StyleError::InvalidMiterLimit {
        value: self.stroke_miterlimit,
      });
    }
    Ok(())
  }

  /// Resolves the dash array and offset for stroking
  ///
  /// Returns `None` for a solid line: an empty dash array, or one whose
  /// entries all resolve to zero. Odd-length arrays are repeated doubled
  /// per the SVG dash rule. Negative resolved entries clamp to zero.
  /// Percentage entries resolve against the converter's reference, which
  /// for dashes is the normalized diagonal.
  pub fn dash_pattern(&self, conv: &PercentageConverter) -> Option<(Vec<f32>, f32)> {
    if self.stroke_dasharray.is_empty() {
      return None;
    }

    let mut resolved: Vec<f32> = self
      .stroke_dasharray
      .iter()
      .map(|length| conv.convert_length(*length).max(0.0))
      .collect();

    if resolved.iter().all(|value| *value == 0.0) {
      return None;
    }
    if resolved.len() % 2 == 1 {
      let doubled = resolved.clone();
      resolved.extend(doubled);
    }

    Some((resolved, conv.convert_length(self.stroke_dashoffset)))
  }

  /// Builds the rasterizer-facing stroke parameters
  ///
  /// Stroke width and dash values resolve against the converter (bound to
  /// the normalized diagonal by the node). The miter limit is passed
  /// through as stored.
  pub fn to_stroke(&self, conv: &PercentageConverter) -> tiny_skia::Stroke {
    let dash = self
      .dash_pattern(conv)
      .and_then(|(array, offset)| tiny_skia::StrokeDash::new(array, offset));

    tiny_skia::Stroke {
      width: conv.convert_length(self.stroke_width),
      miter_limit: self.stroke_miterlimit,
      line_cap: self.stroke_linecap.to_skia(),
      line_join: self.stroke_linejoin.to_skia(),
      dash,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_are_svg_initial_values() {
    let style = RenderStyle::default();
    assert_eq!(style.fill(), &Paint::Color(Rgba::BLACK));
    assert_eq!(style.fill_opacity(), 1.0);
    assert_eq!(style.fill_rule(), FillRule::NonZero);
    assert!(style.stroke().is_none());
    assert_eq!(style.stroke_width(), Length::Px(1.0));
    assert_eq!(style.stroke_miterlimit(), 4.0);
    assert!(style.stroke_dasharray().is_empty());
  }

  #[test]
  fn test_opacity_clamping_law() {
    let mut style = RenderStyle::new();

    style.set_fill_opacity(1.5);
    assert_eq!(style.fill_opacity(), 1.0);
    style.set_fill_opacity(-0.2);
    assert_eq!(style.fill_opacity(), 0.0);

    // Stroke opacity clamps independently.
    style.set_stroke_opacity(1.5);
    assert_eq!(style.stroke_opacity(), 1.0);
    style.set_stroke_opacity(-0.2);
    assert_eq!(style.stroke_opacity(), 0.0);
    assert_eq!(style.fill_opacity(), 0.0);

    style.set_fill_opacity(0.5);
    assert_eq!(style.fill_opacity(), 0.5);
  }

  #[test]
  fn test_miter_limit_stored_as_given() {
    let mut style = RenderStyle::new();
    style.set_stroke_miterlimit(0.25);
    assert_eq!(style.stroke_miterlimit(), 0.25);
    assert_eq!(
      style.validate(),
      Err(StyleError::InvalidMiterLimit { value: 0.25 })
    );

    style.set_stroke_miterlimit(1.0);
    assert_eq!(style.validate(), Ok(()));
  }

  #[test]
  fn test_empty_and_all_zero_dash_are_solid() {
    let conv = PercentageConverter::new(100.0);
    let mut style = RenderStyle::new();
    assert_eq!(style.dash_pattern(&conv), None);

    style.set_stroke_dasharray(vec![Length::ZERO, Length::ZERO]);
    assert_eq!(style.dash_pattern(&conv), None);

    // Both stroke identically: to_stroke carries no dash either way.
    assert!(style.to_stroke(&conv).dash.is_none());
    style.set_stroke_dasharray(Vec::new());
    assert!(style.to_stroke(&conv).dash.is_none());
  }

  #[test]
  fn test_odd_dash_array_doubles() {
    let conv = PercentageConverter::new(100.0);
    let mut style = RenderStyle::new();
    style.set_stroke_dasharray(vec![Length::Px(5.0), Length::Px(3.0), Length::Px(1.0)]);
    let (array, offset) = style.dash_pattern(&conv).unwrap();
    assert_eq!(array, vec![5.0, 3.0, 1.0, 5.0, 3.0, 1.0]);
    assert_eq!(offset, 0.0);
  }

  #[test]
  fn test_dash_percentages_resolve_against_reference() {
    let conv = PercentageConverter::new(80.0);
    let mut style = RenderStyle::new();
    style.set_stroke_dasharray(vec![Length::Percent(10.0), Length::Px(2.0)]);
    style.set_stroke_dashoffset(Length::Percent(5.0));
    let (array, offset) = style.dash_pattern(&conv).unwrap();
    assert_eq!(array, vec![8.0, 2.0]);
    assert_eq!(offset, 4.0);
  }

  #[test]
  fn test_negative_dash_entries_clamp_to_zero() {
    let conv = PercentageConverter::new(100.0);
    let mut style = RenderStyle::new();
    style.set_stroke_dasharray(vec![Length::Px(-4.0), Length::Px(6.0)]);
    let (array, _) = style.dash_pattern(&conv).unwrap();
    assert_eq!(array, vec![0.0, 6.0]);
  }

  #[test]
  fn test_to_stroke_resolves_percentage_width() {
    let conv = PercentageConverter::new(79.0569);
    let mut style = RenderStyle::new();
    style.set_stroke_width(Length::Percent(10.0));
    style.set_stroke_linecap(LineCap::Round);
    style.set_stroke_linejoin(LineJoin::Bevel);

    let stroke = style.to_stroke(&conv);
    assert!((stroke.width - 7.90569).abs() < 1e-4);
    assert_eq!(stroke.line_cap, tiny_skia::LineCap::Round);
    assert_eq!(stroke.line_join, tiny_skia::LineJoin::Bevel);
    assert_eq!(stroke.miter_limit, 4.0);
  }

  #[test]
  fn test_to_stroke_carries_dash() {
    let conv = PercentageConverter::new(100.0);
    let mut style = RenderStyle::new();
    style.set_stroke_dasharray(vec![Length::Px(4.0), Length::Px(2.0)]);
    assert!(style.to_stroke(&conv).dash.is_some());
  }

  #[test]
  fn test_fill_rule_to_skia() {
    assert_eq!(FillRule::NonZero.to_skia(), tiny_skia::FillRule::Winding);
    assert_eq!(FillRule::EvenOdd.to_skia(), tiny_skia::FillRule::EvenOdd);
  }

  #[test]
  fn test_opacity_and_paint_alpha_exposed_unmodified() {
    let mut style = RenderStyle::new();
    style.set_fill(Paint::Color(Rgba::new(255, 0, 0, 1.0)));
    style.set_fill_opacity(0.5);

    // Both values surface unchanged; downstream composes them.
    let Paint::Color(color) = style.fill() else {
      panic!("expected solid fill");
    };
    assert_eq!(color.a, 1.0);
    assert_eq!(style.fill_opacity(), 0.5);
    assert_eq!(color.a * style.fill_opacity(), 0.5);
  }
}

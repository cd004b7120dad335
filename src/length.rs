//! Length tokens and percentage resolution
//!
//! Declarative attributes arrive as unit-ambiguous tokens: a bare number,
//! a percentage, or the keyword `auto`. [`Length`] stores the raw,
//! pre-resolution value; resolution against a reference dimension happens
//! on demand and never mutates the stored token, so resolving twice gives
//! the same answer.
//!
//! [`PercentageConverter`] binds a resolver to one reference dimension
//! (a box width, a box height, or the normalized diagonal) so callers can
//! resolve repeatedly without re-binding.
//!
//! # Examples
//!
//! ```
//! use fastvector::{Length, PercentageConverter};
//!
//! let width = Length::parse("50%").unwrap();
//! assert_eq!(width.resolve(200.0), 100.0);
//!
//! let conv = PercentageConverter::new(200.0);
//! assert_eq!(conv.convert("50%").unwrap(), 100.0);
//! assert_eq!(conv.convert_or_default("oops"), 0.0);
//! ```

use crate::error::LengthError;

/// A raw, pre-resolution length value
///
/// Absolute values pass through resolution unchanged regardless of the
/// reference dimension; no unit conversion happens at this layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
  /// Absolute value in pixels
  Px(f32),
  /// Percentage of a reference dimension
  Percent(f32),
  /// The `auto` keyword; resolves to the property's documented default
  Auto,
}

impl Length {
  /// A zero-pixel length
  pub const ZERO: Self = Self::Px(0.0);

  /// Parses a length token
  ///
  /// Accepted forms: a finite number (`12`, `-3.5`, `1e2`, `+7`), a
  /// percentage (`45%`), or the keyword `auto` (case-insensitive).
  /// Anything else, including unit suffixes, fails with
  /// [`LengthError::MalformedLength`]; callers substitute 0 and keep
  /// rendering.
  pub fn parse(token: &str) -> Result<Self, LengthError> {
    let trimmed = token.trim();
    if trimmed.eq_ignore_ascii_case("auto") {
      return Ok(Self::Auto);
    }

    let malformed = || LengthError::MalformedLength {
      token: token.to_string(),
    };

    let (number_part, is_percent) = match trimmed.strip_suffix('%') {
      Some(rest) => (rest.trim_end(), true),
      None => (trimmed, false),
    };

    if number_part.is_empty() {
      return Err(malformed());
    }
    // Same character set the SVG length scanner accepts; parse::<f32> does
    // the structural validation.
    if !number_part
      .chars()
      .all(|ch| matches!(ch, '0'..='9' | '+' | '-' | '.' | 'e' | 'E'))
    {
      return Err(malformed());
    }

    let value = number_part.parse::<f32>().map_err(|_| malformed())?;
    if !value.is_finite() {
      return Err(malformed());
    }

    if is_percent {
      Ok(Self::Percent(value))
    } else {
      Ok(Self::Px(value))
    }
  }

  /// Resolves this length against a reference dimension
  ///
  /// `Px` passes through unchanged, `Percent(p)` yields `p / 100 *
  /// reference`, and `Auto` resolves to 0 (use a [`PercentageConverter`]
  /// with a bound default when a property documents a different one).
  /// Idempotent: the stored value is never mutated.
  pub fn resolve(self, reference: f32) -> f32 {
    match self {
      Self::Px(value) => value,
      Self::Percent(percent) => percent / 100.0 * reference,
      Self::Auto => 0.0,
    }
  }

  /// Returns true for the `Percent` variant
  pub fn is_percentage(self) -> bool {
    matches!(self, Self::Percent(_))
  }
}

impl Default for Length {
  fn default() -> Self {
    Self::ZERO
  }
}

/// A percentage resolver bound to one reference dimension
///
/// The node exposes three of these: width-bound, height-bound, and
/// diagonal-bound (the SVG "other"-axis reference used for stroke width
/// and dash values). `default` is the documented default length for the
/// property being resolved, substituted for `auto`; it starts at 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageConverter {
  reference: f32,
  default: f32,
}

impl PercentageConverter {
  /// Creates a converter bound to the given reference dimension
  pub const fn new(reference: f32) -> Self {
    Self {
      reference,
      default: 0.0,
    }
  }

  /// Rebinds the default substituted for the `auto` keyword
  pub const fn with_default(self, default: f32) -> Self {
    Self {
      reference: self.reference,
      default,
    }
  }

  /// The reference dimension this converter resolves percentages against
  pub fn reference(&self) -> f32 {
    self.reference
  }

  /// Parses and resolves a token in one step
  pub fn convert(&self, token: &str) -> Result<f32, LengthError> {
    Ok(self.convert_length(Length::parse(token)?))
  }

  /// Resolves an already-parsed length
  pub fn convert_length(&self, length: Length) -> f32 {
    match length {
      Length::Auto => self.default,
      other => other.resolve(self.reference),
    }
  }

  /// Parses and resolves a token, recovering from malformed input
  ///
  /// The recovery value is 0; the failure is logged so a caller can
  /// observe it without the render aborting.
  pub fn convert_or_default(&self, token: &str) -> f32 {
    match self.convert(token) {
      Ok(value) => value,
      Err(err) => {
        log::warn!("substituting 0 for unresolvable length: {err}");
        0.0
      }
    }
  }
}

//! Error types for the renderable node core
//!
//! No error here is fatal: every failure has a documented recovery value
//! (0 for malformed lengths, transparent "none" for dangling paint
//! references, store-as-given for out-of-range miter limits) so that one
//! bad attribute never prevents the rest of the graphics tree from
//! rendering. Errors exist to be observed and logged by callers, not to
//! abort.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and proper
//! error trait implementations.

use thiserror::Error;

/// Result type alias for fastvector operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
///
/// Each variant wraps the error enum of one subsystem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  /// Length token parsing or resolution error
  #[error("Length error: {0}")]
  Length(#[from] LengthError),

  /// Paint reference resolution error
  #[error("Paint error: {0}")]
  Paint(#[from] PaintError),

  /// Style block validation error
  #[error("Style error: {0}")]
  Style(#[from] StyleError),
}

/// Errors from parsing or resolving length tokens
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LengthError {
  /// The token is not a number, a percentage, or a recognized keyword
  ///
  /// Recovery: substitute 0 and continue rendering.
  #[error("malformed length token '{token}'")]
  MalformedLength { token: String },
}

/// Errors from resolving paint references against the document registry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaintError {
  /// A named paint server is not present in the registry
  ///
  /// Recovery: treat the paint as "none" (fully transparent).
  #[error("paint server '{id}' not found in document registry")]
  UnresolvedReference { id: String },
}

/// Errors from validating style block values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
  /// Miter limit below the SVG minimum of 1
  ///
  /// The value is stored as given; the downstream renderer decides the
  /// fallback (treat as 1, or as a miter-to-bevel threshold).
  #[error("miter limit {value} is below the minimum of 1")]
  InvalidMiterLimit { value: f32 },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_malformed_length_display() {
    let error = LengthError::MalformedLength {
      token: "10banana".to_string(),
    };
    assert!(format!("{}", error).contains("10banana"));
  }

  #[test]
  fn test_unresolved_reference_display() {
    let error = PaintError::UnresolvedReference {
      id: "grad-1".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("grad-1"));
    assert!(display.contains("not found"));
  }

  #[test]
  fn test_invalid_miter_limit_display() {
    let error = StyleError::InvalidMiterLimit { value: 0.5 };
    assert!(format!("{}", error).contains("0.5"));
  }

  #[test]
  fn test_error_from_length_error() {
    let error: Error = LengthError::MalformedLength {
      token: "x".to_string(),
    }
    .into();
    assert!(matches!(error, Error::Length(_)));
    assert!(format!("{}", error).contains("Length error"));
  }

  #[test]
  fn test_error_from_paint_error() {
    let error: Error = PaintError::UnresolvedReference {
      id: "p".to_string(),
    }
    .into();
    assert!(matches!(error, Error::Paint(_)));
  }

  #[test]
  fn test_error_from_style_error() {
    let error: Error = StyleError::InvalidMiterLimit { value: -2.0 }.into();
    assert!(matches!(error, Error::Style(_)));
  }

  #[test]
  fn test_error_trait_implemented() {
    let error = Error::Length(LengthError::MalformedLength {
      token: "t".to_string(),
    });
    let _: &dyn std::error::Error = &error;
  }
}

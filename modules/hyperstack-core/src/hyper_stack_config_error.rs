
use core::fmt;

/// Errors reported while validating a [`HyperStackConfig`](crate::HyperStackConfig).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HyperStackConfigError {
  /// The half-width `d` must be at least one.
  ZeroHalfWidth,
}

impl fmt::Display for HyperStackConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | HyperStackConfigError::ZeroHalfWidth => write!(f, "half width must be at least 1"),
    }
  }
}

impl core::error::Error for HyperStackConfigError {}

//! `(layer, slice)` address of a stack position.


use core::fmt;

/// Position of an element expressed as the layer it was pushed in and the slice it occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
  layer: usize,
  slice: usize,
}

impl Coordinate {
  /// Creates a coordinate from its raw components.
  #[must_use]
  pub const fn new(layer: usize, slice: usize) -> Self {
    Self { layer, slice }
  }

  /// Returns the layer component.
  #[must_use]
  pub const fn layer(&self) -> usize {
    self.layer
  }

  /// Returns the slice component.
  #[must_use]
  pub const fn slice(&self) -> usize {
    self.slice
  }
}

impl fmt::Display for Coordinate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.layer, self.slice)
  }
}

//! Construction parameters for [`HyperStack`](crate::HyperStack).


use core::num::NonZeroU16;

use crate::HyperStackConfigError;

/// Configuration fixed at stack creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HyperStackConfig {
  half_width:       NonZeroU16,
  initial_capacity: usize,
}

impl HyperStackConfig {
  /// Creates a configuration whose layers hold `2 * half_width` slices.
  ///
  /// # Errors
  ///
  /// Returns [`HyperStackConfigError::ZeroHalfWidth`] when `half_width` is zero.
  pub const fn new(half_width: u16) -> Result<Self, HyperStackConfigError> {
    match NonZeroU16::new(half_width) {
      | Some(half_width) => Ok(Self { half_width, initial_capacity: 0 }),
      | None => Err(HyperStackConfigError::ZeroHalfWidth),
    }
  }

  /// Reserves room for `capacity` nodes when the stack is built.
  #[must_use]
  pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
    self.initial_capacity = capacity;
    self
  }

  /// Returns the half-width `d`.
  #[must_use]
  pub const fn half_width(&self) -> NonZeroU16 {
    self.half_width
  }

  /// Returns the number of slices per layer (`2d`).
  #[must_use]
  pub const fn layer_width(&self) -> usize {
    2 * self.half_width.get() as usize
  }

  /// Returns the number of node records reserved up front.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }
}

//! Coordinate arithmetic over insertion positions.

#[cfg(test)]
mod tests;

use core::num::NonZeroU16;

use crate::Coordinate;

/// Maps stack positions to `(layer, slice)` coordinates for a fixed half-width `d`.
///
/// A layer holds `2d` slices. Position `p` lives in layer `p / 2d` and slice `p % 2d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerGeometry {
  width: usize,
}

impl LayerGeometry {
  /// Creates the geometry for layers of `2 * half_width` slices.
  #[must_use]
  pub const fn new(half_width: NonZeroU16) -> Self {
    Self { width: 2 * half_width.get() as usize }
  }

  /// Returns the number of slices per layer.
  #[must_use]
  pub const fn layer_width(&self) -> usize {
    self.width
  }

  /// Returns the layer of `position`.
  #[must_use]
  pub const fn layer(&self, position: usize) -> usize {
    position / self.width
  }

  /// Returns the slice of `position`.
  #[must_use]
  pub const fn slice(&self, position: usize) -> usize {
    position % self.width
  }

  /// Returns both components of `position`.
  #[must_use]
  pub const fn coordinate(&self, position: usize) -> Coordinate {
    Coordinate::new(self.layer(position), self.slice(position))
  }

  /// Returns the position addressed by `coordinate`, or `None` if the slice is outside the layer
  /// or the position does not fit in `usize`.
  #[must_use]
  pub const fn position(&self, coordinate: Coordinate) -> Option<usize> {
    if coordinate.slice() >= self.width {
      return None;
    }
    match coordinate.layer().checked_mul(self.width) {
      | Some(base) => base.checked_add(coordinate.slice()),
      | None => None,
    }
  }

  /// Returns the slice diagonally linked to `slice` when pushing into `layer`.
  ///
  /// The partner flips bit `layer % 2d` of the slice number. When that bit lies outside the
  /// layer the partner does not exist and `None` is returned.
  #[must_use]
  pub fn diagonal_slice(&self, layer: usize, slice: usize) -> Option<usize> {
    let shift = u32::try_from(layer % self.width).ok()?;
    let partner = slice ^ 1_usize.checked_shl(shift)?;
    (partner < self.width).then_some(partner)
  }
}

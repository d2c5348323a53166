use core::num::NonZeroU16;

use super::LayerGeometry;
use crate::Coordinate;

fn geometry(half_width: u16) -> LayerGeometry {
  LayerGeometry::new(NonZeroU16::new(half_width).unwrap())
}

#[test]
fn first_layer_absorbs_first_width_positions() {
  let geometry = geometry(4);

  for position in 0..8 {
    assert_eq!(geometry.layer(position), 0);
    assert_eq!(geometry.slice(position), position);
  }
  assert_eq!(geometry.layer(8), 1);
  assert_eq!(geometry.slice(8), 0);
}

#[test]
fn coordinate_of_ninety_nine_with_half_width_four() {
  let geometry = geometry(4);

  assert_eq!(geometry.coordinate(99), Coordinate::new(12, 3));
}

#[test]
fn position_inverts_coordinate() {
  let geometry = geometry(3);

  for position in 0..100 {
    assert_eq!(geometry.position(geometry.coordinate(position)), Some(position));
  }
}

#[test]
fn position_rejects_slice_outside_layer() {
  let geometry = geometry(2);

  assert_eq!(geometry.position(Coordinate::new(0, 4)), None);
  assert_eq!(geometry.position(Coordinate::new(usize::MAX, 1)), None);
}

#[test]
fn diagonal_slice_flips_bit_chosen_by_layer() {
  let geometry = geometry(4);

  assert_eq!(geometry.diagonal_slice(0, 0), Some(1));
  assert_eq!(geometry.diagonal_slice(1, 0), Some(2));
  assert_eq!(geometry.diagonal_slice(1, 2), Some(0));
  assert_eq!(geometry.diagonal_slice(2, 5), Some(1));
  assert_eq!(geometry.diagonal_slice(8, 6), Some(7));
}

#[test]
fn diagonal_slice_outside_layer_is_absent() {
  let geometry = geometry(4);

  assert_eq!(geometry.diagonal_slice(3, 0), None);
  assert_eq!(geometry.diagonal_slice(7, 7), None);
}

#[test]
fn diagonal_slice_handles_shift_wider_than_usize() {
  let geometry = geometry(u16::MAX);

  assert_eq!(geometry.diagonal_slice(200, 3), None);
  assert_eq!(geometry.diagonal_slice(2, 3), Some(7));
}

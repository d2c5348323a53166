//! Per-slice entry points into the node graph.


use alloc::vec::Vec;

use crate::{NodeId, StackError};

/// Tracks, for each slice, the most recently pushed node still live in that slice.
#[derive(Debug)]
pub(crate) struct HandleTable {
  slots: Vec<Option<NodeId>>,
}

impl HandleTable {
  /// Creates a table of `width` empty slots.
  pub(crate) fn try_new(width: usize) -> Result<Self, StackError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(width).map_err(|_| StackError::AllocError)?;
    slots.resize(width, None);
    Ok(Self { slots })
  }

  pub(crate) fn get(&self, slice: usize) -> Option<NodeId> {
    self.slots.get(slice).copied().flatten()
  }

  /// Overwrites the handle of `slice`; slices outside the table are ignored.
  pub(crate) fn set(&mut self, slice: usize, handle: Option<NodeId>) {
    if let Some(slot) = self.slots.get_mut(slice) {
      *slot = handle;
    }
  }

  pub(crate) fn iter(&self) -> impl Iterator<Item = Option<NodeId>> + '_ {
    self.slots.iter().copied()
  }

  pub(crate) fn clear(&mut self) {
    self.slots.fill(None);
  }
}

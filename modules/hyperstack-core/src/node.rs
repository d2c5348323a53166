//! Node record stored in the stack arena.


use core::fmt;

use crate::NodeId;

/// One stored element together with its two backward links.
///
/// Links are fixed at construction and never rewritten, so the node graph is a write-once DAG.
pub struct Node<'a, T> {
  data:     &'a T,
  straight: Option<NodeId>,
  diagonal: Option<NodeId>,
}

impl<'a, T> Node<'a, T> {
  /// Creates a node borrowing `data` and pointing at its predecessors one layer below.
  #[must_use]
  pub const fn new(data: &'a T, straight: Option<NodeId>, diagonal: Option<NodeId>) -> Self {
    Self { data, straight, diagonal }
  }

  /// Returns the borrowed payload.
  #[must_use]
  pub const fn data(&self) -> &'a T {
    self.data
  }

  /// Returns the previous occupant of the same slice, one layer below.
  #[must_use]
  pub const fn straight(&self) -> Option<NodeId> {
    self.straight
  }

  /// Returns the occupant of the bit-flipped slice, one layer below.
  #[must_use]
  pub const fn diagonal(&self) -> Option<NodeId> {
    self.diagonal
  }
}

impl<T> Clone for Node<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for Node<'_, T> {}

impl<T> fmt::Debug for Node<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Node")
      .field("data", &core::ptr::from_ref(self.data))
      .field("straight", &self.straight)
      .field("diagonal", &self.diagonal)
      .finish()
  }
}

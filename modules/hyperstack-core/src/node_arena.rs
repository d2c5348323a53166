//! Index-addressed storage for node records.


use alloc::vec::Vec;

use crate::{Node, NodeId, StackError};

/// Growable table of nodes; links between nodes are arena indices.
///
/// Records are appended on push and only the newest record can be released, which keeps the
/// arena index of every live node equal to its stack position.
pub(crate) struct NodeArena<'a, T> {
  nodes: Vec<Node<'a, T>>,
}

impl<'a, T> NodeArena<'a, T> {
  /// Creates an arena with room for `capacity` nodes.
  pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, StackError> {
    let mut nodes = Vec::new();
    nodes.try_reserve_exact(capacity).map_err(|_| StackError::AllocError)?;
    Ok(Self { nodes })
  }

  pub(crate) fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Appends `node`, leaving the arena untouched when memory cannot be obtained.
  pub(crate) fn try_push(&mut self, node: Node<'a, T>) -> Result<NodeId, StackError> {
    self.nodes.try_reserve(1).map_err(|_| StackError::AllocError)?;
    let id = NodeId::new(self.nodes.len());
    self.nodes.push(node);
    Ok(id)
  }

  pub(crate) fn get(&self, id: NodeId) -> Option<&Node<'a, T>> {
    self.nodes.get(id.index())
  }

  /// Removes and returns the newest record, or `None` when the arena is empty.
  pub(crate) fn release_newest(&mut self) -> Option<Node<'a, T>> {
    self.nodes.pop()
  }

  pub(crate) fn clear(&mut self) {
    self.nodes.clear();
  }
}

//! Hypercube-indexed stack.


use core::{fmt, num::NonZeroU16};

use tracing::{debug, trace};

use crate::{
  Coordinate, HyperStackConfig, LayerGeometry, Node, NodeId, StackError, handle_table::HandleTable,
  node_arena::NodeArena,
};

/// Append/remove-only stack whose elements are also addressable by `(layer, slice)`.
///
/// Payloads are borrowed for `'a`; the stack never owns or drops them. Each push links the new
/// node to the previous occupant of its slice (`straight`) and to the occupant of the
/// bit-flipped slice (`diagonal`) one layer below. Elements below the top are reached through
/// [`HyperStack::lookup`], which walks `straight` links from the per-slice handle table.
///
/// The stack is not synchronised; callers sharing it across threads must guard push, pop and
/// lookup with a single lock.
pub struct HyperStack<'a, T> {
  config:   HyperStackConfig,
  geometry: LayerGeometry,
  size:     usize,
  head:     Option<NodeId>,
  handles:  HandleTable,
  arena:    NodeArena<'a, T>,
}

impl<'a, T> HyperStack<'a, T> {
  /// Creates an empty stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] if the handle table or the initial node reservation
  /// cannot be allocated.
  pub fn new(config: HyperStackConfig) -> Result<Self, StackError> {
    let geometry = LayerGeometry::new(config.half_width());
    let handles = HandleTable::try_new(geometry.layer_width())?;
    let arena = NodeArena::try_with_capacity(config.initial_capacity())?;
    debug!(
      half_width = config.half_width().get(),
      layer_width = geometry.layer_width(),
      initial_capacity = config.initial_capacity(),
      "hyperstack created"
    );
    Ok(Self { config, geometry, size: 0, head: None, handles, arena })
  }

  /// Returns the configuration the stack was built with.
  #[must_use]
  pub const fn config(&self) -> &HyperStackConfig {
    &self.config
  }

  /// Returns the coordinate arithmetic used by this stack.
  #[must_use]
  pub const fn geometry(&self) -> LayerGeometry {
    self.geometry
  }

  /// Returns the half-width `d`.
  #[must_use]
  pub const fn half_width(&self) -> NonZeroU16 {
    self.config.half_width()
  }

  /// Returns the number of slices per layer (`2d`).
  #[must_use]
  pub const fn layer_width(&self) -> usize {
    self.geometry.layer_width()
  }

  /// Returns the number of elements currently stored.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.size
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.size == 0
  }

  /// Returns the node created by the most recent push that has not been popped.
  #[must_use]
  pub const fn head(&self) -> Option<NodeId> {
    self.head
  }

  /// Returns the payload at the top of the stack without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&'a T> {
    self.head.and_then(|id| self.arena.get(id)).map(Node::data)
  }

  /// Returns the live node `id`, if any.
  #[must_use]
  pub fn node(&self, id: NodeId) -> Option<&Node<'a, T>> {
    self.arena.get(id)
  }

  /// Returns the newest live node of `slice`.
  #[must_use]
  pub fn handle(&self, slice: usize) -> Option<NodeId> {
    self.handles.get(slice)
  }

  /// Iterates over the handle table in slice order.
  pub fn handles(&self) -> impl Iterator<Item = Option<NodeId>> + '_ {
    self.handles.iter()
  }

  /// Returns the coordinate of stack position `position`.
  #[must_use]
  pub const fn coordinate(&self, position: usize) -> Coordinate {
    self.geometry.coordinate(position)
  }

  /// Pushes `data` onto the stack and returns the id of the new node.
  ///
  /// The push is all-or-nothing: on failure the stack is left exactly as it was.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] if the node record cannot be allocated.
  pub fn push(&mut self, data: &'a T) -> Result<NodeId, StackError> {
    let target = self.geometry.coordinate(self.size);
    let diagonal_slice = self.geometry.diagonal_slice(target.layer(), target.slice());

    let (straight, diagonal) = match target.layer().checked_sub(1) {
      | Some(below) => {
        let straight = self.lookup(below, target.slice());
        let diagonal = diagonal_slice.and_then(|slice| self.lookup(below, slice));
        (straight, diagonal)
      },
      | None => (None, None),
    };

    let id = self.arena.try_push(Node::new(data, straight, diagonal)).inspect_err(|error| {
      debug!(size = self.size, layer = target.layer(), slice = target.slice(), %error, "push aborted");
    })?;

    self.head = Some(id);
    self.handles.set(target.slice(), Some(id));
    self.size += 1;
    debug_assert_eq!(self.arena.len(), self.size);

    trace!(
      size = self.size,
      layer = target.layer(),
      slice = target.slice(),
      diagonal_slice = ?diagonal_slice,
      "push"
    );
    Ok(id)
  }

  /// Pops the top element and returns its payload.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] if the stack holds no elements.
  pub fn pop(&mut self) -> Result<&'a T, StackError> {
    let Some(node) = self.arena.release_newest() else {
      return Err(StackError::Empty);
    };
    // the released record sits at the old top position
    let top = self.arena.len();
    debug_assert_eq!(self.size, top + 1);
    debug_assert_eq!(self.head, Some(NodeId::new(top)));

    let old = self.geometry.coordinate(top);
    let new = top.checked_sub(1).map(|position| self.geometry.coordinate(position));
    let new_head = new.and_then(|coordinate| self.lookup(coordinate.layer(), coordinate.slice()));

    let restored = if old.layer() == 0 { None } else { node.straight() };
    self.handles.set(old.slice(), restored);
    self.head = new_head;
    self.size = top;

    trace!(size = self.size, old = %old, new = ?new, "pop");
    Ok(node.data())
  }

  /// Locates the live node at `(layer, slice)`.
  ///
  /// Starts from the handle of `slice` and follows `straight` links down to `layer`. Returns
  /// `None` when the slice is outside the layer width or no live node occupies the coordinate.
  #[must_use]
  pub fn lookup(&self, layer: usize, slice: usize) -> Option<NodeId> {
    let live = self.geometry.position(Coordinate::new(layer, slice)).is_some_and(|position| position < self.size);
    if !live {
      trace!(layer, slice, size = self.size, "lookup outside live positions");
      return None;
    }
    let top = self.geometry.coordinate(self.size.checked_sub(1)?);

    // layer of the node currently held by the slice handle
    let mut depth = if top.layer() == 0 {
      0
    } else if slice <= top.slice() {
      top.layer()
    } else {
      top.layer() - 1
    };

    let mut current = self.handles.get(slice);
    while depth > layer {
      let Some(id) = current else {
        break;
      };
      current = self.arena.get(id).and_then(Node::straight);
      depth -= 1;
    }

    if current.is_none() {
      trace!(layer, slice, size = self.size, "lookup resolved absent");
    }
    current
  }

  /// Returns the payload at stack position `position`, counting from the bottom.
  #[must_use]
  pub fn get(&self, position: usize) -> Option<&'a T> {
    if position >= self.size {
      return None;
    }
    let coordinate = self.geometry.coordinate(position);
    self.lookup(coordinate.layer(), coordinate.slice()).and_then(|id| self.arena.get(id)).map(Node::data)
  }

  /// Removes every element, leaving an empty stack with the same configuration.
  pub fn clear(&mut self) {
    self.arena.clear();
    self.handles.clear();
    self.head = None;
    let dropped = core::mem::take(&mut self.size);
    debug!(dropped, "hyperstack cleared");
  }
}

impl<T> fmt::Debug for HyperStack<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("HyperStack")
      .field("half_width", &self.config.half_width())
      .field("size", &self.size)
      .field("head", &self.head)
      .field("handles", &self.handles)
      .finish()
  }
}

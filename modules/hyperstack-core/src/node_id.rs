/// Index of a node record inside the stack's arena.
///
/// Live nodes are stored in push order, so the index of a live node equals its stack position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
  /// Wraps a raw arena index.
  #[must_use]
  pub const fn new(index: usize) -> Self {
    Self(index)
  }

  /// Returns the raw arena index.
  #[must_use]
  pub const fn index(self) -> usize {
    self.0
  }
}

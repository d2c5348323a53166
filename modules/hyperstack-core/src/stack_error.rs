
use core::fmt;

/// Errors that may arise while operating on a [`HyperStack`](crate::HyperStack).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
  /// The stack contains no elements.
  Empty,
  /// Allocator-related failure occurred while growing the node arena or handle table.
  AllocError,
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackError::Empty => write!(f, "stack is empty"),
      | StackError::AllocError => write!(f, "out of memory"),
    }
  }
}

impl core::error::Error for StackError {}

#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unnecessary_wraps)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![cfg_attr(not(test), no_std)]

//! Hypercube-indexed stack.
//!
//! An append/remove-only sequence whose elements are reachable both through the usual LIFO
//! discipline and through a `(layer, slice)` coordinate derived from their insertion position.
//! Every pushed node records two backward links, one to the previous occupant of its own slice
//! and one to the occupant of a bit-flipped slice, so any live element can be located by walking
//! at most one link per layer from the per-slice handle table.
//!
//! The stack borrows its payloads; it never takes ownership of them.

extern crate alloc;

mod coordinate;
mod handle_table;
mod hyper_stack;
mod hyper_stack_config;
mod hyper_stack_config_error;
mod layer_geometry;
mod node;
mod node_arena;
mod node_id;
mod stack_error;

pub use coordinate::Coordinate;
pub use hyper_stack::HyperStack;
pub use hyper_stack_config::HyperStackConfig;
pub use hyper_stack_config_error::HyperStackConfigError;
pub use layer_geometry::LayerGeometry;
pub use node::Node;
pub use node_id::NodeId;
pub use stack_error::StackError;

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod node_arena;
pub mod rb_tree;
pub mod shared;

pub use node_arena::ArenaList;
pub use rb_tree::{Color, InvariantViolation, RBIndex};
pub use shared::SharedIndex;

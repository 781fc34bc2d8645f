//! This module has things for reading the field,
//! which really means retrieving values based on cell coordinates,
//! and deciding what a stencil sees when a neighbor falls off the grid.
//! Views wrap the caller's flat buffers, they never own storage.

mod bc;
mod gather_args;
mod view;

pub use bc::*;
pub use gather_args::*;
pub use view::*;

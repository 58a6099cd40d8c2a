//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod hedge;
pub mod paths;
pub mod price;
pub mod validate;

//! Command-line interface module.

mod args;
pub mod common;
pub mod decorate;
pub mod inspect;

pub use args::{Cli, Commands, DecorateArgs, InspectArgs};

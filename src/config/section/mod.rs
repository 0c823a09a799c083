//! Configuration section definitions.
//!
//! Each submodule owns one top-level table of `brickwork.toml`.

mod analytics;
mod block;
mod libs;
mod page;

pub use analytics::AnalyticsConfig;
pub use block::BlockConfig;
pub use libs::LibsConfig;
pub use page::PageConfig;

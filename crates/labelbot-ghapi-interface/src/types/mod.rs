//! GitHub types.

mod common;
mod pulls;
mod reviews;

pub use common::*;
pub use pulls::*;
pub use reviews::*;

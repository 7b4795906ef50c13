mod chunk;
mod common;
mod query;

pub use chunk::*;
pub use common::*;
pub use query::*;

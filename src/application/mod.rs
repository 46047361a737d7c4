//! Application layer: the view composer, its render projection and the
//! command executor bridging it to a data source.

pub mod composer;
pub mod fetch;
pub mod query;
pub mod view;

pub use composer::*;
pub use fetch::*;
pub use query::*;
pub use view::*;

//! Dashboard view state: selections, availability gating and the derived
//! statistics panels.

pub mod gate;
pub mod header;
pub mod selection;
pub mod stats;

pub use gate::*;
pub use header::*;
pub use selection::*;
pub use stats::*;

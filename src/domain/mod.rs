pub mod asset;
pub mod dashboard;
pub mod errors;
pub mod format;
pub mod logging;

//! Logging setup shared by the binaries.

pub mod logging;

pub use logging::{LogFormat, init, init_with};

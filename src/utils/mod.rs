//! Utility modules: config file IO and logging setup.

pub mod logging;
pub mod persistence;

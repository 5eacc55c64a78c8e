pub mod config;
pub mod git;
pub mod log;
pub mod registry;
pub mod sync;
pub mod updater;

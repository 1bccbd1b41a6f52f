pub mod config;
pub mod diff;
pub mod html;
pub mod loader;
pub mod path;
pub mod report;
pub mod snapshot;
pub mod utils;

//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against a catalog file.

pub mod browse;
pub mod config;
pub mod list;
pub mod options;
pub mod show;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use config::execute as config;
pub use list::execute as list;
pub use options::execute as options;
pub use show::execute as show;

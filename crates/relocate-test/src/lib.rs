pub mod fixtures;
pub mod fs;

pub use fs::Workspace;

// Infrastructure layer
pub mod file_system;
pub mod processors;

pub use file_system::*;
pub use processors::*;

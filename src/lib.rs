// Quickmin - directory-walking .min.js/.min.css generator
// Library root with clean separation of concerns

pub mod cli;
pub mod core;
pub mod infrastructure;
pub mod utils;

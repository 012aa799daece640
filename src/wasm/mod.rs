mod builder;
mod constants;
pub mod try_into_js_value;

pub use builder::InstructionNamespace;

// Re-export constants functions
pub use constants::*;

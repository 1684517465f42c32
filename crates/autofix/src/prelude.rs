pub use autofix_core::RewriteError;

pub use anstream::println;
pub use color_eyre::eyre::Result;
pub use std::format as f;

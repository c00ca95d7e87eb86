pub mod backend;
pub mod cli;

#[cfg(test)]
pub mod fake;

pub use backend::*;
pub use cli::*;

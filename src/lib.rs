pub mod cli;
pub mod commands;
pub mod config;
pub mod docs;
pub mod git;
pub mod infrastructure;
pub mod output;
pub mod search;

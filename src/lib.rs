pub mod args;
pub mod backend;
pub mod cli;
pub mod compact;
pub mod error;
pub mod help;
pub mod logging;
pub mod string_list;

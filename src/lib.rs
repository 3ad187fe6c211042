pub mod backup;
pub mod check;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod signal_handler;
pub mod state;
pub mod types;
pub mod util;

pub mod config;
pub mod input;
pub mod output;
pub mod session;
pub mod stats;
pub mod tui;

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ticker;
pub mod ui;

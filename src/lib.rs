pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod presenter;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod tick;
pub mod ui;

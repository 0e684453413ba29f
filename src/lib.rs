pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod store;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod api;

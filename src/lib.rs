pub mod config;
pub mod editor;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

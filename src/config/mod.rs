pub mod editor_config;

pub use editor_config::*;

// Replays scripted input events against an editor, for the CLI and for tests

pub mod executor;
pub mod formatter;
pub mod parser;

#[cfg(test)]
mod tests;

pub use executor::*;
pub use formatter::*;
pub use parser::*;

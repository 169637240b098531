//! Page components

mod directory;

pub use directory::*;

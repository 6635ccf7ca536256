//! Core types shared by the garagem crates

mod error;
mod types;

pub use error::*;
pub use types::*;

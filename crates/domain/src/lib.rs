pub mod config;
pub mod error;
pub mod trace;

pub use error::{Error, Result};

//! winfetch library
//!
//! Gathers host information and prints it beside a piece of ASCII art.

pub mod art;
pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod logging;
pub mod signal;
pub mod utils;

pub use art::ArtCatalog;
pub use collectors::Collector;
pub use config::{Config, ConfigStore};
pub use data::SystemFacts;
pub use error::{Result, WinfetchError};

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod http_probe;
pub mod interactive;
pub mod logging;
pub mod probe;
pub mod quic_probe;
pub mod store;
pub mod target;

pub use error::{Error, Result};
pub use probe::prelude::*;
pub use store::ResultStore;

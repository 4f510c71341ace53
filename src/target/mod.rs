pub mod parser;

pub use parser::{ParsedTarget, parse};

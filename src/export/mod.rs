pub mod csv;

pub use csv::{export_csv, write_csv};

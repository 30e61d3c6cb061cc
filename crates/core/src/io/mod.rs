//! I/O for series, bundles and configuration files

mod json;

pub use json::{read_json, read_json_from_slice, read_toml, to_json_bytes, write_json};

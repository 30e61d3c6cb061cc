//! JSON and TOML file helpers
//!
//! JSON output is pretty-printed with two-space indentation so downloaded
//! bundles diff cleanly.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Serialize `value` to a pretty-printed JSON byte stream.
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = serde_json::to_vec_pretty(value)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write `value` as pretty-printed JSON to `path`.
pub fn write_json<T, P>(value: &T, path: P) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read a JSON document from `path`.
pub fn read_json<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Read a JSON document from an in-memory buffer.
pub fn read_json_from_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(data)?)
}

/// Read a TOML document from `path`.
pub fn read_toml<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let text = std::fs::read_to_string(path.as_ref())?;
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::Thresholds;

    #[test]
    fn bytes_are_two_space_indented() {
        let bytes = to_json_bytes(&Thresholds::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("{\n  \"healthy\": 0.6"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn slice_roundtrip() {
        let bytes = to_json_bytes(&Thresholds::default()).unwrap();
        let t: Thresholds = read_json_from_slice(&bytes).unwrap();
        assert_eq!(t, Thresholds::default());
    }
}

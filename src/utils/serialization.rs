use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use bincode::Options;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_no_limit()
}

pub fn serialize_bytes<T: Serialize>(data: &T) -> bincode::Result<Vec<u8>> {
    options().serialize(data)
}

pub fn deserialize_bytes<T: DeserializeOwned>(bytes: &[u8]) -> bincode::Result<T> {
    options().deserialize(bytes)
}

pub fn save_to_disk<T: Serialize, TPath: AsRef<Path>>(data: &T, path: TPath) -> bincode::Result<()> {
    // Write all bytes to the target file
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    options().serialize_into(&mut writer, data)?;
    writer.flush()?;
    Ok(())
}

pub fn load_from_disk<T: DeserializeOwned, TPath: AsRef<Path>>(path: TPath) -> bincode::Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    options().deserialize_from(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_are_stable_for_same_value() {
        let data = vec!["CAT".to_string(), "DOG".to_string()];
        let first = serialize_bytes(&data).unwrap();
        let second = serialize_bytes(&data).unwrap();
        assert_eq!(first, second);
        let back: Vec<String> = deserialize_bytes(&first).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let bytes = serialize_bytes(&vec!["CARP".to_string()]).unwrap();
        let result: bincode::Result<Vec<String>> = deserialize_bytes(&bytes[..bytes.len() - 1]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        let path = std::env::temp_dir().join("wordgrid-serialization-missing.bin");
        let _ = std::fs::remove_file(&path);
        let result: bincode::Result<Vec<String>> = load_from_disk(&path);
        assert!(result.is_err());
    }
}

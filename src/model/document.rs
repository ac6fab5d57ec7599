//! JSON document boundary I/O.
//!
//! All reading and writing of documents happens here, once before and
//! once after resolution. Writes serialize the full document to a string
//! first and only then touch the filesystem, so a failed serialization
//! can never leave a partial output behind.

use crate::error::{JetcheckError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read and parse a JSON document.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(JetcheckError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| JetcheckError::InputParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Serialize a document to pretty JSON (2-space indent, trailing newline)
/// and write it in one operation, creating parent directories as needed.
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut content =
        serde_json::to_string_pretty(value).map_err(|e| JetcheckError::OutputWriteError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    content.push('\n');

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content).map_err(|e| JetcheckError::OutputWriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        name: String,
        count: u32,
    }

    #[test]
    fn write_then_read_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("doc.json");
        let doc = Doc {
            name: "orin".into(),
            count: 3,
        };

        write_document(&path, &doc).unwrap();
        let read: Doc = read_document(&path).unwrap();
        assert_eq!(read, doc);
    }

    #[test]
    fn written_document_ends_with_newline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.json");
        write_document(&path, &Doc { name: "x".into(), count: 0 }).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        assert!(content.contains("  \"name\""));
    }

    #[test]
    fn missing_input_is_input_not_found() {
        let temp = TempDir::new().unwrap();
        let result: Result<Doc> = read_document(&temp.path().join("absent.json"));
        assert!(matches!(result, Err(JetcheckError::InputNotFound { .. })));
    }

    #[test]
    fn malformed_input_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let result: Result<Doc> = read_document(&path);
        assert!(matches!(result, Err(JetcheckError::InputParseError { .. })));
    }
}

//! Document input.
//!
//! Documents arrive as UTF-8 text already extracted from their source
//! format. `-` reads from stdin.

use docquest_core::{AppError, AppResult};
use std::io::Read;
use std::path::Path;

/// Read a document's text from a file, or from stdin for `-`.
pub fn read_document(path: &Path) -> AppResult<String> {
    let bytes = if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        buffer
    } else {
        std::fs::read(path)
            .map_err(|e| AppError::Document(format!("Failed to read {:?}: {}", path, e)))?
    };

    let text = decode(bytes)?;
    tracing::debug!("Read {} bytes of text from {:?}", text.len(), path);
    Ok(text)
}

fn decode(bytes: Vec<u8>) -> AppResult<String> {
    let text = String::from_utf8(bytes)
        .map_err(|_| AppError::Document("Document is not valid UTF-8 text".to_string()))?;

    if !is_likely_text(&text) {
        tracing::warn!("Rejecting likely binary document");
        return Err(AppError::Document("Binary documents are not supported".to_string()));
    }

    Ok(text)
}

fn is_likely_text(data: &str) -> bool {
    !data.contains('\0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_text_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "The sky is blue.").unwrap();

        let text = read_document(file.path()).unwrap();
        assert_eq!(text, "The sky is blue.\n");
    }

    #[test]
    fn test_reject_binary() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"PK\x03\x04\0\0binary").unwrap();

        let result = read_document(file.path());
        assert!(matches!(result, Err(AppError::Document(_))));
    }

    #[test]
    fn test_reject_invalid_utf8() {
        let result = decode(vec![0x66, 0x6f, 0xff, 0xfe]);
        assert!(matches!(result, Err(AppError::Document(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = read_document(Path::new("/nonexistent/docquest/document.txt"));
        assert!(matches!(result, Err(AppError::Document(_))));
    }
}

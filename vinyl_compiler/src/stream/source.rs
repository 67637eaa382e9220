//! Loading source files into character streams

use super::StringStream;
use crate::config::compile_time::source::MAX_FILE_SIZE;
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Source loading errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },

    #[error("Invalid file path: {path}")]
    InvalidPath { path: String },
}

impl SourceError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            SourceError::FileNotFound { .. } => codes::source::FILE_NOT_FOUND,
            SourceError::FileTooLarge { .. } => codes::source::FILE_TOO_LARGE,
            SourceError::PermissionDenied { .. } => codes::source::PERMISSION_DENIED,
            SourceError::InvalidEncoding { .. } => codes::source::INVALID_ENCODING,
            SourceError::IoError { .. } => codes::source::IO_ERROR,
            SourceError::InvalidPath { .. } => codes::source::INVALID_PATH,
        }
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    fn from_io(error: &io::Error, path: &Path) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => SourceError::FileNotFound {
                path: path.display().to_string(),
            },
            io::ErrorKind::PermissionDenied => SourceError::PermissionDenied {
                path: path.display().to_string(),
            },
            io::ErrorKind::InvalidData => SourceError::InvalidEncoding {
                path: path.display().to_string(),
            },
            _ => SourceError::IoError {
                message: format!("{}: {}", path.display(), error),
            },
        }
    }
}

/// A source file read fully into memory
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
    /// Size on disk in bytes
    pub size: u64,
}

impl SourceFile {
    /// A fresh stream positioned at the start of the file
    pub fn stream(&self) -> StringStream {
        StringStream::new(&self.text)
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// Read `path` as UTF-8 source, enforcing the compile-time size limit
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<SourceFile, SourceError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    log_debug!("Loading source", "file" => path_str);

    if path.as_os_str().is_empty() {
        let error = SourceError::InvalidPath {
            path: path_str.clone(),
        };
        log_error!(error.error_code(), "Empty file path provided");
        return Err(error);
    }

    if !path.exists() {
        let error = SourceError::FileNotFound {
            path: path_str.clone(),
        };
        log_error!(error.error_code(), "File not found", "path" => path_str);
        return Err(error);
    }

    if !path.is_file() {
        let error = SourceError::InvalidPath {
            path: path_str.clone(),
        };
        log_error!(error.error_code(), "Path is not a file", "path" => path_str);
        return Err(error);
    }

    let size = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            let error = SourceError::from_io(&e, path);
            log_error!(error.error_code(), "Failed to read file metadata",
                "path" => path_str,
                "io_error" => e);
            return Err(error);
        }
    };

    if size > MAX_FILE_SIZE {
        let error = SourceError::FileTooLarge {
            size,
            max_size: MAX_FILE_SIZE,
        };
        log_error!(error.error_code(), "File exceeds maximum size",
            "path" => path_str,
            "size_bytes" => size,
            "max_size_bytes" => MAX_FILE_SIZE);
        return Err(error);
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            let error = SourceError::from_io(&e, path);
            log_error!(error.error_code(), "Failed to read source file",
                "path" => path_str,
                "io_error" => e);
            return Err(error);
        }
    };

    let source = SourceFile {
        path: path.to_path_buf(),
        text,
        size,
    };

    log_success!(codes::success::SOURCE_LOADED, "Source file loaded",
        "file" => path_str,
        "size_bytes" => size,
        "lines" => source.line_count());

    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::CharStream;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_load_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "let x Int = 42\n").unwrap();

        let source = load_source(file.path()).unwrap();
        assert_eq!(source.text, "let x Int = 42\n");
        assert_eq!(source.size, 15);
        assert_eq!(source.line_count(), 1);

        let mut stream = source.stream();
        assert_eq!(stream.read(3), "let");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.vinyl");

        assert_matches!(load_source(&missing), Err(SourceError::FileNotFound { .. }));
    }

    #[test]
    fn test_directory_is_invalid_path() {
        let dir = tempfile::tempdir().unwrap();

        let error = load_source(dir.path()).unwrap_err();
        assert_matches!(error, SourceError::InvalidPath { .. });
        assert_eq!(error.error_code(), codes::source::INVALID_PATH);
    }

    #[test]
    fn test_empty_path() {
        assert_matches!(load_source(""), Err(SourceError::InvalidPath { .. }));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let error = load_source(file.path()).unwrap_err();
        assert_matches!(error, SourceError::InvalidEncoding { .. });
        assert_eq!(error.category(), "Source");
    }
}

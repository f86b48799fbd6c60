use std::path::PathBuf;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the application
#[derive(Debug)]
pub enum Error {
    IoError { file: PathBuf, source: std::io::Error },
    ParseError { file: PathBuf, message: String },
    InvalidArgument(String),
    SerializationError(String),
}

impl Error {
    /// The source file this error refers to, if any
    pub fn file(&self) -> Option<&PathBuf> {
        match self {
            Error::IoError { file, .. } | Error::ParseError { file, .. } => Some(file),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::IoError { file, source } => {
                write!(f, "Failed to read file {}: {}", file.display(), source)
            }
            Error::ParseError { file, message } => {
                write!(f, "Failed to parse Java syntax in file {}: {}", file.display(), message)
            }
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(format!("JSON serialization failed: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::SerializationError(format!("YAML serialization failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_names_file() {
        let err = Error::ParseError {
            file: PathBuf::from("src/Broken.java"),
            message: "syntax error at line 3".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("src/Broken.java"));
        assert!(msg.contains("line 3"));
        assert_eq!(err.file(), Some(&PathBuf::from("src/Broken.java")));
    }

    #[test]
    fn test_io_error_exposes_source() {
        use std::error::Error as _;

        let err = Error::IoError {
            file: PathBuf::from("Missing.java"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };

        assert!(err.source().is_some());
        assert!(err.to_string().contains("Missing.java"));
    }

    #[test]
    fn test_serde_errors_become_serialization_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);
        assert!(matches!(err, Error::SerializationError(_)));
        assert!(err.to_string().starts_with("Serialization error: JSON"));

        let yaml_err = serde_yaml::from_str::<Vec<String>>("key: value").unwrap_err();
        assert!(matches!(Error::from(yaml_err), Error::SerializationError(_)));
    }

    #[test]
    fn test_argument_error_has_no_file() {
        let err = Error::InvalidArgument("bad".to_string());
        assert!(err.file().is_none());
    }
}

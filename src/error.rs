use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextVizError {
    #[error("Unsupported file format: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("Failed to decode text content: {message}")]
    Decode { message: String },

    #[error("Failed to parse {format} content: {message}")]
    Parse { format: String, message: String },

    #[error("Document contains no extractable text")]
    EmptyDocument,

    #[error("File too large: {size} bytes (max: {max_size} bytes)")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for TextVizError {
    fn user_message(&self) -> String {
        match self {
            TextVizError::UnsupportedFormat { extension } => {
                format!("Unsupported or unreadable file: .{}", extension)
            }
            TextVizError::Decode { message } => {
                format!("Unsupported or unreadable file: {}", message)
            }
            TextVizError::Parse { format, message } => {
                format!("Unsupported or unreadable file ({}: {})", format, message)
            }
            TextVizError::EmptyDocument => {
                "Document contains no extractable text".to_string()
            }
            TextVizError::FileTooLarge { size, max_size } => {
                format!(
                    "File too large: {} (maximum allowed: {})",
                    format_bytes(*size),
                    format_bytes(*max_size)
                )
            }
            TextVizError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            TextVizError::UnsupportedFormat { .. } => Some(
                "Supported formats are .txt, .csv, .xlsx, and .json. Rename or convert the file to one of these.".to_string()
            ),
            TextVizError::Decode { .. } => Some(
                "The file must contain valid UTF-8 text. Re-save it with UTF-8 encoding and try again.".to_string()
            ),
            TextVizError::Parse { .. } => Some(
                "Verify that the file is well-formed and matches its extension (e.g., valid CSV rows or JSON syntax).".to_string()
            ),
            TextVizError::EmptyDocument => Some(
                "The file was read successfully but produced no text. Check that it is not empty.".to_string()
            ),
            TextVizError::FileTooLarge { .. } => Some(
                "Increase the maximum file size limit with --max-size or trim the document.".to_string()
            ),
            TextVizError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<csv::Error> for TextVizError {
    fn from(error: csv::Error) -> Self {
        TextVizError::Parse {
            format: "CSV".to_string(),
            message: error.to_string(),
        }
    }
}

impl From<calamine::XlsxError> for TextVizError {
    fn from(error: calamine::XlsxError) -> Self {
        TextVizError::Parse {
            format: "XLSX".to_string(),
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for TextVizError {
    fn from(error: serde_json::Error) -> Self {
        TextVizError::Parse {
            format: "JSON".to_string(),
            message: error.to_string(),
        }
    }
}

impl From<std::str::Utf8Error> for TextVizError {
    fn from(error: std::str::Utf8Error) -> Self {
        TextVizError::Decode {
            message: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for TextVizError {
    fn from(error: toml::de::Error) -> Self {
        TextVizError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TextVizError>;

fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

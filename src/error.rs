use media_library::{ComposeError, LibraryError, PickerError};
use std::fmt;

/// Central error types for the Sticker Smash app
#[derive(Debug)]
pub enum AppError {
    /// The user closed the image picker without choosing
    PickCancelled,
    /// Image picker failed
    Picker(PickerError),
    /// Permission denied (e.g. media library)
    PermissionDenied(String),
    /// Rendering the composite failed
    ImageProcessing(String),
    /// Saving to the media library failed
    Export(String),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Invalid or unreadable configuration
    Config(String),
    /// General error
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::PickCancelled => write!(f, "Image selection cancelled"),
            AppError::Picker(e) => write!(f, "Picker error: {}", e),
            AppError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            AppError::ImageProcessing(msg) => write!(f, "Image processing error: {}", msg),
            AppError::Export(msg) => write!(f, "Export error: {}", msg),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<PickerError> for AppError {
    fn from(e: PickerError) -> Self {
        match e {
            PickerError::Cancelled => AppError::PickCancelled,
            PickerError::PermissionDenied(msg) => AppError::PermissionDenied(msg),
            other => AppError::Picker(other),
        }
    }
}

impl From<LibraryError> for AppError {
    fn from(e: LibraryError) -> Self {
        match e {
            LibraryError::PermissionDenied(msg) => AppError::PermissionDenied(msg),
            LibraryError::IoError(e) => AppError::Filesystem(e),
            other => AppError::Export(other.to_string()),
        }
    }
}

impl From<ComposeError> for AppError {
    fn from(e: ComposeError) -> Self {
        AppError::ImageProcessing(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl AppError {
    /// Declines are expected outcomes: show a hint, do not log as failure
    pub fn is_user_declined(&self) -> bool {
        matches!(self, AppError::PickCancelled | AppError::PermissionDenied(_))
    }

    /// Translation key of the message shown to the user
    pub fn message_key(&self) -> &'static str {
        match self {
            AppError::PickCancelled => "notice-pick-cancelled",
            AppError::Picker(_) => "error-picker",
            AppError::PermissionDenied(_) => "notice-permission-denied",
            AppError::ImageProcessing(_) => "error-render",
            AppError::Export(_) | AppError::Filesystem(_) => "error-save",
            AppError::Config(_) => "error-config",
            AppError::Other(_) => "error-generic",
        }
    }
}

// Platform-specific image picker
//
// On Android the host activity launches the system photo picker and stores the
// result in static fields that are polled over JNI. Everywhere else a native
// (or browser) file dialog is used.

use crate::models::ImageRef;
use crate::AndroidBridgeConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum PickerError {
    /// The user closed the picker without choosing an image
    Cancelled,
    PermissionDenied(String),
    Timeout(String),
    Other(String),
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickerError::Cancelled => write!(f, "No image selected"),
            PickerError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            PickerError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            PickerError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for PickerError {}

/// Error string the host activity reports when the picker was dismissed
pub const CANCELLED_MARKER: &str = "cancelled";

/// Poll interval and attempts while waiting for the activity (60 s in total)
#[cfg(target_os = "android")]
const POLL_INTERVAL_MS: u64 = 100;
#[cfg(target_os = "android")]
const POLL_ATTEMPTS: u32 = 600;

/// Maps an error reported by the host activity to a picker error
pub fn classify_activity_error(message: &str) -> PickerError {
    let trimmed = message.trim();
    if trimmed.eq_ignore_ascii_case(CANCELLED_MARKER) {
        PickerError::Cancelled
    } else if trimmed.to_ascii_lowercase().contains("permission") {
        PickerError::PermissionDenied(trimmed.to_string())
    } else {
        PickerError::Other(trimmed.to_string())
    }
}

/// Pick a single image from the device gallery
pub async fn pick_image() -> Result<ImageRef, PickerError> {
    pick_image_with_config(AndroidBridgeConfig::default()).await
}

#[cfg(target_os = "android")]
pub async fn pick_image_with_config(config: AndroidBridgeConfig) -> Result<ImageRef, PickerError> {
    // Polling blocks for up to a minute, keep it off the UI thread
    tokio::task::spawn_blocking(move || pick_image_blocking(&config))
        .await
        .map_err(|e| PickerError::Other(format!("Task join error: {}", e)))?
}

#[cfg(target_os = "android")]
fn pick_image_blocking(config: &AndroidBridgeConfig) -> Result<ImageRef, PickerError> {
    use crate::android::{clear_last_error, static_string, with_activity};

    log::debug!("Launching Android image picker");

    let polled = with_activity(config, |env, activity, cls| {
        clear_last_error(env, cls)?;
        env.call_method(activity, "launchImagePicker", "()V", &[])
            .map_err(|e| format!("launchImagePicker failed: {}", e))?;

        for _ in 0..POLL_ATTEMPTS {
            std::thread::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS));

            if let Some(path) = static_string(env, cls, "getLastPhotoPath")? {
                return Ok(Some(Ok(path)));
            }
            if let Some(err) = static_string(env, cls, "getLastError")? {
                return Ok(Some(Err(err)));
            }
        }
        Ok(None)
    })
    .map_err(PickerError::Other)?;

    match polled {
        Some(Ok(path)) => {
            log::info!("Image picked: {}", path);
            Ok(ImageRef::file(path))
        }
        Some(Err(err)) => Err(classify_activity_error(&err)),
        None => Err(PickerError::Timeout(
            "Image picker timeout - no selection made".to_string(),
        )),
    }
}

#[cfg(not(target_os = "android"))]
pub async fn pick_image_with_config(_config: AndroidBridgeConfig) -> Result<ImageRef, PickerError> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Choose a photo")
        .add_filter("Images", &["png", "jpg", "jpeg", "webp", "gif", "bmp"])
        .pick_file()
        .await
        .ok_or(PickerError::Cancelled)?;

    #[cfg(target_arch = "wasm32")]
    {
        let bytes = handle.read().await;
        log::info!("Image picked: {} ({} bytes)", handle.file_name(), bytes.len());
        Ok(ImageRef::Memory {
            name: handle.file_name(),
            bytes: std::sync::Arc::from(bytes),
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = handle.path().to_path_buf();
        log::info!("Image picked: {}", path.display());
        Ok(ImageRef::File(path))
    }
}

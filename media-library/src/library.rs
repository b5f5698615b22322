// Media library access: permission handling and saving exported images.

use crate::models::SavedImage;
use crate::AndroidBridgeConfig;
use std::path::{Path, PathBuf};

/// Error type for media library operations
#[derive(Debug)]
pub enum LibraryError {
    PermissionDenied(String),
    IoError(std::io::Error),
    Other(String),
}

impl std::fmt::Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LibraryError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            LibraryError::IoError(e) => write!(f, "IO error: {}", e),
            LibraryError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::IoError(err)
    }
}

/// Writes `bytes` to `dir/file_name`, creating the directory if needed
pub fn write_into_dir(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, LibraryError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, bytes)?;
    log::debug!("Wrote {} bytes to {:?}", bytes.len(), path);
    Ok(path)
}

#[cfg(target_os = "android")]
mod platform {
    use super::*;
    use crate::android::{clear_last_error, static_string, with_activity};
    use jni::objects::{JObject, JValue};

    const PERMISSION_POLL_INTERVAL_MS: u64 = 100;
    const PERMISSION_POLL_ATTEMPTS: u32 = 300;

    pub fn has_media_permission(config: &AndroidBridgeConfig) -> Result<bool, LibraryError> {
        with_activity(config, |env, activity, _cls| {
            env.call_method(activity, "hasMediaLibraryPermission", "()Z", &[])
                .and_then(|v| v.z())
                .map_err(|e| format!("hasMediaLibraryPermission failed: {}", e))
        })
        .map_err(LibraryError::Other)
    }

    pub fn request_media_permission(config: &AndroidBridgeConfig) -> Result<bool, LibraryError> {
        with_activity(config, |env, activity, cls| {
            let granted = env
                .call_method(activity, "hasMediaLibraryPermission", "()Z", &[])
                .and_then(|v| v.z())
                .map_err(|e| format!("hasMediaLibraryPermission failed: {}", e))?;
            if granted {
                return Ok(true);
            }

            clear_last_error(env, cls)?;
            env.call_method(activity, "requestMediaLibraryPermission", "()V", &[])
                .map_err(|e| format!("requestMediaLibraryPermission failed: {}", e))?;

            for _ in 0..PERMISSION_POLL_ATTEMPTS {
                std::thread::sleep(std::time::Duration::from_millis(
                    PERMISSION_POLL_INTERVAL_MS,
                ));
                let granted = env
                    .call_method(activity, "hasMediaLibraryPermission", "()Z", &[])
                    .and_then(|v| v.z())
                    .map_err(|e| format!("hasMediaLibraryPermission failed: {}", e))?;
                if granted {
                    return Ok(true);
                }
                // The dialog was answered with "deny"
                if let Some(err) = static_string(env, cls, "getLastError")? {
                    log::info!("Media permission not granted: {}", err);
                    return Ok(false);
                }
            }
            Ok(false)
        })
        .map_err(LibraryError::Other)
    }

    pub fn save_to_library(
        config: &AndroidBridgeConfig,
        bytes: &[u8],
        file_name: &str,
    ) -> Result<SavedImage, LibraryError> {
        let cache_dir = app_cache_dir(config)?;
        let staged = write_into_dir(&cache_dir, file_name, bytes)?;
        let staged_str = staged.to_string_lossy().to_string();

        let result = with_activity(config, |env, activity, cls| {
            clear_last_error(env, cls)?;
            let jpath = env
                .new_string(&staged_str)
                .map_err(|e| format!("new_string failed: {}", e))?;
            let uri = env
                .call_method(
                    activity,
                    "saveImageToLibrary",
                    "(Ljava/lang/String;)Ljava/lang/String;",
                    &[JValue::Object(&JObject::from(jpath))],
                )
                .and_then(|v| v.l())
                .map_err(|e| format!("saveImageToLibrary failed: {}", e))?;
            if uri.is_null() {
                let err = static_string(env, cls, "getLastError")?
                    .unwrap_or_else(|| "media store rejected the image".to_string());
                return Err(err);
            }
            let uri: String = env
                .get_string(&jni::objects::JString::from(uri))
                .map_err(|e| format!("String conversion failed: {}", e))?
                .into();
            Ok(uri)
        });

        if let Err(e) = std::fs::remove_file(&staged) {
            log::warn!("Could not remove staged export {:?}: {}", staged, e);
        }

        match result {
            Ok(location) => Ok(SavedImage { location }),
            Err(msg) if msg.to_ascii_lowercase().contains("permission") => {
                Err(LibraryError::PermissionDenied(msg))
            }
            Err(msg) => Err(LibraryError::Other(msg)),
        }
    }

    fn app_cache_dir(config: &AndroidBridgeConfig) -> Result<PathBuf, LibraryError> {
        with_activity(config, |env, activity, _cls| {
            let dir = env
                .call_method(activity, "getCacheDir", "()Ljava/io/File;", &[])
                .and_then(|v| v.l())
                .map_err(|e| format!("getCacheDir failed: {}", e))?;
            let abs = env
                .call_method(&dir, "getAbsolutePath", "()Ljava/lang/String;", &[])
                .and_then(|v| v.l())
                .map_err(|e| format!("getAbsolutePath failed: {}", e))?;
            let abs: String = env
                .get_string(&jni::objects::JString::from(abs))
                .map_err(|e| format!("String conversion failed: {}", e))?
                .into();
            Ok(PathBuf::from(abs))
        })
        .map_err(LibraryError::Other)
    }
}

#[cfg(not(target_os = "android"))]
mod platform {
    use super::*;

    pub fn has_media_permission(_config: &AndroidBridgeConfig) -> Result<bool, LibraryError> {
        Ok(true)
    }

    pub fn request_media_permission(_config: &AndroidBridgeConfig) -> Result<bool, LibraryError> {
        Ok(true)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_library(
        _config: &AndroidBridgeConfig,
        bytes: &[u8],
        file_name: &str,
    ) -> Result<SavedImage, LibraryError> {
        let dir = default_library_dir();
        let path = write_into_dir(&dir, file_name, bytes)?;
        let location = path
            .canonicalize()
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();
        Ok(SavedImage { location })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn default_library_dir() -> PathBuf {
        dirs::picture_dir()
            .map(|p| p.join("StickerSmash"))
            .unwrap_or_else(|| PathBuf::from("./exports"))
    }
}

/// Whether the app may write into the device media library
pub fn has_media_permission() -> Result<bool, LibraryError> {
    platform::has_media_permission(&AndroidBridgeConfig::default())
}

/// Asks for media library access. Safe to call again after a denial.
/// Blocks while the system dialog is open on Android.
pub fn request_media_permission() -> Result<bool, LibraryError> {
    platform::request_media_permission(&AndroidBridgeConfig::default())
}

/// Saves an encoded image into the device media library (or the user's
/// pictures directory on desktop). Blocking. The browser build downloads
/// instead and has no library.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_to_library(bytes: &[u8], file_name: &str) -> Result<SavedImage, LibraryError> {
    log::debug!("Saving {} ({} bytes) to media library", file_name, bytes.len());
    platform::save_to_library(&AndroidBridgeConfig::default(), bytes, file_name)
}

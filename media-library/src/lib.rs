//! # Media Library
//!
//! Platform capabilities used by Sticker Smash:
//! - picking a photo from the device gallery (or a file dialog)
//! - asking for media library permission
//! - saving an exported image into the media library
//! - flattening a photo and a sticker into one image
//!
//! ## Android host contract
//!
//! On Android every call goes through the app's `MainActivity` over JNI. The
//! activity has to provide:
//!
//! | member | signature | notes |
//! |---|---|---|
//! | `getInstance` (static) | `()LMainActivity;` | or a Kotlin `Companion` |
//! | `launchImagePicker` | `()V` | result via `getLastPhotoPath` |
//! | `getLastPhotoPath` (static) | `()Ljava/lang/String;` | null until picked |
//! | `getLastError` (static) | `()Ljava/lang/String;` | `"cancelled"` on dismiss |
//! | `clearLastError` (static) | `()V` | |
//! | `hasMediaLibraryPermission` | `()Z` | |
//! | `requestMediaLibraryPermission` | `()V` | denial via `getLastError` |
//! | `saveImageToLibrary` | `(Ljava/lang/String;)Ljava/lang/String;` | returns content URI or null |
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use media_library::{pick_image, render_composite, save_to_library, CompositeLayout};
//!
//! let photo = pick_image().await?;
//! let png = render_composite(&photo.load_bytes()?, None, &CompositeLayout::default())?;
//! save_to_library(&png, "sticker-smash.png")?;
//! ```

#[cfg(target_os = "android")]
mod android;

pub mod compose;
pub mod library;
pub mod models;
pub mod picker;

pub use compose::{
    render_composite, ComposeError, CompositeLayout, StickerPlacement, MAX_OUTPUT_EDGE,
};
#[cfg(not(target_arch = "wasm32"))]
pub use library::save_to_library;
pub use library::{has_media_permission, request_media_permission, write_into_dir, LibraryError};
pub use models::{guess_mime_from_ext, ExportFormat, ImageRef, SavedImage};
pub use picker::{pick_image, pick_image_with_config, PickerError};

const DEFAULT_MAIN_ACTIVITY_CLASS: &str = "dev/dioxus/main/MainActivity";

/// Configuration for the JNI bridge on Android
///
/// Allows customization of the MainActivity class name for different apps.
#[derive(Debug, Clone)]
pub struct AndroidBridgeConfig {
    /// Fully qualified class name in slash format (e.g., "com/example/myapp/MainActivity")
    pub main_activity_class: String,
}

impl Default for AndroidBridgeConfig {
    fn default() -> Self {
        Self {
            main_activity_class: DEFAULT_MAIN_ACTIVITY_CLASS.to_string(),
        }
    }
}

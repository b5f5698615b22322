use crate::error::AppError;
use base64::Engine;
use image::{imageops::FilterType, ImageFormat};
use media_library::ImageRef;
use std::io::Cursor;

/// Encodes raw bytes as a `data:` URL
pub fn bytes_to_data_url(mime: &str, bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, b64)
}

/// Reads an image and returns it as a base64 data URL
pub fn image_ref_to_data_url(image: &ImageRef) -> Result<String, AppError> {
    let data = image
        .load_bytes()
        .map_err(|e| AppError::ImageProcessing(format!("Failed to read {}: {}", image.name(), e)))?;
    Ok(bytes_to_data_url(image.mime_type(), &data))
}

/// Data URL for showing a photo in the frame.
///
/// Camera photos are far larger than the frame; they are downscaled to
/// `max_width` x `max_height` and re-encoded as JPEG before going into the
/// webview. Small images pass through unchanged.
pub fn display_data_url(image: &ImageRef, max_width: u32, max_height: u32) -> Result<String, AppError> {
    let data = image
        .load_bytes()
        .map_err(|e| AppError::ImageProcessing(format!("Failed to read {}: {}", image.name(), e)))?;

    let decoded = match image::load_from_memory(&data) {
        Ok(img) => img,
        Err(e) => {
            // Let the webview try formats we cannot decode (e.g. HEIC)
            log::warn!("Could not decode {} for resizing: {}", image.name(), e);
            return Ok(bytes_to_data_url(image.mime_type(), &data));
        }
    };

    let (w, h) = calculate_resize_dimensions(decoded.width(), decoded.height(), max_width, max_height);
    if (w, h) == (decoded.width(), decoded.height()) {
        return Ok(bytes_to_data_url(image.mime_type(), &data));
    }

    log::debug!(
        "Downscaling {} from {}x{} to {}x{} for display",
        image.name(),
        decoded.width(),
        decoded.height(),
        w,
        h
    );
    let resized = decoded.resize_exact(w, h, FilterType::Triangle).to_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    resized
        .write_to(&mut buffer, ImageFormat::Jpeg)
        .map_err(|e| AppError::ImageProcessing(format!("Failed to encode preview: {}", e)))?;
    Ok(bytes_to_data_url("image/jpeg", &buffer.into_inner()))
}

/// Resize an image maintaining aspect ratio
fn calculate_resize_dimensions(
    original_width: u32,
    original_height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    let ratio =
        (original_width as f32 / max_width as f32).max(original_height as f32 / max_height as f32);

    if ratio > 1.0 {
        let new_width = ((original_width as f32 / ratio) as u32).max(1);
        let new_height = ((original_height as f32 / ratio) as u32).max(1);
        (new_width, new_height)
    } else {
        (original_width, original_height)
    }
}

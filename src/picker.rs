// Thin wrapper around media-library's picker that speaks the app's types.

use crate::background::run_blocking;
use crate::error::AppError;
use crate::image_processing::display_data_url;
use crate::session::PickOutcome;
use media_library::{ImageRef, PickerError};

/// Maps the platform result; a dismissed picker is an outcome, not an error
pub fn classify_pick(result: Result<ImageRef, PickerError>) -> Result<PickOutcome, AppError> {
    match result {
        Ok(image) => Ok(PickOutcome::Selected(image)),
        Err(PickerError::Cancelled) => Ok(PickOutcome::Cancelled),
        Err(e) => Err(e.into()),
    }
}

/// Asks the platform picker for a photo
pub async fn select_base_image() -> Result<PickOutcome, AppError> {
    classify_pick(media_library::pick_image().await)
}

/// Display-sized data URL of a picked photo, computed off the UI thread
pub async fn preview_url(image: ImageRef, max_width: u32, max_height: u32) -> Result<String, AppError> {
    run_blocking(move || display_data_url(&image, max_width, max_height)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_an_outcome() {
        assert_eq!(
            classify_pick(Err(PickerError::Cancelled)).unwrap(),
            PickOutcome::Cancelled
        );
    }

    #[test]
    fn test_selection_passes_through() {
        let image = ImageRef::file("/photos/a.jpg");
        assert_eq!(
            classify_pick(Ok(image.clone())).unwrap(),
            PickOutcome::Selected(image)
        );
    }

    #[test]
    fn test_failures_become_app_errors() {
        let err = classify_pick(Err(PickerError::Timeout("60s".into()))).unwrap_err();
        assert!(matches!(err, AppError::Picker(PickerError::Timeout(_))));
        let err = classify_pick(Err(PickerError::PermissionDenied("gallery".into()))).unwrap_err();
        assert!(err.is_user_declined());
    }
}

use crate::error::AppError;

/// Runs blocking work (JNI polling, image codecs) off the UI thread.
/// The browser has no threads, there the work runs inline.
pub async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::task::spawn_blocking(f)
            .await
            .map_err(|e| AppError::Other(format!("Task join error: {}", e)))?
    }

    #[cfg(target_arch = "wasm32")]
    {
        f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_result_is_passed_through() {
        assert_eq!(run_blocking(|| Ok(21 * 2)).await.unwrap(), 42);

        let err = run_blocking(|| -> Result<(), AppError> { Err(AppError::PickCancelled) })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PickCancelled));
    }
}

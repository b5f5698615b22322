use crate::background::run_blocking;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::gesture::StickerTransform;
use crate::session::Session;
use crate::stickers::PLACEHOLDER_IMAGE;
use chrono::{DateTime, Utc};
use media_library::{render_composite, CompositeLayout, ExportFormat, SavedImage};

/// What happened to an exported composite
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// Stored in the media library or pictures directory
    Saved(SavedImage),
    /// Handed to the browser as a download
    #[cfg_attr(not(any(target_arch = "wasm32", test)), allow(dead_code))]
    Downloaded(String),
}

/// e.g. `sticker-smash-20261018-105900-1a2b3c4d.png`
pub fn export_file_name(format: ExportFormat, now: DateTime<Utc>) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "sticker-smash-{}-{}.{}",
        now.format("%Y%m%d-%H%M%S"),
        &suffix[..8],
        format.extension()
    )
}

/// Flattens the current photo (or placeholder) and sticker into encoded bytes
pub fn render_session(
    session: &Session,
    transform: StickerTransform,
    layout: &CompositeLayout,
) -> Result<Vec<u8>, AppError> {
    let base = session.base_image.as_ref().unwrap_or(&PLACEHOLDER_IMAGE);
    let base_bytes = base.load_bytes()?;

    let sticker_bytes = session
        .chosen_sticker
        .as_ref()
        .map(|s| s.load_bytes())
        .transpose()?;
    let sticker = sticker_bytes
        .as_deref()
        .map(|bytes| (bytes, transform.placement()));

    Ok(render_composite(&base_bytes, sticker, layout)?)
}

/// Renders the session and saves it. Never touches the session itself.
pub async fn export_composite(
    session: Session,
    transform: StickerTransform,
    config: AppConfig,
) -> Result<ExportOutcome, AppError> {
    let granted = run_blocking(|| Ok(media_library::request_media_permission()?)).await?;
    if !granted {
        return Err(AppError::PermissionDenied(
            "media library access".to_string(),
        ));
    }

    let layout = config.composite_layout();
    let bytes = run_blocking(move || render_session(&session, transform, &layout)).await?;
    let file_name = export_file_name(config.export_format, Utc::now());
    log::info!("Rendered composite {} ({} bytes)", file_name, bytes.len());

    deliver(bytes, file_name, config).await
}

#[cfg(target_arch = "wasm32")]
async fn deliver(bytes: Vec<u8>, file_name: String, config: AppConfig) -> Result<ExportOutcome, AppError> {
    let url = crate::image_processing::bytes_to_data_url(config.export_format.mime_type(), &bytes);
    let js = format!(
        r#"
        const a = document.createElement("a");
        a.href = "{url}";
        a.download = "{file_name}";
        document.body.appendChild(a);
        a.click();
        a.remove();
        return true;
        "#
    );
    let clicked = dioxus::document::eval(&js).join::<bool>().await;
    download_outcome(clicked, file_name)
}

/// The download only counts once the script reports the click went through
#[cfg(any(target_arch = "wasm32", test))]
fn download_outcome<E: std::fmt::Debug>(
    clicked: Result<bool, E>,
    file_name: String,
) -> Result<ExportOutcome, AppError> {
    match clicked {
        Ok(true) => {
            log::info!("Composite handed to the browser as {}", file_name);
            Ok(ExportOutcome::Downloaded(file_name))
        }
        Ok(false) => Err(AppError::Export(format!(
            "Browser did not start the download of {}",
            file_name
        ))),
        Err(e) => Err(AppError::Export(format!(
            "Browser download of {} failed: {:?}",
            file_name, e
        ))),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn deliver(bytes: Vec<u8>, file_name: String, config: AppConfig) -> Result<ExportOutcome, AppError> {
    run_blocking(move || {
        let saved = match config.export_dir.as_ref().filter(|_| !cfg!(target_os = "android")) {
            Some(dir) => {
                let path = media_library::write_into_dir(dir, &file_name, &bytes)?;
                SavedImage {
                    location: path.to_string_lossy().to_string(),
                }
            }
            None => media_library::save_to_library(&bytes, &file_name)?,
        };
        log::info!("Composite saved to {}", saved.location);
        Ok(ExportOutcome::Saved(saved))
    })
    .await
}

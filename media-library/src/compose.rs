use crate::models::ExportFormat;
use image::{imageops, imageops::FilterType, DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

/// Error type for composite rendering
#[derive(Debug)]
pub enum ComposeError {
    ImageLoadError(String),
    ImageSaveError(String),
    InvalidLayout(String),
}

impl std::fmt::Display for ComposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComposeError::ImageLoadError(msg) => write!(f, "Image load error: {}", msg),
            ComposeError::ImageSaveError(msg) => write!(f, "Image save error: {}", msg),
            ComposeError::InvalidLayout(msg) => write!(f, "Invalid layout: {}", msg),
        }
    }
}

impl std::error::Error for ComposeError {}

/// Largest exported edge in pixels
pub const MAX_OUTPUT_EDGE: u32 = 8192;

/// Output geometry of the composite
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeLayout {
    /// Frame size in view units, as shown on screen
    pub frame_width: u32,
    pub frame_height: u32,
    /// Pixels per view unit in the exported image
    pub scale: f32,
    pub format: ExportFormat,
    /// Only used for JPEG
    pub jpeg_quality: u8,
}

impl Default for CompositeLayout {
    fn default() -> Self {
        Self {
            frame_width: 320,
            frame_height: 440,
            scale: 2.0,
            format: ExportFormat::Png,
            jpeg_quality: 90,
        }
    }
}

impl CompositeLayout {
    /// Pixel size of the exported image
    pub fn output_size(&self) -> (u32, u32) {
        (
            scale_px(self.frame_width as f32, self.scale),
            scale_px(self.frame_height as f32, self.scale),
        )
    }

    fn validate(&self) -> Result<(), ComposeError> {
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(ComposeError::InvalidLayout("frame has no area".to_string()));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ComposeError::InvalidLayout(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        let (width, height) = self.output_size();
        if width.max(height) > MAX_OUTPUT_EDGE {
            return Err(ComposeError::InvalidLayout(format!(
                "output {}x{} exceeds {} pixels per edge",
                width, height, MAX_OUTPUT_EDGE
            )));
        }
        Ok(())
    }
}

/// Where the sticker sits on the frame, in view units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickerPlacement {
    /// Top-left corner of the sticker box
    pub x: f32,
    pub y: f32,
    /// Edge length of the square sticker box
    pub size: f32,
}

fn scale_px(value: f32, scale: f32) -> u32 {
    (value * scale).round().max(1.0) as u32
}

fn decode(bytes: &[u8], what: &str) -> Result<DynamicImage, ComposeError> {
    image::load_from_memory(bytes)
        .map_err(|e| ComposeError::ImageLoadError(format!("Failed to load {}: {}", what, e)))
}

/// Flattens base image and optional sticker into one encoded image.
///
/// The base image covers the frame (centre crop), the sticker keeps its aspect
/// ratio inside its box. Parts of the sticker outside the frame are clipped.
pub fn render_composite(
    base: &[u8],
    sticker: Option<(&[u8], StickerPlacement)>,
    layout: &CompositeLayout,
) -> Result<Vec<u8>, ComposeError> {
    layout.validate()?;
    let (out_w, out_h) = layout.output_size();

    let base_img = decode(base, "base image")?;
    log::debug!(
        "Compositing {}x{} base into {}x{} canvas",
        base_img.width(),
        base_img.height(),
        out_w,
        out_h
    );
    let mut canvas: RgbaImage = base_img
        .resize_to_fill(out_w, out_h, FilterType::Lanczos3)
        .to_rgba8();

    if let Some((sticker_bytes, placement)) = sticker {
        let sticker_img = decode(sticker_bytes, "sticker")?;
        let side = scale_px(placement.size, layout.scale);
        let resized = sticker_img.resize(side, side, FilterType::Lanczos3).to_rgba8();

        // Centre inside the square box, like `contain` on screen
        let left = (placement.x * layout.scale).round() as i64
            + (side as i64 - resized.width() as i64) / 2;
        let top = (placement.y * layout.scale).round() as i64
            + (side as i64 - resized.height() as i64) / 2;

        imageops::overlay(&mut canvas, &resized, left, top);
    }

    encode(canvas, layout)
}

fn encode(canvas: RgbaImage, layout: &CompositeLayout) -> Result<Vec<u8>, ComposeError> {
    let mut buffer = Cursor::new(Vec::new());
    match layout.format {
        ExportFormat::Png => {
            DynamicImage::ImageRgba8(canvas)
                .write_to(&mut buffer, ImageFormat::Png)
                .map_err(|e| {
                    ComposeError::ImageSaveError(format!("Failed to encode PNG: {}", e))
                })?;
        }
        ExportFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
            let mut encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, layout.jpeg_quality);
            encoder.encode_image(&rgb).map_err(|e| {
                ComposeError::ImageSaveError(format!("Failed to encode JPEG: {}", e))
            })?;
        }
    }
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba};

    fn png_of(width: u32, height: u32, color: Rgba<u8>) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, color);
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buffer, ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    fn small_layout() -> CompositeLayout {
        CompositeLayout {
            frame_width: 32,
            frame_height: 44,
            scale: 2.0,
            format: ExportFormat::Png,
            jpeg_quality: 90,
        }
    }

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn is_blueish(p: Rgba<u8>) -> bool {
        p[2] >= 245 && p[0] <= 10
    }

    fn is_reddish(p: Rgba<u8>) -> bool {
        p[0] >= 245 && p[2] <= 10
    }

    #[test]
    fn test_output_size() {
        assert_eq!(CompositeLayout::default().output_size(), (640, 880));
        assert_eq!(small_layout().output_size(), (64, 88));
    }

    #[test]
    fn test_base_only_has_scaled_frame_size() {
        let base = png_of(64, 88, RED);
        let out = render_composite(&base, None, &small_layout()).unwrap();
        let img = image::load_from_memory(&out).unwrap();
        assert_eq!(img.dimensions(), (64, 88));
        assert!(is_reddish(img.get_pixel(32, 44)));
    }

    #[test]
    fn test_base_is_cropped_to_cover_frame() {
        // Wide base, tall frame
        let base = png_of(400, 100, RED);
        let out = render_composite(&base, None, &small_layout()).unwrap();
        let img = image::load_from_memory(&out).unwrap();
        assert_eq!(img.dimensions(), (64, 88));
    }

    #[test]
    fn test_sticker_lands_at_scaled_offset() {
        let base = png_of(64, 88, RED);
        let sticker = png_of(10, 10, BLUE);
        let placement = StickerPlacement {
            x: 4.0,
            y: 6.0,
            size: 5.0,
        };
        let out = render_composite(&base, Some((&sticker, placement)), &small_layout()).unwrap();
        let img = image::load_from_memory(&out).unwrap().to_rgba8();

        // Sticker box spans (8..18, 12..22)
        assert!(is_blueish(*img.get_pixel(13, 17)));
        assert!(is_reddish(*img.get_pixel(2, 2)));
        assert!(is_reddish(*img.get_pixel(30, 30)));
    }

    #[test]
    fn test_sticker_outside_frame_is_clipped() {
        let base = png_of(64, 88, RED);
        let sticker = png_of(10, 10, BLUE);
        let placement = StickerPlacement {
            x: -100.0,
            y: 500.0,
            size: 5.0,
        };
        let out = render_composite(&base, Some((&sticker, placement)), &small_layout()).unwrap();
        let img = image::load_from_memory(&out).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (64, 88));
        assert!(img.pixels().all(|p| is_reddish(*p)));
    }

    #[test]
    fn test_transparent_sticker_keeps_base() {
        let base = png_of(64, 88, RED);
        let sticker = png_of(10, 10, Rgba([0, 0, 255, 0]));
        let placement = StickerPlacement {
            x: 0.0,
            y: 0.0,
            size: 5.0,
        };
        let out = render_composite(&base, Some((&sticker, placement)), &small_layout()).unwrap();
        let img = image::load_from_memory(&out).unwrap().to_rgba8();
        assert!(is_reddish(*img.get_pixel(5, 5)));
    }

    #[test]
    fn test_jpeg_output() {
        let base = png_of(64, 88, RED);
        let layout = CompositeLayout {
            format: ExportFormat::Jpeg,
            ..small_layout()
        };
        let out = render_composite(&base, None, &layout).unwrap();
        assert_eq!(
            image::guess_format(&out).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_invalid_inputs() {
        let layout = CompositeLayout {
            scale: 0.0,
            ..small_layout()
        };
        assert!(matches!(
            render_composite(&png_of(4, 4, RED), None, &layout),
            Err(ComposeError::InvalidLayout(_))
        ));
        assert!(matches!(
            render_composite(b"not an image", None, &small_layout()),
            Err(ComposeError::ImageLoadError(_))
        ));
    }

    #[test]
    fn test_oversized_output_rejected_before_allocating() {
        let layout = CompositeLayout {
            frame_width: 100_000,
            frame_height: 440,
            scale: 8.0,
            ..small_layout()
        };
        assert!(matches!(
            render_composite(&png_of(4, 4, RED), None, &layout),
            Err(ComposeError::InvalidLayout(_))
        ));
    }
}

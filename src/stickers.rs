use crate::image_processing::image_ref_to_data_url;
use media_library::ImageRef;
use std::sync::OnceLock;

/// Photo shown until the user picks one
pub static PLACEHOLDER_IMAGE: ImageRef = ImageRef::Embedded {
    name: "background-image.png",
    bytes: include_bytes!("../assets/images/background-image.png"),
};

/// Stickers offered by the emoji picker, in display order
pub static STICKERS: [ImageRef; 6] = [
    ImageRef::Embedded {
        name: "emoji1.png",
        bytes: include_bytes!("../assets/stickers/emoji1.png"),
    },
    ImageRef::Embedded {
        name: "emoji2.png",
        bytes: include_bytes!("../assets/stickers/emoji2.png"),
    },
    ImageRef::Embedded {
        name: "emoji3.png",
        bytes: include_bytes!("../assets/stickers/emoji3.png"),
    },
    ImageRef::Embedded {
        name: "emoji4.png",
        bytes: include_bytes!("../assets/stickers/emoji4.png"),
    },
    ImageRef::Embedded {
        name: "emoji5.png",
        bytes: include_bytes!("../assets/stickers/emoji5.png"),
    },
    ImageRef::Embedded {
        name: "emoji6.png",
        bytes: include_bytes!("../assets/stickers/emoji6.png"),
    },
];

/// Catalog stickers with their data URLs, encoded on first use.
/// Stickers that fail to encode are left out.
pub fn catalog() -> &'static [(ImageRef, String)] {
    static CATALOG: OnceLock<Vec<(ImageRef, String)>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        STICKERS
            .iter()
            .filter_map(|sticker| match image_ref_to_data_url(sticker) {
                Ok(url) => Some((sticker.clone(), url)),
                Err(e) => {
                    log::warn!("Skipping sticker {}: {}", sticker.name(), e);
                    None
                }
            })
            .collect()
    })
}

/// Cached data URL of a catalog sticker
pub fn sticker_data_url(sticker: &ImageRef) -> Option<&'static str> {
    catalog()
        .iter()
        .find(|(s, _)| s == sticker)
        .map(|(_, url)| url.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_images_decode() {
        for sticker in STICKERS.iter().chain(std::iter::once(&PLACEHOLDER_IMAGE)) {
            let bytes = sticker.load_bytes().unwrap();
            assert!(
                image::load_from_memory(&bytes).is_ok(),
                "{} does not decode",
                sticker.name()
            );
        }
    }

    #[test]
    fn test_sticker_names_are_unique() {
        let mut names: Vec<String> = STICKERS.iter().map(|s| s.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), STICKERS.len());
    }

    #[test]
    fn test_catalog_urls_are_encoded_once() {
        assert_eq!(catalog().len(), STICKERS.len());
        let first = sticker_data_url(&STICKERS[2]).unwrap();
        let again = sticker_data_url(&STICKERS[2]).unwrap();
        assert!(std::ptr::eq(first, again));
        assert!(first.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_unknown_sticker_has_no_cached_url() {
        let photo = ImageRef::file("/photos/holiday.jpg");
        assert!(sticker_data_url(&photo).is_none());
    }
}

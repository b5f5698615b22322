use crate::image_processing::image_ref_to_data_url;
use crate::stickers::PLACEHOLDER_IMAGE;
use dioxus::prelude::*;

/// Shows the selected photo, or the bundled placeholder when there is none
#[component]
pub fn ImageViewer(selected_image: Option<String>, alt: String, width: u32, height: u32) -> Element {
    let placeholder = use_hook(|| match image_ref_to_data_url(&PLACEHOLDER_IMAGE) {
        Ok(url) => url,
        Err(e) => {
            log::error!("Placeholder image unavailable: {}", e);
            String::new()
        }
    });

    let src = selected_image.unwrap_or(placeholder);

    rsx! {
        img {
            src: "{src}",
            alt: "{alt}",
            draggable: "false",
            style: "width: {width}px; height: {height}px; border-radius: 18px; object-fit: cover; display: block;",
        }
    }
}

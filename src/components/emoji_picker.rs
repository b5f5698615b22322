use crate::stickers::catalog;
use dioxus::prelude::*;
use media_library::ImageRef;

/// Bottom sheet hosting the sticker list
#[component]
pub fn EmojiPicker(
    is_visible: bool,
    title: String,
    close_label: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !is_visible {
        return rsx! {};
    }

    rsx! {
        div { class: "modal-content",
            div { class: "modal-title-container",
                span { class: "modal-title", "{title}" }
                button {
                    class: "modal-close",
                    title: "{close_label}",
                    aria_label: "{close_label}",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            {children}
        }
    }
}

/// Horizontal list of the sticker catalog
#[component]
pub fn EmojiList(on_select: EventHandler<ImageRef>) -> Element {
    rsx! {
        div { class: "emoji-list",
            for (sticker, name, url) in catalog().iter().map(|(s, u)| (s, s.name(), u)) {
                button {
                    key: "{name}",
                    class: "emoji-list-item",
                    onclick: move |_| on_select.call(sticker.clone()),
                    img {
                        src: "{url}",
                        alt: "{name}",
                        draggable: "false",
                        style: "width: 100px; height: 100px; margin-right: 20px;",
                    }
                }
            }
        }
    }
}

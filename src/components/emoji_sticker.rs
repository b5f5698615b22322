use crate::gesture::{DragState, StickerTransform};
use crate::stickers::sticker_data_url;
use dioxus::prelude::*;
use media_library::ImageRef;

// Overshooting curve stands in for a spring
const SPRING_TRANSITION: &str =
    "left 0.25s cubic-bezier(.34,1.56,.64,1), top 0.25s cubic-bezier(.34,1.56,.64,1), width 0.25s cubic-bezier(.34,1.56,.64,1), height 0.25s cubic-bezier(.34,1.56,.64,1)";

/// Sticker on top of the photo frame. Drag to move, double-tap to resize.
///
/// The transform is owned by the caller so the export can read it; the
/// in-progress drag stays local.
#[component]
pub fn EmojiSticker(
    sticker: ImageRef,
    alt: String,
    transform: Signal<StickerTransform>,
    frame_width: u32,
    frame_height: u32,
) -> Element {
    let mut transform = transform;
    let mut drag = use_signal(|| None::<DragState>);

    // Encoded once per sticker; drags re-render on every pointer move
    let Some(src) = sticker_data_url(&sticker) else {
        log::error!("Sticker {} is not in the catalog", sticker.name());
        return rsx! {};
    };

    let t = transform();
    let dragging = drag().is_some();
    let transition = if dragging { "none" } else { SPRING_TRANSITION };
    // While dragging the layer catches moves that leave the sticker
    let layer_events = if dragging { "auto" } else { "none" };

    let mut move_to = move |x: f64, y: f64| {
        if let Some(state) = drag() {
            transform.set(state.update(x, y, frame_width, frame_height));
        }
    };

    rsx! {
        div {
            style: "position: absolute; inset: 0; pointer-events: {layer_events}; touch-action: none;",
            onpointermove: move |e| {
                let p = e.client_coordinates();
                move_to(p.x, p.y);
            },
            onpointerup: move |_| drag.set(None),
            onpointercancel: move |_| drag.set(None),
            onpointerleave: move |_| drag.set(None),

            img {
                src: "{src}",
                alt: "{alt}",
                draggable: "false",
                style: "position: absolute; left: {t.x}px; top: {t.y}px; width: {t.size}px; height: {t.size}px; object-fit: contain; pointer-events: auto; touch-action: none; cursor: grab; user-select: none; transition: {transition};",
                onpointerdown: move |e| {
                    e.prevent_default();
                    let p = e.client_coordinates();
                    drag.set(Some(DragState::begin(p.x, p.y, transform())));
                },
                onpointermove: move |e| {
                    let p = e.client_coordinates();
                    move_to(p.x, p.y);
                },
                onpointerup: move |_| drag.set(None),
                ondoubleclick: move |_| {
                    drag.set(None);
                    transform.set(transform().toggled_scale());
                },
            }
        }
    }
}

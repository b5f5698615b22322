use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;
use dioxus_i18n::t;

mod background;
mod components;
mod config;
mod error;
mod export;
mod filesystem;
mod gesture;
mod i18n;
mod image_processing;
mod picker;
mod session;
mod stickers;

use components::{
    Button, ButtonTheme, CircleButton, EmojiList, EmojiPicker, EmojiSticker, IconButton,
    ImageViewer, Notice, NoticeBanner,
};
use config::AppConfig;
use error::AppError;
use export::ExportOutcome;
use gesture::StickerTransform;
use session::{PickOutcome, Session};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    log::info!("Starting Sticker Smash {}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}

fn init_logging() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("stickersmash"),
    );

    #[cfg(not(target_os = "android"))]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        if let Err(e) = env_logger::Builder::from_env(env).try_init() {
            eprintln!("Logger already initialised: {}", e);
        }
    }
}

/// Turns an error into a notice; declines are hints, everything else is logged
fn notice_for(error: &AppError) -> Notice {
    if error.is_user_declined() {
        log::info!("{}", error);
        Notice::Info(t!(error.message_key()))
    } else {
        log::error!("{}", error);
        Notice::Error(t!(error.message_key()))
    }
}

#[component]
fn App() -> Element {
    let config = use_signal(AppConfig::load_or_default);
    use_init_i18n(move || i18n::init_i18n(&config.peek().locale));

    let mut session = use_signal(Session::new);
    let mut base_preview = use_signal(|| None::<String>);
    let transform = use_signal(|| {
        let c = config.peek();
        StickerTransform::initial(c.frame_width, c.frame_height, c.sticker_size)
    });
    let mut notice = use_signal(|| None::<Notice>);
    // One picker or export at a time
    let mut busy = use_signal(|| false);

    let (frame_width, frame_height) = {
        let c = config.read();
        (c.frame_width, c.frame_height)
    };

    let pick_image = move |_: MouseEvent| {
        if busy() {
            return;
        }
        busy.set(true);
        notice.set(None);
        spawn(async move {
            let picked = match picker::select_base_image().await {
                Ok(PickOutcome::Selected(image)) => {
                    let (max_w, max_h) = config.read().composite_layout().output_size();
                    picker::preview_url(image.clone(), max_w, max_h)
                        .await
                        .map(|url| (PickOutcome::Selected(image), Some(url)))
                }
                Ok(PickOutcome::Cancelled) => Ok((PickOutcome::Cancelled, None)),
                Err(e) => Err(e),
            };
            match picked {
                Ok((outcome, preview)) => {
                    let cancelled = outcome == PickOutcome::Cancelled;
                    if let Some(url) = preview {
                        base_preview.set(Some(url));
                    }
                    session.write().apply_pick(outcome);
                    if cancelled {
                        notice.set(Some(notice_for(&AppError::PickCancelled)));
                    }
                }
                Err(e) => notice.set(Some(notice_for(&e))),
            }
            busy.set(false);
        });
    };

    let save_image = move |_: MouseEvent| {
        if busy() {
            return;
        }
        busy.set(true);
        notice.set(None);
        let snapshot = session.read().clone();
        let placement = transform();
        let config = config.read().clone();
        spawn(async move {
            match export::export_composite(snapshot, placement, config).await {
                Ok(ExportOutcome::Saved(saved)) => notice.set(Some(Notice::Success(t!(
                    "notice-saved",
                    location: saved.location
                )))),
                Ok(ExportOutcome::Downloaded(file)) => {
                    notice.set(Some(Notice::Success(t!("notice-downloaded", file: file))))
                }
                Err(e) => notice.set(Some(notice_for(&e))),
            }
            busy.set(false);
        });
    };

    let current = session.read().clone();

    rsx! {
        document::Title { {t!("app-title")} }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "container",
            div { class: "image-container",
                div {
                    class: "frame",
                    style: "width: {frame_width}px; height: {frame_height}px;",
                    ImageViewer {
                        selected_image: base_preview(),
                        alt: t!("photo-alt"),
                        width: frame_width,
                        height: frame_height,
                    }
                    if let Some(sticker) = current.chosen_sticker.clone() {
                        EmojiSticker {
                            alt: t!("sticker-alt", name: sticker.name()),
                            sticker: sticker.clone(),
                            transform,
                            frame_width,
                            frame_height,
                        }
                    }
                }
            }

            if current.options_visible {
                div { class: "option-container",
                    div { class: "options-row",
                        IconButton {
                            icon: "↻",
                            label: t!("action-reset"),
                            on_press: move |_| session.write().reset_options(),
                        }
                        CircleButton {
                            label: t!("action-add-sticker"),
                            on_press: move |_| session.write().open_sticker_picker(),
                        }
                        IconButton {
                            icon: "⤓",
                            label: if busy() { t!("action-saving") } else { t!("action-save") },
                            disabled: busy(),
                            on_press: save_image,
                        }
                    }
                }
            } else {
                div { class: "footer-container",
                    Button {
                        theme: ButtonTheme::Primary,
                        label: if busy() { t!("action-loading") } else { t!("action-choose-photo") },
                        disabled: busy(),
                        on_press: pick_image,
                    }
                    Button {
                        label: t!("action-use-photo"),
                        on_press: move |_| session.write().use_current_photo(),
                    }
                }
            }

            NoticeBanner {
                notice: notice(),
                hint: t!("notice-dismiss"),
                on_dismiss: move |_| notice.set(None),
            }

            EmojiPicker {
                is_visible: current.picker_visible,
                title: t!("picker-title"),
                close_label: t!("action-close"),
                on_close: move |_| session.write().close_sticker_picker(),
                EmojiList { on_select: move |sticker| session.write().choose_sticker(sticker) }
            }
        }
    }
}

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum ButtonTheme {
    Primary,
    #[default]
    Plain,
}

/// Wide footer button
#[component]
pub fn Button(
    label: String,
    #[props(default)] theme: ButtonTheme,
    #[props(default = false)] disabled: bool,
    on_press: EventHandler<MouseEvent>,
) -> Element {
    let class = match theme {
        ButtonTheme::Primary => "footer-button footer-button-primary",
        ButtonTheme::Plain => "footer-button",
    };

    rsx! {
        div { class: "footer-button-container",
            button {
                class: "{class}",
                disabled,
                onclick: move |e| on_press.call(e),
                if theme == ButtonTheme::Primary {
                    span { style: "margin-right: 8px;", "🖼️" }
                }
                "{label}"
            }
        }
    }
}

/// Icon with a caption below, used in the options row
#[component]
pub fn IconButton(
    icon: String,
    label: String,
    #[props(default = false)] disabled: bool,
    on_press: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "icon-button",
            disabled,
            onclick: move |e| on_press.call(e),
            span { style: "font-size: 24px; line-height: 24px;", "{icon}" }
            span { class: "icon-button-label", "{label}" }
        }
    }
}

/// Round "+" button that opens the sticker picker
#[component]
pub fn CircleButton(label: String, on_press: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "circle-button-container",
            button {
                class: "circle-button",
                title: "{label}",
                aria_label: "{label}",
                onclick: move |e| on_press.call(e),
                "+"
            }
        }
    }
}

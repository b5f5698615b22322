use dioxus::prelude::*;

/// Transient message shown above the footer
#[derive(Clone, PartialEq, Debug)]
pub enum Notice {
    Info(String),
    Success(String),
    Error(String),
}

impl Notice {
    fn colors(&self) -> (&'static str, &'static str) {
        match self {
            Notice::Info(_) => ("#eef4ff", "#24509a"),
            Notice::Success(_) => ("#efe", "#2f7a2f"),
            Notice::Error(_) => ("#fee", "#c33"),
        }
    }

    fn text(&self) -> &str {
        match self {
            Notice::Info(t) | Notice::Success(t) | Notice::Error(t) => t,
        }
    }
}

#[component]
pub fn NoticeBanner(notice: Option<Notice>, hint: String, on_dismiss: EventHandler<()>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };
    let (background, color) = notice.colors();
    let text = notice.text().to_string();
    let icon = match notice {
        Notice::Info(_) => "ℹ️",
        Notice::Success(_) => "✅",
        Notice::Error(_) => "⚠️",
    };

    rsx! {
        div {
            class: "notice",
            style: "background: {background}; color: {color};",
            title: "{hint}",
            onclick: move |_| on_dismiss.call(()),
            "{icon} {text}"
        }
    }
}

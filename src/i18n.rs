use dioxus_i18n::prelude::*;
use unic_langid::{langid, LanguageIdentifier};

/// Initialize i18n with the configured language and English as fallback
pub fn init_i18n(locale: &str) -> I18nConfig {
    let language: LanguageIdentifier = locale.parse().unwrap_or_else(|e| {
        log::warn!("Unknown locale {:?} ({}), using en-US", locale, e);
        langid!("en-US")
    });

    I18nConfig::new(language)
        .with_locale(Locale::new_static(
            langid!("en-US"),
            include_str!("../locales/en-US.ftl"),
        ))
        .with_locale(Locale::new_static(
            langid!("de-DE"),
            include_str!("../locales/de-DE.ftl"),
        ))
        .with_fallback(langid!("en-US"))
}

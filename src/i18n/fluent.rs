// SPDX-License-Identifier: MPL-2.0
use super::DEFAULT_LOCALE;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use log::warn;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("available_locales", &self.available_locales)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None)
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                warn!("Ignoring translation file with invalid locale: {filename}");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    warn!("{filename}: {} syntax error(s) in translation file", errors.len());
                    resource
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Isolation marks would end up verbatim in window titles and dialogs.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                warn!("{filename}: {} duplicate message(s)", errors.len());
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .expect("default locale identifier is valid");
        let current_locale = resolve_locale(cli_lang, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting `{ $name }` placeables from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let lang_str = cli_lang?;
    match lang_str.parse::<LanguageIdentifier>() {
        Ok(lang) if available.contains(&lang) => Some(lang),
        _ => {
            warn!("Locale {lang_str:?} is not available, using {DEFAULT_LOCALE}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale_cli() {
        let available: Vec<LanguageIdentifier> =
            vec!["zh-CN".parse().unwrap(), "en-US".parse().unwrap()];
        let lang = resolve_locale(Some("en-US".to_string()), &available);
        assert_eq!(lang, Some("en-US".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_unknown_falls_through() {
        let available: Vec<LanguageIdentifier> = vec!["zh-CN".parse().unwrap()];
        assert_eq!(resolve_locale(Some("fr".to_string()), &available), None);
        assert_eq!(resolve_locale(Some("not a locale".to_string()), &available), None);
        assert_eq!(resolve_locale(None, &available), None);
    }

    #[test]
    fn default_locale_is_simplified_chinese() {
        let i18n = I18n::default();
        assert_eq!(i18n.current_locale().to_string(), "zh-CN");
        assert_eq!(i18n.tr("error-not-found"), "无法找到此文件");
        assert_eq!(i18n.tr("error-title"), "错误");
    }

    #[test]
    fn english_locale_is_available() {
        let i18n = I18n::new(Some("en-US".to_string()));
        assert_eq!(i18n.current_locale().to_string(), "en-US");
        assert_eq!(i18n.tr("menu-file-open"), "Open Image...");
    }

    #[test]
    fn every_locale_defines_the_same_keys() {
        let i18n = I18n::default();
        let zh = &i18n.bundles[&"zh-CN".parse::<LanguageIdentifier>().unwrap()];
        let en = &i18n.bundles[&"en-US".parse::<LanguageIdentifier>().unwrap()];
        for key in [
            "window-title",
            "menu-file",
            "menu-edit",
            "menu-help",
            "prompt-zoom-title",
            "prompt-rotate-title",
            "error-load",
            "error-zoom",
            "error-rotate",
            "error-flip",
            "about-version",
            "about-copyright",
        ] {
            assert!(zh.has_message(key), "zh-CN is missing {key}");
            assert!(en.has_message(key), "en-US is missing {key}");
        }
    }

    #[test]
    fn tr_with_args_substitutes_placeables() {
        let i18n = I18n::default();
        assert_eq!(
            i18n.tr_with_args("error-zoom", &[("error", "boom")]),
            "缩放图片时发生错误: boom"
        );
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }
}

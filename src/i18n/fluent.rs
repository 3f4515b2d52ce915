// SPDX-License-Identifier: MPL-2.0
//! Fluent-based translation loading and lookup.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Translation bundles for every embedded locale plus the active selection.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded `.ftl` bundle and picks the active locale from
    /// the CLI flag, then the config file, then the system locale, falling
    /// back to `en-US`.
    #[must_use]
    pub fn new(cli_lang: Option<&str>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            // Embedded catalogs are part of the build; a malformed one is a
            // packaging bug and may fail loudly.
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source).expect("Failed to parse FTL file.");
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle
                .add_resource(resource)
                .expect("Failed to add FTL resource.");
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        available_locales.sort();

        let default_locale: LanguageIdentifier =
            "en-US".parse().expect("default locale literal");
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches the active locale if a bundle for it exists.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Looks up `key` in the active bundle.
    ///
    /// Missing keys resolve to a visible `MISSING:` marker instead of an
    /// error, so an incomplete catalog never takes a screen down.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Looks up `key` with named arguments.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(message) = bundle.get_message(key) {
                if let Some(pattern) = message.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {key}")
    }
}

fn resolve_locale(
    cli_lang: Option<&str>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI flag
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_flag_wins_over_config() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr"), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_applies_without_cli() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_preferences_fall_through() {
        let mut config = Config::default();
        config.general.language = Some("tlh".to_string());
        let lang = resolve_locale(Some("xx-XX"), &config, &available());
        // Whatever the host system reports, it is never one of the two
        // rigged preferences above.
        if let Some(l) = lang {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn embedded_catalogs_load_and_translate() {
        let i18n = I18n::default();
        assert!(i18n.available_locales().len() >= 2);

        let label = i18n.tr("app-title");
        assert!(!label.starts_with("MISSING:"));
    }

    #[test]
    fn missing_keys_are_marked_not_fatal() {
        let i18n = I18n::default();
        assert_eq!(
            i18n.tr("definitely-not-a-key"),
            "MISSING: definitely-not-a-key"
        );
    }

    #[test]
    fn switching_locale_changes_translations() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        let english = i18n.tr("nav-settings");
        i18n.set_locale("fr".parse().unwrap());
        let french = i18n.tr("nav-settings");
        assert_ne!(english, french);
    }

    #[test]
    fn arguments_are_interpolated() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        let title = i18n.tr_with_args("app-title-alerts", &[("count", "3")]);
        assert!(title.contains('3'));
    }
}

// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale whose bundle backs every missing translation.
const FALLBACK_LOCALE: &str = "en";

/// Fluent-backed string catalog.
///
/// Holds one bundle per embedded `.ftl` file. The active bundle follows the
/// resolved UI locale: an exact match wins, then a bundle sharing the
/// language subtag, then the fallback bundle. Locales from the supported
/// table without a translation file simply render the fallback strings.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        let fallback: LanguageIdentifier = FALLBACK_LOCALE.parse().unwrap();
        Self::new(&fallback)
    }
}

impl I18n {
    pub fn new(locale: &LanguageIdentifier) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let res = FluentResource::try_new(
                            String::from_utf8_lossy(content.data.as_ref()).to_string(),
                        )
                        .expect("Failed to parse FTL file.");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        bundle.add_resource(res).expect("Failed to add resource.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }

        let fallback_locale: LanguageIdentifier = FALLBACK_LOCALE.parse().unwrap();
        let mut i18n = Self {
            bundles,
            available_locales,
            current_locale: fallback_locale.clone(),
            fallback_locale,
        };
        i18n.set_locale(locale);
        i18n
    }

    /// Points string lookup at the bundle that best matches `locale`.
    pub fn set_locale(&mut self, locale: &LanguageIdentifier) {
        self.current_locale = self.best_match(locale);
    }

    /// The locale of the bundle currently used for lookup.
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Locales with an embedded translation file.
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Looks up a message by key in the active bundle, falling back to the
    /// fallback bundle for untranslated keys.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Like [`I18n::tr`], with Fluent arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(value) = self.format_in(&self.current_locale, key, args) {
            return value;
        }
        if let Some(value) = self.format_in(&self.fallback_locale, key, args) {
            return value;
        }
        format!("MISSING: {}", key)
    }

    fn format_in(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }

    fn best_match(&self, wanted: &LanguageIdentifier) -> LanguageIdentifier {
        if self.bundles.contains_key(wanted) {
            return wanted.clone();
        }
        if let Some(language_match) = self
            .available_locales
            .iter()
            .find(|available| available.language == wanted.language)
        {
            return language_match.clone();
        }
        self.fallback_locale.clone()
    }
}

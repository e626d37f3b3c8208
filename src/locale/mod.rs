// SPDX-License-Identifier: MPL-2.0
//! Supported UI locales and the active culture state.
//!
//! The launcher ships a curated table of locale identifiers and their native
//! display names. The language picker works in display names, so this module
//! provides the reverse lookup back to identifiers, plus the [`Locale`]
//! context that resolves an identifier into a concrete language identifier
//! and the derived right-to-left flag.
//!
//! [`Locale`] is an explicit value owned by the application state and passed
//! into the UI layer, rather than process-wide mutable state.

use unic_langid::LanguageIdentifier;

/// Identifier meaning "use whatever the host environment reports".
pub const SENTINEL: &str = "nil";

/// Number of leading table entries that keep their position in the picker.
pub const PINNED: usize = 3;

/// Identifier prefixes that force right-to-left layout.
const RTL_PREFIXES: [&str; 3] = ["ar", "he", "fa"];

/// Supported locales, as `(identifier, native display name)` pairs.
///
/// Declaration order matters: the sentinel and the two English entries come
/// first and stay pinned in the picker; the rest is sorted for display.
pub const SUPPORTED_LOCALES: &[(&str, &str)] = &[
    (SENTINEL, "System default"),
    ("en", "English"),
    ("en-US", "English (United States)"),
    ("ar", "العربية"),
    ("bg", "Български"),
    ("bn", "বাংলা"),
    ("bs", "Bosanski"),
    ("cs", "Čeština"),
    ("de", "Deutsch"),
    ("dk", "Dansk"),
    ("es-ES", "Español"),
    ("el", "Ελληνικά"),
    ("fa", "فارسی"),
    ("fi", "Suomi"),
    ("fil", "Filipino"),
    ("fr", "Français"),
    ("he", "עברית"),
    ("hi", "Hindi (Latin)"),
    ("hr", "Hrvatski"),
    ("hu", "Magyar"),
    ("id", "Bahasa Indonesia"),
    ("it", "Italiano"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("lt", "Lietuvių"),
    ("ms", "Malay"),
    ("nl", "Nederlands"),
    ("no", "Bokmål"),
    ("pl", "Polski"),
    ("pt-BR", "Português (Brasil)"),
    ("ro", "Română"),
    ("ru", "Русский"),
    ("sv-SE", "Svenska"),
    ("th", "ภาษาไทย"),
    ("tr", "Türkçe"),
    ("uk", "Українська"),
    ("vi", "Tiếng Việt"),
    ("zh-CN", "中文 (简体)"),
    ("zh-HK", "中文 (廣東話)"),
    ("zh-TW", "中文 (繁體)"),
];

/// Returns true if `identifier` is a key of the supported-locale table.
pub fn is_supported(identifier: &str) -> bool {
    SUPPORTED_LOCALES.iter().any(|(id, _)| *id == identifier)
}

/// Returns the native display name for a supported identifier.
pub fn display_name(identifier: &str) -> Option<&'static str> {
    SUPPORTED_LOCALES
        .iter()
        .find(|(id, _)| *id == identifier)
        .map(|(_, name)| *name)
}

/// Reverse lookup from a display name to its identifier.
///
/// Total: any name not found in the table maps to [`SENTINEL`]. This is also
/// how the picker's localized "system default" row resolves, since that label
/// is substituted at render time and never matches a table entry verbatim.
pub fn identifier_from_name(name: &str) -> &'static str {
    SUPPORTED_LOCALES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(id, _)| *id)
        .unwrap_or(SENTINEL)
}

/// Ordered display names for the language picker.
///
/// The first [`PINNED`] entries keep their table order, the remainder is
/// sorted alphabetically, and index 0 is replaced with the caller-supplied
/// localized "system default" label so it tracks the active UI language.
/// Callers should invoke this fresh whenever the list is displayed.
pub fn language_names(system_default_label: &str) -> Vec<String> {
    let mut names: Vec<String> = SUPPORTED_LOCALES
        .iter()
        .take(PINNED)
        .map(|(_, name)| (*name).to_string())
        .collect();

    let mut rest: Vec<String> = SUPPORTED_LOCALES
        .iter()
        .map(|(_, name)| (*name).to_string())
        .filter(|name| !names.contains(name))
        .collect();
    rest.sort();
    names.extend(rest);

    names[0] = system_default_label.to_string();
    names
}

/// Resolved UI culture: the active language identifier and its derived
/// layout direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    current: LanguageIdentifier,
    right_to_left: bool,
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(SENTINEL)
    }
}

impl Locale {
    /// Resolves `identifier` into a ready-to-use locale context.
    pub fn new(identifier: &str) -> Self {
        let mut locale = Self {
            current: fallback_locale(),
            right_to_left: false,
        };
        locale.set(identifier);
        locale
    }

    /// Switches the active culture.
    ///
    /// Unknown identifiers are silently normalized to [`SENTINEL`], which
    /// adopts the host environment's locale. Recomputes the right-to-left
    /// flag afterwards. Never fails.
    pub fn set(&mut self, identifier: &str) {
        let identifier = if is_supported(identifier) {
            identifier
        } else {
            SENTINEL
        };

        self.current = if identifier == SENTINEL {
            host_locale()
        } else {
            // Table identifiers are curated and always parse.
            identifier.parse().unwrap_or_else(|_| host_locale())
        };

        let name = self.current.to_string();
        self.right_to_left = RTL_PREFIXES.iter().any(|prefix| name.starts_with(prefix));
    }

    /// The active language identifier.
    pub fn current(&self) -> &LanguageIdentifier {
        &self.current
    }

    /// True when the active culture lays text out right-to-left.
    pub fn right_to_left(&self) -> bool {
        self.right_to_left
    }
}

/// The locale the host environment reports, or `en-US` when it reports
/// nothing parseable.
fn host_locale() -> LanguageIdentifier {
    sys_locale::get_locale()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(fallback_locale)
}

fn fallback_locale() -> LanguageIdentifier {
    "en-US".parse().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_from_name_inverts_every_table_entry() {
        for (id, name) in SUPPORTED_LOCALES {
            assert_eq!(identifier_from_name(name), *id);
        }
    }

    #[test]
    fn identifier_from_name_falls_back_to_sentinel() {
        assert_eq!(identifier_from_name("Klingon"), SENTINEL);
        assert_eq!(identifier_from_name(""), SENTINEL);
    }

    #[test]
    fn localized_system_default_label_maps_to_sentinel() {
        // The picker substitutes a localized label for index 0, so the
        // reverse lookup must treat it as unknown and fall back.
        assert_eq!(identifier_from_name("Systemstandard"), SENTINEL);
    }

    #[test]
    fn language_names_has_one_entry_per_locale() {
        let names = language_names("System default");
        assert_eq!(names.len(), SUPPORTED_LOCALES.len());
    }

    #[test]
    fn language_names_pins_leading_entries() {
        let names = language_names("Par défaut du système");
        assert_eq!(names[0], "Par défaut du système");
        assert_eq!(names[1], "English");
        assert_eq!(names[2], "English (United States)");
    }

    #[test]
    fn language_names_tail_is_sorted() {
        let names = language_names("System default");
        let tail = &names[PINNED..];
        for window in tail.windows(2) {
            assert!(window[0] <= window[1], "{:?} > {:?}", window[0], window[1]);
        }
    }

    #[test]
    fn set_unknown_identifier_behaves_like_sentinel() {
        let bogus = Locale::new("bogus-code");
        let sentinel = Locale::new(SENTINEL);
        assert_eq!(bogus.current(), sentinel.current());
        assert_eq!(bogus.right_to_left(), sentinel.right_to_left());
    }

    #[test]
    fn set_farsi_raises_rtl_flag() {
        let locale = Locale::new("fa");
        assert!(locale.right_to_left());
        assert!(locale.current().to_string().starts_with("fa"));
    }

    #[test]
    fn rtl_flag_follows_prefix_set() {
        for id in ["ar", "he", "fa"] {
            assert!(Locale::new(id).right_to_left(), "{id} should be RTL");
        }
        for id in ["en", "th", "ja", "pt-BR"] {
            assert!(!Locale::new(id).right_to_left(), "{id} should be LTR");
        }
    }

    #[test]
    fn set_thai_is_left_to_right() {
        let locale = Locale::new("th");
        assert!(!locale.right_to_left());
        assert_eq!(locale.current().to_string(), "th");
    }

    #[test]
    fn set_is_reentrant() {
        let mut locale = Locale::new("ar");
        assert!(locale.right_to_left());
        locale.set("fr");
        assert!(!locale.right_to_left());
        assert_eq!(locale.current().to_string(), "fr");
    }

    #[test]
    fn every_non_sentinel_identifier_parses() {
        for (id, _) in SUPPORTED_LOCALES.iter().skip(1) {
            assert!(
                id.parse::<LanguageIdentifier>().is_ok(),
                "{id} failed to parse"
            );
        }
    }

    #[test]
    fn display_name_round_trip() {
        assert_eq!(display_name("th"), Some("ภาษาไทย"));
        assert_eq!(display_name("unknown"), None);
    }
}

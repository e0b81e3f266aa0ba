//! Locale-keyed string lookup.
//!
//! Every locale bundle is a JSON object keyed by namespace; inside a
//! namespace, keys are dotted paths into nested objects. Lookups fall back to
//! English, then to the key itself.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Invalid bundle for {locale}: {source}")]
    InvalidBundle {
        locale: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Bundle for {0} must be a JSON object")]
    NotAnObject(&'static str),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
    De,
    Ja,
    Es,
    Fr,
    Ko,
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 8] = [
        Locale::En,
        Locale::Zh,
        Locale::De,
        Locale::Ja,
        Locale::Es,
        Locale::Fr,
        Locale::Ko,
        Locale::Ru,
    ];

    pub const FALLBACK: Locale = Locale::En;

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::De => "de",
            Locale::Ja => "ja",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::Ko => "ko",
            Locale::Ru => "ru",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "Chinese",
            Locale::De => "German",
            Locale::Ja => "Japanese",
            Locale::Es => "Spanish",
            Locale::Fr => "French",
            Locale::Ko => "Korean",
            Locale::Ru => "Russian",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
            Locale::De => "Deutsch",
            Locale::Ja => "日本語",
            Locale::Es => "Español",
            Locale::Fr => "Français",
            Locale::Ko => "한국어",
            Locale::Ru => "Русский",
        }
    }

    /// Parse an optional code, falling back to English when absent or unknown.
    pub fn parse_or_fallback(code: Option<&str>) -> Locale {
        code.and_then(|c| c.parse().ok()).unwrap_or(Locale::FALLBACK)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = I18nError;

    /// Accepts `zh`, `ZH`, `zh-CN`, `zh_TW`; the primary subtag decides.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Locale::ALL
            .iter()
            .copied()
            .find(|locale| locale.code() == primary)
            .ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}

const BUILTIN_BUNDLES: [(Locale, &str); 8] = [
    (Locale::En, include_str!("../locales/en.json")),
    (Locale::Zh, include_str!("../locales/zh.json")),
    (Locale::De, include_str!("../locales/de.json")),
    (Locale::Ja, include_str!("../locales/ja.json")),
    (Locale::Es, include_str!("../locales/es.json")),
    (Locale::Fr, include_str!("../locales/fr.json")),
    (Locale::Ko, include_str!("../locales/ko.json")),
    (Locale::Ru, include_str!("../locales/ru.json")),
];

/// Per-locale string bundles.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    bundles: HashMap<Locale, Value>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundles compiled into the binary, one per supported locale. Keys a
    /// bundle omits resolve through the English fallback.
    pub fn builtin() -> Result<Self, I18nError> {
        let mut translations = Self::new();
        for (locale, json) in BUILTIN_BUNDLES {
            translations.add_bundle(locale, json)?;
        }
        Ok(translations)
    }

    /// Parse and register a bundle, replacing any previous one for `locale`.
    pub fn add_bundle(&mut self, locale: Locale, json: &str) -> Result<(), I18nError> {
        let value: Value = serde_json::from_str(json).map_err(|source| I18nError::InvalidBundle {
            locale: locale.code(),
            source,
        })?;

        if !value.is_object() {
            return Err(I18nError::NotAnObject(locale.code()));
        }

        self.bundles.insert(locale, value);
        Ok(())
    }

    pub fn has_bundle(&self, locale: Locale) -> bool {
        self.bundles.contains_key(&locale)
    }

    fn lookup_exact(&self, namespace: &str, key: &str, locale: Locale) -> Option<&str> {
        let mut node = self.bundles.get(&locale)?.get(namespace)?;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str().filter(|s| !s.is_empty())
    }

    /// Look up `key` for `locale`, then for the fallback locale.
    pub fn lookup(&self, namespace: &str, key: &str, locale: Locale) -> Option<&str> {
        self.lookup_exact(namespace, key, locale).or_else(|| {
            if locale == Locale::FALLBACK {
                None
            } else {
                self.lookup_exact(namespace, key, Locale::FALLBACK)
            }
        })
    }

    /// Like [`lookup`](Self::lookup) but returns the key itself when no
    /// bundle has it.
    pub fn translate(&self, namespace: &str, key: &str, locale: Locale) -> String {
        self.lookup(namespace, key, locale)
            .unwrap_or(key)
            .to_string()
    }

    /// Whole namespace for `locale` with missing entries filled from the
    /// fallback locale. `None` if neither bundle has the namespace.
    pub fn namespace(&self, namespace: &str, locale: Locale) -> Option<Value> {
        let fallback = self
            .bundles
            .get(&Locale::FALLBACK)
            .and_then(|b| b.get(namespace));
        let localized = self.bundles.get(&locale).and_then(|b| b.get(namespace));

        match (fallback, localized) {
            (None, None) => None,
            (Some(base), None) => Some(base.clone()),
            (None, Some(overlay)) => Some(overlay.clone()),
            (Some(base), Some(overlay)) => {
                let mut merged = base.clone();
                merge_into(&mut merged, overlay);
                Some(merged)
            }
        }
    }
}

fn merge_into(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

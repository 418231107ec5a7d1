use crate::config::TypographyConfig;
use crate::error::RunionError;
use std::collections::BTreeMap;
use std::fmt;

// Locale keys run script.language.territory, each level optionally a
// wildcard default (None). A specified level under an unspecified one
// makes no sense: knowing the language but not the script, say.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawLocale")
)]
pub struct Locale {
    script: Option<String>,
    language: Option<String>,
    territory: Option<String>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLocale {
    script: Option<String>,
    language: Option<String>,
    territory: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLocale> for Locale {
    type Error = RunionError;

    fn try_from(raw: RawLocale) -> Result<Locale, RunionError> {
        Locale::new(
            raw.script.as_deref(),
            raw.language.as_deref(),
            raw.territory.as_deref(),
        )
    }
}

impl Locale {
    pub fn root() -> Locale {
        Locale::default()
    }

    pub fn new(
        script: Option<&str>,
        language: Option<&str>,
        territory: Option<&str>,
    ) -> Result<Locale, RunionError> {
        if script.is_none() && language.is_some() {
            return Err(RunionError::InvalidConfiguration(format!(
                "locale has a language \"{}\" but no script",
                language.unwrap_or_default()
            )));
        }
        if language.is_none() && territory.is_some() {
            return Err(RunionError::InvalidConfiguration(format!(
                "locale has a territory \"{}\" but no language",
                territory.unwrap_or_default()
            )));
        }
        Ok(Locale {
            script: script.map(str::to_string),
            language: language.map(str::to_string),
            territory: territory.map(str::to_string),
        })
    }

    // "Latn-en-US" style tags; an empty string is the root locale.
    pub fn parse(tag: &str) -> Result<Locale, RunionError> {
        if tag.is_empty() {
            return Ok(Locale::root());
        }
        let mut parts = tag.split('-');
        let script = parts.next();
        let language = parts.next();
        let territory = parts.next();
        if parts.next().is_some() {
            return Err(RunionError::InvalidConfiguration(format!(
                "locale tag \"{}\" has more than three levels",
                tag
            )));
        }
        Locale::new(script, language, territory)
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn territory(&self) -> Option<&str> {
        self.territory.as_deref()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |level: &Option<String>| match level {
            Some(tag) => tag.clone(),
            None => "DFLT".to_string(),
        };
        write!(
            f,
            "{}-{}-{}",
            part(&self.script),
            part(&self.language),
            part(&self.territory)
        )
    }
}

type Level<T> = BTreeMap<Option<String>, T>;

// Three-level config registry with wildcard fallback: a lookup walks
// script, language, territory, dropping to the default entry whenever
// the requested tag is absent at a level.
#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    entries: Level<Level<Level<TypographyConfig>>>,
}

impl ConfigRegistry {
    pub fn new() -> ConfigRegistry {
        ConfigRegistry::default()
    }

    // Latin/English doubles as the script-wide and the global default,
    // there is nothing else to fall back to so far. German widens the
    // minimum line length.
    pub fn builtin() -> Result<ConfigRegistry, RunionError> {
        let mut registry = ConfigRegistry::new();
        let latin = TypographyConfig::latin();
        registry.insert(Locale::root(), latin.clone());
        registry.insert(Locale::new(Some("Latn"), None, None)?, latin.clone());
        registry.insert(Locale::new(Some("Latn"), Some("en"), None)?, latin);
        registry.insert(
            Locale::new(Some("Latn"), Some("de"), None)?,
            TypographyConfig::german(),
        );
        Ok(registry)
    }

    pub fn insert(&mut self, locale: Locale, config: TypographyConfig) {
        self.entries
            .entry(locale.script)
            .or_default()
            .entry(locale.language)
            .or_default()
            .insert(locale.territory, config);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Returns the config together with the locale actually used, so a
    // caller can tell "Latn-en-US" resolved to "Latn-en-DFLT".
    pub fn lookup(&self, locale: &Locale) -> Result<(Locale, &TypographyConfig), RunionError> {
        let missing = || {
            RunionError::InvalidConfiguration(format!("no typography config for locale {}", locale))
        };

        let (script, languages) = resolve_level(&self.entries, &locale.script).ok_or_else(missing)?;
        let (language, territories) =
            resolve_level(languages, &locale.language).ok_or_else(missing)?;
        let (territory, config) =
            resolve_level(territories, &locale.territory).ok_or_else(missing)?;

        let used = Locale {
            script: script.clone(),
            language: language.clone(),
            territory: territory.clone(),
        };
        Ok((used, config))
    }

    pub fn get(&self, locale: &Locale) -> Result<&TypographyConfig, RunionError> {
        self.lookup(locale).map(|(_, config)| config)
    }
}

fn resolve_level<'a, T>(
    level: &'a Level<T>,
    key: &Option<String>,
) -> Option<(&'a Option<String>, &'a T)> {
    if let Some(entry) = level.get_key_value(key) {
        return Some(entry);
    }
    level.get_key_value(&None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::En;

    #[test]
    fn exact_locale_hits_its_own_entry() {
        let registry = ConfigRegistry::builtin().expect("registry");
        let locale = Locale::parse("Latn-de").expect("locale");
        let (used, config) = registry.lookup(&locale).expect("lookup");
        assert_eq!(used.language(), Some("de"));
        assert_eq!(config.min_line_length(), En::new(42.0));
    }

    #[test]
    fn unknown_territory_falls_back_to_the_language_entry() {
        let registry = ConfigRegistry::builtin().expect("registry");
        let locale = Locale::parse("Latn-de-AT").expect("locale");
        let (used, config) = registry.lookup(&locale).expect("lookup");
        assert_eq!(used.language(), Some("de"));
        assert_eq!(used.territory(), None);
        assert_eq!(config.min_line_length(), En::new(42.0));
    }

    #[test]
    fn unknown_language_falls_back_to_the_script_default() {
        let registry = ConfigRegistry::builtin().expect("registry");
        let locale = Locale::parse("Latn-fr").expect("locale");
        let (used, config) = registry.lookup(&locale).expect("lookup");
        assert_eq!(used.script(), Some("Latn"));
        assert_eq!(used.language(), None);
        assert_eq!(config.min_line_length(), En::new(33.0));
    }

    #[test]
    fn unknown_script_falls_back_to_the_global_default() {
        let registry = ConfigRegistry::builtin().expect("registry");
        let locale = Locale::new(Some("Cyrl"), None, None).expect("locale");
        let (used, config) = registry.lookup(&locale).expect("lookup");
        assert_eq!(used, Locale::root());
        assert_eq!(config.min_line_length(), En::new(33.0));
    }

    #[test]
    fn empty_registry_reports_a_missing_config() {
        let registry = ConfigRegistry::new();
        let result = registry.get(&Locale::root());
        assert!(matches!(result, Err(RunionError::InvalidConfiguration(_))));
    }

    #[test]
    fn language_without_script_is_rejected() {
        let result = Locale::new(None, Some("en"), None);
        assert!(matches!(result, Err(RunionError::InvalidConfiguration(_))));
    }

    #[test]
    fn territory_without_language_is_rejected() {
        let result = Locale::new(Some("Latn"), None, Some("US"));
        assert!(matches!(result, Err(RunionError::InvalidConfiguration(_))));
    }

    #[test]
    fn locale_displays_defaults_as_dflt() {
        let locale = Locale::parse("Latn-en").expect("locale");
        assert_eq!(locale.to_string(), "Latn-en-DFLT");
        assert_eq!(Locale::root().to_string(), "DFLT-DFLT-DFLT");
    }
}

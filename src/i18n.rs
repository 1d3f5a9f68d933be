use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{LocalizedContent, LocalizedDataSet};
use crate::diagnostics::{Degradation, Observer};

/// Key under which the chosen language code is persisted.
pub const STORAGE_KEY: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::Tr => Language::En,
            Language::En => Language::Tr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tr" => Ok(Language::Tr),
            "en" => Ok(Language::En),
            other => Err(I18nError::InvalidLanguage(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("unsupported language code: {0:?}")]
    InvalidLanguage(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("couldn't read from storage: {0}")]
    Read(String),
    #[error("couldn't write to storage: {0}")]
    Write(String),
}

/// Durable home of the language preference.
pub trait LanguageStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, code: &str) -> Result<(), StorageError>;
}

/// In-process store. Used on the server, where nothing is persisted, and in tests.
#[derive(Debug)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
    available: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            value: Mutex::new(None),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(code: &str) -> Self {
        Self {
            value: Mutex::new(Some(code.to_string())),
            available: AtomicBool::new(true),
        }
    }

    /// Simulate storage being blocked (private browsing, quota, ...).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn value(&self) -> Option<String> {
        self.value.lock().ok().and_then(|v| v.clone())
    }
}

impl LanguageStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable);
        }
        let value = self
            .value
            .lock()
            .map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(value.clone())
    }

    fn save(&self, code: &str) -> Result<(), StorageError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable);
        }
        let mut value = self
            .value
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        *value = Some(code.to_string());
        Ok(())
    }
}

/// Key to text, one map per language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationTable {
    tr: HashMap<String, String>,
    en: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new(tr: HashMap<String, String>, en: HashMap<String, String>) -> Self {
        Self { tr, en }
    }

    pub fn strings(&self, lang: Language) -> &HashMap<String, String> {
        match lang {
            Language::Tr => &self.tr,
            Language::En => &self.en,
        }
    }

    pub fn get(&self, lang: Language, key: &str) -> Option<&str> {
        self.strings(lang).get(key).map(String::as_str)
    }

    /// Keys that exist in some language but are missing from another, sorted.
    pub fn missing_keys(&self) -> Vec<(Language, String)> {
        let all_keys = self
            .tr
            .keys()
            .chain(self.en.keys())
            .collect::<BTreeSet<_>>();
        Language::ALL
            .into_iter()
            .flat_map(|lang| {
                let strings = self.strings(lang);
                all_keys
                    .iter()
                    .filter(move |k| !strings.contains_key(k.as_str()))
                    .map(move |k| (lang, k.to_string()))
            })
            .collect()
    }
}

/// Owns the active language and answers text and dataset lookups for it.
pub struct Localizer {
    current: Language,
    strings: Arc<TranslationTable>,
    datasets: Arc<LocalizedContent>,
    store: Arc<dyn LanguageStore>,
    observer: Arc<dyn Observer>,
}

impl fmt::Debug for Localizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localizer")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl Localizer {
    pub fn new(
        strings: Arc<TranslationTable>,
        datasets: Arc<LocalizedContent>,
        store: Arc<dyn LanguageStore>,
        observer: Arc<dyn Observer>,
    ) -> Self {
        let mut localizer = Self {
            current: Language::default(),
            strings,
            datasets,
            store,
            observer,
        };
        localizer.current = localizer.restore();
        localizer
    }

    /// Swap in another store and re-read the persisted preference from it.
    ///
    /// The browser store only exists after hydration, so the page renders with
    /// the default language first and picks up the saved one here.
    pub fn restore_from(&mut self, store: Arc<dyn LanguageStore>) -> Language {
        self.store = store;
        self.current = self.restore();
        self.current
    }

    fn restore(&self) -> Language {
        match self.store.load() {
            Ok(Some(code)) => code.parse().unwrap_or_else(|_| {
                self.observer
                    .degraded(&Degradation::InvalidStoredLanguage(&code));
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                self.observer.degraded(&Degradation::StorageRead(&e));
                Language::default()
            }
        }
    }

    pub fn current_language(&self) -> Language {
        self.current
    }

    /// Text for `key` in the active language; the key itself when there is none
    /// or the entry is blank.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        match self.strings.get(self.current, key) {
            Some(text) if !text.is_empty() => text,
            _ => {
                self.observer.degraded(&Degradation::MissingKey {
                    lang: self.current,
                    key,
                });
                key
            }
        }
    }

    /// Switch language for the session and persist it when storage allows.
    pub fn set_language(&mut self, lang: Language) {
        self.current = lang;
        if let Err(e) = self.store.save(lang.code()) {
            self.observer.degraded(&Degradation::StorageWrite(&e));
        }
    }

    pub fn set_language_code(&mut self, code: &str) -> Result<(), I18nError> {
        let lang = code.parse()?;
        self.set_language(lang);
        Ok(())
    }

    pub fn localized_dataset(&self) -> &LocalizedDataSet {
        self.datasets.get(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{site_content, HeroStat};
    use crate::diagnostics::testing::Recorder;

    fn table() -> TranslationTable {
        let tr = [
            ("nav.cv", "CV"),
            ("hero.title.day", "Gündüz büyütüyorum."),
            ("only.tr", "yalnız"),
        ];
        let en = [("nav.cv", "CV"), ("hero.title.day", "I grow by day.")];
        let own = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };
        TranslationTable::new(own(&tr), own(&en))
    }

    fn datasets() -> LocalizedContent {
        let mut tr = LocalizedDataSet::default();
        tr.hero_stats.push(HeroStat {
            value: "10+".to_string(),
            label_key: "hero.stat.years".to_string(),
        });
        let mut en = tr.clone();
        en.hero_stats[0].value = "10+ (en)".to_string();
        LocalizedContent::new(tr, en)
    }

    fn localizer(store: Arc<MemoryStore>, recorder: Arc<Recorder>) -> Localizer {
        Localizer::new(Arc::new(table()), Arc::new(datasets()), store, recorder)
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("tr".parse::<Language>(), Ok(Language::Tr));
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!(
            "de".parse::<Language>(),
            Err(I18nError::InvalidLanguage("de".to_string()))
        );
        assert!("EN".parse::<Language>().is_err());
        assert_eq!(Language::Tr.other(), Language::En);
        assert_eq!(Language::default(), Language::Tr);
    }

    #[test]
    fn test_document_language_follows_switch() {
        let mut l = localizer(Arc::new(MemoryStore::new()), Arc::new(Recorder::default()));
        assert_eq!(l.current_language().code(), "tr");
        l.set_language(Language::En);
        assert_eq!(l.current_language().code(), "en");
        assert_eq!(l.current_language().to_string(), "en");
    }

    #[test]
    fn test_defaults_to_turkish_without_saved_preference() {
        let recorder = Arc::new(Recorder::default());
        let l = localizer(Arc::new(MemoryStore::new()), recorder.clone());
        assert_eq!(l.current_language(), Language::Tr);
        assert!(recorder.kinds().is_empty());
    }

    #[test]
    fn test_restores_saved_preference() {
        let store = Arc::new(MemoryStore::with_value("en"));
        let l = localizer(store, Arc::new(Recorder::default()));
        assert_eq!(l.current_language(), Language::En);
        assert_eq!(l.translate("hero.title.day"), "I grow by day.");
    }

    #[test]
    fn test_garbage_preference_falls_back() {
        let recorder = Arc::new(Recorder::default());
        let store = Arc::new(MemoryStore::with_value("klingon"));
        let l = localizer(store, recorder.clone());
        assert_eq!(l.current_language(), Language::Tr);
        assert_eq!(recorder.kinds(), vec!["invalid_stored_language"]);
    }

    #[test]
    fn test_blank_entry_falls_back_to_key() {
        let blank = |v: &str| HashMap::from([("hero.title.day".to_string(), v.to_string())]);
        let strings = TranslationTable::new(blank(""), blank("I grow by day."));
        let recorder = Arc::new(Recorder::default());
        let mut l = Localizer::new(
            Arc::new(strings),
            Arc::new(datasets()),
            Arc::new(MemoryStore::new()),
            recorder.clone(),
        );
        assert_eq!(l.translate("hero.title.day"), "hero.title.day");
        assert_eq!(recorder.kinds(), vec!["missing_key"]);

        l.set_language(Language::En);
        assert_eq!(l.translate("hero.title.day"), "I grow by day.");
        assert_eq!(recorder.kinds().len(), 1);
    }

    #[test]
    fn test_translation_varies_by_language() {
        let store = Arc::new(MemoryStore::new());
        let mut l = localizer(store, Arc::new(Recorder::default()));
        assert_eq!(l.translate("nav.cv"), "CV");
        assert_eq!(l.translate("hero.title.day"), "Gündüz büyütüyorum.");

        l.set_language(Language::En);
        assert_eq!(l.translate("nav.cv"), "CV");
        assert_eq!(l.translate("hero.title.day"), "I grow by day.");
    }

    #[test]
    fn test_missing_key_echoes_key() {
        let recorder = Arc::new(Recorder::default());
        let mut l = localizer(Arc::new(MemoryStore::new()), recorder.clone());
        assert_eq!(l.translate("no.such.key"), "no.such.key");

        // present in Turkish only
        l.set_language(Language::En);
        assert_eq!(l.translate("only.tr"), "only.tr");
        assert_eq!(recorder.kinds(), vec!["missing_key", "missing_key"]);
        assert!(recorder.messages()[1].contains("en"));
    }

    #[test]
    fn test_set_language_persists_and_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let mut l = localizer(store.clone(), Arc::new(Recorder::default()));
        l.set_language(Language::En);
        let once = (l.current_language(), store.value());
        l.set_language(Language::En);
        assert_eq!((l.current_language(), store.value()), once);
        assert_eq!(store.value().as_deref(), Some("en"));

        // a fresh localizer over the same storage sees the choice
        let reloaded = localizer(store, Arc::new(Recorder::default()));
        assert_eq!(reloaded.current_language(), Language::En);
    }

    #[test]
    fn test_unavailable_storage_still_switches() {
        let recorder = Arc::new(Recorder::default());
        let store = Arc::new(MemoryStore::with_value("tr"));
        let mut l = localizer(store.clone(), recorder.clone());
        store.set_available(false);

        l.set_language(Language::En);
        assert_eq!(l.current_language(), Language::En);
        assert_eq!(l.translate("hero.title.day"), "I grow by day.");
        assert_eq!(store.value().as_deref(), Some("tr"));
        assert_eq!(recorder.kinds(), vec!["storage_write"]);
    }

    #[test]
    fn test_unreadable_storage_defaults() {
        let recorder = Arc::new(Recorder::default());
        let store = Arc::new(MemoryStore::with_value("en"));
        store.set_available(false);
        let l = localizer(store, recorder.clone());
        assert_eq!(l.current_language(), Language::Tr);
        assert_eq!(recorder.kinds(), vec!["storage_read"]);
    }

    #[test]
    fn test_set_language_code_rejects_unknown() {
        let store = Arc::new(MemoryStore::new());
        let mut l = localizer(store.clone(), Arc::new(Recorder::default()));
        assert_eq!(
            l.set_language_code("fr"),
            Err(I18nError::InvalidLanguage("fr".to_string()))
        );
        assert_eq!(l.current_language(), Language::Tr);
        assert_eq!(store.value(), None);

        assert_eq!(l.set_language_code("en"), Ok(()));
        assert_eq!(l.current_language(), Language::En);
    }

    #[test]
    fn test_restore_from_new_store() {
        let mut l = localizer(Arc::new(MemoryStore::new()), Arc::new(Recorder::default()));
        let browser = Arc::new(MemoryStore::with_value("en"));
        assert_eq!(l.restore_from(browser.clone()), Language::En);

        l.set_language(Language::Tr);
        assert_eq!(browser.value().as_deref(), Some("tr"));
    }

    #[test]
    fn test_dataset_follows_language() {
        let mut l = localizer(Arc::new(MemoryStore::new()), Arc::new(Recorder::default()));
        assert_eq!(l.localized_dataset().hero_stats[0].value, "10+");
        l.set_language(Language::En);
        assert_eq!(l.localized_dataset().hero_stats[0].value, "10+ (en)");
    }

    #[test]
    fn test_missing_keys_listed_per_language() {
        assert_eq!(
            table().missing_keys(),
            vec![(Language::En, "only.tr".to_string())]
        );
    }

    #[test]
    fn test_shipped_strings_cover_both_languages() {
        let content = site_content();
        assert!(content.strings.missing_keys().is_empty());
        for lang in Language::ALL {
            let strings = content.strings.strings(lang);
            assert!(!strings.is_empty());
            assert!(strings.values().all(|v| !v.is_empty()));
        }
        let differs = content
            .strings
            .strings(Language::Tr)
            .iter()
            .any(|(k, v)| content.strings.get(Language::En, k) != Some(v.as_str()));
        assert!(differs);
    }

    #[test]
    fn test_shipped_scenario() {
        let content = site_content();
        let mut l = Localizer::new(
            content.strings.clone(),
            content.datasets.clone(),
            Arc::new(MemoryStore::new()),
            Arc::new(Recorder::default()),
        );
        assert_eq!(l.translate("hero.title.day"), "Gündüz büyütüyorum.");
        l.set_language(Language::En);
        assert_eq!(l.translate("nav.cv"), "CV");
        assert_eq!(l.translate("hero.title.day"), "I grow by day.");
    }
}

use std::{collections::BTreeMap, fmt, io::Error, path::PathBuf};

use crate::{config, management::languages::LANGUAGES};

pub const DEFAULT_LANGUAGE: &str = "US";
const LANGUAGE_KEY: &str = "language";

#[derive(Debug)]
pub enum SettingsError {
    IoError(Error),
    SerdeError(serde_json::Error),
    UnknownLanguage(String),
}

impl From<Error> for SettingsError {
    fn from(err: Error) -> Self {
        SettingsError::IoError(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::SerdeError(err)
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "{}", e),
            SettingsError::SerdeError(e) => write!(f, "{}", e),
            SettingsError::UnknownLanguage(key) => write!(f, "Language '{}' is unknown.", key),
        }
    }
}

impl std::error::Error for SettingsError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub key: String,
    pub value: String,
}

/// Persisted user preferences, stored as string key/value pairs.
pub struct SettingsManager {
    path: PathBuf,
    values: BTreeMap<String, String>,
    language: Language,
}

impl SettingsManager {
    /// Loads the settings from the local data directory.
    pub async fn load() -> Self {
        Self::load_from(Self::settings_path()).await
    }

    /// Loads the settings stored at `path`.
    ///
    /// A missing or unreadable file, or a stored language that is no longer
    /// available, falls back to [`DEFAULT_LANGUAGE`].
    pub async fn load_from(path: PathBuf) -> Self {
        let values: BTreeMap<String, String> = match async_fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => BTreeMap::new(),
        };

        let language = values
            .get(LANGUAGE_KEY)
            .and_then(|key| find_language(key))
            .or_else(|| find_language(DEFAULT_LANGUAGE))
            .unwrap_or_else(|| Language {
                key: DEFAULT_LANGUAGE.to_string(),
                value: DEFAULT_LANGUAGE.to_string(),
            });

        Self {
            path,
            values,
            language,
        }
    }

    /// Switches the language and persists the choice.
    pub async fn change_language(&mut self, key: &str) -> Result<&Language, SettingsError> {
        let language =
            find_language(key).ok_or_else(|| SettingsError::UnknownLanguage(key.to_string()))?;

        self.values
            .insert(LANGUAGE_KEY.to_string(), language.key.clone());
        self.persist().await?;
        self.language = language;
        Ok(&self.language)
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn available_languages() -> Vec<Language> {
        LANGUAGES
            .iter()
            .map(|(key, value)| Language {
                key: key.to_string(),
                value: value.to_string(),
            })
            .collect()
    }

    async fn persist(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    fn settings_path() -> PathBuf {
        config::data_dir().join("settings.json")
    }
}

fn find_language(key: &str) -> Option<Language> {
    let key = key.trim().to_uppercase();
    LANGUAGES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(k, v)| Language {
            key: k.to_string(),
            value: v.to_string(),
        })
}

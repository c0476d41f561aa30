mod languages;
mod settings;

pub use languages::LANGUAGES;
pub use settings::DEFAULT_LANGUAGE;
pub use settings::Language;
pub use settings::SettingsError;
pub use settings::SettingsManager;

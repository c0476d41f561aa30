use tabled::Table;

use crate::{error, info, management::SettingsManager, success, types::LanguageTableRow};

/// Shows the stored language, changes it or lists the available ones.
pub async fn settings(language: Option<String>, list: bool) {
    let mut settings = SettingsManager::load().await;

    if list {
        let rows: Vec<LanguageTableRow> = SettingsManager::available_languages()
            .into_iter()
            .map(|l| LanguageTableRow {
                key: l.key,
                name: l.value,
            })
            .collect();
        println!("{}", Table::new(rows));
        return;
    }

    if let Some(key) = language {
        match settings.change_language(&key).await {
            Ok(language) => success!("Language set to {} ({}).", language.value, language.key),
            Err(e) => error!("Cannot change language. Err: {}", e),
        }
        return;
    }

    let language = settings.language();
    info!("Language: {} ({})", language.value, language.key);
}

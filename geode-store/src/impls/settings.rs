use crate::error::StoreError;
use crate::model::settings::Settings;
use crate::store::Store;

/// A feature toggle the `!settings` command can flip.
///
/// `currency` is deliberately not here: it is a string, not a toggle, and
/// flipping it would destroy the configured currency name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingKey {
    Automod,
    ChatRewards,
    DailyDiscount,
    WelcomeDm,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::Automod,
        SettingKey::ChatRewards,
        SettingKey::DailyDiscount,
        SettingKey::WelcomeDm,
    ];

    /// Display/file name, matching the `settings.json` keys.
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::Automod => "automod",
            SettingKey::ChatRewards => "chatRewards",
            SettingKey::DailyDiscount => "dailyDiscount",
            SettingKey::WelcomeDm => "welcomeDM",
        }
    }

    pub fn parse(raw: &str) -> Option<SettingKey> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(raw))
    }
}

/// Snapshot of the full settings document.
pub fn settings(store: &Store) -> Settings {
    store.read_settings(Clone::clone)
}

pub fn is_enabled(store: &Store, key: SettingKey) -> bool {
    store.read_settings(|settings| flag(settings, key))
}

pub fn currency(store: &Store) -> String {
    store.read_settings(|settings| settings.currency.clone())
}

/// Flip a toggle by name and persist. Returns the key and its new state,
/// or [`StoreError::UnknownSetting`] for anything not in the registry.
pub fn toggle(store: &Store, raw_key: &str) -> Result<(SettingKey, bool), StoreError> {
    let Some(key) = SettingKey::parse(raw_key) else {
        return Err(StoreError::UnknownSetting(raw_key.trim().to_owned()));
    };

    let state = store.update_settings(|settings| {
        let flag = flag_mut(settings, key);
        *flag = !*flag;
        Ok(*flag)
    })?;

    Ok((key, state))
}

fn flag(settings: &Settings, key: SettingKey) -> bool {
    match key {
        SettingKey::Automod => settings.automod,
        SettingKey::ChatRewards => settings.chat_rewards,
        SettingKey::DailyDiscount => settings.daily_discount,
        SettingKey::WelcomeDm => settings.welcome_dm,
    }
}

fn flag_mut(settings: &mut Settings, key: SettingKey) -> &mut bool {
    match key {
        SettingKey::Automod => &mut settings.automod,
        SettingKey::ChatRewards => &mut settings.chat_rewards,
        SettingKey::DailyDiscount => &mut settings.daily_discount,
        SettingKey::WelcomeDm => &mut settings.welcome_dm,
    }
}

#[cfg(test)]
mod tests {
    use super::{SettingKey, is_enabled, toggle};
    use crate::error::StoreError;
    use crate::store::Store;

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!(SettingKey::parse("automod"), Some(SettingKey::Automod));
        assert_eq!(
            SettingKey::parse("  chatrewards "),
            Some(SettingKey::ChatRewards)
        );
        assert_eq!(SettingKey::parse("WELCOMEDM"), Some(SettingKey::WelcomeDm));
        assert_eq!(SettingKey::parse("currency"), None);
        assert_eq!(SettingKey::parse("bogus"), None);
    }

    #[test]
    fn toggles_flip_and_persist() {
        let dir = tempfile::tempdir().expect("temp dir");
        {
            let store = Store::open(dir.path()).expect("open store");
            assert!(is_enabled(&store, SettingKey::Automod));

            let (key, enabled) = toggle(&store, "automod").expect("toggle");
            assert_eq!(key, SettingKey::Automod);
            assert!(!enabled);
        }

        let reopened = Store::open(dir.path()).expect("reopen store");
        assert!(!is_enabled(&reopened, SettingKey::Automod));
        assert!(is_enabled(&reopened, SettingKey::ChatRewards));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = Store::open(dir.path()).expect("open store");

        let result = toggle(&store, "loudmode");
        assert!(matches!(result, Err(StoreError::UnknownSetting(name)) if name == "loudmode"));
    }
}

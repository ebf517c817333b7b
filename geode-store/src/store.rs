use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::StoreError;
use crate::model::balances::BalanceBook;
use crate::model::settings::Settings;
use crate::model::warnings::WarningLedger;

const BALANCES_FILE: &str = "balances.json";
const SETTINGS_FILE: &str = "settings.json";
const WARNINGS_FILE: &str = "warnings.json";

/// Shared persistence handle passed across crates.
///
/// Three flat JSON documents live in memory and are written through to disk
/// after every mutation. A mutation runs against a draft copy and is only
/// committed to memory once the write has succeeded, so a failed write
/// leaves the in-memory state at its pre-mutation value.
#[derive(Clone, Debug)]
pub struct Store {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    dir: PathBuf,
    balances: Mutex<BalanceBook>,
    settings: Mutex<Settings>,
    warnings: Mutex<WarningLedger>,
}

impl Store {
    /// Open the data directory, creating it if needed, and load all
    /// documents. Missing files start from defaults.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let balances: BalanceBook = load_json(&dir.join(BALANCES_FILE))?.unwrap_or_default();
        let settings: Settings = load_json(&dir.join(SETTINGS_FILE))?.unwrap_or_default();
        let warnings: WarningLedger = load_json(&dir.join(WARNINGS_FILE))?.unwrap_or_default();

        info!(
            dir = %dir.display(),
            balance_entries = balances.len(),
            warned_users = warnings.len(),
            "store loaded"
        );

        Ok(Self {
            inner: Arc::new(StoreInner {
                dir,
                balances: Mutex::new(balances),
                settings: Mutex::new(settings),
                warnings: Mutex::new(warnings),
            }),
        })
    }

    pub(crate) fn read_warnings<T>(&self, read: impl FnOnce(&WarningLedger) -> T) -> T {
        read(&lock(&self.inner.warnings))
    }

    pub(crate) fn update_warnings<T>(
        &self,
        mutate: impl FnOnce(&mut WarningLedger) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = lock(&self.inner.warnings);
        let mut draft = guard.clone();
        let out = mutate(&mut draft)?;
        write_json(&self.inner.dir.join(WARNINGS_FILE), &draft)?;
        *guard = draft;
        Ok(out)
    }

    pub(crate) fn read_balances<T>(&self, read: impl FnOnce(&BalanceBook) -> T) -> T {
        read(&lock(&self.inner.balances))
    }

    pub(crate) fn update_balances<T>(
        &self,
        mutate: impl FnOnce(&mut BalanceBook) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = lock(&self.inner.balances);
        let mut draft = guard.clone();
        let out = mutate(&mut draft)?;
        write_json(&self.inner.dir.join(BALANCES_FILE), &draft)?;
        *guard = draft;
        Ok(out)
    }

    pub(crate) fn read_settings<T>(&self, read: impl FnOnce(&Settings) -> T) -> T {
        read(&lock(&self.inner.settings))
    }

    pub(crate) fn update_settings<T>(
        &self,
        mutate: impl FnOnce(&mut Settings) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = lock(&self.inner.settings);
        let mut draft = guard.clone();
        let out = mutate(&mut draft)?;
        write_json(&self.inner.dir.join(SETTINGS_FILE), &draft)?;
        *guard = draft;
        Ok(out)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(source.into()),
    }
}

/// Write via a temp file and rename so a crash mid-write cannot corrupt
/// the document.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, raw)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Store;

    #[test]
    fn opens_empty_directory_with_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = Store::open(dir.path()).expect("open store");

        assert!(store.read_warnings(|ledger| ledger.is_empty()));
        assert!(store.read_balances(|book| book.is_empty()));
        assert!(store.read_settings(|settings| settings.automod));
    }

    #[test]
    fn settings_file_keeps_original_keys() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = Store::open(dir.path()).expect("open store");

        store
            .update_settings(|settings| {
                settings.welcome_dm = false;
                Ok(())
            })
            .expect("persist settings");

        let raw =
            std::fs::read_to_string(dir.path().join("settings.json")).expect("read settings file");
        assert!(raw.contains("\"welcomeDM\""));
        assert!(raw.contains("\"chatRewards\""));
        assert!(raw.contains("\"dailyDiscount\""));
    }
}

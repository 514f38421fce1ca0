//! Settings store
//!
//! Owns the singleton `Settings` value and persists it on every change.
//! Read by the analytics layer for the budget amount and month-start day.

use crate::config::{KakeiboPaths, Settings, SettingsPatch};
use crate::error::{KakeiboError, KakeiboResult};
use crate::config::settings::{MAX_MONTH_START_DAY, MIN_MONTH_START_DAY};
use crate::models::Money;

/// Owned settings with persist-on-change semantics
pub struct SettingsStore {
    settings: Settings,
    paths: KakeiboPaths,
}

impl SettingsStore {
    /// Open the store, loading persisted settings or defaults
    pub fn open(paths: KakeiboPaths) -> KakeiboResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        Ok(Self { settings, paths })
    }

    /// Current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply a partial update and persist
    pub fn update(&mut self, patch: SettingsPatch) -> KakeiboResult<&Settings> {
        self.settings.apply(patch)?;
        self.settings.save(&self.paths)?;
        Ok(&self.settings)
    }

    /// Set the month-start day (1-28) and persist
    pub fn set_month_start_day(&mut self, day: u8) -> KakeiboResult<()> {
        if !(MIN_MONTH_START_DAY..=MAX_MONTH_START_DAY).contains(&day) {
            return Err(KakeiboError::Validation(format!(
                "month_start_day must be between {} and {}, got {}",
                MIN_MONTH_START_DAY, MAX_MONTH_START_DAY, day
            )));
        }
        self.settings.month_start_day = day;
        self.settings.save(&self.paths)
    }

    /// Set the monthly budget and persist
    pub fn set_monthly_budget(&mut self, budget: Money) -> KakeiboResult<()> {
        if budget.is_negative() {
            return Err(KakeiboError::Validation(
                "monthly_budget must be non-negative".into(),
            ));
        }
        self.settings.monthly_budget = budget;
        self.settings.save(&self.paths)
    }

    /// Restore defaults and persist
    pub fn reset(&mut self) -> KakeiboResult<()> {
        self.settings = Settings::default();
        self.settings.save(&self.paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> SettingsStore {
        SettingsStore::open(KakeiboPaths::with_base_dir(dir.path().to_path_buf())).unwrap()
    }

    #[test]
    fn test_changes_persist_across_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = open(&dir);
            store.set_month_start_day(25).unwrap();
            store.set_monthly_budget(Money::from_units(120_000)).unwrap();
        }

        let store = open(&dir);
        assert_eq!(store.settings().month_start_day, 25);
        assert_eq!(store.settings().monthly_budget, Money::from_units(120_000));
    }

    #[test]
    fn test_invalid_day_rejected_without_persisting() {
        let dir = TempDir::new().unwrap();
        let mut store = open(&dir);

        assert!(store.set_month_start_day(29).is_err());
        assert_eq!(store.settings().month_start_day, 1);
    }

    #[test]
    fn test_update_patch() {
        let dir = TempDir::new().unwrap();
        let mut store = open(&dir);

        let updated = store
            .update(SettingsPatch {
                month_start_day: Some(10),
                monthly_budget: None,
            })
            .unwrap();
        assert_eq!(updated.month_start_day, 10);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let dir = TempDir::new().unwrap();
        let mut store = open(&dir);
        store.set_month_start_day(20).unwrap();

        store.reset().unwrap();
        assert_eq!(store.settings(), &Settings::default());

        // Reset state is persisted too
        let reopened = open(&dir);
        assert_eq!(reopened.settings(), &Settings::default());
    }
}

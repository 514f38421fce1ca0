//! User settings for kakeibo
//!
//! Manages user preferences: where the budget month begins and how much the
//! monthly budget is. Settings persist as their own versioned JSON blob,
//! independent of the ledger.

use serde::{Deserialize, Serialize};

use super::paths::KakeiboPaths;
use crate::error::{KakeiboError, KakeiboResult};
use crate::models::Money;

/// Smallest allowed month start day
pub const MIN_MONTH_START_DAY: u8 = 1;

/// Largest allowed month start day
///
/// Restricting to 28 keeps the budget cycle boundary valid in every
/// calendar month, February included.
pub const MAX_MONTH_START_DAY: u8 = 28;

/// User settings for kakeibo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Day of month (1-28) on which the budget cycle starts
    #[serde(default = "default_month_start_day")]
    pub month_start_day: u8,

    /// Monthly budget amount
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,
}

fn default_schema_version() -> u32 {
    1
}

fn default_month_start_day() -> u8 {
    1
}

fn default_monthly_budget() -> Money {
    Money::from_units(100_000)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            month_start_day: default_month_start_day(),
            monthly_budget: default_monthly_budget(),
        }
    }
}

/// A partial update to settings; absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub month_start_day: Option<u8>,
    pub monthly_budget: Option<Money>,
}

impl Settings {
    /// Validate field constraints
    pub fn validate(&self) -> KakeiboResult<()> {
        if !(MIN_MONTH_START_DAY..=MAX_MONTH_START_DAY).contains(&self.month_start_day) {
            return Err(KakeiboError::Validation(format!(
                "month_start_day must be between {} and {}, got {}",
                MIN_MONTH_START_DAY, MAX_MONTH_START_DAY, self.month_start_day
            )));
        }
        if self.monthly_budget.is_negative() {
            return Err(KakeiboError::Validation(
                "monthly_budget must be non-negative".into(),
            ));
        }
        Ok(())
    }

    /// Apply a patch field by field, validating the result
    pub fn apply(&mut self, patch: SettingsPatch) -> KakeiboResult<()> {
        let mut next = self.clone();
        if let Some(day) = patch.month_start_day {
            next.month_start_day = day;
        }
        if let Some(budget) = patch.monthly_budget {
            next.monthly_budget = budget;
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Load settings from disk, or fall back to defaults
    ///
    /// A missing file yields defaults without touching the disk. A malformed
    /// file also yields defaults: persisted-state corruption is recovered,
    /// not surfaced as fatal.
    pub fn load_or_create(paths: &KakeiboPaths) -> KakeiboResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| KakeiboError::Io(format!("Failed to read settings file: {}", e)))?;

        match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    path = %settings_path.display(),
                    error = %e,
                    "settings file unreadable, falling back to defaults"
                );
                Ok(Settings::default())
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KakeiboPaths) -> KakeiboResult<()> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| KakeiboError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| KakeiboError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

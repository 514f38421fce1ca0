//! Strongly-typed ID wrappers and id generation strategies
//!
//! Ids are opaque strings rather than raw UUIDs: the composite fallback
//! strategy produces non-UUID values, and CSV import reassigns ids anyway.
//! Newtype wrappers prevent accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing raw id value
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Get the raw id string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }
    };
}

define_id!(ExpenseId);
define_id!(RecurringId);
define_id!(DraftId);

/// How fresh ids are minted
///
/// Two explicit deterministic strategies rather than runtime capability
/// sniffing: callers pick one at store construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Cryptographically-random v4 UUID
    #[default]
    SecureUuid,
    /// `<prefix>_<unix_millis>_<8-hex-suffix>` composite; practically unique
    /// without collision detection, for environments without a secure RNG
    TimestampComposite,
}

static COMPOSITE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Mints prefixed ids for each entity kind using a fixed strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator {
    strategy: IdStrategy,
}

impl IdGenerator {
    /// Create a generator with the given strategy
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy }
    }

    /// The strategy in use
    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Mint a fresh expense id
    pub fn expense_id(&self) -> ExpenseId {
        ExpenseId(self.generate("exp"))
    }

    /// Mint a fresh recurring-template id
    pub fn recurring_id(&self) -> RecurringId {
        RecurringId(self.generate("rec"))
    }

    /// Mint a fresh draft id
    pub fn draft_id(&self) -> DraftId {
        DraftId(self.generate("drf"))
    }

    fn generate(&self, prefix: &str) -> String {
        match self.strategy {
            IdStrategy::SecureUuid => Uuid::new_v4().to_string(),
            IdStrategy::TimestampComposite => {
                let millis = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_millis() as u64)
                    .unwrap_or(0);
                format!("{}_{}_{:08x}", prefix, millis, composite_suffix(millis))
            }
        }
    }
}

/// Random-ish 32-bit suffix for composite ids
///
/// A `RandomState`-seeded hash over the timestamp and a process-local
/// counter; not cryptographic, but two ids minted in the same millisecond
/// still differ.
fn composite_suffix(millis: u64) -> u32 {
    let counter = COMPOSITE_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
    millis.hash(&mut hasher);
    counter.hash(&mut hasher);
    hasher.finish() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_secure_uuid_ids_are_unique() {
        let gen = IdGenerator::new(IdStrategy::SecureUuid);
        let ids: HashSet<_> = (0..100).map(|_| gen.expense_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_secure_uuid_is_parseable_uuid() {
        let gen = IdGenerator::new(IdStrategy::SecureUuid);
        let id = gen.expense_id();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_composite_ids_are_unique_within_one_millisecond() {
        let gen = IdGenerator::new(IdStrategy::TimestampComposite);
        let ids: HashSet<_> = (0..100).map(|_| gen.expense_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_composite_id_shape() {
        let gen = IdGenerator::new(IdStrategy::TimestampComposite);
        let id = gen.draft_id();
        assert!(id.as_str().starts_with("drf_"));
        assert_eq!(id.as_str().split('_').count(), 3);
    }

    #[test]
    fn test_id_display_round_trip() {
        let id = ExpenseId::from_raw("exp_123_abcdef00");
        assert_eq!(format!("{}", id), "exp_123_abcdef00");
        assert_eq!(ExpenseId::from("exp_123_abcdef00"), id);
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = ExpenseId::from_raw("some-id");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"some-id\"");
        let back: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_default_strategy_is_secure() {
        let gen = IdGenerator::default();
        assert_eq!(gen.strategy(), IdStrategy::SecureUuid);
    }
}

//! Ordered battle log.
//!
//! The log is the only externally visible trace of what happened inside a
//! battle. Entries are (category, text) pairs appended in event order.

use sha2::{Digest, Sha256};

/// Category of a log entry, used by consumers to style or filter lines.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum LogCategory {
    /// Arena introduction.
    Intro,
    /// Round marker.
    Round,
    /// Upgrade effect (pre-battle or per-round).
    Upgrade,
    /// Algorithm behavior (chaos reshuffle, adaptive boost).
    Algorithm,
    /// One-shot special activation.
    Special,
    Whiff,
    Dodge,
    Crit,
    /// Landed attack with damage and resulting resources.
    Attack,
    /// A combatant was destroyed or ran out of energy.
    Defeat,
    /// Draw declared.
    Draw,
    BattleOver,
}

/// Single log line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub category: LogCategory,
    pub text: String,
}

/// Append-only sequence of log entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BattleLog {
    entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: LogCategory, text: impl Into<String>) {
        self.entries.push(LogEntry {
            category,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Number of entries in a category.
    pub fn count(&self, category: LogCategory) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .count()
    }

    /// SHA-256 over every entry, hex encoded.
    ///
    /// Two logs have the same digest iff they have the same entries in the
    /// same order, which is what replay verification compares.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for entry in &self.entries {
            hasher.update(entry.category.as_ref().as_bytes());
            hasher.update([0u8]);
            hasher.update(entry.text.as_bytes());
            hasher.update([0xffu8]);
        }
        hex::encode(hasher.finalize())
    }
}

impl<'a> IntoIterator for &'a BattleLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_depends_on_order_and_category() {
        let mut a = BattleLog::new();
        a.push(LogCategory::Round, "Round 1");
        a.push(LogCategory::Attack, "hit");

        let mut b = BattleLog::new();
        b.push(LogCategory::Attack, "hit");
        b.push(LogCategory::Round, "Round 1");

        let mut c = BattleLog::new();
        c.push(LogCategory::Round, "Round 1");
        c.push(LogCategory::Crit, "hit");

        assert_ne!(a.digest(), b.digest());
        assert_ne!(a.digest(), c.digest());
        assert_eq!(a.digest(), a.clone().digest());
        assert_eq!(a.digest().len(), 64);
    }

    #[test]
    fn categories_render_snake_case() {
        assert_eq!(LogCategory::BattleOver.to_string(), "battle_over");
        assert_eq!("crit".parse::<LogCategory>(), Ok(LogCategory::Crit));
    }

    #[test]
    fn count_filters_by_category() {
        let mut log = BattleLog::new();
        log.push(LogCategory::Round, "Round 1");
        log.push(LogCategory::Round, "Round 2");
        log.push(LogCategory::Whiff, "miss");
        assert_eq!(log.count(LogCategory::Round), 2);
        assert_eq!(log.count(LogCategory::Dodge), 0);
        assert_eq!(log.len(), 3);
    }
}

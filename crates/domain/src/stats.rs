//! Stat value objects - the six canonical creature stats and the block that holds them.
//!
//! Provides type safety for stat references instead of using magic strings like
//! "special-attack" throughout the client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The canonical creature stats.
///
/// Upstream payloads name stats with free-form strings; anything that does not
/// map onto one of these six keys is discarded during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    /// All canonical stats, in display order.
    pub const ALL: [StatKind; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    /// Returns the canonical lowercase key (e.g., "hp", "special-attack").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "special-attack",
            Self::SpecialDefense => "special-defense",
            Self::Speed => "speed",
        }
    }

    /// Returns the human-readable label (e.g., "Sp. Attack").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpecialAttack => "Sp. Attack",
            Self::SpecialDefense => "Sp. Defense",
            Self::Speed => "Speed",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hp" => Ok(Self::Hp),
            "attack" => Ok(Self::Attack),
            "defense" => Ok(Self::Defense),
            "special-attack" => Ok(Self::SpecialAttack),
            "special-defense" => Ok(Self::SpecialDefense),
            "speed" => Ok(Self::Speed),
            _ => Err(DomainError::unknown_stat(s)),
        }
    }
}

/// Fixed block of the six canonical stats.
///
/// Every stat is either a finite number or absent. There is no room for extra
/// keys, so the serialized form always carries exactly six entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    #[serde(default)]
    hp: Option<f64>,
    #[serde(default)]
    attack: Option<f64>,
    #[serde(default)]
    defense: Option<f64>,
    #[serde(default, rename = "special-attack")]
    special_attack: Option<f64>,
    #[serde(default, rename = "special-defense")]
    special_defense: Option<f64>,
    #[serde(default)]
    speed: Option<f64>,
}

impl StatBlock {
    /// A block with every stat absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stat(mut self, kind: StatKind, value: f64) -> Self {
        self.set(kind, value);
        self
    }

    pub fn get(&self, kind: StatKind) -> Option<f64> {
        *self.slot(kind)
    }

    /// Set a stat, replacing any previous value.
    ///
    /// Non-finite values are ignored and leave the slot untouched.
    pub fn set(&mut self, kind: StatKind, value: f64) {
        if value.is_finite() {
            *self.slot_mut(kind) = Some(value);
        }
    }

    /// Iterate all six stats in display order, absent ones included.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, Option<f64>)> + '_ {
        StatKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// True when no stat is present.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_none())
    }

    fn slot(&self, kind: StatKind) -> &Option<f64> {
        match kind {
            StatKind::Hp => &self.hp,
            StatKind::Attack => &self.attack,
            StatKind::Defense => &self.defense,
            StatKind::SpecialAttack => &self.special_attack,
            StatKind::SpecialDefense => &self.special_defense,
            StatKind::Speed => &self.speed,
        }
    }

    fn slot_mut(&mut self, kind: StatKind) -> &mut Option<f64> {
        match kind {
            StatKind::Hp => &mut self.hp,
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::SpecialAttack => &mut self.special_attack,
            StatKind::SpecialDefense => &mut self.special_defense,
            StatKind::Speed => &mut self.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_kind_from_str() {
        assert_eq!(StatKind::from_str("hp").ok(), Some(StatKind::Hp));
        assert_eq!(StatKind::from_str("HP").ok(), Some(StatKind::Hp));
        assert_eq!(
            StatKind::from_str("special-defense").ok(),
            Some(StatKind::SpecialDefense)
        );
        assert!(matches!(
            StatKind::from_str("luck"),
            Err(DomainError::UnknownStat(name)) if name == "luck"
        ));
    }

    #[test]
    fn test_stat_kind_roundtrips_through_as_str() {
        for kind in StatKind::ALL {
            assert_eq!(StatKind::from_str(kind.as_str()).ok(), Some(kind));
        }
    }

    #[test]
    fn test_stat_kind_display_names() {
        let labels: Vec<_> = StatKind::ALL.iter().map(StatKind::display_name).collect();
        assert_eq!(
            labels,
            ["HP", "Attack", "Defense", "Sp. Attack", "Sp. Defense", "Speed"]
        );
    }

    #[test]
    fn test_new_block_is_all_absent() {
        let block = StatBlock::new();
        assert!(block.is_empty());
        assert_eq!(block.iter().count(), 6);
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let mut block = StatBlock::new().with_stat(StatKind::Speed, 10.0);
        block.set(StatKind::Speed, 45.0);
        assert_eq!(block.get(StatKind::Speed), Some(45.0));
    }

    #[test]
    fn test_set_ignores_non_finite() {
        let mut block = StatBlock::new().with_stat(StatKind::Attack, 12.0);
        block.set(StatKind::Attack, f64::NAN);
        block.set(StatKind::Defense, f64::INFINITY);
        assert_eq!(block.get(StatKind::Attack), Some(12.0));
        assert_eq!(block.get(StatKind::Defense), None);
    }

    #[test]
    fn test_serializes_exactly_six_canonical_keys() {
        let block = StatBlock::new().with_stat(StatKind::SpecialAttack, 70.0);
        let json = serde_json::to_value(block).expect("serialize");
        let object = json.as_object().expect("object");

        assert_eq!(object.len(), 6);
        assert_eq!(object["special-attack"], serde_json::json!(70.0));
        assert!(object["hp"].is_null());
    }
}

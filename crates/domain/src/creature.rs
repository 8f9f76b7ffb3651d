//! Creature record - the strict, display-ready shape of a single catalog creature.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::stats::StatBlock;

/// A creature's special ability. At least one of its parts is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SpecialAbilityData")]
pub struct SpecialAbility {
    name: String,
    description: String,
}

impl SpecialAbility {
    /// Build an ability from its parts, or `None` when both are empty.
    pub fn from_parts(name: impl Into<String>, description: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let description = description.into();
        if name.is_empty() && description.is_empty() {
            None
        } else {
            Some(Self { name, description })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Wire shape of [`SpecialAbility`] before validation.
#[derive(Debug, Deserialize)]
struct SpecialAbilityData {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
}

impl TryFrom<SpecialAbilityData> for SpecialAbility {
    type Error = DomainError;

    fn try_from(data: SpecialAbilityData) -> Result<Self, Self::Error> {
        Self::from_parts(data.name, data.description).ok_or(DomainError::EmptySpecialAbility)
    }
}

/// Normalized creature, ready for a renderer.
///
/// Absent numeric fields are `None`; the consumer decides how to show them.
/// Built fresh for every lookup and never mutated afterwards. Deserialization
/// goes through the builders, so stored records obey the same rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CreatureRecordData")]
pub struct CreatureRecord {
    name: String,
    id: Option<i64>,
    weight: Option<f64>,
    height: Option<f64>,
    types: Vec<String>,
    stats: StatBlock,
    special: Option<SpecialAbility>,
}

impl CreatureRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: Option<i64>) -> Self {
        self.id = id;
        self
    }

    pub fn with_weight(mut self, weight: Option<f64>) -> Self {
        self.weight = weight.filter(|w| w.is_finite());
        self
    }

    pub fn with_height(mut self, height: Option<f64>) -> Self {
        self.height = height.filter(|h| h.is_finite());
        self
    }

    /// Set the type list, dropping empty names and keeping order.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| !t.is_empty())
            .collect();
        self
    }

    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_special(mut self, special: Option<SpecialAbility>) -> Self {
        self.special = special;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upper-cased name for headings, or `None` when the name is empty.
    pub fn display_name(&self) -> Option<String> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name.to_uppercase())
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn special(&self) -> Option<&SpecialAbility> {
        self.special.as_ref()
    }
}

/// Wire shape of [`CreatureRecord`] before the builders clean it up.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CreatureRecordData {
    name: String,
    id: Option<i64>,
    weight: Option<f64>,
    height: Option<f64>,
    types: Vec<String>,
    stats: StatBlock,
    special: Option<SpecialAbilityData>,
}

impl From<CreatureRecordData> for CreatureRecord {
    fn from(data: CreatureRecordData) -> Self {
        let special = data
            .special
            .and_then(|s| SpecialAbility::from_parts(s.name, s.description));

        Self::new(data.name)
            .with_id(data.id)
            .with_weight(data.weight)
            .with_height(data.height)
            .with_types(data.types)
            .with_stats(data.stats)
            .with_special(special)
    }
}

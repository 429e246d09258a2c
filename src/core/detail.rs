//! Per-monster detail record from the SRD API.
//!
//! Only consumed by the CLI `show` command. Several fields changed shape across
//! API revisions, so they are modeled as sum types rather than loose JSON.

use serde::{Deserialize, Serialize};

use crate::core::types::{MonsterId, Size};

/// Detail record for a single monster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterDetail {
    pub index: MonsterId,
    pub name: String,
    pub size: Size,

    #[serde(rename = "type")]
    pub creature_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,

    #[serde(default)]
    pub alignment: String,

    pub armor_class: ArmorClassField,
    pub hit_points: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit_dice: Option<String>,

    /// Fractional below 1 (`0.125`, `0.25`, `0.5`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp: Option<u32>,

    #[serde(default)]
    pub condition_immunities: Vec<ConditionImmunity>,

    #[serde(default)]
    pub damage_immunities: Vec<String>,

    /// API-relative path of the artwork
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Armor class: a bare number in older payloads, a list of sources in newer ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArmorClassField {
    Flat(u32),
    Detailed(Vec<ArmorClass>),
}

impl ArmorClassField {
    /// Highest armor class value, if any is listed
    #[must_use]
    pub fn best(&self) -> Option<u32> {
        match self {
            Self::Flat(value) => Some(*value),
            Self::Detailed(list) => list.iter().map(|ac| ac.value).max(),
        }
    }
}

impl std::fmt::Display for ArmorClassField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat(value) => write!(f, "{value}"),
            Self::Detailed(list) if list.is_empty() => write!(f, "-"),
            Self::Detailed(list) => {
                let parts: Vec<String> = list
                    .iter()
                    .map(|ac| match &ac.kind {
                        Some(kind) => format!("{} ({kind})", ac.value),
                        None => ac.value.to_string(),
                    })
                    .collect();
                write!(f, "{}", parts.join(", "))
            }
        }
    }
}

/// One armor class source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorClass {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub value: u32,
}

/// Condition immunity: a reference object, or a bare name in older payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionImmunity {
    Reference {
        index: String,
        name: String,
        url: String,
    },
    Name(String),
}

impl ConditionImmunity {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Reference { name, .. } | Self::Name(name) => name,
        }
    }
}

impl MonsterDetail {
    /// Challenge rating in the usual tabletop notation (`1/4`, `5`)
    #[must_use]
    pub fn challenge_label(&self) -> Option<String> {
        let cr = self.challenge_rating?;
        let label = if (cr - 0.125).abs() < f64::EPSILON {
            "1/8".to_string()
        } else if (cr - 0.25).abs() < f64::EPSILON {
            "1/4".to_string()
        } else if (cr - 0.5).abs() < f64::EPSILON {
            "1/2".to_string()
        } else {
            format!("{cr}")
        };
        Some(label)
    }
}

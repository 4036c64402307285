use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::labels;

/// Accent used for entries that do not carry their own color.
pub const DEFAULT_ACCENT: &str = "#e67e22";

/// Stable identifier of a catalog entry; ascending order is catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        EntryId(value)
    }
}

/// Star rating as shipped in the data file: either a number or a display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StarRating {
    Count(i64),
    Text(String),
}

impl Default for StarRating {
    fn default() -> Self {
        StarRating::Text(String::new())
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarRating::Count(count) => write!(f, "★{count}"),
            StarRating::Text(text) => write!(f, "★{text}"),
        }
    }
}

/// The fixed attribute table shown in the basic-info panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAttributes {
    #[serde(
        rename = "도감번호",
        alias = "catalogNumber",
        default,
        deserialize_with = "lenient_text"
    )]
    pub catalog_number: Option<String>,
    #[serde(rename = "이름", alias = "name", default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(rename = "희귀도", alias = "rarity", default, deserialize_with = "lenient_text")]
    pub rarity: Option<String>,
    #[serde(
        rename = "일반패턴",
        alias = "normalPattern",
        default,
        deserialize_with = "lenient_text"
    )]
    pub normal_pattern: Option<String>,
    #[serde(
        rename = "분노패턴",
        alias = "ragePattern",
        default,
        deserialize_with = "lenient_text"
    )]
    pub rage_pattern: Option<String>,
    #[serde(
        rename = "특수패턴1",
        alias = "specialPattern1",
        default,
        deserialize_with = "lenient_text"
    )]
    pub special_pattern_1: Option<String>,
    #[serde(
        rename = "특수패턴2",
        alias = "specialPattern2",
        default,
        deserialize_with = "lenient_text"
    )]
    pub special_pattern_2: Option<String>,
    #[serde(
        rename = "main_attack_element",
        alias = "mainAttackElement",
        default,
        deserialize_with = "lenient_text"
    )]
    pub attack_element: Option<String>,
    #[serde(
        rename = "weakness_element",
        alias = "weaknessElement",
        default,
        deserialize_with = "lenient_text"
    )]
    pub weakness_element: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(
        rename = "guide",
        alias = "guideLines",
        default,
        deserialize_with = "nullable_lines"
    )]
    pub guide_lines: Vec<String>,
}

/// One catalog record. Entries are never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    #[serde(rename = "star", alias = "starRating", default)]
    pub star: StarRating,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "color", alias = "colorCode", default)]
    pub color: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "basic", alias = "basicAttributes", default)]
    pub basic: BasicAttributes,
    #[serde(default)]
    pub detail: Detail,
}

impl Entry {
    /// Label used by list rows and cards: `"<id>. <name>"`.
    pub fn list_label(&self) -> String {
        format!("{}. {}", self.id, self.name)
    }

    pub fn species_label(&self) -> &str {
        non_blank(self.species.as_deref()).unwrap_or(labels::UNKNOWN)
    }

    pub fn location_label(&self) -> &str {
        non_blank(self.location.as_deref()).unwrap_or(labels::UNKNOWN)
    }

    pub fn color_code(&self) -> &str {
        non_blank(self.color.as_deref()).unwrap_or(DEFAULT_ACCENT)
    }

    pub fn detail_title(&self) -> &str {
        non_blank(self.detail.title.as_deref()).unwrap_or(labels::DETAIL_TITLE)
    }

    /// Ordered rows for the basic-info panel; missing values carry their fallback.
    pub fn basic_rows(&self) -> IndexMap<&'static str, String> {
        let basic = &self.basic;
        let attribute = |value: &Option<String>| {
            non_blank(value.as_deref())
                .unwrap_or(labels::NOT_AVAILABLE)
                .to_string()
        };

        let mut rows = IndexMap::new();
        rows.insert(labels::ATTR_CATALOG_NUMBER, attribute(&basic.catalog_number));
        rows.insert(labels::ATTR_NAME, attribute(&basic.name));
        rows.insert(labels::ATTR_SPECIES, self.species_label().to_string());
        rows.insert(labels::ATTR_RARITY, attribute(&basic.rarity));
        rows.insert(labels::ATTR_LOCATION, self.location_label().to_string());
        rows.insert(labels::ATTR_NORMAL_PATTERN, attribute(&basic.normal_pattern));
        rows.insert(labels::ATTR_RAGE_PATTERN, attribute(&basic.rage_pattern));
        rows.insert(labels::ATTR_SPECIAL_PATTERN_1, attribute(&basic.special_pattern_1));
        rows.insert(labels::ATTR_SPECIAL_PATTERN_2, attribute(&basic.special_pattern_2));
        rows.insert(labels::ATTR_ATTACK_ELEMENT, attribute(&basic.attack_element));
        rows.insert(labels::ATTR_WEAKNESS_ELEMENT, attribute(&basic.weakness_element));
        rows
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

fn nullable_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

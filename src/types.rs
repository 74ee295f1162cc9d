//! Entity template data model
//!
//! Mirrors the Wikibase entity-creation schema: labels, descriptions and
//! aliases keyed by language code, plus claims keyed by property id.
//!
//! Reference: https://www.wikidata.org/wiki/Help:Wikidata_datamodel

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TemplateResult;
use crate::ids;

/// Language code → text
pub type LanguageMap = BTreeMap<String, String>;

/// Language code → ordered alias list
pub type AliasMap = BTreeMap<String, Vec<String>>;

/// Entity creation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTemplate {
    pub labels: LanguageMap,
    pub descriptions: LanguageMap,
    pub aliases: AliasMap,
    pub claims: Claims,
}

impl EntityTemplate {
    /// Label in the given language
    pub fn label(&self, language: &str) -> Option<&str> {
        self.labels.get(language).map(|s| s.as_str())
    }

    /// Description in the given language
    pub fn description(&self, language: &str) -> Option<&str> {
        self.descriptions.get(language).map(|s| s.as_str())
    }

    /// Aliases in the given language (empty if none)
    pub fn aliases_for(&self, language: &str) -> &[String] {
        self.aliases
            .get(language)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Property ids carried by this template, in serialisation order
    pub fn property_ids(&self) -> Vec<&'static str> {
        let mut ids = vec![ids::INSTANCE_OF, ids::INCEPTION, ids::SHORT_NAME, ids::TITLE];
        if self.claims.official_website.is_some() {
            ids.push(ids::OFFICIAL_WEBSITE);
        }
        ids
    }

    /// Serialise to compact JSON
    pub fn to_json(&self) -> TemplateResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialise to pretty-printed JSON
    pub fn to_json_pretty(&self) -> TemplateResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialise to a JSON value
    pub fn to_value(&self) -> TemplateResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parse a payload previously produced by `to_json`
    pub fn from_json(json: &str) -> TemplateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Claims of a conference series entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// P31 - instance of
    #[serde(rename = "P31")]
    pub instance_of: String,

    /// P571 - inception
    #[serde(rename = "P571")]
    pub inception: InceptionClaim,

    /// P1813 - short name
    #[serde(rename = "P1813")]
    pub short_name: MonolingualText,

    /// P1476 - title
    #[serde(rename = "P1476")]
    pub title: TitleClaim,

    /// P856 - official website
    #[serde(rename = "P856", default, skip_serializing_if = "Option::is_none")]
    pub official_website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InceptionClaim {
    pub value: TimeValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleClaim {
    pub value: MonolingualText,
}

/// Wikibase time value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    pub time: String,
    pub timezone: i32,
    pub before: u32,
    pub after: u32,
    pub precision: u8,
    pub calendarmodel: String,
}

impl TimeValue {
    /// Gregorian time value with zero offset and zero tolerance
    pub fn gregorian(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            timezone: 0,
            before: 0,
            after: 0,
            precision: ids::DAY_PRECISION,
            calendarmodel: ids::GREGORIAN_CALENDAR.to_string(),
        }
    }
}

/// Language-tagged text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonolingualText {
    pub text: String,
    pub language: String,
}

impl MonolingualText {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }

    /// English text
    pub fn english(text: impl Into<String>) -> Self {
        Self::new(text, ids::DEFAULT_LANGUAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> EntityTemplate {
        EntityTemplate {
            labels: LanguageMap::from([("en".to_string(), "ISWC".to_string())]),
            descriptions: LanguageMap::from([(
                "en".to_string(),
                "International Semantic Web Conference".to_string(),
            )]),
            aliases: AliasMap::from([("en".to_string(), vec!["ISWC".to_string()])]),
            claims: Claims {
                instance_of: ids::SCIENTIFIC_CONFERENCE_SERIES.to_string(),
                inception: InceptionClaim {
                    value: TimeValue::gregorian("+2002-00-00T00:00:00Z"),
                },
                short_name: MonolingualText::english("ISWC"),
                title: TitleClaim {
                    value: MonolingualText::english("ISWC"),
                },
                official_website: None,
            },
        }
    }

    #[test]
    fn test_time_value_fixed_metadata() {
        let value = serde_json::to_value(TimeValue::gregorian("+1999-01-01T00:00:00Z")).unwrap();
        assert_eq!(
            value,
            json!({
                "time": "+1999-01-01T00:00:00Z",
                "timezone": 0,
                "before": 0,
                "after": 0,
                "precision": 9,
                "calendarmodel": "http://www.wikidata.org/entity/Q1985727"
            })
        );
    }

    #[test]
    fn test_claim_keys_are_property_ids() {
        let value = sample().to_value().unwrap();
        let claims = value["claims"].as_object().unwrap();
        let mut keys: Vec<_> = claims.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["P1476", "P1813", "P31", "P571"]);
    }

    #[test]
    fn test_official_website_serialised_when_present() {
        let mut template = sample();
        assert_eq!(template.property_ids().len(), 4);

        template.claims.official_website = Some("https://iswc.semanticweb.org".to_string());
        let value = template.to_value().unwrap();
        assert_eq!(value["claims"]["P856"], "https://iswc.semanticweb.org");
        assert_eq!(template.property_ids().last(), Some(&"P856"));
    }

    #[test]
    fn test_from_json_reads_payload() {
        let template = sample();
        let parsed = EntityTemplate::from_json(&template.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed.label("en"), Some("ISWC"));
        assert_eq!(parsed.claims.official_website, None);
        assert_eq!(parsed.aliases_for("de"), &[] as &[String]);
    }
}

//! Event Series Template Builder
//!
//! Maps title, description, acronym and inception onto the conference series
//! entity template. Constants (P31 value, calendar model, precision) are
//! fixed; only the four inputs vary.

use serde::{Deserialize, Serialize};

use crate::config::TemplateConfig;
use crate::error::TemplateResult;
use crate::ids;
use crate::types::{
    AliasMap, Claims, EntityTemplate, InceptionClaim, LanguageMap, MonolingualText, TimeValue,
    TitleClaim,
};

/// Build the entity template for a scientific conference series
///
/// Never fails and performs no validation: every input lands in the record
/// verbatim. Use [`EventSeriesBuilder`] for checked construction.
pub fn build_event_series_record(
    title: &str,
    description: &str,
    acronym: &str,
    inception: &str,
) -> EntityTemplate {
    let input = EventSeriesInput::new(title, description, acronym, inception);
    render(&input, None)
}

/// Caller-supplied values for one conference series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSeriesInput {
    pub title: String,
    pub description: String,
    pub acronym: String,
    /// Wikibase time string, e.g. `+2017-00-00T00:00:00Z`
    pub inception: String,
    #[serde(default)]
    pub homepage: Option<String>,
}

impl EventSeriesInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        acronym: impl Into<String>,
        inception: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            acronym: acronym.into(),
            inception: inception.into(),
            homepage: None,
        }
    }

    /// Attach an official website
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }
}

/// Checked template construction
///
/// Applies the configured [`ValidationMode`](crate::ValidationMode) before
/// rendering. With the default config the output is identical to
/// [`build_event_series_record`].
#[derive(Debug, Clone, Default)]
pub struct EventSeriesBuilder {
    config: TemplateConfig,
}

impl EventSeriesBuilder {
    pub fn new(config: TemplateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Validate and render one input
    pub fn build(&self, input: &EventSeriesInput) -> TemplateResult<EntityTemplate> {
        if let Err(e) = self.config.validation.check(input) {
            tracing::warn!(
                acronym = %input.acronym,
                mode = %self.config.validation,
                "Rejected event series input: {}",
                e
            );
            return Err(e);
        }

        let homepage = if self.config.include_homepage {
            input.homepage.as_deref()
        } else {
            None
        };
        let template = render(input, homepage);

        tracing::debug!(
            acronym = %input.acronym,
            inception = %input.inception,
            claims = template.property_ids().len(),
            "Built event series template"
        );
        Ok(template)
    }

    /// Validate and render straight to JSON
    pub fn build_json(&self, input: &EventSeriesInput) -> TemplateResult<String> {
        self.build(input)?.to_json()
    }

    /// Render a batch, stopping at the first rejected input
    pub fn build_all(&self, inputs: &[EventSeriesInput]) -> TemplateResult<Vec<EntityTemplate>> {
        inputs.iter().map(|input| self.build(input)).collect()
    }
}

fn render(input: &EventSeriesInput, homepage: Option<&str>) -> EntityTemplate {
    let lang = ids::DEFAULT_LANGUAGE.to_string();

    EntityTemplate {
        labels: LanguageMap::from([(lang.clone(), input.title.clone())]),
        descriptions: LanguageMap::from([(lang.clone(), input.description.clone())]),
        aliases: AliasMap::from([(lang, vec![input.acronym.clone()])]),
        claims: Claims {
            instance_of: ids::SCIENTIFIC_CONFERENCE_SERIES.to_string(),
            inception: InceptionClaim {
                value: TimeValue::gregorian(input.inception.clone()),
            },
            short_name: MonolingualText::english(input.acronym.clone()),
            title: TitleClaim {
                value: MonolingualText::english(input.title.clone()),
            },
            official_website: homepage.map(|h| h.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;
    use crate::validation::ValidationMode;
    use serde_json::json;

    fn wikidatacon() -> EntityTemplate {
        build_event_series_record(
            "WikidataCon",
            "Wikidata community conference",
            "WDCon",
            "+2017-00-00T00:00:00Z",
        )
    }

    #[test]
    fn test_exact_payload_shape() {
        let value = wikidatacon().to_value().unwrap();

        assert_eq!(
            value,
            json!({
                "labels": { "en": "WikidataCon" },
                "descriptions": { "en": "Wikidata community conference" },
                "aliases": { "en": ["WDCon"] },
                "claims": {
                    "P31": "Q47258130",
                    "P571": { "value": {
                        "time": "+2017-00-00T00:00:00Z",
                        "timezone": 0,
                        "before": 0,
                        "after": 0,
                        "precision": 9,
                        "calendarmodel": "http://www.wikidata.org/entity/Q1985727"
                    } },
                    "P1813": { "text": "WDCon", "language": "en" },
                    "P1476": { "value": { "text": "WikidataCon", "language": "en" } }
                }
            })
        );
    }

    #[test]
    fn test_inputs_pass_through_unexamined() {
        let record = build_event_series_record("", "", "", "yesterday");
        assert_eq!(record.label("en"), Some(""));
        assert_eq!(record.aliases_for("en"), &["".to_string()]);
        assert_eq!(record.claims.inception.value.time, "yesterday");
        assert_eq!(record.claims.instance_of, "Q47258130");
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let first = wikidatacon();
        let mut second = wikidatacon();
        assert_eq!(first, second);

        second.aliases.get_mut("en").unwrap().push("WCon".to_string());
        second.claims.inception.value.time = "+2019-00-00T00:00:00Z".to_string();

        assert_eq!(first.aliases_for("en"), &["WDCon".to_string()]);
        assert_eq!(first.claims.inception.value.time, "+2017-00-00T00:00:00Z");
    }

    #[test]
    fn test_default_builder_matches_plain_function() {
        let input = EventSeriesInput::new(
            "WikidataCon",
            "Wikidata community conference",
            "WDCon",
            "+2017-00-00T00:00:00Z",
        );
        let built = EventSeriesBuilder::default().build(&input).unwrap();
        assert_eq!(built, wikidatacon());
    }

    #[test]
    fn test_homepage_claim() {
        let input = EventSeriesInput::new(
            "Semantics",
            "conference series",
            "SEMANTiCS",
            "+2005-00-00T00:00:00Z",
        )
        .with_homepage("https://semantics.cc");

        let built = EventSeriesBuilder::default().build(&input).unwrap();
        assert_eq!(
            built.claims.official_website.as_deref(),
            Some("https://semantics.cc")
        );

        let config = TemplateConfig {
            include_homepage: false,
            ..Default::default()
        };
        let builder = EventSeriesBuilder::new(config);
        assert!(!builder.config().include_homepage);
        assert_eq!(builder.config().validation, ValidationMode::Lenient);

        let built = builder.build(&input).unwrap();
        assert_eq!(built.claims.official_website, None);
    }

    #[test]
    fn test_strict_builder_rejects_empty_title() {
        let builder =
            EventSeriesBuilder::new(TemplateConfig::with_validation(ValidationMode::Strict));
        let input = EventSeriesInput::new("", "desc", "X", "+2017-00-00T00:00:00Z");

        let err = builder.build(&input).unwrap_err();
        assert!(matches!(err, TemplateError::InvalidInput { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_build_all_stops_at_first_error() {
        let builder =
            EventSeriesBuilder::new(TemplateConfig::with_validation(ValidationMode::Schema));
        let inputs = vec![
            EventSeriesInput::new("ISWC", "", "ISWC", "+2002-00-00T00:00:00Z"),
            EventSeriesInput::new("ESWC", "", "ESWC", "2004"),
        ];
        let err = builder.build_all(&inputs).unwrap_err();
        assert_eq!(err.field(), Some("inception"));

        let built = builder.build_all(&inputs[..1]).unwrap();
        assert_eq!(built.len(), 1);
    }

    #[test]
    fn test_input_deserialises_without_homepage() {
        let input: EventSeriesInput = serde_json::from_value(json!({
            "title": "ISWC",
            "description": "International Semantic Web Conference",
            "acronym": "ISWC",
            "inception": "+2002-00-00T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(input.homepage, None);

        let json = EventSeriesBuilder::default().build_json(&input).unwrap();
        assert!(json.contains("\"P31\":\"Q47258130\""));
    }
}

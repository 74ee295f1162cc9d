//! Wikibase Entity Templates for Scientific Conference Series
//!
//! Builds the entity-creation payload a knowledge-base import pipeline submits
//! for a "scientific conference series" item. The payload is a fixed-shape
//! template: labels, descriptions, aliases and four claims.
//!
//! Key concepts:
//! - The template is pure data - no network, no persistence, no global state
//! - `build_event_series_record` passes every input through unexamined
//! - `EventSeriesBuilder` adds opt-in boundary validation via `TemplateConfig`
//!
//! # Example
//!
//! ```
//! use event_series_templates::build_event_series_record;
//!
//! let record = build_event_series_record(
//!     "WikidataCon",
//!     "Wikidata community conference",
//!     "WDCon",
//!     "+2017-00-00T00:00:00Z",
//! );
//!
//! assert_eq!(record.aliases["en"], vec!["WDCon".to_string()]);
//! assert_eq!(record.claims.inception.value.time, "+2017-00-00T00:00:00Z");
//! ```
//!
//! Serialised, the record looks like:
//!
//! ```json
//! {
//!   "labels": { "en": "WikidataCon" },
//!   "descriptions": { "en": "Wikidata community conference" },
//!   "aliases": { "en": ["WDCon"] },
//!   "claims": {
//!     "P31": "Q47258130",
//!     "P571": { "value": { "time": "+2017-00-00T00:00:00Z", "timezone": 0, "before": 0,
//!                          "after": 0, "precision": 9,
//!                          "calendarmodel": "http://www.wikidata.org/entity/Q1985727" } },
//!     "P1813": { "text": "WDCon", "language": "en" },
//!     "P1476": { "value": { "text": "WikidataCon", "language": "en" } }
//!   }
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod ids;
pub mod mapping;
pub mod query;
pub mod time;
pub mod types;
pub mod validation;

pub use builder::{build_event_series_record, EventSeriesBuilder, EventSeriesInput};
pub use config::TemplateConfig;
pub use error::{TemplateError, TemplateResult};
pub use mapping::{EntityKind, PropertyMapping, ValueType};
pub use query::{event_series_query, parse_event_series_results, EventSeriesRow};
pub use types::{Claims, EntityTemplate, InceptionClaim, MonolingualText, TimeValue, TitleClaim};
pub use validation::ValidationMode;

//! Wikidata property mappings for scholarly event metadata
//!
//! Maps spreadsheet/import columns onto Wikidata properties for the three
//! entity kinds an event import touches: event series, single events and
//! their proceedings. Rows without a column carry a fixed value (the P31
//! class of the entity kind).

use serde::Serialize;

use crate::ids;
use EntityKind::{Event, EventSeries, Proceedings};

/// Kind of entity a mapping row applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    EventSeries,
    Event,
    Proceedings,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::EventSeries => "Event series",
            EntityKind::Event => "Event",
            EntityKind::Proceedings => "Proceedings",
        }
    }
}

/// Value type of a mapped property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Monolingual text
    Text,
    /// Plain string
    String,
    Url,
    Date,
    /// External identifier
    ExternalId,
    /// Reference to another item
    Item,
}

/// One column → property mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyMapping {
    pub entity: EntityKind,
    /// Source column; `None` for fixed-value rows
    pub column: Option<&'static str>,
    pub property_name: &'static str,
    pub property_id: &'static str,
    pub value_type: ValueType,
    /// Constant item value (only for fixed rows)
    pub fixed_value: Option<&'static str>,
    /// Class the referenced item must be an instance of
    pub lookup: Option<&'static str>,
    /// Property this row qualifies
    pub qualifier: Option<&'static str>,
}

impl PropertyMapping {
    /// Whether this row is a constant rather than a column mapping
    pub fn is_fixed(&self) -> bool {
        self.fixed_value.is_some()
    }
}

const fn fixed(entity: EntityKind, value: &'static str) -> PropertyMapping {
    PropertyMapping {
        entity,
        column: None,
        property_name: "instanceof",
        property_id: ids::INSTANCE_OF,
        value_type: ValueType::Item,
        fixed_value: Some(value),
        lookup: None,
        qualifier: None,
    }
}

const fn column(
    entity: EntityKind,
    column: &'static str,
    property_name: &'static str,
    property_id: &'static str,
    value_type: ValueType,
) -> PropertyMapping {
    PropertyMapping {
        entity,
        column: Some(column),
        property_name,
        property_id,
        value_type,
        fixed_value: None,
        lookup: None,
        qualifier: None,
    }
}

const fn item(
    entity: EntityKind,
    column: &'static str,
    property_name: &'static str,
    property_id: &'static str,
    lookup: Option<&'static str>,
) -> PropertyMapping {
    PropertyMapping {
        entity,
        column: Some(column),
        property_name,
        property_id,
        value_type: ValueType::Item,
        fixed_value: None,
        lookup,
        qualifier: None,
    }
}

static MAPPINGS: &[PropertyMapping] = &[
    // Event series
    fixed(EventSeries, ids::SCIENTIFIC_CONFERENCE_SERIES),
    column(EventSeries, "Acronym", "short name", ids::SHORT_NAME, ValueType::Text),
    column(EventSeries, "Title", "title", ids::TITLE, ValueType::Text),
    column(EventSeries, "Homepage", "official website", ids::OFFICIAL_WEBSITE, ValueType::Url),
    // Event
    fixed(Event, ids::ACADEMIC_CONFERENCE),
    item(Event, "Series", "part of the series", "P179", None),
    PropertyMapping {
        entity: Event,
        column: Some("Ordinal"),
        property_name: "series ordinal",
        property_id: "P1545",
        value_type: ValueType::String,
        fixed_value: None,
        lookup: None,
        qualifier: Some("part of the series"),
    },
    column(Event, "Acronym", "short name", ids::SHORT_NAME, ValueType::Text),
    column(Event, "Title", "title", ids::TITLE, ValueType::Text),
    item(Event, "Country", "country", "P17", Some("Q3624078")),
    item(Event, "City", "location", "P276", Some("Q515")),
    column(Event, "Start date", "start time", "P580", ValueType::Date),
    column(Event, "End date", "end time", "P582", ValueType::Date),
    column(Event, "gndId", "GND ID", "P227", ValueType::ExternalId),
    column(Event, "dblpUrl", "describedAt", "P973", ValueType::Url),
    column(Event, "Homepage", "official website", ids::OFFICIAL_WEBSITE, ValueType::Url),
    column(Event, "wikicfpId", "WikiCFP event ID", "P5124", ValueType::ExternalId),
    column(Event, "dblpId", "DBLP event ID", "P10692", ValueType::ExternalId),
    // Proceedings
    fixed(Proceedings, ids::PROCEEDINGS),
    column(Proceedings, "Acronym", "short name", ids::SHORT_NAME, ValueType::Text),
    column(Proceedings, "Title", "title", ids::TITLE, ValueType::Text),
    column(Proceedings, "OpenLibraryId", "Open Library ID", "P648", ValueType::ExternalId),
    column(Proceedings, "ppnId", "K10plus PPN ID", "P6721", ValueType::ExternalId),
    item(Proceedings, "Event", "is proceedings from", "P4745", Some(ids::ACADEMIC_CONFERENCE)),
    item(Proceedings, "publishedIn", "published in", "P1433", Some("Q39725049")),
    column(Proceedings, "oclcId", "OCLC work ID", "P5331", ValueType::ExternalId),
    column(Proceedings, "isbn13", "ISBN-13", "P212", ValueType::ExternalId),
    column(Proceedings, "doi", "DOI", "P356", ValueType::ExternalId),
    column(Proceedings, "dblpId", "DBLP event ID", "P10692", ValueType::ExternalId),
];

/// Every mapping row, grouped by entity kind
pub fn all_mappings() -> &'static [PropertyMapping] {
    MAPPINGS
}

/// Mapping rows for one entity kind, in table order
pub fn mappings_for(kind: EntityKind) -> impl Iterator<Item = &'static PropertyMapping> {
    MAPPINGS.iter().filter(move |m| m.entity == kind)
}

/// Find the row for a property of an entity kind
pub fn find_mapping(kind: EntityKind, property_id: &str) -> Option<&'static PropertyMapping> {
    mappings_for(kind).find(|m| m.property_id == property_id)
}

/// P31 class of an entity kind
pub fn instance_of(kind: EntityKind) -> Option<&'static str> {
    mappings_for(kind).find_map(|m| m.fixed_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_of_classes() {
        assert_eq!(instance_of(EntityKind::EventSeries), Some("Q47258130"));
        assert_eq!(instance_of(EntityKind::Event), Some("Q2020153"));
        assert_eq!(instance_of(EntityKind::Proceedings), Some("Q1143604"));
    }

    #[test]
    fn test_event_series_rows() {
        let ids: Vec<_> = mappings_for(EntityKind::EventSeries)
            .map(|m| m.property_id)
            .collect();
        assert_eq!(ids, vec!["P31", "P1813", "P1476", "P856"]);
    }

    #[test]
    fn test_find_mapping() {
        let ordinal = find_mapping(EntityKind::Event, "P1545").unwrap();
        assert_eq!(ordinal.column, Some("Ordinal"));
        assert_eq!(ordinal.qualifier, Some("part of the series"));

        let country = find_mapping(EntityKind::Event, "P17").unwrap();
        assert_eq!(country.lookup, Some("Q3624078"));

        assert!(find_mapping(EntityKind::EventSeries, "P17").is_none());
    }

    #[test]
    fn test_every_kind_has_exactly_one_fixed_row() {
        for kind in [EntityKind::EventSeries, EntityKind::Event, EntityKind::Proceedings] {
            let fixed: Vec<_> = mappings_for(kind).filter(|m| m.is_fixed()).collect();
            assert_eq!(fixed.len(), 1, "{}", kind.as_str());
            assert!(fixed[0].column.is_none());
        }
        assert_eq!(all_mappings().len(), 29);
    }
}
